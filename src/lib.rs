//! # GraphQL Query Builder
//!
//! A client-side builder for GraphQL query documents. It assembles selections,
//! fragments, variables and directives in memory and renders them as compact or
//! indented request text.
//!
//! ## Overview
//!
//! This crate provides:
//! - A query document model via [`QueryNode`] and [`FieldCriteria`]
//! - Typed operation variables via [`Variable`] with wire type inference
//! - Literal encoding for scalars, enums, dates, lists and input objects via
//!   [`encode_value`]
//! - Directives such as `@include` and `@skip` via [`Directive`]
//! - Cycle-safe selection of every field of a type via [`TypeDescriptor`]
//! - The fluent [`QueryBuilder`] trait implemented by generated builders
//! - Request and response envelopes via [`GraphQlRequest`] and
//!   [`GraphQlResponse`]
//!
//! Sending requests is left to the caller's HTTP client.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_query_builder::{
//!     Argument, Directive, OperationKind, QueryNode, RenderOptions, Variable,
//! };
//!
//! let first = Variable::new("first", 10).unwrap();
//! let with_seo = Variable::non_null("withSeo", false).unwrap();
//!
//! let mut products = QueryNode::of_type("Product");
//! products.include_scalar_field("id", Vec::new());
//! products.include_scalar_field("title", Vec::new());
//! products
//!     .include_scalar_field("seoTitle", Vec::new())
//!     .add_directive(Directive::include(&with_seo));
//!
//! let mut root = QueryNode::operation(OperationKind::Query, "QueryRoot", Some("Products")).unwrap();
//! root.add_variable(first.clone()).unwrap();
//! root.add_variable(with_seo.clone()).unwrap();
//! root.include_object_field("products", products, vec![Argument::variable("first", &first)]);
//!
//! let document = root.build(&RenderOptions::compact()).unwrap();
//! assert_eq!(
//!     document,
//!     "query Products($first:Int=10,$withSeo:Boolean!)\
//!      {products(first:$first){id,title,seoTitle@include(if:$withSeo)}}"
//! );
//! ```
//!
//! ## Formatting
//!
//! [`RenderOptions`] selects between compact output and indented output with
//! a configurable indentation size:
//!
//! ```rust
//! use graphql_query_builder::{Formatting, QueryNode, RenderOptions};
//!
//! let mut shop = QueryNode::of_type("Shop");
//! shop.include_scalar_field("name", Vec::new());
//!
//! let options = RenderOptions::builder()
//!     .formatting(Formatting::Indented)
//!     .indentation_size(4)
//!     .build();
//! assert_eq!(shop.build(&options).unwrap(), "{\n    name\n}");
//! ```

pub mod argument;
pub mod config;
pub mod directive;
pub mod error;
pub mod names;
pub mod query;
pub mod response;
pub mod value;
pub mod variable;

// Re-export public types at crate root for convenience
pub use argument::{Argument, ArgumentValue};
pub use config::{Formatting, RenderOptions, RenderOptionsBuilder, DEFAULT_INDENTATION_SIZE};
pub use directive::Directive;
pub use error::{QueryBuilderError, ResponseError};
pub use names::{GraphQlId, Identifier};
pub use variable::{infer_type_name, Variable};

// Re-export value encoding types
pub use value::{
    encode_input_object, encode_value, CustomScalar, InputObject, InputProperty, InputValue, Value,
};

// Re-export query model types
pub use query::{
    FieldCriteria, FieldMetadata, OperationKind, QueryBuilder, QueryNode, Selection,
    TypeDescriptor, TYPE_NAME_FIELD,
};

// Re-export request and response contracts
pub use response::{ErrorLocation, GraphQlRequest, GraphQlResponse, QueryError};
