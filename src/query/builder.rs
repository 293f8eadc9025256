//! The fluent interface implemented by generated builder types.
//!
//! A generated builder wraps a [`QueryNode`] and names the
//! [`TypeDescriptor`] of its object type. The provided methods of
//! [`QueryBuilder`] take the builder by value and return it, so calls chain
//! while keeping the concrete builder type:
//!
//! ```rust
//! use graphql_query_builder::{
//!     FieldMetadata, QueryBuilder, QueryNode, RenderOptions, TypeDescriptor,
//! };
//!
//! static SHOP: TypeDescriptor = TypeDescriptor {
//!     type_name: "Shop",
//!     fields: &[FieldMetadata::scalar("name"), FieldMetadata::scalar("email")],
//!     fragments: &[],
//! };
//!
//! struct ShopQueryBuilder(QueryNode);
//!
//! impl QueryBuilder for ShopQueryBuilder {
//!     fn descriptor() -> &'static TypeDescriptor {
//!         &SHOP
//!     }
//!
//!     fn node(&self) -> &QueryNode {
//!         &self.0
//!     }
//!
//!     fn node_mut(&mut self) -> &mut QueryNode {
//!         &mut self.0
//!     }
//!
//!     fn into_node(self) -> QueryNode {
//!         self.0
//!     }
//! }
//!
//! let shop = ShopQueryBuilder(ShopQueryBuilder::empty_node())
//!     .with_all_fields()
//!     .except_field("email");
//! assert_eq!(shop.build(&RenderOptions::compact()).unwrap(), "{name}");
//! ```

use crate::argument::Argument;
use crate::config::RenderOptions;
use crate::directive::Directive;
use crate::error::QueryBuilderError;
use crate::query::descriptor::TypeDescriptor;
use crate::query::QueryNode;
use crate::variable::Variable;

/// A typed builder over a [`QueryNode`].
pub trait QueryBuilder: Sized {
    /// Returns the descriptor of the builder's object type.
    fn descriptor() -> &'static TypeDescriptor;

    /// Returns the wrapped node.
    fn node(&self) -> &QueryNode;

    /// Returns the wrapped node mutably.
    fn node_mut(&mut self) -> &mut QueryNode;

    /// Unwraps the node.
    fn into_node(self) -> QueryNode;

    /// Returns an empty node typed with the builder's object type.
    #[must_use]
    fn empty_node() -> QueryNode {
        QueryNode::of_type(Self::descriptor().type_name)
    }

    /// Selects every field, recursing into object fields without cycles.
    #[must_use]
    fn with_all_fields(mut self) -> Self {
        self.node_mut().include_all_fields(Self::descriptor());
        self
    }

    /// Selects every non-complex field.
    #[must_use]
    fn with_all_scalar_fields(mut self) -> Self {
        self.node_mut().include_all_scalar_fields(Self::descriptor());
        self
    }

    /// Removes a previously selected field.
    #[must_use]
    fn except_field(mut self, name: &str) -> Self {
        self.node_mut().exclude_field(name);
        self
    }

    /// Selects `__typename`.
    #[must_use]
    fn with_type_name(mut self) -> Self {
        self.node_mut().include_type_name();
        self
    }

    /// Selects a leaf field.
    #[must_use]
    fn with_scalar_field(mut self, name: &str, arguments: Vec<Argument>) -> Self {
        self.node_mut().include_scalar_field(name, arguments);
        self
    }

    /// Selects a leaf field with directives.
    #[must_use]
    fn with_scalar_field_directives(
        mut self,
        name: &str,
        arguments: Vec<Argument>,
        directives: Vec<Directive>,
    ) -> Self {
        let field = self.node_mut().include_scalar_field(name, arguments);
        for directive in directives {
            field.add_directive(directive);
        }
        self
    }

    /// Selects an object field using another builder's selection.
    #[must_use]
    fn with_object_field<B: QueryBuilder>(
        mut self,
        name: &str,
        builder: B,
        arguments: Vec<Argument>,
    ) -> Self {
        self.node_mut()
            .include_object_field(name, builder.into_node(), arguments);
        self
    }

    /// Adds a `... on Type` spread using another builder's selection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::UntypedFragment`] if the builder's node
    /// has no type name.
    fn with_fragment<B: QueryBuilder>(mut self, builder: B) -> Result<Self, QueryBuilderError> {
        self.node_mut().include_fragment(builder.into_node())?;
        Ok(self)
    }

    /// Declares a variable on the operation.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::UnnamedVariable`] for an inline variable.
    fn with_parameter(mut self, variable: Variable) -> Result<Self, QueryBuilderError> {
        self.node_mut().add_variable(variable)?;
        Ok(self)
    }

    /// Removes all selections and variables.
    fn clear(&mut self) {
        self.node_mut().clear();
    }

    /// Renders the document.
    ///
    /// # Errors
    ///
    /// See [`QueryNode::build`].
    fn build(&self, options: &RenderOptions) -> Result<String, QueryBuilderError> {
        self.node().build(options)
    }
}
