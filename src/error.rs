//! Error types for the query builder.
//!
//! Every fallible operation in this crate returns
//! `Result<T, QueryBuilderError>`. Errors are raised at the point of the
//! offending mutation, encode or render call and leave the builder unchanged.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{Identifier, QueryBuilderError};
//!
//! let result = Identifier::new("1st");
//! assert!(matches!(result, Err(QueryBuilderError::InvalidIdentifier { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while assembling or rendering a query document.
///
/// Each variant provides a clear, actionable error message. None of them
/// represent transient conditions: the caller is expected to fix the input
/// and repeat the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryBuilderError {
    /// An operation, variable or directive name is not a GraphQL name.
    #[error("Invalid identifier '{value}'. GraphQL names must match [_A-Za-z][_0-9A-Za-z]*.")]
    InvalidIdentifier {
        /// The rejected identifier.
        value: String,
    },

    /// A format mask was supplied for a value that cannot be formatted.
    #[error("Value of type '{value_type}' does not support the format mask '{mask}'.")]
    FormattingUnsupported {
        /// A description of the rejected value's type.
        value_type: String,
        /// The format mask that was requested.
        mask: String,
    },

    /// A format mask was accepted by the value type but could not be applied.
    #[error("Format mask '{mask}' is not a valid format for this value.")]
    InvalidFormatMask {
        /// The format mask that failed.
        mask: String,
    },

    /// A variable has no usable GraphQL type name.
    #[error("Missing GraphQL type name for variable '{variable}'. Provide an explicit type name.")]
    MissingTypeName {
        /// The variable the type name is missing for.
        variable: String,
    },

    /// A fragment was added from a node without a type to use as its type
    /// condition.
    #[error("Cannot add a fragment without a type condition. Build the fragment from a typed node.")]
    UntypedFragment,

    /// An enumeration value does not serialize to a plain member name.
    #[error("Failed to resolve the enumeration member of '{enum_type}'.")]
    EnumerationResolutionFailed {
        /// The Rust type of the enumeration.
        enum_type: &'static str,
    },

    /// A float value is NaN or infinite and has no GraphQL literal form.
    #[error("Float value '{value}' has no GraphQL literal. Only finite numbers can be encoded.")]
    NonFiniteFloat {
        /// The rejected value as text.
        value: String,
    },

    /// An inline (unnamed) variable was declared on an operation.
    #[error("Only named variables can be declared on an operation.")]
    UnnamedVariable,

    /// The operation kind string is not recognized.
    #[error("Invalid operation kind '{kind}'. Expected 'query', 'mutation' or 'subscription'.")]
    InvalidOperationKind {
        /// The rejected operation kind.
        kind: String,
    },

    /// The formatting mode string is not recognized.
    #[error("Invalid formatting '{value}'. Expected 'none', 'compact' or 'indented'.")]
    InvalidFormatting {
        /// The rejected formatting mode.
        value: String,
    },
}

/// Errors reported by a GraphQL server in a response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The response carried one or more entries in `errors`.
    #[error("GraphQL request failed: {message}")]
    Query {
        /// The error messages joined with `; `.
        message: String,
        /// The number of reported errors.
        count: usize,
    },

    /// The response had neither `data` nor `errors`.
    #[error("GraphQL response contained no data.")]
    MissingData,
}
