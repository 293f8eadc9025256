//! Request and response envelopes for GraphQL over JSON.
//!
//! This crate does not send requests. These types describe the JSON a
//! transport sends and receives so callers can plug a rendered document into
//! the HTTP client of their choice.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::GraphQlResponse;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Shop {
//!     name: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct ShopData {
//!     shop: Shop,
//! }
//!
//! let body = r#"{"data":{"shop":{"name":"Graphics Store"}}}"#;
//! let response: GraphQlResponse<ShopData> = serde_json::from_str(body).unwrap();
//! assert!(!response.has_errors());
//! assert_eq!(response.into_result().unwrap().shop.name, "Graphics Store");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::RenderOptions;
use crate::error::{QueryBuilderError, ResponseError};
use crate::query::QueryNode;

/// The body of a GraphQL response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GraphQlResponse<T> {
    /// The selected data, absent when execution failed before it started.
    pub data: Option<T>,
    /// Errors raised while validating or executing the operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<QueryError>,
}

impl<T> GraphQlResponse<T> {
    /// Returns `true` if the server reported at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the data, or the reported errors.
    ///
    /// Partial data accompanied by errors is treated as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Query`] if `errors` is not empty, and
    /// [`ResponseError::MissingData`] if there is no data.
    pub fn into_result(self) -> Result<T, ResponseError> {
        if self.has_errors() {
            let message = self
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ResponseError::Query {
                message,
                count: self.errors.len(),
            });
        }

        self.data.ok_or(ResponseError::MissingData)
    }
}

/// One entry of a response's `errors` list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryError {
    /// A description of the error.
    pub message: String,
    /// Positions in the document the error refers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    /// The response path of the field that failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
    /// Server-specific details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// A line and column in a query document, both starting at 1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorLocation {
    /// The line number.
    pub line: u32,
    /// The column number.
    pub column: u32,
}

/// The JSON body of a GraphQL request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GraphQlRequest {
    /// The rendered document.
    pub query: String,
    /// The operation to execute when the document holds several.
    #[serde(
        rename = "operationName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_name: Option<String>,
    /// Values for the declared variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphQlRequest {
    /// Creates a request for an already rendered document.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Renders `node` and names the request after its operation.
    ///
    /// # Errors
    ///
    /// Returns any error raised while rendering the document.
    pub fn from_node(node: &QueryNode, options: &RenderOptions) -> Result<Self, QueryBuilderError> {
        Ok(Self {
            query: node.build(options)?,
            operation_name: node.operation_name().map(ToString::to_string),
            variables: None,
        })
    }

    /// Sets the variable values sent alongside the document.
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }
}
