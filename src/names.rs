//! Validated name and identifier newtypes.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::QueryBuilderError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated GraphQL name.
///
/// Operation names, variable names and directive names must match
/// `^[_A-Za-z][_0-9A-Za-z]*$`. Surrounding whitespace is trimmed before
/// validation.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::Identifier;
///
/// let name = Identifier::new(" productId ").unwrap();
/// assert_eq!(name.as_ref(), "productId");
///
/// assert!(Identifier::new("product-id").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidIdentifier`] if the trimmed value is
    /// not a GraphQL name.
    pub fn new(value: impl Into<String>) -> Result<Self, QueryBuilderError> {
        let value = value.into();
        let trimmed = value.trim();

        if !Self::is_valid(trimmed) {
            return Err(QueryBuilderError::InvalidIdentifier { value });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a name known to be valid at compile time.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Self::is_valid(name));
        Self(name.to_string())
    }

    /// Returns `true` if `name` matches `[_A-Za-z][_0-9A-Za-z]*`.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
            _ => return false,
        }

        chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A GraphQL `ID` value.
///
/// IDs are opaque unique identifiers. They encode as quoted strings and
/// variables holding them infer the `ID` wire type.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::GraphQlId;
///
/// let id = GraphQlId::new("gid://shop/Product/1");
/// assert_eq!(id.as_ref(), "gid://shop/Product/1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphQlId(String);

impl GraphQlId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for GraphQlId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphQlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GraphQlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GraphQlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
