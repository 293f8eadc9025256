//! Runtime values that can appear as GraphQL literals.
//!
//! This module provides the [`Value`] enum, a closed set of value shapes the
//! encoder knows how to turn into protocol text, together with the
//! capabilities generated code plugs into:
//!
//! - [`InputObject`]: structured input types rendered as object literals
//! - [`CustomScalar`]: opaque scalars rendered through their `Display` text
//! - [`InputValue`]: native Rust types that can back a typed variable
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{encode_value, Formatting, Value};
//!
//! let value = Value::from(vec![1, 2, 3]);
//! let literal = encode_value(&value, None, Formatting::None, 0, 2).unwrap();
//! assert_eq!(literal, "[1,2,3]");
//! ```

mod encoder;
mod input;

pub use encoder::{encode_input_object, encode_value};
pub use input::InputValue;

pub(crate) use encoder::encode_argument_value;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::argument::ArgumentValue;
use crate::error::QueryBuilderError;
use crate::names::GraphQlId;
use crate::variable::Variable;

/// A value that can be encoded as a GraphQL literal.
///
/// Encoding precedence is documented on [`encode_value`].
#[derive(Clone, Debug)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large for `Int`.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// An opaque unique identifier.
    Id(GraphQlId),
    /// An enumeration member, already resolved to its wire name.
    Enum(String),
    /// A timestamp with an offset.
    DateTime(DateTime<FixedOffset>),
    /// A timestamp without an offset.
    NaiveDateTime(NaiveDateTime),
    /// A calendar date.
    Date(NaiveDate),
    /// A structured input object.
    Object(Vec<InputProperty>),
    /// An ordered, possibly heterogeneous list.
    List(Vec<Value>),
    /// A value of a caller-defined scalar type.
    Custom(Arc<dyn CustomScalar>),
}

// Verify Value is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};

impl Value {
    /// Resolves an enumeration member to its wire name.
    ///
    /// The wire name is the member's serde name: the `#[serde(rename = "...")]`
    /// alias when one is declared, the member's own name otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::EnumerationResolutionFailed`] if the value
    /// does not serialize to a plain string (for example a variant carrying
    /// data).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_query_builder::Value;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// enum OrderStatus {
    ///     #[serde(rename = "IN_PROGRESS")]
    ///     InProgress,
    ///     Done,
    /// }
    ///
    /// assert!(matches!(
    ///     Value::enumeration(&OrderStatus::InProgress),
    ///     Ok(Value::Enum(name)) if name == "IN_PROGRESS"
    /// ));
    /// assert!(matches!(
    ///     Value::enumeration(&OrderStatus::Done),
    ///     Ok(Value::Enum(name)) if name == "Done"
    /// ));
    /// ```
    pub fn enumeration<E: Serialize + ?Sized>(member: &E) -> Result<Self, QueryBuilderError> {
        match serde_json::to_value(member) {
            Ok(serde_json::Value::String(name)) => Ok(Self::Enum(name)),
            _ => Err(QueryBuilderError::EnumerationResolutionFailed {
                enum_type: std::any::type_name::<E>(),
            }),
        }
    }

    /// Builds an object literal value from an input object.
    #[must_use]
    pub fn input_object<T: InputObject + ?Sized>(object: &T) -> Self {
        Self::Object(object.property_values())
    }

    /// Wraps a caller-defined scalar.
    #[must_use]
    pub fn custom(scalar: impl CustomScalar + 'static) -> Self {
        Self::Custom(Arc::new(scalar))
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if a non-empty format mask may be applied to this value.
    #[must_use]
    pub fn supports_format_mask(&self) -> bool {
        match self {
            Self::DateTime(_) | Self::NaiveDateTime(_) | Self::Date(_) => true,
            Self::Custom(scalar) => scalar.supports_format_mask(),
            Self::List(items) => {
                !items.is_empty() && items.iter().all(Self::supports_format_mask)
            }
            _ => false,
        }
    }

    /// A short description of the value's shape, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) | Self::UInt(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Id(_) => "ID",
            Self::Enum(_) => "enum",
            Self::DateTime(_) | Self::NaiveDateTime(_) => "date-time",
            Self::Date(_) => "date",
            Self::Object(_) => "input object",
            Self::List(_) => "list",
            Self::Custom(_) => "custom scalar",
        }
    }
}

/// A scalar type defined outside this crate.
///
/// Custom scalars render as their quoted `Display` text. Implement
/// [`CustomScalar::format_with_mask`] to opt into format masks.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{encode_value, CustomScalar, Formatting, Value};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Url(String);
///
/// impl fmt::Display for Url {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl CustomScalar for Url {}
///
/// let value = Value::custom(Url("https://example.com".to_string()));
/// let literal = encode_value(&value, None, Formatting::None, 0, 2).unwrap();
/// assert_eq!(literal, "\"https://example.com\"");
/// ```
pub trait CustomScalar: fmt::Debug + fmt::Display + Send + Sync {
    /// Formats the value with a caller-supplied mask.
    ///
    /// Returns `None` when masks are not supported, which is the default.
    fn format_with_mask(&self, mask: &str) -> Option<String> {
        let _ = mask;
        None
    }

    /// Returns `true` if [`CustomScalar::format_with_mask`] is implemented.
    fn supports_format_mask(&self) -> bool {
        false
    }
}

/// A generated input type that renders as an object literal.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{encode_value, Formatting, InputObject, InputProperty, Value};
///
/// struct ProductFilter {
///     title: String,
///     first: i32,
/// }
///
/// impl InputObject for ProductFilter {
///     fn property_values(&self) -> Vec<InputProperty> {
///         vec![
///             InputProperty::new("title", self.title.as_str()),
///             InputProperty::new("first", self.first),
///         ]
///     }
/// }
///
/// let filter = ProductFilter { title: "Shirt".to_string(), first: 10 };
/// let literal = encode_value(&Value::input_object(&filter), None, Formatting::None, 0, 2).unwrap();
/// assert_eq!(literal, r#"{title:"Shirt",first:10}"#);
/// ```
pub trait InputObject {
    /// Returns the object's properties in declaration order.
    fn property_values(&self) -> Vec<InputProperty>;
}

/// One property of an input object literal.
#[derive(Clone, Debug)]
pub struct InputProperty {
    name: String,
    value: ArgumentValue,
    format_mask: Option<String>,
}

impl InputProperty {
    /// Creates a property holding a literal value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: ArgumentValue::Literal(value.into()),
            format_mask: None,
        }
    }

    /// Creates a property that refers to a variable.
    ///
    /// A named variable renders as `$name`; an inline variable renders its
    /// value with the variable's format mask.
    #[must_use]
    pub fn variable(name: impl Into<String>, variable: &Variable) -> Self {
        Self {
            name: name.into(),
            value: variable.reference(),
            format_mask: variable.format_mask().map(str::to_string),
        }
    }

    /// Sets the format mask applied to the property's literal value.
    #[must_use]
    pub fn with_format_mask(mut self, mask: impl Into<String>) -> Self {
        self.format_mask = Some(mask.into());
        self
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property value.
    #[must_use]
    pub const fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Returns the format mask, if any.
    #[must_use]
    pub fn format_mask(&self) -> Option<&str> {
        self.format_mask.as_deref()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })+
    };
}

impl_from_signed!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Float(value as f64), Self::from)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        // Go through the shortest decimal form so 0.1f32 stays 0.1.
        Self::Float(value.to_string().parse().unwrap_or_else(|_| f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<GraphQlId> for Value {
    fn from(value: GraphQlId) -> Self {
        Self::Id(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.into())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::NaiveDateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    enum Color {
        #[serde(rename = "DARK_RED")]
        DarkRed,
        Green,
        #[allow(dead_code)]
        Rgb(u8, u8, u8),
    }

    #[test]
    fn test_enumeration_uses_serde_alias() {
        let value = Value::enumeration(&Color::DarkRed).unwrap();
        assert!(matches!(value, Value::Enum(name) if name == "DARK_RED"));
    }

    #[test]
    fn test_enumeration_falls_back_to_member_name() {
        let value = Value::enumeration(&Color::Green).unwrap();
        assert!(matches!(value, Value::Enum(name) if name == "Green"));
    }

    #[test]
    fn test_enumeration_with_data_fails() {
        let result = Value::enumeration(&Color::Rgb(1, 2, 3));
        assert!(matches!(
            result,
            Err(QueryBuilderError::EnumerationResolutionFailed { enum_type }) if enum_type.ends_with("Color")
        ));
    }

    #[test]
    fn test_integer_conversions() {
        assert!(matches!(Value::from(7u8), Value::Int(7)));
        assert!(matches!(Value::from(-3i32), Value::Int(-3)));
        assert!(matches!(Value::from(5u64), Value::Int(5)));
        assert!(matches!(Value::from(u64::MAX), Value::UInt(u64::MAX)));
    }

    #[test]
    fn test_f32_keeps_shortest_representation() {
        assert!(matches!(Value::from(0.1f32), Value::Float(v) if v.to_string() == "0.1"));
    }

    #[test]
    fn test_option_and_vec_conversions() {
        assert!(Value::from(None::<i32>).is_null());
        assert!(matches!(Value::from(Some("a")), Value::String(s) if s == "a"));
        assert!(matches!(Value::from(vec![1, 2]), Value::List(items) if items.len() == 2));
    }

    #[test]
    fn test_supports_format_mask() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(Value::from(date).supports_format_mask());
        assert!(Value::from(vec![date]).supports_format_mask());
        assert!(!Value::from("text").supports_format_mask());
        assert!(!Value::from(42).supports_format_mask());
        assert!(!Value::from(Vec::<i32>::new()).supports_format_mask());
    }
}
