//! Native Rust types that can back a typed variable.
//!
//! [`InputValue`] maps a Rust type to its GraphQL wire type name and converts
//! an instance into a [`Value`]. Generated enum and input object types
//! implement it with their own schema names.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::QueryBuilderError;
use crate::names::GraphQlId;
use crate::value::Value;

/// A Rust type usable as the value of a [`Variable`](crate::Variable).
///
/// # Type inference
///
/// - `Option<T>` has the type name of `T` (nullability is declared separately)
/// - `Vec<T>`, `[T; N]` and `&[T]` wrap the element type name in `[...]`
/// - `bool` is `Boolean`, `f32`/`f64` are `Float`, integers are `Int`,
///   `String`/`&str` are `String` and [`GraphQlId`] is `ID`
/// - temporal types and [`Value`] itself have no inferable name; declare
///   their variables with an explicit type name
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{InputValue, QueryBuilderError, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum ProductStatus {
///     Active,
///     Archived,
/// }
///
/// impl InputValue for ProductStatus {
///     fn graphql_type_name() -> Option<String> {
///         Some("ProductStatus".to_string())
///     }
///
///     fn into_value(self) -> Result<Value, QueryBuilderError> {
///         Value::enumeration(&self)
///     }
/// }
///
/// assert_eq!(
///     Vec::<ProductStatus>::graphql_type_name().as_deref(),
///     Some("[ProductStatus]")
/// );
/// ```
pub trait InputValue {
    /// Returns the GraphQL type name of `Self`, if it can be inferred.
    fn graphql_type_name() -> Option<String>;

    /// Returns `true` if values of `Self` accept a format mask.
    fn supports_format_mask() -> bool {
        false
    }

    /// Converts the value into a [`Value`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented, such as an
    /// enumeration member that does not resolve to a name.
    fn into_value(self) -> Result<Value, QueryBuilderError>;
}

macro_rules! impl_input_value {
    ($type_name:literal => $($ty:ty),+) => {
        $(impl InputValue for $ty {
            fn graphql_type_name() -> Option<String> {
                Some($type_name.to_string())
            }

            fn into_value(self) -> Result<Value, QueryBuilderError> {
                Ok(Value::from(self))
            }
        })+
    };
}

impl_input_value!("Boolean" => bool);
impl_input_value!("Float" => f32, f64);
impl_input_value!("Int" => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_input_value!("String" => String, &str);
impl_input_value!("ID" => GraphQlId);

macro_rules! impl_temporal_input_value {
    ($($ty:ty),+) => {
        $(impl InputValue for $ty {
            fn graphql_type_name() -> Option<String> {
                None
            }

            fn supports_format_mask() -> bool {
                true
            }

            fn into_value(self) -> Result<Value, QueryBuilderError> {
                Ok(Value::from(self))
            }
        })+
    };
}

impl_temporal_input_value!(DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime, NaiveDate);

impl InputValue for Value {
    fn graphql_type_name() -> Option<String> {
        None
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        Ok(self)
    }
}

impl<T: InputValue> InputValue for Option<T> {
    fn graphql_type_name() -> Option<String> {
        T::graphql_type_name()
    }

    fn supports_format_mask() -> bool {
        T::supports_format_mask()
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        self.map_or(Ok(Value::Null), InputValue::into_value)
    }
}

impl<T: InputValue> InputValue for Vec<T> {
    fn graphql_type_name() -> Option<String> {
        list_type_name::<T>()
    }

    fn supports_format_mask() -> bool {
        T::supports_format_mask()
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        self.into_iter()
            .map(InputValue::into_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }
}

impl<T: InputValue, const N: usize> InputValue for [T; N] {
    fn graphql_type_name() -> Option<String> {
        list_type_name::<T>()
    }

    fn supports_format_mask() -> bool {
        T::supports_format_mask()
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        Vec::from(self).into_value()
    }
}

impl<T: InputValue + Clone> InputValue for &[T] {
    fn graphql_type_name() -> Option<String> {
        list_type_name::<T>()
    }

    fn supports_format_mask() -> bool {
        T::supports_format_mask()
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        self.to_vec().into_value()
    }
}

fn list_type_name<T: InputValue>() -> Option<String> {
    T::graphql_type_name().map(|item| format!("[{item}]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_type_names() {
        assert_eq!(bool::graphql_type_name().as_deref(), Some("Boolean"));
        assert_eq!(f64::graphql_type_name().as_deref(), Some("Float"));
        assert_eq!(f32::graphql_type_name().as_deref(), Some("Float"));
        assert_eq!(u16::graphql_type_name().as_deref(), Some("Int"));
        assert_eq!(i64::graphql_type_name().as_deref(), Some("Int"));
        assert_eq!(String::graphql_type_name().as_deref(), Some("String"));
        assert_eq!(<&str>::graphql_type_name().as_deref(), Some("String"));
        assert_eq!(GraphQlId::graphql_type_name().as_deref(), Some("ID"));
    }

    #[test]
    fn test_option_unwraps_to_inner_type() {
        assert_eq!(Option::<i32>::graphql_type_name().as_deref(), Some("Int"));
        assert!(matches!(None::<i32>.into_value(), Ok(Value::Null)));
    }

    #[test]
    fn test_lists_wrap_element_type() {
        assert_eq!(Vec::<GraphQlId>::graphql_type_name().as_deref(), Some("[ID]"));
        assert_eq!(<[bool; 2]>::graphql_type_name().as_deref(), Some("[Boolean]"));
        assert_eq!(<&[String]>::graphql_type_name().as_deref(), Some("[String]"));
        assert_eq!(
            Vec::<Vec<Option<i32>>>::graphql_type_name().as_deref(),
            Some("[[Int]]")
        );
    }

    #[test]
    fn test_unresolvable_types_have_no_name() {
        assert_eq!(NaiveDate::graphql_type_name(), None);
        assert_eq!(Vec::<NaiveDate>::graphql_type_name(), None);
        assert_eq!(Value::graphql_type_name(), None);
    }

    #[test]
    fn test_temporal_types_support_format_masks() {
        assert!(NaiveDate::supports_format_mask());
        assert!(Option::<DateTime<Utc>>::supports_format_mask());
        assert!(!i32::supports_format_mask());
    }

    #[test]
    fn test_list_into_value() {
        let value = [1, 2, 3].into_value().unwrap();
        assert!(matches!(value, Value::List(items) if items.len() == 3));
    }
}
