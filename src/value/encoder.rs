//! Encoding of [`Value`]s into GraphQL literal text.

use std::fmt::{self, Write};

use chrono::SecondsFormat;

use crate::argument::ArgumentValue;
use crate::config::{indentation, Formatting};
use crate::error::QueryBuilderError;
use crate::value::{InputProperty, Value};

/// Encodes a value as a GraphQL literal.
///
/// Rules are applied in this order:
///
/// 1. `Null` becomes `null`.
/// 2. A non-empty `format_mask` on anything but a list formats the value with
///    the mask and quotes the result. Only temporal values and custom scalars
///    that opt in support masks; numbers and enums never accept one.
/// 3. Enumeration members render their wire name unquoted.
/// 4. Booleans render `true` / `false`.
/// 5. Temporal values render as quoted ISO-8601 text.
/// 6. Input objects render as object literals, two levels deeper than `level`.
/// 7. Strings and IDs render quoted and escaped.
/// 8. Lists render as `[...]`, each element encoded with the same mask.
/// 9. Numbers render as plain numeric text.
/// 10. Custom scalars render their quoted `Display` text.
///
/// # Errors
///
/// Returns [`QueryBuilderError::FormattingUnsupported`] if a mask is given for
/// a value that cannot be formatted,
/// [`QueryBuilderError::InvalidFormatMask`] if the mask itself is malformed,
/// and [`QueryBuilderError::NonFiniteFloat`] for NaN or infinite floats.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{encode_value, Formatting, Value};
///
/// let literal = encode_value(&Value::from("O'Brien"), None, Formatting::None, 0, 2).unwrap();
/// assert_eq!(literal, "\"O'Brien\"");
/// ```
pub fn encode_value(
    value: &Value,
    format_mask: Option<&str>,
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    if value.is_null() {
        return Ok("null".to_string());
    }

    let mask = format_mask.filter(|mask| !mask.is_empty());
    if let Some(mask) = mask {
        if !matches!(value, Value::List(_)) {
            return format_masked(value, mask).map(|text| quote(&text));
        }
    }

    let literal = match value {
        Value::Null => "null".to_string(),
        Value::Enum(name) => name.clone(),
        Value::Boolean(flag) => flag.to_string(),
        Value::DateTime(timestamp) => quote(&timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        Value::NaiveDateTime(timestamp) => {
            quote(&timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
        Value::Date(date) => quote(&date.format("%Y-%m-%d").to_string()),
        Value::Object(properties) => {
            encode_input_object(properties, formatting, level + 2, indentation_size)?
        }
        Value::String(text) => quote(text),
        Value::Id(id) => quote(id.as_ref()),
        Value::List(items) => encode_list(items, mask, formatting, level, indentation_size)?,
        Value::Int(number) => number.to_string(),
        Value::UInt(number) => number.to_string(),
        Value::Float(number) => encode_float(*number)?,
        Value::Custom(scalar) => quote(&scalar.to_string()),
    };

    Ok(literal)
}

/// Encodes input object properties as an object literal.
///
/// In indented mode every property sits on its own line at `level` and the
/// closing brace at `level - 1`; in compact mode properties are separated by
/// commas. Properties referring to a named variable render as `$name`.
///
/// # Errors
///
/// Propagates encoding errors of the property values.
pub fn encode_input_object(
    properties: &[InputProperty],
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    let indented = formatting.is_indented();
    let value_separator = if indented { ": " } else { ":" };

    let mut builder = String::from("{");
    if indented {
        builder.push('\n');
    }

    let mut separator = "";
    for property in properties {
        let value = encode_argument_value(
            property.value(),
            property.format_mask(),
            formatting,
            level,
            indentation_size,
        )?;

        if indented {
            builder.push_str(&indentation(level, indentation_size));
        } else {
            builder.push_str(separator);
        }
        builder.push_str(property.name());
        builder.push_str(value_separator);
        builder.push_str(&value);

        separator = ",";

        if indented {
            builder.push('\n');
        }
    }

    if indented {
        builder.push_str(&indentation(level.saturating_sub(1), indentation_size));
    }
    builder.push('}');

    Ok(builder)
}

/// Encodes an argument value: `$name` for variable references, a literal
/// otherwise.
pub(crate) fn encode_argument_value(
    value: &ArgumentValue,
    format_mask: Option<&str>,
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    match value {
        ArgumentValue::Variable(name) => Ok(format!("${name}")),
        ArgumentValue::Literal(literal) => {
            encode_value(literal, format_mask, formatting, level, indentation_size)
        }
    }
}

fn encode_float(number: f64) -> Result<String, QueryBuilderError> {
    if number.is_finite() {
        Ok(number.to_string())
    } else {
        Err(QueryBuilderError::NonFiniteFloat {
            value: number.to_string(),
        })
    }
}

fn encode_list(
    items: &[Value],
    format_mask: Option<&str>,
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    let mut builder = String::from("[");
    let mut delimiter = "";

    for item in items {
        builder.push_str(delimiter);

        if formatting.is_indented() {
            builder.push('\n');
            builder.push_str(&indentation(level + 1, indentation_size));
        }

        builder.push_str(&encode_value(
            item,
            format_mask,
            formatting,
            level,
            indentation_size,
        )?);
        delimiter = ",";
    }

    builder.push(']');
    Ok(builder)
}

fn format_masked(value: &Value, mask: &str) -> Result<String, QueryBuilderError> {
    let formatted = match value {
        Value::DateTime(timestamp) => write_formatted(timestamp.format(mask)),
        Value::NaiveDateTime(timestamp) => write_formatted(timestamp.format(mask)),
        Value::Date(date) => write_formatted(date.format(mask)),
        Value::Custom(scalar) => {
            return scalar
                .format_with_mask(mask)
                .ok_or_else(|| unsupported(value, mask));
        }
        _ => return Err(unsupported(value, mask)),
    };

    formatted.map_err(|_| QueryBuilderError::InvalidFormatMask {
        mask: mask.to_string(),
    })
}

fn write_formatted(display: impl fmt::Display) -> Result<String, fmt::Error> {
    let mut text = String::new();
    write!(text, "{display}")?;
    Ok(text)
}

fn unsupported(value: &Value, mask: &str) -> QueryBuilderError {
    QueryBuilderError::FormattingUnsupported {
        value_type: value.kind_name().to_string(),
        mask: mask.to_string(),
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0008}' => quoted.push_str("\\b"),
            '\u{000C}' => quoted.push_str("\\f"),
            c if u32::from(c) < 0x20 => {
                let _ = write!(quoted, "\\u{:04X}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::GraphQlId;
    use crate::value::CustomScalar;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn compact(value: &Value) -> String {
        encode_value(value, None, Formatting::None, 0, 2).unwrap()
    }

    #[derive(Debug)]
    struct Money(i64);

    impl fmt::Display for Money {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
        }
    }

    impl CustomScalar for Money {
        fn format_with_mask(&self, mask: &str) -> Option<String> {
            (mask == "cents").then(|| self.0.to_string())
        }

        fn supports_format_mask(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_scalars_encode_as_literals() {
        assert_eq!(compact(&Value::Null), "null");
        assert_eq!(compact(&Value::from(true)), "true");
        assert_eq!(compact(&Value::from(false)), "false");
        assert_eq!(compact(&Value::from(-12)), "-12");
        assert_eq!(compact(&Value::from(u64::MAX)), "18446744073709551615");
        assert_eq!(compact(&Value::from(2.5)), "2.5");
        assert_eq!(compact(&Value::Enum("ACTIVE".to_string())), "ACTIVE");
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for number in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                encode_value(&Value::from(number), None, Formatting::None, 0, 2),
                Err(QueryBuilderError::NonFiniteFloat {
                    value: number.to_string()
                })
            );
        }

        let list = Value::from(vec![1.5, f64::INFINITY]);
        assert!(matches!(
            encode_value(&list, None, Formatting::None, 0, 2),
            Err(QueryBuilderError::NonFiniteFloat { value }) if value == "inf"
        ));
    }

    #[test]
    fn test_numbers_do_not_accept_format_masks() {
        assert!(matches!(
            encode_value(&Value::from(2.5), Some("0.00"), Formatting::None, 0, 2),
            Err(QueryBuilderError::FormattingUnsupported { value_type, .. }) if value_type == "Float"
        ));
    }

    #[test]
    fn test_strings_and_ids_are_quoted() {
        assert_eq!(compact(&Value::from("O'Brien")), "\"O'Brien\"");
        assert_eq!(compact(&Value::from(GraphQlId::new("abc-1"))), "\"abc-1\"");
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(
            compact(&Value::from("say \"hi\"\\\n")),
            r#""say \"hi\"\\\n""#
        );
        assert_eq!(compact(&Value::from("\u{0001}")), r#""\u0001""#);
    }

    #[test]
    fn test_temporal_values_use_iso_8601() {
        let utc: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(compact(&Value::from(utc)), "\"2024-03-09T14:05:00+00:00\"");

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(compact(&Value::from(date)), "\"2024-03-09\"");

        let naive = date.and_hms_opt(1, 2, 3).unwrap();
        assert_eq!(compact(&Value::from(naive)), "\"2024-03-09T01:02:03\"");
    }

    #[test]
    fn test_format_mask_applies_to_temporal_values() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let literal = encode_value(&Value::from(date), Some("%d/%m/%Y"), Formatting::None, 0, 2);
        assert_eq!(literal.unwrap(), "\"09/03/2024\"");
    }

    #[test]
    fn test_empty_format_mask_is_ignored() {
        let literal = encode_value(&Value::from(5), Some(""), Formatting::None, 0, 2);
        assert_eq!(literal.unwrap(), "5");
    }

    #[test]
    fn test_format_mask_on_unformattable_value_fails() {
        let result = encode_value(&Value::from("text"), Some("%Y"), Formatting::None, 0, 2);
        assert_eq!(
            result,
            Err(QueryBuilderError::FormattingUnsupported {
                value_type: "String".to_string(),
                mask: "%Y".to_string(),
            })
        );
    }

    #[test]
    fn test_format_mask_on_null_is_null() {
        let result = encode_value(&Value::Null, Some("%Y"), Formatting::None, 0, 2);
        assert_eq!(result.unwrap(), "null");
    }

    #[test]
    fn test_malformed_format_mask_fails() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let result = encode_value(&Value::from(date), Some("%!"), Formatting::None, 0, 2);
        assert!(matches!(
            result,
            Err(QueryBuilderError::InvalidFormatMask { .. })
        ));
    }

    #[test]
    fn test_format_mask_applies_to_list_elements() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        ];
        let literal = encode_value(&Value::from(dates), Some("%Y"), Formatting::None, 0, 2);
        assert_eq!(literal.unwrap(), r#"["2024","2024"]"#);
    }

    #[test]
    fn test_custom_scalar_encoding() {
        let money = Value::custom(Money(1999));
        assert_eq!(compact(&money), "\"19.99\"");
        assert_eq!(
            encode_value(&money, Some("cents"), Formatting::None, 0, 2).unwrap(),
            "\"1999\""
        );
        assert!(matches!(
            encode_value(&money, Some("other"), Formatting::None, 0, 2),
            Err(QueryBuilderError::FormattingUnsupported { .. })
        ));
    }

    #[test]
    fn test_list_encoding_compact() {
        assert_eq!(compact(&Value::from(vec![1, 2, 3])), "[1,2,3]");
        assert_eq!(compact(&Value::List(Vec::new())), "[]");

        let mixed = Value::List(vec![Value::from(1), Value::from("two"), Value::Null]);
        assert_eq!(compact(&mixed), r#"[1,"two",null]"#);
    }

    #[test]
    fn test_list_encoding_indented() {
        let literal = encode_value(&Value::from(vec![1, 2, 3]), None, Formatting::Indented, 0, 2);
        assert_eq!(literal.unwrap(), "[\n  1,\n  2,\n  3]");
    }

    #[test]
    fn test_nested_list_encoding() {
        let nested = Value::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(compact(&nested), "[[1,2],[3]]");
    }

    #[test]
    fn test_input_object_compact() {
        let object = Value::Object(vec![
            InputProperty::new("title", "Shirt"),
            InputProperty::new("tags", vec!["a", "b"]),
        ]);
        assert_eq!(compact(&object), r#"{title:"Shirt",tags:["a","b"]}"#);
    }

    #[test]
    fn test_input_object_indented() {
        let object = Value::Object(vec![
            InputProperty::new("title", "Shirt"),
            InputProperty::new("first", 5),
        ]);
        let literal = encode_value(&object, None, Formatting::Indented, 1, 2).unwrap();
        assert_eq!(literal, "{\n      title: \"Shirt\"\n      first: 5\n    }");
    }

    #[test]
    fn test_input_object_with_variable_reference() {
        let object = Value::Object(vec![InputProperty {
            name: "id".to_string(),
            value: ArgumentValue::Variable(crate::names::Identifier::new("productId").unwrap()),
            format_mask: None,
        }]);
        assert_eq!(compact(&object), "{id:$productId}");
    }

    #[test]
    fn test_empty_input_object() {
        assert_eq!(compact(&Value::Object(Vec::new())), "{}");
    }
}
