//! Field and directive arguments.
//!
//! An argument pairs a name with either a literal [`Value`] or a reference to
//! a declared variable. References are created explicitly from a
//! [`Variable`]; there is no implicit conversion from raw values.

use crate::config::Formatting;
use crate::error::QueryBuilderError;
use crate::names::Identifier;
use crate::value::{encode_argument_value, Value};
use crate::variable::Variable;

/// The value side of an argument.
#[derive(Clone, Debug)]
pub enum ArgumentValue {
    /// A literal, encoded in place.
    Literal(Value),
    /// A reference to a declared variable, rendered as `$name`.
    Variable(Identifier),
}

impl From<Value> for ArgumentValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Literal(Value::Boolean(value))
    }
}

impl From<&Variable> for ArgumentValue {
    fn from(variable: &Variable) -> Self {
        variable.reference()
    }
}

/// A named argument of a field selection.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{Argument, Variable};
///
/// let first = Argument::literal("first", 10);
/// let id = Variable::non_null("productId", "gid://shop/Product/1").unwrap();
/// let by_id = Argument::variable("id", &id);
///
/// assert_eq!(first.name(), "first");
/// assert_eq!(by_id.name(), "id");
/// ```
#[derive(Clone, Debug)]
pub struct Argument {
    name: String,
    value: ArgumentValue,
    format_mask: Option<String>,
}

impl Argument {
    /// Creates an argument from an argument value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            format_mask: None,
        }
    }

    /// Creates an argument holding a literal value.
    #[must_use]
    pub fn literal(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, ArgumentValue::Literal(value.into()))
    }

    /// Creates an argument bound to a variable.
    ///
    /// A named variable renders as `$name`; an inline variable renders its
    /// current value using the variable's format mask.
    #[must_use]
    pub fn variable(name: impl Into<String>, variable: &Variable) -> Self {
        Self {
            name: name.into(),
            value: variable.reference(),
            format_mask: variable.format_mask().map(str::to_string),
        }
    }

    /// Sets the format mask used when the literal value is encoded.
    #[must_use]
    pub fn with_format_mask(mut self, mask: impl Into<String>) -> Self {
        self.format_mask = Some(mask.into());
        self
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument value.
    #[must_use]
    pub const fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Returns the format mask, if any.
    #[must_use]
    pub fn format_mask(&self) -> Option<&str> {
        self.format_mask.as_deref()
    }

    fn render(
        &self,
        formatting: Formatting,
        level: usize,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let value = encode_argument_value(
            &self.value,
            self.format_mask(),
            formatting,
            level,
            indentation_size,
        )?;
        Ok(format!("{}:{}{}", self.name, formatting.space(), value))
    }
}

/// Renders `(name:value,...)`, or nothing for an empty argument list.
pub(crate) fn render_argument_clause(
    arguments: &[Argument],
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    if arguments.is_empty() {
        return Ok(String::new());
    }

    let rendered = arguments
        .iter()
        .map(|argument| argument.render(formatting, level, indentation_size))
        .collect::<Result<Vec<_>, _>>()?;

    let separator = format!(",{}", formatting.space());
    Ok(format!("({})", rendered.join(&separator)))
}
