//! Operation variables.
//!
//! A [`Variable`] is a typed, optionally defaulted placeholder. Named variables
//! are declared in the operation's variable clause and referenced as `$name`;
//! inline variables have no name and are encoded as literals wherever they
//! are referenced.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{GraphQlId, Variable};
//!
//! let id = Variable::non_null("id", GraphQlId::new("42")).unwrap();
//! assert_eq!(id.type_name(), Some("ID!"));
//!
//! let first = Variable::new("first", 10).unwrap();
//! assert_eq!(first.type_name(), Some("Int"));
//! ```

use crate::argument::ArgumentValue;
use crate::config::Formatting;
use crate::error::QueryBuilderError;
use crate::names::Identifier;
use crate::value::{encode_value, InputValue, Value};

/// A typed variable with a current (default) value.
#[derive(Clone, Debug)]
pub struct Variable {
    name: Option<Identifier>,
    type_name: Option<String>,
    value: Value,
    format_mask: Option<String>,
    formattable: bool,
}

impl Variable {
    /// Creates a nullable named variable, inferring its type from `T`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidIdentifier`] if `name` is not a
    /// GraphQL name, or any error raised converting `value`.
    pub fn new<T: InputValue>(name: &str, value: T) -> Result<Self, QueryBuilderError> {
        Self::declare(name, value, true)
    }

    /// Creates a non-null named variable, inferring its type from `T`.
    ///
    /// Non-null variables carry no default value in the declaration clause.
    ///
    /// # Errors
    ///
    /// See [`Variable::new`].
    pub fn non_null<T: InputValue>(name: &str, value: T) -> Result<Self, QueryBuilderError> {
        Self::declare(name, value, false)
    }

    /// Creates a named variable, inferring its type from `T`.
    ///
    /// When `T` has no inferable type name the variable is still created, but
    /// rendering its declaration fails with
    /// [`QueryBuilderError::MissingTypeName`].
    ///
    /// # Errors
    ///
    /// See [`Variable::new`].
    pub fn declare<T: InputValue>(
        name: &str,
        value: T,
        is_nullable: bool,
    ) -> Result<Self, QueryBuilderError> {
        let name = Identifier::new(name)?;
        let type_name = infer_type_name::<T>(is_nullable);
        let formattable = T::supports_format_mask();
        let value = value.into_value()?;

        Ok(Self {
            name: Some(name),
            type_name,
            formattable: formattable || value.supports_format_mask(),
            value,
            format_mask: None,
        })
    }

    /// Creates a named variable with an explicit GraphQL type name.
    ///
    /// Whitespace inside `type_name` is removed, so `"[ ID! ]!"` becomes
    /// `"[ID!]!"`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidIdentifier`] for an invalid name and
    /// [`QueryBuilderError::MissingTypeName`] if `type_name` is empty or only
    /// whitespace.
    pub fn with_type_name<T: InputValue>(
        name: &str,
        type_name: &str,
        value: T,
    ) -> Result<Self, QueryBuilderError> {
        let name = Identifier::new(name)?;
        let type_name: String = type_name.chars().filter(|c| !c.is_whitespace()).collect();
        if type_name.is_empty() {
            return Err(QueryBuilderError::MissingTypeName {
                variable: name.to_string(),
            });
        }

        let formattable = T::supports_format_mask();
        let value = value.into_value()?;

        Ok(Self {
            name: Some(name),
            type_name: Some(type_name),
            formattable: formattable || value.supports_format_mask(),
            value,
            format_mask: None,
        })
    }

    /// Creates an inline variable: a value that is always encoded in place.
    ///
    /// # Errors
    ///
    /// Returns any error raised converting `value`.
    pub fn inline<T: InputValue>(value: T) -> Result<Self, QueryBuilderError> {
        let type_name = T::graphql_type_name();
        let formattable = T::supports_format_mask();
        let value = value.into_value()?;

        Ok(Self {
            name: None,
            type_name,
            formattable: formattable || value.supports_format_mask(),
            value,
            format_mask: None,
        })
    }

    /// Sets the format mask used when the value is encoded.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::FormattingUnsupported`] if the variable's
    /// type does not support format masks.
    pub fn with_format_mask(mut self, mask: impl Into<String>) -> Result<Self, QueryBuilderError> {
        let mask = mask.into();
        if !self.formattable {
            return Err(QueryBuilderError::FormattingUnsupported {
                value_type: self
                    .type_name
                    .clone()
                    .unwrap_or_else(|| self.value.kind_name().to_string()),
                mask,
            });
        }

        self.format_mask = Some(mask);
        Ok(self)
    }

    /// Replaces the current value, keeping name, type and format mask.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Returns the variable name, or `None` for an inline variable.
    #[must_use]
    pub const fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    /// Returns the GraphQL type name, if known.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the format mask, if any.
    #[must_use]
    pub fn format_mask(&self) -> Option<&str> {
        self.format_mask.as_deref()
    }

    /// Returns `true` if the declared type is non-null.
    #[must_use]
    pub fn is_non_null(&self) -> bool {
        self.type_name.as_deref().is_some_and(|t| t.ends_with('!'))
    }

    /// Converts the variable into an argument value.
    ///
    /// Named variables become `$name` references; inline variables become
    /// their literal value.
    #[must_use]
    pub fn reference(&self) -> ArgumentValue {
        match &self.name {
            Some(name) => ArgumentValue::Variable(name.clone()),
            None => ArgumentValue::Literal(self.value.clone()),
        }
    }

    /// Renders `$name:Type` plus `=default` for nullable types.
    pub(crate) fn render_declaration(
        &self,
        formatting: Formatting,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let name = self.name.as_ref().ok_or(QueryBuilderError::UnnamedVariable)?;
        let type_name =
            self.type_name
                .as_deref()
                .ok_or_else(|| QueryBuilderError::MissingTypeName {
                    variable: name.to_string(),
                })?;

        let space = formatting.space();
        let mut declaration = format!("${name}:{space}{type_name}");

        if !type_name.ends_with('!') {
            let default = encode_value(
                &self.value,
                self.format_mask(),
                formatting,
                0,
                indentation_size,
            )?;
            declaration.push_str(space);
            declaration.push('=');
            declaration.push_str(space);
            declaration.push_str(&default);
        }

        Ok(declaration)
    }
}

/// Infers the GraphQL type name of `T`, appending `!` for non-null types.
#[must_use]
pub fn infer_type_name<T: InputValue>(is_nullable: bool) -> Option<String> {
    T::graphql_type_name().map(|name| if is_nullable { name } else { format!("{name}!") })
}
