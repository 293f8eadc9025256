//! Directives attached to selections.
//!
//! A [`Directive`] renders after a selection's argument clause, for example
//! `avatar @include(if: $withAvatar)`.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{Directive, Variable};
//!
//! let with_avatar = Variable::non_null("withAvatar", true).unwrap();
//! let directive = Directive::include(&with_avatar);
//! assert_eq!(directive.name().as_ref(), "include");
//! ```

use indexmap::IndexMap;

use crate::argument::ArgumentValue;
use crate::config::Formatting;
use crate::error::QueryBuilderError;
use crate::names::Identifier;
use crate::value::encode_argument_value;

/// A named annotation with arguments.
#[derive(Clone, Debug)]
pub struct Directive {
    name: Identifier,
    arguments: IndexMap<String, ArgumentValue>,
}

impl Directive {
    /// Creates a directive without arguments.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidIdentifier`] if `name` is not a
    /// GraphQL name.
    pub fn new(name: &str) -> Result<Self, QueryBuilderError> {
        Ok(Self {
            name: Identifier::new(name)?,
            arguments: IndexMap::new(),
        })
    }

    /// `@include(if: condition)`.
    #[must_use]
    pub fn include(condition: impl Into<ArgumentValue>) -> Self {
        Self::conditional("include", condition.into())
    }

    /// `@skip(if: condition)`.
    #[must_use]
    pub fn skip(condition: impl Into<ArgumentValue>) -> Self {
        Self::conditional("skip", condition.into())
    }

    fn conditional(name: &'static str, condition: ArgumentValue) -> Self {
        let mut directive = Self {
            name: Identifier::from_static(name),
            arguments: IndexMap::new(),
        };
        directive.add_argument("if", condition);
        directive
    }

    /// Sets an argument. A later value for the same name replaces the
    /// earlier one but keeps its position.
    pub fn add_argument(&mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) {
        self.arguments.insert(name.into(), value.into());
    }

    /// Chainable form of [`Directive::add_argument`].
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.add_argument(name, value);
        self
    }

    /// Returns the directive name.
    #[must_use]
    pub const fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the arguments in insertion order.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.arguments.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn render(
        &self,
        formatting: Formatting,
        level: usize,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let mut rendered = format!("@{}", self.name);
        if self.arguments.is_empty() {
            return Ok(rendered);
        }

        let space = formatting.space();
        let arguments = self
            .arguments
            .iter()
            .map(|(name, value)| {
                encode_argument_value(value, None, formatting, level, indentation_size)
                    .map(|value| format!("{name}:{space}{value}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        rendered.push('(');
        rendered.push_str(&arguments.join(&format!(",{space}")));
        rendered.push(')');
        Ok(rendered)
    }
}

/// Renders the directives of a selection, each preceded by a space in
/// indented mode.
pub(crate) fn render_directive_clause(
    directives: &[Directive],
    formatting: Formatting,
    level: usize,
    indentation_size: u8,
) -> Result<String, QueryBuilderError> {
    let mut clause = String::new();
    for directive in directives {
        clause.push_str(formatting.space());
        clause.push_str(&directive.render(formatting, level, indentation_size)?);
    }
    Ok(clause)
}
