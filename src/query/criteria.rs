//! Field criteria: the selections a [`QueryNode`] holds.

use crate::argument::{render_argument_clause, Argument};
use crate::config::Formatting;
use crate::directive::{render_directive_clause, Directive};
use crate::error::QueryBuilderError;
use crate::query::QueryNode;

/// The shape of a selection.
#[derive(Clone, Debug)]
pub enum Selection {
    /// A leaf field.
    Scalar,
    /// A field with a nested selection set.
    Object(QueryNode),
    /// A `... on Type` spread with its own selection set.
    FragmentSpread(QueryNode),
}

/// One entry of a selection set.
///
/// For a fragment spread the name is the type condition.
#[derive(Clone, Debug)]
pub struct FieldCriteria {
    name: String,
    arguments: Vec<Argument>,
    directives: Vec<Directive>,
    selection: Selection,
}

impl FieldCriteria {
    pub(crate) fn scalar(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
            directives: Vec::new(),
            selection: Selection::Scalar,
        }
    }

    pub(crate) fn object(name: impl Into<String>, node: QueryNode, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
            directives: Vec::new(),
            selection: Selection::Object(node),
        }
    }

    pub(crate) fn fragment(type_condition: impl Into<String>, node: QueryNode) -> Self {
        Self {
            name: type_condition.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection: Selection::FragmentSpread(node),
        }
    }

    /// Returns the field name, or the type condition of a fragment spread.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments in the order they were given.
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Returns the attached directives.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Returns the selection shape.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the nested selection of an object field or fragment spread.
    #[must_use]
    pub const fn nested(&self) -> Option<&QueryNode> {
        match &self.selection {
            Selection::Scalar => None,
            Selection::Object(node) | Selection::FragmentSpread(node) => Some(node),
        }
    }

    /// Mutable access to the nested selection.
    pub fn nested_mut(&mut self) -> Option<&mut QueryNode> {
        match &mut self.selection {
            Selection::Scalar => None,
            Selection::Object(node) | Selection::FragmentSpread(node) => Some(node),
        }
    }

    /// Attaches a directive, rendered after the argument clause.
    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        self.directives.push(directive);
        self
    }

    /// Renders the selection, or an empty string when it would select
    /// nothing.
    pub(crate) fn render(
        &self,
        formatting: Formatting,
        level: usize,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let nested = match &self.selection {
            Selection::Object(node) if !node.has_selections() => return Ok(String::new()),
            Selection::FragmentSpread(node) if !node.has_fields() => {
                return Ok(String::new())
            }
            Selection::Scalar => None,
            Selection::Object(node) | Selection::FragmentSpread(node) => Some(node),
        };

        let mut rendered = formatting.indentation(level, indentation_size);
        if matches!(self.selection, Selection::FragmentSpread(_)) {
            rendered.push_str("...");
            rendered.push_str(formatting.space());
            rendered.push_str("on ");
        }
        rendered.push_str(&self.name);
        rendered.push_str(&render_argument_clause(
            &self.arguments,
            formatting,
            level,
            indentation_size,
        )?);
        rendered.push_str(&render_directive_clause(
            &self.directives,
            formatting,
            level,
            indentation_size,
        )?);

        if let Some(node) = nested {
            rendered.push_str(formatting.space());
            rendered.push_str(&node.render(formatting, level + 1, indentation_size)?);
        }

        Ok(rendered)
    }
}
