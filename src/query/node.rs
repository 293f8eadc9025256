//! The query node: a selection set plus, for a root node, its operation
//! header.

use indexmap::IndexMap;

use crate::argument::Argument;
use crate::config::{Formatting, RenderOptions};
use crate::error::QueryBuilderError;
use crate::names::Identifier;
use crate::query::criteria::FieldCriteria;
use crate::query::OperationKind;
use crate::variable::Variable;

/// The field name that selects the concrete type of an object.
pub const TYPE_NAME_FIELD: &str = "__typename";

/// A node of a query document.
///
/// A root node carries an operation kind and optionally an operation name
/// and variable declarations. Nested nodes are owned by the object fields and
/// fragment spreads that select them.
///
/// Fields and fragments keep insertion order. Including a field or fragment
/// under a key that already exists replaces the earlier entry in place.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::{
///     Argument, OperationKind, QueryNode, RenderOptions, Variable,
/// };
///
/// let first = Variable::non_null("first", 10).unwrap();
///
/// let mut products = QueryNode::of_type("Product");
/// products.include_scalar_field("id", Vec::new());
/// products.include_scalar_field("title", Vec::new());
///
/// let mut root = QueryNode::operation(OperationKind::Query, "QueryRoot", Some("Products")).unwrap();
/// root.add_variable(first.clone()).unwrap();
/// root.include_object_field("products", products, vec![Argument::variable("first", &first)]);
///
/// assert_eq!(
///     root.build(&RenderOptions::compact()).unwrap(),
///     "query Products($first:Int!){products(first:$first){id,title}}"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueryNode {
    type_name: Option<String>,
    operation_kind: Option<OperationKind>,
    operation_name: Option<Identifier>,
    fields: IndexMap<String, FieldCriteria>,
    fragments: IndexMap<String, FieldCriteria>,
    variables: Vec<Variable>,
}

// Verify QueryNode is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryNode>();
};

impl QueryNode {
    /// Creates an empty, untyped node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node for the object type `type_name`.
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Creates an empty root node for an operation.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidIdentifier`] if `name` is given
    /// and is not a GraphQL name.
    pub fn operation(
        kind: OperationKind,
        type_name: impl Into<String>,
        name: Option<&str>,
    ) -> Result<Self, QueryBuilderError> {
        let operation_name = name.map(Identifier::new).transpose()?;

        Ok(Self {
            type_name: Some(type_name.into()),
            operation_kind: Some(kind),
            operation_name,
            ..Self::default()
        })
    }

    /// Returns the object type name, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns the operation kind of a root node.
    #[must_use]
    pub const fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    /// Returns the operation name, if any.
    #[must_use]
    pub const fn operation_name(&self) -> Option<&Identifier> {
        self.operation_name.as_ref()
    }

    /// Returns the field selections in insertion order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldCriteria> {
        self.fields.values()
    }

    /// Looks up a field selection by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldCriteria> {
        self.fields.get(name)
    }

    /// Mutable lookup of a field selection.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldCriteria> {
        self.fields.get_mut(name)
    }

    /// Returns the fragment spreads in insertion order.
    pub fn fragments(&self) -> impl ExactSizeIterator<Item = &FieldCriteria> {
        self.fragments.values()
    }

    /// Looks up a fragment spread by type condition.
    #[must_use]
    pub fn fragment(&self, type_condition: &str) -> Option<&FieldCriteria> {
        self.fragments.get(type_condition)
    }

    /// Returns the declared variables in declaration order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns `true` if the node selects at least one field.
    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Returns `true` if the node selects at least one field or fragment.
    #[must_use]
    pub fn has_selections(&self) -> bool {
        !self.fields.is_empty() || !self.fragments.is_empty()
    }

    /// Selects a leaf field.
    pub fn include_scalar_field(
        &mut self,
        name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> &mut FieldCriteria {
        let name = name.into();
        let criteria = FieldCriteria::scalar(name.clone(), arguments);
        Self::insert(&mut self.fields, name, criteria)
    }

    /// Selects a field with a nested selection set.
    pub fn include_object_field(
        &mut self,
        name: impl Into<String>,
        node: Self,
        arguments: Vec<Argument>,
    ) -> &mut FieldCriteria {
        let name = name.into();
        let criteria = FieldCriteria::object(name.clone(), node, arguments);
        Self::insert(&mut self.fields, name, criteria)
    }

    /// Adds a `... on Type` spread, keyed by the type of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::UntypedFragment`] if `node` has no type
    /// name to use as the type condition.
    pub fn include_fragment(&mut self, node: Self) -> Result<&mut FieldCriteria, QueryBuilderError> {
        let type_condition = node
            .type_name
            .clone()
            .ok_or(QueryBuilderError::UntypedFragment)?;
        let criteria = FieldCriteria::fragment(type_condition.clone(), node);
        Ok(Self::insert(&mut self.fragments, type_condition, criteria))
    }

    /// Adds a fragment for a node whose type name is known to be set.
    pub(crate) fn insert_fragment(&mut self, node: Self) {
        if let Some(type_condition) = node.type_name.clone() {
            let criteria = FieldCriteria::fragment(type_condition.clone(), node);
            Self::insert(&mut self.fragments, type_condition, criteria);
        }
    }

    /// Selects `__typename`.
    pub fn include_type_name(&mut self) -> &mut FieldCriteria {
        self.include_scalar_field(TYPE_NAME_FIELD, Vec::new())
    }

    /// Removes a field selection, keeping the order of the others.
    pub fn exclude_field(&mut self, name: &str) -> Option<FieldCriteria> {
        self.fields.shift_remove(name)
    }

    /// Removes a fragment spread, keeping the order of the others.
    pub fn exclude_fragment(&mut self, type_condition: &str) -> Option<FieldCriteria> {
        self.fragments.shift_remove(type_condition)
    }

    /// Declares a variable on the operation.
    ///
    /// A variable with the same name as an earlier declaration replaces it
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::UnnamedVariable`] for an inline variable.
    pub fn add_variable(&mut self, variable: Variable) -> Result<(), QueryBuilderError> {
        let name = variable.name().ok_or(QueryBuilderError::UnnamedVariable)?;

        if let Some(existing) = self
            .variables
            .iter_mut()
            .find(|declared| declared.name() == Some(name))
        {
            tracing::debug!(variable = %name, "Replacing previously declared variable");
            *existing = variable;
        } else {
            self.variables.push(variable);
        }

        Ok(())
    }

    /// Removes a declared variable, keeping the order of the others.
    pub fn remove_variable(&mut self, name: &str) -> Option<Variable> {
        let index = self
            .variables
            .iter()
            .position(|variable| variable.name().is_some_and(|declared| declared.as_ref() == name))?;
        Some(self.variables.remove(index))
    }

    /// Removes all fields, fragments and variables.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.fragments.clear();
        self.variables.clear();
    }

    /// Renders the node at nesting `level`.
    ///
    /// Root nodes render their operation header first. Nested nodes render
    /// only their selection set.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while encoding a value or declaring a
    /// variable.
    pub fn render(
        &self,
        formatting: Formatting,
        level: usize,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let mut rendered = self.render_header(formatting, level, indentation_size)?;
        if !rendered.is_empty() {
            rendered.push_str(formatting.space());
        }

        rendered.push('{');
        if formatting.is_indented() {
            rendered.push('\n');
        }

        let mut first = true;
        for criteria in self.fields.values().chain(self.fragments.values()) {
            let selection = criteria.render(formatting, level, indentation_size)?;
            if formatting.is_indented() {
                rendered.push_str(&selection);
                rendered.push('\n');
            } else if !selection.is_empty() {
                if !first {
                    rendered.push(',');
                }
                rendered.push_str(&selection);
                first = false;
            }
        }

        if formatting.is_indented() {
            rendered.push_str(&formatting.indentation(level.saturating_sub(1), indentation_size));
        }
        rendered.push('}');

        Ok(rendered)
    }

    /// Renders the whole document.
    ///
    /// # Errors
    ///
    /// See [`QueryNode::render`].
    pub fn build(&self, options: &RenderOptions) -> Result<String, QueryBuilderError> {
        tracing::trace!(
            operation = ?self.operation_kind,
            formatting = %options.formatting(),
            "Building query document"
        );
        self.render(options.formatting(), 1, options.indentation_size())
    }

    fn render_header(
        &self,
        formatting: Formatting,
        level: usize,
        indentation_size: u8,
    ) -> Result<String, QueryBuilderError> {
        let Some(kind) = self.operation_kind else {
            return Ok(String::new());
        };

        let mut header = kind.keyword().to_string();
        if let Some(name) = &self.operation_name {
            header.push(' ');
            header.push_str(name.as_ref());
        }

        if self.variables.is_empty() {
            return Ok(header);
        }

        let declarations = self
            .variables
            .iter()
            .map(|variable| variable.render_declaration(formatting, indentation_size))
            .collect::<Result<Vec<_>, _>>()?;

        header.push_str(formatting.space());
        header.push('(');
        if formatting.is_indented() {
            let indentation = formatting.indentation(level, indentation_size);
            let entries: Vec<_> = declarations
                .iter()
                .map(|declaration| format!("\n{indentation}{declaration}"))
                .collect();
            header.push_str(&entries.join(","));
        } else {
            header.push_str(&declarations.join(","));
        }
        header.push(')');

        Ok(header)
    }

    fn insert(
        map: &mut IndexMap<String, FieldCriteria>,
        key: String,
        criteria: FieldCriteria,
    ) -> &mut FieldCriteria {
        let (index, _) = map.insert_full(key, criteria);
        &mut map[index]
    }
}
