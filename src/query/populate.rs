//! Populating a node from its type descriptor.
//!
//! Type graphs may be recursive (a category has subcategories, a product has
//! variants that point back at the product). Population walks the graph
//! depth first and carries the chain of ancestor types; a field whose type is
//! already in the chain is left out, so every branch terminates.

use crate::query::descriptor::{FieldMetadata, TypeDescriptor};
use crate::query::QueryNode;

impl QueryNode {
    /// Selects every field `descriptor` lists, recursing into object fields.
    ///
    /// Object fields whose type already appears among the ancestors of the
    /// field are skipped. For each nested type that lists alternative shapes,
    /// a populated `... on Type` fragment is added per shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_query_builder::{FieldMetadata, QueryNode, RenderOptions, TypeDescriptor};
    ///
    /// static CATEGORY: TypeDescriptor = TypeDescriptor {
    ///     type_name: "Category",
    ///     fields: &[
    ///         FieldMetadata::scalar("name"),
    ///         FieldMetadata::object("subcategories", &CATEGORY),
    ///     ],
    ///     fragments: &[],
    /// };
    ///
    /// let mut node = QueryNode::of_type("Category");
    /// node.include_all_fields(&CATEGORY);
    /// assert_eq!(
    ///     node.build(&RenderOptions::compact()).unwrap(),
    ///     "{name,subcategories{name}}"
    /// );
    /// ```
    pub fn include_all_fields(&mut self, descriptor: &'static TypeDescriptor) {
        populate(self, descriptor, descriptor.fields.iter(), Vec::new());
    }

    /// Selects the fields of `descriptor` that are not complex.
    pub fn include_all_scalar_fields(&mut self, descriptor: &'static TypeDescriptor) {
        let scalars = descriptor.fields.iter().filter(|field| !field.is_complex);
        populate(self, descriptor, scalars, Vec::new());
    }
}

fn populate<'a>(
    node: &mut QueryNode,
    descriptor: &'static TypeDescriptor,
    fields: impl Iterator<Item = &'a FieldMetadata>,
    ancestors: Vec<&'static str>,
) {
    for field in fields {
        let Some(field_type) = field.builder_type else {
            node.include_scalar_field(field.name, Vec::new());
            continue;
        };

        if ancestors.contains(&field_type.type_name) {
            tracing::debug!(
                field = field.name,
                field_type = field_type.type_name,
                "Skipping field whose type is already an ancestor"
            );
            continue;
        }

        let mut chain = ancestors.clone();
        chain.push(descriptor.type_name);

        let child = populated_node(field_type, &chain);
        node.include_object_field(field.name, child, Vec::new());
    }
}

fn populated_node(descriptor: &'static TypeDescriptor, chain: &[&'static str]) -> QueryNode {
    let mut node = QueryNode::of_type(descriptor.type_name);
    populate(&mut node, descriptor, descriptor.fields.iter(), chain.to_vec());

    let mut shape_chain = chain.to_vec();
    shape_chain.push(descriptor.type_name);

    for shape in descriptor.fragments {
        let mut fragment = QueryNode::of_type(shape.type_name);
        populate(&mut fragment, shape, shape.fields.iter(), shape_chain.clone());
        node.insert_fragment(fragment);
    }

    node
}
