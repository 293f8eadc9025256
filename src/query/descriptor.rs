//! Static field metadata emitted for generated builder types.
//!
//! A code generator describes each object type of a schema as a
//! `static` [`TypeDescriptor`]. Descriptors may refer to themselves or to
//! each other, which is how recursive types such as a category tree are
//! expressed.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{FieldMetadata, TypeDescriptor};
//!
//! static CATEGORY: TypeDescriptor = TypeDescriptor {
//!     type_name: "Category",
//!     fields: &[
//!         FieldMetadata::scalar("name"),
//!         FieldMetadata {
//!             name: "subcategories",
//!             is_complex: true,
//!             builder_type: Some(&CATEGORY),
//!         },
//!     ],
//!     fragments: &[],
//! };
//!
//! assert_eq!(CATEGORY.field("subcategories").unwrap().builder_type.unwrap().type_name, "Category");
//! ```

use std::fmt;

/// Describes one field of an object type.
pub struct FieldMetadata {
    /// The field name as it appears in the schema.
    pub name: &'static str,
    /// `true` for fields whose type is an object, interface, union or a
    /// list of those.
    pub is_complex: bool,
    /// The descriptor of the field's object type, if it has a builder.
    pub builder_type: Option<&'static TypeDescriptor>,
}

impl FieldMetadata {
    /// Describes a leaf field.
    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            is_complex: false,
            builder_type: None,
        }
    }

    /// Describes a field selecting an object of type `builder_type`.
    #[must_use]
    pub const fn object(name: &'static str, builder_type: &'static TypeDescriptor) -> Self {
        Self {
            name,
            is_complex: true,
            builder_type: Some(builder_type),
        }
    }
}

// Descriptors may be cyclic, so only the type name of a builder is printed.
impl fmt::Debug for FieldMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMetadata")
            .field("name", &self.name)
            .field("is_complex", &self.is_complex)
            .field("builder_type", &self.builder_type.map(|t| t.type_name))
            .finish()
    }
}

/// Describes an object type and the concrete shapes it may take.
pub struct TypeDescriptor {
    /// The schema name of the type.
    pub type_name: &'static str,
    /// The type's fields in schema order.
    pub fields: &'static [FieldMetadata],
    /// Concrete types selectable through `... on Type` fragments, for
    /// interfaces and unions.
    pub fragments: &'static [&'static TypeDescriptor],
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fragments: Vec<_> = self.fragments.iter().map(|t| t.type_name).collect();
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("fragments", &fragments)
            .finish()
    }
}

impl TypeDescriptor {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name == name)
    }
}
