//! Query document model.
//!
//! - [`QueryNode`]: a selection set, optionally with an operation header
//! - [`FieldCriteria`]: one selection (scalar, object or fragment spread)
//! - [`TypeDescriptor`]: static field metadata used for auto-population
//! - [`QueryBuilder`]: the fluent trait generated builders implement

mod builder;
mod criteria;
mod descriptor;
mod node;
mod operation;
mod populate;

pub use builder::QueryBuilder;
pub use criteria::{FieldCriteria, Selection};
pub use descriptor::{FieldMetadata, TypeDescriptor};
pub use node::{QueryNode, TYPE_NAME_FIELD};
pub use operation::OperationKind;
