//! Core model for the nested-rest composition layer: scalar values,
//! condition trees, the immutable `Query` builder, relation metadata, and
//! the record-store seam.

pub mod condition;
pub mod error;
pub mod query;
pub mod record;
pub mod relation;
pub mod tracing;
pub mod value;

// Re-export key types and traits
pub use condition::Condition;
pub use error::{Error, Result};
pub use query::{JoinClause, OrderBy, Query, SortDirection, ViaClause};
pub use record::{Record, RecordStore};
pub use relation::{ModelMeta, ModelRegistry, RelationDef, RelationRegistry, ViaDef};
pub use value::Value;
