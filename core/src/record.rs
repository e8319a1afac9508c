//! Record and record-store abstractions.
//!
//! The composition layer never talks to a concrete storage engine; it is
//! written against these traits and hands fully-described [`Query`] values
//! to the store for execution.

use crate::error::Result;
use crate::query::Query;
use crate::value::Value;

/// A loaded record exposing its attributes by column name.
pub trait Record {
    /// The model name this record belongs to.
    fn model(&self) -> &'static str;

    /// The value of `column`, or `None` when the model has no such column.
    fn get(&self, column: &str) -> Option<Value>;

    /// Clones the record behind the trait object. Needed when a duplicated
    /// id in a membership request maps to the same stored row twice.
    fn clone_record(&self) -> Box<dyn Record>;
}

/// The record-store seam consumed by the composition layer.
///
/// Calls are opaque blocking calls; failures surface as [`Error::Store`]
/// and are never retried here.
///
/// [`Error::Store`]: crate::Error::Store
pub trait RecordStore {
    /// Primary-key lookup of one record.
    fn find_by_primary_key(&self, model: &str, id: &Value) -> Result<Option<Box<dyn Record>>>;

    /// Executes `query`, honoring condition, via/join clauses, order and
    /// limit/offset.
    fn fetch(&self, query: &Query) -> Result<Vec<Box<dyn Record>>>;

    /// Counts the rows matching `query` with LIMIT/OFFSET ignored.
    fn count(&self, query: &Query) -> Result<u64> {
        Ok(self.fetch(&query.unsliced())?.len() as u64)
    }
}
