//! The "list nested collection" use case.

use nested_rest_core::{RecordStore, RelationRegistry, Result};

use crate::context::NestedContext;
use crate::locate::{AccessCheck, ParentLocator};
use crate::provider::RecordProvider;
use crate::relation_query;

/// Orchestrates parent location, relation-query building and access checks
/// into a nested-collection provider.
///
/// The provider is intentionally bare — no pagination/sort/filter
/// composition. The nested-list endpoint has a narrower contract than the
/// generic assembler; paging and sorting are deferred to transport-layer
/// convention.
pub struct IndexFlow<'a> {
    pub store: &'a dyn RecordStore,
    pub relations: &'a RelationRegistry,
    pub action_id: &'a str,
    pub check_access: Option<&'a AccessCheck<'a>>,
}

impl IndexFlow<'_> {
    /// Runs the index use case for one resolved context.
    ///
    /// The collection-level access check runs first, with no record; the
    /// locator then performs its own record-level check. Both can
    /// legitimately run. Failures propagate unchanged.
    pub fn run(&self, ctx: &NestedContext) -> Result<RecordProvider> {
        if let Some(check) = self.check_access {
            check(self.action_id, None)?;
        }

        let locator = ParentLocator {
            store: self.store,
            action_id: self.action_id,
            check_access: self.check_access,
        };
        let parent = locator.locate(ctx)?;
        let query = relation_query::build(self.relations, parent.as_ref(), &ctx.relation_name)?;

        Ok(RecordProvider::bare(query))
    }
}
