//! Query composition for REST resources nested under a parent relation
//! (e.g. `/authors/5/books`), including many-to-many relations traversing a
//! junction model.
//!
//! The pipeline: raw request parameters resolve into a [`NestedContext`];
//! [`ParentLocator`] loads the parent record; [`relation_query`] derives the
//! scoped collection query, flattening via-relations into an indexed inner
//! join; [`MembershipResolver`] addresses individual children within that
//! scope; [`ProviderAssembler`] composes filtering, hooks, pagination and
//! sort into a [`RecordProvider`]. The record store itself is external —
//! everything here is written against the traits in [`nested_rest_core`].

pub mod context;
pub mod index;
pub mod locate;
pub mod membership;
pub mod provider;
pub mod relation_query;

// Re-export the core model alongside the composition layer.
pub use nested_rest_core::{
    Condition, Error, JoinClause, ModelMeta, ModelRegistry, OrderBy, Query, Record, RecordStore,
    RelationDef, RelationRegistry, Result, SortDirection, Value, ViaClause, ViaDef,
};

pub use context::{NestedContext, ParamMap};
pub use index::IndexFlow;
pub use locate::{AccessCheck, ParentLocator};
pub use membership::{Membership, MembershipResolver, parse_id_list};
pub use provider::{
    Assembled, DataFilter, FieldError, FilterBuild, FilterErrors, PageCfg, PageConfig, Pagination,
    PrepareProvider, ProviderAssembler, RecordProvider, SearchHook, Sort, SortCfg, SortConfig,
};
