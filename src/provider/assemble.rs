//! Assembles a provider from filter, hooks, pagination and sort settings.

use nested_rest_core::{Condition, Query, Result, nested_trace_provider};

use crate::context::ParamMap;

use super::RecordProvider;
use super::filter::{DataFilter, FilterBuild, FilterErrors};
use super::page::PageCfg;
use super::sort::SortCfg;

/// Query-mutation hook applied after the filter condition.
pub type SearchHook<'a> = dyn Fn(Query, &ParamMap) -> Query + 'a;

/// Hook that takes over provider preparation entirely. Receives the action
/// identifier and the built filter condition; its return value is used
/// verbatim.
pub type PrepareProvider<'a> = dyn Fn(&str, Option<&Condition>) -> Result<RecordProvider> + 'a;

/// Outcome of assembly: a provider, or the filter's structured validation
/// payload when the submitted filter failed to compile.
pub enum Assembled {
    Provider(RecordProvider),
    Invalid(FilterErrors),
}

/// Per-request provider assembly configuration.
///
/// Constructed fresh per request; consumed by [`assemble`](Self::assemble).
pub struct ProviderAssembler<'a> {
    /// Target model of the collection.
    pub model: &'static str,
    /// Optional declarative filter supplied by the endpoint configuration.
    pub filter: Option<&'a mut dyn DataFilter>,
    /// When set, delegates provider preparation entirely.
    pub prepare_provider: Option<&'a PrepareProvider<'a>>,
    /// Optional query-mutation hook.
    pub search: Option<&'a SearchHook<'a>>,
    pub pagination: PageCfg,
    pub sort: SortCfg,
}

impl ProviderAssembler<'_> {
    /// Builds the provider for one request.
    ///
    /// Request parameters come from the body when it is non-empty, falling
    /// back to the query string. A filter that fails to compile
    /// short-circuits with its validation payload; the base query is never
    /// touched in that case.
    pub fn assemble(
        self,
        action_id: &str,
        body_params: &ParamMap,
        query_params: &ParamMap,
    ) -> Result<Assembled> {
        let params = if body_params.is_empty() {
            query_params
        } else {
            body_params
        };

        let mut condition = None;
        if let Some(filter) = self.filter {
            if filter.load(params) {
                match filter.build() {
                    FilterBuild::Invalid => return Ok(Assembled::Invalid(filter.errors())),
                    FilterBuild::Condition(built) => condition = Some(built),
                    FilterBuild::Empty => {}
                }
            }
        }

        if let Some(prepare) = self.prepare_provider {
            return prepare(action_id, condition.as_ref()).map(Assembled::Provider);
        }

        let filtered = condition.is_some();
        let mut query = Query::all(self.model);
        if let Some(condition) = condition {
            query = query.and_where(condition);
        }
        if let Some(search) = self.search {
            query = search(query, params);
        }

        let pagination = self.pagination.resolve(params);
        let sort = self.sort.resolve(params);
        nested_trace_provider!(self.model, filtered, pagination.is_some());

        Ok(Assembled::Provider(RecordProvider {
            query,
            pagination,
            sort,
        }))
    }
}
