//! Result providers: lazily materialized, pageable/sortable result sets,
//! and the assembler that composes filter, hooks, pagination and sort into
//! one provider per request.

mod assemble;
mod filter;
mod page;
mod sort;

pub use assemble::{Assembled, PrepareProvider, ProviderAssembler, SearchHook};
pub use filter::{DataFilter, FieldError, FilterBuild, FilterErrors};
pub use page::{PAGE_PARAM, PAGE_SIZE_PARAM, PageCfg, PageConfig, Pagination};
pub use sort::{SORT_PARAM, Sort, SortCfg, SortConfig};

use nested_rest_core::{Query, Record, RecordStore, Result};

/// A lazily-materialized result set over one query.
///
/// Holds no store reference and caches nothing: constructed fresh per
/// request, materialized on demand. Sorting and slicing are applied to the
/// query at materialization time; counting ignores the slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordProvider {
    pub query: Query,
    pub pagination: Option<Pagination>,
    pub sort: Option<Sort>,
}

impl RecordProvider {
    /// Provider with pagination and sort disabled — the whole collection.
    pub fn bare(query: Query) -> Self {
        Self {
            query,
            pagination: None,
            sort: None,
        }
    }

    /// Materializes the result set: sort, slice, fetch.
    pub fn records(&self, store: &dyn RecordStore) -> Result<Vec<Box<dyn Record>>> {
        let mut query = self.query.clone();
        if let Some(sort) = &self.sort {
            let orders = sort.orders();
            if !orders.is_empty() {
                query = query.order_by(orders);
            }
        }
        if let Some(pagination) = &self.pagination {
            query = query.limit(pagination.limit()).offset(pagination.offset());
        }
        store.fetch(&query)
    }

    /// Total number of matching records, ignoring pagination.
    pub fn total_count(&self, store: &dyn RecordStore) -> Result<u64> {
        store.count(&self.query)
    }
}
