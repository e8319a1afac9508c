//! Sort settings and their per-request resolution.
//!
//! Request convention: `sort=title,-published_at` — comma-separated
//! attribute names, a leading `-` for descending. Attributes outside the
//! configured allow-list are ignored.

use compact_str::CompactString;
use nested_rest_core::OrderBy;

use crate::context::ParamMap;

/// Sort parameter name.
pub const SORT_PARAM: &str = "sort";

/// Resolved sort for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    /// Attributes callers may sort on.
    pub attributes: Vec<CompactString>,
    /// Request parameters the sort was resolved from.
    pub params: ParamMap,
}

impl Sort {
    /// The ORDER BY entries requested by the parameters, restricted to the
    /// allow-listed attributes.
    pub fn orders(&self) -> Vec<OrderBy> {
        let Some(raw) = self.params.get(SORT_PARAM) else {
            return Vec::new();
        };

        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let (name, descending) = match token.strip_prefix('-') {
                    Some(name) => (name, true),
                    None => (token, false),
                };
                self.attributes.iter().any(|attr| attr == name).then(|| {
                    if descending {
                        OrderBy::desc(name)
                    } else {
                        OrderBy::asc(name)
                    }
                })
            })
            .collect()
    }
}

/// Declarative sort settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortConfig {
    /// Attributes callers may sort on.
    pub attributes: Vec<CompactString>,
}

/// Sort as configured on an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SortCfg {
    /// No sorting; the store's natural order is kept.
    Disabled,
    /// Settings merged with the request parameters.
    Config(SortConfig),
    /// A pre-built instance; only `params` is attached.
    Prebuilt(Sort),
}

impl Default for SortCfg {
    fn default() -> Self {
        Self::Config(SortConfig::default())
    }
}

impl SortCfg {
    /// Resolves the configured sort against the request parameters.
    pub fn resolve(self, params: &ParamMap) -> Option<Sort> {
        match self {
            Self::Disabled => None,
            Self::Config(config) => Some(Sort {
                attributes: config.attributes,
                params: params.clone(),
            }),
            Self::Prebuilt(mut sort) => {
                sort.params = params.clone();
                Some(sort)
            }
        }
    }
}
