//! Pagination settings and their per-request resolution.

use crate::context::ParamMap;

/// Page number parameter name (1-based).
pub const PAGE_PARAM: &str = "page";
/// Page size parameter name.
pub const PAGE_SIZE_PARAM: &str = "per-page";

/// Resolved pagination for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
    /// Request parameters the pagination was resolved from; kept for link
    /// building by the transport layer.
    pub params: ParamMap,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u64 = 20;
    pub const MAX_PAGE_SIZE: u64 = 50;

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page.max(1) - 1) * self.page_size
    }
}

/// Declarative pagination settings; request parameters fill anything unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Pagination as configured on an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCfg {
    /// No pagination; the provider materializes the entire collection.
    Disabled,
    /// Settings merged with the request parameters (explicit settings win).
    Config(PageConfig),
    /// A pre-built instance; only `params` is attached.
    Prebuilt(Pagination),
}

impl Default for PageCfg {
    fn default() -> Self {
        Self::Config(PageConfig::default())
    }
}

impl PageCfg {
    /// Resolves the configured pagination against the request parameters.
    pub fn resolve(self, params: &ParamMap) -> Option<Pagination> {
        match self {
            Self::Disabled => None,
            Self::Config(config) => {
                let page = config
                    .page
                    .or_else(|| parse(params, PAGE_PARAM))
                    .unwrap_or(1)
                    .max(1);
                let page_size = config
                    .page_size
                    .or_else(|| parse(params, PAGE_SIZE_PARAM))
                    .unwrap_or(Pagination::DEFAULT_PAGE_SIZE)
                    .clamp(1, Pagination::MAX_PAGE_SIZE);
                Some(Pagination {
                    page,
                    page_size,
                    params: params.clone(),
                })
            }
            Self::Prebuilt(mut pagination) => {
                pagination.params = params.clone();
                Some(pagination)
            }
        }
    }
}

fn parse(params: &ParamMap, name: &str) -> Option<u64> {
    params.get(name).and_then(|value| value.parse().ok())
}
