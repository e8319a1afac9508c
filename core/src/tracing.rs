//! Tracing utilities for query-composition observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event when a nested-collection query is built.
///
/// ```ignore
/// nested_trace_query!(query.target, query.joins.len());
/// ```
#[macro_export]
macro_rules! nested_trace_query {
    ($target:expr, $joins:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target_model = %$target, joins = $joins, "nested_rest.query");
    };
}

/// Emit a debug-level tracing event when membership resolution runs.
///
/// ```ignore
/// nested_trace_resolve!(ids.len(), query.target);
/// ```
#[macro_export]
macro_rules! nested_trace_resolve {
    ($ids:expr, $target:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(ids = $ids, target_model = %$target, "nested_rest.membership");
    };
}

/// Emit a debug-level tracing event when a provider is assembled.
///
/// ```ignore
/// nested_trace_provider!(model, filtered, paged);
/// ```
#[macro_export]
macro_rules! nested_trace_provider {
    ($model:expr, $filtered:expr, $paged:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(model = %$model, filtered = $filtered, paged = $paged, "nested_rest.provider");
    };
}
