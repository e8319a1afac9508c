//! Seam for the external declarative filter compiler.
//!
//! The composition layer never interprets the filter grammar; it loads the
//! filter with the request parameters, asks it to build a condition, and
//! surfaces validation failures as structured data instead of a hard error.

use compact_str::CompactString;
use nested_rest_core::Condition;

use crate::context::ParamMap;

/// Outcome of compiling a loaded filter.
pub enum FilterBuild {
    /// A usable condition.
    Condition(Condition),
    /// The filter loaded but produced no restriction.
    Empty,
    /// Grammar-level rejection or failed validation; the caller should
    /// surface [`DataFilter::errors`].
    Invalid,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    pub field: CompactString,
    pub message: String,
}

/// Structured validation payload, suitable for field-level error reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilterErrors(pub Vec<FieldError>);

impl FilterErrors {
    pub fn push(&mut self, field: impl Into<CompactString>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A declarative, user-submitted filter compiled into a query condition.
pub trait DataFilter {
    /// Loads the filter from the request parameters. Returns `false` when
    /// the parameters carry nothing addressed to this filter.
    fn load(&mut self, params: &ParamMap) -> bool;

    /// Compiles the loaded filter.
    fn build(&self) -> FilterBuild;

    /// Validation failures collected by [`load`](Self::load) /
    /// [`build`](Self::build).
    fn errors(&self) -> FilterErrors {
        FilterErrors::default()
    }
}
