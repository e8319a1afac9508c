//! Relation-addressing context extracted from the request parameters.
//!
//! The URL rule layer supplies `relativeClass`, `relationName` and
//! `linkAttribute` alongside the parent's identifying value. Missing
//! parameters are a deployment problem, not user input: resolution fails
//! fast with a configuration error before any query executes.

use compact_str::CompactString;
use hashbrown::HashMap;
use nested_rest_core::{Error, Result, Value};

/// Raw request parameters: query-string or body, both flat string maps.
pub type ParamMap = HashMap<CompactString, CompactString>;

/// Parameter naming the parent record's model.
pub const PARAM_RELATIVE_CLASS: &str = "relativeClass";
/// Parameter naming the relation accessor on the parent model.
pub const PARAM_RELATION_NAME: &str = "relationName";
/// Parameter naming the parameter that holds the parent's identifier.
pub const PARAM_LINK_ATTRIBUTE: &str = "linkAttribute";

/// Validated bundle of relation-addressing parameters for one request.
///
/// Immutable once resolved; re-resolving identical raw parameters yields an
/// identical context.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedContext {
    /// Model identifier of the parent record.
    pub relative_class: CompactString,
    /// Name of the relation on the parent model (e.g. `books`).
    pub relation_name: CompactString,
    /// Name of the request parameter carrying the parent's identifier
    /// (e.g. `authorId`).
    pub link_attribute: CompactString,
    /// The parent's identifying value, extracted via `link_attribute`.
    pub relative_id: Value,
}

impl NestedContext {
    /// Extracts and validates a context from the raw request parameters.
    pub fn from_params(params: &ParamMap) -> Result<Self> {
        let relative_class = expect(params, PARAM_RELATIVE_CLASS)?;
        let relation_name = expect(params, PARAM_RELATION_NAME)?;
        let link_attribute = expect(params, PARAM_LINK_ATTRIBUTE)?;
        let relative_id = expect(params, link_attribute.as_str())?;

        Ok(Self {
            relative_class,
            relation_name,
            link_attribute,
            relative_id: Value::Text(relative_id.to_string()),
        })
    }
}

fn expect(params: &ParamMap, name: &str) -> Result<CompactString> {
    params
        .get(name)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| Error::Config(format!("missing expected parameter '{name}'")))
}
