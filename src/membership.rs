//! Resolves individually addressed child records within a relation scope.
//!
//! Ids arrive as one comma-separated path segment. Resolution filters the
//! relation's *naive* descriptor query by `pk IN ids` — the join rewrite
//! buys nothing when the query is already keyed — so records that exist but
//! are unrelated to the parent are invisible by construction.

use compact_str::CompactString;
use hashbrown::HashMap;
use nested_rest_core::{
    Condition, Error, ModelRegistry, Record, RecordStore, RelationRegistry, Result, Value,
    nested_trace_resolve,
};
use smallvec::SmallVec;

use crate::context::NestedContext;
use crate::locate::ParentLocator;
use crate::relation_query;

const UNRELATED: &str = "Not found or unrelated objects.";

/// One resolved record, or the ordered sequence for a multi-id request.
///
/// A single id resolves to `One` — not a one-element sequence.
pub enum Membership {
    One(Box<dyn Record>),
    Many(Vec<Box<dyn Record>>),
}

/// Resolves a comma-separated id list within the parent's relation scope.
pub struct MembershipResolver<'a> {
    pub store: &'a dyn RecordStore,
    pub relations: &'a RelationRegistry,
    pub models: &'a ModelRegistry,
    pub locator: ParentLocator<'a>,
}

impl MembershipResolver<'_> {
    /// Resolves `id_list` against the relation named by `ctx`.
    ///
    /// Every token must resolve to a related record; duplicates resolve to
    /// the same record at each of their positions. Any shortfall — missing
    /// entirely, or existing but unrelated — is `NotFound`.
    pub fn resolve(&self, ctx: &NestedContext, id_list: &str) -> Result<Membership> {
        let ids = parse_id_list(id_list);

        let parent = self.locator.locate(ctx)?;
        let query = relation_query::descriptor(self.relations, parent.as_ref(), &ctx.relation_name)?;
        let pk = self.models.primary_key(query.target)?;
        nested_trace_resolve!(ids.len(), query.target);

        let keys: Vec<Value> = unique(&ids)
            .into_iter()
            .map(|id| Value::Text(id.to_string()))
            .collect();
        let query = query.and_where(Condition::is_in(pk, keys));

        if ids.len() > 1 {
            let rows = self.store.fetch(&query)?;
            let by_pk: HashMap<String, Box<dyn Record>> = rows
                .into_iter()
                .filter_map(|row| row.get(pk).map(|value| (value.to_string(), row)))
                .collect();

            let mut resolved = Vec::with_capacity(ids.len());
            for id in &ids {
                let row = by_pk
                    .get(id.as_str())
                    .ok_or_else(|| Error::NotFound(UNRELATED.to_owned()))?;
                resolved.push(row.clone_record());
            }
            Ok(Membership::Many(resolved))
        } else {
            let mut rows = self.store.fetch(&query)?;
            match rows.len() {
                0 => Err(Error::NotFound(UNRELATED.to_owned())),
                _ => Ok(Membership::One(rows.swap_remove(0))),
            }
        }
    }
}

/// Splits a raw id list on commas, trimming surrounding whitespace and
/// dropping empty tokens. Order and duplicates are preserved.
pub fn parse_id_list(raw: &str) -> SmallVec<[CompactString; 4]> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(CompactString::from)
        .collect()
}

/// First-occurrence-ordered unique tokens, for the `IN` filter.
fn unique(ids: &[CompactString]) -> Vec<&CompactString> {
    let mut seen: Vec<&CompactString> = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_tokens_preserving_duplicates() {
        let ids = parse_id_list(" 3 , 4 ,4 ");
        assert_eq!(ids.as_slice(), ["3", "4", "4"]);
    }

    #[test]
    fn drops_empty_tokens() {
        let ids = parse_id_list("3,,5,");
        assert_eq!(ids.as_slice(), ["3", "5"]);
        assert!(parse_id_list(" , ,").is_empty());
    }

    #[test]
    fn unique_preserves_first_occurrence_order() {
        let ids = parse_id_list("4,3,4,3");
        let keys: Vec<&str> = unique(&ids).into_iter().map(|id| id.as_str()).collect();
        assert_eq!(keys, ["4", "3"]);
    }
}
