//! Derives and rewrites the nested-collection query for a loaded parent.
//!
//! A direct relation needs no rewriting: its descriptor query is already
//! scoped to the parent. An indirect relation arrives annotated with a via
//! clause; evaluating that form re-filters through the junction model for
//! every row, so [`build`] flattens it into a single inner join with the
//! parent's attribute values bound as literals. Same result set, O(1) join
//! instead of a junction-sized membership filter.

use compact_str::CompactString;
use nested_rest_core::{
    Condition, Error, JoinClause, Query, Record, RelationDef, RelationRegistry, Result, Value,
    ViaClause, nested_trace_query,
};

/// Derives the relation's query descriptor from a loaded parent instance.
///
/// The returned query is the *naive* form: a direct relation is scoped by a
/// WHERE clause over the link pairs; a via relation carries a [`ViaClause`]
/// whose filter binds the junction columns to the parent's attribute values.
pub fn descriptor(
    registry: &RelationRegistry,
    parent: &dyn Record,
    relation_name: &str,
) -> Result<Query> {
    let def = registry.get(parent.model(), relation_name)?;

    match def.via {
        None => {
            let condition = link_condition(def, def.link, parent)?;
            Ok(Query::all(def.target).and_where(condition))
        }
        Some(via) => {
            let filter = link_condition(def, via.link, parent)?;
            Ok(Query::all(def.target).with_via(ViaClause {
                name: via.name,
                junction: via.junction,
                link: def.link,
                filter,
            }))
        }
    }
}

/// Obtains the nested-collection query, rewriting a via relation into an
/// inner join on the junction relation.
pub fn build(
    registry: &RelationRegistry,
    parent: &dyn Record,
    relation_name: &str,
) -> Result<Query> {
    let query = descriptor(registry, parent, relation_name)?;
    let query = rewrite_via(query);
    nested_trace_query!(query.target, query.joins.len());
    Ok(query)
}

/// Flattens a via annotation into an inner join.
///
/// Constructs a new query value: the via annotation is discarded (the
/// rewritten query must not also apply the original filtering path) and the
/// junction-side link condition moves verbatim into the join predicate.
pub fn rewrite_via(query: Query) -> Query {
    let Some(via) = query.via.clone() else {
        return query;
    };

    query.without_via().inner_join_with(JoinClause {
        relation: via.name,
        junction: via.junction,
        link: via.link,
        on: via.filter,
    })
}

/// Builds the link condition `column = parent value` for each mapping pair,
/// reading the parent instance's attributes. A link column the parent does
/// not have is a misdeclared relation, not a runtime user error.
fn link_condition(
    def: &RelationDef,
    link: &'static [(&'static str, &'static str)],
    parent: &dyn Record,
) -> Result<Condition> {
    let mut pairs: Vec<(CompactString, Value)> = Vec::with_capacity(link.len());
    for (column, parent_column) in link {
        let value = parent.get(parent_column).ok_or_else(|| {
            Error::Config(format!(
                "relation '{}' links through missing attribute '{parent_column}' on model '{}'",
                def.name,
                parent.model()
            ))
        })?;
        pairs.push((CompactString::from(*column), value));
    }

    Condition::all_eq(pairs).ok_or_else(|| {
        Error::Config(format!("relation '{}' declares an empty link mapping", def.name))
    })
}
