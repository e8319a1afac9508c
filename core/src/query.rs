//! The `Query` value — an immutable builder over one target model.
//!
//! Every builder method consumes the query and returns a new value; nothing
//! is mutated in place. A query scoped to a via-relation carries a
//! [`ViaClause`] annotation describing the naive junction traversal; the
//! join rewrite replaces that annotation with an inner [`JoinClause`].

use smallvec::SmallVec;

use crate::condition::Condition;

/// Sort direction for one ORDER BY entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A single ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: compact_str::CompactString,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Ascending order on `column`.
    pub fn asc(column: impl Into<compact_str::CompactString>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `column`.
    pub fn desc(column: impl Into<compact_str::CompactString>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// An inner join against a junction relation.
///
/// `link` pairs are `(target column, junction column)` — the structural join
/// condition. `on` is the join-time predicate carrying the parent's attribute
/// values as literal bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// Relation name the join was derived from (e.g. `bookAuthors`).
    pub relation: &'static str,
    /// Junction model name.
    pub junction: &'static str,
    /// `(target column, junction column)` equality pairs.
    pub link: &'static [(&'static str, &'static str)],
    /// Extra predicate on the junction rows.
    pub on: Condition,
}

/// Naive junction traversal annotation.
///
/// Semantics: a target row is included when some junction row satisfies
/// `filter` and the `link` pairs. `filter` is the junction-side link
/// condition and must be carried verbatim into the join rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct ViaClause {
    /// Relation name of the junction on the parent model.
    pub name: &'static str,
    /// Junction model name.
    pub junction: &'static str,
    /// `(target column, junction column)` equality pairs.
    pub link: &'static [(&'static str, &'static str)],
    /// Junction-side link condition (junction column = parent value).
    pub filter: Condition,
}

/// A composable query over one target model.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub target: &'static str,
    pub condition: Option<Condition>,
    pub joins: SmallVec<[JoinClause; 1]>,
    pub via: Option<ViaClause>,
    pub order: Vec<OrderBy>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Query {
    /// Unfiltered query over `target`.
    pub fn all(target: &'static str) -> Self {
        Self {
            target,
            condition: None,
            joins: SmallVec::new(),
            via: None,
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// AND-combines `condition` with the existing WHERE clause.
    #[must_use]
    pub fn and_where(self, condition: Condition) -> Self {
        let condition = match self.condition {
            Some(existing) => existing.and(condition),
            None => condition,
        };
        Self {
            condition: Some(condition),
            ..self
        }
    }

    /// Adds an inner join on a junction relation.
    #[must_use]
    pub fn inner_join_with(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Attaches a naive via-relation annotation.
    #[must_use]
    pub fn with_via(self, via: ViaClause) -> Self {
        Self {
            via: Some(via),
            ..self
        }
    }

    /// Discards the via annotation. Used by the join rewrite so the rewritten
    /// query does not also apply the original filtering path.
    #[must_use]
    pub fn without_via(self) -> Self {
        Self { via: None, ..self }
    }

    /// Replaces the ORDER BY clause.
    #[must_use]
    pub fn order_by(self, order: Vec<OrderBy>) -> Self {
        Self { order, ..self }
    }

    /// Sets LIMIT.
    #[must_use]
    pub fn limit(self, n: u64) -> Self {
        Self {
            limit: Some(n),
            ..self
        }
    }

    /// Sets OFFSET.
    #[must_use]
    pub fn offset(self, n: u64) -> Self {
        Self {
            offset: Some(n),
            ..self
        }
    }

    /// The same query with LIMIT/OFFSET cleared. Used for counting.
    #[must_use]
    pub fn unsliced(&self) -> Self {
        Self {
            limit: None,
            offset: None,
            ..self.clone()
        }
    }
}
