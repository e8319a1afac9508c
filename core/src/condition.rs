//! Runtime condition tree applied to queries.
//!
//! Conditions are built by the composition layer (relation scoping, membership
//! `IN` filters, compiled data filters) and interpreted by the record store.
//! [`Condition::matches`] gives store implementations a single shared
//! evaluator for row-level predicates.

use compact_str::CompactString;

use crate::record::Record;
use crate::value::Value;

/// A boolean predicate over a single record's attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = value`, with loose text/integer equality.
    Eq(CompactString, Value),
    /// `column IN (values)`.
    In(CompactString, Vec<Value>),
    /// Every child condition holds.
    And(Vec<Condition>),
    /// At least one child condition holds.
    Or(Vec<Condition>),
    /// The child condition does not hold.
    Not(Box<Condition>),
}

impl Condition {
    /// `column = value` condition.
    pub fn eq(column: impl Into<CompactString>, value: impl Into<Value>) -> Self {
        Self::Eq(column.into(), value.into())
    }

    /// `column IN (values)` condition.
    pub fn is_in(column: impl Into<CompactString>, values: Vec<Value>) -> Self {
        Self::In(column.into(), values)
    }

    /// AND-combines two conditions, flattening nested `And` nodes.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(b)) => {
                a.extend(b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                b.insert(0, a);
                Self::And(b)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// AND of equality pairs. Returns `None` for an empty pair list.
    pub fn all_eq<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (CompactString, Value)>,
    {
        let mut conditions: Vec<Self> = pairs
            .into_iter()
            .map(|(column, value)| Self::Eq(column, value))
            .collect();
        match conditions.len() {
            0 => None,
            1 => conditions.pop(),
            _ => Some(Self::And(conditions)),
        }
    }

    /// Evaluates the condition against one record.
    ///
    /// A missing attribute evaluates as `Null`, which matches nothing.
    pub fn matches(&self, record: &dyn Record) -> bool {
        match self {
            Self::Eq(column, value) => record
                .get(column)
                .is_some_and(|attr| attr.loose_eq(value)),
            Self::In(column, values) => record
                .get(column)
                .is_some_and(|attr| values.iter().any(|v| attr.loose_eq(v))),
            Self::And(children) => children.iter().all(|c| c.matches(record)),
            Self::Or(children) => children.iter().any(|c| c.matches(record)),
            Self::Not(child) => !child.matches(record),
        }
    }
}
