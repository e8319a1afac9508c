//! Scalar column values exchanged with the record store.

use core::fmt;

/// A scalar attribute value.
///
/// Identifiers arrive from the router as text while stores may hold them as
/// integers, so comparisons that cross that boundary go through
/// [`Value::loose_eq`] rather than `==`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Returns `true` when `self` is `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Equality that tolerates the text/integer representation split.
    ///
    /// `Text("3")` and `Integer(3)` compare equal; everything else falls back
    /// to strict equality. `Null` never equals anything, including `Null`.
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::Text(t), Self::Integer(n)) | (Self::Integer(n), Self::Text(t)) => {
                t.parse::<i64>().is_ok_and(|parsed| parsed == *n)
            }
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_eq_crosses_text_and_integer() {
        assert!(Value::Text("3".into()).loose_eq(&Value::Integer(3)));
        assert!(Value::Integer(42).loose_eq(&Value::Text("42".into())));
        assert!(!Value::Text("3x".into()).loose_eq(&Value::Integer(3)));
    }

    #[test]
    fn null_never_matches() {
        assert!(!Value::Null.loose_eq(&Value::Null));
        assert!(!Value::Null.loose_eq(&Value::Integer(0)));
    }

    #[test]
    fn display_renders_text_bare() {
        assert_eq!(Value::Text("abc".into()).to_string(), "abc");
        assert_eq!(Value::Integer(7).to_string(), "7");
    }
}
