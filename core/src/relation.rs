//! Relation metadata and the startup-time relation registry.
//!
//! Relations are declared as static metadata and resolved through a typed
//! registry instead of dynamic method dispatch: unknown relation names fail
//! with a configuration error at lookup, not a runtime dispatch failure.

use compact_str::CompactString;
use hashbrown::HashMap;

use crate::error::{Error, Result};

/// Junction leg of an indirect (many-to-many) relation.
///
/// `link` pairs are `(junction column, parent column)` — the link mapping
/// tying a junction row to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViaDef {
    /// Relation name of the junction on the parent model.
    pub name: &'static str,
    /// Junction model name.
    pub junction: &'static str,
    /// `(junction column, parent column)` pairs.
    pub link: &'static [(&'static str, &'static str)],
}

/// A declared relation from one model to another.
///
/// For a direct relation, `link` pairs are `(target column, parent column)`.
/// For a via relation, they are `(target column, junction column)` and `via`
/// carries the junction leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// Relation name as addressed by the router (e.g. `books`).
    pub name: &'static str,
    /// Source (parent) model name.
    pub source: &'static str,
    /// Target model name.
    pub target: &'static str,
    /// Column equality pairs, see type-level docs.
    pub link: &'static [(&'static str, &'static str)],
    /// Present only for indirect relations.
    pub via: Option<ViaDef>,
}

/// Registry of relation definitions, keyed by `(source model, relation name)`.
///
/// Built once at startup and treated as read-only afterwards.
#[derive(Debug, Default)]
pub struct RelationRegistry {
    map: HashMap<CompactString, RelationDef>,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a relation under its normalized `source.name` key.
    pub fn register(&mut self, def: RelationDef) {
        self.map.insert(key(def.source, def.name), def);
    }

    /// Looks up a relation by source model and name.
    ///
    /// The leading letter of the relation name is case-normalized, matching
    /// the accessor-naming convention of routers that capitalize the relation
    /// segment.
    pub fn get(&self, model: &str, name: &str) -> Result<&RelationDef> {
        self.map.get(key(model, name).as_str()).ok_or_else(|| {
            Error::Config(format!("unknown relation '{name}' on model '{model}'"))
        })
    }
}

fn key(model: &str, name: &str) -> CompactString {
    let mut out = CompactString::from(model);
    out.push('.');
    out.push_str(&normalize(name));
    out
}

/// Lowercases the leading letter so `Books` and `books` address the same
/// relation.
fn normalize(name: &str) -> CompactString {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = CompactString::default();
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => CompactString::default(),
    }
}

/// Primary-key metadata for one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelMeta {
    pub name: &'static str,
    pub primary_key: &'static str,
}

/// Registry of model metadata, keyed by model name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    map: HashMap<&'static str, ModelMeta>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, meta: ModelMeta) {
        self.map.insert(meta.name, meta);
    }

    /// Metadata for `model`, or a configuration error for unknown names.
    pub fn meta(&self, model: &str) -> Result<&ModelMeta> {
        self.map
            .get(model)
            .ok_or_else(|| Error::Config(format!("unknown model '{model}'")))
    }

    /// The primary-key column of `model`.
    pub fn primary_key(&self, model: &str) -> Result<&'static str> {
        self.meta(model).map(|meta| meta.primary_key)
    }
}
