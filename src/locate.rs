//! Parent (relative) record location.

use nested_rest_core::{Error, Record, RecordStore, Result};

use crate::context::NestedContext;

/// Access-check hook: `(action id, record)` where the record is absent for
/// collection-level checks. Failures propagate unchanged.
pub type AccessCheck<'a> = dyn Fn(&str, Option<&dyn Record>) -> Result<()> + 'a;

/// Loads the parent record addressed by a [`NestedContext`] and runs the
/// record-level access check, if one is configured.
///
/// Stateless; all configuration is borrowed for the request's lifetime.
pub struct ParentLocator<'a> {
    pub store: &'a dyn RecordStore,
    /// Identifier of the running action, passed to the access check.
    pub action_id: &'a str,
    pub check_access: Option<&'a AccessCheck<'a>>,
}

impl ParentLocator<'_> {
    /// Primary-key lookup of the parent record.
    ///
    /// An absent record is `NotFound` and never reaches the access check.
    /// A configured check runs with the loaded record; its error propagates
    /// unchanged.
    pub fn locate(&self, ctx: &NestedContext) -> Result<Box<dyn Record>> {
        let model = ctx.relative_class.as_str();
        let record = self
            .store
            .find_by_primary_key(model, &ctx.relative_id)?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "{} '{}' not found.",
                    basename(model),
                    ctx.relative_id
                ))
            })?;

        if let Some(check) = self.check_access {
            check(self.action_id, Some(record.as_ref()))?;
        }

        Ok(record)
    }
}

/// Last segment of a possibly namespaced model identifier, so error messages
/// read `Author '5' not found.` rather than leaking the full path.
pub(crate) fn basename(model: &str) -> &str {
    model
        .rsplit(|c| c == ':' || c == '\\' || c == '/')
        .next()
        .unwrap_or(model)
}
