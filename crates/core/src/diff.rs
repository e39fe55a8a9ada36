//! The base/head ref pair produced by diff resolution.

use crate::refs::normalize_ref;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pair of refs bounding what an event changed.
///
/// Either side may be a fully qualified ref (`refs/heads/main`,
/// `refs/pull/7/merge`) or a commit SHA, depending on how it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffInfo {
    /// The ref or SHA to compare from.
    pub base: String,
    /// The ref or SHA to compare to.
    pub head: String,
}

impl DiffInfo {
    /// Create a diff info from two refs or SHAs, taken verbatim.
    #[must_use]
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
        }
    }

    /// Diff info for a `pull_request` event: the pull request's base branch
    /// against the ref the workflow was triggered for.
    #[must_use]
    pub fn for_pull_request(base_ref: &str, context_ref: &str) -> Self {
        Self {
            base: normalize_ref(base_ref),
            head: normalize_ref(context_ref),
        }
    }
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.base, self.head)
    }
}
