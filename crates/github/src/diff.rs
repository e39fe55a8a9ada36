//! Resolution of the base/head pair for the triggering event.
//!
//! Pull request events compare the target branch with the workflow ref.
//! Push events are mapped onto a pull request where one explains the push:
//!
//! - a push to a feature branch with an open pull request compares the
//!   pull request's base with its merge ref
//! - a new branch created from the default branch picks up the pull request
//!   associated with the pushed commit
//! - a push to the default branch that merged a pull request compares that
//!   pull request's merge ref with the new head
//!
//! Anything else falls back to the push's `before` and `after` SHAs.

use crate::api::PullRequestApi;
use diffref_core::context::RefPayload;
use diffref_core::refs::{branch_name, is_null_sha, normalize_ref, pull_merge_ref};
use diffref_core::{DiffInfo, EventContext, Result};
use tracing::{debug, info};

/// Whether the workflow runs for the repository's default branch.
///
/// The default branch is taken from the payload when it carries one, so most
/// push events need no API call for this.
pub async fn is_default_branch(api: &dyn PullRequestApi, ctx: &EventContext) -> Result<bool> {
    let default_branch = match ctx.payload.default_branch() {
        Some(branch) => branch.to_string(),
        None => api.default_branch().await?,
    };
    let current = branch_name(&ctx.git_ref).unwrap_or_default();
    debug!(%default_branch, %current, "Comparing with default branch");
    Ok(default_branch == current)
}

/// Diff info for a pull request event.
#[must_use]
pub fn diff_info_for_pull_request(base: &RefPayload, ctx: &EventContext) -> DiffInfo {
    DiffInfo::for_pull_request(&base.ref_name, &ctx.git_ref)
}

/// Diff info for a push event.
pub async fn diff_info_for_push(api: &dyn PullRequestApi, ctx: &EventContext) -> Result<DiffInfo> {
    let before = ctx.payload.before.as_str();
    let after = ctx.payload.after.as_str();

    let on_default_branch = is_default_branch(api, ctx).await?;

    match (on_default_branch, is_null_sha(before)) {
        (false, _) => {
            if let Some(pull) = api.find_pull_request(&ctx.git_ref).await? {
                debug!(number = pull.number, "Push to a branch with an open pull request");
                return Ok(DiffInfo::new(
                    normalize_ref(&pull.base_ref),
                    pull_merge_ref(pull.number),
                ));
            }
        }
        (true, true) => {
            // default branch => new branch
            let pulls = api.pulls_for_commit(&ctx.sha).await?;
            if let Some(pull) = pulls.first() {
                debug!(number = pull.number, "New branch created with an associated pull request");
                return Ok(DiffInfo::new(
                    normalize_ref(&pull.base_ref),
                    pull_merge_ref(pull.number),
                ));
            }
        }
        (true, false) => {
            // merge
            let pulls = api.pulls_for_commit(before).await?;
            if let Some(pull) = pulls
                .iter()
                .find(|pull| pull.merge_commit_sha.as_deref() == Some(before))
            {
                debug!(number = pull.number, "Push merged a pull request");
                return Ok(DiffInfo::new(pull_merge_ref(pull.number), after));
            }
        }
    }

    debug!("No pull request explains the push, comparing before and after");
    Ok(DiffInfo::new(before, after))
}

/// Diff info for the event in `ctx`.
pub async fn diff_info(api: &dyn PullRequestApi, ctx: &EventContext) -> Result<DiffInfo> {
    let info = match &ctx.payload.pull_request {
        Some(pull) => diff_info_for_pull_request(&pull.base, ctx),
        None => diff_info_for_push(api, ctx).await?,
    };
    info!(base = %info.base, head = %info.head, event = %ctx.event_name, "Resolved diff info");
    Ok(info)
}
