//! Helpers for git ref names as GitHub reports them.

const HEADS_PREFIX: &str = "refs/heads/";
const PULL_PREFIX: &str = "refs/pull/";

/// Qualify a short ref name.
///
/// Anything already under `refs/` is returned unchanged, everything else is
/// treated as a branch name.
#[must_use]
pub fn normalize_ref(git_ref: &str) -> String {
    if git_ref.starts_with("refs/") {
        git_ref.to_string()
    } else {
        format!("{HEADS_PREFIX}{git_ref}")
    }
}

/// Whether the ref points at a branch.
#[must_use]
pub fn is_branch(git_ref: &str) -> bool {
    git_ref.starts_with(HEADS_PREFIX)
}

/// The branch name of a `refs/heads/...` ref.
#[must_use]
pub fn branch_name(git_ref: &str) -> Option<&str> {
    git_ref.strip_prefix(HEADS_PREFIX)
}

/// The branch name for branch refs, the ref itself otherwise.
#[must_use]
pub fn branch_or_ref(git_ref: &str) -> &str {
    branch_name(git_ref).unwrap_or(git_ref)
}

/// The merge ref GitHub maintains for a pull request.
#[must_use]
pub fn pull_merge_ref(number: u64) -> String {
    format!("{PULL_PREFIX}{number}/merge")
}

/// Extract the pull request number from `refs/pull/<n>/...`.
#[must_use]
pub fn parse_pull_number(git_ref: &str) -> Option<u64> {
    git_ref
        .strip_prefix(PULL_PREFIX)?
        .split('/')
        .next()?
        .parse()
        .ok()
}

/// Whether a SHA is the all-zero placeholder sent for a newly created ref.
#[must_use]
pub fn is_null_sha(sha: &str) -> bool {
    !sha.is_empty() && sha.bytes().all(|b| b == b'0')
}
