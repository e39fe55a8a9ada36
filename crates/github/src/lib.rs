//! GitHub side of diffref.
//!
//! - [`PullRequestApi`], the handful of REST calls diff resolution needs
//! - [`GitHubApi`], its octocrab implementation
//! - [`diff`], resolution of [`DiffInfo`](diffref_core::DiffInfo) from an
//!   [`EventContext`](diffref_core::EventContext)

pub mod api;
pub mod diff;

pub use api::{GitHubApi, PullRequestApi, PullSummary};
pub use diff::{diff_info, diff_info_for_pull_request, diff_info_for_push, is_default_branch};
