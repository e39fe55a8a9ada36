//! Core types for diffref.
//!
//! This crate holds everything that does not need network access:
//! - [`DiffInfo`], the base/head pair describing what an event changed
//! - [`EventContext`], the GitHub Actions runtime context and event payload
//! - [`Config`], runtime configuration read from the environment
//! - [`shell`], defensive escaping of shell arguments
//! - [`refs`], helpers for working with git ref names

pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod refs;
pub mod shell;

pub use config::Config;
pub use context::{EventContext, EventPayload, RepoSlug};
pub use diff::DiffInfo;
pub use error::{Error, Result};
