//! grit - a proxy-aware git workflow companion.
//!
//! Every substantive operation is delegated to the `git` binary on PATH;
//! this crate owns the porcelain-status parsing, the proxy-aware subprocess
//! environment, and the CLI presentation layered on top.

pub mod commands;
pub mod core;
pub mod domain;
