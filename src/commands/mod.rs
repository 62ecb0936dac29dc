//! Command implementations
//!
//! Everything user-facing lives here, organized the way the CLI presents
//! it:
//!
//! - `porcelain`: git-delegating workflow commands (status, diff, add,
//!   commit, push)
//! - `settings`: the `config` command over the persisted settings file
//! - `types`: the commit-type listing

pub mod porcelain;
pub mod settings;
pub mod types;
