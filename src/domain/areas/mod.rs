//! Collaborators an operation works against
//!
//! - `repository`: the opened work tree, root of every operation
//! - `git`: the subprocess interface to the git binary
//! - `settings`: the persisted user settings (language, proxy)

pub mod git;
pub mod repository;
pub mod settings;
