//! Value types of the workflow domain
//!
//! Everything here is immutable data derived from git output or from the
//! persisted settings: parsed change records, the commit-type table, the
//! proxy configuration with its derived subprocess environment, and the
//! push failure taxonomy.

pub mod change_record;
pub mod commit_type;
pub mod proxy;
pub mod push_error;
