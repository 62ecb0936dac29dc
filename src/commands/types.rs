//! The `types` command: list the conventional-commit prefixes the commit
//! flow accepts.

use crate::domain::objects::commit_type::CommitType;
use std::io::Write;

pub fn list(writer: &mut dyn Write) -> anyhow::Result<()> {
    for commit_type in CommitType::all() {
        writeln!(
            writer,
            "{:<10} {}  {}",
            commit_type.name, commit_type.icon, commit_type.summary
        )?;
    }

    Ok(())
}
