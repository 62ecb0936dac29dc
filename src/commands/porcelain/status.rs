use crate::domain::areas::repository::Repository;
use crate::domain::objects::change_record::{ChangeRecord, group_by_directory, parse_porcelain};
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Working-tree changes as reported by `git status --porcelain`,
    /// parsed into typed records. Rebuilt on every call.
    pub async fn changed_files(&self) -> anyhow::Result<Vec<ChangeRecord>> {
        let raw = self
            .git()
            .run(&["status", "--porcelain"])
            .await?
            .require("status")?;

        Ok(parse_porcelain(&raw))
    }

    /// Show the working-tree status, flat or grouped by directory, with a
    /// footer when local commits have not reached the upstream yet.
    pub async fn status(&mut self, group: bool) -> anyhow::Result<()> {
        let records = self.changed_files().await?;

        if records.is_empty() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        } else if group {
            for (directory, members) in group_by_directory(&records) {
                writeln!(self.writer(), "{}", format!("{directory}:").bold())?;
                for record in members {
                    writeln!(self.writer(), "  {record}")?;
                }
            }
        } else {
            for record in &records {
                writeln!(self.writer(), "{record}")?;
            }
        }

        if self.unpushed_commits().await? {
            writeln!(self.writer(), "{}", "you have unpushed commits".yellow())?;
        }

        Ok(())
    }
}
