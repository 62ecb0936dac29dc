use crate::domain::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Stage the given paths and report how many were handed to git.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.stage(paths).await?;

        let noun = if paths.len() == 1 { "path" } else { "paths" };
        writeln!(self.writer(), "staged {} {noun}", paths.len())?;

        Ok(())
    }

    /// `git add -- <paths>`. The paths travel as an argument vector and are
    /// never interpolated through a shell, so no quoting hazards exist.
    pub async fn stage(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));

        self.git().run(&args).await?.require("add")?;
        Ok(())
    }

    /// Stage every pending change, untracked files included.
    pub async fn stage_all(&self) -> anyhow::Result<()> {
        self.git().run(&["add", "--all"]).await?.require("add")?;
        Ok(())
    }
}
