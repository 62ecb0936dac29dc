use crate::domain::areas::repository::Repository;
use crate::domain::objects::commit_type::CommitType;
use anyhow::bail;
use std::io::Write;

impl Repository {
    /// The quick-commit flow: optional staging, optional conventional-commit
    /// prefix, then `git commit`, then an optional chained push.
    ///
    /// A blank message is a cooperative cancellation, not an error: the user
    /// backed out before anything was staged or committed. An unknown commit
    /// type fails before any subprocess runs. A failed or declined push
    /// leaves the commit in place; the two steps are independent.
    pub async fn commit(
        &mut self,
        message: &str,
        commit_type: Option<&str>,
        paths: &[String],
        all: bool,
        push: bool,
    ) -> anyhow::Result<()> {
        let message = message.trim();
        if message.is_empty() {
            writeln!(self.writer(), "empty commit message, nothing committed")?;
            return Ok(());
        }

        let subject = match commit_type {
            Some(name) => match CommitType::lookup(name) {
                Some(commit_type) => commit_type.subject(message),
                None => bail!(
                    "unknown commit type '{name}'; expected one of: {}",
                    CommitType::names()
                ),
            },
            None => message.to_string(),
        };

        if !paths.is_empty() {
            self.stage(paths).await?;
        } else if all {
            self.stage_all().await?;
        }

        let output = self.git().run(&["commit", "-m", &subject]).await?;
        if !output.success() {
            bail!("git commit failed: {}", output.detail());
        }
        write!(self.writer(), "{}", output.stdout())?;

        if push {
            self.push().await?;
        }

        Ok(())
    }
}
