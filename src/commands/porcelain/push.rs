use crate::domain::areas::git::GitTimedOut;
use crate::domain::areas::repository::Repository;
use crate::domain::objects::push_error::PushFailure;
use std::io::Write;
use std::time::Duration;

/// Push is the one operation that talks to the network, so it is the one
/// operation with a time budget.
const PUSH_TIMEOUT: Duration = Duration::from_secs(30);

impl Repository {
    /// Push the current branch. When no upstream is configured yet, the
    /// first push wires one up with `-u origin <branch>`.
    pub async fn push(&mut self) -> anyhow::Result<()> {
        let branch = self.current_branch().await?;

        let args: Vec<&str> = if self.has_upstream().await? {
            vec!["push"]
        } else {
            vec!["push", "-u", "origin", &branch]
        };

        let output = match self.git().run_with_timeout(&args, PUSH_TIMEOUT).await {
            Ok(output) => output,
            Err(error) if error.is::<GitTimedOut>() => {
                return Err(PushFailure::TimedOut.into_error(""));
            }
            Err(error) => return Err(error),
        };

        if !output.success() {
            let stderr = output.stderr_trimmed();
            return Err(PushFailure::classify(stderr).into_error(stderr));
        }

        writeln!(self.writer(), "pushed {branch}")?;
        Ok(())
    }

    pub async fn current_branch(&self) -> anyhow::Result<String> {
        let raw = self
            .git()
            .run(&["rev-parse", "--abbrev-ref", "HEAD"])
            .await?
            .require("rev-parse")?;

        Ok(raw.trim().to_string())
    }

    /// Whether the current branch has an upstream configured. Resolving
    /// `@{u}` fails when it does not.
    async fn has_upstream(&self) -> anyhow::Result<bool> {
        let output = self.git().run(&["rev-parse", "--abbrev-ref", "@{u}"]).await?;
        Ok(output.success())
    }

    /// Whether local commits exist that the upstream has not seen. Any git
    /// failure here (no upstream, no commits yet) reads as `false` rather
    /// than an error; the answer only feeds an informational footer.
    pub async fn unpushed_commits(&self) -> anyhow::Result<bool> {
        let Ok(output) = self.git().run(&["log", "@{u}..HEAD", "--oneline"]).await else {
            return Ok(false);
        };
        if !output.success() {
            return Ok(false);
        }

        Ok(!output.stdout().trim().is_empty())
    }
}
