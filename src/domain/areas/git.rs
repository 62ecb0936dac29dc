use anyhow::bail;
use derive_new::new;
use std::collections::HashMap;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::Command;

/// Interface to the `git` binary.
///
/// Holds the work-tree root and the fully built subprocess environment.
/// Every invocation passes an argument vector (never a shell string), runs
/// with the root as working directory, and captures stdout and stderr.
#[derive(new)]
pub struct GitClient {
    root: Box<Path>,
    env: HashMap<String, String>,
}

impl GitClient {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn run(&self, args: &[&str]) -> anyhow::Result<GitOutput> {
        self.run_inner(args, None).await
    }

    /// Like `run`, but kills the subprocess and fails with [`GitTimedOut`]
    /// once `limit` elapses.
    pub async fn run_with_timeout(
        &self,
        args: &[&str],
        limit: Duration,
    ) -> anyhow::Result<GitOutput> {
        self.run_inner(args, Some(limit)).await
    }

    async fn run_inner(&self, args: &[&str], limit: Option<Duration>) -> anyhow::Result<GitOutput> {
        let mut command = Command::new("git");
        command
            .args(args)
            .current_dir(&self.root)
            .env_clear()
            .envs(&self.env)
            .kill_on_drop(true);

        let result = match limit {
            None => command.output().await,
            Some(limit) => match tokio::time::timeout(limit, command.output()).await {
                Ok(result) => result,
                Err(_) => return Err(GitTimedOut { limit }.into()),
            },
        };

        let output = result.map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => {
                anyhow::anyhow!("git executable not found; install git and make sure it is on PATH")
            }
            _ => anyhow::Error::new(error)
                .context(format!("failed to run git {}", args.join(" "))),
        })?;

        Ok(GitOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Captured result of one git invocation.
#[derive(Debug)]
pub struct GitOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }

    /// The most informative failure text: stderr when git wrote any, its
    /// stdout otherwise (git prints some refusals there).
    pub fn detail(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }

    /// Unwrap stdout, converting a failed invocation into an error that
    /// carries the subprocess's own explanation.
    pub fn require(self, action: &str) -> anyhow::Result<String> {
        if self.success() {
            Ok(self.stdout)
        } else {
            bail!("git {action} failed: {}", self.detail());
        }
    }
}

/// Marker error for a subprocess that exceeded its time budget; callers
/// downcast to distinguish it from spawn failures.
#[derive(Debug)]
pub struct GitTimedOut {
    pub limit: Duration,
}

impl std::fmt::Display for GitTimedOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "git did not finish within {}s", self.limit.as_secs())
    }
}

impl std::error::Error for GitTimedOut {}
