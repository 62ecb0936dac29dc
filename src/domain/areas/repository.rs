use crate::domain::areas::git::GitClient;
use crate::domain::areas::settings::Settings;
use crate::domain::objects::proxy::build_git_env;
use anyhow::{Context, bail};
use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An opened git work tree plus everything one operation needs: the
/// subprocess client with its proxy-aware environment, the user settings,
/// and the output writer.
///
/// Constructed once per user-initiated operation. Settings and environment
/// are resolved at construction and never cached beyond it, so a settings
/// change is picked up by the very next command.
pub struct Repository {
    root: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    settings: Settings,
    git: GitClient,
}

impl Repository {
    /// Open the work tree containing `start`. Fails before any subprocess
    /// is spawned when `start` is not inside one.
    pub fn open(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("cannot access {}", start.display()))?;
        let root = Self::discover_work_tree(&start)?;

        let settings = Settings::load()?;
        let env = build_git_env(&ambient_env(), settings.proxy());
        let git = GitClient::new(root.clone().into_boxed_path(), env);

        Ok(Repository {
            root: root.into_boxed_path(),
            writer: RefCell::new(writer),
            settings,
            git,
        })
    }

    /// Walk ancestors looking for a `.git` entry, like git's own discovery.
    /// `.git` may be a directory or, for linked work trees, a file.
    fn discover_work_tree(start: &Path) -> anyhow::Result<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(".git").exists() {
                return Ok(dir.to_path_buf());
            }
            current = dir.parent();
        }

        bail!(
            "not a git repository (or any of the parent directories): {}",
            start.display()
        );
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &GitClient {
        &self.git
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Ambient process environment as a string map. Variables that are not
/// valid UTF-8 are dropped rather than aborting the operation.
fn ambient_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
