use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A fresh work tree: `git init` on the `main` branch with a throwaway
/// author identity configured locally.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "-b", "main"])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["config", "user.email", "fake_email@email.com"],
    )
    .assert()
    .success();

    repository_dir
}

/// A work tree with `1.txt` and `a/2.txt` already committed, so tests can
/// modify tracked files.
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let repository_dir = init_repository_dir;

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["commit", "-m", "initial"])
        .assert()
        .success();

    repository_dir
}

/// Run grit with its settings file redirected into the test directory and
/// colors forced off, so output assertions see plain text.
pub fn run_grit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("grit").expect("Failed to find grit binary");
    cmd.env("GRIT_CONFIG_FILE", dir.join("grit-config.json"));
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Wire a bare repository up as `origin` of `dir`, so push tests run over
/// the file transport without any network. Keep the returned dir alive for
/// the duration of the test.
pub fn add_bare_origin(dir: &Path) -> TempDir {
    let origin = TempDir::new().expect("Failed to create temp dir");
    run_git_command(origin.path(), &["init", "--bare", "-b", "main"])
        .assert()
        .success();
    run_git_command(
        dir,
        &["remote", "add", "origin", &origin.path().display().to_string()],
    )
    .assert()
    .success();

    origin
}
