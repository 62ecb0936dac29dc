use assert_fs::TempDir;
use predicates::prelude::predicate;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;

mod common;

use common::command::{
    add_bare_origin, committed_repository_dir, repository_dir, run_grit_command,
};
use common::file::{FileSpec, write_file};

#[rstest]
fn clean_tree_reports_nothing_to_commit(committed_repository_dir: TempDir) {
    run_grit_command(committed_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to commit, working tree clean"));
}

#[rstest]
fn modified_and_untracked_files_are_listed(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    let file1 = FileSpec::new(
        repository_dir.path().join("1.txt"),
        "modified one".to_string(),
    );
    write_file(file1);

    let new_file = FileSpec::new(repository_dir.path().join("new.txt"), "brand new".to_string());
    write_file(new_file);

    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"modified:\s+1\.txt").unwrap())
        .stdout(predicate::str::is_match(r"untracked:\s+new\.txt").unwrap());
}

#[rstest]
fn grouped_status_collects_files_by_directory(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    let file1 = FileSpec::new(
        repository_dir.path().join("1.txt"),
        "modified one".to_string(),
    );
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "modified two".to_string(),
    );
    write_file(file2);

    run_grit_command(repository_dir.path(), &["status", "--group"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".:"))
        .stdout(predicate::str::contains("a:"))
        .stdout(predicate::str::is_match(r"modified:\s+a/2\.txt").unwrap());
}

#[rstest]
fn unpushed_commits_footer_tracks_the_upstream(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    let _origin = add_bare_origin(repository_dir.path());

    // No upstream yet, so nothing to report.
    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unpushed").not());

    run_grit_command(repository_dir.path(), &["push"])
        .assert()
        .success();

    let file1 = FileSpec::new(
        repository_dir.path().join("1.txt"),
        "ahead of origin".to_string(),
    );
    write_file(file1);
    run_grit_command(repository_dir.path(), &["commit", "--all", "-m", "go ahead"])
        .assert()
        .success();

    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("you have unpushed commits"));

    run_grit_command(repository_dir.path(), &["push"])
        .assert()
        .success();

    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unpushed").not());
}

#[rstest]
fn running_outside_a_work_tree_fails_before_any_subprocess(repository_dir: TempDir) {
    run_grit_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}
