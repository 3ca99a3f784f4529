//! Tests for the git-backed object store and config source

use cotrail::adapters::git::{GitConfigSource, GitObjectStore, hooks_dir, is_inside_work_tree};
use cotrail::core::models::HookConfig;
use cotrail::core::ports::{ConfigSource, ObjectStore};
use cotrail::core::services::{content_change_id, is_merge_commit};

use crate::common::git_repo::TempGitRepo;

fn store(repo: &TempGitRepo) -> GitObjectStore {
    GitObjectStore::new(repo.path().to_path_buf())
}

#[test]
fn test_write_tree_matches_git() {
    let repo = TempGitRepo::new();
    repo.write_file("a.txt", "hello\n");
    repo.stage("a.txt");

    let tree = store(&repo).write_tree().unwrap();
    assert_eq!(tree.len(), 40);
    assert_eq!(tree, repo.git_stdout(&["write-tree"]));
}

#[test]
fn test_resolve_unborn_head() {
    let repo = TempGitRepo::new();
    assert_eq!(store(&repo).resolve("HEAD^0").unwrap(), None);
}

#[test]
fn test_resolve_and_parents() {
    let repo = TempGitRepo::new();
    repo.commit_file("a.txt", "one\n", "first");
    let first = repo.git_stdout(&["rev-parse", "HEAD"]);
    repo.commit_file("a.txt", "two\n", "second");

    let store = store(&repo);
    let head = store.resolve("HEAD^0").unwrap().unwrap();
    assert_eq!(head, repo.git_stdout(&["rev-parse", "HEAD"]));
    assert_eq!(store.parents_of("HEAD").unwrap(), vec![first]);
}

#[test]
fn test_idents() {
    let repo = TempGitRepo::new();
    let store = store(&repo);
    assert!(store.author_ident().unwrap().starts_with("Test User <test@example.com> "));
    assert!(store.committer_ident().unwrap().starts_with("Test User <test@example.com> "));
}

#[test]
fn test_hash_commit_object_matches_git() {
    let repo = TempGitRepo::new();
    repo.commit_file("a.txt", "one\n", "first");

    let store = store(&repo);
    let tree = store.write_tree().unwrap();
    let blob = format!(
        "tree {tree}\nauthor A <a@example.com> 1700000000 +0000\ncommitter A <a@example.com> 1700000000 +0000\n\nmsg\n"
    );
    let hash = store.hash_commit_object(&blob).unwrap();

    assert_eq!(hash.len(), 40);
    assert!(hash.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn test_content_change_id_is_stable() {
    let repo = TempGitRepo::new();
    repo.commit_file("a.txt", "one\n", "first");
    repo.write_file("b.txt", "two\n");
    repo.stage("b.txt");

    let store = store(&repo);
    let first = content_change_id("feat: x", &store).unwrap();
    let second = content_change_id("feat: x", &store).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 41);
    assert!(first.starts_with('I'));
}

#[test]
fn test_amended_merge_detected() {
    let repo = TempGitRepo::new();
    repo.commit_file("a.txt", "base\n", "base");
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.commit_file("b.txt", "topic\n", "topic");
    repo.git(&["checkout", "-q", "-"]);
    repo.commit_file("c.txt", "main\n", "main");
    let merged = repo.git(&["merge", "--no-edit", "--no-ff", "-q", "topic"]);
    assert!(merged.status.success(), "merge failed: {merged:?}");

    let store = store(&repo);
    assert!(is_merge_commit(std::path::Path::new("COMMIT_EDITMSG"), "amend", Some(&store)));

    repo.write_file("d.txt", "staged\n");
    repo.stage("d.txt");
    assert!(!is_merge_commit(std::path::Path::new("COMMIT_EDITMSG"), "amend", Some(&store)));
}

#[test]
fn test_config_source() {
    let repo = TempGitRepo::new();
    repo.git(&["config", "gerrit.createChangeId", "false"]);
    repo.git(&["config", "core.commentChar", ";"]);

    let source = GitConfigSource::new(repo.path().to_path_buf());
    assert_eq!(source.get("gerrit.createchangeid").unwrap().as_deref(), Some("false"));
    assert_eq!(source.get("commitmsg.unset-key").unwrap(), None);

    let config = HookConfig::load(&source);
    assert!(!config.create_change_id);
    assert!(config.create_co_developed_by);
    assert_eq!(config.comment_char, ";");
}

#[test]
fn test_work_tree_detection() {
    let repo = TempGitRepo::new();
    assert!(is_inside_work_tree(repo.path()));
    assert!(!is_inside_work_tree(&repo.path().join(".git")));

    let hooks = hooks_dir(repo.path()).unwrap();
    assert!(hooks.ends_with(".git/hooks"), "{}", hooks.display());
}
