//! Tests for the end-to-end message pipeline

use std::fs;

use cotrail::core::models::{EnvSnapshot, HookConfig, PipelineOutcome};
use cotrail::core::services::{HookError, Pipeline, has_change_id, has_co_developed_by};
use tempfile::TempDir;

use crate::common::mocks::MockObjectStore;

const CLAUDE_LINE: &str = "Co-developed-by: Claude <noreply@anthropic.com>";

fn claude_env() -> EnvSnapshot {
    [("CLAUDECODE", "1")].into_iter().collect()
}

fn count_prefix(message: &str, prefix: &str) -> usize {
    message.lines().filter(|l| l.starts_with(prefix)).count()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_basic_insertion() {
    let config = HookConfig::default();
    let store = MockObjectStore::new();
    let env = claude_env();

    let outcome = Pipeline::new(&config, Some(&store), &env).process("feat: x\n\nbody");

    assert!(outcome.should_save);
    let lines: Vec<&str> = outcome.message.lines().collect();
    assert_eq!(&lines[..4], &["feat: x", "", "body", ""]);
    assert!(lines[4].starts_with("Change-Id: I"));
    assert!(has_change_id(lines[4]));
    assert_eq!(lines[5], CLAUDE_LINE);
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_no_agent_only_change_id() {
    let config = HookConfig::default();
    let env = EnvSnapshot::default();

    let outcome = Pipeline::new(&config, None, &env).process("feat: x");

    assert!(outcome.should_save);
    assert_eq!(count_prefix(&outcome.message, "Change-Id: "), 1);
    assert!(!has_co_developed_by(&outcome.message));
}

#[test]
fn test_temporary_commit() {
    let config = HookConfig::default();
    let store = MockObjectStore::new();
    let env = claude_env();

    let outcome = Pipeline::new(&config, Some(&store), &env).process("fixup! feat: x\n\nbody\n");

    assert_eq!(
        outcome,
        PipelineOutcome {
            message: "fixup! feat: x\n\nbody".to_string(),
            should_save: false,
        }
    );
}

#[test]
fn test_existing_change_id_is_kept() {
    let config = HookConfig::default();
    let store = MockObjectStore::new();
    let env = EnvSnapshot::default();
    let raw = "feat: x\n\nChange-Id: Iabc1230000000000000000000000000000000000\n";

    let outcome = Pipeline::new(&config, Some(&store), &env).process(raw);

    assert_eq!(outcome.message, raw.trim_end());
    assert!(!outcome.should_save);
    assert!(store.hashed_blobs().is_empty(), "no Change-Id should be computed");
}

#[test]
fn test_malformed_change_id_is_not_recognized() {
    let config = HookConfig {
        create_co_developed_by: false,
        ..HookConfig::default()
    };
    let env = EnvSnapshot::default();

    let outcome = Pipeline::new(&config, None, &env).process("feat: x\n\nChange-Id: XYZ");

    assert_eq!(count_prefix(&outcome.message, "Change-Id: "), 2);
}

#[test]
fn test_existing_co_developed_by_is_kept() {
    let config = HookConfig::default();
    let env = claude_env();
    let raw = "feat: x\n\nco-developed-by: Someone <s@example.com>";

    let outcome = Pipeline::new(&config, None, &env).process(raw);

    assert!(!outcome.message.contains(CLAUDE_LINE));
    assert_eq!(count_prefix(&outcome.message, "Change-Id: "), 1);
}

#[test]
fn test_subject_body_spacing_alone_saves() {
    let config = HookConfig {
        create_change_id: false,
        create_co_developed_by: false,
        ..HookConfig::default()
    };
    let env = claude_env();

    let outcome = Pipeline::new(&config, None, &env).process("subject\nbody line");

    assert_eq!(outcome.message, "subject\n\nbody line");
    assert!(outcome.should_save);
}

#[test]
fn test_disabled_trailers() {
    let config = HookConfig {
        create_change_id: false,
        create_co_developed_by: false,
        ..HookConfig::default()
    };
    let env = claude_env();

    let outcome = Pipeline::new(&config, None, &env).process("feat: x\n\n# comment\nbody");

    assert_eq!(outcome.message, "feat: x\n\nbody");
    assert!(!outcome.should_save);
}

#[test]
fn test_scissors_scenario() {
    let config = HookConfig {
        create_change_id: false,
        create_co_developed_by: false,
        ..HookConfig::default()
    };
    let env = EnvSnapshot::default();
    let raw = "feat: x\n\nkeep\n# ------------------------ >8 ------------------------\n# drop this";

    let outcome = Pipeline::new(&config, None, &env).process(raw);

    assert_eq!(outcome.message, "feat: x\n\nkeep");
}

#[test]
fn test_comment_only_aborts() {
    let config = HookConfig::default();
    let env = claude_env();

    let outcome = Pipeline::new(&config, None, &env).process("# Please enter a message\n#\n");

    assert_eq!(outcome, PipelineOutcome::unchanged());
}

#[test]
fn test_second_run_is_noop() {
    let config = HookConfig::default();
    let store = MockObjectStore::new();
    let env = claude_env();
    let pipeline = Pipeline::new(&config, Some(&store), &env);

    let first = pipeline.process("feat: x\n\nbody\n\nSigned-off-by: A <a@example.com>");
    let second = pipeline.process(&first.message);

    assert!(first.should_save);
    assert!(!second.should_save);
    assert_eq!(second.message, first.message);
    assert_eq!(count_prefix(&second.message, "Change-Id: "), 1);
    assert_eq!(count_prefix(&second.message, "Co-developed-by: "), 1);
}

// =============================================================================
// MESSAGE FILES
// =============================================================================

#[test]
fn test_run_file_missing() {
    let config = HookConfig::default();
    let env = EnvSnapshot::default();
    let temp = TempDir::new().unwrap();

    let err = Pipeline::new(&config, None, &env)
        .run_file(&temp.path().join("COMMIT_EDITMSG"))
        .unwrap_err();

    assert!(matches!(err, HookError::MessageFileNotFound(_)));
}

#[test]
fn test_run_file_merge_msg_is_untouched() {
    let config = HookConfig::default();
    let env = claude_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("MERGE_MSG");
    fs::write(&path, "Resolve conflicts\n").unwrap();

    let outcome = Pipeline::new(&config, None, &env).run_file(&path).unwrap();

    assert_eq!(outcome, PipelineOutcome::unchanged());
}

#[test]
fn test_run_file_merge_subject_is_untouched() {
    let config = HookConfig::default();
    let env = claude_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("COMMIT_EDITMSG");
    fs::write(&path, "Merge branch 'topic'\n").unwrap();

    let outcome = Pipeline::new(&config, None, &env).run_file(&path).unwrap();

    assert!(!outcome.should_save);
}

#[test]
fn test_run_file_processes_message() {
    let config = HookConfig::default();
    let store = MockObjectStore::new();
    let env = claude_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("COMMIT_EDITMSG");
    fs::write(&path, "feat: x\n").unwrap();

    let outcome = Pipeline::new(&config, Some(&store), &env).run_file(&path).unwrap();

    assert!(outcome.should_save);
    assert!(outcome.message.ends_with(CLAUDE_LINE));
}
