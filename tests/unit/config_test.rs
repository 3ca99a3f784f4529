//! Tests for hook configuration loading

use cotrail::core::models::{HookConfig, parse_bool};

use crate::common::mocks::MapConfigSource;

#[test]
fn test_defaults() {
    let config = HookConfig::default();
    assert!(config.create_change_id);
    assert!(config.create_co_developed_by);
    assert_eq!(config.comment_char, "#");
}

#[test]
fn test_empty_source_gives_defaults() {
    assert_eq!(HookConfig::load(&MapConfigSource::default()), HookConfig::default());
}

#[test]
fn test_failing_source_gives_defaults() {
    assert_eq!(HookConfig::load(&MapConfigSource::failing()), HookConfig::default());
}

#[test]
fn test_parse_bool() {
    for value in ["true", "TRUE", "yes", "On", "1", " true "] {
        assert!(parse_bool(value), "{value}");
    }
    for value in ["false", "no", "off", "0", "", "2", "enabled"] {
        assert!(!parse_bool(value), "{value}");
    }
}

#[test]
fn test_first_alias_wins() {
    let source = MapConfigSource::new(&[
        ("gerrit.createchangeid", "false"),
        ("commit-msg.changeid", "true"),
    ]);
    assert!(!HookConfig::load(&source).create_change_id);

    let source = MapConfigSource::new(&[("commitmsg.changeid", "no")]);
    assert!(!HookConfig::load(&source).create_change_id);
}

#[test]
fn test_co_developed_by_aliases() {
    let source = MapConfigSource::new(&[("commitmsg.codevelopedby", "off")]);
    let config = HookConfig::load(&source);
    assert!(!config.create_co_developed_by);
    assert!(config.create_change_id);
}

#[test]
fn test_comment_char() {
    let source = MapConfigSource::new(&[("core.commentchar", ";")]);
    assert_eq!(HookConfig::load(&source).comment_char, ";");

    let source = MapConfigSource::new(&[("core.commentchar", "auto")]);
    assert_eq!(HookConfig::load(&source).comment_char, "#");
}
