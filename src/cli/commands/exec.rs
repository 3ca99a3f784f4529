//! Rewrite a commit message file
//!
//! This command is called by the commit-msg hook with the path of the
//! message file git is about to use.

use std::fs;
use std::path::Path;

use anyhow::Context;

use cotrail::adapters::git::{GitConfigSource, GitObjectStore};
use cotrail::core::models::{EnvSnapshot, HookConfig};
use cotrail::core::ports::ObjectStore;
use cotrail::core::services::Pipeline;
use cotrail::output::{ExecResult, OutputMode};

/// Run the pipeline over `commit_msg_file`
///
/// The file is only rewritten when the pipeline asks for it. Outside a git
/// work tree the Change-Id falls back to a local hash.
pub fn exec(commit_msg_file: &str, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(commit_msg_file);

    let git = GitObjectStore::discover();
    if git.is_none() {
        log::warn!("Not inside a git work tree, Change-Id will not be content-addressed");
    }
    let store = git.as_ref().map(|s| -> &dyn ObjectStore { s });

    let config = HookConfig::load(&GitConfigSource::default());
    let env = EnvSnapshot::from_process();

    let outcome = Pipeline::new(&config, store, &env).run_file(path)?;

    if dry_run {
        ExecResult::new(commit_msg_file, outcome).render(mode);
        return Ok(());
    }

    if outcome.should_save {
        fs::write(path, format!("{}\n", outcome.message))
            .with_context(|| format!("cannot write {commit_msg_file}"))?;
    }

    Ok(())
}
