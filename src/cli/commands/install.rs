//! Install and remove the commit-msg hook

use cotrail::adapters::git::{hooks_dir, install_commit_msg, remove_commit_msg};
use cotrail::output::{InstallResult, OperationResult, OutputMode};

/// Install the commit-msg hook for the current repository
pub fn install(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let dir = hooks_dir(&std::env::current_dir()?)?;
    let outcome = install_commit_msg(&dir, force)?;

    InstallResult {
        hook: dir.join("commit-msg").display().to_string(),
        outcome,
    }
    .render(mode);

    Ok(())
}

/// Remove the commit-msg hook from the current repository
pub fn uninstall(mode: OutputMode) -> anyhow::Result<()> {
    let dir = hooks_dir(&std::env::current_dir()?)?;
    let removed = remove_commit_msg(&dir)?;

    let message = if removed {
        "Removed cotrail from commit-msg hook".to_string()
    } else {
        "cotrail hook not installed".to_string()
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
