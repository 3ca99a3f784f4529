//! Git hooks installation
//!
//! Installs the `commit-msg` hook that runs `cotrail exec`. Existing hooks
//! are preserved: our section is appended between marker comments and
//! removal only strips that section.

use std::fs;
use std::path::Path;

use serde::Serialize;

const HOOK_NAME: &str = "commit-msg";
const SHEBANG: &str = "#!/bin/sh";
const SECTION_BEGIN: &str = "# >>> cotrail >>>";
const SECTION_END: &str = "# <<< cotrail <<<";

/// What `install_commit_msg` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookInstall {
    /// Wrote a new hook file
    Created,
    /// Added our section to an existing hook
    Appended,
    /// Replaced our section in an existing hook
    Replaced,
    /// Our section was already present
    AlreadyInstalled,
}

/// The hook section cotrail owns
#[must_use]
pub fn hook_section() -> String {
    format!(
        "{SECTION_BEGIN}\n\
         # Adds Change-Id and Co-developed-by trailers\n\
         cotrail exec \"$1\" || exit $?\n\
         {SECTION_END}\n"
    )
}

/// Install the commit-msg hook into `hooks_dir`
///
/// # Errors
///
/// Returns an error if `hooks_dir` does not exist or the hook cannot be written.
pub fn install_commit_msg(hooks_dir: &Path, force: bool) -> anyhow::Result<HookInstall> {
    if !hooks_dir.exists() {
        anyhow::bail!("Not a git repository ({} not found)", hooks_dir.display());
    }

    let hook_path = hooks_dir.join(HOOK_NAME);
    let outcome = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        let installed = existing.contains(SECTION_BEGIN);
        if installed && !force {
            return Ok(HookInstall::AlreadyInstalled);
        }

        let base = remove_cotrail_section(&existing);
        fs::write(&hook_path, format!("{}\n\n{}", base.trim_end(), hook_section()))?;
        if installed {
            HookInstall::Replaced
        } else {
            HookInstall::Appended
        }
    } else {
        fs::write(&hook_path, format!("{SHEBANG}\n\n{}", hook_section()))?;
        HookInstall::Created
    };

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    log::debug!("commit-msg hook at {}: {outcome:?}", hook_path.display());
    Ok(outcome)
}

/// Remove our section from the commit-msg hook in `hooks_dir`
///
/// Deletes the file when nothing but a shebang is left. Returns whether
/// anything was removed.
///
/// # Errors
///
/// Returns an error if the hook cannot be read, written or deleted.
pub fn remove_commit_msg(hooks_dir: &Path) -> anyhow::Result<bool> {
    let hook_path = hooks_dir.join(HOOK_NAME);
    if !hook_path.exists() {
        return Ok(false);
    }

    let existing = fs::read_to_string(&hook_path)?;
    if !existing.contains(SECTION_BEGIN) {
        return Ok(false);
    }

    let remaining = remove_cotrail_section(&existing);
    if remaining.trim().is_empty() || remaining.trim() == SHEBANG {
        fs::remove_file(&hook_path)?;
    } else {
        fs::write(&hook_path, remaining)?;
    }
    Ok(true)
}

/// Strip the marked cotrail section (and the blank lines before it)
#[must_use]
pub fn remove_cotrail_section(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        if line.trim() == SECTION_BEGIN {
            while kept.last().is_some_and(|l| l.trim().is_empty()) {
                kept.pop();
            }
            inside = true;
        } else if inside {
            inside = line.trim() != SECTION_END;
        } else {
            kept.push(line);
        }
    }

    if kept.is_empty() {
        String::new()
    } else {
        format!("{}\n", kept.join("\n"))
    }
}
