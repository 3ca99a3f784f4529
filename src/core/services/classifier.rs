//! Commit classification
//!
//! Merge commits and temporary (`fixup!`/`squash!`) commits never get
//! trailers.

use std::path::Path;

use crate::core::ports::ObjectStore;

const MERGE_MSG_FILE: &str = "MERGE_MSG";

/// Whether the message being edited belongs to a merge commit
///
/// Any of the following is enough:
/// - the message file is `MERGE_MSG`
/// - the subject starts with `Merge `
/// - nothing is staged relative to `HEAD` and `HEAD` itself has two or more
///   parents (amending a merge)
///
/// Git primitive failures count as "not a merge".
#[must_use]
pub fn is_merge_commit(msg_file: &Path, message: &str, store: Option<&dyn ObjectStore>) -> bool {
    if msg_file.file_name().is_some_and(|name| name == MERGE_MSG_FILE) {
        return true;
    }

    if first_line(message).starts_with("Merge ") {
        return true;
    }

    store.is_some_and(amends_merge)
}

/// Whether the subject marks a commit to be squashed by `rebase --autosquash`
#[must_use]
pub fn is_temporary_commit(message: &str) -> bool {
    let subject = first_line(message);
    subject.starts_with("fixup!") || subject.starts_with("squash!")
}

// TODO: an amended merge with staged changes is missed here; prepare-commit-msg
// receives the commit source and could record it for this hook.
fn amends_merge(store: &dyn ObjectStore) -> bool {
    let index_tree = match store.write_tree() {
        Ok(tree) => tree,
        Err(e) => {
            log::debug!("Merge detection: write-tree failed: {e:#}");
            return false;
        },
    };

    match store.resolve("HEAD^{tree}") {
        Ok(Some(head_tree)) if head_tree == index_tree => {},
        Ok(_) => return false,
        Err(e) => {
            log::debug!("Merge detection: cannot resolve HEAD tree: {e:#}");
            return false;
        },
    }

    match store.parents_of("HEAD") {
        Ok(parents) => parents.len() >= 2,
        Err(e) => {
            log::debug!("Merge detection: cannot list HEAD parents: {e:#}");
            false
        },
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}
