//! Change-Id generation
//!
//! The id is the hash of a commit object built from the staged tree, the
//! current `HEAD`, author, committer and the cleaned message, prefixed with
//! `I` (the scheme Gerrit's own hook uses). Running it twice over the same
//! staged state and message yields the same id.
//!
//! Without a usable object store the id falls back to a 32-bit FNV-1a hash
//! of the message and the current time, zero-padded to 32 hex digits.

use crate::core::ports::ObjectStore;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const MIN_HASH_LEN: usize = 32;

/// Generate a Change-Id for a cleaned message
#[must_use]
pub fn generate_change_id(message: &str, store: Option<&dyn ObjectStore>) -> String {
    if let Some(store) = store {
        match content_change_id(message, store) {
            Ok(id) => return id,
            Err(e) => log::warn!("Falling back to local Change-Id hash: {e:#}"),
        }
    }
    fallback_change_id(message, chrono::Utc::now().timestamp_millis())
}

/// Content-addressed Change-Id from git's commit-object hashing
///
/// # Errors
///
/// Returns an error if any git primitive fails or returns a malformed hash.
pub fn content_change_id(message: &str, store: &dyn ObjectStore) -> anyhow::Result<String> {
    let tree = store.write_tree()?;
    let parent = store.resolve("HEAD^0")?;
    let author = store.author_ident()?;
    let committer = store.committer_ident()?;

    let blob = commit_blob(&tree, parent.as_deref(), &author, &committer, message);
    let hash = store.hash_commit_object(&blob)?;
    let hash = hash.trim();

    if hash.len() < MIN_HASH_LEN || !hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        anyhow::bail!("unexpected object hash: {hash:?}");
    }

    Ok(format!("I{hash}"))
}

/// Build the commit-object text hashed for the Change-Id
#[must_use]
pub fn commit_blob(
    tree: &str,
    parent: Option<&str>,
    author: &str,
    committer: &str,
    message: &str,
) -> String {
    let mut blob = format!("tree {tree}\n");
    if let Some(parent) = parent {
        blob.push_str(&format!("parent {parent}\n"));
    }
    blob.push_str(&format!("author {author}\ncommitter {committer}\n\n{message}"));
    blob
}

/// Time-salted Change-Id used when git cannot be queried
#[must_use]
pub fn fallback_change_id(message: &str, epoch_millis: i64) -> String {
    let input = format!("{message}\n{epoch_millis}\n");
    format!("I{:032x}", fnv1a(input.as_bytes()))
}

fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME))
}
