//! Object store port
//!
//! Defines the version-control primitives used for Change-Id generation
//! and merge detection.

/// Access to git's object database and identity settings
///
/// Every method is optional in practice: callers treat an error as
/// "primitive unavailable" and fall back, never as a fatal condition.
pub trait ObjectStore {
    /// Write the current index as a tree object and return its hash
    fn write_tree(&self) -> anyhow::Result<String>;

    /// Resolve a revision to an object hash, `None` if it does not exist
    fn resolve(&self, rev: &str) -> anyhow::Result<Option<String>>;

    /// Parent commit hashes of a revision
    fn parents_of(&self, rev: &str) -> anyhow::Result<Vec<String>>;

    /// Author identity, `Name <email> <epoch> <tz>`
    fn author_ident(&self) -> anyhow::Result<String>;

    /// Committer identity, `Name <email> <epoch> <tz>`
    fn committer_ident(&self) -> anyhow::Result<String>;

    /// Hash a raw blob as a commit object (without writing it)
    fn hash_commit_object(&self, blob: &str) -> anyhow::Result<String>;
}
