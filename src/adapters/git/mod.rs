//! Git integration adapter
//!
//! Implements the `ObjectStore` and `ConfigSource` ports by running the
//! `git` binary. Calls are blocking and never retried.
//!
//! - [`hooks`] - Git hooks installation

pub mod hooks;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::core::ports::{ConfigSource, ObjectStore};

pub use hooks::{HookInstall, install_commit_msg, remove_commit_msg};

/// Git-based object store
#[derive(Debug, Clone)]
pub struct GitObjectStore {
    /// Working directory
    workdir: PathBuf,
}

impl GitObjectStore {
    /// Create a git object store rooted at `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git object store for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Create a store for the current directory if it is inside a git work tree
    #[must_use]
    pub fn discover() -> Option<Self> {
        let store = Self::current_dir().ok()?;
        is_inside_work_tree(&store.workdir).then_some(store)
    }

    fn git(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new("git").current_dir(&self.workdir).args(args).output()?;
        stdout_of(args, &output)
    }

    fn var(&self, name: &str) -> anyhow::Result<String> {
        self.git(&["var", name])
    }
}

impl Default for GitObjectStore {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl ObjectStore for GitObjectStore {
    fn write_tree(&self) -> anyhow::Result<String> {
        self.git(&["write-tree"])
    }

    fn resolve(&self, rev: &str) -> anyhow::Result<Option<String>> {
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(["rev-parse", "--verify", "--quiet", rev])
            .output()?;

        // --verify --quiet exits 1 without output for a missing revision
        if output.status.code() == Some(1) && output.stdout.is_empty() {
            return Ok(None);
        }

        stdout_of(&["rev-parse", rev], &output).map(Some)
    }

    fn parents_of(&self, rev: &str) -> anyhow::Result<Vec<String>> {
        let spec = format!("{rev}^@");
        let parents = self.git(&["rev-parse", spec.as_str()])?;
        Ok(parents.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    fn author_ident(&self) -> anyhow::Result<String> {
        self.var("GIT_AUTHOR_IDENT")
    }

    fn committer_ident(&self) -> anyhow::Result<String> {
        self.var("GIT_COMMITTER_IDENT")
    }

    fn hash_commit_object(&self, blob: &str) -> anyhow::Result<String> {
        let args = ["hash-object", "-t", "commit", "--stdin"];
        let mut child = Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(blob.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        stdout_of(&args, &output)
    }
}

/// `git config` backed configuration source
#[derive(Debug, Clone)]
pub struct GitConfigSource {
    /// Working directory
    workdir: PathBuf,
}

impl GitConfigSource {
    /// Create a config source rooted at `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }
}

impl Default for GitConfigSource {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl ConfigSource for GitConfigSource {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(["config", "--get", key])
            .output()?;

        // Exit status 1 means the key is not set
        if output.status.code() == Some(1) {
            return Ok(None);
        }

        let value = stdout_of(&["config", "--get", key], &output)?;
        Ok(Some(value))
    }
}

/// Directory git runs hooks from (honors `core.hooksPath`)
///
/// # Errors
///
/// Returns an error if `workdir` is not inside a git repository.
pub fn hooks_dir(workdir: &Path) -> anyhow::Result<PathBuf> {
    let args = ["rev-parse", "--git-path", "hooks"];
    let output = Command::new("git").current_dir(workdir).args(args).output()?;
    let dir = PathBuf::from(stdout_of(&args, &output)?);
    Ok(if dir.is_absolute() { dir } else { workdir.join(dir) })
}

/// Check if `path` is inside a git work tree
#[must_use]
pub fn is_inside_work_tree(path: &Path) -> bool {
    Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .is_ok_and(|o| o.status.success() && String::from_utf8_lossy(&o.stdout).trim() == "true")
}

fn stdout_of(args: &[&str], output: &Output) -> anyhow::Result<String> {
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
