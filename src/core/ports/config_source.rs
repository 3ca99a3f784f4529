//! Configuration source port

/// A dotted-key configuration store such as `git config`
pub trait ConfigSource {
    /// Value of `key`, `None` when it is not set
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
}
