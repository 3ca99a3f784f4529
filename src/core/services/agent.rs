//! Agent detection from environment signals

use crate::core::models::{AGENT_RULES, EnvRule, EnvSnapshot};

/// Identity of the AI agent driving this commit, if any
#[must_use]
pub fn detect_agent(env: &EnvSnapshot) -> Option<&'static str> {
    detect_agent_with(AGENT_RULES, env)
}

/// Evaluate `rules` in order against `env`, first match wins
#[must_use]
pub fn detect_agent_with(rules: &[EnvRule], env: &EnvSnapshot) -> Option<&'static str> {
    let rule = rules
        .iter()
        .find(|rule| env.get(rule.key).is_some_and(|value| rule.pattern.matches(value)))?;
    log::debug!("Detected agent {} via {}", rule.identity, rule.key);
    Some(rule.identity)
}
