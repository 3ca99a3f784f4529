//! Print the detected AI agent

use cotrail::core::models::EnvSnapshot;
use cotrail::core::services::detect_agent;
use cotrail::output::{DetectResult, OutputMode};

/// Detect the agent from the current environment
///
/// Exits with status 1 when no agent is found.
pub fn detect(mode: OutputMode) -> anyhow::Result<()> {
    let agent = detect_agent(&EnvSnapshot::from_process());

    DetectResult {
        agent: agent.map(str::to_string),
    }
    .render(mode);

    if agent.is_none() {
        std::process::exit(1);
    }
    Ok(())
}
