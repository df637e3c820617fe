//! Assertions over exported session documents (JSON form).

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that stats agree with the event and agent arrays.
pub fn assert_stats_consistent(doc: &Value) -> Result<()> {
    let events = doc["events"]
        .as_array()
        .context("Expected 'events' array in document")?;
    let agents = doc["agents"]
        .as_array()
        .context("Expected 'agents' array in document")?;

    let total = doc["stats"]["totalEvents"]
        .as_u64()
        .context("Expected 'stats.totalEvents'")?;
    let count = doc["stats"]["agentCount"]
        .as_u64()
        .context("Expected 'stats.agentCount'")?;

    if total as usize != events.len() {
        anyhow::bail!("totalEvents {} but {} events", total, events.len());
    }
    if count as usize != agents.len() {
        anyhow::bail!("agentCount {} but {} agents", count, agents.len());
    }

    Ok(())
}

/// Assert the event `type` sequence of a document.
pub fn assert_event_types(doc: &Value, expected: &[&str]) -> Result<()> {
    let types: Vec<&str> = doc["events"]
        .as_array()
        .context("Expected 'events' array in document")?
        .iter()
        .map(|event| event["type"].as_str().unwrap_or(""))
        .collect();

    if types != expected {
        anyhow::bail!("Expected event types {:?}, got {:?}", expected, types);
    }

    Ok(())
}

/// Assert that events are in non-decreasing timestamp order.
pub fn assert_sorted_by_timestamp(doc: &Value) -> Result<()> {
    let events = doc["events"]
        .as_array()
        .context("Expected 'events' array in document")?;

    for pair in events.windows(2) {
        let a = pair[0]["timestamp"].as_str().unwrap_or("");
        let b = pair[1]["timestamp"].as_str().unwrap_or("");
        if a > b {
            anyhow::bail!("Events out of order: {} before {}", a, b);
        }
    }

    Ok(())
}
