//! Request/reply file plumbing for the command runners.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Reads a JSON request body from disk.
///
/// The body may be any JSON value; the session layer accepts both
/// structured objects and JSON-encoded strings.
pub fn read_request(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse request JSON: {}", path.display()))
}

/// Writes a reply to the given path, or pretty-prints it to stdout.
pub fn write_reply(reply: &Value, output: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(reply).context("failed to encode reply")?;
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write reply: {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}
