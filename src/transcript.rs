use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::schemas::ChatMessage;

/// Buffer size for transcript reading (32KB)
const FILE_READ_BUFFER_SIZE: usize = 32 * 1024;

/// Load a JSONL chat transcript: one JSON message object per line.
///
/// Blank lines and lines that do not deserialize into a [`ChatMessage`]
/// are skipped; a transcript produced by a different tool version should
/// still open.
pub fn load_transcript(path: &Path) -> Result<Vec<ChatMessage>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open transcript: {}", path.display()))?;
    let reader = BufReader::with_capacity(FILE_READ_BUFFER_SIZE, file);

    let mut messages = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ChatMessage>(&line) {
            Ok(message) => messages.push(message),
            Err(err) => {
                tracing::debug!(
                    line = line_number + 1,
                    error = %err,
                    "skipping malformed transcript line"
                );
            }
        }
    }
    Ok(messages)
}
