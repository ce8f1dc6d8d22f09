//! Queue reference resolution from flags or a local queue file.

use crate::RestqError;
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// On-disk queue file: `{"queue": "<id>"}`.
///
/// Create responses share the same shape, so the body returned by
/// [`crate::RestqClient::create`] can be written straight to a queue file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueueFile {
    #[serde(default, alias = "Queue")]
    pub queue: String,
}

impl QueueFile {
    /// Parses a queue document. Only a JSON object is accepted; serde would
    /// otherwise also read a struct from an array in field order.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_str(content)?;
        serde_json::from_value(Value::Object(object))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RestqError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| RestqError::from_io_error(e, &display))?;
        Self::parse(&content).map_err(|e| RestqError::from_parse_error(e, &display))
    }
}

/// Pick the queue identifier for this invocation.
///
/// A non-empty `explicit` id wins and the file is never touched. Without
/// either source the result is an empty string.
pub fn resolve_queue(explicit: Option<&str>, file: Option<&Path>) -> Result<String, RestqError> {
    if let Some(id) = explicit.filter(|id| !id.is_empty()) {
        return Ok(id.to_string());
    }

    match file {
        Some(path) => {
            let queue_file = QueueFile::from_path(path)?;
            debug!("Resolved queue '{}' from {}", queue_file.queue, path.display());
            Ok(queue_file.queue)
        }
        None => Ok(String::new()),
    }
}
