//! Export Reader: loads a chat-export file into a [`ChatExport`].
//!
//! An export is a JSON document with a top-level `title` string and a
//! `messages` array of records. [`read_export`] handles the file access and
//! [`parse_export`] the document shape, so the parsing logic is testable
//! without touching the filesystem.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatviz::export::read_export;
//!
//! let export = read_export("message.json".as_ref())?;
//! println!("{}: {} raw records", export.title, export.messages.len());
//!
//! let messages = export.normalize()?;
//! # Ok::<(), chatviz::ChatvizError>(())
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::{ChatvizError, Result};
use crate::message::{Message, RawRecord};

/// One exported conversation: its display title and the raw message records
/// in document order.
///
/// Constructed once per file read and discarded after normalization.
#[derive(Debug, Clone)]
pub struct ChatExport {
    /// Display name of the chat
    pub title: String,
    /// Raw message records, in the order the document lists them
    pub messages: Vec<RawRecord>,
}

impl ChatExport {
    /// Normalizes every raw record into a [`Message`].
    ///
    /// The result has exactly one `Message` per raw record, in the same
    /// order.
    pub fn normalize(&self) -> Result<Vec<Message>> {
        self.messages.iter().map(Message::from_raw).collect()
    }
}

/// Reads and parses a chat export from disk.
///
/// The file handle is scoped to the read and released on every exit path,
/// including parse failure. Fails with [`NotFound`](ChatvizError::NotFound)
/// if the path does not resolve to a readable file and with
/// [`MalformedExport`](ChatvizError::MalformedExport) if the document shape
/// is wrong.
pub fn read_export(path: &Path) -> Result<ChatExport> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ChatvizError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ChatvizError::Io(e),
    })?;

    parse_export(&content).map_err(|e| e.with_path(path))
}

/// Parses a chat export from an in-memory string.
pub fn parse_export(content: &str) -> Result<ChatExport> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ChatvizError::malformed(format!("invalid JSON: {e}")))?;

    let Value::Object(mut document) = document else {
        return Err(ChatvizError::malformed(
            "top level should be an object with `title` and `messages`",
        ));
    };

    let title = match document.get("title") {
        Some(Value::String(title)) => title.clone(),
        Some(_) => return Err(ChatvizError::malformed("`title` should be a string")),
        None => return Err(ChatvizError::malformed("missing top-level key `title`")),
    };

    let messages = match document.remove("messages") {
        Some(Value::Array(records)) => records
            .into_iter()
            .map(|record| match record {
                Value::Object(map) => Ok(map),
                other => Err(ChatvizError::malformed(format!(
                    "`messages` entries should be objects, got {}",
                    crate::message::json_type(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(_) => return Err(ChatvizError::malformed("`messages` should be an array")),
        None => return Err(ChatvizError::malformed("missing top-level key `messages`")),
    };

    Ok(ChatExport { title, messages })
}
