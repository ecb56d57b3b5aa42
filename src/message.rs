//! Normalized message type for exported chats.
//!
//! This module provides [`Message`], the normalized representation of one
//! chat event. The Export Reader hands raw JSON records to
//! [`Message::from_raw`], which materializes the full fixed attribute set:
//! every attribute a record can carry is present on every `Message`, with
//! `None` standing in for fields the record omitted. A sequence of Messages
//! can therefore be laid out as a uniform table — one column per entry in
//! [`ATTRIBUTES`] — with no per-row schema drift.
//!
//! # Example
//!
//! ```
//! use chatviz::message::{Message, MessageKind};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "sender_name": "Jane Doe",
//!     "timestamp_ms": 1705315800000i64,
//!     "type": "Generic",
//!     "content": "hello!"
//! });
//! let msg = Message::from_raw(raw.as_object().unwrap())?;
//!
//! assert_eq!(msg.sender_name.as_deref(), Some("Jane Doe"));
//! assert_eq!(msg.kind, Some(MessageKind::Generic));
//! assert!(msg.photos.is_none()); // absent, not dropped
//! # Ok::<(), chatviz::ChatvizError>(())
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChatvizError, Result};

/// The canonical, ordered attribute list shared by the normalizer and every
/// tabular consumer.
///
/// [`Message::from_raw`] populates exactly these attributes and
/// [`Message::attribute`] answers for exactly these names, so the list is the
/// single source of truth for the message schema.
pub const ATTRIBUTES: [&str; 13] = [
    "sender_name",
    "timestamp_ms",
    "type",
    "content",
    "photos",
    "videos",
    "gifs",
    "audio_files",
    "files",
    "sticker",
    "share",
    "reactions",
    "users",
];

/// One raw message record as decoded from the export document.
pub type RawRecord = Map<String, Value>;

/// The kind of a chat event.
///
/// Only [`Generic`](MessageKind::Generic) messages carry user-authored text;
/// the rest are shares or system events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// A user-authored message (the only content-bearing kind)
    Generic,
    /// A shared link or post
    Share,
    /// A participant joined the chat
    Subscribe,
    /// A participant left the chat
    Unsubscribe,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Generic => write!(f, "Generic"),
            MessageKind::Share => write!(f, "Share"),
            MessageKind::Subscribe => write!(f, "Subscribe"),
            MessageKind::Unsubscribe => write!(f, "Unsubscribe"),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Generic" => Ok(MessageKind::Generic),
            "Share" => Ok(MessageKind::Share),
            "Subscribe" => Ok(MessageKind::Subscribe),
            "Unsubscribe" => Ok(MessageKind::Unsubscribe),
            _ => Err(format!("unknown message type: '{s}'")),
        }
    }
}

/// A single normalized chat event.
///
/// Every field is optional: a field the raw record omitted reads back as
/// `None` rather than being silently dropped, so the attribute set is
/// uniform across all Messages in a collection. `sender_name` and
/// `timestamp_ms` are never absent in well-formed input.
///
/// The attachment fields (`photos` through `users`) keep their
/// source-defined JSON shape; their substructure is copied as-is, never
/// validated.
///
/// Messages are constructed once by [`Message::from_raw`] and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the participant who authored the message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sender_name: Option<String>,

    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp_ms: Option<i64>,

    /// The message kind, from the record's `type` field.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<MessageKind>,

    /// Text body; present only for user-authored text.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photos: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub videos: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gifs: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub audio_files: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub files: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sticker: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub share: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reactions: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub users: Option<Value>,
}

impl Message {
    /// Creates a message with only the aggregation-relevant fields set.
    ///
    /// Mostly useful in tests and example code; real messages come from
    /// [`Message::from_raw`].
    pub fn new(sender: impl Into<String>, timestamp_ms: i64, kind: MessageKind) -> Self {
        Self {
            sender_name: Some(sender.into()),
            timestamp_ms: Some(timestamp_ms),
            kind: Some(kind),
            content: None,
            photos: None,
            videos: None,
            gifs: None,
            audio_files: None,
            files: None,
            sticker: None,
            share: None,
            reactions: None,
            users: None,
        }
    }

    /// Builder method to set the text body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Normalizes one raw record into a `Message`.
    ///
    /// Each name in [`ATTRIBUTES`] is looked up in the record: present
    /// values are copied as-is, absent ones become `None`. Unknown keys in
    /// the record are ignored. Scalar fields with the wrong JSON type, or an
    /// unknown `type` string, fail with
    /// [`MalformedExport`](ChatvizError::MalformedExport).
    ///
    /// Pure and deterministic: normalizing the same record twice yields
    /// equal Messages.
    pub fn from_raw(raw: &RawRecord) -> Result<Self> {
        Ok(Self {
            sender_name: string_field(raw, "sender_name")?,
            timestamp_ms: integer_field(raw, "timestamp_ms")?,
            kind: kind_field(raw)?,
            content: string_field(raw, "content")?,
            photos: raw.get("photos").cloned(),
            videos: raw.get("videos").cloned(),
            gifs: raw.get("gifs").cloned(),
            audio_files: raw.get("audio_files").cloned(),
            files: raw.get("files").cloned(),
            sticker: raw.get("sticker").cloned(),
            share: raw.get("share").cloned(),
            reactions: raw.get("reactions").cloned(),
            users: raw.get("users").cloned(),
        })
    }

    /// Returns the value of a canonical attribute as JSON.
    ///
    /// Absent fields come back as `Some(Value::Null)`; names outside
    /// [`ATTRIBUTES`] come back as `None`. Together with [`ATTRIBUTES`] this
    /// lets callers lay a message sequence out as a uniform table.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        let value = match name {
            "sender_name" => self.sender_name.clone().map(Value::String),
            "timestamp_ms" => self.timestamp_ms.map(Value::from),
            "type" => self.kind.map(|k| Value::String(k.to_string())),
            "content" => self.content.clone().map(Value::String),
            "photos" => self.photos.clone(),
            "videos" => self.videos.clone(),
            "gifs" => self.gifs.clone(),
            "audio_files" => self.audio_files.clone(),
            "files" => self.files.clone(),
            "sticker" => self.sticker.clone(),
            "share" => self.share.clone(),
            "reactions" => self.reactions.clone(),
            "users" => self.users.clone(),
            _ => return None,
        };
        Some(value.unwrap_or(Value::Null))
    }

    /// Returns the text body if this is a content-bearing message.
    ///
    /// That is: the kind is [`Generic`](MessageKind::Generic) and a `content`
    /// field was present.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            Some(MessageKind::Generic) => self.content.as_deref(),
            _ => None,
        }
    }

    /// Returns the send time as a UTC datetime, if the timestamp is present
    /// and within chrono's representable range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_ms.and_then(datetime_from_ms)
    }
}

/// Converts a millisecond epoch timestamp to a UTC datetime.
pub fn datetime_from_ms(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(timestamp_ms).single()
}

fn string_field(raw: &RawRecord, key: &str) -> Result<Option<String>> {
    match raw.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ChatvizError::malformed(format!(
            "field `{key}` should be a string, got {}",
            json_type(other)
        ))),
    }
}

fn integer_field(raw: &RawRecord, key: &str) -> Result<Option<i64>> {
    match raw.get(key) {
        None => Ok(None),
        Some(Value::Number(n)) if n.as_i64().is_some() => Ok(n.as_i64()),
        Some(other) => Err(ChatvizError::malformed(format!(
            "field `{key}` should be an integer, got {}",
            json_type(other)
        ))),
    }
}

fn kind_field(raw: &RawRecord) -> Result<Option<MessageKind>> {
    match raw.get("type") {
        None => Ok(None),
        Some(Value::String(s)) => s
            .parse::<MessageKind>()
            .map(Some)
            .map_err(ChatvizError::malformed),
        Some(other) => Err(ChatvizError::malformed(format!(
            "field `type` should be a string, got {}",
            json_type(other)
        ))),
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
