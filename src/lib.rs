//! # Chatviz
//!
//! A Rust library and CLI for analyzing exported chat archives (the JSON
//! schema Meta's "Download Your Information" produces) and rendering the
//! results as SVG charts.
//!
//! ## Overview
//!
//! Every analysis follows the same pipeline:
//!
//! 1. **Read** — [`export::read_export`] loads a chat export and yields the
//!    chat title plus the raw message records.
//! 2. **Normalize** — [`Message::from_raw`](message::Message::from_raw)
//!    turns each raw record into a [`Message`] with the full fixed
//!    attribute set ([`message::ATTRIBUTES`]); absent fields are explicit
//!    `None`s, never dropped.
//! 3. **Aggregate** — the pure functions in [`analysis`] derive per-sender
//!    counts, growth series, or word frequencies.
//! 4. **Render** — the functions in [`render`] draw the result to an SVG
//!    file.
//!
//! Everything is single-threaded and in-memory; each run is an independent
//! pass over one dataset that is assumed to fit in memory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatviz::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = read_export("message.json".as_ref())?;
//!     let messages = export.normalize()?;
//!
//!     let freqs = sender_frequencies(&messages);
//!     render_histogram(&export.title, &freqs, false, "frequency.svg".as_ref())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] — Export Reader ([`ChatExport`](export::ChatExport),
//!   [`read_export`](export::read_export))
//! - [`message`] — normalized [`Message`] and
//!   [`MessageKind`](message::MessageKind)
//! - [`analysis`] — aggregators
//!   ([`sender_frequencies`](analysis::sender_frequencies),
//!   [`growth_series`](analysis::growth_series),
//!   [`word_frequencies`](analysis::word_frequencies))
//! - [`name`] — [`first_name`](name::first_name) display shortening
//! - [`scan`] — [`find_exports`](scan::find_exports) archive-tree walking
//! - [`render`] — SVG chart writers
//! - [`cli`] — clap argument types for the binary
//! - [`error`] — unified error type ([`ChatvizError`], [`Result`])

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod message;
pub mod name;
pub mod render;
pub mod scan;

// Re-export the main types at the crate root for convenience
pub use error::{ChatvizError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatvizError, Result};

    pub use crate::export::{ChatExport, read_export};

    pub use crate::message::{ATTRIBUTES, MessageKind};

    pub use crate::analysis::{
        GrowthSeries, MAX_SENDERS, chat_text, growth_series, sender_frequencies, sender_text,
        word_frequencies,
    };

    pub use crate::name::first_name;

    pub use crate::scan::find_exports;

    pub use crate::render::{render_growth, render_histogram, render_wordcloud};
}
