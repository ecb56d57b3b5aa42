//! Aggregation over normalized messages.
//!
//! All aggregators are pure functions over a `&[Message]` slice:
//!
//! - [`frequency`] — per-sender message counts for histograms
//! - [`growth`] — per-sender chronologically sorted timestamp sequences
//!   for growth curves
//! - [`words`] — text extraction and word frequencies for word clouds
//!
//! Each runs in a single pass over the message sequence, plus a sort where
//! order matters. Aggregates are built fresh per analysis run and never
//! persisted.

pub mod frequency;
pub mod growth;
pub mod words;

pub use frequency::sender_frequencies;
pub use growth::{GrowthSeries, MAX_SENDERS, growth_series};
pub use words::{chat_text, sender_text, word_frequencies};
