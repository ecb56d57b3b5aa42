//! Text extraction and word frequencies for word clouds.
//!
//! Only content-bearing messages contribute text: the kind must be
//! `Generic` and a `content` field must be present. Shares and
//! subscribe/unsubscribe events never do.

use std::collections::HashMap;

use crate::message::Message;

/// The mojibake rendering of a right single quote (U+2019) in Meta exports.
///
/// Meta stores UTF-8 text as if it were ISO-8859-1, so apostrophes in the
/// decoded JSON come out as this three-character sequence.
const MOJIBAKE_APOSTROPHE: &str = "\u{e2}\u{80}\u{99}";

/// Common English words excluded from word frequencies.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "but", "by", "can", "could", "did", "do", "dont", "for", "from", "get",
    "go", "going", "got", "had", "has", "have", "he", "her", "him", "his", "how", "i", "if",
    "im", "in", "is", "it", "its", "just", "know", "like", "me", "my", "no", "not", "now", "of",
    "oh", "ok", "on", "one", "or", "our", "out", "she", "so", "some", "that", "thats", "the",
    "them", "then", "there", "they", "this", "to", "too", "up", "us", "was", "we", "well",
    "were", "what", "when", "which", "who", "will", "with", "would", "yeah", "yes", "you",
    "your",
];

/// Concatenates the text bodies of every content-bearing message.
pub fn chat_text(messages: &[Message]) -> String {
    let bodies: Vec<&str> = messages.iter().filter_map(Message::text).collect();
    bodies.join(" ")
}

/// Concatenates the text bodies of one sender's content-bearing messages.
pub fn sender_text(messages: &[Message], sender: &str) -> String {
    let bodies: Vec<&str> = messages
        .iter()
        .filter(|m| m.sender_name.as_deref() == Some(sender))
        .filter_map(Message::text)
        .collect();
    bodies.join(" ")
}

/// Prepares chat text for word counting.
///
/// Drops `@` mentions markers, repairs mojibake apostrophes, and lowercases.
pub fn preprocess(text: &str) -> String {
    text.replace('@', "")
        .replace(MOJIBAKE_APOSTROPHE, "'")
        .to_lowercase()
}

/// Counts word occurrences in a body of text.
///
/// The text is preprocessed, split on whitespace, and trimmed of surrounding
/// punctuation; stopwords and empty tokens are skipped. Returns at most
/// `max_words` entries, sorted by descending count with ties broken
/// alphabetically so the result is deterministic.
///
/// # Example
///
/// ```
/// use chatviz::analysis::word_frequencies;
///
/// let words = word_frequencies("Pizza tonight? PIZZA!", 10);
/// assert_eq!(words[0], ("pizza".to_string(), 2));
/// assert_eq!(words[1], ("tonight".to_string(), 1));
/// ```
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<(String, u64)> {
    let prepared = preprocess(text);

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in prepared.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() || STOPWORDS.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut words: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(max_words);
    words
}
