//! Per-sender message counts.

use std::collections::HashMap;

use crate::message::Message;

/// Counts messages per sender.
///
/// One pass over the sequence: every message with a present `sender_name`
/// increments that sender's counter. Messages without a sender are skipped,
/// and senders with zero messages simply never appear. The mapping is
/// unordered among senders; each per-sender count is deterministic.
///
/// # Example
///
/// ```
/// use chatviz::analysis::sender_frequencies;
/// use chatviz::message::{Message, MessageKind};
///
/// let messages = vec![
///     Message::new("Jane", 100, MessageKind::Generic),
///     Message::new("Jane", 200, MessageKind::Generic),
///     Message::new("John", 150, MessageKind::Generic),
/// ];
/// let freqs = sender_frequencies(&messages);
/// assert_eq!(freqs["Jane"], 2);
/// assert_eq!(freqs["John"], 1);
/// ```
pub fn sender_frequencies(messages: &[Message]) -> HashMap<String, u64> {
    let mut freqs = HashMap::new();

    for message in messages {
        if let Some(sender) = &message.sender_name {
            *freqs.entry(sender.clone()).or_insert(0) += 1;
        }
    }

    freqs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        assert!(sender_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_counts_per_sender() {
        let messages = vec![
            Message::new("A", 100, MessageKind::Generic),
            Message::new("A", 50, MessageKind::Generic),
            Message::new("B", 75, MessageKind::Generic),
        ];
        let freqs = sender_frequencies(&messages);
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs["A"], 2);
        assert_eq!(freqs["B"], 1);
    }

    #[test]
    fn test_skips_messages_without_sender() {
        let mut anonymous = Message::new("A", 100, MessageKind::Generic);
        anonymous.sender_name = None;

        let messages = vec![anonymous, Message::new("B", 75, MessageKind::Generic)];
        let freqs = sender_frequencies(&messages);
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs["B"], 1);
    }

    #[test]
    fn test_sum_equals_messages_with_sender() {
        let messages = vec![
            Message::new("A", 1, MessageKind::Generic),
            Message::new("B", 2, MessageKind::Share),
            Message::new("A", 3, MessageKind::Subscribe),
        ];
        let freqs = sender_frequencies(&messages);
        assert_eq!(freqs.values().sum::<u64>(), messages.len() as u64);
    }
}
