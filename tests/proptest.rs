//! Property-based tests for chatviz.
//!
//! These generate random message sequences to check the aggregation
//! invariants hold beyond hand-picked fixtures.

use proptest::prelude::*;

use chatviz::analysis::{growth_series, sender_frequencies};
use chatviz::message::{Message, MessageKind};
use chatviz::name::first_name;

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        // Small sender pool so partitions actually collide
        prop::sample::select(vec![
            "Jane Doe".to_string(),
            "John Roe".to_string(),
            "Ann Lee".to_string(),
            "Иван Петров".to_string(),
            "Madonna".to_string(),
        ]),
        // Timestamps including duplicates and zero
        prop::sample::select(vec![0i64, 1, 50, 75, 100, 100, 1_705_315_800_000]),
        prop::sample::select(vec![
            MessageKind::Generic,
            MessageKind::Share,
            MessageKind::Subscribe,
            MessageKind::Unsubscribe,
        ]),
    )
        .prop_map(|(sender, ts, kind)| Message::new(sender, ts, kind))
}

fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // FREQUENCY PROPERTIES
    // ============================================

    /// Counts sum to the number of messages carrying a sender
    #[test]
    fn frequency_counts_sum_to_total(messages in arb_messages(40)) {
        let freqs = sender_frequencies(&messages);
        let with_sender = messages.iter().filter(|m| m.sender_name.is_some()).count();
        prop_assert_eq!(freqs.values().sum::<u64>(), with_sender as u64);
    }

    /// The aggregate's keys are exactly the distinct senders
    #[test]
    fn frequency_keys_are_distinct_senders(messages in arb_messages(40)) {
        let freqs = sender_frequencies(&messages);
        for message in &messages {
            if let Some(sender) = &message.sender_name {
                prop_assert!(freqs.contains_key(sender));
            }
        }
        prop_assert!(freqs.values().all(|&c| c > 0));
    }

    // ============================================
    // GROWTH PROPERTIES
    // ============================================

    /// Each partition's timestamps come out sorted
    #[test]
    fn growth_timestamps_are_sorted(messages in arb_messages(40)) {
        let series = growth_series(&messages).unwrap();
        for s in &series {
            prop_assert!(s.timestamps.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    /// Ranks are strictly increasing and match the partition length
    #[test]
    fn growth_ranks_are_strictly_increasing(messages in arb_messages(40)) {
        let series = growth_series(&messages).unwrap();
        for s in &series {
            let ranks: Vec<u64> = s.points().map(|(_, r)| r).collect();
            prop_assert_eq!(ranks.len(), s.len());
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Growth partitions and frequency counts agree
    #[test]
    fn growth_partitions_match_frequencies(messages in arb_messages(40)) {
        let freqs = sender_frequencies(&messages);
        let series = growth_series(&messages).unwrap();
        for s in &series {
            prop_assert_eq!(s.len() as u64, freqs[&s.sender]);
        }
    }

    // ============================================
    // NAME SHORTENER PROPERTIES
    // ============================================

    /// The first name is always a prefix-free leading token of the input
    #[test]
    fn first_name_is_leading_token(name in "[a-zA-Z]{1,10}( [a-zA-Z]{1,10}){0,3}") {
        let first = first_name(&name);
        prop_assert!(!first.is_empty());
        prop_assert!(!first.contains(char::is_whitespace));
        prop_assert!(name.starts_with(first));
    }
}
