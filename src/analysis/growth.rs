//! Per-sender message growth over time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{ChatvizError, Result};
use crate::message::{Message, datetime_from_ms};

/// Cap on distinct senders in a growth aggregation, so a line chart does not
/// get overpopulated. Exceeding it is a usage error, never a silent
/// truncation.
pub const MAX_SENDERS: usize = 20;

/// One sender's chronologically sorted send times.
///
/// The growth curve for a sender is the sequence of points
/// `(timestamps[i], i + 1)`: the 1-based rank of each message within the
/// sender's partition, monotonically increasing over time.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSeries {
    /// Sender display name
    pub sender: String,
    /// Send times, sorted ascending
    pub timestamps: Vec<DateTime<Utc>>,
}

impl GrowthSeries {
    /// Number of messages in this sender's partition.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the sender has no timestamped messages.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// The growth points: `(send time, messages so far)` with strictly
    /// increasing 1-based ranks.
    pub fn points(&self) -> impl Iterator<Item = (DateTime<Utc>, u64)> + '_ {
        self.timestamps
            .iter()
            .enumerate()
            .map(|(i, ts)| (*ts, i as u64 + 1))
    }
}

/// Partitions messages by sender and sorts each partition's timestamps.
///
/// Senders appear in first-appearance order, so the result is deterministic
/// for a given input sequence. Messages missing either `sender_name` or
/// `timestamp_ms` are skipped. Equal timestamps within a partition may sort
/// in either order; both still receive strictly increasing ranks.
///
/// Fails with [`Usage`](ChatvizError::Usage) when the number of distinct
/// senders exceeds [`MAX_SENDERS`], before producing any partial result.
///
/// # Example
///
/// ```
/// use chatviz::analysis::growth_series;
/// use chatviz::message::{Message, MessageKind};
///
/// let messages = vec![
///     Message::new("Jane", 200, MessageKind::Generic),
///     Message::new("Jane", 100, MessageKind::Generic),
/// ];
/// let series = growth_series(&messages)?;
/// assert_eq!(series.len(), 1);
/// let points: Vec<_> = series[0].points().map(|(_, rank)| rank).collect();
/// assert_eq!(points, vec![1, 2]);
/// # Ok::<(), chatviz::ChatvizError>(())
/// ```
pub fn growth_series(messages: &[Message]) -> Result<Vec<GrowthSeries>> {
    let mut order: Vec<String> = Vec::new();
    let mut partitions: HashMap<String, Vec<i64>> = HashMap::new();

    for message in messages {
        let (Some(sender), Some(ts)) = (&message.sender_name, message.timestamp_ms) else {
            continue;
        };
        partitions
            .entry(sender.clone())
            .or_insert_with(|| {
                order.push(sender.clone());
                Vec::new()
            })
            .push(ts);
    }

    if order.len() > MAX_SENDERS {
        return Err(ChatvizError::Usage(format!(
            "chat has {} distinct senders, more than the {} a growth chart can display",
            order.len(),
            MAX_SENDERS
        )));
    }

    Ok(order
        .into_iter()
        .map(|sender| {
            let mut stamps = partitions.remove(&sender).unwrap_or_default();
            stamps.sort_unstable();
            let timestamps = stamps.into_iter().filter_map(datetime_from_ms).collect();
            GrowthSeries { sender, timestamps }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    fn msg(sender: &str, ts: i64) -> Message {
        Message::new(sender, ts, MessageKind::Generic)
    }

    #[test]
    fn test_empty_input() {
        assert!(growth_series(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_sorts_timestamps_and_ranks() {
        let messages = vec![msg("A", 100), msg("A", 50), msg("B", 75)];
        let series = growth_series(&messages).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].sender, "A");
        let a: Vec<_> = series[0].points().collect();
        assert_eq!(a[0].0.timestamp_millis(), 50);
        assert_eq!(a[1].0.timestamp_millis(), 100);
        assert_eq!((a[0].1, a[1].1), (1, 2));

        assert_eq!(series[1].sender, "B");
        let b: Vec<_> = series[1].points().collect();
        assert_eq!(b[0].0.timestamp_millis(), 75);
        assert_eq!(b[0].1, 1);
    }

    #[test]
    fn test_first_appearance_order() {
        let messages = vec![msg("Zed", 1), msg("Amy", 2), msg("Zed", 3)];
        let series = growth_series(&messages).unwrap();
        let senders: Vec<_> = series.iter().map(|s| s.sender.as_str()).collect();
        assert_eq!(senders, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_equal_timestamps_still_rank_strictly() {
        let messages = vec![msg("A", 100), msg("A", 100), msg("A", 100)];
        let series = growth_series(&messages).unwrap();
        let ranks: Vec<_> = series[0].points().map(|(_, r)| r).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_skips_messages_missing_fields() {
        let mut no_sender = msg("A", 100);
        no_sender.sender_name = None;
        let mut no_ts = msg("B", 100);
        no_ts.timestamp_ms = None;

        let series = growth_series(&[no_sender, no_ts, msg("C", 1)]).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].sender, "C");
    }

    #[test]
    fn test_cap_at_exactly_max_senders_succeeds() {
        let messages: Vec<_> = (0..MAX_SENDERS)
            .map(|i| msg(&format!("sender-{i}"), i as i64))
            .collect();
        let series = growth_series(&messages).unwrap();
        assert_eq!(series.len(), MAX_SENDERS);
    }

    #[test]
    fn test_cap_exceeded_fails() {
        let messages: Vec<_> = (0..=MAX_SENDERS)
            .map(|i| msg(&format!("sender-{i}"), i as i64))
            .collect();
        let err = growth_series(&messages).unwrap_err();
        assert!(matches!(err, ChatvizError::Usage(_)));
        assert!(err.to_string().contains("21"));
    }

    #[test]
    fn test_series_length_equals_message_count() {
        let messages = vec![msg("A", 3), msg("A", 1), msg("A", 2), msg("B", 9)];
        let series = growth_series(&messages).unwrap();
        assert_eq!(series[0].len(), 3);
        assert_eq!(series[1].len(), 1);
    }
}
