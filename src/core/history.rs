//! Tick history tracking.
//!
//! Every tick that fires at least one transition can be recorded. `record`
//! returns a new history and leaves the original as it was; the animator that
//! owns a history appends to it in place.

use crate::model::{StepId, TransitionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

/// Outcome of one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// 1-based tick number since construction or the last reset
    pub tick: u64,
    /// Transitions that fired, in model order
    pub fired: Vec<TransitionId>,
    /// Steps that were active before the tick and are inactive after it
    pub deactivated: BTreeSet<StepId>,
    /// Steps that were inactive before the tick and are active after it
    pub activated: BTreeSet<StepId>,
}

impl TickReport {
    /// A tick that fired nothing is a fixed point.
    pub fn is_stable(&self) -> bool {
        self.fired.is_empty()
    }
}

/// A recorded tick with the wall-clock time it was committed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TickRecord {
    pub report: TickReport,
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of recorded ticks.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::core::{TickHistory, TickRecord, TickReport};
/// use grafcet_animator::model::TransitionId;
/// use chrono::Utc;
///
/// let history = TickHistory::new();
/// let record = TickRecord {
///     report: TickReport {
///         tick: 1,
///         fired: vec![TransitionId::new(1)],
///         deactivated: Default::default(),
///         activated: Default::default(),
///     },
///     timestamp: Utc::now(),
/// };
///
/// let updated = history.record(record);
/// assert_eq!(updated.records().len(), 1);
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TickHistory {
    records: VecDeque<TickRecord>,
}

impl TickHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Record a tick, returning a new history.
    pub fn record(&self, record: TickRecord) -> Self {
        let mut history = self.clone();
        history.push(record, None);
        history
    }

    /// Keep only the most recent `limit` records.
    pub fn truncated(&self, limit: usize) -> Self {
        let skip = self.records.len().saturating_sub(limit);
        Self {
            records: self.records.iter().skip(skip).cloned().collect(),
        }
    }

    /// Append in place, dropping the oldest records beyond `limit`.
    pub(crate) fn push(&mut self, record: TickRecord, limit: Option<usize>) {
        self.records.push_back(record);
        if let Some(limit) = limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    pub fn records(&self) -> &VecDeque<TickRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TickRecord> {
        self.records.back()
    }

    /// How many times a transition fired across the recorded ticks.
    pub fn firing_count(&self, transition: TransitionId) -> usize {
        self.records
            .iter()
            .filter(|record| record.report.fired.contains(&transition))
            .count()
    }

    /// Time between the first and last recorded tick.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tick: u64, fired: &[u32]) -> TickRecord {
        TickRecord {
            report: TickReport {
                tick,
                fired: fired.iter().copied().map(TransitionId::new).collect(),
                deactivated: BTreeSet::new(),
                activated: BTreeSet::new(),
            },
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TickHistory::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TickHistory::new();
        let updated = history.record(record(1, &[1]));

        assert_eq!(history.len(), 0);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn truncated_keeps_most_recent() {
        let history = (1..=5).fold(TickHistory::new(), |history, tick| {
            history.record(record(tick, &[1]))
        });

        let kept = history.truncated(2);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept.records()[0].report.tick, 4);
        assert_eq!(kept.records()[1].report.tick, 5);
        assert_eq!(history.truncated(10).len(), 5);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = TickHistory::new();
        history.push(record(1, &[1]), None);
        history.push(record(2, &[1]), None);

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().report.tick, 2);
    }

    #[test]
    fn push_drops_oldest_beyond_limit() {
        let mut history = TickHistory::new();
        for tick in 1..=5 {
            history.push(record(tick, &[1]), Some(3));
        }

        let ticks: Vec<u64> = history.records().iter().map(|r| r.report.tick).collect();
        assert_eq!(ticks, vec![3, 4, 5]);

        history.push(record(6, &[1]), Some(0));
        assert!(history.is_empty());
    }

    #[test]
    fn firing_count_tallies_transitions() {
        let history = TickHistory::new()
            .record(record(1, &[1]))
            .record(record(2, &[2, 3]))
            .record(record(3, &[1, 3]));

        assert_eq!(history.firing_count(TransitionId::new(1)), 2);
        assert_eq!(history.firing_count(TransitionId::new(2)), 1);
        assert_eq!(history.firing_count(TransitionId::new(4)), 0);
    }

    #[test]
    fn single_record_has_zero_duration() {
        let history = TickHistory::new().record(record(1, &[1]));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn stable_report_fired_nothing() {
        assert!(record(1, &[]).report.is_stable());
        assert!(!record(1, &[1]).report.is_stable());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TickHistory::new().record(record(1, &[1]));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TickHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.records()[0].report, history.records()[0].report);
    }
}
