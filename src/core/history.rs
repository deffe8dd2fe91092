//! Variant-change history.
//!
//! Records which variant a machine left and entered on every dispatch that
//! changed its variant. Only tags are kept, never payloads.

use super::tag::VariantTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single variant change.
///
/// # Example
///
/// ```rust
/// use tagfsm::tagged_enum;
/// use tagfsm::core::TransitionRecord;
/// use chrono::Utc;
///
/// tagged_enum! {
///     enum Job => JobTag {
///         Queued,
///         Running { pid: u32 },
///     }
/// }
///
/// let record = TransitionRecord {
///     from: JobTag::Queued,
///     to: JobTag::Running,
///     timestamp: Utc::now(),
///     dispatch: 1,
/// };
/// assert_eq!(record.to, JobTag::Running);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<T: VariantTag> {
    /// The variant being left
    pub from: T,
    /// The variant being entered
    pub to: T,
    /// When the change was installed
    pub timestamp: DateTime<Utc>,
    /// 1-based number of the dispatch that caused the change
    pub dispatch: u64,
}

/// Ordered history of variant changes, optionally bounded.
///
/// `record` is pure: it returns a new history and leaves the receiver
/// untouched. A bounded history evicts its oldest records first.
///
/// # Example
///
/// ```rust
/// use tagfsm::tagged_enum;
/// use tagfsm::core::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// tagged_enum! {
///     enum Phase => PhaseTag {
///         One,
///         Two,
///         Three,
///     }
/// }
///
/// let history = TransitionHistory::new()
///     .record(TransitionRecord {
///         from: PhaseTag::One,
///         to: PhaseTag::Two,
///         timestamp: Utc::now(),
///         dispatch: 1,
///     })
///     .record(TransitionRecord {
///         from: PhaseTag::Two,
///         to: PhaseTag::Three,
///         timestamp: Utc::now(),
///         dispatch: 4,
///     });
///
/// assert_eq!(history.path(), vec![PhaseTag::One, PhaseTag::Two, PhaseTag::Three]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "StoredHistory<T>")]
pub struct TransitionHistory<T: VariantTag> {
    transitions: VecDeque<TransitionRecord<T>>,
    limit: Option<usize>,
}

/// Serialized form, trimmed to `limit` when read back.
#[derive(Deserialize)]
#[serde(bound = "")]
struct StoredHistory<T: VariantTag> {
    transitions: VecDeque<TransitionRecord<T>>,
    limit: Option<usize>,
}

impl<T: VariantTag> From<StoredHistory<T>> for TransitionHistory<T> {
    fn from(stored: StoredHistory<T>) -> Self {
        let mut transitions = stored.transitions;
        if let Some(limit) = stored.limit {
            let excess = transitions.len().saturating_sub(limit);
            transitions.drain(..excess);
        }
        Self {
            transitions,
            limit: stored.limit,
        }
    }
}

impl<T: VariantTag> TransitionHistory<T> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history retaining at most `limit` records.
    ///
    /// A limit of zero retains nothing; [`MachineBuilder`](crate::builder::MachineBuilder)
    /// refuses it. Storage grows with the records, not with the limit.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// ```rust
    /// use tagfsm::tagged_enum;
    /// use tagfsm::core::{TransitionHistory, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// tagged_enum! {
    ///     enum Step => StepTag { A, B }
    /// }
    ///
    /// let history = TransitionHistory::new();
    /// let new_history = history.record(TransitionRecord {
    ///     from: StepTag::A,
    ///     to: StepTag::B,
    ///     timestamp: Utc::now(),
    ///     dispatch: 1,
    /// });
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord<T>) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// In-place append used by the machine on every variant change.
    pub(crate) fn push(&mut self, record: TransitionRecord<T>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(record);
    }

    /// Tags traversed: the first record's `from`, then every `to`.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<T> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|record| record.to));
        path
    }

    /// Time between the first and last retained records.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &TransitionRecord<T>> + '_ {
        self.transitions.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<T>> {
        self.transitions.back()
    }

    /// Number of times `tag` was entered among the retained records.
    pub fn count_entries(&self, tag: T) -> usize {
        self.transitions.iter().filter(|r| r.to == tag).count()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl<T: VariantTag> Default for TransitionHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
