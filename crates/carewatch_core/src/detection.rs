//! Labels assigned to one upload.

use crate::BehaviorLabel;

/// The labels derived for a single video.
///
/// Labels are unique and keep the order in which they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    labels: Vec<BehaviorLabel>,
}

impl DetectionResult {
    /// Build a result, dropping repeated labels.
    pub fn new(labels: impl IntoIterator<Item = BehaviorLabel>) -> Self {
        let mut unique = Vec::new();
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self { labels: unique }
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[BehaviorLabel] {
        &self.labels
    }

    /// Whether the result includes `label`.
    pub fn contains(&self, label: BehaviorLabel) -> bool {
        self.labels.contains(&label)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels joined with `", "`, as reported to clients.
    pub fn joined(&self) -> String {
        self.labels
            .iter()
            .map(BehaviorLabel::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined())
    }
}
