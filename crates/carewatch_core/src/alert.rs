//! Alert message priority.

use crate::{BehaviorLabel, DetectionResult};

/// The one sentence spoken for a detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AlertMessage {
    /// A fall was detected
    #[display("Alert! The patient has fallen.")]
    Fall,
    /// An attack was detected
    #[display("Emergency! Someone is attacking the patient.")]
    Attack,
    /// A seizure was detected
    #[display("Medical emergency! The patient is having a seizure.")]
    Seizure,
    /// Distress was detected
    #[display("Warning! The patient is in distress.")]
    Distress,
    /// Nothing critical was detected
    #[display("Non-critical behavior detected.")]
    NonCritical,
}

/// Critical labels and their messages, highest priority first.
pub const ALERT_PRIORITY: [(BehaviorLabel, AlertMessage); 4] = [
    (BehaviorLabel::Fall, AlertMessage::Fall),
    (BehaviorLabel::Attack, AlertMessage::Attack),
    (BehaviorLabel::Seizure, AlertMessage::Seizure),
    (BehaviorLabel::Distress, AlertMessage::Distress),
];

impl AlertMessage {
    /// Pick the message for the highest-priority critical label present.
    ///
    /// Priority is fall, attack, seizure, distress. Only one message is
    /// returned even when several critical labels are present.
    pub fn for_labels(result: &DetectionResult) -> Self {
        ALERT_PRIORITY
            .iter()
            .find(|(label, _)| result.contains(*label))
            .map(|(_, message)| *message)
            .unwrap_or(AlertMessage::NonCritical)
    }

    /// Whether this is one of the critical messages.
    pub fn is_critical(&self) -> bool {
        *self != AlertMessage::NonCritical
    }

    /// The sentence to speak.
    pub fn text(&self) -> String {
        self.to_string()
    }
}
