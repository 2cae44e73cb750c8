//! The fixed behavior vocabulary.

/// A behavior tag a video can be labeled with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    derive_more::Display,
)]
pub enum BehaviorLabel {
    /// No notable behavior
    #[display("normal")]
    Normal,
    /// The patient fell
    #[display("fall")]
    Fall,
    /// Agitated or angry behavior
    #[display("angry")]
    Angry,
    /// Someone is attacking the patient
    #[display("attack")]
    Attack,
    /// The patient is in distress
    #[display("distress")]
    Distress,
    /// The patient is asleep
    #[display("sleeping")]
    Sleeping,
    /// The patient is wandering
    #[display("wandering")]
    Wandering,
    /// The patient is talking
    #[display("talking")]
    Talking,
    /// The patient is eating
    #[display("eating")]
    Eating,
    /// The patient is having a seizure
    #[display("seizure")]
    Seizure,
}

/// Every label, in vocabulary order.
///
/// Filename matches are reported in this order.
pub const VOCABULARY: [BehaviorLabel; 10] = [
    BehaviorLabel::Normal,
    BehaviorLabel::Fall,
    BehaviorLabel::Angry,
    BehaviorLabel::Attack,
    BehaviorLabel::Distress,
    BehaviorLabel::Sleeping,
    BehaviorLabel::Wandering,
    BehaviorLabel::Talking,
    BehaviorLabel::Eating,
    BehaviorLabel::Seizure,
];

/// Critical labels, highest alert priority first.
pub const CRITICAL_PRIORITY: [BehaviorLabel; 4] = [
    BehaviorLabel::Fall,
    BehaviorLabel::Attack,
    BehaviorLabel::Seizure,
    BehaviorLabel::Distress,
];

impl BehaviorLabel {
    /// The lower-case tag matched against file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorLabel::Normal => "normal",
            BehaviorLabel::Fall => "fall",
            BehaviorLabel::Angry => "angry",
            BehaviorLabel::Attack => "attack",
            BehaviorLabel::Distress => "distress",
            BehaviorLabel::Sleeping => "sleeping",
            BehaviorLabel::Wandering => "wandering",
            BehaviorLabel::Talking => "talking",
            BehaviorLabel::Eating => "eating",
            BehaviorLabel::Seizure => "seizure",
        }
    }

    /// Whether this label warrants a critical alert.
    pub fn is_critical(&self) -> bool {
        CRITICAL_PRIORITY.contains(self)
    }
}

impl std::str::FromStr for BehaviorLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VOCABULARY
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("Unknown behavior label: {}", s))
    }
}
