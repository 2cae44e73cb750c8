//! Behavior labeling for Carewatch.
//!
//! There is no video analysis here. A [`Labeler`] derives behavior labels from
//! an upload's file name by matching it against a fixed vocabulary of ten
//! [`BehaviorLabel`]s, and falls back to a random sample when nothing matches.
//! [`AlertMessage`] then picks the single sentence to speak for a result.
//!
//! # Example
//!
//! ```
//! use carewatch_core::{AlertMessage, BehaviorLabel, Labeler};
//! use std::path::Path;
//!
//! let labeler = Labeler::new();
//! let result = labeler.derive_labels(Path::new("uploads/patient_fall_cam1.mp4"));
//! assert_eq!(result.labels(), &[BehaviorLabel::Fall]);
//! assert_eq!(AlertMessage::for_labels(&result), AlertMessage::Fall);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alert;
mod detection;
mod label;
mod labeler;

pub use alert::{AlertMessage, ALERT_PRIORITY};
pub use detection::DetectionResult;
pub use label::{BehaviorLabel, CRITICAL_PRIORITY, VOCABULARY};
pub use labeler::Labeler;
