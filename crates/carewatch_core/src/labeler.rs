//! Filename-based behavior labeler.

use crate::{BehaviorLabel, DetectionResult, VOCABULARY};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::path::Path;

/// Derives behavior labels from a file name.
///
/// When the name contains no vocabulary word the labeler returns a random
/// sample of one to three labels. The random source is injectable so that
/// callers can make the fallback reproducible.
pub struct Labeler {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl Default for Labeler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Labeler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Labeler").finish_non_exhaustive()
    }
}

impl Labeler {
    /// Create a labeler whose fallback is seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a labeler drawing fallback labels from `rng`.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Derive labels for the file at `path`.
    ///
    /// Only the path string is inspected, never the file content. The result
    /// is never empty.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn derive_labels(&self, path: &Path) -> DetectionResult {
        let matches = match_file_name(path);
        if !matches.is_empty() {
            tracing::debug!(labels = %matches, "Labels matched from file name");
            return matches;
        }

        let sampled = self.sample();
        tracing::debug!(labels = %sampled, "No label in file name, sampled fallback labels");
        sampled
    }

    /// Random subset of the vocabulary, sized uniformly in 1..=3.
    fn sample(&self) -> DetectionResult {
        let mut guard = self.rng.lock();
        let rng: &mut (dyn RngCore + Send) = &mut **guard;
        let count = rng.gen_range(1..=3);
        DetectionResult::new(VOCABULARY.choose_multiple(rng, count).copied())
    }
}

/// Vocabulary words found in the lower-cased base name, in vocabulary order.
pub(crate) fn match_file_name(path: &Path) -> DetectionResult {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    DetectionResult::new(
        VOCABULARY
            .iter()
            .copied()
            .filter(|label: &BehaviorLabel| name.contains(label.as_str())),
    )
}
