use std::path::PathBuf;

use serde::Serialize;

use crate::matching::similarity::{DEFAULT_MAX_HAMMING_DISTANCE, DEFAULT_MIN_CORRELATION};

/// Which fingerprint the detector derives for each image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    /// 64-bit DCT perceptual hash, matched by Hamming distance.
    Hash,
    /// 256-bucket grayscale intensity distribution, matched by correlation.
    Histogram,
}

impl DetectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Hash => "hash",
            DetectionMode::Histogram => "histogram",
        }
    }
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable matching thresholds. The defaults reproduce the strictest policy:
/// bit-identical hashes and correlation above 0.9.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Hamming distance ceiling for hash mode. 0 means exact equality.
    pub max_hamming_distance: u32,
    /// Correlation floor for histogram mode; a pair matches strictly above it.
    pub min_correlation: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_hamming_distance: DEFAULT_MAX_HAMMING_DISTANCE,
            min_correlation: DEFAULT_MIN_CORRELATION,
        }
    }
}

/// A scanned image together with its derived fingerprint.
/// Created when the file is first read, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ImageRecord<F> {
    pub path: PathBuf,
    pub fingerprint: F,
}

/// One detected duplicate: the first-seen file it matched against, and the
/// later-seen file that is the deletion candidate. Both modes emit this same
/// pair shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub original: PathBuf,
    pub duplicate: PathBuf,
}
