use crate::hasher::histogram::Histogram;
use crate::hasher::perceptual::hamming_distance;

/// Hamming ceiling for hash mode. 0 keeps the strict bit-identical policy;
/// raising it (5 is a common choice for 64-bit hashes) also catches
/// recompressed near-duplicates.
pub const DEFAULT_MAX_HAMMING_DISTANCE: u32 = 0;

/// Correlation floor for histogram mode; a pair matches strictly above it.
pub const DEFAULT_MIN_CORRELATION: f64 = 0.9;

/// Two hashes name the same image when their bit difference stays within
/// the ceiling.
pub fn hashes_match(a: u64, b: u64, max_distance: u32) -> bool {
    hamming_distance(a, b) <= max_distance
}

/// Two histograms name the same image when their correlation exceeds the
/// floor.
pub fn histograms_match(a: &Histogram, b: &Histogram, min_correlation: f64) -> bool {
    a.correlation(b) > min_correlation
}
