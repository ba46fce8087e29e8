//! Grayscale intensity histogram fingerprint.

use std::path::Path;

use crate::error::Result;

/// One bucket per 8-bit intensity value.
pub const BUCKETS: usize = 256;

/// Normalized grayscale intensity distribution: 256 buckets summing to 1.0.
///
/// Normalizing to a probability mass function makes the comparison
/// insensitive to image resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    buckets: [f64; BUCKETS],
}

impl Histogram {
    /// Decode `path` in grayscale and build its intensity distribution.
    pub fn of_file(path: &Path) -> Result<Self> {
        let gray = image::open(path)?.to_luma8();
        Ok(Self::from_pixels(gray.as_raw()))
    }

    /// Build the distribution from raw 8-bit grayscale samples.
    pub fn from_pixels(pixels: &[u8]) -> Self {
        let mut counts = [0u64; BUCKETS];
        for &p in pixels {
            counts[p as usize] += 1;
        }

        let total = pixels.len() as f64;
        let mut buckets = [0.0; BUCKETS];
        if total > 0.0 {
            for (bucket, &count) in buckets.iter_mut().zip(counts.iter()) {
                *bucket = count as f64 / total;
            }
        }
        Self { buckets }
    }

    /// Pearson correlation between the two distributions, in [-1, 1].
    ///
    /// A zero-variance distribution (a perfectly uniform histogram) has no
    /// defined correlation; 0.0 is returned instead of a NaN so such images
    /// are never matched, not even against themselves.
    pub fn correlation(&self, other: &Histogram) -> f64 {
        let n = BUCKETS as f64;
        let mean_a = self.buckets.iter().sum::<f64>() / n;
        let mean_b = other.buckets.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (a, b) in self.buckets.iter().zip(other.buckets.iter()) {
            let da = a - mean_a;
            let db = b - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        let denom = (var_a * var_b).sqrt();
        if denom == 0.0 {
            return 0.0;
        }
        // Rounding can push a perfect match a hair past 1.0; clamp it back.
        (cov / denom).clamp(-1.0, 1.0)
    }
}
