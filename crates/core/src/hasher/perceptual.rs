//! DCT-based 64-bit perceptual hash.
//!
//! Pipeline: 32x32 grayscale grid → low-frequency 8x8 corner of the 2-D
//! DCT-II → median threshold over the 63 AC coefficients → packed bits.
//! Visually identical images produce identical hashes; minor recompression
//! moves only a few bits, which Hamming distance captures.

use std::path::Path;

use crate::error::Result;
use crate::hasher::{load_hash_grid, HASH_GRID};

/// Side length of the retained low-frequency DCT block.
const DCT_BLOCK: usize = 8;

/// Compute the perceptual hash of the image at `path`.
pub fn compute_phash(path: &Path) -> Result<u64> {
    let pixels = load_hash_grid(path)?;
    Ok(phash_from_grid(&pixels))
}

/// Hash a 32x32 grayscale grid.
fn phash_from_grid(pixels: &[u8]) -> u64 {
    debug_assert_eq!(pixels.len(), HASH_GRID * HASH_GRID);
    let dct = low_frequency_dct(pixels);

    // Median of the AC coefficients; the DC term only tracks brightness.
    let mut ac: Vec<f64> = dct[1..].to_vec();
    ac.sort_by(f64::total_cmp);
    let median = ac[ac.len() / 2];

    let mut hash = 0u64;
    for (bit, &coef) in dct[1..].iter().enumerate() {
        if coef > median {
            hash |= 1u64 << bit;
        }
    }
    hash
}

/// Low-frequency 8x8 corner of the orthonormal 2-D DCT-II, row-major.
///
/// Only 64 of the 1024 output coefficients are needed, so they are computed
/// directly from a precomputed cosine table instead of a full transform.
fn low_frequency_dct(pixels: &[u8]) -> [f64; DCT_BLOCK * DCT_BLOCK] {
    let n = HASH_GRID;

    // cos_table[u][i] = cos(pi * u * (2i + 1) / 2n)
    let mut cos_table = [[0.0f64; HASH_GRID]; DCT_BLOCK];
    for (u, row) in cos_table.iter_mut().enumerate() {
        for (i, cell) in row.iter_mut().enumerate() {
            *cell =
                (std::f64::consts::PI * u as f64 * (2 * i + 1) as f64 / (2 * n) as f64).cos();
        }
    }

    let scale = |freq: usize| {
        if freq == 0 {
            (1.0 / n as f64).sqrt()
        } else {
            (2.0 / n as f64).sqrt()
        }
    };

    let mut out = [0.0f64; DCT_BLOCK * DCT_BLOCK];
    for u in 0..DCT_BLOCK {
        for v in 0..DCT_BLOCK {
            let mut sum = 0.0;
            for y in 0..n {
                for x in 0..n {
                    sum += pixels[y * n + x] as f64 * cos_table[u][y] * cos_table[v][x];
                }
            }
            out[u * DCT_BLOCK + v] = scale(u) * scale(v) * sum;
        }
    }
    out
}

/// Number of differing bits between two hashes.
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}
