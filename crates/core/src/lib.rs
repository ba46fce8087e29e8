pub mod disposition;
pub mod domain;
pub mod error;
pub mod hasher;
pub mod matching;
pub mod scanner;

use std::path::Path;

pub use domain::{DetectionMode, DetectorConfig, DuplicateRecord};
pub use error::{Error, Result};
pub use matching::DetectProgress;

/// Run one detection pass over the images directly inside `dir`.
///
/// The scan is synchronous and stateless: candidates are listed, sorted by
/// file name, fingerprinted in the selected mode and paired against the
/// accumulating seen set. Nothing survives the call; a later invocation
/// starts from scratch. Only an unlistable target directory is fatal,
/// unreadable individual files are logged and skipped.
pub fn find_duplicates(
    dir: &Path,
    mode: DetectionMode,
    config: &DetectorConfig,
    progress: Option<&mut (dyn FnMut(DetectProgress) + '_)>,
) -> Result<Vec<DuplicateRecord>> {
    let files = scanner::list_images(dir)?;
    let records = match mode {
        DetectionMode::Hash => matching::collect_by_hash(&files, config, progress),
        DetectionMode::Histogram => matching::collect_by_histogram(&files, config, progress),
    };
    Ok(records)
}

/// The two-pass policy: run histogram mode first and fall back to hash mode
/// when the histogram pass finds nothing.
///
/// Histogram mode catches "visually similar but not bit-identical" pairs,
/// hash mode catches perceptually identical ones the histogram pass can miss
/// (e.g. images whose intensity distribution is degenerate).
pub fn find_duplicates_with_fallback(
    dir: &Path,
    config: &DetectorConfig,
    mut progress: Option<&mut (dyn FnMut(DetectProgress) + '_)>,
) -> Result<Vec<DuplicateRecord>> {
    let found = find_duplicates(
        dir,
        DetectionMode::Histogram,
        config,
        progress.as_deref_mut(),
    )?;
    if !found.is_empty() {
        return Ok(found);
    }
    find_duplicates(dir, DetectionMode::Hash, config, progress)
}
