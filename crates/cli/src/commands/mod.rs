pub mod clean;
pub mod scan;

use std::path::{Path, PathBuf};

use anyhow::Result;
use dupesweep_core::{
    find_duplicates, find_duplicates_with_fallback, DetectProgress, DetectionMode,
    DetectorConfig, DuplicateRecord,
};
use indicatif::{ProgressBar, ProgressStyle};

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("  {bar:30.cyan/blue} {pos:>5}/{len:<5} {prefix:.dim} {msg}")
        .unwrap()
        .progress_chars("━╸─")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Run detection with a progress bar. `None` mode means the auto policy:
/// histogram first, hash fallback (each pass gets its own bar).
pub(crate) fn detect(
    path: &Path,
    mode: Option<DetectionMode>,
    config: &DetectorConfig,
) -> Result<Vec<DuplicateRecord>> {
    let mut bar: Option<ProgressBar> = None;
    let mut on_progress = |event: DetectProgress| match event {
        DetectProgress::Start { total } => {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
            let pb = ProgressBar::new(total as u64);
            pb.set_style(progress_style());
            pb.set_prefix("Fingerprinting");
            bar = Some(pb);
        }
        DetectProgress::FileProcessed { path } | DetectProgress::FileSkipped { path } => {
            if let Some(ref pb) = bar {
                pb.set_message(file_name(&path));
                pb.inc(1);
            }
        }
    };

    let records = match mode {
        Some(mode) => find_duplicates(path, mode, config, Some(&mut on_progress))?,
        None => find_duplicates_with_fallback(path, config, Some(&mut on_progress))?,
    };

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }
    Ok(records)
}
