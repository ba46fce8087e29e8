use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;
use dupesweep_core::disposition::{self, Confirmation, RemovalOutcome};
use dupesweep_core::{DetectionMode, DetectorConfig};

/// Terminal-backed operator prompt. A prompt that cannot be read counts as
/// a decline, so an interrupted session never deletes anything.
struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

pub fn run(path: &Path, mode: Option<DetectionMode>, config: &DetectorConfig) -> Result<()> {
    let records = super::detect(path, mode, config)?;

    if records.is_empty() {
        println!("No duplicate images found.");
        return Ok(());
    }

    println!("Possible duplicates found:");
    for (i, record) in records.iter().enumerate() {
        println!(
            "[{}] {} -> duplicate of {}",
            i + 1,
            record.duplicate.display(),
            record.original.display()
        );
    }
    println!();

    let plan = disposition::plan_removals(&records, &mut TerminalConfirmation);
    if plan.is_empty() {
        println!("No files were deleted.");
        return Ok(());
    }

    let mut deleted = 0usize;
    let mut failed = 0usize;
    for outcome in disposition::execute_plan(&plan) {
        match outcome {
            RemovalOutcome::Deleted(record) => {
                deleted += 1;
                println!("Deleted {}", record.duplicate.display());
            }
            RemovalOutcome::Failed { record, error } => {
                failed += 1;
                eprintln!("Could not delete {}: {error}", record.duplicate.display());
            }
        }
    }

    let kept = records.len() - plan.targets.len();
    println!("Done: {deleted} deleted, {failed} failed, {kept} kept.");
    Ok(())
}
