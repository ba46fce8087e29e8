//! Turning a duplicate list into confirmed deletions.
//!
//! Split into a pure planning step (which files did the operator confirm?)
//! and an apply step (delete them), so the decision logic is testable
//! without touching a terminal or a filesystem.

use std::fs;

use crate::domain::DuplicateRecord;
use crate::error::Error;

/// Answers yes/no questions on behalf of the operator.
///
/// The CLI backs this with a terminal prompt; tests substitute scripted
/// answers.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// The subset of detected duplicates the operator agreed to delete.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovalPlan {
    pub targets: Vec<DuplicateRecord>,
}

impl RemovalPlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Result of applying one planned removal.
#[derive(Debug)]
pub enum RemovalOutcome {
    Deleted(DuplicateRecord),
    Failed {
        record: DuplicateRecord,
        error: Error,
    },
}

/// Ask the operator which duplicates to delete.
///
/// The blanket question is asked once; declining it keeps every file and
/// asks nothing further. Otherwise each record is confirmed individually.
/// Nothing on disk is touched here.
pub fn plan_removals(
    records: &[DuplicateRecord],
    decisions: &mut dyn Confirmation,
) -> RemovalPlan {
    if records.is_empty() {
        return RemovalPlan::default();
    }
    if !decisions.confirm("Remove duplicate images?") {
        return RemovalPlan::default();
    }

    let targets = records
        .iter()
        .filter(|record| {
            decisions.confirm(&format!("Delete {}?", record.duplicate.display()))
        })
        .cloned()
        .collect();
    RemovalPlan { targets }
}

/// Delete each planned duplicate. The original of a pair is never touched,
/// and a failed deletion does not stop the remaining removals.
pub fn execute_plan(plan: &RemovalPlan) -> Vec<RemovalOutcome> {
    plan.targets
        .iter()
        .map(|record| match fs::remove_file(&record.duplicate) {
            Ok(()) => RemovalOutcome::Deleted(record.clone()),
            Err(source) => {
                log::warn!(
                    "failed to delete {}: {source}",
                    record.duplicate.display()
                );
                RemovalOutcome::Failed {
                    record: record.clone(),
                    error: Error::Deletion {
                        path: record.duplicate.clone(),
                        source,
                    },
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};

    /// Scripted operator: pops one pre-seeded answer per prompt and panics
    /// on an unexpected question.
    struct Scripted {
        answers: VecDeque<bool>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Confirmation for Scripted {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            self.answers.pop_front().expect("unexpected extra prompt")
        }
    }

    fn record(original: &str, duplicate: &str) -> DuplicateRecord {
        DuplicateRecord {
            original: PathBuf::from(original),
            duplicate: PathBuf::from(duplicate),
        }
    }

    fn record_for(original: &Path, duplicate: &Path) -> DuplicateRecord {
        DuplicateRecord {
            original: original.to_path_buf(),
            duplicate: duplicate.to_path_buf(),
        }
    }

    // ── plan_removals ────────────────────────────────────────────────

    #[test]
    fn test_empty_duplicate_list_asks_nothing() {
        let mut script = Scripted::new(&[]);
        let plan = plan_removals(&[], &mut script);

        assert!(plan.is_empty());
        assert!(script.prompts.is_empty());
    }

    #[test]
    fn test_blanket_decline_skips_per_record_prompts() {
        let records = vec![record("/a.jpg", "/b.jpg"), record("/a.jpg", "/c.jpg")];
        let mut script = Scripted::new(&[false]);

        let plan = plan_removals(&records, &mut script);
        assert!(plan.is_empty());
        assert_eq!(script.prompts.len(), 1);
    }

    #[test]
    fn test_confirm_all() {
        let records = vec![record("/a.jpg", "/b.jpg"), record("/a.jpg", "/c.jpg")];
        let mut script = Scripted::new(&[true, true, true]);

        let plan = plan_removals(&records, &mut script);
        assert_eq!(plan.targets, records);
    }

    #[test]
    fn test_per_record_decline_keeps_that_file() {
        let records = vec![record("/a.jpg", "/b.jpg"), record("/a.jpg", "/c.jpg")];
        let mut script = Scripted::new(&[true, false, true]);

        let plan = plan_removals(&records, &mut script);
        assert_eq!(plan.targets, vec![record("/a.jpg", "/c.jpg")]);
    }

    #[test]
    fn test_per_record_prompt_names_the_duplicate() {
        let records = vec![record("/orig.jpg", "/dup.jpg")];
        let mut script = Scripted::new(&[true, true]);

        plan_removals(&records, &mut script);
        assert!(script.prompts[1].contains("/dup.jpg"));
        assert!(!script.prompts[1].contains("/orig.jpg"));
    }

    // ── execute_plan ─────────────────────────────────────────────────

    #[test]
    fn test_execute_deletes_duplicate_keeps_original() {
        let tmp = tempfile::tempdir().unwrap();
        let original = tmp.path().join("original.jpg");
        let duplicate = tmp.path().join("duplicate.jpg");
        std::fs::write(&original, b"image").unwrap();
        std::fs::write(&duplicate, b"image").unwrap();

        let plan = RemovalPlan {
            targets: vec![record_for(&original, &duplicate)],
        };
        let outcomes = execute_plan(&plan);

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], RemovalOutcome::Deleted(_)));
        assert!(original.exists());
        assert!(!duplicate.exists());
    }

    #[test]
    fn test_execute_empty_plan_is_a_no_op() {
        assert!(execute_plan(&RemovalPlan::default()).is_empty());
    }

    #[test]
    fn test_vanished_file_fails_without_stopping_the_rest() {
        let tmp = tempfile::tempdir().unwrap();
        let original = tmp.path().join("original.jpg");
        let gone = tmp.path().join("gone.jpg");
        let duplicate = tmp.path().join("duplicate.jpg");
        std::fs::write(&original, b"image").unwrap();
        std::fs::write(&duplicate, b"image").unwrap();

        let plan = RemovalPlan {
            targets: vec![
                record_for(&original, &gone),
                record_for(&original, &duplicate),
            ],
        };
        let outcomes = execute_plan(&plan);

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], RemovalOutcome::Failed { .. }));
        assert!(matches!(outcomes[1], RemovalOutcome::Deleted(_)));
        assert!(!duplicate.exists());
    }
}
