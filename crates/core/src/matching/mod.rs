pub mod similarity;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{DetectorConfig, DuplicateRecord, ImageRecord};
use crate::error::Result;
use crate::hasher::histogram::Histogram;
use crate::hasher::perceptual::{self, hamming_distance};

/// Events emitted while a collection pass runs.
pub enum DetectProgress {
    /// A pass over `total` candidate files is starting.
    Start { total: usize },
    /// A file was fingerprinted and compared.
    FileProcessed { path: PathBuf },
    /// A file could not be fingerprinted and was skipped.
    FileSkipped { path: PathBuf },
}

/// Run a hash-mode pass: fingerprint every candidate, then pair each image
/// against the already-seen set.
pub fn collect_by_hash(
    files: &[PathBuf],
    config: &DetectorConfig,
    progress: Option<&mut (dyn FnMut(DetectProgress) + '_)>,
) -> Vec<DuplicateRecord> {
    let records = extract(files, progress, perceptual::compute_phash);
    pair_by_hash(&records, config.max_hamming_distance)
}

/// Run a histogram-mode pass.
pub fn collect_by_histogram(
    files: &[PathBuf],
    config: &DetectorConfig,
    progress: Option<&mut (dyn FnMut(DetectProgress) + '_)>,
) -> Vec<DuplicateRecord> {
    let records = extract(files, progress, |path| Histogram::of_file(path));
    pair_by_histogram(&records, config.min_correlation)
}

/// Fingerprint each candidate file. Extraction failures are logged as
/// warnings and the file is dropped from the scan; they never abort the pass.
fn extract<F>(
    files: &[PathBuf],
    mut progress: Option<&mut (dyn FnMut(DetectProgress) + '_)>,
    fingerprint: impl Fn(&Path) -> Result<F>,
) -> Vec<ImageRecord<F>> {
    if let Some(ref mut cb) = progress {
        cb(DetectProgress::Start { total: files.len() });
    }

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        match fingerprint(path) {
            Ok(fp) => {
                records.push(ImageRecord {
                    path: path.clone(),
                    fingerprint: fp,
                });
                if let Some(ref mut cb) = progress {
                    cb(DetectProgress::FileProcessed { path: path.clone() });
                }
            }
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                if let Some(ref mut cb) = progress {
                    cb(DetectProgress::FileSkipped { path: path.clone() });
                }
            }
        }
    }
    records
}

/// Pair hash records against the accumulating seen set, in order.
///
/// A match pairs the current file with its first-seen counterpart and keeps
/// the current fingerprint out of the seen set, so every later duplicate
/// points back at the earliest occurrence.
pub fn pair_by_hash(records: &[ImageRecord<u64>], max_distance: u32) -> Vec<DuplicateRecord> {
    if max_distance == 0 {
        pair_by_exact_hash(records)
    } else {
        pair_by_near_hash(records, max_distance)
    }
}

/// Exact equality: the hash doubles as a map key, one lookup per file.
fn pair_by_exact_hash(records: &[ImageRecord<u64>]) -> Vec<DuplicateRecord> {
    let mut seen: HashMap<u64, PathBuf> = HashMap::new();
    let mut duplicates = Vec::new();

    for record in records {
        if let Some(original) = seen.get(&record.fingerprint).cloned() {
            duplicates.push(DuplicateRecord {
                original,
                duplicate: record.path.clone(),
            });
        } else {
            seen.insert(record.fingerprint, record.path.clone());
        }
    }
    duplicates
}

/// Positive ceiling: a BK-tree over the seen hashes answers range queries in
/// far fewer probes than a linear scan.
fn pair_by_near_hash(records: &[ImageRecord<u64>], max_distance: u32) -> Vec<DuplicateRecord> {
    let mut tree = BkTree::new();
    let mut representatives: Vec<PathBuf> = Vec::new();
    let mut duplicates = Vec::new();

    for record in records {
        match tree.find_best(record.fingerprint, max_distance) {
            Some(rep) => duplicates.push(DuplicateRecord {
                original: representatives[rep].clone(),
                duplicate: record.path.clone(),
            }),
            None => {
                tree.insert(record.fingerprint, representatives.len());
                representatives.push(record.path.clone());
            }
        }
    }
    duplicates
}

/// Pair histogram records: a linear scan over the seen set in insertion
/// order, first correlating entry wins.
pub fn pair_by_histogram(
    records: &[ImageRecord<Histogram>],
    min_correlation: f64,
) -> Vec<DuplicateRecord> {
    let mut seen: Vec<ImageRecord<Histogram>> = Vec::new();
    let mut duplicates = Vec::new();

    for record in records {
        let original = seen
            .iter()
            .find(|entry| {
                similarity::histograms_match(&record.fingerprint, &entry.fingerprint, min_correlation)
            })
            .map(|entry| entry.path.clone());

        match original {
            Some(original) => duplicates.push(DuplicateRecord {
                original,
                duplicate: record.path.clone(),
            }),
            None => seen.push(record.clone()),
        }
    }
    duplicates
}

/// BK-tree keyed by Hamming distance, for range queries over 64-bit hashes.
/// Nodes carry the insertion index of their representative path so the
/// earliest occurrence can win ties deterministically.
struct BkTree {
    root: Option<BkNode>,
}

struct BkNode {
    hash: u64,
    rep: usize,
    children: HashMap<u32, BkNode>,
}

impl BkTree {
    fn new() -> Self {
        Self { root: None }
    }

    fn insert(&mut self, hash: u64, rep: usize) {
        match self.root {
            None => {
                self.root = Some(BkNode {
                    hash,
                    rep,
                    children: HashMap::new(),
                });
            }
            Some(ref mut root) => Self::insert_into(root, hash, rep),
        }
    }

    fn insert_into(node: &mut BkNode, hash: u64, rep: usize) {
        let dist = hamming_distance(node.hash, hash);
        match node.children.get_mut(&dist) {
            Some(child) => Self::insert_into(child, hash, rep),
            None => {
                node.children.insert(
                    dist,
                    BkNode {
                        hash,
                        rep,
                        children: HashMap::new(),
                    },
                );
            }
        }
    }

    /// Best entry within `max_distance` of `hash`: closest wins, lowest
    /// insertion index breaks ties.
    fn find_best(&self, hash: u64, max_distance: u32) -> Option<usize> {
        let mut best: Option<(u32, usize)> = None;
        if let Some(ref root) = self.root {
            Self::search(root, hash, max_distance, &mut best);
        }
        best.map(|(_, rep)| rep)
    }

    fn search(node: &BkNode, hash: u64, max_distance: u32, best: &mut Option<(u32, usize)>) {
        let dist = hamming_distance(node.hash, hash);
        if dist <= max_distance {
            let candidate = (dist, node.rep);
            if best.map_or(true, |current| candidate < current) {
                *best = Some(candidate);
            }
        }
        let low = dist.saturating_sub(max_distance);
        let high = dist + max_distance;
        for d in low..=high {
            if let Some(child) = node.children.get(&d) {
                Self::search(child, hash, max_distance, best);
            }
        }
    }
}
