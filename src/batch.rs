//! Batch processing of disparity maps.
//!
//! Files are independent units of work dispatched to the rayon pool; no
//! ordering is guaranteed between outputs. A failure on one file (missing
//! input, malformed raster) is logged and counted, never aborts the batch.
//! Input lists are resolved with explicit path joins; nothing touches the
//! process working directory.
use crate::detector::RoadDetector;
use crate::disparity::io::{load_disparity, save_mask};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fatal path-level failures; everything else recovers per file.
#[derive(Debug)]
pub enum BatchError {
    /// Input path is neither a file nor a directory.
    InvalidInput(PathBuf),
    /// Input directory could not be listed.
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Output directory could not be created.
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(path) => {
                write!(f, "invalid path to input disparity map(s): {}", path.display())
            }
            Self::ListDir { path, source } => {
                write!(f, "failed to list {}: {source}", path.display())
            }
            Self::OutputDir { path, source } => {
                write!(
                    f,
                    "failed to create output directory {}: {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ListDir { source, .. } | Self::OutputDir { source, .. } => Some(source),
            Self::InvalidInput(_) => None,
        }
    }
}

/// Aggregate outcome of one batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files processed to an output mask.
    pub processed: usize,
    /// Processed files where no ground line cleared the vote threshold.
    pub no_ground: usize,
    /// Files skipped after a read or write failure.
    pub failed: usize,
}

/// Resolve the input path into a list of disparity files.
///
/// A file path yields that single file; a directory yields its `*.png`
/// entries sorted by name. Anything else is a fatal path error.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(BatchError::InvalidInput(path.to_path_buf()));
    }
    let entries = fs::read_dir(path).map_err(|source| BatchError::ListDir {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Output naming convention: `A_B` becomes `A_road_B`, anything else is
/// kept unchanged.
pub fn output_name(input: &str) -> String {
    let tokens: Vec<&str> = input.split('_').collect();
    if tokens.len() == 2 {
        format!("{}_road_{}", tokens[0], tokens[1])
    } else {
        input.to_string()
    }
}

/// Process `files` through `detector`, writing one mask per input into
/// `out_dir` (created if missing).
pub fn run_batch(
    files: &[PathBuf],
    out_dir: &Path,
    detector: &RoadDetector,
) -> Result<BatchReport, BatchError> {
    fs::create_dir_all(out_dir).map_err(|source| BatchError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| process_file(path, out_dir, detector))
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Done { found } => {
                report.processed += 1;
                if !found {
                    report.no_ground += 1;
                }
            }
            FileOutcome::Failed => report.failed += 1,
        }
    }
    info!(
        "batch done: {} processed, {} without ground plane, {} failed",
        report.processed, report.no_ground, report.failed
    );
    Ok(report)
}

enum FileOutcome {
    Done { found: bool },
    Failed,
}

fn process_file(path: &Path, out_dir: &Path, detector: &RoadDetector) -> FileOutcome {
    let disp = match load_disparity(path) {
        Ok(disp) => disp,
        Err(err) => {
            warn!("skipping {}: {err}", path.display());
            return FileOutcome::Failed;
        }
    };

    let report = detector.process(&disp);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_path = out_dir.join(output_name(&name));
    if let Err(err) = save_mask(&report.mask, &out_path) {
        warn!("failed to write {}: {err}", out_path.display());
        return FileOutcome::Failed;
    }
    debug!(
        "{} -> {} found={} traversable_px={}",
        path.display(),
        out_path.display(),
        report.road.found,
        report.road.traversable_px
    );
    FileOutcome::Done {
        found: report.road.found,
    }
}
