#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod batch;
pub mod detector;
pub mod diagnostics;
pub mod disparity;
pub mod mask;
pub mod projection;
pub mod types;

// Lower-level building blocks, public for tools and tests.
pub mod config;
pub mod hough;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{RoadDetector, RoadParams};
pub use crate::types::{GroundLine, RoadResult};

// Full per-frame report returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use road_detector::prelude::*;
///
/// # fn main() {
/// let mut disp = DisparityField::new(640, 480);
/// disp.set(320, 400, Some(12.5));
///
/// let detector = RoadDetector::new(RoadParams::default());
/// let report = detector.process(&disp);
/// println!(
///     "found={} latency_ms={:.3}",
///     report.road.found, report.road.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::disparity::DisparityField;
    pub use crate::mask::RegionMask;
    pub use crate::{DetectionReport, GroundLine, RoadDetector, RoadParams, RoadResult};
}
