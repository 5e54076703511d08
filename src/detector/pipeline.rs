//! Detector pipeline driving traversable-region detection end-to-end.
//!
//! The [`RoadDetector`] exposes a simple API: feed a decoded disparity
//! field and get the traversable mask with detailed diagnostics. Internally
//! it coordinates the u-disparity obstacle split, the v-disparity ground
//! vote, and the shared mask cleanup.
//!
//! Typical usage:
//! ```no_run
//! use road_detector::{RoadDetector, RoadParams};
//! use road_detector::disparity::DisparityField;
//!
//! # fn example(disp: DisparityField) {
//! let detector = RoadDetector::new(RoadParams::default());
//! let report = detector.process(&disp);
//! if report.road.found {
//!     println!("traversable: {} px", report.road.traversable_px);
//! }
//! # }
//! ```
use super::params::RoadParams;
use super::{ground, obstacle};
use crate::diagnostics::{
    DetectionReport, GroundStage, InputDescriptor, ObstacleStage, PipelineTrace, ProjectionStage,
    StageTimings,
};
use crate::disparity::DisparityField;
use crate::projection::{compute_u_disparity, compute_v_disparity};
use crate::types::RoadResult;
use log::debug;
use std::time::Instant;

/// Traversable-region detector, stateless across frames.
pub struct RoadDetector {
    params: RoadParams,
}

impl RoadDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: RoadParams) -> Self {
        Self { params }
    }

    /// The parameters this detector runs with.
    pub fn params(&self) -> &RoadParams {
        &self.params
    }

    /// Run the pipeline on one disparity field.
    pub fn process(&self, disp: &DisparityField) -> DetectionReport {
        let (width, height) = (disp.w, disp.h);
        debug!("RoadDetector::process start w={width} h={height}");
        let total_start = Instant::now();

        let u_start = Instant::now();
        let (u_hist, u_index) = compute_u_disparity(disp);
        let u_disparity_ms = u_start.elapsed().as_secs_f64() * 1000.0;

        let obstacle_start = Instant::now();
        let split = obstacle::segment(
            disp,
            &u_hist,
            &u_index,
            &self.params.obstacle,
            &self.params.cleanup,
        );
        let obstacle_ms = obstacle_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "RoadDetector::process obstacles distinct={} hits={} mask_px={}",
            split.distinct_values,
            split.hit_cells,
            split.mask.area()
        );

        let v_start = Instant::now();
        let (v_hist, v_index) = compute_v_disparity(&split.non_obstacle_field);
        let v_disparity_ms = v_start.elapsed().as_secs_f64() * 1000.0;

        let ground_start = Instant::now();
        let estimate = ground::estimate(
            &split.non_obstacle_field,
            &v_hist,
            &v_index,
            &self.params.ground,
            &self.params.cleanup,
        );
        let ground_ms = ground_start.elapsed().as_secs_f64() * 1000.0;

        let traversable_px = estimate.mask.area();
        let total_px = width * height;
        let coverage = if total_px > 0 {
            traversable_px as f32 / total_px as f32
        } else {
            0.0
        };
        let found = estimate.line.is_some();
        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "RoadDetector::process done found={found} traversable_px={traversable_px} latency_ms={latency:.3}"
        );

        let road = RoadResult {
            found,
            ground_line: estimate.line,
            traversable_px,
            coverage,
            latency_ms: latency,
        };

        let trace = PipelineTrace {
            input: InputDescriptor {
                width,
                height,
                valid_px: disp.valid_px(),
            },
            timings: StageTimings {
                u_disparity_ms,
                obstacle_ms,
                v_disparity_ms,
                ground_ms,
                total_ms: latency,
            },
            u_disparity: ProjectionStage {
                distinct_values: split.distinct_values,
                hit_cells: split.hit_cells,
            },
            obstacle: ObstacleStage {
                raw_px: split.raw_px,
                mask_px: split.mask.area(),
                non_obstacle_px: split.non_obstacle_field.valid_px(),
            },
            v_disparity: ProjectionStage {
                distinct_values: estimate.distinct_values,
                hit_cells: estimate.hit_cells,
            },
            ground: GroundStage {
                line: estimate.line,
                banded_cells: estimate.banded_cells,
                raw_px: estimate.raw_px,
                mask_px: traversable_px,
            },
        };

        DetectionReport {
            road,
            mask: estimate.mask,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_invalid_input_yields_empty_masks_and_no_ground() {
        let disp = DisparityField::new(40, 40);
        let detector = RoadDetector::new(RoadParams::default());
        let report = detector.process(&disp);
        assert!(!report.road.found);
        assert_eq!(report.road.traversable_px, 0);
        assert_eq!(report.mask.area(), 0);
        assert_eq!(report.trace.obstacle.mask_px, 0);
        assert_eq!(report.trace.input.valid_px, 0);
    }

    #[test]
    fn report_serializes_without_the_mask() {
        let disp = DisparityField::new(40, 40);
        let detector = RoadDetector::new(RoadParams::default());
        let report = detector.process(&disp);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"road\""));
        assert!(json.contains("\"trace\""));
        assert!(!json.contains("\"mask\""));
    }
}
