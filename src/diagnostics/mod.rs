//! Diagnostics data model exposed by the detector.
//!
//! [`DetectionReport`] is the main entry point returned by the detector,
//! bundling the compact [`RoadResult`], the traversable mask itself, and a
//! [`PipelineTrace`] describing every stage the pipeline executed. Reports
//! serialize to JSON (camelCase); the mask is carried in memory only.
use crate::mask::RegionMask;
use crate::types::{GroundLine, RoadResult};
use serde::Serialize;

/// Dimensions and validity statistics of the input field.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub valid_px: usize,
}

/// Per-stage wall-clock timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    pub u_disparity_ms: f64,
    pub obstacle_ms: f64,
    pub v_disparity_ms: f64,
    pub ground_ms: f64,
    pub total_ms: f64,
}

/// Summary of one projection (u or v).
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionStage {
    /// Size of the value↔index bijection.
    pub distinct_values: usize,
    /// Histogram cells above the stage threshold.
    pub hit_cells: usize,
}

/// Summary of the obstacle segmentation stage.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleStage {
    /// Back-projected mask area before cleanup.
    pub raw_px: usize,
    /// Obstacle mask area after cleanup.
    pub mask_px: usize,
    /// Valid pixels routed to the non-obstacle sub-field.
    pub non_obstacle_px: usize,
}

/// Summary of the ground-line stage.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundStage {
    pub line: Option<GroundLine>,
    /// Hit cells within the acceptance band.
    pub banded_cells: usize,
    /// Back-projected mask area before cleanup.
    pub raw_px: usize,
    /// Traversable mask area after cleanup.
    pub mask_px: usize,
}

/// Structured trace of one detector run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: StageTimings,
    pub u_disparity: ProjectionStage,
    pub obstacle: ObstacleStage,
    pub v_disparity: ProjectionStage,
    pub ground: GroundStage,
}

/// Everything one detector run produces.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub road: RoadResult,
    /// Final traversable mask (not serialized; write it with
    /// [`crate::disparity::io::save_mask`]).
    #[serde(skip)]
    pub mask: RegionMask,
    pub trace: PipelineTrace,
}
