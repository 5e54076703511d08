//! Parameter types configuring the detector stages.
//!
//! Defaults follow the u-/v-disparity method as commonly tuned for road
//! scenes: projection thresholds of 3, a 20-cell band around the ground
//! line, and a 9-pixel cleanup disk. The cleanup block is shared by the
//! obstacle and ground stages (identical contract in both).

use crate::hough::LineVoteParams;
use crate::mask::CleanupParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadParams {
    pub obstacle: ObstacleParams,
    pub ground: GroundParams,
    /// Mask cleanup applied after both back-projections.
    pub cleanup: CleanupParams,
}

/// Obstacle-segmentation knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObstacleParams {
    /// A u-disparity cell is an obstacle hit iff its count exceeds this.
    pub u_disp_threshold: u32,
}

impl Default for ObstacleParams {
    fn default() -> Self {
        Self { u_disp_threshold: 3 }
    }
}

/// Ground-line estimation knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroundParams {
    /// A v-disparity cell is a ground hit iff its count exceeds this.
    pub v_disp_threshold: u32,
    /// Full width of the acceptance band around the fitted line, in cells.
    pub line_width: f32,
    /// Line-vote resolution and minimum vote count.
    pub vote: LineVoteParams,
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            v_disp_threshold: 3,
            line_width: 20.0,
            vote: LineVoteParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let params = RoadParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: RoadParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let params: RoadParams = serde_json::from_str(r#"{"ground": {"lineWidth": 12.0}}"#).unwrap();
        assert_eq!(params.ground.line_width, 12.0);
        assert_eq!(params.ground.v_disp_threshold, 3);
        assert_eq!(params.obstacle.u_disp_threshold, 3);
        assert_eq!(params.cleanup.small_region_size, 500);
    }
}
