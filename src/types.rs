use serde::{Deserialize, Serialize};

/// Ground-plane correlation line in the v-disparity plane, polar form
/// `index*cos(theta) + row*sin(theta) = rho`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundLine {
    /// Signed perpendicular distance from the plane origin (units of cells).
    pub rho: f32,
    /// Line normal angle in radians, in `[0, pi)`.
    pub theta: f32,
    /// Accumulated votes backing this line.
    pub votes: u32,
}

impl GroundLine {
    /// Signed perpendicular offset of a v-disparity cell from the line.
    #[inline]
    pub fn offset(&self, index: usize, row: usize) -> f32 {
        index as f32 * self.theta.cos() + row as f32 * self.theta.sin() - self.rho
    }
}

/// Compact per-frame result of the traversability pipeline.
///
/// `found == false` with an all-false mask is the defined terminal state
/// when no ground line clears the vote threshold; it is not an error.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadResult {
    pub found: bool,
    pub ground_line: Option<GroundLine>,
    /// Number of pixels classified traversable.
    pub traversable_px: usize,
    /// Traversable fraction of the full frame, in `[0, 1]`.
    pub coverage: f32,
    pub latency_ms: f64,
}
