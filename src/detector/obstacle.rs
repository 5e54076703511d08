//! Obstacle segmentation driven by the u-disparity projection.
//!
//! Vertical structures put many pixels of one column at the same disparity,
//! so their u-disparity cells accumulate high counts. Cells above the
//! threshold are back-projected to full resolution, the candidate mask is
//! cleaned up, and the field is split into obstacle / non-obstacle parts.
use super::params::ObstacleParams;
use crate::disparity::DisparityField;
use crate::mask::{cleanup, CleanupParams, RegionMask};
use crate::projection::{compute_u_disparity, DisparityIndex, Histogram};

/// Obstacle mask plus the two disparity sub-fields derived from it.
///
/// Every originally-valid pixel lands in exactly one of `obstacle_field`
/// and `non_obstacle_field`; invalid pixels stay invalid in both.
#[derive(Clone, Debug)]
pub struct ObstacleSplit {
    /// Cleaned obstacle mask.
    pub mask: RegionMask,
    /// Original disparity where the mask is set, invalid elsewhere.
    pub obstacle_field: DisparityField,
    /// Original disparity where the mask is clear, invalid elsewhere.
    pub non_obstacle_field: DisparityField,
    /// Distinct disparity values feeding the projection.
    pub distinct_values: usize,
    /// U-disparity cells above the threshold.
    pub hit_cells: usize,
    /// Mask area before cleanup.
    pub raw_px: usize,
}

/// Back-project u-disparity hits into a full-resolution candidate mask.
///
/// A hit cell `(i, col)` marks every pixel of column `col` whose disparity
/// equals the indexed value `i`. No cleanup is applied.
pub fn obstacle_mask_raw(
    field: &DisparityField,
    u_disp: &Histogram,
    index: &DisparityIndex,
    u_disp_threshold: u32,
) -> RegionMask {
    back_project(field, &u_disp.threshold(u_disp_threshold), index)
}

fn back_project(field: &DisparityField, hits: &RegionMask, index: &DisparityIndex) -> RegionMask {
    // Hit plane layout: x = image column, y = value index.
    let mut mask = RegionMask::new(field.w, field.h);
    for i in 0..hits.h {
        for col in 0..hits.w {
            if !hits.get(col, i) {
                continue;
            }
            let d = index.value(i);
            for y in 0..field.h {
                if field.get(col, y) == Some(d) {
                    mask.set(col, y, true);
                }
            }
        }
    }
    mask
}

/// Segment obstacles given a precomputed u-disparity projection.
pub fn segment(
    field: &DisparityField,
    u_disp: &Histogram,
    index: &DisparityIndex,
    params: &ObstacleParams,
    cleanup_params: &CleanupParams,
) -> ObstacleSplit {
    let hits = u_disp.threshold(params.u_disp_threshold);
    let hit_cells = hits.area();
    let raw = back_project(field, &hits, index);
    let raw_px = raw.area();
    let mask = cleanup(&raw, cleanup_params);

    let mut obstacle_field = DisparityField::new(field.w, field.h);
    let mut non_obstacle_field = DisparityField::new(field.w, field.h);
    for (i, &d) in field.data.iter().enumerate() {
        if d.is_none() {
            continue;
        }
        if mask.data[i] {
            obstacle_field.data[i] = d;
        } else {
            non_obstacle_field.data[i] = d;
        }
    }

    ObstacleSplit {
        hit_cells,
        raw_px,
        distinct_values: index.len(),
        mask,
        obstacle_field,
        non_obstacle_field,
    }
}

/// Convenience wrapper: project and segment in one call.
pub fn split_obstacles(
    field: &DisparityField,
    params: &ObstacleParams,
    cleanup_params: &CleanupParams,
) -> ObstacleSplit {
    let (u_disp, index) = compute_u_disparity(field);
    segment(field, &u_disp, &index, params, cleanup_params)
}
