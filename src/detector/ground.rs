//! Ground-line estimation and traversable-region classification.
//!
//! Under a planar-ground assumption the road traces a dominant line in the
//! v-disparity plane (disparity shrinks linearly with distance, i.e. with
//! decreasing image row). The estimator votes for that line, keeps hit
//! cells within a band around it, back-projects them to full resolution
//! and cleans the resulting mask.
use super::params::GroundParams;
use crate::disparity::DisparityField;
use crate::hough::dominant_line;
use crate::mask::{cleanup, CleanupParams, RegionMask};
use crate::projection::{compute_v_disparity, DisparityIndex, Histogram};
use crate::types::GroundLine;
use log::debug;

/// Traversable mask plus the fitted ground line.
///
/// `line == None` is the "no ground plane found" terminal state: the mask
/// is all-false and the frame simply has no traversable area.
#[derive(Clone, Debug)]
pub struct GroundEstimate {
    /// Cleaned traversable mask.
    pub mask: RegionMask,
    pub line: Option<GroundLine>,
    /// Distinct disparity values feeding the projection.
    pub distinct_values: usize,
    /// V-disparity cells above the threshold.
    pub hit_cells: usize,
    /// Hit cells within the acceptance band of the line.
    pub banded_cells: usize,
    /// Mask area before cleanup.
    pub raw_px: usize,
}

/// Estimate the ground line given a precomputed v-disparity projection.
pub fn estimate(
    field: &DisparityField,
    v_disp: &Histogram,
    index: &DisparityIndex,
    params: &GroundParams,
    cleanup_params: &CleanupParams,
) -> GroundEstimate {
    let hits = v_disp.threshold(params.v_disp_threshold);
    let hit_cells = hits.area();

    let Some(line) = dominant_line(&hits, &params.vote) else {
        debug!("ground: no line reached {} votes", params.vote.min_votes);
        return GroundEstimate {
            mask: RegionMask::new(field.w, field.h),
            line: None,
            distinct_values: index.len(),
            hit_cells,
            banded_cells: 0,
            raw_px: 0,
        };
    };
    debug!(
        "ground: line rho={:.2} theta_deg={:.1} votes={}",
        line.rho,
        line.theta.to_degrees(),
        line.votes
    );

    let half_band = params.line_width / 2.0;
    let mut raw = RegionMask::new(field.w, field.h);
    let mut banded_cells = 0usize;
    for row in 0..hits.h {
        for j in 0..hits.w {
            if !hits.get(j, row) || line.offset(j, row).abs() > half_band {
                continue;
            }
            banded_cells += 1;
            let d = index.value(j);
            for x in 0..field.w {
                if field.get(x, row) == Some(d) {
                    raw.set(x, row, true);
                }
            }
        }
    }

    let raw_px = raw.area();
    let mask = cleanup(&raw, cleanup_params);
    GroundEstimate {
        mask,
        line: Some(line),
        distinct_values: index.len(),
        hit_cells,
        banded_cells,
        raw_px,
    }
}

/// Convenience wrapper: project and estimate in one call.
pub fn estimate_ground(
    field: &DisparityField,
    params: &GroundParams,
    cleanup_params: &CleanupParams,
) -> GroundEstimate {
    let (v_disp, index) = compute_v_disparity(field);
    estimate(field, &v_disp, &index, params, cleanup_params)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Disparity falling linearly with row: a perfect planar road.
    fn planar_field(w: usize, h: usize) -> DisparityField {
        let mut field = DisparityField::new(w, h);
        for y in 0..h {
            for x in 0..w {
                field.set(x, y, Some((h - 1 - y) as f32 / 16.0));
            }
        }
        field
    }

    #[test]
    fn planar_field_is_fully_traversable() {
        let field = planar_field(60, 80);
        let est = estimate_ground(
            &field,
            &GroundParams::default(),
            &CleanupParams::default(),
        );
        let line = est.line.expect("planar road must produce a ground line");
        assert_eq!(line.votes, 80);
        assert_eq!(est.banded_cells, 80);
        assert_eq!(est.mask.area(), 60 * 80);
    }

    #[test]
    fn sparse_votes_mean_no_ground_plane() {
        // 30 rows of hits stay below the default 50-vote minimum.
        let field = planar_field(60, 30);
        let est = estimate_ground(
            &field,
            &GroundParams::default(),
            &CleanupParams::default(),
        );
        assert!(est.line.is_none());
        assert_eq!(est.mask.area(), 0);
        assert!(est.hit_cells > 0, "cells were hit, just not collinear enough");
    }

    #[test]
    fn cells_outside_the_band_are_rejected() {
        // A planar ramp with a band of rows replaced by a far-off disparity.
        let mut field = planar_field(60, 80);
        for y in 8..14 {
            for x in 0..60 {
                field.set(x, y, Some(40.0));
            }
        }
        let params = GroundParams {
            line_width: 4.0,
            ..Default::default()
        };
        // Gentle cleanup so the rejected rows are not bridged or refilled.
        let cleanup = CleanupParams {
            morph_radius: 1,
            small_region_size: 2,
            ..Default::default()
        };
        let est = estimate_ground(&field, &params, &cleanup);
        assert!(est.line.is_some());
        assert!(!est.mask.get(30, 10), "off-line rows must not be traversable");
        assert!(est.mask.get(30, 40), "on-line rows stay traversable");
    }
}
