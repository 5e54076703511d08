//! Hough-style line vote over a binary plane.
//!
//! Generic contract used by the ground-line estimator: given a binary
//! plane, an angular resolution, a radial resolution and a minimum vote
//! count, return the highest-voting line or none. A set pixel (x, y) votes
//! for every line `x*cos(theta) + y*sin(theta) = rho` passing through it,
//! theta sweeping `[0, pi)`.
use crate::mask::RegionMask;
use crate::types::GroundLine;
use serde::{Deserialize, Serialize};

/// Resolution and acceptance threshold of the line vote.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineVoteParams {
    /// Angular resolution in degrees.
    pub theta_res_deg: f32,
    /// Radial resolution in plane units.
    pub rho_res: f32,
    /// Minimum votes the winning line must reach.
    pub min_votes: u32,
}

impl Default for LineVoteParams {
    fn default() -> Self {
        Self {
            theta_res_deg: 1.0,
            rho_res: 1.0,
            min_votes: 50,
        }
    }
}

/// Return the highest-voting line of the plane, or `None` if no line
/// reaches `min_votes`.
///
/// Tie-break on equal vote counts: the smallest theta wins, then the
/// smallest rho (accumulator scan order, strictly-greater updates).
pub fn dominant_line(plane: &RegionMask, params: &LineVoteParams) -> Option<GroundLine> {
    if plane.w == 0 || plane.h == 0 {
        return None;
    }
    let theta_res = params.theta_res_deg.to_radians();
    let n_theta = (180.0 / params.theta_res_deg).round().max(1.0) as usize;
    let max_rho = (plane.w as f32).hypot(plane.h as f32).ceil();
    let n_rho = (2.0 * max_rho / params.rho_res).ceil() as usize + 1;

    let trig: Vec<(f32, f32)> = (0..n_theta)
        .map(|t| {
            let theta = t as f32 * theta_res;
            (theta.cos(), theta.sin())
        })
        .collect();

    let mut acc = vec![0u32; n_theta * n_rho];
    for y in 0..plane.h {
        for x in 0..plane.w {
            if !plane.get(x, y) {
                continue;
            }
            for (t, &(cos_t, sin_t)) in trig.iter().enumerate() {
                let rho = x as f32 * cos_t + y as f32 * sin_t;
                let r = ((rho + max_rho) / params.rho_res).round() as usize;
                if r < n_rho {
                    acc[t * n_rho + r] += 1;
                }
            }
        }
    }

    let mut best: Option<(usize, usize, u32)> = None;
    for t in 0..n_theta {
        for r in 0..n_rho {
            let votes = acc[t * n_rho + r];
            if votes > best.map_or(0, |(_, _, v)| v) {
                best = Some((t, r, votes));
            }
        }
    }

    best.filter(|&(_, _, votes)| votes >= params.min_votes)
        .map(|(t, r, votes)| GroundLine {
            rho: r as f32 * params.rho_res - max_rho,
            theta: t as f32 * theta_res,
            votes,
        })
}
