//! Connected-region analysis and the shared cleanup contract.
use super::{morph, RegionMask};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const DIRS_4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIRS_8: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Neighbor-adjacency rule used when grouping pixels into regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    #[default]
    Four,
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &DIRS_4,
            Self::Eight => &DIRS_8,
        }
    }
}

/// Parameters of the cleanup sequence shared by both segmentation stages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CleanupParams {
    /// Disk radius of the closing structuring element.
    pub morph_radius: usize,
    /// Regions and holes strictly smaller than this many pixels are removed / filled.
    pub small_region_size: usize,
    pub connectivity: Connectivity,
}

impl Default for CleanupParams {
    fn default() -> Self {
        Self {
            morph_radius: 9,
            small_region_size: 500,
            connectivity: Connectivity::Four,
        }
    }
}

/// Clear connected foreground regions with fewer than `min_size` pixels.
pub fn remove_small_regions(mask: &RegionMask, min_size: usize, conn: Connectivity) -> RegionMask {
    let mut out = mask.clone();
    let mut seen = vec![false; mask.data.len()];
    let (w, h) = (mask.w as i32, mask.h as i32);
    let offsets = conn.offsets();
    let mut queue = VecDeque::new();
    let mut component = Vec::new();

    for start in 0..mask.data.len() {
        if !mask.data[start] || seen[start] {
            continue;
        }
        component.clear();
        seen[start] = true;
        queue.push_back(start);
        while let Some(i) = queue.pop_front() {
            component.push(i);
            let x = (i % mask.stride) as i32;
            let y = (i / mask.stride) as i32;
            for &(dx, dy) in offsets {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                let ni = ny as usize * mask.stride + nx as usize;
                if mask.data[ni] && !seen[ni] {
                    seen[ni] = true;
                    queue.push_back(ni);
                }
            }
        }
        if component.len() < min_size {
            for &i in &component {
                out.data[i] = false;
            }
        }
    }
    out
}

/// Fill background regions with fewer than `min_size` pixels.
///
/// Complement formulation: holes are small connected regions of the
/// inverted mask, removed there and inverted back.
pub fn fill_small_holes(mask: &RegionMask, min_size: usize, conn: Connectivity) -> RegionMask {
    remove_small_regions(&mask.complement(), min_size, conn).complement()
}

/// The shared cleanup sequence: closing, hole filling, small-region removal.
///
/// Total over any well-formed mask, including all-clear and all-set inputs,
/// and idempotent for fixed parameters.
pub fn cleanup(mask: &RegionMask, params: &CleanupParams) -> RegionMask {
    let kernel = morph::disk(params.morph_radius);
    let closed = morph::close(mask, &kernel);
    let filled = fill_small_holes(&closed, params.small_region_size, params.connectivity);
    remove_small_regions(&filled, params.small_region_size, params.connectivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(mask: &mut RegionMask, x0: usize, y0: usize, x1: usize, y1: usize, v: bool) {
        for y in y0..y1 {
            for x in x0..x1 {
                mask.set(x, y, v);
            }
        }
    }

    #[test]
    fn removal_never_increases_area_and_spares_large_regions() {
        let mut m = RegionMask::new(30, 30);
        block(&mut m, 0, 0, 10, 10, true); // 100 px
        block(&mut m, 20, 20, 23, 23, true); // 9 px
        let out = remove_small_regions(&m, 50, Connectivity::Four);
        assert!(out.area() <= m.area());
        assert_eq!(out.area(), 100);
        assert!(out.get(5, 5));
        assert!(!out.get(21, 21));
    }

    #[test]
    fn removal_threshold_is_strict() {
        let mut m = RegionMask::new(10, 10);
        block(&mut m, 0, 0, 3, 3, true); // exactly 9 px
        let out = remove_small_regions(&m, 9, Connectivity::Four);
        assert_eq!(out.area(), 9, "a region of exactly min_size stays");
    }

    #[test]
    fn diagonal_pixels_split_under_four_connectivity() {
        let mut m = RegionMask::new(4, 4);
        m.set(0, 0, true);
        m.set(1, 1, true);
        // Two 1-px regions under 4-connectivity, one 2-px region under 8.
        assert_eq!(remove_small_regions(&m, 2, Connectivity::Four).area(), 0);
        assert_eq!(remove_small_regions(&m, 2, Connectivity::Eight).area(), 2);
    }

    #[test]
    fn small_hole_is_filled_large_hole_survives() {
        let mut m = RegionMask::new(40, 40);
        block(&mut m, 0, 0, 40, 40, true);
        block(&mut m, 3, 3, 5, 5, false); // 4-px hole
        block(&mut m, 10, 10, 20, 20, false); // 100-px hole
        let out = fill_small_holes(&m, 50, Connectivity::Four);
        assert!(out.get(4, 4));
        assert!(!out.get(15, 15));
    }

    #[test]
    fn cleanup_is_total_on_degenerate_masks() {
        let params = CleanupParams {
            morph_radius: 3,
            small_region_size: 20,
            connectivity: Connectivity::Four,
        };
        let empty = RegionMask::new(25, 25);
        assert_eq!(cleanup(&empty, &params).area(), 0);

        let mut full = RegionMask::new(25, 25);
        block(&mut full, 0, 0, 25, 25, true);
        assert_eq!(cleanup(&full, &params).area(), 625);
    }

    #[test]
    fn cleanup_is_idempotent() {
        let params = CleanupParams {
            morph_radius: 2,
            small_region_size: 12,
            connectivity: Connectivity::Four,
        };
        let mut m = RegionMask::new(40, 30);
        block(&mut m, 2, 2, 14, 12, true);
        block(&mut m, 15, 4, 17, 10, true); // bridgeable neighbor
        block(&mut m, 6, 5, 8, 7, false); // small hole
        block(&mut m, 30, 25, 32, 27, true); // 4-px noise
        let once = cleanup(&m, &params);
        let twice = cleanup(&once, &params);
        assert_eq!(once, twice);
    }
}
