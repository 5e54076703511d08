//! Morphology on boolean masks with a disk structuring element.
//!
//! Border convention: dilation ignores out-of-bounds kernel positions;
//! erosion requires only the in-bounds positions to be set. With this
//! convention closing is idempotent on any mask.
use super::RegionMask;

/// Offsets of a disk structuring element: all (dx, dy) with `dx² + dy² ≤ r²`.
pub fn disk(radius: usize) -> Vec<(i32, i32)> {
    let r = radius as i32;
    let r2 = r * r;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Set every pixel covered by the kernel anchored at a set pixel.
pub fn dilate(src: &RegionMask, kernel: &[(i32, i32)]) -> RegionMask {
    let mut out = RegionMask::new(src.w, src.h);
    let (w, h) = (src.w as i32, src.h as i32);

    for y in 0..h {
        for x in 0..w {
            let mut any = false;
            for &(kx, ky) in kernel {
                let px = x + kx;
                let py = y + ky;
                if px >= 0 && px < w && py >= 0 && py < h && src.get(px as usize, py as usize) {
                    any = true;
                    break;
                }
            }
            if any {
                out.set(x as usize, y as usize, true);
            }
        }
    }
    out
}

/// Keep a pixel only if every in-bounds kernel position is set.
pub fn erode(src: &RegionMask, kernel: &[(i32, i32)]) -> RegionMask {
    let mut out = RegionMask::new(src.w, src.h);
    let (w, h) = (src.w as i32, src.h as i32);

    for y in 0..h {
        for x in 0..w {
            let mut all = true;
            for &(kx, ky) in kernel {
                let px = x + kx;
                let py = y + ky;
                if px >= 0 && px < w && py >= 0 && py < h && !src.get(px as usize, py as usize) {
                    all = false;
                    break;
                }
            }
            if all {
                out.set(x as usize, y as usize, true);
            }
        }
    }
    out
}

/// Morphological closing: dilate then erode with the same kernel.
///
/// Bridges gaps narrower than the structuring element without growing the
/// overall region.
pub fn close(src: &RegionMask, kernel: &[(i32, i32)]) -> RegionMask {
    erode(&dilate(src, kernel), kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_radius_zero_is_the_anchor() {
        assert_eq!(disk(0), vec![(0, 0)]);
    }

    #[test]
    fn disk_radius_one_is_a_cross() {
        let mut offsets = disk(1);
        offsets.sort();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn closing_bridges_a_narrow_gap() {
        let mut m = RegionMask::new(9, 3);
        for y in 0..3 {
            for x in 0..4 {
                m.set(x, y, true);
                m.set(8 - x, y, true);
            }
        }
        assert!(!m.get(4, 1));
        let closed = close(&m, &disk(2));
        assert!(closed.get(4, 1), "gap should be bridged");
    }

    #[test]
    fn closing_is_idempotent() {
        let mut m = RegionMask::new(20, 20);
        for y in 4..9 {
            for x in 3..8 {
                m.set(x, y, true);
            }
        }
        for y in 5..12 {
            for x in 10..16 {
                m.set(x, y, true);
            }
        }
        let kernel = disk(3);
        let once = close(&m, &kernel);
        let twice = close(&once, &kernel);
        assert_eq!(once, twice);
    }

    #[test]
    fn closing_never_fires_on_an_empty_mask() {
        let empty = RegionMask::new(12, 7);
        assert_eq!(close(&empty, &disk(4)).area(), 0);
    }
}
