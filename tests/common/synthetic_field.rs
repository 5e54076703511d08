//! Synthetic disparity fields for end-to-end scenarios.
use road_detector::disparity::DisparityField;

/// Disparity decreasing linearly with row: an unobstructed planar road.
///
/// Row `y` carries disparity `(h - 1 - y) / 16` in every column, so the
/// v-disparity hits trace the anti-diagonal `index + row = h - 1`.
pub fn planar_field(w: usize, h: usize) -> DisparityField {
    let mut field = DisparityField::new(w, h);
    for y in 0..h {
        for x in 0..w {
            field.set(x, y, Some((h - 1 - y) as f32 / 16.0));
        }
    }
    field
}

/// Planar road with a vertical obstacle wall of constant disparity.
pub fn planar_field_with_wall(
    w: usize,
    h: usize,
    cols: std::ops::Range<usize>,
    rows: std::ops::Range<usize>,
    wall_disparity: f32,
) -> DisparityField {
    let mut field = planar_field(w, h);
    for y in rows {
        for x in cols.clone() {
            field.set(x, y, Some(wall_disparity));
        }
    }
    field
}

/// Field with no valid pixel at all.
pub fn all_invalid_field(w: usize, h: usize) -> DisparityField {
    DisparityField::new(w, h)
}
