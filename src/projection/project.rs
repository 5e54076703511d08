//! U- and v-disparity projectors.
//!
//! Columns (u) / rows (v) are mutually independent, so either projector
//! could run them in any order or in parallel; single-frame processing
//! keeps them sequential.
use super::{DisparityIndex, Histogram};
use crate::disparity::DisparityField;

/// Project a disparity field into its u-disparity histogram.
///
/// Cell `[i, col]` counts the pixels of image column `col` whose disparity
/// maps to index `i`. Columns without valid pixels contribute nothing.
pub fn compute_u_disparity(field: &DisparityField) -> (Histogram, DisparityIndex) {
    let index = DisparityIndex::from_field(field);
    let mut hist = Histogram::new(index.len(), field.w);
    for x in 0..field.w {
        for y in 0..field.h {
            if let Some(d) = field.get(x, y) {
                if let Some(i) = index.index_of(d) {
                    hist.inc(i, x);
                }
            }
        }
    }
    (hist, index)
}

/// Project a disparity field into its v-disparity histogram.
///
/// Transpose of [`compute_u_disparity`]: cell `[row, j]` counts the pixels
/// of image row `row` whose disparity maps to index `j`.
pub fn compute_v_disparity(field: &DisparityField) -> (Histogram, DisparityIndex) {
    let index = DisparityIndex::from_field(field);
    let mut hist = Histogram::new(field.h, index.len());
    for y in 0..field.h {
        for d in field.row(y).iter().flatten() {
            if let Some(j) = index.index_of(*d) {
                hist.inc(y, j);
            }
        }
    }
    (hist, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staircase_field() -> DisparityField {
        // 4×3 field: column x carries disparity x/16 except one invalid pixel.
        let mut field = DisparityField::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                field.set(x, y, Some(x as f32 / 16.0));
            }
        }
        field.set(2, 1, None);
        field
    }

    #[test]
    fn u_histogram_counts_per_column() {
        let field = staircase_field();
        let (hist, index) = compute_u_disparity(&field);
        assert_eq!((hist.rows, hist.cols), (4, 4));
        assert_eq!(index.len(), 4);
        for x in 0..4 {
            let i = index.index_of(x as f32 / 16.0).unwrap();
            let expected = if x == 2 { 2 } else { 3 };
            assert_eq!(hist.at(i, x), expected);
        }
        assert_eq!(hist.total(), 11, "invalid pixel contributes nothing");
    }

    #[test]
    fn v_histogram_counts_per_row() {
        let field = staircase_field();
        let (hist, index) = compute_v_disparity(&field);
        assert_eq!((hist.rows, hist.cols), (3, 4));
        for y in 0..3 {
            let expected = if y == 1 { 3 } else { 4 };
            let row_total: u32 = (0..hist.cols).map(|j| hist.at(y, j)).sum();
            assert_eq!(row_total, expected);
        }
        // Row 0 holds one pixel of each distinct value.
        for j in 0..index.len() {
            assert_eq!(hist.at(0, j), 1);
        }
    }

    #[test]
    fn all_invalid_field_projects_to_empty_histograms() {
        let field = DisparityField::new(5, 4);
        let (u, ui) = compute_u_disparity(&field);
        let (v, vi) = compute_v_disparity(&field);
        assert_eq!((u.rows, u.cols), (0, 5));
        assert_eq!((v.rows, v.cols), (4, 0));
        assert!(ui.is_empty() && vi.is_empty());
        assert_eq!(u.total() + v.total(), 0);
    }
}
