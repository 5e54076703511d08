//! Ordered bijection between distinct disparity values and dense indices.
use crate::disparity::DisparityField;

/// Sorted distinct valid disparity values of one field.
///
/// The position of a value in the sorted array is its index; lookup is a
/// binary search. Deterministic for identical input fields: the mapping
/// depends only on the set of values, not on pixel order.
#[derive(Clone, Debug, PartialEq)]
pub struct DisparityIndex {
    values: Vec<f32>,
}

impl DisparityIndex {
    /// Collect the distinct valid values of `field`, sorted ascending.
    pub fn from_field(field: &DisparityField) -> Self {
        let mut values: Vec<f32> = field.data.iter().flatten().copied().collect();
        values.sort_by(f32::total_cmp);
        values.dedup();
        Self { values }
    }

    /// Number of distinct values (the dense range is `[0, len)`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Disparity value at `index`.
    #[inline]
    pub fn value(&self, index: usize) -> f32 {
        self.values[index]
    }

    /// Index of a disparity value, `None` if the value is not in the field.
    #[inline]
    pub fn index_of(&self, d: f32) -> Option<usize> {
        self.values.binary_search_by(|v| v.total_cmp(&d)).ok()
    }

    /// The sorted value array backing the bijection.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
