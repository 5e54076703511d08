//! Disparity projections: value↔index bijection and u-/v-disparity histograms.
//!
//! A projection maps the set of distinct valid disparity values of one field
//! onto a dense integer range, then counts occurrences per image column
//! (u-disparity) or per image row (v-disparity). Vertical obstacles pile up
//! in u-disparity columns; a planar road traces a line in v-disparity.
//!
//! The bijection is rebuilt for every projector call: the u- and v-stages
//! run on different fields and therefore carry distinct index spaces.

mod histogram;
mod index;
mod project;

pub use histogram::Histogram;
pub use index::DisparityIndex;
pub use project::{compute_u_disparity, compute_v_disparity};
