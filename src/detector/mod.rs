//! Traversable-region detector orchestrating the u-/v-disparity pipeline.
//!
//! Overview
//! - Projects the disparity field into a u-disparity histogram and marks
//!   columns where one disparity value repeats often enough to indicate a
//!   vertical obstacle.
//! - Back-projects the hits, cleans the obstacle mask and splits the field
//!   into obstacle / non-obstacle parts.
//! - Projects the non-obstacle part into a v-disparity histogram and votes
//!   for the dominant disparity-vs-row line (the ground plane).
//! - Bands around the fitted line, back-projects the accepted cells and
//!   cleans the result into the final traversable mask.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the CLI.
//! - [`obstacle`] – u-disparity thresholding and field splitting.
//! - [`ground`] – ground-line vote, banding and classification.
//! - `pipeline` – the [`RoadDetector`] implementation.

pub mod ground;
pub mod obstacle;
pub mod params;
mod pipeline;

pub use params::{GroundParams, ObstacleParams, RoadParams};
pub use pipeline::RoadDetector;
