//! Strip/cluster fast-moving-object detector built on `fmo-detect-core`.
//!
//! ## Quickstart
//!
//! ```
//! use fmo_detect_core::{Config, Detector, Dims, FrameCandidates, Output, PixelFormat};
//! use fmo_detect_strips::StripClusterDetector;
//!
//! let dims = Dims { width: 640, height: 480 };
//! let mut detector = StripClusterDetector::new(Config::default(), PixelFormat::Gray, dims);
//!
//! let mut out = Output::default();
//! detector.process_frame(FrameCandidates::default());
//! detector.get_output(&mut out, false);
//! assert!(out.detections.is_empty());
//! ```
//!
//! Per frame:
//! 1. Rank the supplied clusters by total strip-chain length, descending;
//!    longer chains are stronger motion evidence.
//! 2. For each candidate, compute per-time-slice bounding boxes over its
//!    strip chain and apply the directional-motion test: the candidate's
//!    visible span in one difference image must be offset from its span in
//!    the other by a bounded fraction of the full span, on both sides.
//! 3. Commit to the first candidate that passes and stop; candidates
//!    examined and rejected are marked `NotAnObject`.
//! 4. Convert the winner into an immutable detection record (centre,
//!    radius, predecessor centre) that can re-derive its pixel set.

mod debug;
mod detector;
mod output;
mod select;
#[cfg(test)]
mod test_util;

pub use detector::StripClusterDetector;

/// Registry name of this detector.
pub const ALGORITHM_NAME: &str = "strip-cluster-v1";
