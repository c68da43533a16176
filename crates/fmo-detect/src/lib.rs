//! High-level facade crate for the `fmo-detect-*` workspace.
//!
//! Fast-moving-object (FMO) detection: per frame, candidate clusters of
//! difference-image strips are ranked and validated with a geometric
//! directional-motion test, and at most one is emitted as this frame's
//! detection. Detection backends are selected by name at construction time
//! through a process-wide registry.
//!
//! ## Quickstart
//!
//! ```
//! use fmo_detect::{make, Config, Dims, FrameCandidates, Output, PixelFormat};
//!
//! # fn main() -> Result<(), fmo_detect::AlgorithmError> {
//! let config = Config::default();
//! let dims = Dims { width: 640, height: 480 };
//! let mut detector = make(&config, PixelFormat::Gray, dims)?;
//!
//! // Per frame: hand over the strip/cluster builder's candidates ...
//! detector.process_frame(FrameCandidates::default());
//!
//! // ... and collect at most one detection.
//! let mut out = Output::default();
//! detector.get_output(&mut out, false);
//! assert!(out.detections.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`](fmo_detect_core): strip arena, cluster model, [`Config`],
//!   detection records.
//! - [`strips`](fmo_detect_strips): the built-in strip/cluster detector.
//! - registry: [`make`], [`register_factory`], [`list_factories`].
//! - `save` (feature `image`): write debug images to disk.

pub use fmo_detect_core as core;
pub use fmo_detect_strips as strips;

pub use fmo_detect_core::{
    Bounds, Cluster, Config, Detection, Detector, Dims, FrameCandidates, GrayImage, HalfDims,
    InvalidReason, ObjectState, Output, PixelFormat, PointSet, Pos, Predecessor, Strip, StripArena,
    StripIndex, StripRef, Validity,
};
pub use fmo_detect_strips::{StripClusterDetector, ALGORITHM_NAME};

mod registry;
pub use registry::{list_factories, make, register_factory, AlgorithmError, Factory};

#[cfg(feature = "image")]
pub mod save;
