//! Core data model for the fast-moving-object (FMO) detector family.
//!
//! This crate is intentionally small: the per-frame strip/cluster data
//! model, the flat tuning [`Config`], the [`Detector`] capability trait and
//! the immutable detection records. It performs no video I/O and knows
//! nothing about concrete detection backends; those live in the
//! `fmo-detect-*` detector crates and are selected by name through the
//! `fmo-detect` facade.

mod cluster;
mod config;
mod detection;
mod detector;
mod geometry;
mod image;
mod logger;
mod strip;

pub use cluster::{Cluster, InvalidReason, StripRef, Validity};
pub use config::Config;
pub use detection::{point_order, Detection, ObjectState, Output, PointSet, Predecessor};
pub use detector::{Detector, FrameCandidates, PixelFormat};
pub use geometry::{Bounds, Dims, HalfDims, Pos};
pub use image::GrayImage;
#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
pub use strip::{ChainIter, Strip, StripArena, StripIndex};
