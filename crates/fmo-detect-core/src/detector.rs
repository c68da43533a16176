use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::detection::Output;
use crate::image::GrayImage;
use crate::strip::StripArena;

/// Input pixel format of the video stream a detector was built for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PixelFormat {
    Gray,
    Bgr,
    Yuv420Sp,
}

/// One frame's candidate set, handed over by the strip/cluster builder.
///
/// Ownership moves into the detector for the duration of the frame and the
/// previous frame's data is dropped wholesale, so no flags or links survive
/// a frame boundary.
#[derive(Debug, Default)]
pub struct FrameCandidates {
    pub arena: StripArena,
    pub clusters: Vec<Cluster>,
}

/// Shared contract of the detector family.
///
/// Implementations are selected by name at construction time through the
/// registry in the `fmo-detect` crate and consumed through this trait.
/// Processing is frame-sequential: one frame's candidates are fully
/// consumed before the next frame's are built.
pub trait Detector: std::fmt::Debug {
    /// Consume the next frame's candidates and select at most one object.
    fn process_frame(&mut self, frame: FrameCandidates);

    /// Write this frame's detections into `out`, clearing it first.
    ///
    /// `smooth_trajectory` is a policy flag consumed by trajectory
    /// post-processing in downstream stages; it does not affect the
    /// extraction itself.
    fn get_output(&self, out: &mut Output, smooth_trajectory: bool);

    /// Render a diagnostic view of the current frame.
    fn debug_image(&self) -> GrayImage;
}
