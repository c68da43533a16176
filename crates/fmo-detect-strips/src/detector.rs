use std::sync::Arc;

use fmo_detect_core::{
    Cluster, Config, Detector, Dims, FrameCandidates, GrayImage, Output, PixelFormat, StripArena,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Strip/cluster detector: selects at most one fast-moving object per frame
/// from pre-built candidate clusters.
///
/// The detector owns its [`Config`] copy and the current frame's candidate
/// data exclusively; the arena is held behind an [`Arc`] so emitted
/// detections can keep a snapshot of it past the frame boundary.
#[derive(Debug)]
pub struct StripClusterDetector {
    pub(crate) config: Config,
    pub(crate) format: PixelFormat,
    pub(crate) dims: Dims,
    pub(crate) arena: Arc<StripArena>,
    pub(crate) clusters: Vec<Cluster>,
    /// Index of this frame's selected object cluster, if any.
    pub(crate) object: Option<usize>,
    /// Scratch for the ranking pass, kept across frames to avoid
    /// reallocation.
    pub(crate) sort_cache: Vec<(f32, usize)>,
}

impl StripClusterDetector {
    pub fn new(config: Config, format: PixelFormat, dims: Dims) -> Self {
        debug_assert!(config.min_motion <= config.max_motion);
        Self {
            config,
            format,
            dims,
            arena: Arc::new(StripArena::new()),
            clusters: Vec::new(),
            object: None,
            sort_cache: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }
}

impl Detector for StripClusterDetector {
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, frame), fields(clusters = frame.clusters.len()))
    )]
    fn process_frame(&mut self, frame: FrameCandidates) {
        self.arena = Arc::new(frame.arena);
        self.clusters = frame.clusters;
        self.find_objects();
    }

    fn get_output(&self, out: &mut Output, smooth_trajectory: bool) {
        self.extract_output(out, smooth_trajectory);
    }

    fn debug_image(&self) -> GrayImage {
        self.render_debug()
    }
}
