//! Detection extraction from the selected cluster.

use std::sync::Arc;

use fmo_detect_core::{Bounds, Detection, ObjectState, Output, Pos, Predecessor};

use crate::detector::StripClusterDetector;

fn center(b: &Bounds) -> Pos {
    Pos::new((b.max.x + b.min.x) / 2, (b.max.y + b.min.y) / 2)
}

fn average(v1: f32, v2: f32) -> f32 {
    (v1 + v2) / 2.0
}

impl StripClusterDetector {
    /// Build this frame's output: one detection for the selected object, or
    /// none.
    ///
    /// `_smooth_trajectory` is consumed by trajectory post-processing in
    /// downstream stages and has no effect on extraction.
    pub(crate) fn extract_output(&self, out: &mut Output, _smooth_trajectory: bool) {
        out.clear();

        let Some(index) = self.object else { return };
        let cluster = &self.clusters[index];

        let object = ObjectState {
            center: center(&cluster.bounds1),
            radius: average(cluster.approx_height_min, cluster.approx_height_max),
        };
        let predecessor = Predecessor {
            center: center(&cluster.bounds2),
        };

        out.detections.push(Detection::new(
            object,
            predecessor,
            Arc::clone(&self.arena),
            cluster.l.strip,
        ));
    }
}
