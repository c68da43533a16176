//! Diagnostic rendering of the current frame.

use fmo_detect_core::GrayImage;

use crate::detector::StripClusterDetector;

const ONE_SLICE: u8 = 128;
const BOTH_SLICES: u8 = 255;
const OUTLINE: u8 = 192;

impl StripClusterDetector {
    /// Paint every candidate strip into a frame-sized canvas: mid-gray for
    /// strips present in exactly one difference image, white for strips
    /// present in both. The selected object's newer-image bounds are
    /// outlined.
    pub(crate) fn render_debug(&self) -> GrayImage {
        let mut canvas = GrayImage::new(self.dims.width, self.dims.height);

        for cluster in &self.clusters {
            for (_, strip) in self.arena.chain(cluster.l.strip) {
                let value = match (strip.older, strip.newer) {
                    (true, true) => BOTH_SLICES,
                    (false, false) => continue,
                    _ => ONE_SLICE,
                };
                canvas.fill_rect(
                    strip.pos.x - strip.half.width,
                    strip.pos.y - strip.half.height,
                    strip.pos.x + strip.half.width,
                    strip.pos.y + strip.half.height,
                    value,
                );
            }
        }

        if let Some(index) = self.object {
            let b = &self.clusters[index].bounds1;
            canvas.draw_rect(b.min.x, b.min.y, b.max.x, b.max.y, OUTLINE);
        }

        canvas
    }
}
