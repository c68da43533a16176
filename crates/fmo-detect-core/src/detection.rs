use std::cmp::Ordering;
use std::sync::Arc;

use crate::geometry::Pos;
use crate::strip::{StripArena, StripIndex};

/// Current-frame state of a detected object.
#[derive(Clone, Copy, Debug)]
pub struct ObjectState {
    /// Centre in the current frame, derived from the newer-image bounds.
    pub center: Pos,
    /// Radius estimate, averaged from the cluster's approximate heights.
    pub radius: f32,
}

/// Prior-time state of a detected object, derived from the older-image
/// bounds.
#[derive(Clone, Copy, Debug)]
pub struct Predecessor {
    pub center: Pos,
}

/// Pixel coordinates of one detection.
pub type PointSet = Vec<Pos>;

/// Canonical row-major ordering for point sets: `y` first, then `x`.
#[inline]
pub fn point_order(a: &Pos, b: &Pos) -> Ordering {
    (a.y, a.x).cmp(&(b.y, b.x))
}

/// Immutable record for one detected object in one frame.
///
/// A detection keeps a shared snapshot of its frame's strip arena so the
/// exact member pixel set can be re-derived on demand. It never changes
/// after construction and is safe to read from multiple consumers.
#[derive(Clone, Debug)]
pub struct Detection {
    pub object: ObjectState,
    pub predecessor: Predecessor,
    arena: Arc<StripArena>,
    chain: StripIndex,
}

impl Detection {
    pub fn new(
        object: ObjectState,
        predecessor: Predecessor,
        arena: Arc<StripArena>,
        chain: StripIndex,
    ) -> Self {
        Self {
            object,
            predecessor,
            arena,
            chain,
        }
    }

    /// Recompute the member pixel set into `out`: every pixel of every strip
    /// present in **both** difference images, sorted in canonical row-major
    /// order. Derived on every call, never cached.
    pub fn points(&self, out: &mut PointSet) {
        out.clear();

        for (_, strip) in self.arena.chain(self.chain) {
            if !(strip.older && strip.newer) {
                continue;
            }
            let xe = strip.pos.x + strip.half.width;
            let ye = strip.pos.y + strip.half.height;
            for y in strip.pos.y - strip.half.height..ye {
                for x in strip.pos.x - strip.half.width..xe {
                    out.push(Pos::new(x, y));
                }
            }
        }

        // Row-major order supports fast set comparison downstream.
        out.sort_unstable_by(point_order);
    }
}

/// All detections for one frame, in emission order.
///
/// Cleared and rebuilt by every `get_output` call; never accumulates across
/// frames.
#[derive(Clone, Debug, Default)]
pub struct Output {
    pub detections: Vec<Detection>,
}

impl Output {
    pub fn clear(&mut self) {
        self.detections.clear();
    }
}
