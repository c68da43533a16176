//! Shared helpers for building synthetic frames in tests.

use fmo_detect_core::{
    Cluster, FrameCandidates, HalfDims, Pos, Strip, StripArena, StripRef,
};

/// Half-extents used by every synthetic strip: 4 pixels wide, 8 tall.
pub const HALF: HalfDims = HalfDims {
    width: 2,
    height: 4,
};

/// Build one cluster from `(x, y, older, newer)` specs.
///
/// Strips are chained in spec order. The first spec must be the leftmost
/// strip (the chain head doubles as the cluster's `l`); the spec with the
/// largest x becomes `r`. Approximate heights are fixed at 4 and 8, so the
/// extracted radius is 6.
pub fn chain_cluster(
    arena: &mut StripArena,
    specs: &[(i32, i32, bool, bool)],
    length_total: f32,
) -> Cluster {
    assert!(!specs.is_empty());

    let mut head = Strip::END;
    let mut prev = Strip::END;
    let mut right = (Strip::END, Pos::new(i32::MIN, 0));
    for &(x, y, older, newer) in specs {
        let index = arena.push(Strip {
            pos: Pos::new(x, y),
            half: HALF,
            older,
            newer,
            next: Strip::END,
        });
        if prev == Strip::END {
            head = index;
        } else {
            arena.link(prev, index);
        }
        if x > right.1.x {
            right = (index, Pos::new(x, y));
        }
        prev = index;
    }

    let l = StripRef {
        strip: head,
        pos: Pos::new(specs[0].0, specs[0].1),
    };
    let r = StripRef {
        strip: right.0,
        pos: right.1,
    };
    Cluster::new(l, r, length_total, 4.0, 8.0)
}

pub fn frame(arena: StripArena, clusters: Vec<Cluster>) -> FrameCandidates {
    FrameCandidates { arena, clusters }
}
