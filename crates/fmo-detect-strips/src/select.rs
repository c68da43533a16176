//! Object selection: candidate ranking and the directional-motion test.

use std::cmp::Ordering;

use fmo_detect_core::{Bounds, InvalidReason, StripIndex};
use log::debug;

use crate::detector::StripClusterDetector;

impl StripClusterDetector {
    /// Rank candidate clusters by total chain length, descending, and commit
    /// to the first one that passes the motion test.
    ///
    /// Candidates examined and rejected are marked
    /// [`InvalidReason::NotAnObject`]; candidates ranked after the winner
    /// keep whatever validity they already had.
    pub(crate) fn find_objects(&mut self) {
        self.object = None;

        let mut sort_clusters = std::mem::take(&mut self.sort_cache);
        sort_clusters.clear();
        for (index, cluster) in self.clusters.iter().enumerate() {
            if cluster.is_invalid() {
                continue;
            }
            sort_clusters.push((cluster.length_total, index));
        }

        // Longer strip chains are stronger motion evidence. The sort is
        // stable, so equal lengths stay in cluster order.
        sort_clusters.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        debug!("ranking {} candidate clusters", sort_clusters.len());

        for &(_, index) in &sort_clusters {
            if self.is_object(index) {
                debug!("cluster {index} selected as this frame's object");
                self.object = Some(index);
                break;
            }
            self.clusters[index].set_invalid(InvalidReason::NotAnObject);
        }

        self.sort_cache = sort_clusters;
    }

    /// The directional-motion test: accept iff the cluster's visible span in
    /// one time slice is offset from its span in the other by a bounded
    /// fraction of the full span, on both sides.
    ///
    /// Writes `bounds1`/`bounds2` into the cluster as a side effect; they
    /// are meaningful only when this returns true.
    pub(crate) fn is_object(&mut self, index: usize) -> bool {
        let head = self.clusters[index].l.strip;
        let bounds1 = self.bounds_in_diff(head, true);
        let bounds2 = self.bounds_in_diff(head, false);
        let cluster = &mut self.clusters[index];
        cluster.bounds1 = bounds1;
        cluster.bounds2 = bounds2;

        // Both time slices must contain at least one strip.
        if cluster.bounds1.is_untouched() || cluster.bounds2.is_untouched() {
            return false;
        }

        // Canonicalise to a left-to-right reading order: the box owning the
        // leftmost strip is bounds1, whichever time slice that was.
        let x_min = cluster.l.pos.x;
        if cluster.bounds1.min.x != x_min {
            std::mem::swap(&mut cluster.bounds1, &mut cluster.bounds2);
        }

        // The leftmost strip must belong to bounds1 ...
        if cluster.bounds1.min.x != x_min {
            return false;
        }

        // ... and the rightmost strip to bounds2.
        let x_max = cluster.r.pos.x;
        if cluster.bounds2.max.x != x_max {
            return false;
        }

        // Each slice must trail the opposite extreme edge by a bounded
        // fraction of the full span. A static blob fails the lower bound;
        // disjoint debris fails the upper.
        let span = x_max - x_min;
        let min_motion = (self.config.min_motion * span as f32) as i32;
        let max_motion = (self.config.max_motion * span as f32) as i32;
        if x_max - cluster.bounds1.max.x < min_motion {
            return false;
        }
        if x_max - cluster.bounds1.max.x > max_motion {
            return false;
        }
        if cluster.bounds2.min.x - x_min < min_motion {
            return false;
        }
        if cluster.bounds2.min.x - x_min > max_motion {
            return false;
        }

        true
    }

    /// Bounding box over the chain's strips present in one difference image
    /// (`newer` selects which slice). Untouched extremes signal that no
    /// member strip carries the flag.
    fn bounds_in_diff(&self, head: StripIndex, newer: bool) -> Bounds {
        let mut result = Bounds::UNTOUCHED;
        for (_, strip) in self.arena.chain(head) {
            let present = if newer { strip.newer } else { strip.older };
            if present {
                result.include(strip.pos);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{chain_cluster, frame};
    use crate::StripClusterDetector;
    use fmo_detect_core::{
        Config, Detector, Dims, InvalidReason, Pos, StripArena, Validity,
    };

    fn detector() -> StripClusterDetector {
        let dims = Dims {
            width: 200,
            height: 100,
        };
        StripClusterDetector::new(Config::default(), fmo_detect_core::PixelFormat::Gray, dims)
    }

    /// Span 0..100, newer slice [0, 60], older slice [50, 100]. With the
    /// default motion fractions (0.25, 0.50) the allowed displacement is
    /// [25, 50]; both sides sit inside it (40 and 50).
    fn passing_specs() -> Vec<(i32, i32, bool, bool)> {
        vec![
            (0, 10, false, true),
            (60, 10, false, true),
            (50, 10, true, false),
            (100, 10, true, false),
        ]
    }

    #[test]
    fn accepts_bounded_offset_time_slices() {
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(&mut arena, &passing_specs(), 10.0);
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, Some(0));
        let c = &det.clusters[0];
        assert_eq!(c.validity(), Validity::Valid);
        // Post-canonicalisation invariants.
        assert_eq!(c.bounds1.min.x, c.l.pos.x);
        assert_eq!(c.bounds2.max.x, c.r.pos.x);
        assert_eq!(c.bounds1.min, Pos::new(0, 10));
        assert_eq!(c.bounds1.max, Pos::new(60, 10));
        assert_eq!(c.bounds2.min, Pos::new(50, 10));
        assert_eq!(c.bounds2.max, Pos::new(100, 10));
    }

    #[test]
    fn rejects_when_displacement_below_minimum() {
        // Newer slice reaches x = 95: trailing displacement 5 < 25.
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, false, true),
                (95, 10, false, true),
                (50, 10, true, false),
                (100, 10, true, false),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, None);
        assert_eq!(
            det.clusters[0].validity(),
            Validity::Invalid(InvalidReason::NotAnObject)
        );
    }

    #[test]
    fn rejects_when_displacement_above_maximum() {
        // Newer slice ends at x = 40: trailing displacement 60 > 50.
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, false, true),
                (40, 10, false, true),
                (50, 10, true, false),
                (100, 10, true, false),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, None);
    }

    #[test]
    fn displacement_bounds_are_inclusive() {
        // Trailing displacement exactly 25 (the minimum), leading
        // displacement exactly 50 (the maximum).
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, false, true),
                (75, 10, false, true),
                (50, 10, true, false),
                (100, 10, true, false),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, Some(0));
    }

    #[test]
    fn rejects_when_one_slice_is_empty() {
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[(0, 10, false, true), (100, 10, false, true)],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, None);
        assert!(det.clusters[0].bounds2.is_untouched() || det.clusters[0].bounds1.is_untouched());
    }

    #[test]
    fn canonicalisation_swaps_reversed_time_slices() {
        // Older slice on the left, newer on the right: the boxes must be
        // swapped into reading order and then accepted.
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, true, false),
                (50, 10, true, false),
                (50, 20, false, true),
                (100, 10, false, true),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, Some(0));
        let c = &det.clusters[0];
        assert_eq!(c.bounds1.min.x, 0);
        assert_eq!(c.bounds2.max.x, 100);
    }

    #[test]
    fn rejects_when_leftmost_strip_is_in_neither_slice() {
        // The leftmost strip carries no difference flag, so neither box
        // starts at the cluster's left edge.
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, false, false),
                (30, 10, false, true),
                (60, 10, false, true),
                (50, 10, true, false),
                (100, 10, true, false),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, None);
    }

    #[test]
    fn rejects_when_rightmost_strip_not_in_the_older_box() {
        // Newer strips cover the whole span, older strips stop short of the
        // right edge: a blob, not directional motion.
        let mut det = detector();
        let mut arena = StripArena::new();
        let cluster = chain_cluster(
            &mut arena,
            &[
                (0, 10, false, true),
                (50, 10, true, false),
                (80, 10, true, false),
                (100, 10, false, true),
            ],
            10.0,
        );
        det.process_frame(frame(arena, vec![cluster]));

        assert_eq!(det.object, None);
    }

    #[test]
    fn selects_first_passer_in_descending_length_order() {
        let mut det = detector();
        let mut arena = StripArena::new();
        // Longer cluster fails (static blob), shorter passes.
        let failing = chain_cluster(
            &mut arena,
            &[(0, 10, true, true), (100, 10, true, true)],
            30.0,
        );
        let passing = chain_cluster(&mut arena, &passing_specs(), 20.0);
        det.process_frame(frame(arena, vec![failing, passing]));

        assert_eq!(det.object, Some(1));
        assert_eq!(
            det.clusters[0].validity(),
            Validity::Invalid(InvalidReason::NotAnObject)
        );
    }

    #[test]
    fn clusters_after_the_winner_keep_their_validity() {
        let mut det = detector();
        let mut arena = StripArena::new();
        let failing = chain_cluster(
            &mut arena,
            &[(0, 10, true, true), (100, 10, true, true)],
            30.0,
        );
        let winner = chain_cluster(&mut arena, &passing_specs(), 20.0);
        // Would also pass, but is never examined.
        let unexamined = chain_cluster(&mut arena, &passing_specs(), 10.0);
        det.process_frame(frame(arena, vec![failing, winner, unexamined]));

        assert_eq!(det.object, Some(1));
        assert_eq!(det.clusters[2].validity(), Validity::Valid);
    }

    #[test]
    fn already_invalid_clusters_are_never_examined() {
        let mut det = detector();
        let mut arena = StripArena::new();
        // Longest candidate, but the builder already discarded it.
        let mut discarded = chain_cluster(&mut arena, &passing_specs(), 50.0);
        discarded.set_invalid(InvalidReason::TooShort);
        let winner = chain_cluster(&mut arena, &passing_specs(), 10.0);
        det.process_frame(frame(arena, vec![discarded, winner]));

        assert_eq!(det.object, Some(1));
        assert_eq!(
            det.clusters[0].validity(),
            Validity::Invalid(InvalidReason::TooShort)
        );
    }

    #[test]
    fn equal_lengths_break_ties_by_cluster_order() {
        let mut det = detector();
        let mut arena = StripArena::new();
        let first = chain_cluster(&mut arena, &passing_specs(), 10.0);
        let second = chain_cluster(&mut arena, &passing_specs(), 10.0);
        det.process_frame(frame(arena, vec![first, second]));

        assert_eq!(det.object, Some(0));
        assert_eq!(det.clusters[1].validity(), Validity::Valid);
    }

    #[test]
    fn empty_frame_selects_nothing() {
        let mut det = detector();
        det.process_frame(frame(StripArena::new(), Vec::new()));
        assert_eq!(det.object, None);
    }
}
