use log::error;

use crate::geometry::{HalfDims, Pos};

/// Arena index of a strip.
pub type StripIndex = u32;

/// One difference-image strip: an axis-aligned pixel block flagged by its
/// presence in the two time-separated difference images.
#[derive(Clone, Copy, Debug)]
pub struct Strip {
    pub pos: Pos,
    pub half: HalfDims,
    /// Present in the older difference image.
    pub older: bool,
    /// Present in the newer difference image.
    pub newer: bool,
    /// Arena index of the next strip in the same cluster chain, or
    /// [`Strip::END`].
    pub next: StripIndex,
}

impl Strip {
    /// Chain terminator for [`next`](Strip::next).
    pub const END: StripIndex = StripIndex::MAX;
}

/// Frame-scoped, index-addressed strip storage.
///
/// Chains are linked by arena index, never by reference, so a whole frame
/// can be dropped or rebuilt without dangling links. The arena is filled by
/// the upstream strip builder ([`push`] + [`link`]) and is read-only once
/// handed to a detector.
///
/// [`push`]: StripArena::push
/// [`link`]: StripArena::link
#[derive(Clone, Debug, Default)]
pub struct StripArena {
    strips: Vec<Strip>,
}

impl StripArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strips: Vec::with_capacity(capacity),
        }
    }

    /// Append a strip and return its index.
    pub fn push(&mut self, strip: Strip) -> StripIndex {
        let index = self.strips.len() as StripIndex;
        self.strips.push(strip);
        index
    }

    /// Point `from`'s chain link at `to`. Builder-facing.
    pub fn link(&mut self, from: StripIndex, to: StripIndex) {
        self.strips[from as usize].next = to;
    }

    #[inline]
    pub fn get(&self, index: StripIndex) -> Option<&Strip> {
        self.strips.get(index as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Iterate a chain from `start` to [`Strip::END`].
    ///
    /// Chains are acyclic by the upstream contract. Traversal is still
    /// bounded by the arena length, and an overrun or a dangling link is
    /// reported as an internal-consistency fault instead of looping forever.
    pub fn chain(&self, start: StripIndex) -> ChainIter<'_> {
        ChainIter {
            arena: self,
            next: start,
            remaining: self.strips.len(),
        }
    }
}

/// Iterator over one strip chain, yielding `(index, &strip)`.
pub struct ChainIter<'a> {
    arena: &'a StripArena,
    next: StripIndex,
    remaining: usize,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (StripIndex, &'a Strip);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == Strip::END {
            return None;
        }
        if self.remaining == 0 {
            error!("strip chain longer than the arena, dropping the tail (cyclic link?)");
            return None;
        }
        self.remaining -= 1;
        let index = self.next;
        let Some(strip) = self.arena.get(index) else {
            error!("strip chain references index {index} outside the arena");
            return None;
        };
        self.next = strip.next;
        Some((index, strip))
    }
}
