use std::collections::BinaryHeap;

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first, then smallest `h`, then the earliest push.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u32,
    pub(crate) h: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open list with lazy deletion: callers push a node again when
/// its key improves and skip stale entries on pop.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, f: u32, h: u32) {
        self.heap.push(NodeRef {
            idx,
            f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }
}
