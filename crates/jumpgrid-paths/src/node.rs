use std::cmp::Ordering;
use std::collections::BinaryHeap;

use jumpgrid_core::{Point, Range};

// ---------------------------------------------------------------------------
// Search-tree node
// ---------------------------------------------------------------------------

/// A node of the search tree, stored in an arena owned by one search.
///
/// `parent` is an arena index pointing towards the start node, so the tree
/// only ever links child to parent. Equality looks at `pos` alone.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: Option<usize>,
}

impl Node {
    pub(crate) fn new(pos: Point, g: f64, h: f64, parent: Option<usize>) -> Self {
        Self { pos, g, h, parent }
    }

    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

// ---------------------------------------------------------------------------
// Frontier (open set)
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smallest `f` first, then smallest `h`, then first pushed.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    idx: usize,
    f: f64,
    h: f64,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the best entry first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Min-priority queue of arena indices.
///
/// The same position may be queued several times; stale copies are skipped
/// by the caller at pop time through the [`VisitedSet`].
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize, node: &Node) {
        self.heap.push(NodeRef {
            idx,
            f: node.f(),
            h: node.h,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|r| r.idx)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// VisitedSet (closed set)
// ---------------------------------------------------------------------------

/// Set of finalized positions, keyed by flat grid index.
pub(crate) struct VisitedSet {
    bounds: Range,
    seen: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(bounds: Range) -> Self {
        Self {
            bounds,
            seen: vec![false; bounds.len()],
            len: 0,
        }
    }

    /// Insert `p`, returning `false` if it was already present or lies
    /// outside the bounds.
    pub(crate) fn insert(&mut self, p: Point) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        if self.seen[i] {
            return false;
        }
        self.seen[i] = true;
        self.len += 1;
        true
    }

    pub(crate) fn contains(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.seen[i])
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(open: &mut Frontier, nodes: &mut Vec<Node>, pos: Point, g: f64, h: f64) {
        let node = Node::new(pos, g, h, None);
        open.push(nodes.len(), &node);
        nodes.push(node);
    }

    #[test]
    fn nodes_compare_by_position() {
        let a = Node::new(Point::rc(1, 2), 0.0, 5.0, None);
        let b = Node::new(Point::rc(1, 2), 3.0, 1.0, Some(0));
        let c = Node::new(Point::rc(2, 1), 0.0, 5.0, None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn frontier_pops_lowest_f() {
        let mut open = Frontier::default();
        let mut nodes = Vec::new();
        push(&mut open, &mut nodes, Point::rc(0, 0), 4.0, 4.0);
        push(&mut open, &mut nodes, Point::rc(0, 1), 1.0, 2.0);
        push(&mut open, &mut nodes, Point::rc(0, 2), 2.0, 3.0);
        assert_eq!(open.len(), 3);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn equal_f_prefers_smaller_h() {
        let mut open = Frontier::default();
        let mut nodes = Vec::new();
        push(&mut open, &mut nodes, Point::rc(0, 0), 1.0, 5.0);
        push(&mut open, &mut nodes, Point::rc(0, 1), 4.0, 2.0);
        push(&mut open, &mut nodes, Point::rc(0, 2), 6.0, 0.0);
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
    }

    #[test]
    fn full_ties_pop_in_push_order() {
        let mut open = Frontier::default();
        let mut nodes = Vec::new();
        for col in 0..5 {
            push(&mut open, &mut nodes, Point::rc(0, col), 2.0, 1.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn duplicate_positions_coexist() {
        let mut open = Frontier::default();
        let mut nodes = Vec::new();
        push(&mut open, &mut nodes, Point::rc(3, 3), 5.0, 1.0);
        push(&mut open, &mut nodes, Point::rc(3, 3), 2.0, 1.0);
        assert_eq!(open.len(), 2);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
    }

    #[test]
    fn visited_set_keys_on_position() {
        let mut closed = VisitedSet::new(Range::new(0, 0, 4, 4));
        assert!(!closed.contains(Point::rc(1, 1)));
        assert!(closed.insert(Point::rc(1, 1)));
        assert!(!closed.insert(Point::rc(1, 1)));
        assert!(closed.contains(Point::rc(1, 1)));
        assert!(!closed.insert(Point::rc(9, 9)));
        assert!(!closed.contains(Point::rc(-1, 0)));
        assert_eq!(closed.len(), 1);
    }
}
