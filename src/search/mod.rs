//! Shortest-path search engines.
//!
//! Two engines operate read-only on a [`CampusGraph`]:
//!
//! - **Single-direction A\***: [`astar::find_path`], the default entry point
//! - **Bidirectional A\***: [`bidirectional::find_path_bidirectional`], two
//!   frontiers stitched at a meeting node
//!
//! Both allocate all mutable state per call, so any number of searches can
//! run concurrently against one shared graph. For a fixed graph and endpoint
//! pair the result is deterministic: the open queue orders entries by
//! `(f_score, node_id)`, so equal-cost ties always break toward the lower
//! node id.

pub mod astar;
pub mod bidirectional;
pub mod heuristic;

pub use astar::find_path;
pub use bidirectional::find_path_bidirectional;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{Edge, NodeId};

/// Open-queue entry ordered by `(f_score, node_id)`.
///
/// `BinaryHeap` is a max-heap, so both comparisons are reversed: the pop
/// yields the lowest f-score, and among equal f-scores the lowest node id.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub f_score: f32,
    pub node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.node == other.node
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-invocation mutable search state, never shared across calls.
pub(crate) struct SearchState {
    pub open: BinaryHeap<OpenEntry>,
    /// Best known cost from the search origin, `INFINITY` when unseen.
    pub g_score: Vec<f32>,
    /// `(parent, edge traversed parent -> node)` for each improved node.
    pub came_from: Vec<Option<(NodeId, Edge)>>,
    /// Finalized nodes.
    pub closed: Vec<bool>,
}

impl SearchState {
    /// State seeded with an origin node and its initial f-score.
    pub fn seeded(node_count: usize, origin: NodeId, f0: f32) -> Self {
        let mut state = Self {
            open: BinaryHeap::new(),
            g_score: vec![f32::INFINITY; node_count],
            came_from: vec![None; node_count],
            closed: vec![false; node_count],
        };
        state.g_score[origin] = 0.0;
        state.open.push(OpenEntry {
            f_score: f0,
            node: origin,
        });
        state
    }
}

/// Raw search output: the node path, the traversed edges (one per hop), the
/// total cost, and how many nodes were expanded.
#[derive(Clone, Debug)]
pub struct RawPath {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    pub cost: f32,
    pub expanded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_entry_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f_score: 5.0, node: 1 });
        heap.push(OpenEntry { f_score: 2.0, node: 9 });
        heap.push(OpenEntry { f_score: 3.0, node: 0 });
        assert_eq!(heap.pop().unwrap().node, 9);
        assert_eq!(heap.pop().unwrap().node, 0);
        assert_eq!(heap.pop().unwrap().node, 1);
    }

    #[test]
    fn test_open_entry_ties_break_on_node_id() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f_score: 1.0, node: 7 });
        heap.push(OpenEntry { f_score: 1.0, node: 2 });
        heap.push(OpenEntry { f_score: 1.0, node: 4 });
        assert_eq!(heap.pop().unwrap().node, 2);
        assert_eq!(heap.pop().unwrap().node, 4);
        assert_eq!(heap.pop().unwrap().node, 7);
    }
}
