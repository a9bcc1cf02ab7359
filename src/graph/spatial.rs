//! Nearest-node spatial index.
//!
//! Optional capability layered on top of the graph for "which node is closest
//! to this position" queries. The search engines never use it.

use kiddo::{KdTree, SquaredEuclidean};

use crate::core::{NodeId, NodeKind};

use super::CampusGraph;

/// K-d tree over node coordinates.
pub struct SpatialIndex {
    tree: KdTree<f32, 2>,
    len: usize,
}

impl SpatialIndex {
    /// Build an index over every node of the graph.
    pub fn build(graph: &CampusGraph) -> Self {
        let mut tree: KdTree<f32, 2> = KdTree::new();
        for node in graph.nodes() {
            tree.add(&[node.x, node.y], node.id as u64);
        }
        Self {
            tree,
            len: graph.node_count(),
        }
    }

    /// The node closest to `(x, y)`, or `None` on an empty graph.
    ///
    /// Coordinates are planar; building and floor are ignored.
    pub fn nearest(&self, x: f32, y: f32) -> Option<NodeId> {
        if self.len == 0 {
            return None;
        }
        let hit = self.tree.nearest_one::<SquaredEuclidean>(&[x, y]);
        Some(hit.item as NodeId)
    }

    /// The closest node of a given kind, searching the `k` nearest candidates.
    pub fn nearest_of_kind(
        &self,
        graph: &CampusGraph,
        x: f32,
        y: f32,
        kind: NodeKind,
    ) -> Option<NodeId> {
        if self.len == 0 {
            return None;
        }
        let candidates = self.tree.nearest_n::<SquaredEuclidean>(&[x, y], self.len);
        candidates
            .into_iter()
            .map(|hit| hit.item as NodeId)
            .find(|&id| graph.node(id).kind == kind)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no nodes are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
