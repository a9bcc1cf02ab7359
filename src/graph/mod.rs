//! Immutable campus graph with code-based lookup.
//!
//! The graph is an arena of nodes addressed by dense integer ids, with edges
//! stored as adjacency lists indexed by id. It is built once through
//! [`GraphBuilder`] and read-only afterwards, so any number of concurrent
//! searches can share one instance.

pub mod spatial;

pub use spatial::SpatialIndex;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{math::normalize_bearing, Edge, Node, NodeId, NodeKind};
use crate::error::{NavError, Result};

/// Immutable directed weighted graph of campus locations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampusGraph {
    nodes: Vec<Node>,
    /// adjacency[id] = outgoing edges of node `id`, in insertion order.
    adjacency: Vec<Vec<Edge>>,
    lookup: HashMap<String, NodeId>,
}

impl CampusGraph {
    /// Resolve a location code to its node id.
    ///
    /// A missing code is an error, never a default.
    pub fn lookup(&self, code: &str) -> Result<NodeId> {
        self.lookup
            .get(code)
            .copied()
            .ok_or_else(|| NavError::RoomNotFound(code.to_string()))
    }

    /// Node data for a valid id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Outgoing edges of a node, empty if it has none.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// Loader-facing mutation API. Finalize with [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
    lookup: HashMap<String, NodeId>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its dense id.
    ///
    /// Codes must be unique; a duplicate code is a loader bug.
    pub fn add_node(
        &mut self,
        code: &str,
        name: &str,
        building: u32,
        floor: i32,
        x: f32,
        y: f32,
        kind: NodeKind,
    ) -> NodeId {
        debug_assert!(
            !self.lookup.contains_key(code),
            "duplicate node code: {}",
            code
        );
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            code: code.to_string(),
            name: name.to_string(),
            building,
            floor,
            x,
            y,
            kind,
        });
        self.adjacency.push(Vec::new());
        self.lookup.insert(code.to_string(), id);
        id
    }

    /// Add a single directed edge.
    ///
    /// The bearing is normalized to [0, 360); negative weights are a loader
    /// bug.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f32, bearing: f32) {
        debug_assert!(from < self.nodes.len() && to < self.nodes.len());
        debug_assert!(weight >= 0.0, "negative edge weight: {}", weight);
        self.adjacency[from].push(Edge::new(to, weight, normalize_bearing(bearing)));
    }

    /// Add a physical connection as two directed edges with bearings 180°
    /// apart.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f32, bearing_a_to_b: f32) {
        self.add_edge(a, b, weight, bearing_a_to_b);
        self.add_edge(b, a, weight, bearing_a_to_b + 180.0);
    }

    /// Number of nodes added so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read access to nodes added so far, for loaders that connect by
    /// scanning what they already placed.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Finalize into an immutable graph.
    pub fn build(self) -> CampusGraph {
        CampusGraph {
            nodes: self.nodes,
            adjacency: self.adjacency,
            lookup: self.lookup,
        }
    }
}
