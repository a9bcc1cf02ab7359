//! Node types for the campus graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense node index, stable for the lifetime of a graph.
pub type NodeId = usize;

/// Semantic category of a graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A destination room (office, classroom, lab, ...).
    Room,
    /// A corridor waypoint connecting rooms on one floor.
    Corridor,
    /// A stairwell connecting floors within a building.
    Stairs,
    /// A building entrance.
    Entrance,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Room => "room",
            NodeKind::Corridor => "corridor",
            NodeKind::Stairs => "stairs",
            NodeKind::Entrance => "entrance",
        };
        f.write_str(s)
    }
}

/// A named location in the campus graph.
///
/// Coordinates are planar per-floor positions in meters. The `id` is a dense
/// 0-based index assigned by the builder and valid for the graph's lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Dense node index.
    pub id: NodeId,
    /// Unique lookup code (e.g. "100101").
    pub code: String,
    /// Human-readable name (e.g. "Reception").
    pub name: String,
    /// Building identifier.
    pub building: u32,
    /// Floor number (ground floor is 0).
    pub floor: i32,
    /// X coordinate in meters.
    pub x: f32,
    /// Y coordinate in meters.
    pub y: f32,
    /// Semantic category.
    pub kind: NodeKind,
}

impl Node {
    /// Euclidean distance to another node, ignoring building and floor.
    #[inline]
    pub fn distance(&self, other: &Node) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
