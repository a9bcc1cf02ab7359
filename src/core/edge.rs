//! Directed weighted edges with travel bearings.

use serde::{Deserialize, Serialize};

use super::math::reverse_bearing;
use super::node::NodeId;

/// A directed connection to another node.
///
/// Edges are stored per source node in the graph's adjacency lists. A physical
/// connection between two nodes is represented by the loader as two directed
/// edges whose bearings differ by 180°; the engine does not enforce this.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination node id.
    pub to: NodeId,
    /// Non-negative distance-like cost.
    pub weight: f32,
    /// Compass bearing of travel in degrees, [0, 360).
    pub bearing: f32,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    pub fn new(to: NodeId, weight: f32, bearing: f32) -> Self {
        Self {
            to,
            weight,
            bearing,
        }
    }

    /// The same physical connection traveled in the opposite direction.
    ///
    /// Keeps the weight and rotates the bearing by 180°. Used when a search
    /// chain stores edges oriented against the direction of travel.
    #[inline]
    pub fn reversed(&self, to: NodeId) -> Self {
        Self {
            to,
            weight: self.weight,
            bearing: reverse_bearing(self.bearing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_flips_bearing() {
        let e = Edge::new(3, 12.5, 90.0);
        let r = e.reversed(7);
        assert_eq!(r.to, 7);
        assert_eq!(r.weight, 12.5);
        assert!((r.bearing - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_reversed_wraps_into_range() {
        let e = Edge::new(0, 1.0, 350.0);
        assert!((e.reversed(1).bearing - 170.0).abs() < 1e-4);
    }
}
