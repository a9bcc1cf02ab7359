//! Admissible-estimate function guiding the search.

use crate::config::HeuristicSettings;
use crate::core::{Node, NodeKind};

/// Estimated remaining cost from `from` to `to`.
///
/// Straight-line distance plus topological penalties: crossing buildings,
/// changing floors, and starting from inside a room. The room penalty looks
/// only at the source node, so the estimate is asymmetric and
/// `estimate(a, a)` is nonzero when `a` is a room; callers must not assume
/// the estimate vanishes at the goal.
#[inline]
pub fn estimate(from: &Node, to: &Node, settings: &HeuristicSettings) -> f32 {
    let spatial = from.distance(to);
    let building = if from.building != to.building {
        settings.building_penalty
    } else {
        0.0
    };
    let floor = settings.floor_penalty * (from.floor - to.floor).unsigned_abs() as f32;
    let room = if from.kind == NodeKind::Room {
        settings.room_penalty
    } else {
        0.0
    };
    spatial + building + floor + room
}
