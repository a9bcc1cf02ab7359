//! Route synthesis: turn classification and navigation instructions.
//!
//! Takes the raw node/edge path produced by a search engine and emits the
//! final [`Route`]: one [`RouteStep`] per traversed edge with a turn
//! direction, human-readable instruction, and distance/time estimates.

use serde::{Deserialize, Serialize};

use crate::config::RouteSettings;
use crate::core::{math::bearing_delta, Node, NodeKind};
use crate::graph::CampusGraph;
use crate::search::RawPath;

/// Direction of a turn relative to the previous step's bearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    Straight,
    Left,
    Right,
    UTurn,
}

/// One turn-by-turn navigation step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteStep {
    /// 1-based step number.
    pub step: u32,
    /// Node this step leaves from.
    pub from: Node,
    /// Node this step arrives at.
    pub to: Node,
    /// Rounded step length in distance units.
    pub distance: u32,
    /// Compass bearing of travel in degrees, [0, 360).
    pub bearing: f32,
    /// Turn relative to the previous step.
    pub turn_direction: TurnDirection,
    /// Human-readable instruction.
    pub instruction: String,
    /// Estimated duration in seconds, at least the configured floor.
    pub time: u32,
}

/// A complete route between two locations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub start_room: Node,
    pub end_room: Node,
    /// Rounded sum of the raw edge weights.
    pub total_distance: u32,
    /// Sum of the already-rounded per-step times.
    pub total_time: u32,
    pub steps: Vec<RouteStep>,
}

/// Classify the turn from `previous` bearing to `current` bearing.
///
/// The first step of a route has no predecessor and is classified against an
/// implicit previous bearing of 0°.
pub fn classify_turn(previous: f32, current: f32) -> TurnDirection {
    let delta = bearing_delta(previous, current);
    if !(30.0..=330.0).contains(&delta) {
        TurnDirection::Straight
    } else if delta <= 150.0 {
        TurnDirection::Right
    } else if delta >= 210.0 {
        TurnDirection::Left
    } else {
        TurnDirection::UTurn
    }
}

/// Instruction text for one step.
///
/// Stairs destinations override the turn phrasing with an up/down direction;
/// otherwise the turn action is combined with a destination clause chosen by
/// the destination's category.
pub fn instruction_text(from: &Node, to: &Node, turn: TurnDirection) -> String {
    if to.kind == NodeKind::Stairs {
        return if to.floor > from.floor {
            "Take stairs up".to_string()
        } else if to.floor < from.floor {
            "Take stairs down".to_string()
        } else {
            "Take stairs".to_string()
        };
    }

    let action = match turn {
        TurnDirection::Straight => "Continue straight",
        TurnDirection::Left => "Turn left",
        TurnDirection::Right => "Turn right",
        TurnDirection::UTurn => "Turn around",
    };

    match to.kind {
        NodeKind::Room | NodeKind::Entrance => format!("{} to {}", action, to.name),
        NodeKind::Corridor => format!("{} along corridor", action),
        _ => format!("{} toward {}", action, to.name),
    }
}

/// Build the final route from a raw search path.
pub fn synthesize(graph: &CampusGraph, raw: &RawPath, settings: &RouteSettings) -> Route {
    let mut steps = Vec::with_capacity(raw.edges.len());
    let mut total_weight = 0.0f32;
    let mut total_time = 0u32;

    for (i, edge) in raw.edges.iter().enumerate() {
        let from = graph.node(raw.nodes[i]);
        let to = graph.node(raw.nodes[i + 1]);
        let previous_bearing = if i > 0 { raw.edges[i - 1].bearing } else { 0.0 };
        let turn = classify_turn(previous_bearing, edge.bearing);
        let seconds = (edge.weight / settings.walking_speed).round() as u32;
        let time = seconds.max(settings.min_step_time);

        steps.push(RouteStep {
            step: (i + 1) as u32,
            from: from.clone(),
            to: to.clone(),
            distance: edge.weight.round() as u32,
            bearing: edge.bearing,
            turn_direction: turn,
            instruction: instruction_text(from, to, turn),
            time,
        });

        total_weight += edge.weight;
        total_time += time;
    }

    let first = raw.nodes.first().copied().unwrap_or(0);
    let last = raw.nodes.last().copied().unwrap_or(first);

    Route {
        start_room: graph.node(first).clone(),
        end_room: graph.node(last).clone(),
        total_distance: total_weight.round() as u32,
        total_time,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;
    use crate::core::NodeKind;
    use crate::graph::GraphBuilder;
    use crate::search::astar;

    #[test]
    fn test_classify_turn_buckets() {
        use TurnDirection::*;
        assert_eq!(classify_turn(0.0, 0.0), Straight);
        assert_eq!(classify_turn(0.0, 29.9), Straight);
        assert_eq!(classify_turn(0.0, 330.1), Straight);
        assert_eq!(classify_turn(0.0, 30.0), Right);
        assert_eq!(classify_turn(0.0, 90.0), Right);
        assert_eq!(classify_turn(0.0, 150.0), Right);
        assert_eq!(classify_turn(0.0, 210.0), Left);
        assert_eq!(classify_turn(0.0, 270.0), Left);
        assert_eq!(classify_turn(0.0, 330.0), Left);
        assert_eq!(classify_turn(0.0, 150.1), UTurn);
        assert_eq!(classify_turn(0.0, 180.0), UTurn);
        assert_eq!(classify_turn(0.0, 209.9), UTurn);
    }

    #[test]
    fn test_classify_turn_is_relative() {
        // 350 -> 20 wraps to a 30° clockwise change.
        assert_eq!(classify_turn(350.0, 20.0), TurnDirection::Right);
        assert_eq!(classify_turn(90.0, 85.0), TurnDirection::Straight);
        assert_eq!(classify_turn(90.0, 270.0), TurnDirection::UTurn);
    }

    fn node(kind: NodeKind, floor: i32, name: &str) -> Node {
        Node {
            id: 0,
            code: String::new(),
            name: name.to_string(),
            building: 1,
            floor,
            x: 0.0,
            y: 0.0,
            kind,
        }
    }

    #[test]
    fn test_stairs_override_turn_phrasing() {
        let corridor = node(NodeKind::Corridor, 0, "Corridor");
        let stairs_up = node(NodeKind::Stairs, 1, "Stairwell");
        let stairs_down = node(NodeKind::Stairs, -1, "Stairwell");
        let stairs_flat = node(NodeKind::Stairs, 0, "Stairwell");
        assert_eq!(
            instruction_text(&corridor, &stairs_up, TurnDirection::Left),
            "Take stairs up"
        );
        assert_eq!(
            instruction_text(&corridor, &stairs_down, TurnDirection::Right),
            "Take stairs down"
        );
        assert_eq!(
            instruction_text(&corridor, &stairs_flat, TurnDirection::Straight),
            "Take stairs"
        );
    }

    #[test]
    fn test_destination_clauses() {
        let corridor = node(NodeKind::Corridor, 0, "Corridor");
        let room = node(NodeKind::Room, 0, "Library");
        let entrance = node(NodeKind::Entrance, 0, "Main Entrance");
        assert_eq!(
            instruction_text(&corridor, &room, TurnDirection::Right),
            "Turn right to Library"
        );
        assert_eq!(
            instruction_text(&room, &corridor, TurnDirection::Straight),
            "Continue straight along corridor"
        );
        assert_eq!(
            instruction_text(&corridor, &entrance, TurnDirection::UTurn),
            "Turn around to Main Entrance"
        );
    }

    /// Three short hops: rounding happens per step, then the totals differ
    /// from naive recomputation.
    #[test]
    fn test_time_is_sum_of_rounded_steps() {
        let mut b = GraphBuilder::new();
        let n0 = b.add_node("N0", "A", 1, 0, 0.0, 0.0, NodeKind::Corridor);
        let n1 = b.add_node("N1", "B", 1, 0, 1.6, 0.0, NodeKind::Corridor);
        let n2 = b.add_node("N2", "C", 1, 0, 3.2, 0.0, NodeKind::Corridor);
        b.connect(n0, n1, 1.6, 90.0);
        b.connect(n1, n2, 1.6, 90.0);
        let g = b.build();

        let config = NavConfig::default();
        let raw = astar::search(&g, 0, 2, &config).unwrap();
        let route = synthesize(&g, &raw, &config.route);

        // Each hop: round(1.6 / 1.4) = 1, floored to 3 seconds.
        assert_eq!(route.steps.len(), 2);
        for step in &route.steps {
            assert_eq!(step.time, 3);
            assert_eq!(step.distance, 2);
        }
        assert_eq!(route.total_time, 6);
        // Total distance rounds the raw sum, not the rounded steps.
        assert_eq!(route.total_distance, 3);
    }

    #[test]
    fn test_first_step_classified_against_zero_bearing() {
        let mut b = GraphBuilder::new();
        let n0 = b.add_node("N0", "A", 1, 0, 0.0, 0.0, NodeKind::Corridor);
        let n1 = b.add_node("N1", "B", 1, 0, 0.0, 10.0, NodeKind::Corridor);
        // Travel due north: bearing 0, equal to the implicit previous bearing.
        b.connect(n0, n1, 10.0, 0.0);
        let g = b.build();

        let config = NavConfig::default();
        let raw = astar::search(&g, 0, 1, &config).unwrap();
        let route = synthesize(&g, &raw, &config.route);
        assert_eq!(route.steps[0].turn_direction, TurnDirection::Straight);

        // And a first hop due east classifies as a right turn, not straight.
        let mut b = GraphBuilder::new();
        let n0 = b.add_node("N0", "A", 1, 0, 0.0, 0.0, NodeKind::Corridor);
        let n1 = b.add_node("N1", "B", 1, 0, 10.0, 0.0, NodeKind::Corridor);
        b.connect(n0, n1, 10.0, 90.0);
        let g = b.build();
        let raw = astar::search(&g, 0, 1, &config).unwrap();
        let route = synthesize(&g, &raw, &config.route);
        assert_eq!(route.steps[0].turn_direction, TurnDirection::Right);
    }

    #[test]
    fn test_trivial_path_has_no_steps() {
        let mut b = GraphBuilder::new();
        b.add_node("N0", "A", 1, 0, 0.0, 0.0, NodeKind::Room);
        let g = b.build();
        let config = NavConfig::default();
        let raw = astar::search(&g, 0, 0, &config).unwrap();
        let route = synthesize(&g, &raw, &config.route);
        assert!(route.steps.is_empty());
        assert_eq!(route.total_distance, 0);
        assert_eq!(route.total_time, 0);
        assert_eq!(route.start_room.code, route.end_room.code);
    }
}
