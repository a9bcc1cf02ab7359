//! Demo campus topology.
//!
//! Builds the two-building campus graph: rooms, corridors, stairwells and
//! entrances, connected by the rules below. This is the loader side of the
//! system; the search engines only ever see the finished [`CampusGraph`].
//!
//! Connection rules:
//! - each room links to the nearest corridor on its building and floor
//! - corridors link to stairwells on the same floor within range, and
//!   (outside the central building) to the central corridor with a weight
//!   surcharge
//! - stairwells link to corridors of their building on other floors, with a
//!   fixed per-floor cost and bearing 0 going up / 180 going down
//! - entrances link to the nearest corridor of their building
//!
//! All links are physical connections: two directed edges with bearings 180°
//! apart.

use std::cmp::Ordering;

use crate::core::{math::bearing_between, Node, NodeId, NodeKind};
use crate::graph::{CampusGraph, GraphBuilder};

/// Corridor-to-stairwell links are only made within this distance.
const STAIR_LINK_RANGE: f32 = 50.0;

/// Weight surcharge for hopping onto the central corridor.
const CENTRAL_SURCHARGE: f32 = 20.0;

/// Base cost of entering a stairwell.
const STAIR_BASE_COST: f32 = 5.0;

/// Cost per floor climbed or descended.
const STAIR_FLOOR_COST: f32 = 10.0;

/// Code of the corridor linking the buildings.
const CENTRAL_CODE: &str = "CENTRAL";

#[rustfmt::skip]
const CAMPUS_NODES: &[(&str, &str, u32, i32, f32, f32, NodeKind)] = &[
    // Building 10 - Floor 0
    ("100101", "Reception",        10, 0, 50.0, 50.0, NodeKind::Room),
    ("100102", "Library",          10, 0, 30.0, 50.0, NodeKind::Room),
    ("100103", "Restaurant",       10, 0, 70.0, 50.0, NodeKind::Room),
    ("100104", "Makerspace",       10, 0, 20.0, 50.0, NodeKind::Room),
    ("100105", "Computer Lab",     10, 0, 80.0, 50.0, NodeKind::Room),
    ("100106", "Meeting Room A",   10, 0, 30.0, 30.0, NodeKind::Room),
    ("100107", "Meeting Room B",   10, 0, 70.0, 30.0, NodeKind::Room),
    ("100108", "Auditorium",       10, 0, 50.0, 20.0, NodeKind::Room),
    ("100109", "Student Services", 10, 0, 20.0, 30.0, NodeKind::Room),
    ("100110", "IT Support",       10, 0, 80.0, 30.0, NodeKind::Room),
    // Building 10 - Floor 1
    ("101101", "Classroom 101",    10, 1, 20.0, 20.0, NodeKind::Room),
    ("101102", "Classroom 102",    10, 1, 30.0, 20.0, NodeKind::Room),
    ("101103", "Classroom 103",    10, 1, 50.0, 20.0, NodeKind::Room),
    ("101140", "Lecture Hall 140", 10, 1, 80.0, 20.0, NodeKind::Room),
    ("101105", "Group Room 1",     10, 1, 20.0, 10.0, NodeKind::Room),
    ("101106", "Group Room 2",     10, 1, 30.0, 10.0, NodeKind::Room),
    ("101107", "Group Room 3",     10, 1, 50.0, 10.0, NodeKind::Room),
    ("101108", "Group Room 4",     10, 1, 70.0, 10.0, NodeKind::Room),
    ("101109", "Student Kitchen",  10, 1, 80.0, 10.0, NodeKind::Room),
    ("101110", "Study Area",       10, 1, 70.0, 20.0, NodeKind::Room),
    // Building 10 - Floor 2
    ("102101", "IT Office 1",      10, 2, 20.0,  5.0, NodeKind::Room),
    ("102102", "IT Office 2",      10, 2, 30.0,  5.0, NodeKind::Room),
    ("102103", "IT Office 3",      10, 2, 50.0,  5.0, NodeKind::Room),
    ("102104", "IT Office 4",      10, 2, 70.0,  5.0, NodeKind::Room),
    ("102105", "Server Room",      10, 2, 50.0,  0.0, NodeKind::Room),
    // Building 4 - Floor 0
    ("40101", "Room 4013",         4, 0,  5.0, 20.0, NodeKind::Room),
    ("40102", "Study Area",        4, 0, 10.0, 50.0, NodeKind::Room),
    ("40103", "Group Room 1",      4, 0, 10.0, 30.0, NodeKind::Room),
    ("40104", "Group Room 2",      4, 0, 10.0, 20.0, NodeKind::Room),
    ("40105", "Group Room 3",      4, 0,  5.0, 30.0, NodeKind::Room),
    ("40106", "Lab Room A",        4, 0,  0.0, 30.0, NodeKind::Room),
    ("40107", "Lab Room B",        4, 0,  0.0, 20.0, NodeKind::Room),
    ("40108", "Student Lounge",    4, 0,  5.0, 10.0, NodeKind::Room),
    ("40109", "Storage",           4, 0,  0.0, 10.0, NodeKind::Room),
    ("40110", "Copy Room",         4, 0, 10.0, 10.0, NodeKind::Room),
    // Building 4 - Floor 1
    ("41101", "Research Office 1", 4, 1,  5.0, 20.0, NodeKind::Room),
    ("41102", "Research Office 2", 4, 1, 10.0, 20.0, NodeKind::Room),
    ("41103", "Research Office 3", 4, 1,  5.0, 30.0, NodeKind::Room),
    ("41104", "Research Office 4", 4, 1, 10.0, 30.0, NodeKind::Room),
    ("41105", "Conference Room",   4, 1,  0.0, 30.0, NodeKind::Room),
    // Corridors
    ("H10-C0", "Main Corridor Hus 10 Floor 0", 10, 0, 50.0, 40.0, NodeKind::Corridor),
    ("H10-C1", "Main Corridor Hus 10 Floor 1", 10, 1, 50.0, 15.0, NodeKind::Corridor),
    ("H10-C2", "Main Corridor Hus 10 Floor 2", 10, 2, 50.0,  2.5, NodeKind::Corridor),
    ("H4-C0",  "Main Corridor Hus 4 Floor 0",   4, 0, 10.0, 30.0, NodeKind::Corridor),
    ("H4-C1",  "Main Corridor Hus 4 Floor 1",   4, 1, 10.0, 30.0, NodeKind::Corridor),
    ("CENTRAL", "Central Corridor",             0, 0, 30.0, 50.0, NodeKind::Corridor),
    // Stairs
    ("H10-S1", "Main Stairwell Hus 10",  10, 0, 60.0, 40.0, NodeKind::Stairs),
    ("H10-S2", "North Stairwell Hus 10", 10, 0, 50.0, 10.0, NodeKind::Stairs),
    ("H4-S1",  "Main Stairwell Hus 4",    4, 0, 15.0, 30.0, NodeKind::Stairs),
    // Entrances
    ("H10-E1", "Main Entrance Hus 10",   10, 0, 50.0, 80.0, NodeKind::Entrance),
    ("H10-E2", "Bus Entrance Hus 10",    10, 0, 80.0, 70.0, NodeKind::Entrance),
    ("H10-E3", "Garden Entrance Hus 10", 10, 0, 20.0, 70.0, NodeKind::Entrance),
    ("H4-E1",  "Main Entrance Hus 4",     4, 0, 10.0, 70.0, NodeKind::Entrance),
];

/// Build the demo campus graph.
pub fn demo_campus() -> CampusGraph {
    let mut builder = GraphBuilder::new();
    for &(code, name, building, floor, x, y, kind) in CAMPUS_NODES {
        builder.add_node(code, name, building, floor, x, y, kind);
    }
    generate_connections(&mut builder);
    builder.build()
}

fn generate_connections(builder: &mut GraphBuilder) {
    for id in 0..builder.node_count() {
        match builder.nodes()[id].kind {
            NodeKind::Room => {
                if let Some((corridor, weight, bearing)) =
                    nearest_corridor(builder.nodes(), id, true)
                {
                    builder.connect(id, corridor, weight, bearing);
                }
            }
            NodeKind::Corridor => connect_corridor(builder, id),
            NodeKind::Stairs => connect_stairs(builder, id),
            NodeKind::Entrance => {
                if let Some((corridor, weight, bearing)) =
                    nearest_corridor(builder.nodes(), id, false)
                {
                    builder.connect(id, corridor, weight, bearing);
                }
            }
        }
    }
}

/// Nearest corridor in the same building, optionally restricted to the same
/// floor. Returns `(id, distance, bearing)`.
fn nearest_corridor(nodes: &[Node], from: NodeId, same_floor: bool) -> Option<(NodeId, f32, f32)> {
    let origin = &nodes[from];
    nodes
        .iter()
        .filter(|n| {
            n.kind == NodeKind::Corridor
                && n.building == origin.building
                && (!same_floor || n.floor == origin.floor)
        })
        .min_by(|a, b| {
            origin
                .distance(a)
                .partial_cmp(&origin.distance(b))
                .unwrap_or(Ordering::Equal)
        })
        .map(|corridor| {
            (
                corridor.id,
                origin.distance(corridor),
                bearing_between(origin.x, origin.y, corridor.x, corridor.y),
            )
        })
}

fn connect_corridor(builder: &mut GraphBuilder, id: NodeId) {
    let links: Vec<(NodeId, f32, f32)> = {
        let nodes = builder.nodes();
        let corridor = &nodes[id];
        let mut links = Vec::new();

        // Stairwells on the same floor, within range.
        for stairs in nodes.iter().filter(|n| {
            n.kind == NodeKind::Stairs
                && n.building == corridor.building
                && n.floor == corridor.floor
        }) {
            let distance = corridor.distance(stairs);
            if distance < STAIR_LINK_RANGE {
                links.push((
                    stairs.id,
                    distance,
                    bearing_between(corridor.x, corridor.y, stairs.x, stairs.y),
                ));
            }
        }

        // Central corridor, same floor only.
        if corridor.building != 0 {
            if let Some(central) = nodes
                .iter()
                .find(|n| n.code == CENTRAL_CODE && n.floor == corridor.floor)
            {
                links.push((
                    central.id,
                    corridor.distance(central) + CENTRAL_SURCHARGE,
                    bearing_between(corridor.x, corridor.y, central.x, central.y),
                ));
            }
        }

        links
    };

    for (to, weight, bearing) in links {
        builder.connect(id, to, weight, bearing);
    }
}

fn connect_stairs(builder: &mut GraphBuilder, id: NodeId) {
    let links: Vec<(NodeId, f32, f32)> = {
        let nodes = builder.nodes();
        let stairs = &nodes[id];
        nodes
            .iter()
            .filter(|n| {
                n.kind == NodeKind::Corridor
                    && n.building == stairs.building
                    && n.floor != stairs.floor
            })
            .map(|corridor| {
                let floor_diff = (stairs.floor - corridor.floor).unsigned_abs();
                let weight = STAIR_BASE_COST + STAIR_FLOOR_COST * floor_diff as f32;
                let bearing = if corridor.floor > stairs.floor { 0.0 } else { 180.0 };
                (corridor.id, weight, bearing)
            })
            .collect()
    };

    for (to, weight, bearing) in links {
        builder.connect(id, to, weight, bearing);
    }
}
