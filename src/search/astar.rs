//! Single-direction A* search.

use log::{debug, trace, warn};

use crate::config::NavConfig;
use crate::core::NodeId;
use crate::error::{NavError, Result};
use crate::graph::CampusGraph;
use crate::route::{self, Route};

use super::heuristic::estimate;
use super::{OpenEntry, RawPath, SearchState};

/// Find a route between two location codes using single-direction A*.
///
/// This is the default entry point. Fails with [`NavError::RoomNotFound`]
/// when either code is unknown and [`NavError::NoPathFound`] when the goal is
/// unreachable from the start.
pub fn find_path(
    graph: &CampusGraph,
    start_code: &str,
    end_code: &str,
    config: &NavConfig,
) -> Result<Route> {
    let start = graph.lookup(start_code)?;
    let goal = graph.lookup(end_code)?;
    let raw = search(graph, start, goal, config)?;
    Ok(route::synthesize(graph, &raw, &config.route))
}

/// A* search over node ids. Returns the raw node/edge path.
pub fn search(
    graph: &CampusGraph,
    start: NodeId,
    goal: NodeId,
    config: &NavConfig,
) -> Result<RawPath> {
    trace!("[AStar] search: start={} goal={}", start, goal);

    let goal_node = graph.node(goal);
    let f0 = estimate(graph.node(start), goal_node, &config.heuristic);
    let mut state = SearchState::seeded(graph.node_count(), start, f0);
    let mut expanded = 0;

    while let Some(OpenEntry { node: current, .. }) = state.open.pop() {
        if state.closed[current] {
            continue;
        }
        if current == goal {
            trace!(
                "[AStar] reached goal: cost={:.2}, expanded={}",
                state.g_score[goal],
                expanded
            );
            return Ok(reconstruct(&state, start, goal, expanded));
        }
        state.closed[current] = true;
        expanded += 1;

        if expanded > config.search.max_expansions {
            warn!(
                "[AStar] expansion budget exceeded ({} nodes), giving up",
                expanded
            );
            return Err(NavError::NoPathFound);
        }

        for edge in graph.neighbors(current) {
            if state.closed[edge.to] {
                continue;
            }
            let tentative = state.g_score[current] + edge.weight;
            if tentative < state.g_score[edge.to] {
                state.came_from[edge.to] = Some((current, *edge));
                state.g_score[edge.to] = tentative;
                let f = tentative + estimate(graph.node(edge.to), goal_node, &config.heuristic);
                state.open.push(OpenEntry {
                    f_score: f,
                    node: edge.to,
                });
            }
        }
    }

    debug!("[AStar] no path after expanding {} nodes", expanded);
    Err(NavError::NoPathFound)
}

/// Walk `came_from` back from the goal to the start.
fn reconstruct(state: &SearchState, start: NodeId, goal: NodeId, expanded: usize) -> RawPath {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut current = goal;

    while let Some((parent, edge)) = state.came_from[current] {
        nodes.push(current);
        edges.push(edge);
        current = parent;
    }
    nodes.push(start);
    nodes.reverse();
    edges.reverse();

    RawPath {
        nodes,
        edges,
        cost: state.g_score[goal],
        expanded,
    }
}
