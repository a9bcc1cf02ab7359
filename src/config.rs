//! Configuration for the navigation engine.
//!
//! All sections have sensible defaults; a TOML file can override any subset:
//!
//! ```toml
//! [heuristic]
//! building_penalty = 50.0
//!
//! [search]
//! max_expansions = 100000
//!
//! [route]
//! walking_speed = 1.4
//! ```

use crate::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavConfig {
    /// Heuristic penalty weights.
    #[serde(default)]
    pub heuristic: HeuristicSettings,

    /// Search engine limits.
    #[serde(default)]
    pub search: SearchSettings,

    /// Route synthesis parameters.
    #[serde(default)]
    pub route: RouteSettings,
}

/// Penalty weights added to the straight-line distance estimate.
///
/// The penalties bias search toward topologically cheap routes: staying in
/// the same building, on the same floor, and out of rooms.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeuristicSettings {
    /// Added when source and target are in different buildings.
    #[serde(default = "default_building_penalty")]
    pub building_penalty: f32,

    /// Added per floor of vertical separation.
    #[serde(default = "default_floor_penalty")]
    pub floor_penalty: f32,

    /// Added when the source node is a room.
    #[serde(default = "default_room_penalty")]
    pub room_penalty: f32,
}

/// Search engine limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Maximum node expansions before a search gives up with no path.
    /// Applied per direction in the bidirectional engine.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

/// Route synthesis parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSettings {
    /// Average walking speed in distance units per second.
    #[serde(default = "default_walking_speed")]
    pub walking_speed: f32,

    /// Floor for per-step duration in seconds, avoids degenerate times on
    /// very short hops.
    #[serde(default = "default_min_step_time")]
    pub min_step_time: u32,
}

fn default_building_penalty() -> f32 {
    50.0
}
fn default_floor_penalty() -> f32 {
    15.0
}
fn default_room_penalty() -> f32 {
    5.0
}
fn default_max_expansions() -> usize {
    100_000
}
fn default_walking_speed() -> f32 {
    1.4
}
fn default_min_step_time() -> u32 {
    3
}

impl Default for HeuristicSettings {
    fn default() -> Self {
        Self {
            building_penalty: default_building_penalty(),
            floor_penalty: default_floor_penalty(),
            room_penalty: default_room_penalty(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            walking_speed: default_walking_speed(),
            min_step_time: default_min_step_time(),
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
