//! # Marga-Nav: Indoor Campus Navigation
//!
//! Graph-based pathfinding for multi-building, multi-floor indoor spaces,
//! with turn-by-turn navigation instructions.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{campus, find_path, NavConfig};
//!
//! let graph = campus::demo_campus();
//! let config = NavConfig::default();
//!
//! let route = find_path(&graph, "100101", "102105", &config).unwrap();
//! println!(
//!     "{} -> {}: {}m, {}s, {} steps",
//!     route.start_room.name,
//!     route.end_room.name,
//!     route.total_distance,
//!     route.total_time,
//!     route.steps.len()
//! );
//! for step in &route.steps {
//!     println!("{}. {}", step.step, step.instruction);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`Node`], [`Edge`], bearing math)
//! - [`config`]: Configuration sections with TOML loading
//! - [`graph`]: Immutable campus graph, builder, and spatial index
//! - [`campus`]: Demo campus topology loader
//! - [`search`]: Single-direction and bidirectional A* engines
//! - [`route`]: Turn classification and instruction synthesis
//!
//! ## Data Flow
//!
//! ```text
//!  ┌────────────┐      ┌──────────────┐      ┌───────────────┐
//!  │   Loader   │─────►│ CampusGraph  │◄─────│ Search Engine │
//!  │ (campus /  │      │ (immutable,  │ read │  A* / BiA*    │
//!  │  builder)  │      │  id arena)   │ only │               │
//!  └────────────┘      └──────────────┘      └──────┬────────┘
//!                                                   │ RawPath
//!                                                   ▼
//!                                            ┌──────────────┐
//!                                            │    Route     │──► CLI /
//!                                            │ Synthesizer  │    renderer
//!                                            └──────────────┘
//! ```
//!
//! ## Concurrency
//!
//! The graph is immutable after construction and every search allocates its
//! own queues and score maps, so concurrent searches against one shared
//! graph need no locking. For a fixed graph and endpoint pair, results are
//! deterministic: the open queue breaks cost ties on node id.

pub mod campus;
pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod route;
pub mod search;

// Re-export main types at crate root
pub use config::{HeuristicSettings, NavConfig, RouteSettings, SearchSettings};
pub use core::{Edge, Node, NodeId, NodeKind};
pub use error::{NavError, Result};
pub use graph::{CampusGraph, GraphBuilder, SpatialIndex};
pub use route::{Route, RouteStep, TurnDirection};
pub use search::{find_path, find_path_bidirectional, RawPath};
