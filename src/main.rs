//! Marga-Nav CLI - interactive campus navigation.
//!
//! One-shot mode routes between two location codes; without endpoints it
//! drops into an interactive prompt loop with step-through navigation, the
//! way an info-kiosk would run it.

use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use marga_nav::{
    campus, find_path, find_path_bidirectional, CampusGraph, NavConfig, NavError, NodeKind, Route,
};

/// Campus navigation with turn-by-turn directions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML); defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start location code for one-shot routing
    #[arg(long)]
    from: Option<String>,

    /// End location code for one-shot routing
    #[arg(long)]
    to: Option<String>,

    /// Use the bidirectional search engine
    #[arg(long)]
    bidirectional: bool,

    /// Print the route as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List all rooms grouped by building and exit
    #[arg(long)]
    list_rooms: bool,
}

fn main() -> marga_nav::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };

    let graph = campus::demo_campus();
    info!(
        "campus graph loaded: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if args.list_rooms {
        list_rooms(&graph);
        return Ok(());
    }

    match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let route = route_once(&graph, from, to, &args, &config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&route).expect("route is serializable"));
            } else {
                print_route(&route);
            }
            Ok(())
        }
        (None, None) => interactive(&graph, &args, &config),
        _ => {
            eprintln!("Both --from and --to are required for one-shot routing");
            Ok(())
        }
    }
}

fn route_once(
    graph: &CampusGraph,
    from: &str,
    to: &str,
    args: &Args,
    config: &NavConfig,
) -> marga_nav::Result<Route> {
    if args.bidirectional {
        find_path_bidirectional(graph, from, to, config)
    } else {
        find_path(graph, from, to, config)
    }
}

fn list_rooms(graph: &CampusGraph) {
    let mut buildings: Vec<u32> = graph
        .nodes()
        .filter(|n| n.kind == NodeKind::Room)
        .map(|n| n.building)
        .collect();
    buildings.sort_unstable();
    buildings.dedup();

    for building in buildings {
        println!("\nBuilding {}:", building);
        let mut rooms: Vec<_> = graph
            .nodes()
            .filter(|n| n.kind == NodeKind::Room && n.building == building)
            .collect();
        rooms.sort_by(|a, b| a.code.cmp(&b.code));
        for room in rooms {
            println!("  {}: {} (Floor {})", room.code, room.name, room.floor);
        }
    }
}

fn print_route(route: &Route) {
    println!(
        "\nRoute: {} -> {}",
        route.start_room.name, route.end_room.name
    );
    println!("Distance: {}m", route.total_distance);
    println!("Time: {}s", route.total_time);
    println!("Steps: {}", route.steps.len());
    for step in &route.steps {
        println!(
            "  {}. {} ({}m, {}s)",
            step.step, step.instruction, step.distance, step.time
        );
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn interactive(
    graph: &CampusGraph,
    args: &Args,
    config: &NavConfig,
) -> marga_nav::Result<()> {
    println!("Marga-Nav campus navigation. Commands: route, rooms, quit");

    loop {
        let command = prompt("\n> ")?;
        match command.as_str() {
            "route" | "r" => {
                if let Err(e) = navigate(graph, args, config) {
                    match e {
                        NavError::RoomNotFound(_) | NavError::NoPathFound => {
                            println!("Error: {}", e)
                        }
                        other => return Err(other),
                    }
                }
            }
            "rooms" | "list" => list_rooms(graph),
            "quit" | "q" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }
    Ok(())
}

fn navigate(
    graph: &CampusGraph,
    args: &Args,
    config: &NavConfig,
) -> marga_nav::Result<()> {
    let start = prompt("Start room: ")?;
    let end = prompt("End room: ")?;

    // Malformed input is the caller's concern, not the engine's.
    if start.is_empty() || end.is_empty() {
        println!("Invalid input");
        return Ok(());
    }

    let route = route_once(graph, &start, &end, args, config)?;
    print_route(&route);

    if prompt("\nStart navigation? (y/N): ")?.eq_ignore_ascii_case("y") {
        step_through(&route)?;
    }
    Ok(())
}

fn step_through(route: &Route) -> io::Result<()> {
    for step in &route.steps {
        println!("\nStep {}/{}", step.step, route.steps.len());
        println!("Instruction: {}", step.instruction);
        println!("Distance: {}m", step.distance);

        let input = prompt("\nPress ENTER (q to quit): ")?;
        if input.eq_ignore_ascii_case("q") {
            break;
        }
    }
    println!("\nNavigation complete!");
    Ok(())
}
