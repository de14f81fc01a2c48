//! # Roadgraph CLI
//!
//! Command-line interface for the roadgraph library.
//! Builds the bundled atlas, answers route and spatial queries, and edits
//! JSON map snapshots.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::error;

use roadgraph::{atlas, persist, FreeSegments, Node, NodeId, RoadGraph, Router, SpatialIndex};

mod cli;

/// Command-line interface for roadgraph
#[derive(Parser)]
#[command(name = "roadgraph")]
#[command(about = "Toll-road network graph with BFS routing")]
#[command(long_about = "Queries and edits a toll-road network graph:
  roadgraph build -o map.json      # Write the bundled atlas as a snapshot
  roadgraph route 101 301          # Shortest route over the bundled atlas
  roadgraph route 101 301 --map map.json
  roadgraph nearest 520 30         # Closest node to a point
  roadgraph add-node X 100 200 --map map.json

Query commands fall back to the bundled atlas when --map is not given;
editing commands require --map and write the file back in place.")]
#[command(version)]
struct Cli {
    /// Map snapshot to operate on
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Materialize the bundled atlas and write it as a JSON snapshot
    Build {
        /// Output file path
        #[arg(short, long, default_value = "roadmap.json")]
        output: PathBuf,
    },
    /// Shortest route between two nodes
    Route { from: String, to: String },
    /// The N shortest alternative routes between two nodes
    Alternatives {
        from: String,
        to: String,
        /// How many routes to list
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
    /// Nearest node to a point, or all nodes within a radius
    Nearest {
        x: f64,
        y: f64,
        /// List every node within this radius instead of the single nearest
        #[arg(short, long)]
        radius: Option<f64>,
    },
    /// Node details: position, tags, neighbors
    Info { id: String },
    /// Node and edge counts
    Stats,
    /// Add a node to the map file
    AddNode {
        id: String,
        x: i32,
        y: i32,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },
    /// Add an edge to the map file
    AddEdge { a: String, b: String },
    /// Remove a node (and its incident edges) from the map file
    RemoveNode { id: String },
    /// Remove an edge from the map file
    RemoveEdge { a: String, b: String },
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { output } => {
            let graph = atlas::default_atlas();
            persist::save_snapshot(&graph, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(
                "wrote {} nodes / {} edges to {}",
                graph.node_count(),
                graph.edge_count(),
                output.display()
            );
        }
        Command::Route { from, to } => {
            let (graph, free) = load_map(cli.map.as_deref())?;
            let router = Router::new(&graph);
            match router.shortest_path(&NodeId::from(from.as_str()), &NodeId::from(to.as_str())) {
                Some(route) => print!("{}", cli::render_route(&graph, &free, &route)),
                None => bail!("no route from '{from}' to '{to}'"),
            }
        }
        Command::Alternatives { from, to, count } => {
            let (graph, free) = load_map(cli.map.as_deref())?;
            let router = Router::new(&graph);
            let routes = router.find_alternative_routes(
                &NodeId::from(from.as_str()),
                &NodeId::from(to.as_str()),
                count,
            );
            if routes.is_empty() {
                bail!("no route from '{from}' to '{to}'");
            }
            for (i, route) in routes.iter().enumerate() {
                println!("#{}", i + 1);
                print!("{}", cli::render_route(&graph, &free, route));
            }
        }
        Command::Nearest { x, y, radius } => {
            let (graph, _) = load_map(cli.map.as_deref())?;
            let index = SpatialIndex::build(&graph);
            match radius {
                Some(radius) => {
                    for id in index.within_radius((x, y), radius) {
                        println!("{id}");
                    }
                }
                None => match index.nearest((x, y)) {
                    Some(id) => println!("{id}"),
                    None => bail!("the map has no nodes"),
                },
            }
        }
        Command::Info { id } => {
            let (graph, _) = load_map(cli.map.as_deref())?;
            match cli::render_node_info(&graph, &NodeId::from(id.as_str())) {
                Some(info) => print!("{info}"),
                None => bail!("unknown node '{id}'"),
            }
        }
        Command::Stats => {
            let (graph, _) = load_map(cli.map.as_deref())?;
            print!("{}", cli::render_stats(&graph));
        }
        Command::AddNode { id, x, y, name } => {
            edit_map(cli.map.as_deref(), |graph| {
                let node = match name {
                    Some(name) => Node::named(id.as_str(), name, x, y),
                    None => Node::new(id.as_str(), x, y),
                };
                graph.add_node(node)?;
                println!("added node '{id}'");
                Ok(())
            })?;
        }
        Command::AddEdge { a, b } => {
            edit_map(cli.map.as_deref(), |graph| {
                graph.add_edge(NodeId::from(a.as_str()), NodeId::from(b.as_str()))?;
                println!("added edge '{a}' - '{b}'");
                Ok(())
            })?;
        }
        Command::RemoveNode { id } => {
            edit_map(cli.map.as_deref(), |graph| {
                if !graph.remove_node(&NodeId::from(id.as_str())) {
                    bail!("unknown node '{id}'");
                }
                println!("removed node '{id}' and its edges");
                Ok(())
            })?;
        }
        Command::RemoveEdge { a, b } => {
            edit_map(cli.map.as_deref(), |graph| {
                if !graph.remove_edge(&NodeId::from(a.as_str()), &NodeId::from(b.as_str())) {
                    bail!("no edge between '{a}' and '{b}'");
                }
                println!("removed edge '{a}' - '{b}'");
                Ok(())
            })?;
        }
    }

    Ok(())
}

/// Load the snapshot named by `--map`, or fall back to the bundled atlas.
/// Snapshots carry no free-segment table; the bundled one applies.
fn load_map(map: Option<&Path>) -> anyhow::Result<(RoadGraph, FreeSegments)> {
    let graph = match map {
        Some(path) => persist::load_snapshot(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => atlas::default_atlas(),
    };
    Ok((graph, atlas::default_free_segments()))
}

/// Load the map file, apply one mutation, and write it back in place.
fn edit_map(
    map: Option<&Path>,
    mutate: impl FnOnce(&mut RoadGraph) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let Some(path) = map else {
        bail!("editing commands require --map");
    };

    let mut graph = persist::load_snapshot(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    mutate(&mut graph)?;
    persist::save_snapshot(&graph, path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
