//! Styleblocks CLI - inspect block hierarchies, resolved states and output names

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use styleblocks::config::{self, OutputMode, StyleConfig};
use styleblocks::manifest::Manifest;
use styleblocks::naming::{self, Namer};
use styleblocks::ui::{self, Icons, NameTable, StateTable};
use styleblocks::{Block, Id, Resolver, Style, StyleGraph, UNIVERSAL_STATE};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "styleblocks")]
#[command(version)]
#[command(about = "Block-scoped style hierarchy - inheritance-aware states and BEM output names")]
#[command(long_about = r#"
Styleblocks loads a block hierarchy description and answers:
  • Which output class name does each class and state get?
  • Which states does a class see once inheritance is merged?
  • Which class attributes does each class contribute for analysis?

Example usage:
  styleblocks names --manifest blocks.toml
  styleblocks states --manifest blocks.toml --block nav --class item
  styleblocks attributes --manifest blocks.toml --block nav --optional-root
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to styleblocks.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show authored and generated names for every class and state
    Names {
        /// Hierarchy description file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Only show this block
        #[arg(short, long)]
        block: Option<String>,

        /// Naming convention (overrides the config file)
        #[arg(long)]
        mode: Option<OutputMode>,
    },

    /// Show the merged states of a class across its inheritance chain
    States {
        /// Hierarchy description file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Block name
        #[arg(short, long)]
        block: String,

        /// Class name (`:scope` for the root class)
        #[arg(short = 'C', long)]
        class: String,

        /// Only merge this state group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Print the class attributes of a block as JSON
    Attributes {
        /// Hierarchy description file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Block name
        #[arg(short, long)]
        block: String,

        /// Mark the root class attribute optional
        #[arg(long)]
        optional_root: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    if let Commands::Init { force } = cli.command {
        config::write_config(&config_path, &StyleConfig::default(), force)?;
        ui::success(&format!("Wrote {}", config_path.display()));
        return Ok(());
    }

    let config = config::load_config(Some(&config_path))
        .with_context(|| format!("failed to load {}", config_path.display()))?
        .unwrap_or_default();

    match cli.command {
        Commands::Names { manifest, block, mode } => {
            let graph = load_graph(&manifest)?;
            let namer = match mode {
                Some(mode) => Namer::new(&graph, mode),
                None => Namer::from_config(&graph, &config),
            };

            let blocks = match block {
                Some(name) => vec![find_block(&graph, &name)?],
                None => graph.blocks().iter().map(|(id, _)| id).collect(),
            };

            ui::header(&format!("Output names ({})", namer.mode()));
            for block in blocks {
                ui::section(graph.block(block).name());
                if let Some(base) = graph.base(block) {
                    ui::status(Icons::LINK, "extends", graph.block(base).name());
                }

                let mut table = NameTable::new();
                for &class in graph.children(block) {
                    for style in naming::all(&graph, class, false) {
                        table.add_row(&namer.source(style), &namer.output(style));
                    }
                }
                println!("{}", table.build());

                for line in namer.debug_block(block) {
                    tracing::debug!("{}", line);
                }
            }
        }

        Commands::States { manifest, block, class, group } => {
            let graph = load_graph(&manifest)?;
            let block = find_block(&graph, &block)?;
            let resolver = Resolver::new(&graph);
            let class_id = resolver
                .resolve_class(block, &class)
                .with_context(|| format!("no class '{}' in block '{}'", class, graph.block(block).name()))?;

            let states = resolver.resolve_states(class_id, group.as_deref());
            ui::header(&format!("States of {}", graph.class(class_id).as_source()));
            if states.is_empty() {
                ui::warn("No states resolved");
                return Ok(());
            }

            let mut table = StateTable::new();
            for (group_name, state_name, state) in states.iter() {
                let group = graph.group(graph.state(state).group());
                let origin = graph.block(graph.class(group.class()).block()).name();
                let state_name = if state_name == UNIVERSAL_STATE {
                    ui::dim("(boolean)")
                } else {
                    state_name.to_string()
                };
                table.add_row(group_name, &state_name, origin);
            }
            println!("{}", table.build());

            let booleans: Vec<&str> = resolver
                .boolean_states(class_id)
                .into_iter()
                .map(|state| graph.group(graph.state(state).group()).name())
                .collect();
            if !booleans.is_empty() {
                ui::info("Boolean groups", &booleans.join(", "));
            }
        }

        Commands::Attributes { manifest, block, optional_root } => {
            let graph = load_graph(&manifest)?;
            let block = find_block(&graph, &block)?;
            let attributes = naming::block_attributes(&graph, block, optional_root || config.optional_root);
            println!("{}", serde_json::to_string_pretty(&attributes)?);
        }

        Commands::Init { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn load_graph(manifest: &std::path::Path) -> anyhow::Result<StyleGraph> {
    tracing::info!("Loading {}", manifest.display());
    let graph = Manifest::load(manifest)
        .and_then(|m| m.build())
        .with_context(|| format!("failed to build hierarchy from {}", manifest.display()))?;
    Ok(graph)
}

fn find_block(graph: &StyleGraph, name: &str) -> anyhow::Result<Id<Block>> {
    graph
        .block_named(name)
        .with_context(|| format!("unknown block '{}'", name))
}
