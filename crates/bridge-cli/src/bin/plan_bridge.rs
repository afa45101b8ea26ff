//! CLI tool to compute a relay bridge plan offline.
//!
//! Prints trajectories for every relay drone as JSON or a table.

use bridge_cli::{load_fleet, render_table};
use bridge_core::{
    default_fleet, plan_bridge, BridgeRequest, Coordinates2D, IdlePolicy, PlannerConfig, Point3D,
    DEFAULT_MAX_SPACING, DEFAULT_STEP_SIZE,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

/// Plan a relay-drone bridge between a base station and a user
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// User X position
    #[arg(long, allow_hyphen_values = true)]
    user_x: f64,

    /// User Y position
    #[arg(long, allow_hyphen_values = true)]
    user_y: f64,

    /// Base station X position
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    base_x: f64,

    /// Base station Y position
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    base_y: f64,

    /// Base station altitude
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    base_z: f64,

    /// Maximum distance between neighbouring relays
    #[arg(long, default_value_t = DEFAULT_MAX_SPACING)]
    max_spacing: f64,

    /// Distance between trajectory waypoints
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// JSON fleet file (defaults to the sample fleet)
    #[arg(long)]
    drones: Option<PathBuf>,

    /// Emit single-step trajectories for drones not used as relays
    #[arg(long)]
    hold_idle: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let drones = match &args.drones {
        Some(path) => load_fleet(path)?,
        None => default_fleet(),
    };
    tracing::debug!(drones = drones.len(), "Loaded fleet");
    let request = BridgeRequest::new(Coordinates2D::new(args.user_x, args.user_y))
        .with_base(Point3D::new(args.base_x, args.base_y, args.base_z))
        .with_drones(drones);
    let config = PlannerConfig {
        max_spacing: args.max_spacing,
        step_size: args.step_size,
        idle_policy: if args.hold_idle {
            IdlePolicy::HoldPosition
        } else {
            IdlePolicy::Omit
        },
    };

    let plan = plan_bridge(&request, &config)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Table => print!("{}", render_table(&plan)),
    }

    Ok(())
}
