use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use u_routegen::config::GenerationConfig;
use u_routegen::io::{read_travel_csv_path, write_routes_file};
use u_routegen::logging::init_stdout_logging;
use u_routegen::pipeline::generate_region_routes;

/// Generates candidate delivery routes for one region and writes them in
/// plain-text block format.
#[derive(Parser)]
struct Args {
    /// Travel-time CSV: header `<label>,name1,...`, then one row per node
    #[arg(short, long)]
    travel: PathBuf,

    /// Name of the hub (distribution) node
    #[arg(long)]
    hub: String,

    /// Output route file
    #[arg(short, long)]
    output: PathBuf,

    /// Region name used as the route name prefix
    #[arg(short, long, default_value = "region")]
    name: String,

    /// Minimum neighbor count; overrides the config file
    #[arg(short)]
    k: Option<usize>,

    /// JSON generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbose diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> u_routegen::Result<()> {
    let args = Args::parse();
    let _guard = init_stdout_logging(if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    });

    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(k) = args.k {
        config.min_neighbors = k;
    }

    let (labels, travel) = read_travel_csv_path(&args.travel)?;
    let hub = labels.index_of(&args.hub)?;
    info!(nodes = labels.len(), hub = %args.hub, "loaded travel times");

    let region = generate_region_routes(&args.name, Arc::new(labels), &travel, hub, &config)?;
    write_routes_file(&args.output, &region.routes)?;

    info!(
        routes = region.routes.len(),
        combined = region.routes.num_combined(),
        cycles = region.cycles.len(),
        output = %args.output.display(),
        "wrote routes"
    );
    Ok(())
}
