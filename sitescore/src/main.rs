use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct SiteScoreApp {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
enum App {
    /// score one candidate site and print the criterion breakdown as JSON
    #[command()]
    Score {
        /// dataset manifest TOML file
        #[arg(short, long, value_name = "*.toml")]
        manifest: PathBuf,

        /// site latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// site longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// scoring rules TOML file, defaulting to the published QAP tables
        #[arg(short, long, value_name = "*.toml")]
        rules: Option<PathBuf>,
    },
    /// build the pre-computed score map layers into a directory
    #[command()]
    Layers {
        /// dataset manifest TOML file, including an [extent] table
        #[arg(short, long, value_name = "*.toml")]
        manifest: PathBuf,

        /// directory receiving the GeoJSON layer files
        #[arg(short, long)]
        output: PathBuf,

        /// scoring rules TOML file, defaulting to the published QAP tables
        #[arg(short, long, value_name = "*.toml")]
        rules: Option<PathBuf>,

        /// grid cell size in decimal degrees
        #[arg(long, default_value_t = 0.01)]
        cell_size: f64,
    },
}

fn main() {
    env_logger::init();
    let args = SiteScoreApp::parse();
    let result = match &args.app {
        App::Score {
            manifest,
            latitude,
            longitude,
            rules,
        } => sitescore::app::score::run(manifest, *latitude, *longitude, rules.as_deref()),
        App::Layers {
            manifest,
            output,
            rules,
            cell_size,
        } => sitescore::app::layers::run(manifest, output, rules.as_deref(), *cell_size),
    };
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
