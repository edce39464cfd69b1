mod cache;
mod pipeline;
mod source;

use anyhow::Context;
use apollo::{facts, Chart, Comparator};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::cache::DirCache;
use crate::pipeline::SolarReturnPipeline;
use crate::source::FileChartSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solar Return against natal chart comparison")]
struct Args {
    /// Settings file (otherwise configs/apollo.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a user's stored natal and Solar Return charts, caching the report.
    Compare {
        #[arg(long)]
        user: String,

        /// Solar Return year (default: current UTC year).
        #[arg(long)]
        year: Option<i32>,

        /// Recompute even if a cached report exists.
        #[arg(long)]
        regenerate: bool,
    },
    /// Compare two chart payload files directly, without the cache.
    Inspect {
        #[arg(long)]
        natal: PathBuf,

        #[arg(long = "solar-return")]
        solar_return: PathBuf,
    },
}

fn read_chart(path: &Path) -> anyhow::Result<Chart> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Chart::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => apollo_config::load_settings_from(path)?,
        None => apollo_config::load_settings()?,
    };
    let comparator = Comparator::new(settings.comparison);

    match args.command {
        Command::Compare {
            user,
            year,
            regenerate,
        } => {
            let year = year.unwrap_or_else(|| Utc::now().year());
            let pipeline = SolarReturnPipeline::new(
                FileChartSource::new(&settings.storage.charts_dir),
                DirCache::new(&settings.storage.cache_dir),
                comparator,
            );
            let report = pipeline.run(&user, year, regenerate).await?;
            print_json(&report, args.pretty)?;
        }
        Command::Inspect {
            natal,
            solar_return,
        } => {
            let natal = read_chart(&natal)?;
            let solar_return = read_chart(&solar_return)?;
            let comparison = comparator.compare(&natal, &solar_return);
            for line in facts::describe(&comparison) {
                log::info!("{}", line);
            }
            print_json(&comparison, args.pretty)?;
        }
    }

    Ok(())
}
