use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use trapsweep::commands;
use trapsweep::{ReferenceData, init_logging};
use trapsweep_core::analysis::{
    DEFAULT_REGION_POINTS, DEFAULT_RES_POINTS, DEFAULT_UNIFORM_POINTS,
};
use trapsweep_core::{BindingParam, RangeBuilder};

#[derive(Parser, Debug)]
#[command(name = "trapsweep")]
#[command(about = "Sensitivity-analysis sampling grids for hERG drug binding parameters")]
struct Args {
    /// Reference data YAML (default: bundled CiPA compounds)
    #[arg(short, long, global = true)]
    reference: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grid around one drug's value plus the low/mid/high population regimes
    Range {
        #[arg(short, long)]
        param: BindingParam,
        #[arg(short, long)]
        drug: String,
        /// Points per region
        #[arg(short = 'n', long, default_value_t = DEFAULT_REGION_POINTS)]
        points: usize,
        /// Emit the own-value block once for log-scale parameters
        #[arg(long)]
        single_own_block: bool,
    },
    /// Grid over the low/mid/high population regimes
    Population {
        #[arg(short, long)]
        param: BindingParam,
        /// Points per regime
        #[arg(short = 'n', long, default_value_t = DEFAULT_RES_POINTS)]
        points: usize,
        /// Fill the gaps between regimes
        #[arg(long)]
        fill_gaps: bool,
    },
    /// Evenly spaced grid from the population minimum to maximum
    Uniform {
        #[arg(short, long)]
        param: BindingParam,
        #[arg(short = 'n', long, default_value_t = DEFAULT_UNIFORM_POINTS)]
        points: usize,
    },
    /// Show how the population splits into regimes
    Groups {
        #[arg(short, long)]
        param: BindingParam,
    },
    /// List the reference drugs
    Drugs,
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let data = ReferenceData::load_or_bundled(args.reference.as_deref())?;
    let (library, thresholds) = data.build()?;
    tracing::info!(
        drugs = library.len(),
        source = %args
            .reference
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        "reference data loaded"
    );
    let builder = RangeBuilder::new(&library, &thresholds);

    match args.command {
        Command::Range {
            param,
            drug,
            points,
            single_own_block,
        } => print_json(&commands::drug_range(
            &builder,
            &drug,
            param,
            points,
            single_own_block,
        )?),
        Command::Population {
            param,
            points,
            fill_gaps,
        } => print_json(&commands::population_range(
            &builder, param, points, fill_gaps,
        )?),
        Command::Uniform { param, points } => {
            print_json(&commands::uniform_range(&builder, param, points)?)
        }
        Command::Groups { param } => print_json(&commands::groups(
            &builder,
            thresholds.bounds(param)?,
            param,
        )?),
        Command::Drugs => print_json(&data.drugs),
    }
}
