//! Command implementations for the crop survey CLI.
//!
//! Each subcommand starts a session, applies the filter options on top of
//! the session defaults and renders one output: a text summary, the CSV
//! download, or the dashboard JSON payload.

use clap::Subcommand;

pub mod files;
pub mod filters;
pub mod summary;

pub use filters::{FilterArgs, SessionArgs};

#[derive(Subcommand)]
pub enum Command {
    /// Print summary metrics and chart aggregates for the filtered points
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write the filtered points as CSV
    Export {
        /// Output path for the CSV file
        #[arg(short = 'o', long, default_value = crop_data::export::EXPORT_FILE_NAME)]
        output: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write the dashboard payload (map, table, metrics, charts) as JSON
    Dashboard {
        /// Output path for the JSON file (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write the full simulated dataset as CSV, without filtering
    Generate {
        /// Output path for the CSV file
        #[arg(short = 'o', long, default_value = "crop_survey_points.csv")]
        output: String,

        #[command(flatten)]
        session: SessionArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { filters } => summary::run_summary(&filters),
        Command::Export { output, filters } => files::run_export(&output, &filters),
        Command::Dashboard { output, filters } => {
            files::run_dashboard(output.as_deref(), &filters)
        }
        Command::Generate { output, session } => files::run_generate(&output, &session),
    }
}
