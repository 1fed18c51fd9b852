use std::path::PathBuf;

use atl_core::ExportModel;
use clap::Subcommand;

/// Bulk data commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Export every row of a model as JSON.
    Export {
        /// Model name, e.g. vendors, productprojects, contractstatuses
        model: ExportModel,
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Import rows for a model from a JSON file.
    Import {
        model: ExportModel,
        file: PathBuf,
    },
}
