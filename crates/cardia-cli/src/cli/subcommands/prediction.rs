use clap::Subcommand;

use crate::cli::root_commands::FeatureArgs;

/// Saved prediction commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PredictionCommands {
    /// Save a prediction. The label is classified from the form unless given.
    Save {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        form: FeatureArgs,
        /// Store this label instead of classifying (disease, no-disease, 1, 0).
        #[arg(long)]
        predicted: Option<String>,
    },
    /// List saved predictions, newest first.
    List {
        /// Only this label.
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a saved prediction by ID.
    Get { id: i64 },
    /// Rename a prediction or correct its label.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        predicted: Option<String>,
    },
    /// Delete a saved prediction.
    Delete { id: i64 },
}
