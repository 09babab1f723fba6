use clap::Subcommand;

use crate::cli::root_commands::FeatureArgs;

/// Clinical observation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DataCommands {
    /// List observations in id order.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Observations where `<column> <op> <value>` holds.
    Filter {
        column: String,
        /// eq, gt, ge, lt, le (or =, >, >=, <, <=)
        op: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Row count and mean of a column for each label.
    Aggregate {
        column: String,
        /// Aggregate saved predictions instead of observations.
        #[arg(long)]
        predictions: bool,
    },
    /// Number of stored observations.
    Count,
    /// Add one labeled observation.
    Insert {
        #[command(flatten)]
        form: FeatureArgs,
        /// disease, no-disease, 1 or 0
        #[arg(long)]
        target: String,
    },
    /// Change columns of one observation.
    Update {
        id: i64,
        /// `column=value`, repeatable.
        #[arg(long = "set")]
        set: Vec<String>,
    },
    /// Delete one observation.
    Delete { id: i64 },
}
