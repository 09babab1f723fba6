use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Register a student.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        roll_no: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// List students.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a student by ID.
    Get { id: i64 },
    /// Update a student.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        roll_no: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Delete a student.
    Delete { id: i64 },
}
