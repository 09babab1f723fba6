use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Add a course.
    Add {
        #[arg(long)]
        name: String,
        /// Free text, e.g. "6 weeks".
        #[arg(long)]
        duration: Option<String>,
    },
    /// List courses.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete a course.
    Delete { id: i64 },
}
