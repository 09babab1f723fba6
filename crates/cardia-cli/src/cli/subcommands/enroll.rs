use clap::Subcommand;

/// Enrollment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnrollCommands {
    /// Enroll a student in a course.
    Add {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
        /// YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
    },
    /// List enrollments with student and course names.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete an enrollment.
    Delete { id: i64 },
}
