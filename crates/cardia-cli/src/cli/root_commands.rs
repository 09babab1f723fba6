use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CourseCommands, DataCommands, EnrollCommands, PredictionCommands, StudentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize a cardia project in the current directory.
    Init(InitArgs),
    /// Load the heart-disease CSV into the clinical store and train on it.
    Import(ImportArgs),
    /// Train the classifier on the stored data and report accuracy.
    Train,
    /// Classify one person from form fields.
    Predict(PredictArgs),
    /// Saved predictions.
    Prediction {
        #[command(subcommand)]
        action: PredictionCommands,
    },
    /// Labeled observations in the clinical store.
    Data {
        #[command(subcommand)]
        action: DataCommands,
    },
    /// Registry students.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Registry courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Registry enrollments.
    Enroll {
        #[command(subcommand)]
        action: EnrollCommands,
    },
    /// Write tables to CSV files.
    Export(ExportArgs),
    /// Replace a table with the rows of a CSV export.
    ImportTable(ImportTableArgs),
}

/// Arguments for `cardia init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    #[arg(default_value = ".")]
    pub path: String,
}

/// Arguments for `cardia import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// CSV file to load (defaults to `dataset.path` from config).
    pub path: Option<String>,
    /// Leave invalid rows out and report them instead of failing the load.
    #[arg(long)]
    pub skip_invalid: bool,
}

/// The thirteen form fields. Omitted fields take the form defaults.
#[derive(Clone, Debug, Default, Args)]
pub struct FeatureArgs {
    #[arg(long)]
    pub age: Option<i64>,
    /// 1 = male, 0 = female
    #[arg(long)]
    pub sex: Option<i64>,
    /// Chest pain type (0-3)
    #[arg(long)]
    pub cp: Option<i64>,
    /// Resting blood pressure
    #[arg(long)]
    pub trestbps: Option<i64>,
    /// Serum cholesterol in mg/dl
    #[arg(long)]
    pub chol: Option<i64>,
    /// Fasting blood sugar > 120 mg/dl (1 = true)
    #[arg(long)]
    pub fbs: Option<i64>,
    /// Resting ECG result (0-2)
    #[arg(long)]
    pub restecg: Option<i64>,
    /// Maximum heart rate achieved
    #[arg(long)]
    pub thalach: Option<i64>,
    /// Exercise induced angina (1 = yes)
    #[arg(long)]
    pub exang: Option<i64>,
    /// ST depression induced by exercise
    #[arg(long)]
    pub oldpeak: Option<f64>,
    /// Slope of the peak exercise ST segment (0-2)
    #[arg(long)]
    pub slope: Option<i64>,
    /// Major vessels colored by fluoroscopy (0-4)
    #[arg(long)]
    pub ca: Option<i64>,
    /// Thalassemia (0-3)
    #[arg(long)]
    pub thal: Option<i64>,
    /// JSON file with the form fields; flags given alongside override it.
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for `cardia predict`.
#[derive(Clone, Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub form: FeatureArgs,
    /// Save the prediction under `--name`.
    #[arg(long, requires = "name")]
    pub save: bool,
    /// Name shown in the verdict and stored with a saved prediction.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for `cardia export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(default_value = "export")]
    pub dir: String,
    /// Export only this table.
    #[arg(long)]
    pub table: Option<String>,
}

/// Arguments for `cardia import-table`.
#[derive(Clone, Debug, Args)]
pub struct ImportTableArgs {
    /// Table to replace.
    pub table: String,
    /// CSV file written by `cardia export`.
    pub path: String,
}
