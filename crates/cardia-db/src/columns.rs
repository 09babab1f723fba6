//! Closed sets of table and column names that may appear in SQL text.

use std::fmt;
use std::str::FromStr;

use cardia_core::enums::Comparison;
use cardia_core::errors::ValidationError;
use cardia_core::schema::{FEATURES, FieldSpec, TARGET, feature_index};
use serde::{Deserialize, Serialize};

use crate::Scenario;

/// A table whose rows carry a binary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabeledTable {
    Observations,
    Predictions,
}

impl LabeledTable {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observations => "heart_data",
            Self::Predictions => "predictions",
        }
    }

    #[must_use]
    pub const fn label_column(self) -> &'static str {
        match self {
            Self::Observations => "target",
            Self::Predictions => "predicted",
        }
    }
}

/// A numeric column of a [`LabeledTable`].
pub trait TableColumn: Copy + fmt::Display {
    const TABLE: LabeledTable;

    fn as_str(self) -> &'static str;

    /// Schema entry bounding values written to this column.
    fn spec(self) -> &'static FieldSpec {
        let features: &'static [FieldSpec] = &FEATURES;
        feature_index(self.as_str()).map_or(&TARGET, |idx| &features[idx])
    }
}

macro_rules! column_enum {
    ($(#[$meta:meta])* $name:ident in $table:expr, { $($variant:ident => $sql:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $sql),+
                }
            }
        }

        impl TableColumn for $name {
            const TABLE: LabeledTable = $table;

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|column| column.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
            }
        }
    };
}

column_enum!(
    /// Filterable, updatable and aggregatable columns of `heart_data`.
    ObservationColumn in LabeledTable::Observations, {
        Age => "age",
        Sex => "sex",
        Cp => "cp",
        Trestbps => "trestbps",
        Chol => "chol",
        Fbs => "fbs",
        Restecg => "restecg",
        Thalach => "thalach",
        Exang => "exang",
        Oldpeak => "oldpeak",
        Slope => "slope",
        Ca => "ca",
        Thal => "thal",
        Target => "target",
    }
);

column_enum!(
    /// Numeric columns of `predictions`.
    PredictionColumn in LabeledTable::Predictions, {
        Age => "age",
        Sex => "sex",
        Cp => "cp",
        Trestbps => "trestbps",
        Chol => "chol",
        Fbs => "fbs",
        Restecg => "restecg",
        Thalach => "thalach",
        Exang => "exang",
        Oldpeak => "oldpeak",
        Slope => "slope",
        Ca => "ca",
        Thal => "thal",
        Predicted => "predicted",
    }
);

/// `column <op> value` with the value always bound as a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predicate<C> {
    pub column: C,
    pub comparison: Comparison,
    pub value: f64,
}

impl<C: TableColumn> Predicate<C> {
    /// # Errors
    ///
    /// Returns `ValidationError::NotFinite` for NaN or infinite values.
    pub fn new(column: C, comparison: Comparison, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                field: column.as_str(),
            });
        }
        Ok(Self {
            column,
            comparison,
            value,
        })
    }

    /// SQL fragment using placeholder `?{idx}`.
    #[must_use]
    pub fn clause(&self, idx: usize) -> String {
        format!("{} {} ?{idx}", self.column.as_str(), self.comparison.as_sql())
    }
}

/// Storage class of an exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// `YYYY-MM-DD` text.
    Date,
    /// RFC 3339 or `YYYY-MM-DD HH:MM:SS` text.
    Timestamp,
}

use ColumnType::{Date, Integer, Real, Text, Timestamp};

const FEATURE_COLUMNS: [(&str, ColumnType); 13] = [
    ("age", Integer),
    ("sex", Integer),
    ("cp", Integer),
    ("trestbps", Integer),
    ("chol", Integer),
    ("fbs", Integer),
    ("restecg", Integer),
    ("thalach", Integer),
    ("exang", Integer),
    ("oldpeak", Real),
    ("slope", Integer),
    ("ca", Integer),
    ("thal", Integer),
];

const HEART_DATA_COLUMNS: [(&str, ColumnType); 15] = {
    let mut columns = [("id", Integer); 15];
    let mut idx = 0;
    while idx < FEATURE_COLUMNS.len() {
        columns[idx + 1] = FEATURE_COLUMNS[idx];
        idx += 1;
    }
    columns[14] = ("target", Integer);
    columns
};

const PREDICTION_COLUMNS: [(&str, ColumnType); 17] = {
    let mut columns = [("id", Integer); 17];
    columns[1] = ("name", Text);
    let mut idx = 0;
    while idx < FEATURE_COLUMNS.len() {
        columns[idx + 2] = FEATURE_COLUMNS[idx];
        idx += 1;
    }
    columns[15] = ("predicted", Integer);
    columns[16] = ("created_at", Timestamp);
    columns
};

const STUDENT_COLUMNS: [(&str, ColumnType); 5] = [
    ("id", Integer),
    ("name", Text),
    ("email", Text),
    ("roll_no", Text),
    ("department", Text),
];

const COURSE_COLUMNS: [(&str, ColumnType); 3] = [("id", Integer), ("name", Text), ("duration", Text)];

const ENROLLMENT_COLUMNS: [(&str, ColumnType); 4] = [
    ("id", Integer),
    ("student_id", Integer),
    ("course_id", Integer),
    ("enrollment_date", Date),
];

/// Tables that can be exported to and imported from CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTable {
    HeartData,
    Predictions,
    Students,
    Courses,
    Enrollments,
}

impl ExportTable {
    pub const ALL: [Self; 5] = [
        Self::HeartData,
        Self::Predictions,
        Self::Students,
        Self::Courses,
        Self::Enrollments,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeartData => "heart_data",
            Self::Predictions => "predictions",
            Self::Students => "students",
            Self::Courses => "courses",
            Self::Enrollments => "enrollments",
        }
    }

    #[must_use]
    pub const fn scenario(self) -> Scenario {
        match self {
            Self::HeartData | Self::Predictions => Scenario::Clinical,
            Self::Students | Self::Courses | Self::Enrollments => Scenario::Registry,
        }
    }

    /// Columns in table order, `id` first.
    #[must_use]
    pub const fn columns(self) -> &'static [(&'static str, ColumnType)] {
        match self {
            Self::HeartData => &HEART_DATA_COLUMNS,
            Self::Predictions => &PREDICTION_COLUMNS,
            Self::Students => &STUDENT_COLUMNS,
            Self::Courses => &COURSE_COLUMNS,
            Self::Enrollments => &ENROLLMENT_COLUMNS,
        }
    }

    #[must_use]
    pub fn column_names(self) -> Vec<&'static str> {
        self.columns().iter().map(|(name, _)| *name).collect()
    }

    /// Tables of one store, parents before children.
    #[must_use]
    pub fn for_scenario(scenario: Scenario) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|table| table.scenario() == scenario)
            .collect()
    }
}

impl fmt::Display for ExportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTable {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|table| table.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}
