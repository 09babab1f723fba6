//! Entity structs for all Cardia domain objects.
//!
//! Clinical entities map to the `heart_data` and `predictions` tables; registry
//! entities map to `students`, `courses`, and `enrollments`. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! export.

mod aggregate;
mod course;
mod enrollment;
mod features;
mod observation;
mod prediction;
mod student;

pub use aggregate::LabelAggregate;
pub use course::{Course, NewCourse};
pub use enrollment::{Enrollment, EnrollmentReport};
pub use features::Features;
pub use observation::{Observation, RejectedRow, StoredObservation};
pub use prediction::PredictionRecord;
pub use student::{NewStudent, Student, non_blank};
