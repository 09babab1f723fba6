mod course;
mod data;
mod enroll;
mod prediction;
mod student;

pub use course::CourseCommands;
pub use data::DataCommands;
pub use enroll::EnrollCommands;
pub use prediction::PredictionCommands;
pub use student::StudentCommands;
