pub mod course;
pub mod data;
pub mod dispatch;
pub mod enroll;
pub mod export;
pub mod import;
pub mod import_table;
pub mod init;
pub mod predict;
pub mod prediction;
pub mod shared;
pub mod student;
pub mod train;
