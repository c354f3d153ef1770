pub mod donors;
pub mod fallback;
pub mod pages;
pub mod student_profile;
pub mod students;
pub mod subscribers;
pub mod universities;
