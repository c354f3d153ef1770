//! Pure domain logic for the Medici site backend.
//!
//! Nothing in this crate performs I/O. The database layer (`medici-db`) and
//! the HTTP layer (`medici-api`) build on these types and rules.

pub mod email;
pub mod error;
pub mod leads;
pub mod lenient;
pub mod site;
pub mod student_profile;
pub mod studentform;
pub mod types;
