//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts, built from the validated lead in `medici-core`

pub mod donor;
pub mod student;
pub mod student_profile;
pub mod subscriber;
