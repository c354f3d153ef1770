//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod donor_repo;
pub mod student_profile_repo;
pub mod student_repo;
pub mod subscriber_repo;

pub use donor_repo::DonorRepo;
pub use student_profile_repo::StudentProfileRepo;
pub use student_repo::StudentRepo;
pub use subscriber_repo::{SubscribeOutcome, SubscriberRepo};
