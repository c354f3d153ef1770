//! Request middleware.
//!
//! - [`studentform::route_studentform`] -- Rewrites and redirects paths that
//!   belong to the external studentform deployment.

pub mod studentform;
