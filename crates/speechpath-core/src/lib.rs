//! speechpath-core
//!
//! Pure domain types and S3 key conventions for therapy plans.
//! No I/O: the shared vocabulary of every other speechpath crate.

pub mod clinical;
pub mod error;
pub mod models;
pub mod s3_keys;
