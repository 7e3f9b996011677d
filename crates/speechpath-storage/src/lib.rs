//! speechpath-storage
//!
//! Plan documents and patient reads. S3 in production, in memory for local
//! development and tests, both behind [`store::DocumentStore`].

pub mod client;
pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;
