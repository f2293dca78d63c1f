pub mod build;
pub mod ingest;

pub use build::{BuildArgs, build_command};
pub use ingest::{IngestArgs, ingest_command};
