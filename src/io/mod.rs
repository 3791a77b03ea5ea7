//! Binary-adjacent modules: ingestion, generation, persistence. None of
//! these are consumed by the core library; they exist to make the crate
//! runnable end-to-end from the CLI.

pub mod format;
pub mod ingest;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod watts_strogatz;
