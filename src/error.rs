//! Typed failure modes for the core.
//!
//! Library-layer functions return `NetError` for conditions that originate
//! at a boundary (file IO, SQLite, CLI parsing). Violations of an
//! algorithmic invariant that should never occur with correct call sites
//! panic instead of propagating.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
	#[error("operation requires a non-empty graph")]
	EmptyGraph,

	#[error("w(y) called with negative y = {0}")]
	WNegativeInput(f64),

	#[error("w(y) called with y = {0} outside the tabulated range and extension was not permitted")]
	WOutOfRange(f64),

	#[error("v(x) overflow: alpha*x^beta = {0} exceeds the safety cap of 705")]
	VOverflow(f64),

	#[error("L-neighborhood reduction average has no finite contributions")]
	NoValidSamples,

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[cfg(feature = "sqlite")]
	#[error("sqlite error: {0}")]
	Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
