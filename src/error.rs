//! Error types.

use thiserror::Error;

/// Failure of the relation query layer.
#[derive(Debug, Error)]
pub enum SourceError {
	/// The requested center document does not exist.
	#[error("document `{0}` not found")]
	NotFound(String),
	/// The relation data could not be decoded.
	#[error("malformed relation data: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// Failure to set up a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// The canvas did not hand out a 2D context.
	#[error("canvas 2d context unavailable: {0}")]
	ContextUnavailable(String),
}
