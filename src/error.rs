//! Error types for running algorithms and navigating traces.
//!
//! Graph mutations never fail with an error: duplicates and unknown ids
//! come back as `None`/`false`. Everything here is about the caller-side
//! checks around a run and the trace cursor.

use thiserror::Error;

/// Result type for trace operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors raised before an algorithm starts or while scrubbing a trace
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TraceError {
	/// The algorithm selector id is not recognized
	#[error("Unknown algorithm: {0}")]
	UnknownAlgorithm(String),

	/// A required start or end vertex was not supplied
	#[error("Algorithm '{algorithm}' is missing its {parameter} vertex")]
	MissingParameter {
		/// Selector id of the algorithm
		algorithm: &'static str,
		/// Which parameter is missing ("start" or "end")
		parameter: &'static str,
	},

	/// A supplied vertex id does not exist in the graph
	#[error("Vertex not found: {0}")]
	UnknownVertex(String),

	/// Source and sink are the same vertex
	#[error("Algorithm '{algorithm}' needs distinct endpoints, got '{vertex}' twice")]
	SameEndpoints {
		/// Selector id of the algorithm
		algorithm: &'static str,
		/// The repeated vertex id
		vertex: String,
	},

	/// A jump target lies outside the trace
	#[error("Step index {index} out of range for a trace of {len} steps")]
	OutOfRange {
		/// Requested position
		index: usize,
		/// Number of steps in the trace
		len: usize,
	},

	/// Options could not be parsed
	#[error("Invalid graph options: {0}")]
	Options(#[from] serde_json::Error),
}

impl TraceError {
	/// Creates a missing parameter error
	pub fn missing(algorithm: &'static str, parameter: &'static str) -> Self {
		Self::MissingParameter {
			algorithm,
			parameter,
		}
	}
}
