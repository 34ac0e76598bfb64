//! Graph construction options.

use serde::Deserialize;

use crate::error::TraceResult;

/// Options a [`Graph`](super::Graph) is created with.
///
/// Deserializes from a camelCase JSON object; every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphOptions {
	/// Whether edges are directed.
	pub directed: bool,
	/// Width of the area auto-created vertices are placed in.
	pub width: f64,
	/// Height of the area auto-created vertices are placed in.
	pub height: f64,
	/// Seed for the placement RNG. `None` seeds from entropy.
	pub seed: Option<u64>,
}

impl Default for GraphOptions {
	fn default() -> Self {
		Self {
			directed: false,
			width: 800.0,
			height: 600.0,
			seed: None,
		}
	}
}

impl GraphOptions {
	/// Parse options from a JSON object such as `{"directed": true, "seed": 7}`.
	pub fn from_json(json: &str) -> TraceResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Same options with a fixed placement seed.
	pub fn seeded(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}
