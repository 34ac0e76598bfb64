//! Editable weighted graphs and replayable traces of classic graph algorithms.
//!
//! Build a [`Graph`], pick an [`Algorithm`], and [`run`] it to get a
//! [`Trace`]: the complete ordered list of [`Step`]s the algorithm took.
//! The trace is materialized up front, so a UI can scrub it forwards and
//! backwards without touching the graph again.

// Modules
pub mod algorithms;
mod error;
pub mod graph;
pub mod trace;
pub mod wasm;

pub use algorithms::{Algorithm, RunParams, run};
pub use error::{TraceError, TraceResult};
pub use graph::{Edge, Graph, GraphOptions, Vertex};
pub use trace::{Step, StepKind, StepSink, Trace};

// criterion is only used by the benches
#[cfg(test)]
use criterion as _;
// enables the "js" entropy source for rand
#[cfg(target_arch = "wasm32")]
use getrandom as _;

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
	let _ = console_log::init_with_level(log::Level::Debug);
	console_error_panic_hook::set_once();
	log::info!("Logging initialized");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reruns_are_identical() {
		let g = Graph::sample();
		let params = RunParams::between("A", "D");
		for algorithm in Algorithm::ALL {
			let first = run(&g, algorithm, &params).unwrap();
			let second = run(&g, algorithm, &params).unwrap();
			assert_eq!(first, second, "{algorithm} is not deterministic");
		}
	}
}
