//! Browser-facing handle around a [`Graph`].
//!
//! Structured results cross the boundary as JSON strings so the UI side
//! only needs `JSON.parse`.

use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::algorithms::{self, Algorithm, RunParams};
use crate::graph::{DEFAULT_WEIGHT, Graph, GraphOptions};

/// One editable graph owned by the UI.
#[wasm_bindgen]
pub struct GraphHandle {
	graph: Graph,
}

#[wasm_bindgen]
impl GraphHandle {
	/// Create a graph from a JSON options object; an empty string means
	/// defaults.
	#[wasm_bindgen(constructor)]
	pub fn new(options: &str) -> Result<GraphHandle, String> {
		let options = if options.trim().is_empty() {
			GraphOptions::default()
		} else {
			GraphOptions::from_json(options).map_err(|e| e.to_string())?
		};
		Ok(Self {
			graph: Graph::with_options(options),
		})
	}

	/// The four-vertex sample graph.
	pub fn sample() -> GraphHandle {
		Self {
			graph: Graph::sample(),
		}
	}

	/// Add a vertex; `false` if the id is empty or taken.
	#[wasm_bindgen(js_name = addVertex)]
	pub fn add_vertex(&mut self, id: &str, x: f64, y: f64) -> bool {
		self.graph.add_vertex(id, x, y).is_some()
	}

	/// Remove a vertex and its edges.
	#[wasm_bindgen(js_name = deleteVertex)]
	pub fn delete_vertex(&mut self, id: &str) -> bool {
		self.graph.delete_vertex(id)
	}

	/// Rename a vertex; `false` on collision.
	#[wasm_bindgen(js_name = renameVertex)]
	pub fn rename_vertex(&mut self, old: &str, new: &str) -> bool {
		self.graph.rename_vertex(old, new)
	}

	/// Add or reweight an edge. A missing weight means the default of 1.
	#[wasm_bindgen(js_name = addEdge)]
	pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<f64>) -> bool {
		self.graph
			.add_edge(from, to, weight.unwrap_or(DEFAULT_WEIGHT))
			.is_some()
	}

	/// Remove an edge.
	#[wasm_bindgen(js_name = deleteEdge)]
	pub fn delete_edge(&mut self, from: &str, to: &str) -> bool {
		self.graph.delete_edge(from, to)
	}

	/// Switch the whole graph between directed and undirected.
	#[wasm_bindgen(js_name = setDirected)]
	pub fn set_directed(&mut self, directed: bool) {
		self.graph.set_directed(directed);
	}

	/// Matrix, adjacency list and edge list as JSON.
	#[wasm_bindgen(js_name = representations)]
	pub fn representations_json(&self) -> Result<String, String> {
		serde_json::to_string(&self.graph.representations()).map_err(|e| e.to_string())
	}

	/// Node positions and links for drawing, as JSON.
	#[wasm_bindgen(js_name = graphData)]
	pub fn graph_data_json(&self) -> Result<String, String> {
		serde_json::to_string(&self.graph.graph_data()).map_err(|e| e.to_string())
	}

	/// Selectable algorithms as a JSON array of
	/// `{ id, name, needsStart, needsEnd }`, in menu order.
	pub fn algorithms() -> Result<String, String> {
		let entries: Vec<_> = Algorithm::ALL
			.iter()
			.map(|a| {
				json!({
					"id": a.as_str(),
					"name": a.display_name(),
					"needsStart": a.needs_start(),
					"needsEnd": a.needs_end(),
				})
			})
			.collect();
		serde_json::to_string(&entries).map_err(|e| e.to_string())
	}

	/// Run an algorithm and return every step as a JSON array.
	pub fn run(
		&self,
		algorithm: &str,
		start: Option<String>,
		end: Option<String>,
	) -> Result<String, String> {
		let algorithm = algorithm
			.parse::<Algorithm>()
			.map_err(|e| e.to_string())?;
		let trace = algorithms::run(&self.graph, algorithm, &RunParams { start, end })
			.map_err(|e| e.to_string())?;
		serde_json::to_string(trace.steps()).map_err(|e| e.to_string())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn test_mutations_through_handle() {
		let mut handle = GraphHandle::new(r#"{"seed": 1}"#).unwrap();
		assert!(handle.add_vertex("a", 1.0, 2.0));
		assert!(!handle.add_vertex("A", 0.0, 0.0));
		assert!(handle.add_edge("a", "b", None));
		assert_eq!(handle.graph.edge("A", "B").map(|e| e.weight), Some(1.0));
		assert!(handle.rename_vertex("b", "c"));
		assert!(handle.delete_edge("c", "a"));
		assert!(handle.delete_vertex("c"));
	}

	#[test]
	fn test_bad_options_are_reported() {
		assert!(GraphHandle::new("not json").is_err());
		assert!(GraphHandle::new("").is_ok());
	}

	#[test]
	fn test_run_returns_tagged_steps() {
		let handle = GraphHandle::sample();
		let json = handle
			.run("dijkstra", Some("a".into()), Some("d".into()))
			.unwrap();
		let steps: Vec<Value> = serde_json::from_str(&json).unwrap();
		let last = steps.last().unwrap();
		assert_eq!(last["type"], "path-found");
		assert_eq!(last["totalWeight"], 3.0);
		assert_eq!(last["path"], serde_json::json!(["A", "C", "D"]));
	}

	#[test]
	fn test_run_errors_are_strings() {
		let handle = GraphHandle::sample();
		let err = handle.run("bogus", None, None).unwrap_err();
		assert_eq!(err, "Unknown algorithm: bogus");
		let err = handle.run("bfs", None, None).unwrap_err();
		assert!(err.contains("start"));
	}

	#[test]
	fn test_algorithm_menu() {
		let menu: Vec<Value> = serde_json::from_str(&GraphHandle::algorithms().unwrap()).unwrap();
		assert_eq!(menu.len(), Algorithm::ALL.len());
		let flow = menu.iter().find(|m| m["id"] == "max-flow").unwrap();
		assert_eq!(flow["name"], "Edmonds-Karp maximum flow");
		assert_eq!(flow["needsStart"], true);
		assert_eq!(flow["needsEnd"], true);
		let prim = menu.iter().find(|m| m["id"] == "prim").unwrap();
		assert_eq!(prim["needsStart"], false);
	}

	#[test]
	fn test_views_as_json() {
		let handle = GraphHandle::sample();
		let reps: Value = serde_json::from_str(&handle.representations_json().unwrap()).unwrap();
		assert_eq!(reps["ids"], serde_json::json!(["A", "B", "C", "D"]));
		let data: Value = serde_json::from_str(&handle.graph_data_json().unwrap()).unwrap();
		assert_eq!(data["links"].as_array().map(Vec::len), Some(4));
	}
}
