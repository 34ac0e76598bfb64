//! Derived views of a [`Graph`], computed on demand.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Graph;

/// One row of the edge list view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeRow {
	/// Source vertex id.
	pub from: String,
	/// Target vertex id.
	pub to: String,
	/// Edge weight.
	pub weight: f64,
}

/// Matrix, adjacency-list and edge-list views of a graph.
///
/// Matrix rows/columns and adjacency keys follow `ids`, which are sorted
/// lexicographically. Absent edges are `0` in the matrix.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Representations {
	/// Sorted vertex ids.
	pub ids: Vec<String>,
	/// `matrix[i][j]` is the weight from `ids[i]` to `ids[j]`.
	pub matrix: Vec<Vec<f64>>,
	/// Neighbors with weights, per vertex.
	pub adjacency_list: BTreeMap<String, Vec<(String, f64)>>,
	/// Stored edges in insertion order.
	pub edge_list: Vec<EdgeRow>,
}

/// A node as the renderer draws it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub x: f64,
	pub y: f64,
}

/// A link as the renderer draws it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub weight: f64,
	pub directed: bool,
}

/// Positions and links handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl Graph {
	/// Build the tabular views from the current state.
	pub fn representations(&self) -> Representations {
		let mut ids: Vec<String> = self.vertices().iter().map(|v| v.id.clone()).collect();
		ids.sort();
		let slot = |id: &str| ids.binary_search_by(|other| other.as_str().cmp(id)).ok();

		let mut matrix = vec![vec![0.0; ids.len()]; ids.len()];
		for edge in self.edges() {
			if let (Some(i), Some(j)) = (slot(&edge.from), slot(&edge.to)) {
				matrix[i][j] = edge.weight;
				if !self.is_directed() {
					matrix[j][i] = edge.weight;
				}
			}
		}

		let adjacency_list = ids
			.iter()
			.map(|id| {
				let neighbors = self
					.neighbors_of(id)
					.into_iter()
					.map(|(v, w)| (v.id.clone(), w))
					.collect();
				(id.clone(), neighbors)
			})
			.collect();

		let edge_list = self
			.edges()
			.iter()
			.map(|e| EdgeRow {
				from: e.from.clone(),
				to: e.to.clone(),
				weight: e.weight,
			})
			.collect();

		Representations {
			ids,
			matrix,
			adjacency_list,
			edge_list,
		}
	}

	/// Snapshot of vertex positions and edges for drawing.
	pub fn graph_data(&self) -> GraphData {
		GraphData {
			nodes: self
				.vertices()
				.iter()
				.map(|v| GraphNode {
					id: v.id.clone(),
					label: v.label().to_string(),
					x: v.x,
					y: v.y,
				})
				.collect(),
			links: self
				.edges()
				.iter()
				.map(|e| GraphLink {
					source: e.from.clone(),
					target: e.to.clone(),
					weight: e.weight,
					directed: e.directed,
				})
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::GraphOptions;

	#[test]
	fn test_matrix_is_symmetric_when_undirected() {
		let reps = Graph::sample().representations();
		assert_eq!(reps.ids, vec!["A", "B", "C", "D"]);
		assert_eq!(reps.matrix[0][2], 2.0);
		assert_eq!(reps.matrix[2][0], 2.0);
		assert_eq!(reps.matrix[1][2], 0.0);
	}

	#[test]
	fn test_matrix_directed_one_way() {
		let mut g = Graph::sample();
		g.set_directed(true);
		let reps = g.representations();
		assert_eq!(reps.matrix[1][3], 3.0);
		assert_eq!(reps.matrix[3][1], 0.0);
	}

	#[test]
	fn test_ids_sorted_regardless_of_insertion() {
		let mut g = Graph::with_options(GraphOptions::default().seeded(1));
		g.add_edge("z", "m", 1.0);
		g.add_vertex("b", 0.0, 0.0);
		let reps = g.representations();
		assert_eq!(reps.ids, vec!["B", "M", "Z"]);
		assert_eq!(reps.adjacency_list["M"], vec![("Z".to_string(), 1.0)]);
		assert!(reps.adjacency_list["B"].is_empty());
		assert_eq!(reps.edge_list.len(), 1);
	}

	#[test]
	fn test_graph_data_carries_positions() {
		let g = Graph::sample();
		let data = g.graph_data();
		assert_eq!(data.nodes.len(), 4);
		assert_eq!(data.nodes[0].label, "A");
		assert_eq!(data.nodes[0].x, g.vertices()[0].x);
		assert_eq!(data.links[3].source, "C");
		assert_eq!(data.links[3].target, "D");
	}

	#[test]
	fn test_serializes_camel_case() {
		let json = serde_json::to_value(Graph::sample().representations()).unwrap();
		assert!(json.get("adjacencyList").is_some());
		assert!(json.get("edgeList").is_some());
	}
}
