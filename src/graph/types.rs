use serde::Serialize;

/// Trim and uppercase an identifier. Every id argument goes through this
/// before it touches the graph.
pub fn normalize_id(id: &str) -> String {
	id.trim().to_uppercase()
}

/// A vertex with its display position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vertex {
	/// Normalized identifier, unique within a graph.
	pub id: String,
	/// Horizontal position, only meaningful to a renderer.
	pub x: f64,
	/// Vertical position, only meaningful to a renderer.
	pub y: f64,
}

impl Vertex {
	/// Create a vertex, normalizing the identifier.
	pub fn new(id: &str, x: f64, y: f64) -> Self {
		Self {
			id: normalize_id(id),
			x,
			y,
		}
	}

	/// Display label; always the normalized identifier.
	pub fn label(&self) -> &str {
		&self.id
	}
}

/// A weighted edge between two vertex identifiers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
	/// Source vertex id.
	pub from: String,
	/// Target vertex id.
	pub to: String,
	/// Distance or capacity, depending on the algorithm.
	pub weight: f64,
	/// Copied from the owning graph; retagged when the graph flips.
	pub directed: bool,
}

impl Edge {
	/// True when `id` is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.from == id || self.to == id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_id() {
		assert_eq!(normalize_id("  a "), "A");
		assert_eq!(normalize_id("node1"), "NODE1");
		assert_eq!(normalize_id("   "), "");
	}

	#[test]
	fn test_vertex_label_is_normalized_id() {
		let v = Vertex::new(" b ", 1.0, 2.0);
		assert_eq!(v.id, "B");
		assert_eq!(v.label(), "B");
	}

	#[test]
	fn test_edge_touches_either_endpoint() {
		let e = Edge {
			from: "A".into(),
			to: "B".into(),
			weight: 1.0,
			directed: false,
		};
		assert!(e.touches("A"));
		assert!(e.touches("B"));
		assert!(!e.touches("C"));
	}
}
