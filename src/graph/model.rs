use std::f64::consts::PI;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::options::GraphOptions;
use super::types::{Edge, Vertex, normalize_id};

/// Weight given to edges when the caller has no better number.
pub const DEFAULT_WEIGHT: f64 = 1.0;

const SAMPLE_RADIUS: f64 = 100.0;

/// A small weighted graph, directed or undirected.
///
/// Vertices and edges keep insertion order; algorithms break ties by it.
/// Undirected graphs store each edge once and every neighbor query treats
/// it as symmetric.
#[derive(Clone, Debug)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
	directed: bool,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl Default for Graph {
	fn default() -> Self {
		Self::with_options(GraphOptions::default())
	}
}

impl Graph {
	/// An empty undirected graph with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// An empty graph configured by `options`.
	pub fn with_options(options: GraphOptions) -> Self {
		let rng = match options.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		Self {
			vertices: Vec::new(),
			edges: Vec::new(),
			directed: options.directed,
			width: options.width,
			height: options.height,
			rng,
		}
	}

	/// The four-vertex sample graph: A-B(1), A-C(2), B-D(3), C-D(1),
	/// laid out on a circle.
	pub fn sample() -> Self {
		let mut graph = Self::with_options(GraphOptions::default().seeded(0));
		let ids = ["A", "B", "C", "D"];
		for (i, id) in ids.iter().enumerate() {
			let (x, y) = graph.circle_position(i, ids.len());
			graph.add_vertex(id, x, y);
		}
		for (from, to, weight) in [("A", "B", 1.0), ("A", "C", 2.0), ("B", "D", 3.0), ("C", "D", 1.0)] {
			graph.add_edge(from, to, weight);
		}
		graph
	}

	fn circle_position(&self, i: usize, n: usize) -> (f64, f64) {
		let angle = (i as f64) * 2.0 * PI / n as f64;
		(
			self.width / 2.0 + SAMPLE_RADIUS * angle.cos(),
			self.height / 2.0 + SAMPLE_RADIUS * angle.sin(),
		)
	}

	fn random_position(&mut self) -> (f64, f64) {
		let (w, h) = (self.width.max(0.0), self.height.max(0.0));
		(self.rng.gen_range(0.0..=w), self.rng.gen_range(0.0..=h))
	}

	/// Whether edges are directed.
	pub fn is_directed(&self) -> bool {
		self.directed
	}

	/// Flip directedness for the whole graph, retagging every edge.
	pub fn set_directed(&mut self, directed: bool) {
		self.directed = directed;
		for edge in &mut self.edges {
			edge.directed = directed;
		}
	}

	/// Vertices in insertion order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of stored edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Look up a vertex by (unnormalized) id.
	pub fn vertex(&self, id: &str) -> Option<&Vertex> {
		let id = normalize_id(id);
		self.vertices.iter().find(|v| v.id == id)
	}

	/// Whether a vertex with this id exists.
	pub fn contains(&self, id: &str) -> bool {
		self.vertex(id).is_some()
	}

	/// The stored edge for the ordered pair `(from, to)`.
	pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
		let (from, to) = (normalize_id(from), normalize_id(to));
		self.edges.iter().find(|e| e.from == from && e.to == to)
	}

	/// Add a vertex. Returns `None` when the id is empty or already taken.
	pub fn add_vertex(&mut self, id: &str, x: f64, y: f64) -> Option<&Vertex> {
		let vertex = Vertex::new(id, x, y);
		if vertex.id.is_empty() {
			debug!("Ignoring vertex with empty id");
			return None;
		}
		if self.index_of(&vertex.id).is_some() {
			debug!("Vertex {} already exists", vertex.id);
			return None;
		}
		self.vertices.push(vertex);
		self.vertices.last()
	}

	/// Remove a vertex and every edge touching it. Returns whether it existed.
	pub fn delete_vertex(&mut self, id: &str) -> bool {
		let id = normalize_id(id);
		let Some(idx) = self.index_of(&id) else {
			return false;
		};
		self.vertices.remove(idx);
		self.edges.retain(|e| !e.touches(&id));
		true
	}

	/// Rename a vertex, rewriting the edges that reference it.
	///
	/// Returns `false` when `old` is unknown or `new` is empty or taken.
	pub fn rename_vertex(&mut self, old: &str, new: &str) -> bool {
		let (old, new) = (normalize_id(old), normalize_id(new));
		let Some(idx) = self.index_of(&old) else {
			return false;
		};
		if old == new {
			return true;
		}
		if new.is_empty() || self.index_of(&new).is_some() {
			debug!("Cannot rename {old} to {new:?}");
			return false;
		}
		self.vertices[idx].id = new.clone();
		for edge in &mut self.edges {
			if edge.from == old {
				edge.from = new.clone();
			}
			if edge.to == old {
				edge.to = new.clone();
			}
		}
		true
	}

	/// Add an edge, creating missing endpoints at a random position.
	///
	/// Re-adding the same ordered pair updates the weight in place.
	/// Returns `None` only when an endpoint id is empty.
	pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Option<&Edge> {
		let (from, to) = (normalize_id(from), normalize_id(to));
		if from.is_empty() || to.is_empty() {
			debug!("Ignoring edge with empty endpoint");
			return None;
		}
		for id in [&from, &to] {
			if self.index_of(id).is_none() {
				let (x, y) = self.random_position();
				self.vertices.push(Vertex {
					id: id.clone(),
					x,
					y,
				});
			}
		}

		let pos = match self.edges.iter().position(|e| e.from == from && e.to == to) {
			Some(pos) => {
				self.edges[pos].weight = weight;
				pos
			}
			None => {
				self.edges.push(Edge {
					from,
					to,
					weight,
					directed: self.directed,
				});
				self.edges.len() - 1
			}
		};
		self.edges.get(pos)
	}

	/// Remove the edge `(from, to)`. In an undirected graph a stored
	/// `(to, from)` edge matches too. Returns whether an edge was removed.
	pub fn delete_edge(&mut self, from: &str, to: &str) -> bool {
		let (from, to) = (normalize_id(from), normalize_id(to));
		let pos = self
			.edges
			.iter()
			.position(|e| e.from == from && e.to == to)
			.or_else(|| {
				(!self.directed)
					.then(|| self.edges.iter().position(|e| e.from == to && e.to == from))
					.flatten()
			});
		match pos {
			Some(pos) => {
				self.edges.remove(pos);
				true
			}
			None => false,
		}
	}

	/// Neighbors of `id` with the connecting weight, in edge insertion order.
	///
	/// Directed graphs follow outgoing edges only. Unknown ids have no
	/// neighbors.
	pub fn neighbors_of(&self, id: &str) -> Vec<(&Vertex, f64)> {
		match self.index_of(&normalize_id(id)) {
			Some(idx) => self
				.neighbor_indices(idx)
				.into_iter()
				.map(|(n, w)| (&self.vertices[n], w))
				.collect(),
			None => Vec::new(),
		}
	}

	/// Position of a normalized id in insertion order.
	pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
		self.vertices.iter().position(|v| v.id == id)
	}

	/// Index of an edge endpoint. Edges always reference live vertices;
	/// anything else is a broken graph.
	pub(crate) fn endpoint_index(&self, id: &str) -> usize {
		match self.index_of(id) {
			Some(idx) => idx,
			None => panic!("edge references missing vertex {id}"),
		}
	}

	/// Endpoint indices of an edge.
	pub(crate) fn edge_indices(&self, edge: &Edge) -> (usize, usize) {
		(self.endpoint_index(&edge.from), self.endpoint_index(&edge.to))
	}

	/// Neighbor indices of the vertex at `idx`, honoring directedness.
	pub(crate) fn neighbor_indices(&self, idx: usize) -> Vec<(usize, f64)> {
		let id = &self.vertices[idx].id;
		self.edges
			.iter()
			.filter_map(|e| {
				if e.from == *id {
					Some((self.endpoint_index(&e.to), e.weight))
				} else if !self.directed && e.to == *id {
					Some((self.endpoint_index(&e.from), e.weight))
				} else {
					None
				}
			})
			.collect()
	}

	/// Id of the vertex at `idx`.
	pub(crate) fn id_at(&self, idx: usize) -> &str {
		&self.vertices[idx].id
	}
}
