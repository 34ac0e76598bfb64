//! The step record every algorithm emits.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// An edge reference inside a step payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeRef {
	/// Source vertex id.
	pub from: String,
	/// Target vertex id.
	pub to: String,
}

impl EdgeRef {
	/// Reference the edge `from -> to`.
	pub fn new(from: &str, to: &str) -> Self {
		Self {
			from: from.to_string(),
			to: to.to_string(),
		}
	}
}

/// One side of a two-coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	/// Color 0, given to every component's seed vertex.
	Left,
	/// Color 1.
	Right,
}

impl Side {
	/// The opposite side.
	pub fn flip(self) -> Self {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}

	/// `0` for left, `1` for right.
	pub fn as_bit(self) -> u8 {
		match self {
			Side::Left => 0,
			Side::Right => 1,
		}
	}
}

/// Vertex coloring in the order vertices were colored.
///
/// Serializes as an ordered `{ "A": 0, "B": 1 }` object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
	entries: Vec<(String, Side)>,
}

impl Partition {
	/// Record a vertex color. Recoloring replaces the earlier entry in place.
	pub fn assign(&mut self, id: &str, side: Side) {
		match self.entries.iter_mut().find(|(v, _)| v == id) {
			Some(entry) => entry.1 = side,
			None => self.entries.push((id.to_string(), side)),
		}
	}

	/// Color of a vertex, if colored.
	pub fn side_of(&self, id: &str) -> Option<Side> {
		self.entries.iter().find(|(v, _)| v == id).map(|(_, s)| *s)
	}

	/// Vertices on one side, in coloring order.
	pub fn members(&self, side: Side) -> Vec<String> {
		self.entries
			.iter()
			.filter(|(_, s)| *s == side)
			.map(|(v, _)| v.clone())
			.collect()
	}

	/// Number of colored vertices.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when nothing is colored yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for Partition {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (id, side) in &self.entries {
			map.serialize_entry(id, &side.as_bit())?;
		}
		map.end()
	}
}

/// Discriminant of a [`Step`], matching its serialized `type` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
	/// `node-current`
	NodeCurrent,
	/// `node-visit`
	NodeVisit,
	/// `node-complete`
	NodeComplete,
	/// `edge-visit`
	EdgeVisit,
	/// `path-found`
	PathFound,
	/// `partition`
	Partition,
	/// `mst-edge`
	MstEdge,
	/// `flow-update`
	FlowUpdate,
	/// `euler-path`
	EulerPath,
}

impl StepKind {
	/// The serialized tag.
	pub fn as_str(&self) -> &'static str {
		match self {
			StepKind::NodeCurrent => "node-current",
			StepKind::NodeVisit => "node-visit",
			StepKind::NodeComplete => "node-complete",
			StepKind::EdgeVisit => "edge-visit",
			StepKind::PathFound => "path-found",
			StepKind::Partition => "partition",
			StepKind::MstEdge => "mst-edge",
			StepKind::FlowUpdate => "flow-update",
			StepKind::EulerPath => "euler-path",
		}
	}
}

/// One observable event of an algorithm run.
///
/// Steps are plain values; a finished trace never changes. Empty vectors
/// and `None` fields are left out when serialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Step {
	/// The algorithm is now examining `node_id`.
	#[serde(rename_all = "camelCase")]
	NodeCurrent {
		node_id: String,
		highlight_nodes: Vec<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		value: Option<f64>,
		#[serde(skip_serializing_if = "Option::is_none")]
		partition: Option<Partition>,
		message: String,
	},
	/// Vertex processing started.
	#[serde(rename_all = "camelCase")]
	NodeVisit {
		#[serde(skip_serializing_if = "Option::is_none")]
		node_id: Option<String>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_nodes: Vec<String>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_edges: Vec<EdgeRef>,
		#[serde(skip_serializing_if = "Option::is_none")]
		total_weight: Option<f64>,
		message: String,
	},
	/// Vertex processing finished, or a step that changed nothing.
	#[serde(rename_all = "camelCase")]
	NodeComplete {
		#[serde(skip_serializing_if = "Option::is_none")]
		node_id: Option<String>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_nodes: Vec<String>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_edges: Vec<EdgeRef>,
		#[serde(skip_serializing_if = "Option::is_none")]
		total_weight: Option<f64>,
		message: String,
	},
	/// An edge was examined or accepted.
	#[serde(rename_all = "camelCase")]
	EdgeVisit {
		edge_from: String,
		edge_to: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		value: Option<f64>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_nodes: Vec<String>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_edges: Vec<EdgeRef>,
		#[serde(skip_serializing_if = "Option::is_none")]
		partition: Option<Partition>,
		message: String,
	},
	/// Terminal result of a path search. `path` is `None` when unreachable.
	#[serde(rename_all = "camelCase")]
	PathFound {
		#[serde(skip_serializing_if = "Option::is_none")]
		path: Option<Vec<String>>,
		#[serde(skip_serializing_if = "Option::is_none")]
		total_weight: Option<f64>,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_nodes: Vec<String>,
		message: String,
	},
	/// Two-coloring result, or the conflict that ended it.
	#[serde(rename_all = "camelCase")]
	Partition {
		partition: Partition,
		bipartite: bool,
		#[serde(skip_serializing_if = "Vec::is_empty")]
		highlight_nodes: Vec<String>,
		message: String,
	},
	/// Edge accepted into the spanning tree.
	#[serde(rename_all = "camelCase")]
	MstEdge {
		edge_from: String,
		edge_to: String,
		value: f64,
		highlight_nodes: Vec<String>,
		highlight_edges: Vec<EdgeRef>,
		total_weight: f64,
		message: String,
	},
	/// One augmenting path applied.
	#[serde(rename_all = "camelCase")]
	FlowUpdate {
		path: Vec<String>,
		value: f64,
		total_weight: f64,
		message: String,
	},
	/// A vertex appended to the Euler path under construction.
	#[serde(rename_all = "camelCase")]
	EulerPath {
		node_id: String,
		path: Vec<String>,
		message: String,
	},
}

impl Step {
	/// The step's tag.
	pub fn kind(&self) -> StepKind {
		match self {
			Step::NodeCurrent { .. } => StepKind::NodeCurrent,
			Step::NodeVisit { .. } => StepKind::NodeVisit,
			Step::NodeComplete { .. } => StepKind::NodeComplete,
			Step::EdgeVisit { .. } => StepKind::EdgeVisit,
			Step::PathFound { .. } => StepKind::PathFound,
			Step::Partition { .. } => StepKind::Partition,
			Step::MstEdge { .. } => StepKind::MstEdge,
			Step::FlowUpdate { .. } => StepKind::FlowUpdate,
			Step::EulerPath { .. } => StepKind::EulerPath,
		}
	}

	/// Human-readable description.
	pub fn message(&self) -> &str {
		match self {
			Step::NodeCurrent { message, .. }
			| Step::NodeVisit { message, .. }
			| Step::NodeComplete { message, .. }
			| Step::EdgeVisit { message, .. }
			| Step::PathFound { message, .. }
			| Step::Partition { message, .. }
			| Step::MstEdge { message, .. }
			| Step::FlowUpdate { message, .. }
			| Step::EulerPath { message, .. } => message.as_str(),
		}
	}

	/// The vertex the step is about, when there is one.
	pub fn node_id(&self) -> Option<&str> {
		match self {
			Step::NodeCurrent { node_id, .. } | Step::EulerPath { node_id, .. } => {
				Some(node_id.as_str())
			}
			Step::NodeVisit { node_id, .. } | Step::NodeComplete { node_id, .. } => {
				node_id.as_deref()
			}
			_ => None,
		}
	}

	/// The `(from, to)` edge the step is about, when there is one.
	pub fn edge(&self) -> Option<(&str, &str)> {
		match self {
			Step::EdgeVisit {
				edge_from, edge_to, ..
			}
			| Step::MstEdge {
				edge_from, edge_to, ..
			} => Some((edge_from.as_str(), edge_to.as_str())),
			_ => None,
		}
	}

	/// Running or final total carried by the step.
	pub fn total_weight(&self) -> Option<f64> {
		match self {
			Step::NodeVisit { total_weight, .. }
			| Step::NodeComplete { total_weight, .. }
			| Step::PathFound { total_weight, .. } => *total_weight,
			Step::MstEdge { total_weight, .. } | Step::FlowUpdate { total_weight, .. } => {
				Some(*total_weight)
			}
			_ => None,
		}
	}

	/// Shorthand for a `node-complete` step that only reports a total.
	pub(crate) fn summary(total_weight: f64, message: String) -> Self {
		Step::NodeComplete {
			node_id: None,
			highlight_nodes: Vec::new(),
			highlight_edges: Vec::new(),
			total_weight: Some(total_weight),
			message,
		}
	}
}
