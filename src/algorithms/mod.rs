//! Graph algorithms expressed as step producers.
//!
//! Every producer reads the graph, pushes [`Step`](crate::trace::Step)s into
//! a sink and returns once it has nothing left to report. [`run`] is the
//! checked front door that validates parameters and materializes a
//! [`Trace`].

mod bipartite;
mod euler;
mod max_flow;
mod mst;
mod shortest_path;
mod traversal;
mod union_find;

use std::fmt;
use std::str::FromStr;

use log::{info, warn};

pub use bipartite::bipartite;
pub use euler::{fleury, hierholzer};
pub use max_flow::edmonds_karp;
pub use mst::{kruskal, prim};
pub use shortest_path::dijkstra;
pub use traversal::{bfs, dfs};
pub use union_find::UnionFind;

use crate::error::{TraceError, TraceResult};
use crate::graph::{Graph, normalize_id};
use crate::trace::Trace;

/// The algorithms a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Breadth-first traversal
	Bfs,
	/// Depth-first traversal
	Dfs,
	/// Weighted single-pair shortest path
	Dijkstra,
	/// Two-coloring check
	Bipartite,
	/// Spanning tree grown from the first vertex
	Prim,
	/// Spanning tree from sorted edges
	Kruskal,
	/// Augmenting-path maximum flow
	MaxFlow,
	/// Stack-based Euler path or circuit
	Euler,
	/// Bridge-avoiding Euler variant; runs the same construction as `Euler`.
	Fleury,
}

impl Algorithm {
	/// Every algorithm, in selector order.
	pub const ALL: [Algorithm; 9] = [
		Algorithm::Bfs,
		Algorithm::Dfs,
		Algorithm::Dijkstra,
		Algorithm::Bipartite,
		Algorithm::Prim,
		Algorithm::Kruskal,
		Algorithm::MaxFlow,
		Algorithm::Euler,
		Algorithm::Fleury,
	];

	/// Stable selector id.
	pub fn as_str(&self) -> &'static str {
		match self {
			Algorithm::Bfs => "bfs",
			Algorithm::Dfs => "dfs",
			Algorithm::Dijkstra => "dijkstra",
			Algorithm::Bipartite => "bipartite",
			Algorithm::Prim => "prim",
			Algorithm::Kruskal => "kruskal",
			Algorithm::MaxFlow => "max-flow",
			Algorithm::Euler => "euler",
			Algorithm::Fleury => "fleury",
		}
	}

	/// Name for menus.
	pub fn display_name(&self) -> &'static str {
		match self {
			Algorithm::Bfs => "Breadth-first search",
			Algorithm::Dfs => "Depth-first search",
			Algorithm::Dijkstra => "Dijkstra shortest path",
			Algorithm::Bipartite => "Bipartite check",
			Algorithm::Prim => "Prim minimum spanning tree",
			Algorithm::Kruskal => "Kruskal minimum spanning tree",
			Algorithm::MaxFlow => "Edmonds-Karp maximum flow",
			Algorithm::Euler => "Hierholzer Euler path",
			Algorithm::Fleury => "Fleury Euler path",
		}
	}

	/// Whether a start (or source) vertex is required.
	pub fn needs_start(&self) -> bool {
		matches!(
			self,
			Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra | Algorithm::MaxFlow
		)
	}

	/// Whether an end (or sink) vertex is required.
	pub fn needs_end(&self) -> bool {
		matches!(self, Algorithm::Dijkstra | Algorithm::MaxFlow)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Algorithm {
	type Err = TraceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
		Algorithm::ALL
			.into_iter()
			.find(|a| a.as_str() == wanted)
			.ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
	}
}

/// Start and end vertices for a run. Unused fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunParams {
	/// Start vertex, or flow source.
	pub start: Option<String>,
	/// End vertex, or flow sink.
	pub end: Option<String>,
}

impl RunParams {
	/// Params with only a start vertex.
	pub fn start_at(start: &str) -> Self {
		Self {
			start: Some(start.to_string()),
			end: None,
		}
	}

	/// Params with a start and an end vertex.
	pub fn between(start: &str, end: &str) -> Self {
		Self {
			start: Some(start.to_string()),
			end: Some(end.to_string()),
		}
	}
}

fn required(
	graph: &Graph,
	algorithm: Algorithm,
	value: Option<&str>,
	parameter: &'static str,
) -> TraceResult<String> {
	let id = value
		.map(normalize_id)
		.filter(|id| !id.is_empty())
		.ok_or_else(|| TraceError::missing(algorithm.as_str(), parameter))?;
	if !graph.contains(&id) {
		return Err(TraceError::UnknownVertex(id));
	}
	Ok(id)
}

fn validate(
	graph: &Graph,
	algorithm: Algorithm,
	params: &RunParams,
) -> TraceResult<(String, String)> {
	let start = if algorithm.needs_start() {
		required(graph, algorithm, params.start.as_deref(), "start")?
	} else {
		String::new()
	};
	let end = if algorithm.needs_end() {
		required(graph, algorithm, params.end.as_deref(), "end")?
	} else {
		String::new()
	};
	if algorithm == Algorithm::MaxFlow && start == end {
		return Err(TraceError::SameEndpoints {
			algorithm: algorithm.as_str(),
			vertex: start,
		});
	}
	Ok((start, end))
}

/// Validate `params`, run `algorithm` to completion and return its trace.
pub fn run(graph: &Graph, algorithm: Algorithm, params: &RunParams) -> TraceResult<Trace> {
	let (start, end) = validate(graph, algorithm, params).inspect_err(|err| {
		warn!("Rejected {algorithm} run: {err}");
	})?;

	let trace = Trace::record(|sink| match algorithm {
		Algorithm::Bfs => bfs(graph, &start, sink),
		Algorithm::Dfs => dfs(graph, &start, sink),
		Algorithm::Dijkstra => dijkstra(graph, &start, &end, sink),
		Algorithm::Bipartite => bipartite(graph, sink),
		Algorithm::Prim => prim(graph, sink),
		Algorithm::Kruskal => kruskal(graph, sink),
		Algorithm::MaxFlow => edmonds_karp(graph, &start, &end, sink),
		Algorithm::Euler => hierholzer(graph, sink),
		Algorithm::Fleury => fleury(graph, sink),
	});

	info!(
		"Materialized {algorithm} trace: {} steps over {} vertices, {} edges",
		trace.len(),
		graph.vertex_count(),
		graph.edge_count()
	);
	Ok(trace)
}
