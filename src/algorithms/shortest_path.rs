//! Single-pair shortest path by repeated minimum extraction.
//!
//! Weights must be non-negative; negative weights give unspecified
//! distances.

use crate::graph::{Graph, normalize_id};
use crate::trace::{EdgeRef, Step, StepSink};

/// Dijkstra from `start` to `end`.
///
/// The unvisited vertex with the smallest distance is taken next; ties go
/// to the vertex inserted first. The loop covers every reachable vertex,
/// then a single `path-found` step reports the route or its absence.
pub fn dijkstra(graph: &Graph, start: &str, end: &str, sink: &mut dyn StepSink) {
	let (start, end) = (normalize_id(start), normalize_id(end));
	let n = graph.vertex_count();
	let mut dist = vec![f64::INFINITY; n];
	let mut prev: Vec<Option<usize>> = vec![None; n];
	let mut visited = vec![false; n];
	let mut settled: Vec<String> = Vec::new();

	let source = graph.index_of(&start);
	if let Some(s) = source {
		dist[s] = 0.0;
	}

	loop {
		let mut next: Option<usize> = None;
		for i in 0..n {
			if !visited[i] && next.is_none_or(|best| dist[i] < dist[best]) {
				next = Some(i);
			}
		}
		let Some(u) = next.filter(|&u| dist[u].is_finite()) else {
			break;
		};

		visited[u] = true;
		let id = graph.id_at(u);
		settled.push(id.to_string());
		sink.emit(Step::NodeCurrent {
			node_id: id.to_string(),
			highlight_nodes: settled.clone(),
			value: Some(dist[u]),
			partition: None,
			message: format!("Closest unvisited vertex is {id} at distance {}", dist[u]),
		});

		for (v, weight) in graph.neighbor_indices(u) {
			let candidate = dist[u] + weight;
			if candidate < dist[v] {
				dist[v] = candidate;
				prev[v] = Some(u);
				let to = graph.id_at(v);
				sink.emit(Step::EdgeVisit {
					edge_from: id.to_string(),
					edge_to: to.to_string(),
					value: Some(candidate),
					highlight_nodes: settled.clone(),
					highlight_edges: vec![EdgeRef::new(id, to)],
					partition: None,
					message: format!("Distance to {to} improved to {candidate} via {id}"),
				});
			}
		}
	}

	let target = graph.index_of(&end);
	let mut path: Vec<String> = Vec::new();
	let mut cursor = target;
	while let Some(i) = cursor {
		path.push(graph.id_at(i).to_string());
		cursor = prev[i];
	}
	path.reverse();

	let reached = source.is_some() && path.first() == Some(&start);
	match target {
		Some(t) if reached => sink.emit(Step::PathFound {
			highlight_nodes: path.clone(),
			message: format!("Shortest path {} with total weight {}", path.join(" -> "), dist[t]),
			path: Some(path),
			total_weight: Some(dist[t]),
		}),
		_ => sink.emit(Step::PathFound {
			path: None,
			total_weight: None,
			highlight_nodes: Vec::new(),
			message: format!("{end} is unreachable from {start}"),
		}),
	}
}
