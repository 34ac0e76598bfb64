//! Eulerian path and circuit construction (Hierholzer).
//!
//! Nothing checks that the graph is connected or has at most two odd
//! vertices; other inputs yield a partial path.

use crate::graph::Graph;
use crate::trace::{EdgeRef, Step, StepSink};

/// Stack-based edge consumption.
///
/// Each edge adds one to its `from` vertex's degree, and one to its `to`
/// vertex's degree only when the graph is undirected. The walk starts at
/// the first odd-degree vertex, or the first vertex when all are even.
pub fn hierholzer(graph: &Graph, sink: &mut dyn StepSink) {
	let n = graph.vertex_count();
	if n == 0 {
		return;
	}

	let ends: Vec<(usize, usize)> = graph.edges().iter().map(|e| graph.edge_indices(e)).collect();
	let mut degree = vec![0usize; n];
	for &(from, to) in &ends {
		degree[from] += 1;
		if !graph.is_directed() {
			degree[to] += 1;
		}
	}
	let start = (0..n).find(|&i| degree[i] % 2 == 1).unwrap_or(0);

	let mut used = vec![false; ends.len()];
	let mut stack = vec![start];
	let mut path: Vec<String> = Vec::new();
	let mut walked: Vec<EdgeRef> = Vec::new();

	while let Some(&top) = stack.last() {
		let id = graph.id_at(top);
		sink.emit(Step::NodeCurrent {
			node_id: id.to_string(),
			highlight_nodes: stack.iter().map(|&i| graph.id_at(i).to_string()).collect(),
			value: None,
			partition: None,
			message: format!("Top of stack is {id}"),
		});

		let unused = ends.iter().enumerate().find_map(|(i, &(from, to))| {
			if used[i] {
				None
			} else if from == top {
				Some((i, to))
			} else if !graph.is_directed() && to == top {
				Some((i, from))
			} else {
				None
			}
		});

		match unused {
			Some((i, next)) => {
				used[i] = true;
				stack.push(next);
				let to = graph.id_at(next);
				walked.push(EdgeRef::new(id, to));
				sink.emit(Step::EdgeVisit {
					edge_from: id.to_string(),
					edge_to: to.to_string(),
					value: None,
					highlight_nodes: Vec::new(),
					highlight_edges: walked.clone(),
					partition: None,
					message: format!("Used edge {id}-{to}, pushed {to}"),
				});
			}
			None => {
				stack.pop();
				path.push(id.to_string());
				sink.emit(Step::EulerPath {
					node_id: id.to_string(),
					path: path.clone(),
					message: format!("{id} has no unused edges; appended to path"),
				});
			}
		}
	}

	path.reverse();
	let closed = path.len() > 1 && path.first() == path.last();
	sink.emit(Step::PathFound {
		highlight_nodes: path.clone(),
		message: format!(
			"Euler {} {}",
			if closed { "circuit" } else { "path" },
			path.join(" -> ")
		),
		path: Some(path),
		total_weight: None,
	});
}

/// Bridge-avoiding construction. There is no bridge detection; this runs
/// the same stack construction as [`hierholzer`].
pub fn fleury(graph: &Graph, sink: &mut dyn StepSink) {
	hierholzer(graph, sink);
}
