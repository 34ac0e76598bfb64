//! Breadth-first and depth-first traversal.
//!
//! Both report a `node-current` the first time a vertex is taken up, an
//! `edge-visit` for each newly discovered neighbor and a `node-complete`
//! once a vertex's edges are exhausted. Unreachable vertices never appear.

use std::collections::VecDeque;

use crate::graph::{Graph, normalize_id};
use crate::trace::{EdgeRef, Step, StepSink};

/// Breadth-first traversal from `start`.
pub fn bfs(graph: &Graph, start: &str, sink: &mut dyn StepSink) {
	let Some(start) = graph.index_of(&normalize_id(start)) else {
		return;
	};

	let mut visited = vec![false; graph.vertex_count()];
	let mut seen: Vec<String> = Vec::new();
	let mut tree: Vec<EdgeRef> = Vec::new();
	let mut queue = VecDeque::from([start]);
	visited[start] = true;
	seen.push(graph.id_at(start).to_string());

	while let Some(u) = queue.pop_front() {
		let id = graph.id_at(u);
		sink.emit(Step::NodeCurrent {
			node_id: id.to_string(),
			highlight_nodes: seen.clone(),
			value: None,
			partition: None,
			message: format!("Dequeued {id}"),
		});

		for (v, _) in graph.neighbor_indices(u) {
			if visited[v] {
				continue;
			}
			visited[v] = true;
			queue.push_back(v);
			let next = graph.id_at(v);
			seen.push(next.to_string());
			tree.push(EdgeRef::new(id, next));
			sink.emit(Step::EdgeVisit {
				edge_from: id.to_string(),
				edge_to: next.to_string(),
				value: None,
				highlight_nodes: seen.clone(),
				highlight_edges: tree.clone(),
				partition: None,
				message: format!("Discovered {next} from {id}, queued"),
			});
		}

		sink.emit(Step::NodeComplete {
			node_id: Some(id.to_string()),
			highlight_nodes: seen.clone(),
			highlight_edges: tree.clone(),
			total_weight: None,
			message: format!("All edges of {id} examined"),
		});
	}
}

/// Depth-first traversal from `start`.
///
/// Neighbors are taken in edge insertion order. The set of neighbors to
/// descend into is fixed when a vertex is entered, so an `edge-visit` is
/// still reported for a neighbor that an earlier branch reached first.
pub fn dfs(graph: &Graph, start: &str, sink: &mut dyn StepSink) {
	let Some(start) = graph.index_of(&normalize_id(start)) else {
		return;
	};
	let mut walk = DepthFirst {
		graph,
		sink,
		visited: vec![false; graph.vertex_count()],
		order: Vec::new(),
		tree: Vec::new(),
	};
	walk.visit(start);
}

struct DepthFirst<'g, 's> {
	graph: &'g Graph,
	sink: &'s mut dyn StepSink,
	visited: Vec<bool>,
	order: Vec<String>,
	tree: Vec<EdgeRef>,
}

impl DepthFirst<'_, '_> {
	fn visit(&mut self, u: usize) {
		let graph = self.graph;
		let id = graph.id_at(u);
		self.visited[u] = true;
		self.order.push(id.to_string());
		self.sink.emit(Step::NodeCurrent {
			node_id: id.to_string(),
			highlight_nodes: self.order.clone(),
			value: None,
			partition: None,
			message: format!("Entered {id}"),
		});

		let pending: Vec<usize> = graph
			.neighbor_indices(u)
			.into_iter()
			.map(|(v, _)| v)
			.filter(|&v| !self.visited[v])
			.collect();

		for v in pending {
			let next = graph.id_at(v);
			let descend = !self.visited[v];
			if descend {
				self.tree.push(EdgeRef::new(id, next));
			}
			self.sink.emit(Step::EdgeVisit {
				edge_from: id.to_string(),
				edge_to: next.to_string(),
				value: None,
				highlight_nodes: self.order.clone(),
				highlight_edges: self.tree.clone(),
				partition: None,
				message: if descend {
					format!("Following {id} -> {next}")
				} else {
					format!("{next} was reached meanwhile, skipping")
				},
			});
			if descend {
				self.visit(v);
			}
		}

		self.sink.emit(Step::NodeComplete {
			node_id: Some(id.to_string()),
			highlight_nodes: self.order.clone(),
			highlight_edges: self.tree.clone(),
			total_weight: None,
			message: format!("Backtracking from {id}"),
		});
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::graph::GraphOptions;
	use crate::trace::{StepKind, Tally, Trace};

	fn current_nodes(trace: &Trace) -> Vec<&str> {
		trace
			.steps()
			.iter()
			.filter(|s| s.kind() == StepKind::NodeCurrent)
			.filter_map(Step::node_id)
			.collect()
	}

	fn edges_of(trace: &Trace) -> Vec<(&str, &str)> {
		trace
			.steps()
			.iter()
			.filter(|s| s.kind() == StepKind::EdgeVisit)
			.filter_map(Step::edge)
			.collect()
	}

	#[test]
	fn test_bfs_sample_order() {
		let g = Graph::sample();
		let trace = Trace::record(|sink| bfs(&g, "a", sink));
		assert_eq!(current_nodes(&trace), vec!["A", "B", "C", "D"]);
		assert_eq!(edges_of(&trace), vec![("A", "B"), ("A", "C"), ("B", "D")]);
		assert_eq!(trace.steps()[0].kind(), StepKind::NodeCurrent);
		assert_eq!(trace.last().map(Step::kind), Some(StepKind::NodeComplete));
	}

	#[test]
	fn test_bfs_step_layout() {
		let g = Graph::sample();
		let trace = Trace::record(|sink| bfs(&g, "A", sink));
		let kinds: Vec<_> = trace.steps().iter().map(Step::kind).collect();
		use StepKind::*;
		assert_eq!(
			kinds,
			vec![
				NodeCurrent, EdgeVisit, EdgeVisit, NodeComplete, // A
				NodeCurrent, EdgeVisit, NodeComplete, // B
				NodeCurrent, NodeComplete, // C
				NodeCurrent, NodeComplete, // D
			]
		);
	}

	#[test]
	fn test_dfs_sample_order() {
		let g = Graph::sample();
		let trace = Trace::record(|sink| dfs(&g, "A", sink));
		assert_eq!(current_nodes(&trace), vec!["A", "B", "D", "C"]);
		// C is pending from A's entry but reached through D first
		assert_eq!(
			edges_of(&trace),
			vec![("A", "B"), ("B", "D"), ("D", "C"), ("A", "C")]
		);
	}

	#[test]
	fn test_directed_skips_unreachable() {
		let mut g = Graph::sample();
		g.set_directed(true);
		let trace = Trace::record(|sink| bfs(&g, "B", sink));
		assert_eq!(current_nodes(&trace), vec!["B", "D"]);
		let trace = Trace::record(|sink| dfs(&g, "C", sink));
		assert_eq!(current_nodes(&trace), vec!["C", "D"]);
	}

	#[test]
	fn test_unknown_start_is_empty() {
		let g = Graph::sample();
		assert!(Trace::record(|sink| bfs(&g, "Z", sink)).is_empty());
		assert!(Trace::record(|sink| dfs(&g, "Z", sink)).is_empty());
	}

	#[test]
	fn test_each_reachable_vertex_current_once() {
		let mut rng = StdRng::seed_from_u64(11);
		for round in 0..25 {
			let mut g = Graph::with_options(GraphOptions::default().seeded(round));
			g.set_directed(round % 2 == 0);
			for _ in 0..rng.gen_range(5..25) {
				let a = format!("V{}", rng.gen_range(0..10));
				let b = format!("V{}", rng.gen_range(0..10));
				g.add_edge(&a, &b, 1.0);
			}
			let start = g.vertices()[0].id.clone();

			let mut reachable = vec![start.clone()];
			let mut i = 0;
			while i < reachable.len() {
				for (v, _) in g.neighbors_of(&reachable[i]) {
					if !reachable.contains(&v.id) {
						reachable.push(v.id.clone());
					}
				}
				i += 1;
			}
			reachable.sort();

			for run in [bfs, dfs] {
				let trace = Trace::record(|sink| run(&g, &start, sink));
				let mut seen: Vec<String> =
					current_nodes(&trace).into_iter().map(String::from).collect();
				seen.sort();
				assert_eq!(seen, reachable);

				let mut tally = Tally::default();
				run(&g, &start, &mut tally);
				assert_eq!(tally.count(StepKind::NodeCurrent), reachable.len());
				assert_eq!(tally.count(StepKind::NodeComplete), reachable.len());
			}
		}
	}
}
