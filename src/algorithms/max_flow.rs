//! Maximum flow by shortest augmenting paths (Edmonds-Karp).

use std::collections::VecDeque;

use crate::graph::{Graph, normalize_id};
use crate::trace::{EdgeRef, Step, StepSink};

/// Residual capacities between every ordered pair of vertex indices.
///
/// Each stored edge adds its weight to `from -> to` only. Two opposite
/// edges keep separate capacities, each added to the pair's residual.
struct Residual {
	capacity: Vec<Vec<f64>>,
}

impl Residual {
	fn new(graph: &Graph) -> Self {
		let n = graph.vertex_count();
		let mut capacity = vec![vec![0.0; n]; n];
		for edge in graph.edges() {
			let (u, v) = graph.edge_indices(edge);
			capacity[u][v] += edge.weight;
		}
		Self { capacity }
	}

	fn get(&self, u: usize, v: usize) -> f64 {
		self.capacity[u][v]
	}

	fn push(&mut self, u: usize, v: usize, amount: f64) {
		self.capacity[u][v] -= amount;
		self.capacity[v][u] += amount;
	}
}

/// Maximum flow from `source` to `sink_id`, treating weights as capacities.
///
/// Every round runs a breadth-first search over pairs with positive
/// residual capacity, candidates in vertex insertion order, and reports
/// each dequeue and discovery. A found path is saturated by its bottleneck
/// and reported as one `flow-update`. The last step carries the total.
pub fn edmonds_karp(graph: &Graph, source: &str, sink_id: &str, sink: &mut dyn StepSink) {
	let (source_id, target_id) = (normalize_id(source), normalize_id(sink_id));
	let (Some(s), Some(t)) = (graph.index_of(&source_id), graph.index_of(&target_id)) else {
		sink.emit(Step::summary(
			0.0,
			format!("No flow: {source_id} or {target_id} is not in the graph"),
		));
		return;
	};
	if s == t {
		sink.emit(Step::summary(
			0.0,
			format!("No flow: source and sink are both {source_id}"),
		));
		return;
	}

	let n = graph.vertex_count();
	let mut residual = Residual::new(graph);
	let mut total = 0.0;
	let mut round = 0;

	loop {
		round += 1;
		let mut parent: Vec<Option<usize>> = vec![None; n];
		let mut visited = vec![false; n];
		let mut reached: Vec<String> = vec![source_id.clone()];
		let mut queue = VecDeque::from([s]);
		visited[s] = true;

		'search: while let Some(u) = queue.pop_front() {
			let from = graph.id_at(u);
			sink.emit(Step::NodeCurrent {
				node_id: from.to_string(),
				highlight_nodes: reached.clone(),
				value: None,
				partition: None,
				message: format!("Round {round}: exploring from {from}"),
			});
			for v in 0..n {
				let capacity = residual.get(u, v);
				if visited[v] || capacity <= 0.0 {
					continue;
				}
				visited[v] = true;
				parent[v] = Some(u);
				let to = graph.id_at(v);
				reached.push(to.to_string());
				sink.emit(Step::EdgeVisit {
					edge_from: from.to_string(),
					edge_to: to.to_string(),
					value: Some(capacity),
					highlight_nodes: reached.clone(),
					highlight_edges: vec![EdgeRef::new(from, to)],
					partition: None,
					message: format!("Residual {from} -> {to} is {capacity}"),
				});
				if v == t {
					break 'search;
				}
				queue.push_back(v);
			}
		}

		if !visited[t] {
			break;
		}

		let mut hops: Vec<(usize, usize)> = Vec::new();
		let mut v = t;
		while let Some(u) = parent[v] {
			hops.push((u, v));
			v = u;
		}
		hops.reverse();

		let bottleneck = hops
			.iter()
			.map(|&(u, v)| residual.get(u, v))
			.fold(f64::INFINITY, f64::min);
		for &(u, v) in &hops {
			residual.push(u, v, bottleneck);
		}
		total += bottleneck;

		let mut path = vec![source_id.clone()];
		path.extend(hops.iter().map(|&(_, v)| graph.id_at(v).to_string()));
		sink.emit(Step::FlowUpdate {
			message: format!(
				"Augmenting {} by {bottleneck}; flow is now {total}",
				path.join(" -> ")
			),
			path,
			value: bottleneck,
			total_weight: total,
		});
	}

	sink.emit(Step::NodeComplete {
		node_id: Some(target_id.clone()),
		highlight_nodes: Vec::new(),
		highlight_edges: Vec::new(),
		total_weight: Some(total),
		message: format!("No augmenting path left; maximum flow {source_id} -> {target_id} is {total}"),
	});
}
