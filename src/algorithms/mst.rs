//! Minimum spanning trees: frontier growth (Prim) and sorted edges
//! with union-find (Kruskal).
//!
//! A disconnected graph is not an error. Prim reports the tree of the
//! first vertex's component, Kruskal a spanning forest.

use super::union_find::UnionFind;
use crate::graph::Graph;
use crate::trace::{EdgeRef, Step, StepSink};

/// Grow a tree from the first inserted vertex, always taking the lightest
/// edge that leaves it.
///
/// A candidate is any edge with one endpoint in the tree and one outside,
/// regardless of direction. Candidates are scanned by tree vertex in
/// insertion order, then by edge insertion order; the first of several
/// equally light edges wins. Accepted edges are reported as stored.
pub fn prim(graph: &Graph, sink: &mut dyn StepSink) {
	let n = graph.vertex_count();
	if n == 0 {
		sink.emit(Step::summary(0.0, "Graph is empty; nothing to span".into()));
		return;
	}

	let ends: Vec<(usize, usize)> = graph.edges().iter().map(|e| graph.edge_indices(e)).collect();
	let mut in_tree = vec![false; n];
	in_tree[0] = true;
	let mut nodes = vec![graph.id_at(0).to_string()];
	let mut tree: Vec<EdgeRef> = Vec::new();
	let mut total = 0.0;

	sink.emit(Step::NodeVisit {
		node_id: Some(nodes[0].clone()),
		highlight_nodes: nodes.clone(),
		highlight_edges: Vec::new(),
		total_weight: Some(0.0),
		message: format!("Starting tree at {}", nodes[0]),
	});

	while nodes.len() < n {
		// (edge index, vertex joining the tree)
		let mut best: Option<(usize, usize)> = None;
		for u in (0..n).filter(|&u| in_tree[u]) {
			for (i, &(a, b)) in ends.iter().enumerate() {
				let outside = match (a == u, b == u) {
					(true, false) => b,
					(false, true) => a,
					_ => continue,
				};
				let weight = graph.edges()[i].weight;
				if !in_tree[outside]
					&& best.is_none_or(|(j, _)| weight < graph.edges()[j].weight)
				{
					best = Some((i, outside));
				}
			}
		}
		let Some((i, joined)) = best else {
			break;
		};

		let edge = &graph.edges()[i];
		in_tree[joined] = true;
		total += edge.weight;
		let (from, to, added) = (edge.from.as_str(), edge.to.as_str(), graph.id_at(joined));
		nodes.push(added.to_string());
		tree.push(EdgeRef::new(from, to));
		sink.emit(Step::MstEdge {
			edge_from: from.to_string(),
			edge_to: to.to_string(),
			value: edge.weight,
			highlight_nodes: nodes.clone(),
			highlight_edges: tree.clone(),
			total_weight: total,
			message: format!(
				"Lightest crossing edge {from}-{to} ({}) joins {added}",
				edge.weight
			),
		});
	}

	let message = if nodes.len() < n {
		format!(
			"No edge leaves the tree; {} of {n} vertices spanned, total weight {total}",
			nodes.len()
		)
	} else {
		format!("Spanning tree complete with total weight {total}")
	};
	sink.emit(Step::NodeComplete {
		node_id: None,
		highlight_nodes: nodes,
		highlight_edges: tree,
		total_weight: Some(total),
		message,
	});
}

/// Take edges lightest first, keeping each one that joins two components.
///
/// The sort is stable, so equal weights keep edge insertion order. Every
/// edge gets an `edge-visit`; accepted ones an `mst-edge`, rejected ones a
/// `node-complete` that changes nothing.
pub fn kruskal(graph: &Graph, sink: &mut dyn StepSink) {
	let mut edges: Vec<_> = graph.edges().iter().collect();
	edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

	let mut sets = UnionFind::new(graph.vertex_count());
	let mut nodes: Vec<String> = Vec::new();
	let mut tree: Vec<EdgeRef> = Vec::new();
	let mut total = 0.0;

	for edge in edges {
		let (a, b) = graph.edge_indices(edge);
		let (from, to) = (edge.from.as_str(), edge.to.as_str());
		sink.emit(Step::EdgeVisit {
			edge_from: from.to_string(),
			edge_to: to.to_string(),
			value: Some(edge.weight),
			highlight_nodes: nodes.clone(),
			highlight_edges: tree.clone(),
			partition: None,
			message: format!("Considering {from}-{to} ({})", edge.weight),
		});

		if sets.union(a, b) {
			total += edge.weight;
			for id in [from, to] {
				if !nodes.iter().any(|n| n == id) {
					nodes.push(id.to_string());
				}
			}
			tree.push(EdgeRef::new(from, to));
			sink.emit(Step::MstEdge {
				edge_from: from.to_string(),
				edge_to: to.to_string(),
				value: edge.weight,
				highlight_nodes: nodes.clone(),
				highlight_edges: tree.clone(),
				total_weight: total,
				message: format!("Accepted {from}-{to}; it joins two components"),
			});
		} else {
			sink.emit(Step::NodeComplete {
				node_id: None,
				highlight_nodes: nodes.clone(),
				highlight_edges: tree.clone(),
				total_weight: Some(total),
				message: format!("Rejected {from}-{to}; it would close a cycle"),
			});
		}
	}

	sink.emit(Step::summary(
		total,
		format!("Kruskal finished: {} edges, total weight {total}", tree.len()),
	));
}
