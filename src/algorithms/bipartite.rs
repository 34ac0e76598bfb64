//! Two-coloring check.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::trace::{EdgeRef, Partition, Side, Step, StepSink};

/// Breadth-first two-coloring over every component.
///
/// Components are seeded in vertex insertion order. The first edge whose
/// endpoints share a color ends the whole check with a non-bipartite
/// `partition` step; otherwise one final `partition` step lists both
/// color classes.
pub fn bipartite(graph: &Graph, sink: &mut dyn StepSink) {
	let n = graph.vertex_count();
	let mut color: Vec<Option<Side>> = vec![None; n];
	let mut partition = Partition::default();

	for seed in 0..n {
		if color[seed].is_some() {
			continue;
		}
		color[seed] = Some(Side::Left);
		partition.assign(graph.id_at(seed), Side::Left);
		let mut queue = VecDeque::from([(seed, Side::Left)]);

		while let Some((u, side)) = queue.pop_front() {
			let id = graph.id_at(u);
			sink.emit(Step::NodeCurrent {
				node_id: id.to_string(),
				highlight_nodes: vec![id.to_string()],
				value: Some(f64::from(side.as_bit())),
				partition: Some(partition.clone()),
				message: format!("Coloring neighbors of {id} (color {})", side.as_bit()),
			});

			for (v, _) in graph.neighbor_indices(u) {
				let other = graph.id_at(v);
				match color[v] {
					None => {
						let flipped = side.flip();
						color[v] = Some(flipped);
						partition.assign(other, flipped);
						queue.push_back((v, flipped));
						sink.emit(Step::EdgeVisit {
							edge_from: id.to_string(),
							edge_to: other.to_string(),
							value: Some(f64::from(flipped.as_bit())),
							highlight_nodes: vec![id.to_string(), other.to_string()],
							highlight_edges: vec![EdgeRef::new(id, other)],
							partition: Some(partition.clone()),
							message: format!("Colored {other} with {}", flipped.as_bit()),
						});
					}
					Some(existing) if existing == side => {
						sink.emit(Step::Partition {
							partition: partition.clone(),
							bipartite: false,
							highlight_nodes: vec![id.to_string(), other.to_string()],
							message: format!(
								"{id} and {other} are adjacent with the same color; not bipartite"
							),
						});
						return;
					}
					Some(_) => {}
				}
			}
		}
	}

	let (left, right) = (partition.members(Side::Left), partition.members(Side::Right));
	sink.emit(Step::Partition {
		message: format!(
			"Graph is bipartite: {{{}}} and {{{}}}",
			left.join(", "),
			right.join(", ")
		),
		partition,
		bipartite: true,
		highlight_nodes: Vec::new(),
	});
}
