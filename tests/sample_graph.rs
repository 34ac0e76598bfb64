//! End-to-end checks on the four-vertex sample graph through `run`.

use graph_trace::trace::Side;
use graph_trace::{Algorithm, Graph, GraphOptions, RunParams, Step, StepKind, Trace, run};

fn trace_of(graph: &Graph, algorithm: Algorithm, params: RunParams) -> Trace {
	run(graph, algorithm, &params).unwrap()
}

fn final_total(trace: &Trace) -> Option<f64> {
	trace.last().and_then(Step::total_weight)
}

fn mst_edges(trace: &Trace) -> Vec<(String, String)> {
	let mut edges: Vec<(String, String)> = trace
		.steps()
		.iter()
		.filter(|s| s.kind() == StepKind::MstEdge)
		.filter_map(Step::edge)
		.map(|(a, b)| if a < b { (a, b) } else { (b, a) })
		.map(|(a, b)| (a.to_string(), b.to_string()))
		.collect();
	edges.sort();
	edges
}

#[test]
fn normalization_is_idempotent() {
	let mut g = Graph::new();
	assert!(g.add_vertex("a", 0.0, 0.0).is_some());
	assert!(g.add_vertex("A", 1.0, 1.0).is_none());
	assert_eq!(g.vertex_count(), 1);
	assert_eq!(g.vertices()[0].label(), "A");
}

#[test]
fn shortest_path_goes_through_c() {
	let g = Graph::sample();
	let trace = trace_of(&g, Algorithm::Dijkstra, RunParams::between("A", "D"));
	match trace.last() {
		Some(Step::PathFound {
			path: Some(path),
			total_weight,
			..
		}) => {
			assert_eq!(path, &vec!["A", "C", "D"]);
			assert_eq!(*total_weight, Some(3.0));
		}
		other => panic!("expected a path, got {other:?}"),
	}
}

#[test]
fn spanning_trees_agree() {
	let g = Graph::sample();
	let prim = trace_of(&g, Algorithm::Prim, RunParams::default());
	let kruskal = trace_of(&g, Algorithm::Kruskal, RunParams::default());
	assert_eq!(final_total(&prim), Some(4.0));
	assert_eq!(final_total(&kruskal), Some(4.0));

	let expected = vec![
		("A".to_string(), "B".to_string()),
		("A".to_string(), "C".to_string()),
		("C".to_string(), "D".to_string()),
	];
	assert_eq!(mst_edges(&prim), expected);
	assert_eq!(mst_edges(&kruskal), expected);
}

#[test]
fn directed_max_flow_is_two() {
	let mut g = Graph::sample();
	g.set_directed(true);
	let trace = trace_of(&g, Algorithm::MaxFlow, RunParams::between("A", "D"));
	assert_eq!(final_total(&trace), Some(2.0));
	let rounds = trace
		.steps()
		.iter()
		.filter(|s| s.kind() == StepKind::FlowUpdate)
		.count();
	assert_eq!(rounds, 2);
}

#[test]
fn square_is_bipartite_until_a_chord() {
	let mut g = Graph::with_options(GraphOptions::default().seeded(12));
	for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")] {
		g.add_edge(a, b, 1.0);
	}
	let trace = trace_of(&g, Algorithm::Bipartite, RunParams::default());
	match trace.last() {
		Some(Step::Partition {
			partition,
			bipartite: true,
			..
		}) => {
			assert_eq!(partition.members(Side::Left).len(), 2);
			assert_eq!(partition.members(Side::Right).len(), 2);
		}
		other => panic!("expected bipartite result, got {other:?}"),
	}

	g.add_edge("A", "C", 1.0);
	let trace = trace_of(&g, Algorithm::Bipartite, RunParams::default());
	assert!(matches!(
		trace.last(),
		Some(Step::Partition {
			bipartite: false,
			..
		})
	));
}

#[test]
fn euler_circuit_uses_every_edge() {
	let g = Graph::sample();
	for algorithm in [Algorithm::Euler, Algorithm::Fleury] {
		let trace = trace_of(&g, algorithm, RunParams::default());
		let consumed = trace
			.steps()
			.iter()
			.filter(|s| s.kind() == StepKind::EdgeVisit)
			.count();
		assert_eq!(consumed, g.edge_count());
		match trace.last() {
			Some(Step::PathFound { path: Some(p), .. }) => assert_eq!(p.len(), 5),
			other => panic!("expected euler path, got {other:?}"),
		}
	}
}

#[test]
fn traversals_visit_each_vertex_once() {
	let g = Graph::sample();
	for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
		for start in ["A", "B", "C", "D"] {
			let trace = trace_of(&g, algorithm, RunParams::start_at(start));
			let mut visited: Vec<&str> = trace
				.steps()
				.iter()
				.filter(|s| s.kind() == StepKind::NodeCurrent)
				.filter_map(Step::node_id)
				.collect();
			assert_eq!(visited[0], start);
			visited.sort();
			assert_eq!(visited, vec!["A", "B", "C", "D"]);
		}
	}
}

#[test]
fn trace_can_be_scrubbed_both_ways() {
	let g = Graph::sample();
	let mut trace = trace_of(&g, Algorithm::Kruskal, RunParams::default());
	let len = trace.len();
	while trace.step_forward().is_some() {}
	assert_eq!(trace.position(), len);
	assert_eq!(trace.current(), trace.last());

	trace.jump_to(2).unwrap();
	assert_eq!(trace.current().map(Step::kind), Some(StepKind::MstEdge));
	trace.step_back();
	assert_eq!(trace.current().map(Step::kind), Some(StepKind::EdgeVisit));
	assert!(trace.jump_to(len + 1).is_err());
}
