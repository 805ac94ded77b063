//! Advisory consistency checks between declared node states and prerequisites.
//!
//! Node states are authored elsewhere and may be briefly inconsistent while a
//! tree is being edited. Nothing here changes a graph; findings are returned
//! as [`Violation`]s for display.

use std::collections::HashMap;
use std::fmt;

use super::model::{Graph, NodeState};

/// A detected, non-fatal inconsistency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
	/// `node` is open or done while one of its prerequisites is still locked.
	LockedRequirement {
		node: String,
		state: NodeState,
		requirement: String,
	},
	/// Requirements loop back on themselves; `path` lists the nodes in
	/// requirement order, starting from the first one visited.
	RequirementCycle { path: Vec<String> },
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Violation::LockedRequirement {
				node,
				state,
				requirement,
			} => write!(
				f,
				"`{}` is {} but its requirement `{}` is LOCKED",
				node,
				state.as_str(),
				requirement
			),
			Violation::RequirementCycle { path } => {
				write!(f, "requirement cycle: {}", path.join(" -> "))?;
				if let Some(first) = path.first() {
					write!(f, " -> {}", first)?;
				}
				Ok(())
			}
		}
	}
}

/// Lists every state/prerequisite inconsistency and requirement cycle.
pub fn check_consistency(graph: &Graph) -> Vec<Violation> {
	let states: HashMap<&str, NodeState> = graph
		.nodes
		.iter()
		.map(|n| (n.id.as_str(), n.state))
		.collect();

	let mut violations = Vec::new();
	for node in &graph.nodes {
		if !matches!(node.state, NodeState::Available | NodeState::Completed) {
			continue;
		}
		for req in &node.requirements {
			if states.get(req.as_str()) == Some(&NodeState::Locked) {
				violations.push(Violation::LockedRequirement {
					node: node.id.clone(),
					state: node.state,
					requirement: req.clone(),
				});
			}
		}
	}

	violations.extend(
		find_cycles(graph)
			.into_iter()
			.map(|path| Violation::RequirementCycle { path }),
	);
	violations
}

/// State the prerequisites imply for `id`: AVAILABLE once every requirement
/// is COMPLETED, LOCKED otherwise. `None` for unknown nodes.
pub fn derived_state(graph: &Graph, id: &str) -> Option<NodeState> {
	let node = graph.node(id)?;
	let satisfied = node.requirements.iter().all(|req| {
		graph
			.node(req)
			.is_some_and(|r| r.state == NodeState::Completed)
	});
	Some(if satisfied {
		NodeState::Available
	} else {
		NodeState::Locked
	})
}

/// Nodes still declared LOCKED although every prerequisite is COMPLETED,
/// in storage order. These are the nodes a user could open next once the
/// author unlocks them.
pub fn ready_to_unlock(graph: &Graph) -> Vec<String> {
	graph
		.nodes
		.iter()
		.filter(|n| !n.state.is_reachable())
		.filter(|n| {
			derived_state(graph, &n.id).is_some_and(|d| d != n.state && n.state.can_advance_to(d))
		})
		.map(|n| n.id.clone())
		.collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
	Unvisited,
	OnStack,
	Done,
}

/// Depth-first walk over requirement edges, in storage order. Each back edge
/// yields the cycle it closes.
fn find_cycles(graph: &Graph) -> Vec<Vec<String>> {
	let index: HashMap<&str, usize> = graph
		.nodes
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.as_str(), i))
		.collect();
	let edges: Vec<Vec<usize>> = graph
		.nodes
		.iter()
		.map(|n| {
			n.requirements
				.iter()
				.filter_map(|r| index.get(r.as_str()).copied())
				.collect()
		})
		.collect();

	let mut marks = vec![Mark::Unvisited; graph.nodes.len()];
	let mut cycles = Vec::new();

	for root in 0..graph.nodes.len() {
		if marks[root] != Mark::Unvisited {
			continue;
		}
		// (node, next edge to follow)
		let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
		marks[root] = Mark::OnStack;

		while let Some(top) = stack.last_mut() {
			let node = top.0;
			let Some(&target) = edges[node].get(top.1) else {
				marks[node] = Mark::Done;
				stack.pop();
				continue;
			};
			top.1 += 1;

			match marks[target] {
				Mark::Unvisited => {
					marks[target] = Mark::OnStack;
					stack.push((target, 0));
				}
				Mark::OnStack => {
					let start = stack
						.iter()
						.position(|&(n, _)| n == target)
						.unwrap_or(0);
					cycles.push(
						stack[start..]
							.iter()
							.map(|&(n, _)| graph.nodes[n].id.clone())
							.collect(),
					);
				}
				Mark::Done => {}
			}
		}
	}
	cycles
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::model::Node;

	fn node(id: &str, state: NodeState, requirements: &[&str]) -> Node {
		Node {
			id: id.into(),
			state,
			requirements: requirements.iter().map(|r| r.to_string()).collect(),
			..Default::default()
		}
	}

	fn graph(nodes: Vec<Node>) -> Graph {
		Graph {
			nodes,
			..Default::default()
		}
	}

	#[test]
	fn consistent_tree_has_no_violations() {
		let g = graph(vec![
			node("a", NodeState::Completed, &[]),
			node("b", NodeState::Available, &["a"]),
			node("c", NodeState::Locked, &["b"]),
		]);
		assert!(check_consistency(&g).is_empty());
	}

	#[test]
	fn open_node_behind_locked_requirement_is_flagged_not_changed() {
		let g = graph(vec![
			node("a", NodeState::Locked, &[]),
			node("b", NodeState::Completed, &["a"]),
			node("c", NodeState::InProgress, &["a"]),
		]);
		let violations = check_consistency(&g);

		assert_eq!(
			violations,
			vec![Violation::LockedRequirement {
				node: "b".into(),
				state: NodeState::Completed,
				requirement: "a".into(),
			}]
		);
		assert_eq!(g.node("b").unwrap().state, NodeState::Completed);
	}

	#[test]
	fn two_node_cycle_is_reported_once() {
		let g = graph(vec![
			node("a", NodeState::Locked, &["b"]),
			node("b", NodeState::Locked, &["a"]),
		]);
		let violations = check_consistency(&g);

		assert_eq!(
			violations,
			vec![Violation::RequirementCycle {
				path: vec!["a".into(), "b".into()],
			}]
		);
		assert_eq!(violations[0].to_string(), "requirement cycle: a -> b -> a");
	}

	#[test]
	fn self_requirement_is_a_cycle() {
		let g = graph(vec![node("a", NodeState::Available, &["a"])]);
		assert_eq!(find_cycles(&g), vec![vec!["a".to_string()]]);
	}

	#[test]
	fn diamond_is_not_a_cycle() {
		let g = graph(vec![
			node("root", NodeState::Completed, &[]),
			node("left", NodeState::Completed, &["root"]),
			node("right", NodeState::Available, &["root"]),
			node("top", NodeState::Locked, &["left", "right"]),
		]);
		assert!(find_cycles(&g).is_empty());
	}

	#[test]
	fn derived_state_follows_completed_requirements() {
		let g = graph(vec![
			node("a", NodeState::Completed, &[]),
			node("b", NodeState::InProgress, &[]),
			node("c", NodeState::Locked, &["a"]),
			node("d", NodeState::Available, &["a", "b"]),
		]);
		assert_eq!(derived_state(&g, "a"), Some(NodeState::Available));
		assert_eq!(derived_state(&g, "c"), Some(NodeState::Available));
		assert_eq!(derived_state(&g, "d"), Some(NodeState::Locked));
		assert_eq!(derived_state(&g, "zz"), None);
	}

	#[test]
	fn locked_nodes_with_completed_requirements_are_ready() {
		let g = graph(vec![
			node("a", NodeState::Completed, &[]),
			node("b", NodeState::InProgress, &[]),
			node("c", NodeState::Locked, &["a"]),
			node("d", NodeState::Locked, &["a", "b"]),
			node("e", NodeState::Available, &["a"]),
			node("root", NodeState::Locked, &[]),
		]);
		assert_eq!(ready_to_unlock(&g), ["c", "root"]);
	}
}
