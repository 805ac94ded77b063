//! Demo tree shown before any course is loaded.

use super::model::{
	Connection, ConnectionKind, ConnectionStyle, Graph, Group, LocalizedText, Metadata, Node,
	NodeKind, NodeShape, NodeState, Position,
};

fn node(
	id: &str,
	title: &str,
	kind: NodeKind,
	shape: NodeShape,
	(x, y): (f64, f64),
	requirements: &[&str],
	state: NodeState,
) -> Node {
	Node {
		id: id.to_string(),
		title: LocalizedText::single(Metadata::DEFAULT_LANGUAGE, title),
		description: LocalizedText::new(),
		kind,
		position: Position::new(x, y),
		shape,
		content_id: Some(format!("lesson-{id}")),
		requirements: requirements.iter().map(|r| r.to_string()).collect(),
		state,
	}
}

fn connection(from: &str, to: &str, kind: ConnectionKind, style: ConnectionStyle) -> Connection {
	Connection {
		id: format!("{from}->{to}"),
		from: from.to_string(),
		to: to.to_string(),
		kind,
		style,
		label: None,
	}
}

/// A small programming course exercising every shape and edge style.
pub fn sample_tree() -> Graph {
	use ConnectionKind::*;
	use ConnectionStyle::*;

	Graph {
		id: "sample".into(),
		version: 1,
		course_id: "sample-course".into(),
		created_at: None,
		updated_at: None,
		nodes: vec![
			node("basics", "Basics", NodeKind::Module, NodeShape::Circular, (120.0, 300.0), &[], NodeState::Completed),
			node("ownership", "Ownership", NodeKind::Skill, NodeShape::Hexagon, (300.0, 200.0), &["basics"], NodeState::InProgress),
			node("traits", "Traits", NodeKind::Topic, NodeShape::Square, (300.0, 400.0), &["basics"], NodeState::Available),
			node("lifetimes", "Lifetimes", NodeKind::Skill, NodeShape::Hexagon, (480.0, 200.0), &["ownership"], NodeState::Locked),
			node("generics", "Generics", NodeKind::Topic, NodeShape::Square, (480.0, 400.0), &["traits"], NodeState::Locked),
			node("style-guide", "Style guide", NodeKind::Article, NodeShape::Default, (660.0, 300.0), &[], NodeState::Available),
		],
		connections: vec![
			connection("basics", "ownership", Required, SolidArrow),
			connection("basics", "traits", Required, SolidArrow),
			connection("ownership", "lifetimes", Required, SolidArrow),
			connection("traits", "generics", Recommended, DashedLine),
			connection("lifetimes", "style-guide", Optional, Plain),
		],
		groups: vec![Group {
			id: "core".into(),
			name: LocalizedText::single(Metadata::DEFAULT_LANGUAGE, "Core language"),
			nodes: vec!["basics".into(), "ownership".into(), "traits".into()],
			style: serde_json::Value::Null,
		}],
		metadata: Metadata::default(),
	}
}
