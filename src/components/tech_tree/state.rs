//! Edit loop state and pointer-drag tracking.
//!
//! [`EditLoop`] owns the current tree snapshot, the text it came from, the
//! selection and any error from the last import. Every change goes through
//! [`EditLoop::dispatch`], which takes `&mut self`, so intents run one at a
//! time and each finishes before the next starts. Snapshots are replaced
//! wholesale; a renderer holding an older `Arc<Graph>` is never affected.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::tree::{
	Graph, Position, TreeSource, Violation, check_consistency, decode, encode, ready_to_unlock,
};

use super::render::pick;
use super::scale::RenderConfig;

/// A single user or system action against the edit loop.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
	/// Replace the tree with freshly edited text.
	Import(String),
	/// Select whatever node is under the pointer (or nothing).
	Pick(Position),
	/// Move one node and refresh the text to match.
	Move { node_id: String, position: Position },
	/// Clear the selection.
	Deselect,
}

/// Serial controller behind the tree view.
#[derive(Clone, Debug)]
pub struct EditLoop {
	graph: Option<Arc<Graph>>,
	text: String,
	error: Option<String>,
	selected: Option<String>,
	violations: Vec<Violation>,
	unlockable: Vec<String>,
	config: RenderConfig,
}

impl EditLoop {
	/// Starts from `initial` (if any); the text is its encoding.
	pub fn new(initial: Option<Graph>, config: RenderConfig) -> Self {
		let text = initial.as_ref().map(encode).unwrap_or_default();
		let violations = initial.as_ref().map(check_consistency).unwrap_or_default();
		let unlockable = initial.as_ref().map(ready_to_unlock).unwrap_or_default();
		Self {
			graph: initial.map(Arc::new),
			text,
			error: None,
			selected: None,
			violations,
			unlockable,
			config,
		}
	}

	pub fn graph(&self) -> Option<&Graph> {
		self.graph.as_deref()
	}

	/// Shared handle to the current snapshot.
	pub fn snapshot(&self) -> Option<Arc<Graph>> {
		self.graph.clone()
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn violations(&self) -> &[Violation] {
		&self.violations
	}

	/// LOCKED nodes whose prerequisites are all COMPLETED.
	pub fn unlockable(&self) -> &[String] {
		&self.unlockable
	}

	pub fn config(&self) -> &RenderConfig {
		&self.config
	}

	pub fn dispatch(&mut self, intent: Intent) {
		match intent {
			Intent::Import(text) => {
				self.import(text);
			}
			Intent::Pick(point) => {
				self.pick(point);
			}
			Intent::Move { node_id, position } => {
				self.move_node(&node_id, position);
			}
			Intent::Deselect => self.selected = None,
		}
	}

	/// Decodes `text` and, on success, makes it the current tree. On failure
	/// the previous tree stays and the error is recorded. Returns whether the
	/// import succeeded.
	pub fn import(&mut self, text: impl Into<String>) -> bool {
		self.text = text.into();
		match decode(&self.text) {
			Ok(graph) => {
				info!(
					"tech-tree: imported {} nodes, {} connections",
					graph.nodes.len(),
					graph.connections.len()
				);
				self.replace(graph);
				true
			}
			Err(e) => {
				warn!("tech-tree: import failed: {}", e);
				self.error = Some(e.to_string());
				false
			}
		}
	}

	/// Fetches the tree for `course_id` and imports it. A fetch failure is
	/// handled like a failed import.
	pub fn load(&mut self, source: &dyn TreeSource, course_id: &str) -> bool {
		match source.fetch_tree(course_id) {
			Ok(text) => self.import(text),
			Err(e) => {
				warn!("tech-tree: fetch for course {} failed: {}", course_id, e);
				self.error = Some(e.to_string());
				false
			}
		}
	}

	/// Updates the selection from a pointer position and returns it.
	pub fn pick(&mut self, point: Position) -> Option<&str> {
		self.selected = self
			.graph
			.as_deref()
			.and_then(|g| pick(g, point, &self.config))
			.map(str::to_string);
		debug!("tech-tree: picked {:?}", self.selected);
		self.selected.as_deref()
	}

	/// Moves one node and re-encodes the text. Returns `false` (and changes
	/// nothing) for an unknown node, a non-finite position, or no tree.
	pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
		if !position.x.is_finite() || !position.y.is_finite() {
			warn!("tech-tree: ignoring non-finite move of {}", node_id);
			return false;
		}
		let Some(next) = self
			.graph
			.as_deref()
			.and_then(|g| g.with_node_position(node_id, position))
		else {
			warn!("tech-tree: cannot move unknown node {}", node_id);
			return false;
		};

		debug!("tech-tree: moved {} to ({}, {})", node_id, position.x, position.y);
		self.text = encode(&next);
		self.graph = Some(Arc::new(next));
		self.error = None;
		true
	}

	fn replace(&mut self, graph: Graph) {
		self.violations = check_consistency(&graph);
		for violation in &self.violations {
			warn!("tech-tree: {}", violation);
		}
		self.unlockable = ready_to_unlock(&graph);
		if !self.unlockable.is_empty() {
			debug!("tech-tree: ready to unlock: {}", self.unlockable.join(", "));
		}
		if self
			.selected
			.as_deref()
			.is_some_and(|id| !graph.contains_node(id))
		{
			self.selected = None;
		}
		self.graph = Some(Arc::new(graph));
		self.error = None;
	}
}

/// Tracks a node being dragged with the pointer.
///
/// The grab offset keeps the node from jumping so its center sits under the
/// pointer when the drag starts off-center.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	node_id: Option<String>,
	grab_dx: f64,
	grab_dy: f64,
}

impl DragState {
	pub fn begin(&mut self, node_id: &str, pointer: Position, node_position: Position) {
		self.node_id = Some(node_id.to_string());
		self.grab_dx = node_position.x - pointer.x;
		self.grab_dy = node_position.y - pointer.y;
	}

	pub fn is_active(&self) -> bool {
		self.node_id.is_some()
	}

	/// The move that keeps the dragged node under `pointer`.
	pub fn target(&self, pointer: Position) -> Option<Intent> {
		let node_id = self.node_id.clone()?;
		Some(Intent::Move {
			node_id,
			position: Position::new(pointer.x + self.grab_dx, pointer.y + self.grab_dy),
		})
	}

	pub fn end(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::{FetchError, StaticTreeSource};

	const TWO_NODES: &str = r#"{"nodes":[
		{"id":"n1","position":{"x":100,"y":150},"style":"circular","requirements":[]},
		{"id":"n2","position":{"x":300,"y":150},"style":"hexagon","requirements":["n1"]}
	],"connections":[{"id":"c","from":"n1","to":"n2","style":"solid_arrow"}]}"#;

	struct Offline;

	impl TreeSource for Offline {
		fn fetch_tree(&self, _course_id: &str) -> Result<String, FetchError> {
			Err(FetchError::Unavailable("offline".into()))
		}
	}

	fn loaded() -> EditLoop {
		let mut edit = EditLoop::new(None, RenderConfig::default());
		assert!(edit.import(TWO_NODES));
		edit
	}

	#[test]
	fn starts_from_the_given_tree() {
		let empty = EditLoop::new(None, RenderConfig::default());
		assert!(empty.graph().is_none());
		assert_eq!(empty.text(), "");

		let graph = decode(TWO_NODES).unwrap();
		let edit = EditLoop::new(Some(graph.clone()), RenderConfig::default());
		assert_eq!(edit.graph(), Some(&graph));
		assert_eq!(decode(edit.text()).unwrap(), graph);
	}

	#[test]
	fn failed_import_keeps_the_last_good_tree() {
		let mut edit = loaded();
		let before = edit.snapshot();

		edit.dispatch(Intent::Import("{\"nodes\": [".into()));

		assert_eq!(edit.snapshot(), before);
		assert_eq!(edit.text(), "{\"nodes\": [");
		assert!(edit.error().unwrap().starts_with("invalid JSON"));

		edit.dispatch(Intent::Import(TWO_NODES.into()));
		assert!(edit.error().is_none());
	}

	#[test]
	fn pick_updates_selection() {
		let mut edit = loaded();
		edit.dispatch(Intent::Pick(Position::new(300.0, 150.0)));
		assert_eq!(edit.selected(), Some("n2"));

		edit.dispatch(Intent::Pick(Position::new(0.0, 0.0)));
		assert_eq!(edit.selected(), None);

		assert_eq!(edit.pick(Position::new(110.0, 150.0)), Some("n1"));
		edit.dispatch(Intent::Deselect);
		assert_eq!(edit.selected(), None);
	}

	#[test]
	fn move_replaces_snapshot_and_refreshes_text() {
		let mut edit = loaded();
		let before = edit.snapshot().unwrap();

		edit.dispatch(Intent::Move {
			node_id: "n1".into(),
			position: Position::new(120.0, 160.0),
		});

		let after = edit.graph().unwrap();
		assert_eq!(after.node("n1").unwrap().position, Position::new(120.0, 160.0));
		assert_eq!(before.node("n1").unwrap().position, Position::new(100.0, 150.0));
		assert_eq!(decode(edit.text()).unwrap(), *after);
	}

	#[test]
	fn move_clears_a_stale_import_error() {
		let mut edit = loaded();
		assert!(!edit.import("{\"nodes\": ["));
		assert!(edit.error().is_some());

		assert!(edit.move_node("n2", Position::new(310.0, 150.0)));
		assert!(edit.error().is_none());
		assert_eq!(decode(edit.text()).unwrap(), *edit.graph().unwrap());
	}

	#[test]
	fn import_lists_nodes_ready_to_unlock() {
		let mut edit = loaded();
		assert!(edit.unlockable().is_empty());

		edit.import(
			r#"{"nodes":[{"id":"a","status":"COMPLETED"},{"id":"b","requirements":["a"],"status":"LOCKED"}]}"#,
		);
		assert_eq!(edit.unlockable(), ["b"]);
		assert!(edit.violations().is_empty());
	}

	#[test]
	fn invalid_moves_change_nothing() {
		let mut edit = loaded();
		let text = edit.text().to_string();

		assert!(!edit.move_node("ghost", Position::new(1.0, 1.0)));
		assert!(!edit.move_node("n1", Position::new(f64::NAN, 1.0)));
		assert_eq!(edit.text(), text);

		let mut empty = EditLoop::new(None, RenderConfig::default());
		assert!(!empty.move_node("n1", Position::new(1.0, 1.0)));
	}

	#[test]
	fn import_reports_violations_and_drops_stale_selection() {
		let mut edit = loaded();
		edit.pick(Position::new(300.0, 150.0));
		assert_eq!(edit.selected(), Some("n2"));

		edit.import(r#"{"nodes":[{"id":"a","requirements":["b"]},{"id":"b","requirements":["a"]}]}"#);

		assert_eq!(edit.selected(), None);
		assert_eq!(edit.violations().len(), 1);
		assert!(matches!(edit.violations()[0], Violation::RequirementCycle { .. }));
	}

	#[test]
	fn load_goes_through_the_source() {
		let source = StaticTreeSource::new().with_tree("course-1", TWO_NODES);
		let mut edit = EditLoop::new(None, RenderConfig::default());

		assert!(!edit.load(&source, "course-2"));
		assert_eq!(
			edit.error(),
			Some(FetchError::NotFound("course-2".into()).to_string().as_str())
		);
		assert!(edit.graph().is_none());

		assert!(edit.load(&source, "course-1"));
		assert_eq!(edit.graph().unwrap().nodes.len(), 2);
		assert!(edit.error().is_none());

		assert!(!edit.load(&Offline, "course-1"));
		assert_eq!(edit.error(), Some("tree source unavailable: offline"));
		assert_eq!(edit.graph().unwrap().nodes.len(), 2);
	}

	#[test]
	fn drag_keeps_grab_offset() {
		let mut drag = DragState::default();
		assert!(drag.target(Position::new(0.0, 0.0)).is_none());

		drag.begin("n1", Position::new(105.0, 140.0), Position::new(100.0, 150.0));
		assert!(drag.is_active());
		assert_eq!(
			drag.target(Position::new(125.0, 150.0)),
			Some(Intent::Move {
				node_id: "n1".into(),
				position: Position::new(120.0, 160.0),
			})
		);

		drag.end();
		assert!(!drag.is_active());
	}
}
