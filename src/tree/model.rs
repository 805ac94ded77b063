//! Canonical in-memory technology tree.
//!
//! A [`Graph`] is an immutable snapshot. Edits never touch a graph in place;
//! they produce a new value (see [`Graph::with_node_position`]) so that any
//! holder of an older snapshot keeps seeing a consistent tree.

use std::collections::BTreeMap;

/// A 2D point in tree space. Node positions, pointer input and draw
/// commands all share this coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Text keyed by language code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
	pub fn new() -> Self {
		Self::default()
	}

	/// Single-language text.
	pub fn single(lang: impl Into<String>, text: impl Into<String>) -> Self {
		let mut out = Self::new();
		out.insert(lang, text);
		out
	}

	pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) {
		self.0.insert(lang.into(), text.into());
	}

	pub fn get(&self, lang: &str) -> Option<&str> {
		self.0.get(lang).map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Text in `lang`, else in `fallback`, else whichever entry sorts first.
	pub fn resolve(&self, lang: &str, fallback: &str) -> Option<&str> {
		self.get(lang)
			.or_else(|| self.get(fallback))
			.or_else(|| self.0.values().next().map(String::as_str))
	}
}

impl FromIterator<(String, String)> for LocalizedText {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Kind of learning unit a node stands for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Skill,
	Module,
	Article,
	#[default]
	Topic,
}

impl NodeKind {
	/// Parses a wire value; anything unrecognized is `None`.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_uppercase().as_str() {
			"SKILL" => Some(Self::Skill),
			"MODULE" => Some(Self::Module),
			"ARTICLE" => Some(Self::Article),
			"TOPIC" => Some(Self::Topic),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Skill => "SKILL",
			Self::Module => "MODULE",
			Self::Article => "ARTICLE",
			Self::Topic => "TOPIC",
		}
	}
}

/// Shape a node is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeShape {
	Circular,
	Hexagon,
	Square,
	/// Unknown or absent style. Drawn like [`NodeShape::Circular`].
	#[default]
	Default,
}

impl NodeShape {
	pub fn parse(raw: &str) -> Self {
		match raw.to_ascii_lowercase().as_str() {
			"circular" => Self::Circular,
			"hexagon" => Self::Hexagon,
			"square" => Self::Square,
			_ => Self::Default,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Circular => "circular",
			Self::Hexagon => "hexagon",
			Self::Square => "square",
			Self::Default => "default",
		}
	}
}

/// Interaction state of a node, as authored by the progress service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeState {
	Locked,
	#[default]
	Available,
	InProgress,
	Completed,
}

impl NodeState {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_uppercase().as_str() {
			"LOCKED" => Some(Self::Locked),
			"AVAILABLE" => Some(Self::Available),
			"IN_PROGRESS" => Some(Self::InProgress),
			"COMPLETED" => Some(Self::Completed),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Locked => "LOCKED",
			Self::Available => "AVAILABLE",
			Self::InProgress => "IN_PROGRESS",
			Self::Completed => "COMPLETED",
		}
	}

	/// Position in the forward lifecycle.
	fn rank(self) -> u8 {
		match self {
			Self::Locked => 0,
			Self::Available => 1,
			Self::InProgress => 2,
			Self::Completed => 3,
		}
	}

	/// Whether the lifecycle LOCKED -> AVAILABLE -> IN_PROGRESS -> COMPLETED
	/// allows moving from `self` to `next` (staying put is allowed).
	pub fn can_advance_to(self, next: NodeState) -> bool {
		next.rank() == self.rank() || next.rank() == self.rank() + 1
	}

	/// Whether the user can open the node at all.
	pub fn is_reachable(self) -> bool {
		self != Self::Locked
	}
}

/// A single learning unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
	pub id: String,
	pub title: LocalizedText,
	pub description: LocalizedText,
	pub kind: NodeKind,
	pub position: Position,
	pub shape: NodeShape,
	/// Opaque lesson/article reference.
	pub content_id: Option<String>,
	/// Ids of nodes that must be satisfied first. Unique, in wire order.
	pub requirements: Vec<String>,
	pub state: NodeState,
}

impl Node {
	/// Nodes without prerequisites are where a course starts.
	pub fn is_entry(&self) -> bool {
		self.requirements.is_empty()
	}
}

/// Strength of a prerequisite edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
	#[default]
	Required,
	Recommended,
	Optional,
}

impl ConnectionKind {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_uppercase().as_str() {
			"REQUIRED" => Some(Self::Required),
			"RECOMMENDED" => Some(Self::Recommended),
			"OPTIONAL" => Some(Self::Optional),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Required => "REQUIRED",
			Self::Recommended => "RECOMMENDED",
			Self::Optional => "OPTIONAL",
		}
	}
}

/// How an edge is stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConnectionStyle {
	SolidArrow,
	DashedLine,
	/// `plain`, absent, or unknown.
	#[default]
	Plain,
}

impl ConnectionStyle {
	pub fn parse(raw: &str) -> Self {
		match raw.to_ascii_lowercase().as_str() {
			"solid_arrow" => Self::SolidArrow,
			"dashed_line" => Self::DashedLine,
			_ => Self::Plain,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::SolidArrow => "solid_arrow",
			Self::DashedLine => "dashed_line",
			Self::Plain => "plain",
		}
	}
}

/// Directed edge between two nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connection {
	pub id: String,
	pub from: String,
	pub to: String,
	pub kind: ConnectionKind,
	pub style: ConnectionStyle,
	pub label: Option<String>,
}

/// Named cluster of nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
	pub id: String,
	pub name: LocalizedText,
	pub nodes: Vec<String>,
	/// Presentation hints, passed through untouched. `Null` when absent.
	pub style: serde_json::Value,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutType {
	#[default]
	Tree,
	Mesh,
	Radial,
}

impl LayoutType {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_uppercase().as_str() {
			"TREE" => Some(Self::Tree),
			"MESH" => Some(Self::Mesh),
			"RADIAL" => Some(Self::Radial),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Tree => "TREE",
			Self::Mesh => "MESH",
			Self::Radial => "RADIAL",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
	#[default]
	Horizontal,
	Vertical,
}

impl LayoutDirection {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_uppercase().as_str() {
			"HORIZONTAL" => Some(Self::Horizontal),
			"VERTICAL" => Some(Self::Vertical),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Horizontal => "HORIZONTAL",
			Self::Vertical => "VERTICAL",
		}
	}
}

/// Canvas dimensions. Both sides are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
	pub width: u32,
	pub height: u32,
}

impl CanvasSize {
	pub const DEFAULT_WIDTH: u32 = 800;
	pub const DEFAULT_HEIGHT: u32 = 600;
}

impl Default for CanvasSize {
	fn default() -> Self {
		Self {
			width: Self::DEFAULT_WIDTH,
			height: Self::DEFAULT_HEIGHT,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
	pub default_language: String,
	pub available_languages: Vec<String>,
	pub layout_type: LayoutType,
	pub layout_direction: LayoutDirection,
	pub canvas_size: CanvasSize,
}

impl Metadata {
	pub const DEFAULT_LANGUAGE: &'static str = "en";
}

impl Default for Metadata {
	fn default() -> Self {
		Self {
			default_language: Self::DEFAULT_LANGUAGE.to_string(),
			available_languages: vec![Self::DEFAULT_LANGUAGE.to_string()],
			layout_type: LayoutType::default(),
			layout_direction: LayoutDirection::default(),
			canvas_size: CanvasSize::default(),
		}
	}
}

/// A course's technology tree.
///
/// Every connection endpoint, requirement and group member names an
/// existing node; the decoder refuses to build a graph otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub id: String,
	pub version: u64,
	pub course_id: String,
	pub created_at: Option<String>,
	pub updated_at: Option<String>,
	/// Unique by id. Storage order is also pick order.
	pub nodes: Vec<Node>,
	pub connections: Vec<Connection>,
	pub groups: Vec<Group>,
	pub metadata: Metadata,
}

impl Graph {
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn contains_node(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Copy of this graph with one node moved. `None` if the node is unknown.
	pub fn with_node_position(&self, id: &str, position: Position) -> Option<Graph> {
		let idx = self.nodes.iter().position(|n| n.id == id)?;
		let mut next = self.clone();
		next.nodes[idx].position = position;
		Some(next)
	}
}
