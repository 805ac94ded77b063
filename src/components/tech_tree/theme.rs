//! Colors for the tree view.

use crate::tree::{ConnectionKind, NodeShape, NodeState};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with its alpha scaled by `factor`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill colors for nodes, by shape.
#[derive(Clone, Debug)]
pub struct ShapePalette {
	pub circular: Color,
	pub hexagon: Color,
	pub square: Color,
	pub fallback: Color,
}

impl ShapePalette {
	pub fn get(&self, shape: NodeShape) -> Color {
		match shape {
			NodeShape::Circular => self.circular,
			NodeShape::Hexagon => self.hexagon,
			NodeShape::Square => self.square,
			NodeShape::Default => self.fallback,
		}
	}
}

/// Outline colors, by node state.
#[derive(Clone, Debug)]
pub struct StatePalette {
	pub locked: Color,
	pub available: Color,
	pub in_progress: Color,
	pub completed: Color,
}

impl StatePalette {
	pub fn get(&self, state: NodeState) -> Color {
		match state {
			NodeState::Locked => self.locked,
			NodeState::Available => self.available,
			NodeState::InProgress => self.in_progress,
			NodeState::Completed => self.completed,
		}
	}
}

/// Edge colors, by connection type.
#[derive(Clone, Debug)]
pub struct EdgePalette {
	pub required: Color,
	pub recommended: Color,
	pub optional: Color,
}

impl EdgePalette {
	pub fn get(&self, kind: ConnectionKind) -> Color {
		match kind {
			ConnectionKind::Required => self.required,
			ConnectionKind::Recommended => self.recommended,
			ConnectionKind::Optional => self.optional,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	/// Fill for the selected node; beats every other fill.
	pub selected: Color,
	/// Fill for nodes without requirements, unless selected.
	pub entry: Color,
	pub shapes: ShapePalette,
	pub states: StatePalette,
	pub edges: EdgePalette,
	pub label: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(22, 27, 34),
			selected: Color::rgb(255, 193, 7),
			entry: Color::rgb(76, 175, 80),
			shapes: ShapePalette {
				circular: Color::rgb(94, 129, 172),  // Steel blue
				hexagon: Color::rgb(130, 120, 150),  // Wisteria
				square: Color::rgb(100, 148, 160),   // Teal gray
				fallback: Color::rgb(136, 160, 175), // Cadet blue
			},
			states: StatePalette {
				locked: Color::rgb(97, 97, 97),
				available: Color::rgb(236, 239, 244),
				in_progress: Color::rgb(33, 150, 243),
				completed: Color::rgb(46, 125, 50),
			},
			edges: EdgePalette {
				required: Color::rgb(176, 190, 197),
				recommended: Color::rgb(144, 164, 174),
				optional: Color::rgb(120, 144, 156),
			},
			label: Color::rgba(255, 255, 255, 0.9),
		}
	}
}
