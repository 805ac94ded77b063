//! Geometry constants for drawing and hit-testing the tree.
//!
//! All values are in tree-space pixels, the same units as node positions.
//! They do not change with zoom; the canvas is drawn 1:1.
//!
//! Every shape has a *nominal radius*. It is the drawn radius for circles and
//! hexagons, and the pick radius for all shapes. Picking always tests against
//! a circle of that radius, so the corners of a square (and the flats of a
//! hexagon) are not an exact match for the drawn outline.

use std::f64::consts::PI;

use crate::tree::NodeShape;

/// Node shape sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGeometry {
	/// Radius of `circular` (and unknown-style) nodes.
	pub circle_radius: f64,
	/// Circumradius of `hexagon` nodes.
	pub hexagon_radius: f64,
	/// Side length of `square` nodes.
	pub square_side: f64,
	/// Nominal radius used to pick and route edges to `square` nodes.
	pub square_radius: f64,
	/// Outline width for every shape.
	pub border_width: f64,
	/// Outline width for the selected node.
	pub selected_border_width: f64,
}

/// Edge stroke parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGeometry {
	pub line_width: f64,
	/// Length of each drawn segment of a `dashed_line`.
	pub dash: f64,
	/// Length of each gap of a `dashed_line`.
	pub gap: f64,
	/// Length of each arm of a `solid_arrow` head.
	pub arrow_length: f64,
	/// Angle between an arrow arm and the edge, in radians.
	pub arrow_spread: f64,
	/// Opacity multiplier for `plain` edges.
	pub plain_alpha: f64,
	/// Upper bound on segments drawn for one `dashed_line`.
	pub max_dashes: usize,
}

/// Label overlay placement.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelGeometry {
	/// Gap between the bottom of a node's nominal circle and its label.
	pub offset: f64,
	/// Font size in CSS pixels.
	pub font_size: f64,
}

/// Complete rendering configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
	pub node: NodeGeometry,
	pub edge: EdgeGeometry,
	pub label: LabelGeometry,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			node: NodeGeometry {
				circle_radius: 25.0,
				hexagon_radius: 30.0,
				square_side: 50.0,
				square_radius: 30.0,
				border_width: 2.0,
				selected_border_width: 3.0,
			},
			edge: EdgeGeometry {
				line_width: 2.0,
				dash: 5.0,
				gap: 5.0,
				arrow_length: 10.0,
				arrow_spread: PI / 6.0,
				plain_alpha: 0.3,
				max_dashes: 2_000,
			},
			label: LabelGeometry {
				offset: 12.0,
				font_size: 12.0,
			},
		}
	}
}

impl RenderConfig {
	/// Pick and edge-routing radius for a shape.
	pub fn nominal_radius(&self, shape: NodeShape) -> f64 {
		match shape {
			NodeShape::Hexagon => self.node.hexagon_radius,
			NodeShape::Square => self.node.square_radius,
			NodeShape::Circular | NodeShape::Default => self.node.circle_radius,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nominal_radii() {
		let config = RenderConfig::default();
		assert_eq!(config.nominal_radius(NodeShape::Circular), 25.0);
		assert_eq!(config.nominal_radius(NodeShape::Default), 25.0);
		assert_eq!(config.nominal_radius(NodeShape::Hexagon), 30.0);
		assert_eq!(config.nominal_radius(NodeShape::Square), 30.0);
	}
}
