//! Turns a tree snapshot into draw commands, and pointer positions back into
//! nodes.
//!
//! A [`Frame`] has two layers:
//! 1. `commands`: every connection, then every node, in storage order
//! 2. `labels`: node titles, composited separately on top of the canvas
//!
//! Labels are not canvas text. The host places them as their own layer so
//! they stay crisp regardless of the drawing surface's text support.

use std::f64::consts::PI;

use crate::tree::{
	CanvasSize, Connection, ConnectionStyle, Graph, Metadata, Node, NodeShape, Position,
};

use super::scale::{EdgeGeometry, RenderConfig};
use super::theme::{Color, Theme};

/// Below this distance two endpoints are considered coincident and the
/// connection has no direction to draw.
const MIN_EDGE_LENGTH: f64 = 0.001;

/// A single drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Line {
		from: Position,
		to: Position,
		color: Color,
		width: f64,
	},
	Circle {
		center: Position,
		radius: f64,
		fill: Color,
		stroke: Color,
		stroke_width: f64,
	},
	/// Closed, filled and stroked polygon.
	Polygon {
		points: Vec<Position>,
		fill: Color,
		stroke: Color,
		stroke_width: f64,
	},
}

/// Text placed horizontally centered on `anchor`, top edge at `anchor.y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
	pub node_id: String,
	pub text: String,
	pub anchor: Position,
}

/// Everything needed to show one snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub commands: Vec<DrawCommand>,
	pub labels: Vec<Label>,
}

/// Builds the full frame for `graph` with `selected` highlighted.
pub fn render(graph: &Graph, selected: Option<&str>, config: &RenderConfig, theme: &Theme) -> Frame {
	let mut commands = Vec::with_capacity(graph.connections.len() * 2 + graph.nodes.len());

	for conn in &graph.connections {
		draw_connection(graph, conn, config, theme, &mut commands);
	}
	for node in &graph.nodes {
		commands.push(draw_node(node, selected == Some(node.id.as_str()), config, theme));
	}

	Frame {
		commands,
		labels: labels(graph, config),
	}
}

/// Label layer only: one label per node, just below its nominal circle.
pub fn labels(graph: &Graph, config: &RenderConfig) -> Vec<Label> {
	let lang = graph.metadata.default_language.as_str();
	graph
		.nodes
		.iter()
		.map(|node| Label {
			node_id: node.id.clone(),
			text: node
				.title
				.resolve(lang, Metadata::DEFAULT_LANGUAGE)
				.unwrap_or(node.id.as_str())
				.to_string(),
			anchor: Position::new(
				node.position.x,
				node.position.y + config.nominal_radius(node.shape) + config.label.offset,
			),
		})
		.collect()
}

/// First node, in storage order, whose nominal circle contains `point`.
///
/// Every shape is tested as a circle of its nominal radius, not its drawn
/// outline.
pub fn pick<'g>(graph: &'g Graph, point: Position, config: &RenderConfig) -> Option<&'g str> {
	graph
		.nodes
		.iter()
		.find(|node| node.position.distance_to(point) <= config.nominal_radius(node.shape))
		.map(|node| node.id.as_str())
}

fn node_fill(node: &Node, selected: bool, theme: &Theme) -> Color {
	if selected {
		theme.selected
	} else if node.is_entry() {
		theme.entry
	} else {
		theme.shapes.get(node.shape)
	}
}

fn draw_node(node: &Node, selected: bool, config: &RenderConfig, theme: &Theme) -> DrawCommand {
	let fill = node_fill(node, selected, theme);
	let stroke = theme.states.get(node.state);
	let stroke_width = if selected {
		config.node.selected_border_width
	} else {
		config.node.border_width
	};
	let center = node.position;

	match node.shape {
		NodeShape::Hexagon => DrawCommand::Polygon {
			points: hexagon_points(center, config.node.hexagon_radius),
			fill,
			stroke,
			stroke_width,
		},
		NodeShape::Square => DrawCommand::Polygon {
			points: square_points(center, config.node.square_side),
			fill,
			stroke,
			stroke_width,
		},
		NodeShape::Circular | NodeShape::Default => DrawCommand::Circle {
			center,
			radius: config.node.circle_radius,
			fill,
			stroke,
			stroke_width,
		},
	}
}

/// Regular hexagon, first vertex straight up, then every 60 degrees.
fn hexagon_points(center: Position, radius: f64) -> Vec<Position> {
	(0..6)
		.map(|i| {
			let angle = -PI / 2.0 + f64::from(i) * PI / 3.0;
			Position::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
		})
		.collect()
}

/// Axis-aligned square, clockwise from the top-left corner.
fn square_points(center: Position, side: f64) -> Vec<Position> {
	let h = side / 2.0;
	vec![
		Position::new(center.x - h, center.y - h),
		Position::new(center.x + h, center.y - h),
		Position::new(center.x + h, center.y + h),
		Position::new(center.x - h, center.y + h),
	]
}

fn draw_connection(
	graph: &Graph,
	conn: &Connection,
	config: &RenderConfig,
	theme: &Theme,
	out: &mut Vec<DrawCommand>,
) {
	let (Some(source), Some(target)) = (graph.node(&conn.from), graph.node(&conn.to)) else {
		return;
	};
	let (from, to) = (source.position, target.position);
	// Finite endpoints can still be too far apart to measure.
	let length = from.distance_to(to);
	if !length.is_finite() || length < MIN_EDGE_LENGTH {
		return;
	}

	let color = theme.edges.get(conn.kind);
	let width = config.edge.line_width;

	match conn.style {
		ConnectionStyle::SolidArrow => {
			out.push(DrawCommand::Line {
				from,
				to,
				color,
				width,
			});
			let tip_offset = config.nominal_radius(target.shape);
			out.extend(
				arrow_head(from, to, tip_offset, config)
					.into_iter()
					.map(|(a, b)| DrawCommand::Line {
						from: a,
						to: b,
						color,
						width,
					}),
			);
		}
		ConnectionStyle::DashedLine => {
			out.extend(
				dash_segments(from, to, graph.metadata.canvas_size, &config.edge)
					.into_iter()
					.map(|(a, b)| DrawCommand::Line {
						from: a,
						to: b,
						color,
						width,
					}),
			);
		}
		ConnectionStyle::Plain => out.push(DrawCommand::Line {
			from,
			to,
			color: color.fade(config.edge.plain_alpha),
			width,
		}),
	}
}

/// Two arms of a V whose tip sits `tip_offset` short of `to`, on the line
/// from `from`.
fn arrow_head(
	from: Position,
	to: Position,
	tip_offset: f64,
	config: &RenderConfig,
) -> [(Position, Position); 2] {
	let angle = (to.y - from.y).atan2(to.x - from.x);
	let tip = Position::new(
		to.x - tip_offset * angle.cos(),
		to.y - tip_offset * angle.sin(),
	);
	let arm = |spread: f64| {
		Position::new(
			tip.x - config.edge.arrow_length * (angle + spread).cos(),
			tip.y - config.edge.arrow_length * (angle + spread).sin(),
		)
	};
	[
		(tip, arm(-config.edge.arrow_spread)),
		(tip, arm(config.edge.arrow_spread)),
	]
}

/// Splits `from -> to` into alternating dashes and gaps, returning only the
/// dashes. The last dash is clipped at `to`.
///
/// Only the stretch of the edge inside the canvas is dashed, and never more
/// than `edge.max_dashes` segments. Dashes keep their phase from `from`.
fn dash_segments(
	from: Position,
	to: Position,
	bounds: CanvasSize,
	edge: &EdgeGeometry,
) -> Vec<(Position, Position)> {
	let length = from.distance_to(to);
	if !length.is_finite() || length < MIN_EDGE_LENGTH || edge.dash <= 0.0 {
		return Vec::new();
	}
	let Some((enter, exit)) = clip_to_canvas(from, to, bounds) else {
		return Vec::new();
	};
	let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
	let at = |d: f64| Position::new(from.x + ux * d, from.y + uy * d);

	let step = edge.dash + edge.gap.max(0.0);
	let last = exit * length;
	let mut segments = Vec::new();
	let mut start = (enter * length / step).floor() * step;
	while start < last && segments.len() < edge.max_dashes {
		let end = (start + edge.dash).min(length);
		segments.push((at(start), at(end)));
		start += step;
	}
	segments
}

/// Parametric range `[t0, t1]` of `from -> to` inside the canvas rectangle
/// (Liang-Barsky), or `None` when the segment misses it.
fn clip_to_canvas(from: Position, to: Position, bounds: CanvasSize) -> Option<(f64, f64)> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let (w, h) = (f64::from(bounds.width), f64::from(bounds.height));
	let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
	for (p, q) in [(-dx, from.x), (dx, w - from.x), (-dy, from.y), (dy, h - from.y)] {
		if p == 0.0 {
			if q < 0.0 {
				return None;
			}
			continue;
		}
		let t = q / p;
		if p < 0.0 {
			t0 = t0.max(t);
		} else {
			t1 = t1.min(t);
		}
	}
	(t0 < t1).then_some((t0, t1))
}
