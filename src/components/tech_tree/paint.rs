//! Executes [`DrawCommand`]s on a 2D canvas context.
//!
//! Labels are not painted here; the component lays them out as DOM elements
//! above the canvas.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::tree::CanvasSize;

use super::render::{DrawCommand, Frame};
use super::theme::Theme;

/// Clears the canvas and draws every command of `frame` in order.
pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame, size: CanvasSize, theme: &Theme) {
	let (w, h) = (f64::from(size.width), f64::from(size.height));
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, w, h);

	// Dashes are explicit segments; the stroke itself is always solid.
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_line_cap("round");

	for command in &frame.commands {
		match command {
			DrawCommand::Line {
				from,
				to,
				color,
				width,
			} => {
				ctx.set_stroke_style_str(&color.to_css());
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.stroke();
			}
			DrawCommand::Circle {
				center,
				radius,
				fill,
				stroke,
				stroke_width,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(&fill.to_css());
				ctx.fill();
				ctx.set_stroke_style_str(&stroke.to_css());
				ctx.set_line_width(*stroke_width);
				ctx.stroke();
			}
			DrawCommand::Polygon {
				points,
				fill,
				stroke,
				stroke_width,
			} => {
				let Some((first, rest)) = points.split_first() else {
					continue;
				};
				ctx.begin_path();
				ctx.move_to(first.x, first.y);
				for p in rest {
					ctx.line_to(p.x, p.y);
				}
				ctx.close_path();
				ctx.set_fill_style_str(&fill.to_css());
				ctx.fill();
				ctx.set_stroke_style_str(&stroke.to_css());
				ctx.set_line_width(*stroke_width);
				ctx.stroke();
			}
		}
	}
}
