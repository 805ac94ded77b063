//! Leptos component wrapping the technology-tree canvas.
//!
//! The component owns an [`EditLoop`] in a signal. An effect repaints the
//! canvas whenever the loop changes; mouse handlers turn clicks into picks
//! and drags into moves. Node titles are rendered as positioned DOM
//! elements over the canvas, and the tree's JSON is editable in a text area
//! next to it. Below it the panel lists consistency violations and any
//! locked nodes whose prerequisites are already complete.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::tree::Position;

use super::paint::paint;
use super::render::{labels, render};
use super::state::{DragState, EditLoop, Intent};
use super::theme::Theme;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Pointer position in canvas (and therefore tree) coordinates.
fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<Position> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Position::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an editable technology tree.
///
/// The canvas takes its size from the tree's `canvasSize`. Click a node to
/// select it; drag it to move it. With `show_source`, the JSON text area
/// imports on every edit and keeps the last good tree on screen when the
/// text does not decode.
#[component]
pub fn TechTreeCanvas(
	/// Starting state, holding whichever tree should be shown first.
	edit: EditLoop,
	#[prop(default = true)] show_source: bool,
) -> impl IntoView {
	let edit = RwSignal::new(edit);
	let theme = Theme::default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let drag = Rc::new(RefCell::new(DragState::default()));

	let paint_theme = theme.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		edit.with(|state| {
			let Some(graph) = state.graph() else {
				return;
			};
			let size = graph.metadata.canvas_size;
			canvas.set_width(size.width);
			canvas.set_height(size.height);
			let Some(ctx) = context_2d(&canvas) else {
				warn!("tech-tree: canvas has no 2d context");
				return;
			};
			let frame = render(graph, state.selected(), state.config(), &paint_theme);
			paint(&ctx, &frame, size, &paint_theme);
		});
	});

	let drag_md = drag.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(point) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		edit.update(|state| {
			state.dispatch(Intent::Pick(point));
			let grabbed = state.selected().and_then(|id| state.graph()?.node(id));
			if let Some(node) = grabbed {
				drag_md.borrow_mut().begin(&node.id, point, node.position);
			}
		});
	};

	let drag_mm = drag.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(intent) =
			pointer_position(canvas_ref, &ev).and_then(|p| drag_mm.borrow().target(p))
		else {
			return;
		};
		edit.update(|state| state.dispatch(intent));
	};

	let drag_mu = drag.clone();
	let on_mouseup = move |_: MouseEvent| drag_mu.borrow_mut().end();

	let drag_ml = drag.clone();
	let on_mouseleave = move |_: MouseEvent| drag_ml.borrow_mut().end();

	let label_color = theme.label.to_css();
	let overlay = move || {
		let (items, font_size) = edit.with(|state| {
			(
				state
					.graph()
					.map(|g| labels(g, state.config()))
					.unwrap_or_default(),
				state.config().label.font_size,
			)
		});
		items
			.into_iter()
			.map(|label| {
				let style = format!(
					"position: absolute; left: {}px; top: {}px; transform: translateX(-50%); \
					 white-space: nowrap; font-size: {}px; color: {};",
					label.anchor.x, label.anchor.y, font_size, label_color
				);
				view! { <span class="tech-tree-label" style=style>{label.text}</span> }
			})
			.collect_view()
	};

	let source_panel = show_source.then(|| {
		view! {
			<textarea
				class="tech-tree-source"
				spellcheck="false"
				prop:value=move || edit.with(|state| state.text().to_string())
				on:input=move |ev| {
					let text = event_target_value(&ev);
					edit.update(|state| state.dispatch(Intent::Import(text)));
				}
			/>
		}
	});

	let error = move || {
		edit.with(|state| state.error().map(str::to_string))
			.map(|message| view! { <p class="tech-tree-error">{message}</p> })
	};

	let violations = move || {
		edit.with(|state| {
			state
				.violations()
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
		})
		.into_iter()
		.map(|v| view! { <li>{v}</li> })
		.collect_view()
	};

	let unlockable = move || {
		let ids = edit.with(|state| state.unlockable().join(", "));
		(!ids.is_empty()).then(|| view! { <p class="tech-tree-unlockable">"Ready to unlock: "{ids}</p> })
	};

	view! {
		<div class="tech-tree">
			<div class="tech-tree-stage" style="position: relative; display: inline-block;">
				<canvas
					node_ref=canvas_ref
					class="tech-tree-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
					style="display: block; cursor: pointer;"
				/>
				<div
					class="tech-tree-labels"
					style="position: absolute; inset: 0; pointer-events: none;"
				>
					{overlay}
				</div>
			</div>
			{source_panel}
			{error}
			<ul class="tech-tree-violations">{violations}</ul>
			{unlockable}
		</div>
	}
}
