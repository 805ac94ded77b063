//! tech-tree: Interactive technology-tree viewer and editor for courses.
//!
//! This crate decodes a course's tree of learning nodes from its JSON wire
//! format, checks node states against prerequisites, and renders the tree on
//! a canvas where nodes can be selected and dragged while the JSON stays in
//! sync.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod tree;

pub use components::tech_tree::{EditLoop, RenderConfig, TechTreeCanvas};
pub use tree::{DecodeError, Graph, decode, encode};

use tree::{FetchError, TreeSource};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("tech-tree: logging initialized");
}

/// Reads tree JSON embedded in the page as `<script id="..." type="application/json">`.
///
/// When the element carries a `data-course-id` attribute, only that course
/// is served from it.
pub struct DomTreeSource {
	element_id: String,
}

impl DomTreeSource {
	pub fn new(element_id: impl Into<String>) -> Self {
		Self {
			element_id: element_id.into(),
		}
	}

	fn script(&self) -> Option<HtmlScriptElement> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let element = document.get_element_by_id(&self.element_id)?;
		element.dyn_into().ok()
	}

	/// Course embedded in the page, if there is a tree element at all.
	pub fn embedded_course(&self) -> Option<String> {
		let script = self.script()?;
		Some(script.get_attribute("data-course-id").unwrap_or_default())
	}
}

impl TreeSource for DomTreeSource {
	fn fetch_tree(&self, course_id: &str) -> Result<String, FetchError> {
		let script = self.script().ok_or_else(|| {
			FetchError::Unavailable(format!("no element #{}", self.element_id))
		})?;
		if script
			.get_attribute("data-course-id")
			.is_some_and(|embedded| embedded != course_id)
		{
			return Err(FetchError::NotFound(course_id.to_string()));
		}
		script
			.text()
			.map_err(|_| FetchError::Unavailable(format!("unreadable element #{}", self.element_id)))
	}
}

/// Main application component.
/// Shows the tree embedded in the page, or the sample tree when there is none.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let mut edit = EditLoop::new(Some(tree::sample::sample_tree()), RenderConfig::default());
	let source = DomTreeSource::new("tree-data");
	match source.embedded_course() {
		Some(course) => {
			edit.load(&source, &course);
		}
		None => info!("tech-tree: no embedded tree, showing sample"),
	}

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Technology Tree" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="tech-tree-page">
			<h1>"Technology Tree"</h1>
			<p class="subtitle">"Click a node to select it. Drag to move. Edit the JSON to reshape the tree."</p>
			<TechTreeCanvas edit=edit />
		</main>
	}
}
