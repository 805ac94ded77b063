//! Technology-tree view: render/pick engine, edit loop and canvas component.
//!
//! Draws a course's tree onto an HTML canvas with:
//! - Per-shape node geometry (circle, hexagon, square)
//! - Solid arrows, manually dashed lines and faded plain edges
//! - Click-to-select and drag-to-move, kept in sync with editable JSON
//! - Node titles as a DOM overlay above the canvas
//!
//! # Example
//!
//! ```ignore
//! use tech_tree::components::tech_tree::{EditLoop, RenderConfig, TechTreeCanvas};
//! use tech_tree::tree::sample::sample_tree;
//!
//! let edit = EditLoop::new(Some(sample_tree()), RenderConfig::default());
//! view! { <TechTreeCanvas edit=edit /> }
//! ```

mod component;
mod paint;
pub mod render;
pub mod scale;
mod state;
pub mod theme;

pub use component::TechTreeCanvas;
pub use render::{DrawCommand, Frame, Label, pick, render};
pub use scale::RenderConfig;
pub use state::{DragState, EditLoop, Intent};
pub use theme::Theme;
