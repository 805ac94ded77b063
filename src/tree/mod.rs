//! Technology-tree core: data model, wire codec, consistency checks and the
//! fetch contract.
//!
//! Everything in here is plain data and pure functions, so it runs the same
//! in the browser and in host-side tests.

pub mod availability;
mod error;
pub mod model;
pub mod sample;
mod source;
pub mod wire;

pub use availability::{Violation, check_consistency, derived_state, ready_to_unlock};
pub use error::{DecodeError, FetchError};
pub use model::{
	CanvasSize, Connection, ConnectionKind, ConnectionStyle, Graph, Group, LayoutDirection,
	LayoutType, LocalizedText, Metadata, Node, NodeKind, NodeShape, NodeState, Position,
};
pub use source::{StaticTreeSource, TreeSource};
pub use wire::{decode, encode};
