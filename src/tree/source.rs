//! Where tree text comes from.

use std::collections::HashMap;

use super::error::FetchError;

/// Supplies wire-format tree text for a course. The HTTP plumbing lives
/// behind implementations of this trait; the edit loop only sees text.
pub trait TreeSource {
	fn fetch_tree(&self, course_id: &str) -> Result<String, FetchError>;
}

/// In-memory source keyed by course id.
#[derive(Clone, Debug, Default)]
pub struct StaticTreeSource {
	trees: HashMap<String, String>,
}

impl StaticTreeSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tree(mut self, course_id: impl Into<String>, text: impl Into<String>) -> Self {
		self.trees.insert(course_id.into(), text.into());
		self
	}
}

impl TreeSource for StaticTreeSource {
	fn fetch_tree(&self, course_id: &str) -> Result<String, FetchError> {
		self.trees
			.get(course_id)
			.cloned()
			.ok_or_else(|| FetchError::NotFound(course_id.to_string()))
	}
}
