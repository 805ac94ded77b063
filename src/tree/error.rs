//! Error types for loading technology trees.

/// Why a payload could not become a [`Graph`](super::Graph).
///
/// Any of these aborts the whole import; no partially built graph escapes.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid JSON: {0}")]
	Syntax(#[source] serde_json::Error),
	#[error("unexpected tree shape: {0}")]
	Structure(#[source] serde_json::Error),
	#[error("node #{index} has no id")]
	MissingNodeId { index: usize },
	#[error("node `{0}` is defined more than once")]
	DuplicateNode(String),
	#[error("connection `{connection}` references unknown node `{node}`")]
	DanglingConnection { connection: String, node: String },
	#[error("node `{node}` requires unknown node `{requirement}`")]
	DanglingRequirement { node: String, requirement: String },
	#[error("group `{group}` contains unknown node `{node}`")]
	DanglingGroupMember { group: String, node: String },
}

/// Failure of the collaborator that supplies tree text for a course.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
	#[error("no tree for course `{0}`")]
	NotFound(String),
	#[error("tree source unavailable: {0}")]
	Unavailable(String),
}
