//! JSON wire format for technology trees.
//!
//! Two payload shapes exist:
//! - current: `{ ..header, "data": { "nodes": { id: body }, "connections": [..], "metadata": {..} } }`
//! - legacy: `{ ..header, "nodes": [..], "connections": [..], "groups": [..], "metadata": {..} }`
//!
//! A non-null `data` key selects the current shape; the two are never merged.
//! Encoding always produces the current shape.

use std::collections::{BTreeMap, HashSet};

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::error::DecodeError;
use super::model::{
	CanvasSize, Connection, ConnectionKind, ConnectionStyle, Graph, Group, LayoutDirection,
	LayoutType, LocalizedText, Metadata, Node, NodeKind, NodeShape, NodeState, Position,
};

/// Replacement for a non-finite `x`.
const FALLBACK_X: f64 = 100.0;
/// Replacement for a non-finite `y`.
const FALLBACK_Y: f64 = 150.0;

/// Top-level fields shared by both shapes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHeader {
	#[serde(default)]
	id: Value,
	#[serde(default)]
	version: Value,
	#[serde(default)]
	course_id: Value,
	#[serde(default)]
	created_at: Option<String>,
	#[serde(default)]
	updated_at: Option<String>,
}

#[derive(Deserialize)]
struct LegacyPayload {
	#[serde(default)]
	nodes: Vec<WireNode>,
	#[serde(default)]
	connections: Vec<WireConnection>,
	#[serde(default)]
	groups: Vec<WireGroup>,
	#[serde(default)]
	metadata: Option<WireMetadata>,
}

#[derive(Deserialize)]
struct CurrentData {
	#[serde(default)]
	nodes: Map<String, Value>,
	#[serde(default)]
	connections: Vec<WireConnection>,
	#[serde(default)]
	groups: Vec<WireGroup>,
	#[serde(default)]
	metadata: Option<WireMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNode {
	#[serde(default)]
	id: Option<String>,
	#[serde(default)]
	title: Option<WireText>,
	#[serde(default)]
	description: Option<WireText>,
	#[serde(default, rename = "type")]
	kind: Value,
	#[serde(default)]
	position: Option<WirePosition>,
	#[serde(default)]
	style: Value,
	#[serde(default)]
	content_id: Option<String>,
	#[serde(default)]
	requirements: Vec<String>,
	#[serde(default, alias = "state")]
	status: Value,
}

#[derive(Deserialize)]
struct WirePosition {
	#[serde(default)]
	x: Value,
	#[serde(default)]
	y: Value,
}

/// Either `"text"` or `{ "en": "text", .. }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireText {
	Plain(String),
	Localized(BTreeMap<String, String>),
}

#[derive(Deserialize)]
struct WireConnection {
	#[serde(default)]
	id: Option<String>,
	#[serde(alias = "source")]
	from: String,
	#[serde(alias = "target")]
	to: String,
	#[serde(default, rename = "type")]
	kind: Value,
	#[serde(default)]
	style: Value,
	#[serde(default)]
	label: Option<String>,
}

#[derive(Deserialize)]
struct WireGroup {
	id: String,
	#[serde(default)]
	name: Option<WireText>,
	#[serde(default)]
	nodes: Vec<String>,
	#[serde(default)]
	style: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMetadata {
	#[serde(default)]
	default_language: Option<String>,
	#[serde(default)]
	available_languages: Option<Vec<String>>,
	#[serde(default)]
	layout_type: Value,
	#[serde(default)]
	layout_direction: Value,
	#[serde(default)]
	canvas_size: Option<WireCanvasSize>,
}

#[derive(Deserialize)]
struct WireCanvasSize {
	#[serde(default)]
	width: Value,
	#[serde(default)]
	height: Value,
}

/// Decodes tree text in either wire shape into a validated [`Graph`].
pub fn decode(raw: &str) -> Result<Graph, DecodeError> {
	let payload: Value = serde_json::from_str(raw).map_err(DecodeError::Syntax)?;
	let graph = match payload.get("data") {
		Some(data) if !data.is_null() => decode_current(&payload, data)?,
		_ => decode_legacy(&payload)?,
	};
	validate(&graph)?;
	Ok(graph)
}

fn decode_current(payload: &Value, data: &Value) -> Result<Graph, DecodeError> {
	let header = WireHeader::deserialize(payload).map_err(DecodeError::Structure)?;
	let data = CurrentData::deserialize(data).map_err(DecodeError::Structure)?;
	let metadata = build_metadata(data.metadata);

	let mut nodes = Vec::with_capacity(data.nodes.len());
	for (key, body) in data.nodes {
		let wire = WireNode::deserialize(&body).map_err(DecodeError::Structure)?;
		// The map key stands in for an id the body leaves out.
		let id = wire.id.clone().unwrap_or(key);
		nodes.push(build_node(id, wire, &metadata.default_language));
	}

	Ok(assemble(header, nodes, data.connections, data.groups, metadata))
}

fn decode_legacy(payload: &Value) -> Result<Graph, DecodeError> {
	let header = WireHeader::deserialize(payload).map_err(DecodeError::Structure)?;
	let legacy = LegacyPayload::deserialize(payload).map_err(DecodeError::Structure)?;
	let metadata = build_metadata(legacy.metadata);

	let mut nodes = Vec::with_capacity(legacy.nodes.len());
	for (index, mut wire) in legacy.nodes.into_iter().enumerate() {
		let Some(id) = wire.id.take() else {
			return Err(DecodeError::MissingNodeId { index });
		};
		nodes.push(build_node(id, wire, &metadata.default_language));
	}

	Ok(assemble(header, nodes, legacy.connections, legacy.groups, metadata))
}

fn assemble(
	header: WireHeader,
	nodes: Vec<Node>,
	connections: Vec<WireConnection>,
	groups: Vec<WireGroup>,
	metadata: Metadata,
) -> Graph {
	let lang = metadata.default_language.clone();
	Graph {
		id: scalar_string(&header.id),
		version: lenient_u64(&header.version),
		course_id: scalar_string(&header.course_id),
		created_at: header.created_at,
		updated_at: header.updated_at,
		nodes,
		connections: connections.into_iter().map(build_connection).collect(),
		groups: groups.into_iter().map(|g| build_group(g, &lang)).collect(),
		metadata,
	}
}

fn build_node(id: String, wire: WireNode, lang: &str) -> Node {
	let position = match wire.position {
		Some(p) => Position::new(
			finite_or(&p.x, FALLBACK_X),
			finite_or(&p.y, FALLBACK_Y),
		),
		None => synthesized_position(&id),
	};

	let mut seen = HashSet::new();
	let requirements = wire
		.requirements
		.into_iter()
		.filter(|r| seen.insert(r.clone()))
		.collect();

	Node {
		title: localized(wire.title, lang),
		description: localized(wire.description, lang),
		kind: parse_or_default(&wire.kind, NodeKind::parse, "node type", &id),
		position,
		shape: wire.style.as_str().map(NodeShape::parse).unwrap_or_default(),
		content_id: wire.content_id,
		requirements,
		state: parse_or_default(&wire.status, NodeState::parse, "node status", &id),
		id,
	}
}

fn build_connection(wire: WireConnection) -> Connection {
	let id = wire
		.id
		.unwrap_or_else(|| format!("{}->{}", wire.from, wire.to));
	Connection {
		kind: parse_or_default(&wire.kind, ConnectionKind::parse, "connection type", &id),
		style: wire
			.style
			.as_str()
			.map(ConnectionStyle::parse)
			.unwrap_or_default(),
		from: wire.from,
		to: wire.to,
		label: wire.label,
		id,
	}
}

fn build_group(wire: WireGroup, lang: &str) -> Group {
	Group {
		id: wire.id,
		name: localized(wire.name, lang),
		nodes: wire.nodes,
		style: wire.style,
	}
}

fn build_metadata(wire: Option<WireMetadata>) -> Metadata {
	let Some(wire) = wire else {
		return Metadata::default();
	};

	let default_language = wire
		.default_language
		.unwrap_or_else(|| Metadata::DEFAULT_LANGUAGE.to_string());
	let available_languages = wire
		.available_languages
		.unwrap_or_else(|| vec![default_language.clone()]);
	let canvas_size = match wire.canvas_size {
		Some(size) => CanvasSize {
			width: positive_or(&size.width, CanvasSize::DEFAULT_WIDTH),
			height: positive_or(&size.height, CanvasSize::DEFAULT_HEIGHT),
		},
		None => CanvasSize::default(),
	};

	Metadata {
		layout_type: parse_or_default(&wire.layout_type, LayoutType::parse, "layout type", "metadata"),
		layout_direction: parse_or_default(
			&wire.layout_direction,
			LayoutDirection::parse,
			"layout direction",
			"metadata",
		),
		default_language,
		available_languages,
		canvas_size,
	}
}

fn validate(graph: &Graph) -> Result<(), DecodeError> {
	let mut ids = HashSet::with_capacity(graph.nodes.len());
	for node in &graph.nodes {
		if !ids.insert(node.id.as_str()) {
			return Err(DecodeError::DuplicateNode(node.id.clone()));
		}
	}

	for node in &graph.nodes {
		if let Some(missing) = node.requirements.iter().find(|r| !ids.contains(r.as_str())) {
			return Err(DecodeError::DanglingRequirement {
				node: node.id.clone(),
				requirement: missing.clone(),
			});
		}
	}

	for conn in &graph.connections {
		for end in [&conn.from, &conn.to] {
			if !ids.contains(end.as_str()) {
				return Err(DecodeError::DanglingConnection {
					connection: conn.id.clone(),
					node: end.clone(),
				});
			}
		}
	}

	for group in &graph.groups {
		if let Some(missing) = group.nodes.iter().find(|n| !ids.contains(n.as_str())) {
			return Err(DecodeError::DanglingGroupMember {
				group: group.id.clone(),
				node: missing.clone(),
			});
		}
	}

	Ok(())
}

/// 31-multiplier string hash over UTF-16 units, wrapping at 32 bits.
/// Stable across runs and platforms.
fn id_hash(id: &str) -> i32 {
	id.encode_utf16()
		.fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Placement for a node that arrived without any position.
pub fn synthesized_position(id: &str) -> Position {
	let h = i64::from(id_hash(id));
	Position::new(
		100.0 + h.rem_euclid(500) as f64,
		150.0 + h.rem_euclid(300) as f64,
	)
}

fn parse_or_default<T: Default>(
	value: &Value,
	parse: impl Fn(&str) -> Option<T>,
	field: &str,
	owner: &str,
) -> T {
	match value.as_str() {
		Some(raw) => parse(raw).unwrap_or_else(|| {
			debug!("tech-tree: {owner}: unrecognized {field} `{raw}`, using default");
			T::default()
		}),
		None => T::default(),
	}
}

fn localized(text: Option<WireText>, lang: &str) -> LocalizedText {
	match text {
		Some(WireText::Plain(s)) => LocalizedText::single(lang, s),
		Some(WireText::Localized(map)) => map.into_iter().collect(),
		None => LocalizedText::new(),
	}
}

/// Numbers and numeric strings (including `"NaN"` and `"Infinity"`).
fn lenient_f64(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

fn finite_or(value: &Value, fallback: f64) -> f64 {
	lenient_f64(value)
		.filter(|v| v.is_finite())
		.unwrap_or(fallback)
}

fn positive_or(value: &Value, fallback: u32) -> u32 {
	let parsed = match value {
		Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	};
	parsed
		.filter(|v| *v > 0)
		.and_then(|v| u32::try_from(v).ok())
		.unwrap_or(fallback)
}

fn lenient_u64(value: &Value) -> u64 {
	let integral = |f: f64| (f.is_finite() && f >= 0.0 && f.fract() == 0.0).then_some(f as u64);
	let parsed = match value {
		Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(integral)),
		Value::String(s) => {
			let s = s.trim();
			s.parse::<u64>().ok().or_else(|| s.parse().ok().and_then(integral))
		}
		_ => None,
	};
	parsed.unwrap_or(0)
}

fn scalar_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Encodes a graph as pretty-printed current-format JSON.
pub fn encode(graph: &Graph) -> String {
	let nodes: Map<String, Value> = graph
		.nodes
		.iter()
		.map(|n| (n.id.clone(), encode_node(n)))
		.collect();

	let mut data = Map::new();
	data.insert("nodes".into(), Value::Object(nodes));
	data.insert(
		"connections".into(),
		graph.connections.iter().map(encode_connection).collect(),
	);
	if !graph.groups.is_empty() {
		data.insert("groups".into(), graph.groups.iter().map(encode_group).collect());
	}
	data.insert("metadata".into(), encode_metadata(&graph.metadata));

	let mut payload = Map::new();
	payload.insert("id".into(), json!(graph.id));
	payload.insert("version".into(), json!(graph.version));
	payload.insert("courseId".into(), json!(graph.course_id));
	if let Some(at) = &graph.created_at {
		payload.insert("createdAt".into(), json!(at));
	}
	if let Some(at) = &graph.updated_at {
		payload.insert("updatedAt".into(), json!(at));
	}
	payload.insert("data".into(), Value::Object(data));

	format!("{:#}", Value::Object(payload))
}

fn encode_text(text: &LocalizedText) -> Value {
	Value::Object(text.iter().map(|(k, v)| (k.to_string(), json!(v))).collect())
}

fn encode_node(node: &Node) -> Value {
	let mut body = json!({
		"id": node.id,
		"title": encode_text(&node.title),
		"description": encode_text(&node.description),
		"type": node.kind.as_str(),
		"position": { "x": node.position.x, "y": node.position.y },
		"style": node.shape.as_str(),
		"requirements": node.requirements,
		"status": node.state.as_str(),
	});
	if let (Some(content), Some(obj)) = (&node.content_id, body.as_object_mut()) {
		obj.insert("contentId".into(), json!(content));
	}
	body
}

fn encode_connection(conn: &Connection) -> Value {
	let mut body = json!({
		"id": conn.id,
		"from": conn.from,
		"to": conn.to,
		"type": conn.kind.as_str(),
		"style": conn.style.as_str(),
	});
	if let (Some(label), Some(obj)) = (&conn.label, body.as_object_mut()) {
		obj.insert("label".into(), json!(label));
	}
	body
}

fn encode_group(group: &Group) -> Value {
	let mut body = json!({
		"id": group.id,
		"name": encode_text(&group.name),
		"nodes": group.nodes,
	});
	if !group.style.is_null()
		&& let Some(obj) = body.as_object_mut()
	{
		obj.insert("style".into(), group.style.clone());
	}
	body
}

fn encode_metadata(meta: &Metadata) -> Value {
	json!({
		"defaultLanguage": meta.default_language,
		"availableLanguages": meta.available_languages,
		"layoutType": meta.layout_type.as_str(),
		"layoutDirection": meta.layout_direction.as_str(),
		"canvasSize": {
			"width": meta.canvas_size.width,
			"height": meta.canvas_size.height,
		},
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn legacy_single_node_gets_defaults() {
		let graph = decode(
			r#"{"nodes":[{"id":"n1","position":{"x":100,"y":150},"style":"circular","requirements":[]}],"connections":[]}"#,
		)
		.unwrap();

		assert_eq!(graph.nodes.len(), 1);
		let node = &graph.nodes[0];
		assert_eq!(node.state, NodeState::Available);
		assert_eq!(node.kind, NodeKind::Topic);
		assert_eq!(node.shape, NodeShape::Circular);
		assert_eq!(node.position, Position::new(100.0, 150.0));
		assert_eq!(graph.metadata, Metadata::default());
	}

	#[test]
	fn current_format_injects_map_keys_and_keeps_order() {
		let graph = decode(
			r#"{"id":"t1","version":3,"courseId":"c9","data":{
				"nodes":{
					"zeta":{"title":"Zeta","position":{"x":1,"y":2}},
					"alpha":{"id":"alpha","status":"LOCKED","requirements":["zeta"]}
				},
				"connections":[{"id":"e","from":"zeta","to":"alpha","type":"OPTIONAL","style":"dashed_line"}],
				"metadata":{"defaultLanguage":"de","layoutType":"RADIAL","canvasSize":{"width":1024,"height":768}}
			}}"#,
		)
		.unwrap();

		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["zeta", "alpha"]);
		assert_eq!(graph.version, 3);
		assert_eq!(graph.course_id, "c9");
		assert_eq!(graph.nodes[0].title.get("de"), Some("Zeta"));
		assert_eq!(graph.nodes[1].state, NodeState::Locked);
		assert_eq!(graph.connections[0].kind, ConnectionKind::Optional);
		assert_eq!(graph.connections[0].style, ConnectionStyle::DashedLine);
		assert_eq!(graph.metadata.layout_type, LayoutType::Radial);
		assert_eq!(graph.metadata.available_languages, ["de"]);
		assert_eq!(graph.metadata.canvas_size, CanvasSize { width: 1024, height: 768 });
	}

	#[test]
	fn data_key_wins_over_top_level_nodes() {
		let graph = decode(
			r#"{"nodes":[{"id":"legacy"}],"data":{"nodes":{"current":{}}}}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].id, "current");
	}

	#[test]
	fn null_data_falls_back_to_legacy() {
		let graph = decode(r#"{"data":null,"nodes":[{"id":"legacy"}]}"#).unwrap();
		assert_eq!(graph.nodes[0].id, "legacy");
	}

	#[test]
	fn malformed_numbers_are_repaired() {
		let graph = decode(
			r#"{"nodes":[
				{"id":"a","position":{"x":"NaN","y":42}},
				{"id":"b","position":{"x":7,"y":"-Infinity"}},
				{"id":"c","position":{"x":"12.5","y":null}}
			],
			"metadata":{"canvasSize":{"width":0,"height":-4}}}"#,
		)
		.unwrap();

		assert_eq!(graph.nodes[0].position, Position::new(100.0, 42.0));
		assert_eq!(graph.nodes[1].position, Position::new(7.0, 150.0));
		assert_eq!(graph.nodes[2].position, Position::new(12.5, 150.0));
		assert_eq!(graph.metadata.canvas_size, CanvasSize::default());
	}

	#[test]
	fn missing_position_is_synthesized_from_the_id() {
		let raw = r#"{"nodes":[{"id":"rust-basics"}]}"#;
		let first = decode(raw).unwrap().nodes[0].position;
		let second = decode(raw).unwrap().nodes[0].position;

		assert_eq!(first, second);
		assert_eq!(first, synthesized_position("rust-basics"));
		assert!((100.0..600.0).contains(&first.x));
		assert!((150.0..450.0).contains(&first.y));
	}

	#[test]
	fn id_hash_matches_the_31_multiplier_scheme() {
		assert_eq!(id_hash(""), 0);
		assert_eq!(id_hash("a"), 97);
		assert_eq!(id_hash("ab"), 97 * 31 + 98);
		assert_eq!(synthesized_position("a"), Position::new(197.0, 247.0));
	}

	#[test]
	fn unknown_enum_strings_fall_back() {
		let graph = decode(
			r#"{"nodes":[{"id":"a","type":"BOSS","status":"HIDDEN","style":"star"},{"id":"b"}],
			"connections":[{"from":"a","to":"b","type":"MAYBE","style":"zigzag"}],
			"metadata":{"layoutType":"SPIRAL","layoutDirection":"DIAGONAL"}}"#,
		)
		.unwrap();

		let node = &graph.nodes[0];
		assert_eq!(node.kind, NodeKind::Topic);
		assert_eq!(node.state, NodeState::Available);
		assert_eq!(node.shape, NodeShape::Default);
		let conn = &graph.connections[0];
		assert_eq!(conn.id, "a->b");
		assert_eq!(conn.kind, ConnectionKind::Required);
		assert_eq!(conn.style, ConnectionStyle::Plain);
		assert_eq!(graph.metadata.layout_type, LayoutType::Tree);
		assert_eq!(graph.metadata.layout_direction, LayoutDirection::Horizontal);
	}

	#[test]
	fn state_alias_and_duplicate_requirements() {
		let graph = decode(
			r#"{"nodes":[{"id":"a"},{"id":"b","state":"COMPLETED","requirements":["a","a"]}]}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes[1].state, NodeState::Completed);
		assert_eq!(graph.nodes[1].requirements, ["a"]);
	}

	#[test]
	fn decode_errors() {
		assert!(matches!(decode("{nodes:"), Err(DecodeError::Syntax(_))));
		assert!(matches!(decode(r#"{"nodes":{}}"#), Err(DecodeError::Structure(_))));
		assert!(matches!(
			decode(r#"{"nodes":[{"title":"x"}]}"#),
			Err(DecodeError::MissingNodeId { index: 0 })
		));
		assert!(matches!(
			decode(r#"{"nodes":[{"id":"a"},{"id":"a"}]}"#),
			Err(DecodeError::DuplicateNode(id)) if id == "a"
		));
		assert!(matches!(
			decode(r#"{"nodes":[{"id":"a","requirements":["ghost"]}]}"#),
			Err(DecodeError::DanglingRequirement { requirement, .. }) if requirement == "ghost"
		));
		assert!(matches!(
			decode(r#"{"nodes":[{"id":"a"}],"connections":[{"id":"c","from":"a","to":"ghost"}]}"#),
			Err(DecodeError::DanglingConnection { node, .. }) if node == "ghost"
		));
		assert!(matches!(
			decode(r#"{"nodes":[{"id":"a"}],"groups":[{"id":"g","nodes":["ghost"]}]}"#),
			Err(DecodeError::DanglingGroupMember { node, .. }) if node == "ghost"
		));
	}

	#[test]
	fn encode_emits_current_format() {
		let graph = decode(
			r##"{"id":"t","nodes":[{"id":"n1","title":{"en":"Intro"},"contentId":"lesson-1"}],
			"groups":[{"id":"g","name":"Basics","nodes":["n1"],"style":{"color":"#fff"}}]}"##,
		)
		.unwrap();
		let text = encode(&graph);
		let value: Value = serde_json::from_str(&text).unwrap();

		assert!(value.get("nodes").is_none());
		assert_eq!(value["data"]["nodes"]["n1"]["contentId"], "lesson-1");
		assert_eq!(value["data"]["nodes"]["n1"]["status"], "AVAILABLE");
		assert_eq!(value["data"]["groups"][0]["style"]["color"], "#fff");
		assert_eq!(value["data"]["metadata"]["canvasSize"]["width"], 800);
		assert_eq!(decode(&text).unwrap(), graph);
	}

	#[test]
	fn connection_endpoints_accept_source_and_target() {
		let graph = decode(
			r#"{"nodes":[{"id":"a"},{"id":"b"}],"connections":[{"source":"a","target":"b"}]}"#,
		)
		.unwrap();

		let conn = &graph.connections[0];
		assert_eq!((conn.from.as_str(), conn.to.as_str()), ("a", "b"));
		assert_eq!(conn.id, "a->b");
	}

	#[test]
	fn current_format_without_groups_has_none() {
		let graph = decode(r#"{"data":{"nodes":{"a":{}}}}"#).unwrap();
		assert!(graph.groups.is_empty());
		assert!(serde_json::from_str::<Value>(&encode(&graph)).unwrap()["data"]
			.get("groups")
			.is_none());
	}

	#[test]
	fn canvas_size_accepts_numeric_strings() {
		let graph = decode(
			r#"{"nodes":[],"metadata":{"canvasSize":{"width":"1024","height":" 768 "}}}"#,
		)
		.unwrap();
		assert_eq!(graph.metadata.canvas_size, CanvasSize { width: 1024, height: 768 });

		let graph = decode(
			r#"{"nodes":[],"metadata":{"canvasSize":{"width":"wide","height":true}}}"#,
		)
		.unwrap();
		assert_eq!(graph.metadata.canvas_size, CanvasSize::default());
	}

	#[test]
	fn integral_float_versions_are_kept() {
		assert_eq!(decode(r#"{"version":3.0,"nodes":[]}"#).unwrap().version, 3);
		assert_eq!(decode(r#"{"version":"7.0","nodes":[]}"#).unwrap().version, 7);
		assert_eq!(decode(r#"{"version":2.5,"nodes":[]}"#).unwrap().version, 0);
		assert_eq!(decode(r#"{"version":-1,"nodes":[]}"#).unwrap().version, 0);
	}

	#[test]
	fn group_style_passes_through_unchanged() {
		let graph = decode(
			r#"{"nodes":[{"id":"a"}],"groups":[{"id":"g","nodes":["a"],"style":"red"}]}"#,
		)
		.unwrap();
		assert_eq!(graph.groups[0].style, json!("red"));

		let value: Value = serde_json::from_str(&encode(&graph)).unwrap();
		assert_eq!(value["data"]["groups"][0]["style"], "red");
		assert_eq!(decode(&encode(&graph)).unwrap(), graph);
	}
}
