//! Turns a classified relation bundle into the node/edge model.

use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

use super::types::{ContentType, EdgeType, GraphData, GraphEdge, GraphNode, NodeGroup};

/// One document as returned by the relation query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRecord {
	/// Document id.
	pub id: String,
	/// Document title.
	pub title: String,
	/// Tags, most relevant first.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Author id.
	#[serde(default)]
	pub author_id: Option<String>,
	/// Author display name.
	#[serde(default)]
	pub author_name: Option<String>,
	/// Absent for posts.
	#[serde(default)]
	pub content_type: Option<ContentType>,
}

/// Documents related to a center, already classified and limited by the query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationBundle {
	/// The document being viewed.
	pub center: DocRecord,
	/// Document the center was forked from.
	#[serde(default)]
	pub fork_parent: Option<DocRecord>,
	/// Forks of the center.
	#[serde(default)]
	pub fork_children: Vec<DocRecord>,
	/// Documents citing the center.
	#[serde(default)]
	pub citers: Vec<DocRecord>,
	/// Documents sharing a tag with the center.
	#[serde(default)]
	pub tag_neighbors: Vec<DocRecord>,
	/// Documents by the same author.
	#[serde(default)]
	pub author_neighbors: Vec<DocRecord>,
}

struct Builder<'a> {
	center: &'a DocRecord,
	seen: HashSet<&'a str>,
	graph: GraphData,
}

impl<'a> Builder<'a> {
	fn new(center: &'a DocRecord) -> Self {
		let mut seen = HashSet::new();
		seen.insert(center.id.as_str());
		let graph = GraphData {
			nodes: vec![make_node(center, NodeGroup::Center, first_tag(center))],
			edges: Vec::new(),
		};
		Self { center, seen, graph }
	}

	/// Adds `record` unless an earlier bucket already claimed its id.
	fn add(&mut self, record: &'a DocRecord, group: NodeGroup, kind: EdgeType, inbound: bool) {
		if !self.seen.insert(record.id.as_str()) {
			return;
		}
		let tag = match group {
			NodeGroup::Related => shared_tag(self.center, record).unwrap_or_else(|| first_tag(record)),
			_ => first_tag(record),
		};
		self.graph.nodes.push(make_node(record, group, tag));

		let (source, target) = if inbound {
			(record.id.clone(), self.center.id.clone())
		} else {
			(self.center.id.clone(), record.id.clone())
		};
		self.graph.edges.push(GraphEdge {
			source,
			target,
			kind,
		});
	}
}

fn make_node(record: &DocRecord, group: NodeGroup, tag: String) -> GraphNode {
	GraphNode {
		id: record.id.clone(),
		title: record.title.clone(),
		group,
		tag,
		author_name: record.author_name.clone(),
		content_type: record.content_type.unwrap_or_default(),
	}
}

fn first_tag(record: &DocRecord) -> String {
	record.tags.first().cloned().unwrap_or_default()
}

fn shared_tag(center: &DocRecord, other: &DocRecord) -> Option<String> {
	other.tags.iter().find(|t| center.tags.contains(t)).cloned()
}

/// Build the graph around `center_id`.
///
/// Buckets are visited fork, citation, related, author; a document appearing
/// in several buckets keeps the first group it was added under and contributes
/// a single edge. A bundle centered on another document yields the empty graph.
pub fn build_graph(center_id: &str, bundle: &RelationBundle) -> GraphData {
	if bundle.center.id != center_id {
		warn!(
			"relation bundle is centered on `{}`, expected `{}`",
			bundle.center.id, center_id
		);
		return GraphData::empty();
	}

	let mut builder = Builder::new(&bundle.center);
	if let Some(parent) = &bundle.fork_parent {
		builder.add(parent, NodeGroup::Fork, EdgeType::Fork, false);
	}
	for child in &bundle.fork_children {
		builder.add(child, NodeGroup::Fork, EdgeType::Fork, true);
	}
	for citer in &bundle.citers {
		builder.add(citer, NodeGroup::Citation, EdgeType::Citation, true);
	}
	for neighbor in &bundle.tag_neighbors {
		builder.add(neighbor, NodeGroup::Related, EdgeType::SharedTag, false);
	}
	for neighbor in &bundle.author_neighbors {
		builder.add(neighbor, NodeGroup::Author, EdgeType::SharedAuthor, false);
	}
	builder.graph
}
