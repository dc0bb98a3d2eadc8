//! Relation query layer feeding the graph.

use log::{info, warn};
use serde::Deserialize;

use crate::components::relation_graph::{
	ContentType, DocRecord, GraphData, RelationBundle, build_graph,
};
use crate::error::SourceError;

const MAX_FORK_CHILDREN: usize = 4;
const MAX_CITERS: usize = 4;
const MAX_TAG_NEIGHBORS: usize = 3;
const MAX_AUTHOR_NEIGHBORS: usize = 3;

/// Anything that can answer "what is related to this document".
pub trait RelationSource {
	/// Classified, limited relations of `center_id`.
	fn fetch(&self, center_id: &str) -> Result<RelationBundle, SourceError>;
}

/// Fetch and adapt, degrading every failure to the empty graph.
pub fn load_graph(source: &impl RelationSource, center_id: &str) -> GraphData {
	match source.fetch(center_id) {
		Ok(bundle) => {
			let graph = build_graph(center_id, &bundle);
			info!(
				"loaded relation graph for `{center_id}`: {} nodes, {} edges",
				graph.nodes.len(),
				graph.edges.len()
			);
			graph
		}
		Err(e) => {
			warn!("relation graph for `{center_id}` unavailable: {e}");
			GraphData::empty()
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryDoc {
	id: String,
	title: String,
	#[serde(default)]
	tags: Vec<String>,
	author_id: String,
	author_name: String,
	#[serde(default)]
	content_type: ContentType,
	#[serde(default)]
	forked_from: Option<String>,
	#[serde(default)]
	cites: Vec<String>,
}

impl LibraryDoc {
	fn record(&self) -> DocRecord {
		DocRecord {
			id: self.id.clone(),
			title: self.title.clone(),
			tags: self.tags.clone(),
			author_id: Some(self.author_id.clone()),
			author_name: Some(self.author_name.clone()),
			content_type: Some(self.content_type),
		}
	}
}

/// Listing row of the library.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryEntry {
	/// Document id.
	pub id: String,
	/// Document title.
	pub title: String,
	/// Post or resource.
	pub content_type: ContentType,
}

/// In-memory document library parsed once and owned by the app.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource {
	docs: Vec<LibraryDoc>,
}

impl FixtureSource {
	/// Parse a JSON array of library documents.
	pub fn from_json(json: &str) -> Result<Self, SourceError> {
		Ok(Self {
			docs: serde_json::from_str(json)?,
		})
	}

	/// The library shipped with the app.
	pub fn bundled() -> Result<Self, SourceError> {
		Self::from_json(include_str!("../fixtures/library.json"))
	}

	/// Every document, in library order.
	pub fn entries(&self) -> Vec<LibraryEntry> {
		self.docs
			.iter()
			.map(|d| LibraryEntry {
				id: d.id.clone(),
				title: d.title.clone(),
				content_type: d.content_type,
			})
			.collect()
	}

	fn records(&self, limit: usize, keep: impl Fn(&LibraryDoc) -> bool) -> Vec<DocRecord> {
		self.docs
			.iter()
			.filter(|d| keep(d))
			.take(limit)
			.map(LibraryDoc::record)
			.collect()
	}
}

impl RelationSource for FixtureSource {
	fn fetch(&self, center_id: &str) -> Result<RelationBundle, SourceError> {
		let center = self
			.docs
			.iter()
			.find(|d| d.id == center_id)
			.ok_or_else(|| SourceError::NotFound(center_id.to_string()))?;

		let fork_parent = center
			.forked_from
			.as_deref()
			.and_then(|parent| self.docs.iter().find(|d| d.id == parent))
			.map(LibraryDoc::record);
		let others = |d: &LibraryDoc| d.id != center.id;

		Ok(RelationBundle {
			center: center.record(),
			fork_parent,
			fork_children: self.records(MAX_FORK_CHILDREN, |d| {
				d.forked_from.as_deref() == Some(center_id)
			}),
			citers: self.records(MAX_CITERS, |d| d.cites.iter().any(|c| c == center_id)),
			tag_neighbors: self.records(MAX_TAG_NEIGHBORS, move |d| {
				others(d) && d.tags.iter().any(|t| center.tags.contains(t))
			}),
			author_neighbors: self.records(MAX_AUTHOR_NEIGHBORS, move |d| {
				others(d) && d.author_id == center.author_id
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::NodeGroup;

	const LIBRARY: &str = r#"[
		{ "id": "root", "title": "Root", "tags": ["graphs"], "authorId": "a", "authorName": "Ada" },
		{ "id": "c", "title": "Center", "tags": ["graphs", "layout"], "authorId": "a", "authorName": "Ada", "forkedFrom": "root" },
		{ "id": "k1", "title": "Fork 1", "tags": [], "authorId": "b", "authorName": "Bo", "forkedFrom": "c" },
		{ "id": "k2", "title": "Fork 2", "tags": ["layout"], "authorId": "b", "authorName": "Bo", "forkedFrom": "c" },
		{ "id": "k3", "title": "Fork 3", "tags": [], "authorId": "b", "authorName": "Bo", "forkedFrom": "c" },
		{ "id": "k4", "title": "Fork 4", "tags": [], "authorId": "b", "authorName": "Bo", "forkedFrom": "c" },
		{ "id": "k5", "title": "Fork 5", "tags": [], "authorId": "b", "authorName": "Bo", "forkedFrom": "c" },
		{ "id": "r", "title": "Dataset", "tags": ["maps"], "authorId": "a", "authorName": "Ada", "contentType": "resource", "cites": ["c"] }
	]"#;

	#[test]
	fn fetch_classifies_and_limits() {
		let source = FixtureSource::from_json(LIBRARY).unwrap();
		let bundle = source.fetch("c").unwrap();

		assert_eq!(bundle.fork_parent.as_ref().map(|d| d.id.as_str()), Some("root"));
		assert_eq!(bundle.fork_children.len(), MAX_FORK_CHILDREN);
		assert_eq!(bundle.citers.len(), 1);
		assert_eq!(bundle.citers[0].content_type, Some(ContentType::Resource));
		let tag_ids: Vec<_> = bundle.tag_neighbors.iter().map(|d| d.id.as_str()).collect();
		assert_eq!(tag_ids, vec!["root", "k2"]);
		let author_ids: Vec<_> = bundle.author_neighbors.iter().map(|d| d.id.as_str()).collect();
		assert_eq!(author_ids, vec!["root", "r"]);
	}

	#[test]
	fn load_graph_dedups_across_buckets() {
		let source = FixtureSource::from_json(LIBRARY).unwrap();
		let graph = load_graph(&source, "c");

		let root: Vec<_> = graph.nodes.iter().filter(|n| n.id == "root").collect();
		assert_eq!(root.len(), 1);
		assert_eq!(root[0].group, NodeGroup::Fork);
		let r = &graph.nodes[graph.index_of("r").unwrap()];
		assert_eq!(r.group, NodeGroup::Citation);
		assert_eq!(graph.nodes.len(), 7);
	}

	#[test]
	fn missing_center_degrades_to_empty_graph() {
		let source = FixtureSource::from_json(LIBRARY).unwrap();
		assert!(matches!(source.fetch("nope"), Err(SourceError::NotFound(_))));
		assert_eq!(load_graph(&source, "nope"), GraphData::empty());
	}

	#[test]
	fn malformed_library_is_an_error() {
		assert!(matches!(
			FixtureSource::from_json("{ not json"),
			Err(SourceError::Malformed(_))
		));
	}

	#[test]
	fn bundled_library_parses() {
		let source = FixtureSource::bundled().unwrap();
		let entries = source.entries();
		assert!(entries.len() > 1);
		assert!(load_graph(&source, &entries[0].id).nodes.len() > 1);
	}
}
