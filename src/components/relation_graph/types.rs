use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::geometry::Point;

/// Node id to model-space position.
pub type PositionMap = HashMap<String, Point>;

/// Relationship category of a node relative to the center document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeGroup {
	/// The document being viewed.
	Center,
	/// Fork parent or fork child.
	Fork,
	/// Document citing the center.
	Citation,
	/// Shares a tag with the center.
	Related,
	/// Shares an author with the center.
	Author,
}

impl NodeGroup {
	/// Every group, in legend order.
	pub const ALL: [NodeGroup; 5] = [
		NodeGroup::Center,
		NodeGroup::Fork,
		NodeGroup::Citation,
		NodeGroup::Related,
		NodeGroup::Author,
	];

	/// Human readable name.
	pub fn label(self) -> &'static str {
		match self {
			Self::Center => "Current",
			Self::Fork => "Fork",
			Self::Citation => "Citation",
			Self::Related => "Related",
			Self::Author => "Same author",
		}
	}
}

/// Kind of document a node points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
	/// A research post.
	#[default]
	Post,
	/// A shared resource.
	Resource,
}

impl ContentType {
	/// Lowercase identifier, as used in routes.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Post => "post",
			Self::Resource => "resource",
		}
	}
}

impl fmt::Display for ContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of relationship an edge stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeType {
	/// Source was forked from target.
	Fork,
	/// Source cites target.
	Citation,
	/// Both ends share a tag.
	SharedTag,
	/// Both ends share an author.
	SharedAuthor,
}

impl EdgeType {
	/// Every edge type, in legend order.
	pub const ALL: [EdgeType; 4] = [
		EdgeType::Fork,
		EdgeType::Citation,
		EdgeType::SharedTag,
		EdgeType::SharedAuthor,
	];

	/// Human readable name.
	pub fn label(self) -> &'static str {
		match self {
			Self::Fork => "Fork",
			Self::Citation => "Cites",
			Self::SharedTag => "Shared tag",
			Self::SharedAuthor => "Shared author",
		}
	}

	/// Whether the edge is stroked with a dash pattern.
	pub fn is_dashed(self) -> bool {
		matches!(self, Self::Citation | Self::SharedTag)
	}
}

/// A document in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Stable document id.
	pub id: String,
	/// Full title, truncated only when drawn.
	pub title: String,
	/// Fixed relationship category.
	pub group: NodeGroup,
	/// Secondary label.
	pub tag: String,
	/// Author display name, when known.
	pub author_name: Option<String>,
	/// Navigation target kind.
	pub content_type: ContentType,
}

/// A typed, directed relationship between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Relationship kind.
	pub kind: EdgeType,
}

/// Immutable node/edge arrays of one successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes, center first.
	pub nodes: Vec<GraphNode>,
	/// Edges referencing ids in `nodes`.
	pub edges: Vec<GraphEdge>,
}

#[cfg(test)]
impl GraphData {
	pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}
}

impl GraphData {
	/// Graph for a center document that could not be loaded.
	pub fn empty() -> Self {
		Self::default()
	}

	/// The center node, if any.
	pub fn center(&self) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.group == NodeGroup::Center)
	}

	/// Number of nodes per group, in legend order, skipping empty groups.
	pub fn group_counts(&self) -> Vec<(NodeGroup, usize)> {
		NodeGroup::ALL
			.iter()
			.map(|&g| (g, self.nodes.iter().filter(|n| n.group == g).count()))
			.filter(|&(_, count)| count > 0)
			.collect()
	}
}

/// Where the host should go after the user confirms a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
	/// Target document id.
	pub id: String,
	/// Target document kind.
	pub content_type: ContentType,
}

impl NavigationIntent {
	/// Intent for `node`; the center node never navigates.
	pub fn for_node(node: &GraphNode) -> Option<Self> {
		(node.group != NodeGroup::Center).then(|| Self {
			id: node.id.clone(),
			content_type: node.content_type,
		})
	}
}

/// Load state of the graph as seen by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphLoad {
	/// The relationship query is outstanding.
	Loading,
	/// The query finished; the graph may be empty.
	Ready(Arc<GraphData>),
}

/// What the host should show for a given load state.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphDisplay {
	/// Query outstanding.
	Loading,
	/// The center document could not be loaded.
	Unavailable,
	/// Only the center node exists.
	NoConnections,
	/// Enough nodes for an interactive canvas.
	Interactive(Arc<GraphData>),
}

impl GraphLoad {
	/// Placeholder or canvas decision.
	pub fn display(&self) -> GraphDisplay {
		match self {
			Self::Loading => GraphDisplay::Loading,
			Self::Ready(graph) => match graph.nodes.len() {
				0 => GraphDisplay::Unavailable,
				1 => GraphDisplay::NoConnections,
				_ => GraphDisplay::Interactive(Arc::clone(graph)),
			},
		}
	}
}
