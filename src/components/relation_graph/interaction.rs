//! Pointer state machine: hover, drag and sticky selection.
//!
//! Every handler takes the pointer in both screen space (for the click slop)
//! and model space (for hit-testing and node placement); the caller inverts
//! the camera before calling in.

use super::geometry::{NodeBox, Point, Size, clamp_axis, edge_midpoint};
use super::types::{GraphData, PositionMap};

/// Nodes never get dragged closer than this to the model edges.
pub const DRAG_PADDING: f64 = 70.0;
/// Pointer travel, in screen pixels, below which a press-release is a click.
pub const CLICK_SLOP: f64 = 4.0;
/// Hover radius around an edge's drawn midpoint.
///
/// Only the midpoint is probed, so the hover region does not follow the curve
/// towards its ends.
pub const EDGE_HIT_RADIUS: f64 = 30.0;

/// What sits under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	/// Index into [`GraphData::nodes`].
	Node(usize),
	/// Index into [`GraphData::edges`].
	Edge(usize),
}

/// Node grabbed by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
	/// Grabbed node index.
	pub node: usize,
	/// Pointer minus node position at press time, in model units.
	pub grab_offset: Point,
	/// Screen point of the press.
	pub origin: Point,
	/// Set once the pointer left the click slop.
	pub moved: bool,
}

/// Transient pointer state. Hover and drag exclude each other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
	/// Nothing under the pointer.
	#[default]
	Idle,
	/// Pointer over a node, no button held.
	HoveringNode(usize),
	/// Pointer near an edge midpoint and over no node.
	HoveringEdge(usize),
	/// A node is being dragged.
	Dragging(Drag),
}

/// Topmost node under `model`, else the nearest edge midpoint in range.
pub fn hit_test(graph: &GraphData, positions: &PositionMap, model: Point) -> Option<Hit> {
	let node = graph
		.nodes
		.iter()
		.enumerate()
		.rev()
		.find(|(_, node)| {
			positions
				.get(&node.id)
				.is_some_and(|&p| NodeBox::for_group(node.group, p).contains(model))
		})
		.map(|(i, _)| Hit::Node(i));
	if node.is_some() {
		return node;
	}

	graph
		.edges
		.iter()
		.enumerate()
		.filter_map(|(i, edge)| {
			let from = *positions.get(&edge.source)?;
			let to = *positions.get(&edge.target)?;
			let distance = edge_midpoint(from, to).distance(model);
			(distance <= EDGE_HIT_RADIUS).then_some((i, distance))
		})
		.min_by(|a, b| a.1.total_cmp(&b.1))
		.map(|(i, _)| Hit::Edge(i))
}

/// Keep `p` at least [`DRAG_PADDING`] away from every side of `bounds`.
pub fn clamp_to_bounds(p: Point, bounds: Size) -> Point {
	Point::new(
		clamp_axis(p.x, DRAG_PADDING, bounds.width - DRAG_PADDING),
		clamp_axis(p.y, DRAG_PADDING, bounds.height - DRAG_PADDING),
	)
}

/// Pointer state plus the sticky selection of one view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionController {
	state: Interaction,
	selected: Option<usize>,
}

impl InteractionController {
	/// Fresh controller: idle, nothing selected.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current transient state.
	pub fn state(&self) -> Interaction {
		self.state
	}

	/// Selected node index.
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	/// Node or edge currently hovered.
	pub fn hovered(&self) -> Option<Hit> {
		match self.state {
			Interaction::HoveringNode(i) => Some(Hit::Node(i)),
			Interaction::HoveringEdge(i) => Some(Hit::Edge(i)),
			Interaction::Idle | Interaction::Dragging(_) => None,
		}
	}

	/// Whether a node is grabbed.
	pub fn is_dragging(&self) -> bool {
		matches!(self.state, Interaction::Dragging(_))
	}

	/// Back to idle, keeping the selection.
	pub fn cancel(&mut self) {
		self.state = Interaction::Idle;
	}

	/// Press. Grabs the node under the pointer, or clears the selection on empty canvas.
	///
	/// Returns whether anything visible changed.
	pub fn pointer_down(
		&mut self,
		graph: &GraphData,
		positions: &PositionMap,
		screen: Point,
		model: Point,
	) -> bool {
		match hit_test(graph, positions, model) {
			Some(Hit::Node(node)) => {
				let Some(&at) = positions.get(&graph.nodes[node].id) else {
					return false;
				};
				self.state = Interaction::Dragging(Drag {
					node,
					grab_offset: model - at,
					origin: screen,
					moved: false,
				});
				true
			}
			Some(Hit::Edge(_)) => false,
			None => {
				let changed = self.selected.is_some() || self.state != Interaction::Idle;
				self.selected = None;
				self.state = Interaction::Idle;
				changed
			}
		}
	}

	/// Move. Drags the grabbed node once outside the click slop, else updates hover.
	pub fn pointer_move(
		&mut self,
		graph: &GraphData,
		positions: &mut PositionMap,
		bounds: Size,
		screen: Point,
		model: Point,
	) -> bool {
		if let Interaction::Dragging(drag) = &mut self.state {
			if !drag.moved && screen.distance(drag.origin) < CLICK_SLOP {
				return false;
			}
			drag.moved = true;
			let id = graph.nodes[drag.node].id.clone();
			positions.insert(id, clamp_to_bounds(model - drag.grab_offset, bounds));
			return true;
		}

		let next = match hit_test(graph, positions, model) {
			Some(Hit::Node(i)) => Interaction::HoveringNode(i),
			Some(Hit::Edge(i)) => Interaction::HoveringEdge(i),
			None => Interaction::Idle,
		};
		let changed = next != self.state;
		self.state = next;
		changed
	}

	/// Release. A press that never left the click slop selects its node.
	pub fn pointer_up(&mut self) -> bool {
		let Interaction::Dragging(drag) = self.state else {
			return false;
		};
		if !drag.moved {
			self.selected = Some(drag.node);
		}
		self.state = Interaction::Idle;
		true
	}

	/// Pointer left the surface: ends a drag like a release and drops hover.
	pub fn pointer_leave(&mut self) -> bool {
		if self.is_dragging() {
			return self.pointer_up();
		}
		let changed = self.state != Interaction::Idle;
		self.state = Interaction::Idle;
		changed
	}
}
