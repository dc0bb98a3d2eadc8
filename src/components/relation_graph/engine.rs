//! One view instance: a graph, its own positions, camera and pointer state.
//!
//! The compact and expanded views each own an engine; nothing here is shared
//! between them except the immutable graph.

use std::sync::Arc;

use log::debug;

use super::camera::{Camera, Viewport};
use super::geometry::Point;
use super::interaction::{Hit, Interaction, InteractionController};
use super::layout::compute_positions;
use super::render::{Frame, render};
use super::surface::Surface;
use super::types::{EdgeType, GraphData, GraphNode, NavigationIntent, PositionMap};

/// Overlay-facing summary of an engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewSnapshot {
	/// Current zoom factor.
	pub zoom: f64,
	/// Selected node.
	pub selected: Option<GraphNode>,
	/// Relation under the pointer.
	pub hovered_edge: Option<EdgeType>,
	/// Whether the selection can be opened.
	pub can_open: bool,
}

/// Parametrized view engine.
pub struct GraphEngine {
	graph: Arc<GraphData>,
	viewport: Viewport,
	camera: Camera,
	positions: PositionMap,
	controller: InteractionController,
}

impl GraphEngine {
	/// Engine with positions freshly seeded for `viewport`.
	pub fn new(graph: Arc<GraphData>, viewport: Viewport, default_zoom: f64) -> Self {
		let positions = compute_positions(&graph.nodes, viewport.size.width, viewport.size.height);
		debug!(
			"graph view mounted: {} nodes, {}x{}",
			graph.nodes.len(),
			viewport.size.width,
			viewport.size.height
		);
		Self {
			graph,
			viewport,
			camera: Camera::new(default_zoom),
			positions,
			controller: InteractionController::new(),
		}
	}

	/// Current node positions.
	pub fn positions(&self) -> &PositionMap {
		&self.positions
	}

	/// Current camera.
	pub fn camera(&self) -> &Camera {
		&self.camera
	}

	/// Track a new surface size. Positions are kept.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if viewport == self.viewport {
			return false;
		}
		self.viewport = viewport;
		true
	}

	fn to_model(&self, screen: Point) -> Point {
		self.camera.screen_to_model(&self.viewport, screen)
	}

	/// Pointer pressed at `screen` (surface-local CSS pixels).
	pub fn pointer_down(&mut self, screen: Point) -> bool {
		let model = self.to_model(screen);
		self.controller
			.pointer_down(&self.graph, &self.positions, screen, model)
	}

	/// Pointer moved to `screen`.
	pub fn pointer_move(&mut self, screen: Point) -> bool {
		let model = self.to_model(screen);
		self.controller.pointer_move(
			&self.graph,
			&mut self.positions,
			self.viewport.size,
			screen,
			model,
		)
	}

	/// Pointer released.
	pub fn pointer_up(&mut self) -> bool {
		self.controller.pointer_up()
	}

	/// Pointer left the surface.
	pub fn pointer_leave(&mut self) -> bool {
		self.controller.pointer_leave()
	}

	/// Zoom in one step.
	pub fn zoom_in(&mut self) -> bool {
		self.camera.zoom_in();
		debug!("zoom {:.2}", self.camera.zoom());
		true
	}

	/// Zoom out one step.
	pub fn zoom_out(&mut self) -> bool {
		self.camera.zoom_out();
		debug!("zoom {:.2}", self.camera.zoom());
		true
	}

	/// Restore default zoom and reseed every position.
	pub fn reset(&mut self) -> bool {
		self.camera.reset();
		self.positions = compute_positions(
			&self.graph.nodes,
			self.viewport.size.width,
			self.viewport.size.height,
		);
		self.controller.cancel();
		debug!("graph layout reset");
		true
	}

	/// Selected node.
	pub fn selected_node(&self) -> Option<&GraphNode> {
		self.controller.selected().and_then(|i| self.graph.nodes.get(i))
	}

	/// Relation type of the hovered edge.
	pub fn hovered_edge(&self) -> Option<EdgeType> {
		match self.controller.hovered() {
			Some(Hit::Edge(i)) => self.graph.edges.get(i).map(|e| e.kind),
			_ => None,
		}
	}

	/// Where to go if the user confirms the current selection.
	pub fn navigation_intent(&self) -> Option<NavigationIntent> {
		self.selected_node().and_then(NavigationIntent::for_node)
	}

	/// CSS cursor for the current pointer state.
	pub fn cursor(&self) -> &'static str {
		match self.controller.state() {
			Interaction::Dragging(_) => "grabbing",
			Interaction::HoveringNode(_) => "pointer",
			Interaction::HoveringEdge(_) | Interaction::Idle => "default",
		}
	}

	/// Summary for the overlay.
	pub fn snapshot(&self) -> ViewSnapshot {
		ViewSnapshot {
			zoom: self.camera.zoom(),
			selected: self.selected_node().cloned(),
			hovered_edge: self.hovered_edge(),
			can_open: self.navigation_intent().is_some(),
		}
	}

	/// Repaint `surface` from scratch.
	pub fn draw(&self, surface: &mut impl Surface, pixel_ratio: f64) {
		render(
			surface,
			&Frame {
				graph: &self.graph,
				positions: &self.positions,
				width: self.viewport.size.width,
				height: self.viewport.size.height,
				zoom: self.camera.zoom(),
				pixel_ratio,
				hover: self.controller.hovered(),
				selected: self.controller.selected(),
			},
		);
	}
}
