use super::geometry::{NodeBox, Point, edge_control_point};
use super::interaction::Hit;
use super::style::{self, BACKGROUND, NODE_SHADOW, SELECTION_BORDER};
use super::surface::{BoxFill, Stroke, Surface, TextStyle};
use super::types::{GraphData, NodeGroup, PositionMap};

const EDGE_WIDTH: f64 = 1.6;
const HOVERED_EDGE_WIDTH: f64 = 3.2;
const EDGE_GLOW: f64 = 10.0;
const NODE_RADIUS: f64 = 8.0;
const SHADOW_BLUR: f64 = 14.0;
const SELECTION_WIDTH: f64 = 2.0;

/// Everything one redraw depends on.
pub struct Frame<'a> {
	/// Nodes and edges.
	pub graph: &'a GraphData,
	/// Current node positions.
	pub positions: &'a PositionMap,
	/// Logical surface width.
	pub width: f64,
	/// Logical surface height.
	pub height: f64,
	/// Camera zoom.
	pub zoom: f64,
	/// Device pixels per CSS pixel.
	pub pixel_ratio: f64,
	/// Hovered node or edge.
	pub hover: Option<Hit>,
	/// Selected node index.
	pub selected: Option<usize>,
}

/// Redraw the whole surface: background, then edges, then nodes.
pub fn render(surface: &mut impl Surface, frame: &Frame<'_>) {
	surface.begin_frame(
		frame.width,
		frame.height,
		frame.pixel_ratio,
		frame.zoom,
		BACKGROUND,
	);
	draw_edges(surface, frame);
	draw_nodes(surface, frame);
}

fn draw_edges(surface: &mut impl Surface, frame: &Frame<'_>) {
	for (i, edge) in frame.graph.edges.iter().enumerate() {
		let (Some(&from), Some(&to)) = (
			frame.positions.get(&edge.source),
			frame.positions.get(&edge.target),
		) else {
			continue;
		};
		let hovered = frame.hover == Some(Hit::Edge(i));
		let color = style::edge_color(edge.kind);
		let stroke = Stroke {
			color,
			width: if hovered { HOVERED_EDGE_WIDTH } else { EDGE_WIDTH },
			dash: style::edge_dash(edge.kind),
			glow: if hovered { EDGE_GLOW } else { 0.0 },
		};
		surface.stroke_curve(from, edge_control_point(from, to), to, &stroke);
	}
}

fn draw_nodes(surface: &mut impl Surface, frame: &Frame<'_>) {
	for (i, node) in frame.graph.nodes.iter().enumerate() {
		let Some(&at) = frame.positions.get(&node.id) else {
			continue;
		};
		let is_center = node.group == NodeGroup::Center;
		let hovered = frame.hover == Some(Hit::Node(i));
		let fill_color = style::group_color(node.group);

		let node_box = NodeBox::for_group(node.group, at);
		let fill = BoxFill {
			color: fill_color,
			radius: NODE_RADIUS,
			shadow: (is_center || hovered).then_some((NODE_SHADOW, SHADOW_BLUR)),
			border: (frame.selected == Some(i)).then_some((SELECTION_BORDER, SELECTION_WIDTH)),
		};
		surface.fill_box(&node_box, &fill);

		let color = style::text_color(fill_color);
		let (font, chars, gap) = if is_center {
			(style::CENTER_TITLE_FONT, style::CENTER_TITLE_CHARS, 8.0)
		} else {
			(style::TITLE_FONT, style::TITLE_CHARS, 6.5)
		};
		if node.tag.is_empty() {
			surface.fill_text(&style::truncate(&node.title, chars), at, &TextStyle { font, color });
			continue;
		}
		surface.fill_text(
			&style::truncate(&node.title, chars),
			at - Point::new(0.0, gap),
			&TextStyle { font, color },
		);
		surface.fill_text(
			&style::truncate(&node.tag, chars),
			at + Point::new(0.0, gap + 1.0),
			&TextStyle {
				font: style::TAG_FONT,
				color,
			},
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::types::{ContentType, EdgeType, GraphEdge, GraphNode};

	#[derive(Debug, PartialEq)]
	enum Op {
		Frame { backing: (f64, f64), zoom: f64 },
		Curve { color: String, dashed: bool, curved: bool, width: f64, glow: f64 },
		Box { color: String, shadow: bool, border: bool },
		Text(String),
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn begin_frame(&mut self, w: f64, h: f64, ratio: f64, zoom: f64, _: &str) {
			self.0.push(Op::Frame {
				backing: (w * ratio, h * ratio),
				zoom,
			});
		}

		fn stroke_curve(&mut self, _: Point, control: Option<Point>, _: Point, s: &Stroke<'_>) {
			self.0.push(Op::Curve {
				color: s.color.into(),
				dashed: !s.dash.is_empty(),
				curved: control.is_some(),
				width: s.width,
				glow: s.glow,
			});
		}

		fn fill_box(&mut self, _: &NodeBox, f: &BoxFill<'_>) {
			self.0.push(Op::Box {
				color: f.color.into(),
				shadow: f.shadow.is_some(),
				border: f.border.is_some(),
			});
		}

		fn fill_text(&mut self, text: &str, _: Point, _: &TextStyle<'_>) {
			self.0.push(Op::Text(text.into()));
		}
	}

	fn node(id: &str, group: NodeGroup, tag: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			title: format!("A rather long title for {id}"),
			group,
			tag: tag.into(),
			author_name: None,
			content_type: ContentType::Post,
		}
	}

	fn graph() -> GraphData {
		GraphData {
			nodes: vec![
				node("C", NodeGroup::Center, "graphs"),
				node("F", NodeGroup::Fork, ""),
				node("X", NodeGroup::Citation, "maps"),
			],
			edges: vec![
				GraphEdge {
					source: "F".into(),
					target: "C".into(),
					kind: EdgeType::Fork,
				},
				GraphEdge {
					source: "X".into(),
					target: "C".into(),
					kind: EdgeType::Citation,
				},
			],
		}
	}

	fn positions() -> PositionMap {
		PositionMap::from([
			("C".to_string(), Point::new(200.0, 150.0)),
			("F".to_string(), Point::new(100.0, 80.0)),
			("X".to_string(), Point::new(300.0, 220.0)),
		])
	}

	fn frame<'a>(graph: &'a GraphData, positions: &'a PositionMap) -> Frame<'a> {
		Frame {
			graph,
			positions,
			width: 400.0,
			height: 300.0,
			zoom: 0.85,
			pixel_ratio: 1.5,
			hover: None,
			selected: None,
		}
	}

	#[test]
	fn frame_then_edges_then_nodes() {
		let (g, p) = (graph(), positions());
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&g, &p));

		assert_eq!(
			rec.0[0],
			Op::Frame {
				backing: (600.0, 450.0),
				zoom: 0.85
			}
		);
		let first_box = rec.0.iter().position(|op| matches!(op, Op::Box { .. })).unwrap();
		let last_curve = rec.0.iter().rposition(|op| matches!(op, Op::Curve { .. })).unwrap();
		assert!(last_curve < first_box);
	}

	#[test]
	fn citation_is_dashed_and_fork_is_solid() {
		let (g, p) = (graph(), positions());
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&g, &p));

		let dashes: Vec<bool> = rec
			.0
			.iter()
			.filter_map(|op| match op {
				Op::Curve { dashed, .. } => Some(*dashed),
				_ => None,
			})
			.collect();
		assert_eq!(dashes, vec![false, true]);
	}

	#[test]
	fn hovered_edge_is_thicker_and_glows() {
		let (g, p) = (graph(), positions());
		let mut rec = Recorder::default();
		let mut f = frame(&g, &p);
		f.hover = Some(Hit::Edge(1));
		render(&mut rec, &f);

		let curves: Vec<(f64, f64)> = rec
			.0
			.iter()
			.filter_map(|op| match op {
				Op::Curve { width, glow, .. } => Some((*width, *glow)),
				_ => None,
			})
			.collect();
		assert!(curves[1].0 > curves[0].0);
		assert!(curves[1].1 > 0.0 && curves[0].1 == 0.0);
	}

	#[test]
	fn coincident_nodes_draw_a_straight_edge() {
		let g = graph();
		let mut p = positions();
		p.insert("F".into(), Point::new(200.0, 150.0));
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&g, &p));

		assert!(rec.0.contains(&Op::Curve {
			color: style::edge_color(EdgeType::Fork).into(),
			dashed: false,
			curved: false,
			width: EDGE_WIDTH,
			glow: 0.0,
		}));
	}

	#[test]
	fn shadows_for_center_and_hover_border_for_selection() {
		let (g, p) = (graph(), positions());
		let mut rec = Recorder::default();
		let mut f = frame(&g, &p);
		f.hover = Some(Hit::Node(2));
		f.selected = Some(1);
		render(&mut rec, &f);

		let boxes: Vec<(bool, bool)> = rec
			.0
			.iter()
			.filter_map(|op| match op {
				Op::Box { shadow, border, .. } => Some((*shadow, *border)),
				_ => None,
			})
			.collect();
		assert_eq!(boxes, vec![(true, false), (false, true), (true, false)]);
	}

	#[test]
	fn titles_are_truncated_and_tags_stacked() {
		let (g, p) = (graph(), positions());
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&g, &p));

		let texts: Vec<&str> = rec
			.0
			.iter()
			.filter_map(|op| match op {
				Op::Text(t) => Some(t.as_str()),
				_ => None,
			})
			.collect();
		assert_eq!(
			texts,
			vec![
				"A rather long tit…",
				"graphs",
				"A rather long…",
				"A rather long…",
				"maps"
			]
		);
	}
}
