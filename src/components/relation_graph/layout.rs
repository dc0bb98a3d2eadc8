//! One-shot concentric arc placement.
//!
//! The center node sits in the middle of the viewport. Forks and citations
//! share an inner ring on opposite sides (upper left, lower right); related and
//! same-author documents share a wider ring on narrower opposite arcs (right,
//! left). Placement only looks at group membership, so identical inputs always
//! produce identical positions.

use std::f64::consts::{FRAC_PI_4, PI};

use super::geometry::Point;
use super::types::{GraphNode, NodeGroup, PositionMap};

/// Inner ring radius as a fraction of the shorter viewport side.
pub const INNER_RADIUS: f64 = 0.42;
/// Outer ring radius as a fraction of the shorter viewport side.
pub const OUTER_RADIUS: f64 = 0.48;
/// Angular sweep of the fork and citation arcs.
pub const INNER_SWEEP: f64 = 0.6 * PI;
/// Angular sweep of the related and author arcs.
pub const OUTER_SWEEP: f64 = 0.25 * PI;

#[derive(Clone, Copy, Debug)]
struct ArcPlan {
	radius: f64,
	heading: f64,
	sweep: f64,
}

// Angles follow screen axes: 0 points right, PI/2 points down.
fn arc_for(group: NodeGroup) -> Option<ArcPlan> {
	match group {
		NodeGroup::Center => None,
		NodeGroup::Fork => Some(ArcPlan {
			radius: INNER_RADIUS,
			heading: -3.0 * FRAC_PI_4,
			sweep: INNER_SWEEP,
		}),
		NodeGroup::Citation => Some(ArcPlan {
			radius: INNER_RADIUS,
			heading: FRAC_PI_4,
			sweep: INNER_SWEEP,
		}),
		NodeGroup::Related => Some(ArcPlan {
			radius: OUTER_RADIUS,
			heading: 0.0,
			sweep: OUTER_SWEEP,
		}),
		NodeGroup::Author => Some(ArcPlan {
			radius: OUTER_RADIUS,
			heading: PI,
			sweep: OUTER_SWEEP,
		}),
	}
}

/// Angle of slot `index` out of `count` evenly spaced slots on `arc`.
fn slot_angle(arc: ArcPlan, index: usize, count: usize) -> f64 {
	let step = arc.sweep / count as f64;
	arc.heading - arc.sweep / 2.0 + step * (index as f64 + 0.5)
}

/// Seed a position for every node.
pub fn compute_positions(nodes: &[GraphNode], width: f64, height: f64) -> PositionMap {
	let center = Point::new(width / 2.0, height / 2.0);
	let span = width.min(height);
	let mut positions = PositionMap::with_capacity(nodes.len());

	for group in NodeGroup::ALL {
		let members: Vec<&GraphNode> = nodes.iter().filter(|n| n.group == group).collect();
		let Some(arc) = arc_for(group) else {
			for node in members {
				positions.insert(node.id.clone(), center);
			}
			continue;
		};

		let radius = arc.radius * span;
		for (i, node) in members.iter().enumerate() {
			let angle = slot_angle(arc, i, members.len());
			let offset = Point::new(angle.cos(), angle.sin()) * radius;
			positions.insert(node.id.clone(), center + offset);
		}
	}

	positions
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::types::ContentType;

	fn node(id: &str, group: NodeGroup) -> GraphNode {
		GraphNode {
			id: id.into(),
			title: id.into(),
			group,
			tag: String::new(),
			author_name: None,
			content_type: ContentType::Post,
		}
	}

	fn sample() -> Vec<GraphNode> {
		vec![
			node("C", NodeGroup::Center),
			node("P", NodeGroup::Fork),
			node("F1", NodeGroup::Fork),
			node("X1", NodeGroup::Citation),
			node("X2", NodeGroup::Citation),
			node("X3", NodeGroup::Citation),
			node("R1", NodeGroup::Related),
			node("A1", NodeGroup::Author),
			node("A2", NodeGroup::Author),
		]
	}

	#[test]
	fn placement_is_deterministic() {
		let nodes = sample();
		assert_eq!(
			compute_positions(&nodes, 640.0, 360.0),
			compute_positions(&nodes, 640.0, 360.0)
		);
	}

	#[test]
	fn center_sits_in_the_middle() {
		let positions = compute_positions(&sample(), 640.0, 360.0);
		assert_eq!(positions["C"], Point::new(320.0, 180.0));
	}

	#[test]
	fn every_node_gets_a_position() {
		let nodes = sample();
		let positions = compute_positions(&nodes, 500.0, 500.0);
		assert_eq!(positions.len(), nodes.len());
	}

	#[test]
	fn single_fork_and_citer_sit_mid_arc_on_inner_ring() {
		let nodes = vec![
			node("C", NodeGroup::Center),
			node("F", NodeGroup::Fork),
			node("X", NodeGroup::Citation),
		];
		let positions = compute_positions(&nodes, 800.0, 400.0);
		let center = positions["C"];
		let radius = INNER_RADIUS * 400.0;

		for (id, heading) in [("F", -3.0 * FRAC_PI_4), ("X", FRAC_PI_4)] {
			let offset = positions[id] - center;
			assert!((offset.length() - radius).abs() < 1e-9);
			assert!((offset.y.atan2(offset.x) - heading).abs() < 1e-9);
		}
		assert!(positions["F"].x < center.x && positions["F"].y < center.y);
		assert!(positions["X"].x > center.x && positions["X"].y > center.y);
	}

	#[test]
	fn group_members_spread_across_their_sweep() {
		let positions = compute_positions(&sample(), 600.0, 600.0);
		let center = positions["C"];
		let angles: Vec<f64> = ["X1", "X2", "X3"]
			.iter()
			.map(|id| {
				let o = positions[*id] - center;
				o.y.atan2(o.x)
			})
			.collect();
		let step = INNER_SWEEP / 3.0;
		assert!((angles[1] - angles[0] - step).abs() < 1e-9);
		assert!((angles[2] - angles[1] - step).abs() < 1e-9);
		assert!((angles[1] - FRAC_PI_4).abs() < 1e-9);

		let outer = (positions["R1"] - center).length();
		assert!((outer - OUTER_RADIUS * 600.0).abs() < 1e-9);
		assert!(positions["A1"].x < center.x && positions["A2"].x < center.x);
	}
}
