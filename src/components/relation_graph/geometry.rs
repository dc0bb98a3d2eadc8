//! Model-space primitives shared by hit-testing and drawing.

use std::ops::{Add, Div, Mul, Sub};

use super::types::NodeGroup;

/// Regular node box, in model units.
pub const NODE_SIZE: Size = Size::new(90.0, 36.0);
/// Center node box, in model units.
pub const CENTER_NODE_SIZE: Size = Size::new(110.0, 44.0);
/// Perpendicular bow of an edge, as a fraction of its length.
pub const EDGE_CURVATURE: f64 = 0.15;

const MIN_EDGE_LENGTH: f64 = 1e-6;

/// A point (or offset) in model or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// Build a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean length of the point seen as a vector.
	pub fn length(self) -> f64 {
		self.x.hypot(self.y)
	}

	/// Distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self - other).length()
	}

	/// Halfway point between `self` and `other`.
	pub fn midpoint(self, other: Point) -> Point {
		(self + other) / 2.0
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Point {
	type Output = Point;

	fn div(self, rhs: f64) -> Point {
		Point::new(self.x / rhs, self.y / rhs)
	}
}

/// Width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// Build a size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Axis-aligned rectangle described by its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
	/// Box center.
	pub center: Point,
	/// Box extent.
	pub size: Size,
}

impl NodeBox {
	/// Box drawn for a node of `group` positioned at `center`.
	pub fn for_group(group: NodeGroup, center: Point) -> Self {
		let size = if group == NodeGroup::Center {
			CENTER_NODE_SIZE
		} else {
			NODE_SIZE
		};
		Self { center, size }
	}

	/// Top-left corner.
	pub fn origin(&self) -> Point {
		Point::new(
			self.center.x - self.size.width / 2.0,
			self.center.y - self.size.height / 2.0,
		)
	}

	/// Inclusive containment test.
	pub fn contains(&self, p: Point) -> bool {
		(p.x - self.center.x).abs() <= self.size.width / 2.0
			&& (p.y - self.center.y).abs() <= self.size.height / 2.0
	}
}

/// Quadratic control point bowing the edge `from -> to` to its left.
///
/// Returns `None` when both ends coincide; such an edge is drawn straight.
pub fn edge_control_point(from: Point, to: Point) -> Option<Point> {
	let delta = to - from;
	let length = delta.length();
	if length < MIN_EDGE_LENGTH {
		return None;
	}
	let normal = Point::new(-delta.y / length, delta.x / length);
	Some(from.midpoint(to) + normal * (length * EDGE_CURVATURE))
}

/// Point halfway along the drawn edge (`t = 0.5` on the quadratic curve).
pub fn edge_midpoint(from: Point, to: Point) -> Point {
	let mid = from.midpoint(to);
	match edge_control_point(from, to) {
		Some(control) => mid + (control - mid) * 0.5,
		None => mid,
	}
}

/// Clamp `value` into `[min, max]`, collapsing to the middle when the range is inverted.
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
	if min > max {
		(min + max) / 2.0
	} else {
		value.clamp(min, max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn control_point_bows_by_fifteen_percent() {
		let control = edge_control_point(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).unwrap();
		assert!((control.x - 50.0).abs() < 1e-9);
		assert!((control.y - 15.0).abs() < 1e-9);
	}

	#[test]
	fn coincident_ends_fall_back_to_straight_line() {
		let p = Point::new(12.0, 34.0);
		assert_eq!(edge_control_point(p, p), None);
		assert_eq!(edge_midpoint(p, p), p);
	}

	#[test]
	fn curve_midpoint_sits_half_way_to_control() {
		let mid = edge_midpoint(Point::new(0.0, 0.0), Point::new(0.0, 200.0));
		assert!((mid.x + 15.0).abs() < 1e-9);
		assert!((mid.y - 100.0).abs() < 1e-9);
	}

	#[test]
	fn center_box_is_larger() {
		let p = Point::new(0.0, 0.0);
		let probe = Point::new(50.0, 20.0);
		assert!(NodeBox::for_group(NodeGroup::Center, p).contains(probe));
		assert!(!NodeBox::for_group(NodeGroup::Fork, p).contains(probe));
	}

	#[test]
	fn inverted_range_collapses() {
		assert_eq!(clamp_axis(5.0, 70.0, 30.0), 50.0);
		assert_eq!(clamp_axis(500.0, 70.0, 330.0), 330.0);
	}
}
