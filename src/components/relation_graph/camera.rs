//! Zoom camera about the viewport center.

use super::geometry::{Point, Size};

/// Smallest zoom factor.
pub const MIN_ZOOM: f64 = 0.4;
/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 2.0;
/// Multiplicative zoom step.
pub const ZOOM_STEP: f64 = 1.2;

/// Logical (CSS pixel) size of a drawing surface. Model space has the same extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Surface extent.
	pub size: Size,
}

impl Viewport {
	/// Build a viewport.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			size: Size::new(width, height),
		}
	}

	/// Geometric center, the fixed point of zooming.
	pub fn center(&self) -> Point {
		Point::new(self.size.width / 2.0, self.size.height / 2.0)
	}
}

/// Per-view zoom state. Zoom scales uniformly about the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
	zoom: f64,
	default_zoom: f64,
}

impl Camera {
	/// Camera starting (and resetting) at `default_zoom`.
	pub fn new(default_zoom: f64) -> Self {
		let default_zoom = default_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
		Self {
			zoom: default_zoom,
			default_zoom,
		}
	}

	/// Current zoom factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// Scale up one step.
	pub fn zoom_in(&mut self) {
		self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
	}

	/// Scale down one step.
	pub fn zoom_out(&mut self) {
		self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
	}

	/// Restore the default zoom.
	pub fn reset(&mut self) {
		self.zoom = self.default_zoom;
	}

	/// `center + (model - center) * zoom`
	pub fn model_to_screen(&self, viewport: &Viewport, model: Point) -> Point {
		let c = viewport.center();
		c + (model - c) * self.zoom
	}

	/// Inverse of [`Camera::model_to_screen`].
	pub fn screen_to_model(&self, viewport: &Viewport, screen: Point) -> Point {
		let c = viewport.center();
		c + (screen - c) / self.zoom
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn three_zoom_steps_from_compact_default() {
		let mut camera = Camera::new(0.85);
		for _ in 0..3 {
			camera.zoom_in();
		}
		assert!((camera.zoom() - 0.85 * 1.2_f64.powi(3)).abs() < 1e-12);
		assert!((camera.zoom() - 1.47).abs() < 0.005);
		assert!(camera.zoom() < MAX_ZOOM);
	}

	#[test]
	fn zoom_is_bounded() {
		let mut camera = Camera::new(0.9);
		for _ in 0..20 {
			camera.zoom_in();
		}
		assert_eq!(camera.zoom(), MAX_ZOOM);
		for _ in 0..40 {
			camera.zoom_out();
		}
		assert_eq!(camera.zoom(), MIN_ZOOM);
		camera.reset();
		assert_eq!(camera.zoom(), 0.9);
	}

	#[test]
	fn screen_model_round_trip() {
		let viewport = Viewport::new(640.0, 360.0);
		let p = Point::new(123.4, -56.7);
		for zoom in [0.4, 0.85, 1.0, 1.2, 1.7, 2.0] {
			let camera = Camera::new(zoom);
			let back = camera.screen_to_model(&viewport, camera.model_to_screen(&viewport, p));
			assert!(back.distance(p) < 1e-9, "zoom {zoom}: {back:?}");
		}
	}

	#[test]
	fn zoom_pivots_on_viewport_center() {
		let viewport = Viewport::new(400.0, 300.0);
		let camera = Camera::new(2.0);
		assert_eq!(
			camera.model_to_screen(&viewport, viewport.center()),
			viewport.center()
		);
		assert_eq!(
			camera.model_to_screen(&viewport, Point::new(300.0, 150.0)),
			Point::new(400.0, 150.0)
		);
	}
}
