//! Immediate-mode drawing surface used by the renderer.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{NodeBox, Point};
use crate::error::SurfaceError;

/// Stroke parameters for one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke<'a> {
	/// CSS colour.
	pub color: &'a str,
	/// Line width in model units.
	pub width: f64,
	/// Dash pattern, empty for solid lines.
	pub dash: &'a [f64],
	/// Glow radius, zero for none.
	pub glow: f64,
}

/// Fill parameters for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxFill<'a> {
	/// CSS colour.
	pub color: &'a str,
	/// Corner radius.
	pub radius: f64,
	/// Soft shadow `(colour, blur)`.
	pub shadow: Option<(&'a str, f64)>,
	/// Border `(colour, width)`.
	pub border: Option<(&'a str, f64)>,
}

/// Text parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle<'a> {
	/// CSS font shorthand.
	pub font: &'a str,
	/// CSS colour.
	pub color: &'a str,
}

/// Minimal 2D drawing surface. All coordinates after [`Surface::begin_frame`]
/// are in model space.
pub trait Surface {
	/// Resize the backing store to `width * pixel_ratio` by `height * pixel_ratio`,
	/// clear it to `background` and install the model transform: uniform `zoom`
	/// about the viewport center.
	fn begin_frame(&mut self, width: f64, height: f64, pixel_ratio: f64, zoom: f64, background: &str);

	/// Quadratic curve from `from` to `to`, straight when `control` is `None`.
	fn stroke_curve(&mut self, from: Point, control: Option<Point>, to: Point, stroke: &Stroke<'_>);

	/// Rounded rectangle.
	fn fill_box(&mut self, node: &NodeBox, fill: &BoxFill<'_>);

	/// Text centered on `at`.
	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>);
}

/// [`Surface`] backed by an HTML canvas.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas`, acquiring its 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| SurfaceError::ContextUnavailable(format!("{e:?}")))?
			.ok_or_else(|| SurfaceError::ContextUnavailable("no 2d context".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::ContextUnavailable("unexpected context type".into()))?;
		Ok(Self { canvas, ctx })
	}

	/// The wrapped canvas element.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	fn set_dash(&self, dash: &[f64]) {
		let pattern = js_sys::Array::new();
		for d in dash {
			pattern.push(&JsValue::from_f64(*d));
		}
		let _ = self.ctx.set_line_dash(&pattern);
	}

	fn rounded_rect_path(&self, node: &NodeBox, radius: f64) {
		let o = node.origin();
		let (w, h) = (node.size.width, node.size.height);
		let r = radius.min(w / 2.0).min(h / 2.0);
		let ctx = &self.ctx;
		ctx.begin_path();
		ctx.move_to(o.x + r, o.y);
		ctx.line_to(o.x + w - r, o.y);
		let _ = ctx.arc(o.x + w - r, o.y + r, r, -PI / 2.0, 0.0);
		ctx.line_to(o.x + w, o.y + h - r);
		let _ = ctx.arc(o.x + w - r, o.y + h - r, r, 0.0, PI / 2.0);
		ctx.line_to(o.x + r, o.y + h);
		let _ = ctx.arc(o.x + r, o.y + h - r, r, PI / 2.0, PI);
		ctx.line_to(o.x, o.y + r);
		let _ = ctx.arc(o.x + r, o.y + r, r, PI, 1.5 * PI);
		ctx.close_path();
	}
}

impl Surface for CanvasSurface {
	fn begin_frame(&mut self, width: f64, height: f64, pixel_ratio: f64, zoom: f64, background: &str) {
		let (bw, bh) = (
			(width * pixel_ratio).round() as u32,
			(height * pixel_ratio).round() as u32,
		);
		if self.canvas.width() != bw {
			self.canvas.set_width(bw);
		}
		if self.canvas.height() != bh {
			self.canvas.set_height(bh);
		}

		let ctx = &self.ctx;
		let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
		ctx.set_fill_style_str(background);
		ctx.fill_rect(0.0, 0.0, width, height);

		let (cx, cy) = (width / 2.0, height / 2.0);
		let _ = ctx.translate(cx, cy);
		let _ = ctx.scale(zoom, zoom);
		let _ = ctx.translate(-cx, -cy);
	}

	fn stroke_curve(&mut self, from: Point, control: Option<Point>, to: Point, stroke: &Stroke<'_>) {
		let ctx = &self.ctx;
		ctx.save();
		self.set_dash(stroke.dash);
		ctx.set_stroke_style_str(stroke.color);
		ctx.set_line_width(stroke.width);
		if stroke.glow > 0.0 {
			ctx.set_shadow_color(stroke.color);
			ctx.set_shadow_blur(stroke.glow);
		}
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		match control {
			Some(c) => ctx.quadratic_curve_to(c.x, c.y, to.x, to.y),
			None => ctx.line_to(to.x, to.y),
		}
		ctx.stroke();
		ctx.restore();
	}

	fn fill_box(&mut self, node: &NodeBox, fill: &BoxFill<'_>) {
		let ctx = &self.ctx;
		ctx.save();
		if let Some((color, blur)) = fill.shadow {
			ctx.set_shadow_color(color);
			ctx.set_shadow_blur(blur);
			ctx.set_shadow_offset_y(blur / 4.0);
		}
		self.rounded_rect_path(node, fill.radius);
		ctx.set_fill_style_str(fill.color);
		ctx.fill();
		ctx.restore();

		if let Some((color, width)) = fill.border {
			ctx.save();
			ctx.set_stroke_style_str(color);
			ctx.set_line_width(width);
			ctx.stroke();
			ctx.restore();
		}
	}

	fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
		let ctx = &self.ctx;
		ctx.set_font(style.font);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(style.color);
		let _ = ctx.fill_text(text, at.x, at.y);
	}
}
