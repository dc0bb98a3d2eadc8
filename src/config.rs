//! View configuration for the two graph instances.

/// Which of the two views a canvas belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewVariant {
	/// Inline widget next to the document.
	Compact,
	/// Larger dialog view.
	Expanded,
}

impl ViewVariant {
	/// CSS class of the view container.
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Compact => "relation-graph compact",
			Self::Expanded => "relation-graph expanded",
		}
	}
}

/// Parameters of one graph view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
	/// Compact or expanded.
	pub variant: ViewVariant,
	/// Zoom at mount and after reset.
	pub default_zoom: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
	/// Width used when the container reports none.
	pub fallback_width: f64,
}

impl ViewConfig {
	/// Inline widget.
	pub const fn compact() -> Self {
		Self {
			variant: ViewVariant::Compact,
			default_zoom: 0.85,
			height: 360.0,
			fallback_width: 640.0,
		}
	}

	/// Dialog view.
	pub const fn expanded() -> Self {
		Self {
			variant: ViewVariant::Expanded,
			default_zoom: 0.9,
			height: 640.0,
			fallback_width: 1024.0,
		}
	}
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self::compact()
	}
}
