//! Colours, fonts and label text.

use super::types::{EdgeType, NodeGroup};

/// Canvas background.
pub const BACKGROUND: &str = "#0f172a";
/// Border of the selected node.
pub const SELECTION_BORDER: &str = "#f8fafc";
/// Node shadow colour.
pub const NODE_SHADOW: &str = "rgba(0, 0, 0, 0.55)";

/// Title font of regular nodes.
pub const TITLE_FONT: &str = "600 11px sans-serif";
/// Title font of the center node.
pub const CENTER_TITLE_FONT: &str = "700 13px sans-serif";
/// Tag font.
pub const TAG_FONT: &str = "10px sans-serif";

/// Characters kept from a regular title.
pub const TITLE_CHARS: usize = 14;
/// Characters kept from the center title.
pub const CENTER_TITLE_CHARS: usize = 18;

const DARK_TEXT: &str = "#111827";
const LIGHT_TEXT: &str = "#ffffff";

/// Fill of a node.
pub fn group_color(group: NodeGroup) -> &'static str {
	match group {
		NodeGroup::Center => "#f59e0b",
		NodeGroup::Fork => "#8b5cf6",
		NodeGroup::Citation => "#3b82f6",
		NodeGroup::Related => "#10b981",
		NodeGroup::Author => "#ec4899",
	}
}

/// Stroke of an edge.
pub fn edge_color(kind: EdgeType) -> &'static str {
	match kind {
		EdgeType::Fork => "#a78bfa",
		EdgeType::Citation => "#60a5fa",
		EdgeType::SharedTag => "#34d399",
		EdgeType::SharedAuthor => "#f472b6",
	}
}

/// Dash pattern of an edge, empty for solid strokes.
pub fn edge_dash(kind: EdgeType) -> &'static [f64] {
	if kind.is_dashed() { &[6.0, 4.0] } else { &[] }
}

/// Perceived brightness of a `#rrggbb` colour in `[0, 1]`.
fn luminance(hex: &str) -> Option<f64> {
	let hex = hex.strip_prefix('#')?;
	if hex.len() != 6 {
		return None;
	}
	let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
	let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
	Some((0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0)
}

/// Text colour readable on `fill`.
pub fn text_color(fill: &str) -> &'static str {
	match luminance(fill) {
		Some(l) if l > 0.55 => DARK_TEXT,
		_ => LIGHT_TEXT,
	}
}

/// First `max` characters of `text`, with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
	if text.chars().count() <= max {
		return text.to_string();
	}
	let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
	out.push('…');
	out
}
