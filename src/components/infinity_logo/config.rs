//! Tunables for the logo engine and the display geometry derived from them.

use super::error::LogoError;
use super::types::{Point, Rgb};

/// Height of the logo surface as a fraction of its width.
pub const HEIGHT_RATIO: f64 = 0.5;
/// Half-width of the curve as a fraction of the surface width.
pub const WINDOW_SCALE: f64 = 0.38;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
	pub node_radius: f64,
	pub node_opacity: f64,
	pub selected_radius: f64,
	pub selected_opacity: f64,
	pub selected_color: Rgb,
	/// Shadow blur applied at the peak of a highlight.
	pub glow_blur: f64,
	/// How far the node fill is washed toward white.
	pub fill_lighten: f64,
	pub link_width: f64,
	/// Extra link opacity at the peak of a pulse.
	pub pulse_opacity_boost: f64,
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self {
			node_radius: 2.0,
			node_opacity: 0.6,
			selected_radius: 6.0,
			selected_opacity: 1.0,
			selected_color: Rgb::WHITE,
			glow_blur: 18.0,
			fill_lighten: 0.35,
			link_width: 1.0,
			pulse_opacity_boost: 0.25,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogoConfig {
	pub num_symbol_nodes: usize,
	/// Number of rings stacked behind the symbol ring.
	pub num_vertices: usize,
	pub link_distance: f64,
	pub symbol_charge: f64,
	pub free_charge: f64,
	pub center_strength: f64,
	pub velocity_decay: f64,
	pub height_multiplier: f64,
	/// Offset added once per symbol node on every rotation tick.
	pub rotate_amount: f64,
	pub rotation_interval_ms: f64,
	pub block_interval_ms: f64,
	pub highlight_duration_ms: f64,
	pub link_pulse_duration_ms: f64,
	pub style: RenderStyle,
}

impl Default for LogoConfig {
	fn default() -> Self {
		Self {
			num_symbol_nodes: 36,
			num_vertices: 8,
			link_distance: 12.0,
			symbol_charge: 0.0,
			free_charge: -8.0,
			center_strength: 1.0,
			velocity_decay: 0.4,
			height_multiplier: 1.6,
			rotate_amount: 0.0005,
			rotation_interval_ms: 33.0,
			block_interval_ms: 3500.0,
			highlight_duration_ms: 1000.0,
			link_pulse_duration_ms: 1500.0,
			style: RenderStyle::default(),
		}
	}
}

impl LogoConfig {
	pub fn validate(&self) -> Result<(), LogoError> {
		if self.num_symbol_nodes < 1 {
			return Err(LogoError::TooFewSymbolNodes(self.num_symbol_nodes));
		}
		if self.num_vertices < 2 {
			return Err(LogoError::TooFewVertices(self.num_vertices));
		}
		for (name, value) in [
			("rotation_interval_ms", self.rotation_interval_ms),
			("block_interval_ms", self.block_interval_ms),
			("highlight_duration_ms", self.highlight_duration_ms),
			("link_pulse_duration_ms", self.link_pulse_duration_ms),
		] {
			if value.is_nan() || value <= 0.0 {
				return Err(LogoError::NonPositiveDuration { name, value });
			}
		}
		Ok(())
	}

	pub fn total_nodes(&self) -> usize {
		self.num_symbol_nodes * self.num_vertices
	}
}

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
	pub width: f64,
	pub height: f64,
}

impl Dimensions {
	pub fn new(width: f64, height: f64) -> Result<Self, LogoError> {
		let usable = |v: f64| v.is_finite() && v > 0.0;
		if !usable(width) || !usable(height) {
			return Err(LogoError::InvalidDimensions { width, height });
		}
		Ok(Self { width, height })
	}

	pub fn from_width(width: f64) -> Result<Self, LogoError> {
		Self::new(width, width * HEIGHT_RATIO)
	}
}

/// Placement of the curve on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeGeometry {
	pub center: Point,
	pub scale_to_window: f64,
	pub height_multiplier: f64,
}

impl ShapeGeometry {
	pub fn new(dimensions: Dimensions, height_multiplier: f64) -> Self {
		Self {
			center: Point::new(dimensions.width / 2.0, dimensions.height / 2.0),
			scale_to_window: dimensions.width * WINDOW_SCALE,
			height_multiplier,
		}
	}
}
