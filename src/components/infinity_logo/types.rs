/// A 2-D coordinate in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const WHITE: Rgb = Rgb(255, 255, 255);

	/// Linear blend toward `other`; `t` is clamped to `[0, 1]`.
	pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
	}

	pub fn channels(self) -> [u8; 3] {
		[self.0, self.1, self.2]
	}

	pub fn css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
	}
}

#[derive(Clone, Debug, Default)]
pub struct LogoNode {
	pub index: usize,
	/// `None` until the simulator places the node.
	pub position: Option<Point>,
	pub velocity: Point,
	/// Fixed coordinate; the simulator skips integration while set.
	pub pinned: Option<Point>,
	/// Rotation driver's target, restored when a drag is released.
	pub saved_pinned: Option<Point>,
	pub link_degree: usize,
}

impl LogoNode {
	pub fn is_pinned(&self) -> bool {
		self.pinned.is_some()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	/// Visible outline between neighbouring ring-0 nodes.
	Symbol,
	/// Invisible brace around the middle ring.
	Top,
	/// Invisible brace from the middle ring back to ring 0.
	CrossBar,
	/// Ring-to-ring link for the same symbol index.
	Shape,
	/// Diagonal link that twists the rings around the curve.
	Spiral,
}

#[derive(Clone, Debug)]
pub struct LogoLink {
	pub source: usize,
	pub target: usize,
	pub kind: LinkKind,
	/// Explicit stiffness; `None` means derived from endpoint degrees.
	pub configured_strength: Option<f64>,
	/// Resolved stiffness, always > 0 once the graph is built.
	pub strength: f64,
	pub base_opacity: f64,
	pub ordinal: usize,
}
