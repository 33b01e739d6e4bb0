//! Node/link topology of the logo and the closed-form curve that pins it.
//!
//! Node `j * num_symbol_nodes + i` is symbol index `i` on ring `j`. Ring 0
//! holds the symbol nodes; every other ring is left to the simulation and
//! trails behind ring 0 to give the outline its depth.

use std::f64::consts::PI;

use super::config::{LogoConfig, ShapeGeometry};
use super::error::LogoError;
use super::types::{LinkKind, LogoLink, LogoNode, Point};

const SYMBOL_OPACITY: f64 = 1.0;
const SHAPE_OPACITY: f64 = 0.7;
const SPIRAL_OPACITY: f64 = 0.5;
const SPIRAL_STRENGTH: f64 = 0.65;
const BRACE_STRENGTH: f64 = 1.0;

/// Position of symbol node `index` on the infinity curve.
///
/// `rotation` is measured in node steps and may exceed `count`; it wraps.
pub fn symbol_position(
	index: usize,
	count: usize,
	rotation: f64,
	geometry: &ShapeGeometry,
) -> Point {
	let n = count.max(1) as f64;
	let t = 2.0 * PI * (index as f64 + rotation).rem_euclid(n) / n;
	let scale = 2.0 / (3.0 - (2.0 * t).cos());
	Point::new(
		geometry.center.x + scale * t.cos() * geometry.scale_to_window,
		geometry.center.y
			+ scale * (2.0 * t).sin() * geometry.height_multiplier / 2.0 * geometry.scale_to_window,
	)
}

#[derive(Clone, Debug, Default)]
pub struct LogoGraph {
	pub nodes: Vec<LogoNode>,
	pub links: Vec<LogoLink>,
	pub num_symbol_nodes: usize,
	pub num_vertices: usize,
}

impl LogoGraph {
	pub fn build(config: &LogoConfig, geometry: &ShapeGeometry) -> Result<Self, LogoError> {
		config.validate()?;
		let (count, rings) = (config.num_symbol_nodes, config.num_vertices);
		let total = count * rings;

		let nodes = (0..total)
			.map(|index| {
				let pinned = (index < count).then(|| symbol_position(index, count, 0.0, geometry));
				LogoNode {
					index,
					pinned,
					saved_pinned: pinned,
					..LogoNode::default()
				}
			})
			.collect();

		let mut graph = Self {
			nodes,
			links: Vec::with_capacity(count * (3 + 3 * rings)),
			num_symbol_nodes: count,
			num_vertices: rings,
		};

		let at = |ring: usize, i: usize| ring * count + i;
		let middle = rings / 2;
		for i in 0..count {
			let next = (i + 1) % count;
			graph.add_link(i, next, LinkKind::Symbol, SYMBOL_OPACITY, None);
			graph.add_link(
				at(middle, i),
				at(middle, next),
				LinkKind::Top,
				0.0,
				Some(BRACE_STRENGTH),
			);
			graph.add_link(at(middle - 1, i), i, LinkKind::CrossBar, 0.0, Some(BRACE_STRENGTH));

			for j in 0..rings {
				graph.add_link(
					at(j, i),
					(at(j, i) + count) % total,
					LinkKind::Shape,
					SHAPE_OPACITY,
					None,
				);
				// Two identical springs: the doubled stiffness holds the twist.
				for _ in 0..2 {
					graph.add_link(
						at(j, i),
						at((j + 1) % rings, next),
						LinkKind::Spiral,
						SPIRAL_OPACITY,
						Some(SPIRAL_STRENGTH),
					);
				}
			}
		}

		graph.resolve_strengths();
		Ok(graph)
	}

	fn add_link(
		&mut self,
		source: usize,
		target: usize,
		kind: LinkKind,
		base_opacity: f64,
		configured_strength: Option<f64>,
	) {
		self.nodes[source].link_degree += 1;
		self.nodes[target].link_degree += 1;
		let ordinal = self.links.len();
		self.links.push(LogoLink {
			source,
			target,
			kind,
			configured_strength,
			strength: configured_strength.unwrap_or(0.0),
			base_opacity,
			ordinal,
		});
	}

	/// Degree-weighted default stiffness for links without an explicit one.
	fn resolve_strengths(&mut self) {
		for link in &mut self.links {
			link.strength = match link.configured_strength {
				Some(strength) if strength > 0.0 => strength,
				_ => {
					let degree = self.nodes[link.source]
						.link_degree
						.min(self.nodes[link.target].link_degree)
						.max(1);
					1.0 / degree as f64
				}
			};
		}
	}

	pub fn is_symbol_node(&self, index: usize) -> bool {
		index < self.num_symbol_nodes
	}
}
