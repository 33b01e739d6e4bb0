use super::config::ShapeGeometry;
use super::graph::{LogoGraph, symbol_position};

/// Slowly walks the symbol ring around the curve.
#[derive(Clone, Debug, Default)]
pub struct RotationDriver {
	offset: f64,
	rotate_amount: f64,
}

impl RotationDriver {
	pub fn new(rotate_amount: f64) -> Self {
		Self {
			offset: 0.0,
			rotate_amount,
		}
	}

	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// One timer tick: the offset advances once per symbol node, and each
	/// node is re-pinned at the offset current when it is visited.
	pub fn tick(&mut self, graph: &mut LogoGraph, geometry: &ShapeGeometry) {
		let count = graph.num_symbol_nodes;
		for node in graph.nodes.iter_mut().take(count) {
			self.offset += self.rotate_amount;
			let target = symbol_position(node.index, count, self.offset, geometry);
			node.pinned = Some(target);
			node.saved_pinned = Some(target);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::infinity_logo::config::LogoConfig;
	use crate::components::infinity_logo::types::Point;

	fn geometry() -> ShapeGeometry {
		ShapeGeometry {
			center: Point::new(0.0, 0.0),
			scale_to_window: 100.0,
			height_multiplier: 1.0,
		}
	}

	#[test]
	fn offset_advances_per_symbol_node() {
		let config = LogoConfig::default();
		let mut graph = LogoGraph::build(&config, &geometry()).unwrap();
		let mut driver = RotationDriver::new(config.rotate_amount);
		let ticks = 7;
		for _ in 0..ticks {
			driver.tick(&mut graph, &geometry());
		}
		let expected = ticks as f64 * config.num_symbol_nodes as f64 * config.rotate_amount;
		assert!((driver.offset() - expected).abs() < 1e-12);
	}

	#[test]
	fn repins_symbol_nodes_only() {
		let config = LogoConfig::default();
		let mut graph = LogoGraph::build(&config, &geometry()).unwrap();
		let mut driver = RotationDriver::new(0.01);
		driver.tick(&mut graph, &geometry());

		let first = symbol_position(0, 36, 0.01, &geometry());
		assert_eq!(graph.nodes[0].pinned, Some(first));
		assert_eq!(graph.nodes[0].saved_pinned, Some(first));
		let last = symbol_position(35, 36, 0.36, &geometry());
		let pinned = graph.nodes[35].pinned.unwrap();
		assert!((pinned.x - last.x).abs() < 1e-9 && (pinned.y - last.y).abs() < 1e-9);
		assert!(graph.nodes[36..].iter().all(|n| n.pinned.is_none()));
	}
}
