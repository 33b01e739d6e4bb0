//! New-block pulses: which node glows, and how hard, at a given moment.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Linear up over the first half, linear down over the second.
pub fn triangle_envelope(elapsed: f64, duration: f64) -> f64 {
	if duration <= 0.0 || !(0.0..=duration).contains(&elapsed) {
		return 0.0;
	}
	let half = duration / 2.0;
	if elapsed <= half {
		elapsed / half
	} else {
		(duration - elapsed) / half
	}
}

/// Fast attack over the first third, slow release over the rest.
pub fn attack_release_envelope(elapsed: f64, duration: f64) -> f64 {
	if duration <= 0.0 || !(0.0..=duration).contains(&elapsed) {
		return 0.0;
	}
	let attack = duration / 3.0;
	if elapsed <= attack {
		elapsed / attack
	} else {
		(duration - elapsed) / (duration - attack)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeHighlight {
	pub node: usize,
	pub started_at: f64,
}

/// Timers for the in-flight pulse. A new block replaces whatever is running.
pub struct BlockEvents {
	pub node_highlight: Option<NodeHighlight>,
	pub link_pulse_start: Option<f64>,
	rng: SmallRng,
}

impl BlockEvents {
	pub fn new(seed: u64) -> Self {
		Self {
			node_highlight: None,
			link_pulse_start: None,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Start both animations on a random node out of `node_count`.
	pub fn trigger(&mut self, now: f64, node_count: usize) -> Option<usize> {
		if node_count == 0 {
			return None;
		}
		let node = self.rng.random_range(0..node_count);
		debug!("new block pulse on node {node}");
		self.node_highlight = Some(NodeHighlight {
			node,
			started_at: now,
		});
		self.link_pulse_start = Some(now);
		Some(node)
	}

	pub fn is_idle(&self) -> bool {
		self.node_highlight.is_none() && self.link_pulse_start.is_none()
	}

	pub fn clear(&mut self) {
		self.node_highlight = None;
		self.link_pulse_start = None;
	}
}
