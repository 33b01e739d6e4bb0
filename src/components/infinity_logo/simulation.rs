//! Force-directed layout for the logo graph.
//!
//! Velocity-Verlet style integration with link springs, pairwise charge and a
//! centering shift. Alpha never decays: the pinned ring keeps moving, so the
//! layout has no resting state to settle into.

use std::f64::consts::PI;

use log::warn;

use super::config::LogoConfig;
use super::graph::LogoGraph;
use super::types::{LogoLink, LogoNode, Point};

const INITIAL_RADIUS: f64 = 10.0;
/// Stand-in for a random jiggle when two endpoints coincide.
const JIGGLE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct ForceParams {
	pub link_distance: f64,
	pub symbol_charge: f64,
	pub free_charge: f64,
	pub center: Point,
	pub center_strength: f64,
	pub velocity_decay: f64,
}

impl ForceParams {
	pub fn from_config(config: &LogoConfig, center: Point) -> Self {
		Self {
			link_distance: config.link_distance,
			symbol_charge: config.symbol_charge,
			free_charge: config.free_charge,
			center,
			center_strength: config.center_strength,
			velocity_decay: config.velocity_decay,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationMode {
	#[default]
	Quiescent,
	/// A single node is held by an interactive drag.
	Perturbed { node: usize },
}

pub struct Simulation {
	pub graph: LogoGraph,
	params: ForceParams,
	/// Per-node charge; node roles are fixed once the graph is built.
	charges: Vec<f64>,
	mode: SimulationMode,
	initialized: bool,
}

impl Simulation {
	pub fn new(graph: LogoGraph, params: ForceParams) -> Self {
		let charges = (0..graph.nodes.len())
			.map(|i| {
				if graph.is_symbol_node(i) {
					params.symbol_charge
				} else {
					params.free_charge
				}
			})
			.collect();
		Self {
			graph,
			params,
			charges,
			mode: SimulationMode::Quiescent,
			initialized: false,
		}
	}

	pub fn mode(&self) -> SimulationMode {
		self.mode
	}

	pub fn nodes(&self) -> &[LogoNode] {
		&self.graph.nodes
	}

	pub fn links(&self) -> &[LogoLink] {
		&self.graph.links
	}

	/// Advance the layout by one step.
	pub fn step(&mut self) {
		if !self.initialized {
			self.place_nodes();
			self.initialized = true;
		}
		if self.graph.nodes.is_empty() {
			return;
		}
		self.apply_link_force();
		self.apply_many_body_force();
		self.apply_center_force();
		self.integrate();
	}

	/// Phyllotaxis spiral around the center for nodes without a position.
	fn place_nodes(&mut self) {
		let center = self.params.center;
		let angle_step = PI * (3.0 - 5.0_f64.sqrt());
		for (i, node) in self.graph.nodes.iter_mut().enumerate() {
			if let Some(pin) = node.pinned {
				node.position = Some(pin);
			} else if node.position.is_none() {
				let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
				let angle = i as f64 * angle_step;
				node.position = Some(Point::new(
					center.x + radius * angle.cos(),
					center.y + radius * angle.sin(),
				));
			}
			node.velocity = Point::default();
		}
	}

	fn apply_link_force(&mut self) {
		let distance = self.params.link_distance;
		let nodes = &mut self.graph.nodes;
		for link in &self.graph.links {
			let (Some(s), Some(t)) = (nodes[link.source].position, nodes[link.target].position)
			else {
				continue;
			};
			let (sv, tv) = (nodes[link.source].velocity, nodes[link.target].velocity);
			let mut dx = t.x + tv.x - s.x - sv.x;
			let mut dy = t.y + tv.y - s.y - sv.y;
			if dx == 0.0 && dy == 0.0 {
				dx = JIGGLE;
				dy = JIGGLE;
			}
			let len = (dx * dx + dy * dy).sqrt();
			let pull = (len - distance) / len * link.strength;
			let (fx, fy) = (dx * pull, dy * pull);

			let (ds, dt) = (
				nodes[link.source].link_degree as f64,
				nodes[link.target].link_degree as f64,
			);
			let bias = if ds + dt > 0.0 { ds / (ds + dt) } else { 0.5 };

			let target = &mut nodes[link.target].velocity;
			target.x -= fx * bias;
			target.y -= fy * bias;
			let source = &mut nodes[link.source].velocity;
			source.x += fx * (1.0 - bias);
			source.y += fy * (1.0 - bias);
		}
	}

	fn apply_many_body_force(&mut self) {
		let n = self.graph.nodes.len();
		let charges = &self.charges;
		let nodes = &mut self.graph.nodes;

		for i in 0..n {
			for j in (i + 1)..n {
				let (Some(a), Some(b)) = (nodes[i].position, nodes[j].position) else {
					continue;
				};
				let (mut dx, mut dy) = (b.x - a.x, b.y - a.y);
				if dx == 0.0 && dy == 0.0 {
					dx = JIGGLE;
					dy = JIGGLE;
				}
				let dist_sq = (dx * dx + dy * dy).max(1.0);

				// Each side feels the other's charge.
				let on_i = charges[j] / dist_sq;
				nodes[i].velocity.x += dx * on_i;
				nodes[i].velocity.y += dy * on_i;
				let on_j = charges[i] / dist_sq;
				nodes[j].velocity.x -= dx * on_j;
				nodes[j].velocity.y -= dy * on_j;
			}
		}
	}

	/// Shift every node so the mean position moves toward the center.
	fn apply_center_force(&mut self) {
		let (mut sx, mut sy, mut count) = (0.0, 0.0, 0usize);
		for p in self.graph.nodes.iter().filter_map(|n| n.position) {
			sx += p.x;
			sy += p.y;
			count += 1;
		}
		if count == 0 {
			return;
		}
		let strength = self.params.center_strength;
		let shift_x = (sx / count as f64 - self.params.center.x) * strength;
		let shift_y = (sy / count as f64 - self.params.center.y) * strength;
		for node in &mut self.graph.nodes {
			if let Some(p) = node.position.as_mut() {
				p.x -= shift_x;
				p.y -= shift_y;
			}
		}
	}

	fn integrate(&mut self) {
		let keep = 1.0 - self.params.velocity_decay;
		for node in &mut self.graph.nodes {
			if let Some(pin) = node.pinned {
				node.position = Some(pin);
				node.velocity = Point::default();
				continue;
			}
			let Some(p) = node.position.as_mut() else {
				continue;
			};
			node.velocity.x *= keep;
			node.velocity.y *= keep;
			p.x += node.velocity.x;
			p.y += node.velocity.y;
		}
	}

	/// Hold `index` at `at` until [`Simulation::release`] is called.
	pub fn pin(&mut self, index: usize, at: Point) -> bool {
		let Some(node) = self.graph.nodes.get_mut(index) else {
			warn!("ignoring pin of unknown node {index}");
			return false;
		};
		node.pinned = Some(at);
		self.mode = SimulationMode::Perturbed { node: index };
		true
	}

	/// Restore the node's saved pin; free nodes go back to simulation.
	pub fn release(&mut self, index: usize) -> bool {
		let Some(node) = self.graph.nodes.get_mut(index) else {
			warn!("ignoring release of unknown node {index}");
			return false;
		};
		node.pinned = node.saved_pinned;
		if self.mode == (SimulationMode::Perturbed { node: index }) {
			self.mode = SimulationMode::Quiescent;
		}
		true
	}

	pub fn set_center(&mut self, center: Point) {
		self.params.center = center;
	}
}
