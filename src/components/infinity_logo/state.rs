use log::{debug, info};

use super::config::{Dimensions, LogoConfig, ShapeGeometry};
use super::error::LogoError;
use super::graph::LogoGraph;
use super::pulse::{BlockEvents, NodeHighlight};
use super::render::{FrameRenderer, FrameStats, Surface};
use super::rotation::RotationDriver;
use super::simulation::{ForceParams, Simulation, SimulationMode};
use super::types::{LogoLink, LogoNode, Point};

/// Owns the whole logo: graph, physics, timers and renderer.
///
/// Timers live outside; the host calls [`LogoState::step`] every frame,
/// [`LogoState::on_rotation_tick`] and [`LogoState::on_block_tick`] on their
/// intervals. Time is passed in as milliseconds.
pub struct LogoState {
	config: LogoConfig,
	geometry: ShapeGeometry,
	simulation: Simulation,
	rotation: RotationDriver,
	events: BlockEvents,
	renderer: FrameRenderer,
	on_new_block: Option<Box<dyn FnMut()>>,
	torn_down: bool,
}

impl LogoState {
	pub fn new(config: LogoConfig, dimensions: Dimensions) -> Result<Self, LogoError> {
		Self::with_seed(config, dimensions, 0x5eed)
	}

	pub fn with_seed(
		config: LogoConfig,
		dimensions: Dimensions,
		seed: u64,
	) -> Result<Self, LogoError> {
		let geometry = ShapeGeometry::new(dimensions, config.height_multiplier);
		let graph = LogoGraph::build(&config, &geometry)?;
		info!(
			"logo built: {} nodes, {} links",
			graph.nodes.len(),
			graph.links.len()
		);

		Ok(Self {
			simulation: Simulation::new(graph, ForceParams::from_config(&config, geometry.center)),
			rotation: RotationDriver::new(config.rotate_amount),
			events: BlockEvents::new(seed),
			renderer: FrameRenderer::new(&config),
			geometry,
			config,
			on_new_block: None,
			torn_down: false,
		})
	}

	pub fn set_on_new_block(&mut self, callback: impl FnMut() + 'static) {
		if !self.torn_down {
			self.on_new_block = Some(Box::new(callback));
		}
	}

	/// One physics step followed by one frame.
	pub fn step(&mut self, now: f64, surface: &mut impl Surface) -> Option<FrameStats> {
		if self.torn_down {
			return None;
		}
		self.simulation.step();
		let graph = &self.simulation.graph;
		Some(self.renderer.render(graph, &mut self.events, now, surface))
	}

	pub fn on_rotation_tick(&mut self) {
		if self.torn_down {
			return;
		}
		self.rotation.tick(&mut self.simulation.graph, &self.geometry);
	}

	pub fn on_block_tick(&mut self, now: f64) {
		self.trigger_new_block_pulse(now);
	}

	/// Start a new-block pulse on a random node and notify the host.
	pub fn trigger_new_block_pulse(&mut self, now: f64) -> Option<usize> {
		if self.torn_down {
			return None;
		}
		let node = self.events.trigger(now, self.simulation.nodes().len())?;
		if let Some(callback) = self.on_new_block.as_mut() {
			callback();
		}
		Some(node)
	}

	pub fn pin_node(&mut self, index: usize, at: Point) -> bool {
		!self.torn_down && self.simulation.pin(index, at)
	}

	pub fn release_node(&mut self, index: usize) -> bool {
		!self.torn_down && self.simulation.release(index)
	}

	/// Move the curve onto a new surface size; pins follow on the next rotation tick.
	pub fn resize(&mut self, dimensions: Dimensions) {
		if self.torn_down {
			return;
		}
		self.geometry = ShapeGeometry::new(dimensions, self.config.height_multiplier);
		self.simulation.set_center(self.geometry.center);
		debug!("logo resized to {}x{}", dimensions.width, dimensions.height);
	}

	/// Drop the callback and stop responding to every driver.
	pub fn teardown(&mut self) {
		if self.torn_down {
			return;
		}
		self.torn_down = true;
		self.on_new_block = None;
		self.events.clear();
		info!("logo torn down");
	}

	pub fn is_torn_down(&self) -> bool {
		self.torn_down
	}

	pub fn config(&self) -> &LogoConfig {
		&self.config
	}

	pub fn geometry(&self) -> &ShapeGeometry {
		&self.geometry
	}

	pub fn nodes(&self) -> &[LogoNode] {
		self.simulation.nodes()
	}

	pub fn links(&self) -> &[LogoLink] {
		self.simulation.links()
	}

	pub fn rotation_offset(&self) -> f64 {
		self.rotation.offset()
	}

	pub fn mode(&self) -> SimulationMode {
		self.simulation.mode()
	}

	pub fn node_highlight(&self) -> Option<NodeHighlight> {
		self.events.node_highlight
	}

	pub fn node_highlight_start(&self) -> Option<f64> {
		self.events.node_highlight.map(|h| h.started_at)
	}

	pub fn link_pulse_start(&self) -> Option<f64> {
		self.events.link_pulse_start
	}

	/// Whether a node glow or link flash is still in flight.
	pub fn is_animating(&self) -> bool {
		!self.events.is_idle()
	}
}
