use super::color::band_color;
use super::config::{LogoConfig, RenderStyle};
use super::graph::LogoGraph;
use super::pulse::{BlockEvents, attack_release_envelope, triangle_envelope};
use super::types::{LogoNode, Point, Rgb};

/// A filled, stroked dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub center: Point,
	pub radius: f64,
	pub fill: Rgb,
	pub stroke: Rgb,
	pub opacity: f64,
	/// Shadow blur in pixels; zero draws no glow.
	pub glow: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub from: Point,
	pub to: Point,
	pub color: Rgb,
	pub opacity: f64,
	pub width: f64,
}

/// Where a frame ends up. Implemented by the canvas and by test recorders.
pub trait Surface {
	fn clear(&mut self);
	fn draw_circle(&mut self, circle: &Circle);
	fn draw_line(&mut self, segment: &Segment);
	fn present(&mut self) {}
}

/// Animation levels used for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
	pub node_magnitude: f64,
	pub link_magnitude: f64,
}

pub struct FrameRenderer {
	pub style: RenderStyle,
	highlight_duration: f64,
	link_pulse_duration: f64,
}

impl FrameRenderer {
	pub fn new(config: &LogoConfig) -> Self {
		Self {
			style: config.style.clone(),
			highlight_duration: config.highlight_duration_ms,
			link_pulse_duration: config.link_pulse_duration_ms,
		}
	}

	fn base_circle(&self, node: &LogoNode, center: Point, symbol_count: usize) -> Circle {
		let stroke = band_color(node.index % symbol_count.max(1), symbol_count);
		Circle {
			center,
			radius: self.style.node_radius,
			fill: stroke.lerp(Rgb::WHITE, self.style.fill_lighten),
			stroke,
			opacity: self.style.node_opacity,
			glow: 0.0,
		}
	}

	/// Draw one frame and retire animations that have run their course.
	pub fn render(
		&self,
		graph: &LogoGraph,
		events: &mut BlockEvents,
		now: f64,
		surface: &mut impl Surface,
	) -> FrameStats {
		let mut stats = FrameStats::default();
		let symbols = graph.num_symbol_nodes;
		surface.clear();

		for node in &graph.nodes {
			if let Some(center) = node.position {
				surface.draw_circle(&self.base_circle(node, center, symbols));
			}
		}

		if let Some(highlight) = events.node_highlight {
			let elapsed = now - highlight.started_at;
			let node = graph.nodes.get(highlight.node);
			let placed = node.and_then(|n| n.position.map(|p| (n, p)));

			if elapsed >= self.highlight_duration {
				if let Some((node, center)) = placed {
					surface.draw_circle(&self.base_circle(node, center, symbols));
				}
				events.node_highlight = None;
			} else if let Some((node, center)) = placed {
				let m = triangle_envelope(elapsed, self.highlight_duration);
				let style = &self.style;
				let base = self.base_circle(node, center, symbols);
				surface.draw_circle(&Circle {
					center,
					radius: lerp(style.node_radius, style.selected_radius, m),
					fill: style.selected_color.lerp(base.fill, m),
					stroke: style.selected_color.lerp(base.stroke, m),
					opacity: lerp(style.node_opacity, style.selected_opacity, m),
					glow: style.glow_blur * m,
				});
				stats.node_magnitude = m;
			}
		}

		if let Some(start) = events.link_pulse_start {
			let elapsed = now - start;
			if elapsed >= self.link_pulse_duration {
				events.link_pulse_start = None;
			} else {
				stats.link_magnitude = attack_release_envelope(elapsed, self.link_pulse_duration);
			}
		}

		let boost = self.style.pulse_opacity_boost * stats.link_magnitude;
		let total = graph.links.len();
		for link in &graph.links {
			let opacity = link.base_opacity + boost;
			if opacity <= 0.0 {
				continue;
			}
			let (Some(from), Some(to)) = (
				graph.nodes[link.source].position,
				graph.nodes[link.target].position,
			) else {
				continue;
			};
			surface.draw_line(&Segment {
				from,
				to,
				color: band_color(link.ordinal, total),
				opacity: opacity.min(1.0),
				width: self.style.link_width,
			});
		}

		surface.present();
		stats
	}
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::infinity_logo::config::ShapeGeometry;
	use crate::components::infinity_logo::pulse::NodeHighlight;

	/// Keeps every draw call of the last frame.
	#[derive(Default)]
	pub(crate) struct Recorder {
		pub circles: Vec<Circle>,
		pub lines: Vec<Segment>,
		pub frames: usize,
	}

	impl Surface for Recorder {
		fn clear(&mut self) {
			self.circles.clear();
			self.lines.clear();
		}

		fn draw_circle(&mut self, circle: &Circle) {
			self.circles.push(circle.clone());
		}

		fn draw_line(&mut self, segment: &Segment) {
			self.lines.push(segment.clone());
		}

		fn present(&mut self) {
			self.frames += 1;
		}
	}

	fn placed_graph(config: &LogoConfig) -> LogoGraph {
		let geometry = ShapeGeometry {
			center: Point::new(100.0, 50.0),
			scale_to_window: 80.0,
			height_multiplier: 1.6,
		};
		let mut graph = LogoGraph::build(config, &geometry).unwrap();
		for (i, node) in graph.nodes.iter_mut().enumerate() {
			node.position = Some(node.pinned.unwrap_or(Point::new(i as f64, i as f64)));
		}
		graph
	}

	fn highlight(events: &mut BlockEvents, node: usize, at: f64) {
		events.node_highlight = Some(NodeHighlight {
			node,
			started_at: at,
		});
		events.link_pulse_start = Some(at);
	}

	#[test]
	fn quiet_frame_draws_nodes_and_visible_links() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();

		let stats = renderer.render(&graph, &mut events, 0.0, &mut surface);
		assert_eq!(stats, FrameStats::default());
		assert_eq!(surface.circles.len(), graph.nodes.len());
		let visible = graph.links.iter().filter(|l| l.base_opacity > 0.0).count();
		assert_eq!(surface.lines.len(), visible);
		assert_eq!(surface.frames, 1);
		assert!(surface.circles.iter().all(|c| c.glow == 0.0 && c.radius == 2.0));
	}

	#[test]
	fn highlight_peaks_halfway_then_clears() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 5, 1000.0);

		let stats = renderer.render(&graph, &mut events, 1500.0, &mut surface);
		assert!((stats.node_magnitude - 1.0).abs() < 1e-9);
		let overlay = surface.circles.last().unwrap();
		assert_eq!(overlay.center, graph.nodes[5].position.unwrap());
		assert_eq!(overlay.radius, config.style.selected_radius);
		assert!((overlay.opacity - config.style.selected_opacity).abs() < 1e-9);
		// Color has travelled all the way back to the node's own.
		assert_eq!(overlay.stroke, band_color(5, 36));
		assert_eq!(overlay.fill, band_color(5, 36).lerp(Rgb::WHITE, config.style.fill_lighten));
		assert_eq!(overlay.glow, config.style.glow_blur);

		// Past the duration: drawn plain once more, then retired.
		renderer.render(&graph, &mut events, 2001.0, &mut surface);
		assert!(events.node_highlight.is_none());
		let last = surface.circles.last().unwrap();
		assert_eq!(last.radius, config.style.node_radius);
		assert_eq!(last.opacity, config.style.node_opacity);
		assert_eq!(last.stroke, band_color(5, 36));
		assert_eq!(last.glow, 0.0);

		let stats = renderer.render(&graph, &mut events, 2002.0, &mut surface);
		assert_eq!(stats.node_magnitude, 0.0);
		assert_eq!(surface.circles.len(), graph.nodes.len());
	}

	#[test]
	fn highlight_color_fades_from_selected_to_normal() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 5, 0.0);
		let normal = band_color(5, 36);

		renderer.render(&graph, &mut events, 0.0, &mut surface);
		let start = surface.circles.last().unwrap();
		assert_eq!(start.stroke, config.style.selected_color);
		assert_eq!(start.fill, config.style.selected_color);
		assert_eq!(start.radius, config.style.node_radius);

		renderer.render(&graph, &mut events, 250.0, &mut surface);
		let quarter = surface.circles.last().unwrap();
		assert_eq!(quarter.stroke, config.style.selected_color.lerp(normal, 0.5));
		assert_eq!(quarter.radius, 4.0);
	}

	#[test]
	fn timers_clear_exactly_at_their_duration() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 5, 1000.0);

		let stats = renderer.render(&graph, &mut events, 2000.0, &mut surface);
		assert!(events.node_highlight.is_none());
		assert_eq!(stats.node_magnitude, 0.0);
		let last = surface.circles.last().unwrap();
		assert_eq!(last.radius, config.style.node_radius);
		assert_eq!(last.stroke, band_color(5, 36));
		assert!(events.link_pulse_start.is_some());

		let stats = renderer.render(&graph, &mut events, 2500.0, &mut surface);
		assert!(events.link_pulse_start.is_none());
		assert_eq!(stats.link_magnitude, 0.0);
		assert!(events.is_idle());
	}

	#[test]
	fn link_pulse_brightens_then_expires() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 0, 0.0);

		let stats = renderer.render(&graph, &mut events, 500.0, &mut surface);
		assert!((stats.link_magnitude - 1.0).abs() < 1e-9);
		// Invisible braces show up at the peak.
		assert_eq!(surface.lines.len(), graph.links.len());
		let symbol = &surface.lines[0];
		assert!((symbol.opacity - 1.0).abs() < 1e-9);
		let top = &surface.lines[1];
		assert!((top.opacity - 0.25).abs() < 1e-9);
		assert_eq!(top.color, band_color(1, graph.links.len()));

		renderer.render(&graph, &mut events, 1501.0, &mut surface);
		assert!(events.link_pulse_start.is_none());
	}

	#[test]
	fn unplaced_nodes_are_skipped() {
		let config = LogoConfig::default();
		let mut graph = placed_graph(&config);
		graph.nodes[40].position = None;
		graph.nodes[7].position = None;
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 7, 0.0);

		let stats = renderer.render(&graph, &mut events, 400.0, &mut surface);
		assert_eq!(surface.circles.len(), graph.nodes.len() - 2);
		assert_eq!(stats.node_magnitude, 0.0);
		assert!(events.node_highlight.is_some());
		assert!(surface.lines.iter().all(|s| s.from.x.is_finite()));
	}

	#[test]
	fn highlight_on_unknown_node_still_expires() {
		let config = LogoConfig::default();
		let graph = placed_graph(&config);
		let renderer = FrameRenderer::new(&config);
		let mut events = BlockEvents::new(0);
		let mut surface = Recorder::default();
		highlight(&mut events, 99_999, 0.0);

		renderer.render(&graph, &mut events, 500.0, &mut surface);
		renderer.render(&graph, &mut events, 1600.0, &mut surface);
		assert!(events.is_idle());
	}
}
