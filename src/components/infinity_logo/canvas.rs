use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::render::{Circle, Segment, Surface};

/// 2D canvas backend for the frame renderer.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self { ctx, width, height }
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn draw_circle(&mut self, circle: &Circle) {
		let ctx = &self.ctx;
		ctx.save();
		ctx.set_global_alpha(circle.opacity);
		if circle.glow > 0.0 {
			ctx.set_shadow_blur(circle.glow);
			ctx.set_shadow_color(&circle.stroke.css(1.0));
		}
		ctx.begin_path();
		let _ = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&circle.fill.css(1.0));
		ctx.fill();
		ctx.set_stroke_style_str(&circle.stroke.css(1.0));
		ctx.set_line_width(1.0);
		ctx.stroke();
		ctx.restore();
	}

	fn draw_line(&mut self, segment: &Segment) {
		let ctx = &self.ctx;
		ctx.set_stroke_style_str(&segment.color.css(segment.opacity));
		ctx.set_line_width(segment.width);
		ctx.begin_path();
		ctx.move_to(segment.from.x, segment.from.y);
		ctx.line_to(segment.to.x, segment.to.y);
		ctx.stroke();
	}
}
