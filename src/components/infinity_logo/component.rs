use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use super::config::{Dimensions, HEIGHT_RATIO, LogoConfig};
use super::mount::MountedLogo;
use super::state::LogoState;

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(400.0)
}

fn set_interval(window: &Window, cb: &Closure<dyn FnMut()>, ms: f64) -> Option<i32> {
	window
		.set_interval_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			ms as i32,
		)
		.ok()
}

#[component]
pub fn InfinityLogo(
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] on_new_block: Option<Callback<()>>,
	/// Every change of this signal fires a pulse, on top of the block timer.
	#[prop(optional, into)]
	pulse: Option<Signal<u32>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: MountedLogo<Closure<dyn FnMut()>, CanvasSurface> = MountedLogo::new();

	// Only Send handles may cross into on_cleanup.
	let alive = Arc::new(AtomicBool::new(true));
	let interval_ids: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));

	let mounted_init = mounted.clone();
	let (alive_init, ids_init) = (alive.clone(), interval_ids.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let w = width.unwrap_or_else(|| parent_width(&canvas));
		let h = height.unwrap_or(w * HEIGHT_RATIO);
		let dims = match Dimensions::new(w, h) {
			Ok(dims) => dims,
			Err(e) => {
				error!("logo not shown: {e}");
				return;
			}
		};
		let config = LogoConfig::default();
		let (rotation_ms, block_ms) = (config.rotation_interval_ms, config.block_interval_ms);
		let mut logo = match LogoState::with_seed(config, dims, js_sys::Date::now() as u64) {
			Ok(logo) => logo,
			Err(e) => {
				error!("logo not shown: {e}");
				return;
			}
		};
		logo.set_on_new_block(move || {
			if let Some(cb) = on_new_block {
				cb.run(());
			}
		});

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("logo not shown: no 2d context");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		*mounted_init.surface.borrow_mut() = Some(CanvasSurface::new(ctx, w, h));
		*mounted_init.state.borrow_mut() = Some(logo);

		let state_rot = mounted_init.state.clone();
		let rotation = Closure::<dyn FnMut()>::new(move || {
			if let Some(ref mut s) = *state_rot.borrow_mut() {
				s.on_rotation_tick();
			}
		});
		let state_block = mounted_init.state.clone();
		let block = Closure::<dyn FnMut()>::new(move || {
			if let Some(ref mut s) = *state_block.borrow_mut() {
				s.on_block_tick(js_sys::Date::now());
			}
		});
		if let Ok(mut ids) = ids_init.lock() {
			ids.extend(set_interval(&window, &rotation, rotation_ms));
			ids.extend(set_interval(&window, &block, block_ms));
		}
		mounted_init.timers.borrow_mut().extend([rotation, block]);

		if width.is_none() {
			let (state_resize, surface_resize, canvas_resize) = (
				mounted_init.state.clone(),
				mounted_init.surface.clone(),
				canvas.clone(),
			);
			let on_resize = Closure::<dyn FnMut()>::new(move || {
				let nw = parent_width(&canvas_resize);
				let nh = height.unwrap_or(nw * HEIGHT_RATIO);
				let Ok(dims) = Dimensions::new(nw, nh) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(dims);
				}
				if let Some(ref mut surface) = *surface_resize.borrow_mut() {
					surface.resize(nw, nh);
				}
			});
			let _ = window
				.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
			mounted_init.listen("resize", on_resize);
		}

		let (frame, alive_anim) = (mounted_init.clone(), alive_init.clone());
		*mounted_init.frame.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if !alive_anim.load(Ordering::Acquire) {
				frame.release(|event, cb| {
					let _ =
						win.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
				});
				// This closure is still running; free it from a later task.
				let deferred = frame.clone();
				let free = Closure::once_into_js(move || deferred.release_frame());
				let _ = win.set_timeout_with_callback(free.unchecked_ref());
				return;
			}
			if let (Some(s), Some(surface)) = (
				frame.state.borrow_mut().as_mut(),
				frame.surface.borrow_mut().as_mut(),
			) {
				s.step(js_sys::Date::now(), surface);
			}
			if let Some(cb) = frame.frame.borrow().as_ref() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *mounted_init.frame.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	if let Some(pulse) = pulse {
		let state_pulse = mounted.state.clone();
		Effect::new(move |prev: Option<u32>| {
			let value = pulse.get();
			if prev.is_some_and(|p| p != value) {
				if let Some(ref mut s) = *state_pulse.borrow_mut() {
					s.trigger_new_block_pulse(js_sys::Date::now());
				}
			}
			value
		});
	}

	on_cleanup(move || {
		alive.store(false, Ordering::Release);
		if let (Some(window), Ok(ids)) = (web_sys::window(), interval_ids.lock()) {
			for id in ids.iter() {
				window.clear_interval_with_handle(*id);
			}
		}
	});

	view! { <canvas node_ref=canvas_ref class="infinity-logo" style="display: block;" /> }
}
