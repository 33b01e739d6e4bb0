//! Handles a mounted logo keeps alive between frames.
//!
//! `C` is the host's callback handle (a `Closure` in the browser) and `S`
//! the drawing surface. Everything sits behind `Rc` slots so the frame
//! callback, the interval callbacks and the listeners can share it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::state::LogoState;

pub type Shared<T> = Rc<RefCell<Option<T>>>;

pub struct MountedLogo<C, S> {
	pub state: Shared<LogoState>,
	pub surface: Shared<S>,
	/// Self-rescheduling frame callback.
	pub frame: Shared<C>,
	pub timers: Rc<RefCell<Vec<C>>>,
	listeners: Rc<RefCell<Vec<(&'static str, C)>>>,
}

impl<C, S> Clone for MountedLogo<C, S> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			surface: self.surface.clone(),
			frame: self.frame.clone(),
			timers: self.timers.clone(),
			listeners: self.listeners.clone(),
		}
	}
}

impl<C, S> Default for MountedLogo<C, S> {
	fn default() -> Self {
		Self {
			state: Rc::new(RefCell::new(None)),
			surface: Rc::new(RefCell::new(None)),
			frame: Rc::new(RefCell::new(None)),
			timers: Rc::new(RefCell::new(Vec::new())),
			listeners: Rc::new(RefCell::new(Vec::new())),
		}
	}
}

impl<C, S> MountedLogo<C, S> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Keep `callback` until [`MountedLogo::release`] hands it back for detaching.
	pub fn listen(&self, event: &'static str, callback: C) {
		self.listeners.borrow_mut().push((event, callback));
	}

	/// Tear the engine down and drop every handle except the frame callback.
	///
	/// `detach` sees each listener before it is dropped. Safe to call from
	/// inside the frame callback.
	pub fn release(&self, mut detach: impl FnMut(&'static str, &C)) {
		if let Some(mut state) = self.state.borrow_mut().take() {
			state.teardown();
		}
		self.surface.borrow_mut().take();
		let listeners: Vec<_> = self.listeners.borrow_mut().drain(..).collect();
		for (event, callback) in &listeners {
			detach(*event, callback);
		}
		drop(listeners);
		self.timers.borrow_mut().clear();
		debug!("logo handles released");
	}

	/// Drop the frame callback and with it the last clone it holds of `self`.
	/// Must not run inside that callback.
	pub fn release_frame(&self) {
		self.frame.borrow_mut().take();
	}
}
