//! `requestAnimationFrame` loop with an explicit stop handle.
//!
//! The callback closure keeps itself alive through the shared state, so a
//! loop runs until its tick returns [`ControlFlow::Break`] or [`FrameLoop::stop`]
//! is called. Dropping the handle does not stop it.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;

struct LoopState {
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
	request: Cell<Option<i32>>,
	stopped: Cell<bool>,
}

impl LoopState {
	fn request_next(&self) {
		if self.stopped.get() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let callback = self.callback.borrow();
		let Some(cb) = callback.as_ref() else {
			return;
		};
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => self.request.set(Some(id)),
			Err(e) => {
				warn!("portfolio-fx: requestAnimationFrame failed: {:?}", e);
				self.stopped.set(true);
			}
		}
	}

	fn stop(&self) {
		self.stopped.set(true);
		if let (Some(id), Some(window)) = (self.request.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

/// Handle to a running animation loop.
#[derive(Clone)]
pub struct FrameLoop {
	state: Rc<LoopState>,
}

impl FrameLoop {
	/// Calls `tick` with the frame timestamp (ms) on every animation frame,
	/// starting with the next one.
	pub fn start<F>(mut tick: F) -> Self
	where
		F: FnMut(f64) -> ControlFlow<()> + 'static,
	{
		let state = Rc::new(LoopState {
			callback: RefCell::new(None),
			request: Cell::new(None),
			stopped: Cell::new(false),
		});

		let state_cb = state.clone();
		*state.callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			state_cb.request.set(None);
			if state_cb.stopped.get() {
				return;
			}
			match tick(timestamp) {
				ControlFlow::Continue(()) => state_cb.request_next(),
				ControlFlow::Break(()) => state_cb.stopped.set(true),
			}
		}));
		state.request_next();

		Self { state }
	}

	/// Cancels the pending frame; the tick is never called again.
	pub fn stop(&self) {
		self.state.stop();
	}

	pub fn is_running(&self) -> bool {
		!self.state.stopped.get()
	}
}
