//! Soft glow trailing the mouse pointer.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;

use crate::frame::FrameLoop;

/// Below this viewport width the glow is not shown.
const MIN_VIEWPORT_WIDTH: f64 = 768.0;

/// Share of the remaining distance covered each frame.
const EASING: f64 = 0.12;

/// Eases a position toward the last pointer location.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
	pub target: (f64, f64),
	pub position: (f64, f64),
}

impl Follower {
	pub fn step(&mut self) -> (f64, f64) {
		self.position.0 += (self.target.0 - self.position.0) * EASING;
		self.position.1 += (self.target.1 - self.position.1) * EASING;
		self.position
	}
}

/// Fixed-position glow element that follows the pointer on wide screens.
#[component]
pub fn CursorGlow() -> impl IntoView {
	let wide = web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
		.is_some_and(|w| w >= MIN_VIEWPORT_WIDTH);
	let (pos, set_pos) = signal((0.0f64, 0.0f64));

	if wide {
		let follower = Rc::new(RefCell::new(Follower::default()));
		let follower_move = follower.clone();
		let _ = window_event_listener(leptos::ev::mousemove, move |ev| {
			follower_move.borrow_mut().target = (f64::from(ev.client_x()), f64::from(ev.client_y()));
		});
		FrameLoop::start(move |_| {
			set_pos.set(follower.borrow_mut().step());
			ControlFlow::Continue(())
		});
	}

	view! {
		<Show when=move || wide>
			<div
				id="cursorGlow"
				class="cursor-glow"
				aria-hidden="true"
				style:left=move || format!("{}px", pos.get().0)
				style:top=move || format!("{}px", pos.get().1)
			/>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn converges_on_target_without_overshoot() {
		let mut f = Follower {
			target: (100.0, -50.0),
			position: (0.0, 0.0),
		};
		let first = f.step();
		assert!((first.0 - 12.0).abs() < 1e-12);
		assert!((first.1 + 6.0).abs() < 1e-12);
		for _ in 0..200 {
			let (x, y) = f.step();
			assert!(x <= 100.0 && y >= -50.0);
		}
		assert!((f.position.0 - 100.0).abs() < 1e-6);
	}
}
