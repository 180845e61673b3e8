//! Leptos component wrapping a particle field canvas.
//!
//! The component renders a `<canvas>`, sizes its pixel buffer to either the
//! containing element or the viewport, and drives a [`ParticleAnimator`]
//! from a [`FrameLoop`] owned by the component. Window resizes are debounced;
//! once a burst settles the surface is measured, the canvas resized and the
//! particles regenerated from scratch.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::animator::{ParticleAnimator, Variant};
use super::debounce::{Debouncer, RESIZE_QUIET};
use crate::frame::FrameLoop;
use crate::theme;

/// Where the canvas takes its pixel dimensions from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
	/// Rendered size of the canvas's containing element.
	Parent,
	/// Window inner size.
	Viewport,
}

type ResizeDebouncer = Debouncer<TimeoutHandle, ()>;

fn measure(canvas: &HtmlCanvasElement, sizing: Sizing) -> Option<(u32, u32)> {
	match sizing {
		Sizing::Viewport => {
			let window = web_sys::window()?;
			let w = window.inner_width().ok()?.as_f64()?;
			let h = window.inner_height().ok()?.as_f64()?;
			Some((w.max(0.0) as u32, h.max(0.0) as u32))
		}
		Sizing::Parent => {
			let parent: HtmlElement = canvas.parent_element()?.dyn_into().ok()?;
			Some((
				parent.offset_width().max(0) as u32,
				parent.offset_height().max(0) as u32,
			))
		}
	}
}

/// Binds an animator to `canvas` and starts its loop. `None` when the 2D
/// context is unavailable.
fn start(canvas: HtmlCanvasElement, variant: Variant, sizing: Sizing) -> Option<FrameLoop> {
	let Some(mut ctx) = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
	else {
		warn!("portfolio-fx: {:?} canvas has no 2d context", variant);
		return None;
	};

	let (w, h) = measure(&canvas, sizing).unwrap_or((0, 0));
	canvas.set_width(w);
	canvas.set_height(h);

	let mut animator = ParticleAnimator::new(variant);
	let count = animator.regenerate(w, h);
	info!(
		"portfolio-fx: {:?} field {}x{} with {} particles",
		variant, w, h, count
	);
	let animator = Rc::new(RefCell::new(animator));

	bind_resize(canvas, variant, sizing, animator.clone());

	Some(FrameLoop::start(move |_| {
		animator
			.borrow_mut()
			.step_and_render(theme::current(), &mut ctx);
		ControlFlow::Continue(())
	}))
}

/// Regenerate the field once resizing has been quiet for [`RESIZE_QUIET`].
fn bind_resize(
	canvas: HtmlCanvasElement,
	variant: Variant,
	sizing: Sizing,
	animator: Rc<RefCell<ParticleAnimator>>,
) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let debounce: Rc<RefCell<ResizeDebouncer>> =
		Rc::new(RefCell::new(Debouncer::new(RESIZE_QUIET)));

	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let (ticket, stale) = debounce.borrow_mut().trigger(());
		if let Some(stale) = stale {
			stale.clear();
		}

		let (debounce_fire, animator_fire, canvas_fire) =
			(debounce.clone(), animator.clone(), canvas.clone());
		let scheduled = set_timeout_with_handle(
			move || {
				if debounce_fire.borrow_mut().fire(ticket).is_none() {
					return;
				}
				let Some((w, h)) = measure(&canvas_fire, sizing) else {
					return;
				};
				canvas_fire.set_width(w);
				canvas_fire.set_height(h);
				let count = animator_fire.borrow_mut().regenerate(w, h);
				debug!(
					"portfolio-fx: {:?} field regenerated at {}x{} with {} particles",
					variant, w, h, count
				);
			},
			debounce.borrow().quiet(),
		);
		match scheduled {
			Ok(handle) => debounce.borrow_mut().arm(handle),
			Err(e) => warn!("portfolio-fx: failed to schedule resize: {:?}", e),
		}
	});

	if let Err(e) =
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
	{
		warn!("portfolio-fx: failed to listen for resize: {:?}", e);
	}
	// Listener lives as long as the page.
	on_resize.forget();
}

/// Renders an animated particle field on a canvas element.
///
/// The hero variant is meant to sit inside the hero section with
/// `sizing = Sizing::Parent`; the global variant fills the viewport behind
/// the page. When the canvas never mounts the component does nothing.
#[component]
pub fn ParticleCanvas(
	variant: Variant,
	#[prop(into)] id: String,
	#[prop(default = Sizing::Parent)] sizing: Sizing,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frame_loop.with_value(Option::is_some) {
			return;
		}
		frame_loop.set_value(start(canvas, variant, sizing));
	});
	on_cleanup(move || {
		frame_loop.try_with_value(|running| running.as_ref().map(FrameLoop::stop));
	});

	view! { <canvas node_ref=canvas_ref id=id class=class aria-hidden="true" /> }
}
