//! One-shot "element entered the viewport" detection.
//!
//! Wraps `IntersectionObserver`: the callback runs the first time the target
//! is at least `threshold` visible inside the (optionally inset) viewport,
//! after which the observer disconnects.

use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// When an element counts as having entered the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
	/// Visible fraction of the element, `0.0..=1.0`.
	pub threshold: f64,
	/// Pixels trimmed off the bottom of the viewport.
	pub bottom_inset: u32,
}

impl Visibility {
	/// Scroll-reveal blocks: a tenth visible, 20px above the bottom edge.
	pub const REVEAL: Self = Self {
		threshold: 0.1,
		bottom_inset: 20,
	};

	/// Stat counters: half visible.
	pub const COUNTER: Self = Self {
		threshold: 0.5,
		bottom_inset: 0,
	};

	/// CSS margin applied to the observer's root.
	pub fn root_margin(&self) -> String {
		if self.bottom_inset == 0 {
			"0px".to_string()
		} else {
			format!("0px 0px -{}px 0px", self.bottom_inset)
		}
	}

	/// Whether an observer entry means the element has entered.
	///
	/// Observers report once on `observe` regardless of the threshold, so the
	/// ratio is checked as well.
	pub fn entered(&self, intersecting: bool, ratio: f64) -> bool {
		intersecting && ratio >= self.threshold
	}
}

/// Run `on_enter` once, the first time `target` becomes visible.
pub fn on_first_entry(target: &Element, visibility: Visibility, on_enter: impl FnOnce() + 'static) {
	let mut on_enter = Some(on_enter);
	let callback: Closure<dyn FnMut(Array, IntersectionObserver)> =
		Closure::new(move |entries: Array, observer: IntersectionObserver| {
			let entered = entries.iter().any(|entry| {
				entry
					.dyn_into::<IntersectionObserverEntry>()
					.is_ok_and(|e| visibility.entered(e.is_intersecting(), e.intersection_ratio()))
			});
			if !entered {
				return;
			}
			observer.disconnect();
			if let Some(f) = on_enter.take() {
				f();
			}
		});

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(visibility.threshold));
	init.set_root_margin(&visibility.root_margin());

	match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
		Ok(observer) => observer.observe(target),
		Err(e) => {
			warn!("portfolio-fx: IntersectionObserver unavailable: {:?}", e);
			return;
		}
	}
	// Disconnected observers never call back; the closure is tiny.
	callback.forget();
}
