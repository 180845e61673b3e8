//! Statistic counters that count up once they scroll into view.

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;

use crate::frame::FrameLoop;
use crate::viewport::{Visibility, on_first_entry};

/// Ease-out count from zero to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
	pub target: u32,
	pub duration_ms: f64,
}

impl CounterAnimation {
	pub fn new(target: u32) -> Self {
		Self {
			target,
			duration_ms: 1500.0,
		}
	}

	/// Displayed value after `elapsed_ms`, and whether the count is over.
	pub fn value_at(&self, elapsed_ms: f64) -> (u32, bool) {
		let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
		if progress >= 1.0 {
			return (self.target, true);
		}
		let ease = 1.0 - (1.0 - progress).powi(3);
		((f64::from(self.target) * ease).round() as u32, false)
	}
}

fn run(animation: CounterAnimation, set_value: WriteSignal<u32>) {
	let start = Rc::new(Cell::new(None::<f64>));
	FrameLoop::start(move |now| {
		let t0 = start.get().unwrap_or_else(|| {
			start.set(Some(now));
			now
		});
		let (value, done) = animation.value_at(now - t0);
		set_value.set(value);
		if done {
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	});
}

/// A number that animates up to `target` the first time at least half of
/// it is visible.
#[component]
pub fn StatCounter(target: u32, #[prop(into)] label: String) -> impl IntoView {
	let number_ref = NodeRef::<leptos::html::Span>::new();
	let (value, set_value) = signal(0u32);
	let observed = StoredValue::new(false);

	Effect::new(move |_| {
		let Some(el) = number_ref.get() else {
			return;
		};
		if observed.get_value() {
			return;
		}
		observed.set_value(true);
		on_first_entry(&el, Visibility::COUNTER, move || {
			run(CounterAnimation::new(target), set_value)
		});
	});

	view! {
		<div class="stat">
			<span node_ref=number_ref class="stat-number" data-count=target.to_string()>
				{value}
			</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}
