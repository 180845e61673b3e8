//! Blocks that fade in the first time they scroll into view.

use leptos::prelude::*;

use crate::viewport::{Visibility, on_first_entry};

/// Wraps `children` in a `.reveal` container that gains `revealed` once it
/// enters the viewport. The class is never removed.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
	let container = NodeRef::<leptos::html::Div>::new();
	let revealed = RwSignal::new(false);
	let observed = StoredValue::new(false);

	Effect::new(move |_| {
		let Some(el) = container.get() else {
			return;
		};
		if observed.get_value() {
			return;
		}
		observed.set_value(true);
		on_first_entry(&el, Visibility::REVEAL, move || revealed.set(true));
	});

	let class = format!("reveal {class}").trim_end().to_string();
	view! {
		<div node_ref=container class=class class:revealed=move || revealed.get()>
			{children()}
		</div>
	}
}
