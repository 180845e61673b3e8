//! Dark/light theme switch.

use leptos::prelude::*;

use crate::theme::{self, ThemeMode};

/// Button that flips the page theme and remembers the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let mode = RwSignal::new(theme::current());

	let on_click = move |_| {
		let next = mode.get_untracked().toggled();
		theme::apply(next);
		theme::persist(next);
		mode.set(next);
	};

	view! {
		<button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
			<i id="theme-icon" class=move || mode.get().icon_class() />
		</button>
	}
}
