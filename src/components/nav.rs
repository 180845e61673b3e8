//! Navigation bar: scroll styling, active-section highlight, mobile menu,
//! and the scroll-to-top button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::theme_toggle::ThemeToggle;

/// Page sections linked from the navbar, as `(element id, label)`.
pub const SECTIONS: [(&str, &str); 5] = [
	("home", "Home"),
	("about", "About"),
	("skills", "Skills"),
	("projects", "Projects"),
	("contact", "Contact"),
];

const SCROLLED_AFTER: f64 = 60.0;
const SCROLL_TOP_AFTER: f64 = 500.0;
/// A section counts as current slightly before its top reaches the navbar.
const ACTIVE_OFFSET: f64 = 120.0;

/// Vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

/// Everything the navbar derives from the scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
	pub scrolled: bool,
	pub active: Option<String>,
	pub show_scroll_top: bool,
}

impl NavState {
	pub fn compute(scroll_y: f64, sections: &[SectionBounds]) -> Self {
		let active = sections
			.iter()
			.rfind(|s| {
				let top = s.top - ACTIVE_OFFSET;
				scroll_y >= top && scroll_y < top + s.height
			})
			.map(|s| s.id.clone());

		Self {
			scrolled: scroll_y > SCROLLED_AFTER,
			active,
			show_scroll_top: scroll_y > SCROLL_TOP_AFTER,
		}
	}
}

fn measure_sections() -> Vec<SectionBounds> {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return Vec::new();
	};
	SECTIONS
		.iter()
		.filter_map(|(id, _)| {
			let el: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
			Some(SectionBounds {
				id: id.to_string(),
				top: f64::from(el.offset_top()),
				height: f64::from(el.offset_height()),
			})
		})
		.collect()
}

fn read_nav_state() -> NavState {
	let scroll_y = web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or_default();
	NavState::compute(scroll_y, &measure_sections())
}

/// Smoothly scrolls the section with `id` to the top of the viewport.
/// Returns `false` when there is no such element.
fn scroll_to_section(id: &str) -> bool {
	let Some(target) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return false;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	target.scroll_into_view_with_scroll_into_view_options(&options);
	true
}

/// Locks page scrolling while the mobile menu covers it.
fn lock_body_scroll(locked: bool) {
	let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
		return;
	};
	let _ = body
		.style()
		.set_property("overflow", if locked { "hidden" } else { "" });
}

/// Top navigation with section links, theme toggle and hamburger menu.
#[component]
pub fn Navbar(#[prop(into)] brand: String) -> impl IntoView {
	let nav = RwSignal::new(NavState::default());
	let menu_open = RwSignal::new(false);

	Effect::new(move |_| nav.set(read_nav_state()));
	let _ = window_event_listener(leptos::ev::scroll, move |_| nav.set(read_nav_state()));

	let set_menu = move |open: bool| {
		menu_open.set(open);
		lock_body_scroll(open);
	};

	let links = SECTIONS
		.iter()
		.map(|&(id, label)| {
			let is_active = move || nav.with(|n| n.active.as_deref() == Some(id));
			view! {
				<li>
					<a
						href=format!("#{id}")
						class="nav-link"
						class:active=is_active
						on:click=move |ev| {
							set_menu(false);
							if scroll_to_section(id) {
								ev.prevent_default();
							}
						}
					>
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav id="navbar" class="navbar" class:scrolled=move || nav.with(|n| n.scrolled)>
			<a
				href="#home"
				class="nav-brand"
				on:click=move |ev| {
					if scroll_to_section("home") {
						ev.prevent_default();
					}
				}
			>
				{brand}
			</a>
			<ul id="navMenu" class="nav-menu" class:open=move || menu_open.get()>
				{links}
			</ul>
			<div class="nav-actions">
				<ThemeToggle />
				<button
					id="hamburger"
					class="hamburger"
					class:active=move || menu_open.get()
					aria-label="Toggle navigation"
					on:click=move |_| set_menu(!menu_open.get_untracked())
				>
					<span />
					<span />
					<span />
				</button>
			</div>
		</nav>
		<ScrollTopButton visible=Signal::derive(move || nav.with(|n| n.show_scroll_top)) />
	}
}

/// Floating button that smooth-scrolls back to the top of the page.
#[component]
pub fn ScrollTopButton(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
	let on_click = move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	};

	view! {
		<button
			id="scrollTopBtn"
			class="scroll-top"
			class:visible=move || visible.get()
			aria-label="Scroll to top"
			on:click=on_click
		>
			<i class="fas fa-arrow-up" />
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sections() -> Vec<SectionBounds> {
		[("home", 0.0, 700.0), ("about", 700.0, 600.0), ("contact", 1300.0, 500.0)]
			.into_iter()
			.map(|(id, top, height)| SectionBounds {
				id: id.to_string(),
				top,
				height,
			})
			.collect()
	}

	#[test]
	fn top_of_page() {
		let state = NavState::compute(0.0, &sections());
		assert_eq!(
			state,
			NavState {
				scrolled: false,
				active: Some("home".to_string()),
				show_scroll_top: false,
			}
		);
	}

	#[test]
	fn section_becomes_active_before_reaching_the_top() {
		let s = sections();
		assert_eq!(NavState::compute(579.0, &s).active.as_deref(), Some("home"));
		assert_eq!(NavState::compute(580.0, &s).active.as_deref(), Some("about"));
		assert_eq!(NavState::compute(1180.0, &s).active.as_deref(), Some("contact"));
		assert_eq!(NavState::compute(1680.0, &s).active, None);
	}

	#[test]
	fn thresholds_are_exclusive() {
		let s = sections();
		assert!(!NavState::compute(60.0, &s).scrolled);
		assert!(NavState::compute(60.5, &s).scrolled);
		assert!(!NavState::compute(500.0, &s).show_scroll_top);
		assert!(NavState::compute(501.0, &s).show_scroll_top);
	}
}
