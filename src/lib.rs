//! portfolio-fx: interactive enhancements for a personal portfolio page.
//!
//! This crate provides a WASM client that renders the page's animated
//! surfaces (a connected particle network behind the hero section and a
//! glowing particle field behind the whole page) together with the theme
//! toggle, navigation, typing effect, stat counters, cursor glow and contact
//! form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod frame;
pub mod theme;
pub mod viewport;

pub use components::particle_field::{ParticleCanvas, Sizing, Variant};
pub use config::PortfolioConfig;
pub use theme::ThemeMode;

use components::contact::ContactForm;
use components::counter::StatCounter;
use components::cursor_glow::CursorGlow;
use components::nav::Navbar;
use components::reveal::Reveal;
use components::typing::TypingText;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Main application component.
/// Loads page content from the DOM and renders the animated portfolio.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = PortfolioConfig::load();
	let stats = config
		.stats
		.iter()
		.map(|stat| view! { <StatCounter target=stat.count label=stat.label.clone() /> })
		.collect_view();
	let endpoint = config.contact_endpoint.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=config.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas
			variant=Variant::Global
			id="globalParticles"
			sizing=Sizing::Viewport
			class="global-particles"
		/>
		<CursorGlow />
		<Navbar brand=config.name.clone() />

		<main>
			<section id="home" class="hero">
				<ParticleCanvas variant=Variant::Hero id="heroCanvas" class="hero-canvas" />
				<div class="hero-content">
					<h1>{config.name.clone()}</h1>
					<p class="hero-role">
						<TypingText roles=config.roles.clone() />
					</p>
				</div>
			</section>
			<section id="about" class="about">
				<Reveal class="stats">{stats}</Reveal>
			</section>
			<section id="skills" class="skills" />
			<section id="projects" class="projects" />
			<section id="contact" class="contact">
				<Reveal>
					<ContactForm endpoint=endpoint />
				</Reveal>
			</section>
		</main>
	}
}
