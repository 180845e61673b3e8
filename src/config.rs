//! Page content configuration.
//!
//! The host page may embed a JSON document in
//! `<script id="portfolio-config" type="application/json">`. Every field is
//! optional; anything missing falls back to [`PortfolioConfig::default`].

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the inline configuration element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// A headline figure shown with an animated counter.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
	pub label: String,
	pub count: u32,
}

/// Text and endpoints the page renders.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
	pub name: String,
	pub title: String,
	/// Roles cycled by the typing effect.
	pub roles: Vec<String>,
	pub stats: Vec<Stat>,
	/// Form-relay URL receiving contact messages.
	pub contact_endpoint: String,
}

impl Default for PortfolioConfig {
	fn default() -> Self {
		Self {
			name: "Portfolio".to_string(),
			title: "Portfolio".to_string(),
			roles: [
				"B.Tech CSE Student",
				"Programming Enthusiast",
				"Cybersecurity Aspirant",
				"Competitive Programmer",
				"Open-Source Contributor",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			stats: vec![
				Stat {
					label: "Projects".to_string(),
					count: 12,
				},
				Stat {
					label: "Problems Solved".to_string(),
					count: 350,
				},
				Stat {
					label: "Certifications".to_string(),
					count: 6,
				},
			],
			contact_endpoint: "https://formsubmit.co/ajax/hello@example.com".to_string(),
		}
	}
}

impl PortfolioConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Reads the inline configuration, falling back to defaults when it is
	/// absent or malformed.
	pub fn load() -> Self {
		let Some(text) = read_config_element() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!(
					"portfolio-fx: loaded config with {} roles, {} stats",
					config.roles.len(),
					config.stats.len()
				);
				config
			}
			Err(e) => {
				warn!("portfolio-fx: failed to parse page config: {}", e);
				Self::default()
			}
		}
	}
}

fn read_config_element() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
