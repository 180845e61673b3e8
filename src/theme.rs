//! The page-wide colour theme flag.
//!
//! The active theme lives in the `data-theme` attribute of the document
//! element. Animations read it on every frame and never cache it, so a
//! toggle takes effect on the next frame. The only persisted state in the
//! crate is the preference stored under [`STORAGE_KEY`].

use log::warn;

/// `localStorage` key holding the preferred theme.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// The two recognized colour themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	/// Interprets an attribute or stored value. Anything other than `"light"`
	/// (including no value at all) means dark.
	pub fn from_attr(value: Option<&str>) -> Self {
		match value {
			Some("light") => Self::Light,
			_ => Self::Dark,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	/// Icon shown on the toggle button: the sun offers a way out of dark mode.
	pub fn icon_class(self) -> &'static str {
		match self {
			Self::Dark => "fas fa-sun",
			Self::Light => "fas fa-moon",
		}
	}
}

fn root_element() -> Option<web_sys::Element> {
	web_sys::window()?.document()?.document_element()
}

fn storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the active theme from the document. Called once per frame.
pub fn current() -> ThemeMode {
	let attr = root_element().and_then(|el| el.get_attribute(THEME_ATTR));
	ThemeMode::from_attr(attr.as_deref())
}

/// Writes the theme attribute on the document element.
pub fn apply(mode: ThemeMode) {
	let Some(root) = root_element() else {
		return;
	};
	if let Err(e) = root.set_attribute(THEME_ATTR, mode.as_str()) {
		warn!("portfolio-fx: failed to set theme attribute: {:?}", e);
	}
}

/// Stores the preferred theme. Storage may be unavailable (private mode,
/// sandboxed iframe); the preference is then simply not remembered.
pub fn persist(mode: ThemeMode) {
	if let Some(store) = storage() {
		let _ = store.set_item(STORAGE_KEY, mode.as_str());
	}
}

/// Applies the stored preference, defaulting to dark.
pub fn restore() -> ThemeMode {
	let saved = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	let mode = ThemeMode::from_attr(saved.as_deref());
	apply(mode);
	mode
}
