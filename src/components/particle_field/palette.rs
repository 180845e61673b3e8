//! Colours used by the particle fields.
//!
//! Each variant has its own palette with a dark and a light rendition; the
//! animator picks one per frame from the live [`ThemeMode`].

use crate::theme::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSLA color; saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub h: u16,
	pub s: u8,
	pub l: u8,
	pub a: f64,
}

impl Hsla {
	pub const fn new(h: u16, s: u8, l: u8, a: f64) -> Self {
		Self { h, s, l, a }
	}

	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// A fill or stroke colour handed to a [`Surface`](super::render::Surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
	Rgba(Color),
	Hsla(Hsla),
}

impl Paint {
	pub fn alpha(&self) -> f64 {
		match self {
			Paint::Rgba(c) => c.a,
			Paint::Hsla(c) => c.a,
		}
	}

	pub fn to_css(&self) -> String {
		match self {
			Paint::Rgba(c) => c.to_css(),
			Paint::Hsla(c) => c.to_css(),
		}
	}
}

/// Dot and connector colours of the hero field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroPalette {
	pub dot: Color,
	pub line: Color,
}

impl HeroPalette {
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self {
				dot: Color::rgb(0, 212, 255),
				line: Color::rgb(0, 212, 255),
			},
			ThemeMode::Light => Self {
				dot: Color::rgb(0, 120, 180),
				line: Color::rgb(0, 150, 200),
			},
		}
	}
}

/// Hue categories a background particle may be tinted with.
pub const GLOBAL_HUES: [u16; 5] = [190, 210, 260, 280, 160];

/// Lightness levels and attenuation of the background field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalPalette {
	/// Multiplier applied to every alpha in the frame.
	pub global_alpha: f64,
	/// When set, every particle uses this hue instead of its own category.
	pub hue_override: Option<u16>,
	pub glow_lightness: u8,
	pub core_lightness: u8,
	pub line_lightness: u8,
}

impl GlobalPalette {
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self {
				global_alpha: 1.0,
				hue_override: None,
				glow_lightness: 65,
				core_lightness: 75,
				line_lightness: 65,
			},
			ThemeMode::Light => Self {
				global_alpha: 0.85,
				hue_override: Some(210),
				glow_lightness: 55,
				core_lightness: 50,
				line_lightness: 50,
			},
		}
	}

	pub fn hue_for(&self, category: u16) -> u16 {
		self.hue_override.unwrap_or(category)
	}
}
