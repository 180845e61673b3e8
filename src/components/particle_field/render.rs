//! Drawing for both particle field variants.
//!
//! Rendering goes through the [`Surface`] trait so the frame logic can be
//! exercised without a browser. Each frame draws in two passes:
//! 1. Particles (hero: one dot; background: glow disc then core disc)
//! 2. Connectors for every unordered pair closer than the variant threshold

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::palette::{GlobalPalette, HeroPalette, Hsla, Paint};
use super::particles::{Particle, ParticleField};

/// Hero connectors are drawn below this distance (surface units).
pub const HERO_LINK_DISTANCE: f64 = 150.0;

/// Background connectors are drawn below this squared distance (~148 units).
pub const GLOBAL_LINK_DISTANCE_SQ: f64 = 22_000.0;

/// Connector opacity for coincident particles.
pub const LINK_MAX_ALPHA: f64 = 0.08;

const HERO_LINK_WIDTH: f64 = 0.6;
const GLOBAL_LINK_WIDTH: f64 = 0.5;
const GLOW_RADIUS_SCALE: f64 = 3.0;
const GLOW_ALPHA_SCALE: f64 = 0.12;

/// Minimal 2D immediate-mode drawing target.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&paint.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&paint.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Hero connector opacity: linear from [`LINK_MAX_ALPHA`] at distance 0 down
/// to 0 at [`HERO_LINK_DISTANCE`]. `None` at or beyond the threshold.
pub fn hero_link_alpha(distance: f64) -> Option<f64> {
	(distance < HERO_LINK_DISTANCE).then(|| LINK_MAX_ALPHA * (1.0 - distance / HERO_LINK_DISTANCE))
}

/// Background connector opacity, linear in squared distance and scaled by
/// the theme's global alpha.
pub fn global_link_alpha(distance_sq: f64, global_alpha: f64) -> Option<f64> {
	(distance_sq < GLOBAL_LINK_DISTANCE_SQ)
		.then(|| (1.0 - distance_sq / GLOBAL_LINK_DISTANCE_SQ) * LINK_MAX_ALPHA * global_alpha)
}

/// Shimmering alpha: the pulse swings between 0.6x and 1.0x of the base.
pub fn pulse_alpha(base: f64, time: f64, phase: f64, global_alpha: f64) -> f64 {
	let pulse = 0.5 + 0.5 * (time * 2.0 + phase).sin();
	base * (0.6 + 0.4 * pulse) * global_alpha
}

fn distance_sq(a: &Particle, b: &Particle) -> f64 {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	dx * dx + dy * dy
}

fn clear(field: &ParticleField, surface: &mut impl Surface) {
	surface.clear(f64::from(field.width()), f64::from(field.height()));
}

/// Renders the hero network: flat dots joined by faint lines.
pub fn draw_hero(field: &ParticleField, palette: &HeroPalette, surface: &mut impl Surface) {
	clear(field, surface);

	for p in &field.particles {
		let paint = Paint::Rgba(palette.dot.with_alpha(p.alpha));
		surface.fill_circle(p.x, p.y, p.radius, &paint);
	}

	let particles = &field.particles;
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let Some(alpha) = hero_link_alpha(distance_sq(a, b).sqrt()) else {
				continue;
			};
			let paint = Paint::Rgba(palette.line.with_alpha(alpha));
			surface.stroke_line((a.x, a.y), (b.x, b.y), HERO_LINK_WIDTH, &paint);
		}
	}
}

fn category(p: &Particle) -> u16 {
	p.shimmer.map(|s| s.hue).unwrap_or_default()
}

/// Renders the background field: pulsing glow and core discs, hue-tinted
/// connectors.
pub fn draw_global(
	field: &ParticleField,
	time: f64,
	palette: &GlobalPalette,
	surface: &mut impl Surface,
) {
	clear(field, surface);

	for p in &field.particles {
		let phase = p.shimmer.map(|s| s.phase).unwrap_or_default();
		let alpha = pulse_alpha(p.alpha, time, phase, palette.global_alpha);
		let hue = palette.hue_for(category(p));

		let glow = Hsla::new(hue, 100, palette.glow_lightness, alpha * GLOW_ALPHA_SCALE);
		surface.fill_circle(p.x, p.y, p.radius * GLOW_RADIUS_SCALE, &Paint::Hsla(glow));

		let core = Hsla::new(hue, 100, palette.core_lightness, alpha);
		surface.fill_circle(p.x, p.y, p.radius, &Paint::Hsla(core));
	}

	let particles = &field.particles;
	for (i, a) in particles.iter().enumerate() {
		let hue = palette.hue_for(category(a));
		for b in &particles[i + 1..] {
			let Some(alpha) = global_link_alpha(distance_sq(a, b), palette.global_alpha) else {
				continue;
			};
			let paint = Paint::Hsla(Hsla::new(hue, 80, palette.line_lightness, alpha));
			surface.stroke_line((a.x, a.y), (b.x, b.y), GLOBAL_LINK_WIDTH, &paint);
		}
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::particle_field::particles::{FieldConfig, Shimmer};
	use crate::theme::ThemeMode;

	/// Records draw calls instead of rasterizing them.
	#[derive(Debug, Default)]
	pub(crate) struct Recorder {
		pub clears: usize,
		pub circles: Vec<(f64, f64, f64, Paint)>,
		pub lines: Vec<((f64, f64), (f64, f64), f64, Paint)>,
	}

	impl Surface for Recorder {
		fn clear(&mut self, _width: f64, _height: f64) {
			self.clears += 1;
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
			self.circles.push((x, y, radius, *paint));
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
			self.lines.push((from, to, width, *paint));
		}
	}

	fn dot(x: f64, y: f64, hue: Option<u16>) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			alpha: 0.5,
			shimmer: hue.map(|hue| Shimmer { phase: 0.0, hue }),
		}
	}

	fn field_with(config: FieldConfig, particles: Vec<Particle>) -> ParticleField {
		let mut f = ParticleField::new(config);
		f.resize(800, 600);
		f.particles = particles;
		f
	}

	#[test]
	fn hero_link_threshold_is_strict() {
		assert_eq!(hero_link_alpha(0.0), Some(LINK_MAX_ALPHA));
		assert!(hero_link_alpha(149.999).is_some_and(|a| a > 0.0 && a < 1e-4));
		assert_eq!(hero_link_alpha(150.0), None);
		assert_eq!(hero_link_alpha(75.0), Some(0.04));
	}

	#[test]
	fn global_link_threshold_is_strict() {
		assert_eq!(global_link_alpha(0.0, 1.0), Some(LINK_MAX_ALPHA));
		assert_eq!(global_link_alpha(22_000.0, 1.0), None);
		let light = global_link_alpha(0.0, 0.85).unwrap();
		assert!((light - 0.068).abs() < 1e-12);
	}

	#[test]
	fn pulse_stays_between_sixty_and_hundred_percent() {
		for step in 0..200 {
			let t = step as f64 * 0.05;
			let a = pulse_alpha(0.5, t, 1.3, 1.0);
			assert!((0.3 - 1e-12..=0.5 + 1e-12).contains(&a));
		}
	}

	#[test]
	fn hero_frame_draws_dots_then_close_links() {
		let f = field_with(
			FieldConfig::hero(),
			vec![dot(0.0, 0.0, None), dot(100.0, 0.0, None), dot(400.0, 0.0, None)],
		);
		let mut rec = Recorder::default();
		draw_hero(&f, &HeroPalette::for_mode(ThemeMode::Dark), &mut rec);

		assert_eq!(rec.clears, 1);
		assert_eq!(rec.circles.len(), 3);
		assert_eq!(rec.lines.len(), 1, "only the 100-unit pair is linked");
		let (from, to, width, paint) = rec.lines[0];
		assert_eq!((from, to, width), ((0.0, 0.0), (100.0, 0.0), 0.6));
		assert!((paint.alpha() - 0.08 * (1.0 - 100.0 / 150.0)).abs() < 1e-12);
	}

	#[test]
	fn global_frame_draws_glow_and_core() {
		let f = field_with(
			FieldConfig::global(),
			vec![dot(10.0, 10.0, Some(260)), dot(50.0, 10.0, Some(160))],
		);
		let mut rec = Recorder::default();
		draw_global(&f, 0.0, &GlobalPalette::for_mode(ThemeMode::Dark), &mut rec);

		assert_eq!(rec.circles.len(), 4);
		let (_, _, glow_r, glow) = rec.circles[0];
		let (_, _, core_r, core) = rec.circles[1];
		assert_eq!(glow_r, 6.0);
		assert_eq!(core_r, 2.0);
		assert!((glow.alpha() - core.alpha() * 0.12).abs() < 1e-12);
		match core {
			Paint::Hsla(c) => assert_eq!((c.h, c.l), (260, 75)),
			other => panic!("unexpected paint {other:?}"),
		}
		assert_eq!(rec.lines.len(), 1);
		match rec.lines[0].3 {
			Paint::Hsla(c) => assert_eq!((c.h, c.s), (260, 80)),
			other => panic!("unexpected paint {other:?}"),
		}
	}

	#[test]
	fn light_theme_uses_single_hue() {
		let f = field_with(FieldConfig::global(), vec![dot(10.0, 10.0, Some(280))]);
		let mut rec = Recorder::default();
		draw_global(&f, 0.0, &GlobalPalette::for_mode(ThemeMode::Light), &mut rec);
		for (_, _, _, paint) in &rec.circles {
			match paint {
				Paint::Hsla(c) => assert_eq!(c.h, 210),
				other => panic!("unexpected paint {other:?}"),
			}
		}
	}
}
