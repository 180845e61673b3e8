//! Per-instance animation state for one particle canvas.

use fastrand::Rng;

use super::palette::{GlobalPalette, HeroPalette};
use super::particles::{FieldConfig, ParticleField};
use super::render::{self, Surface};
use crate::theme::ThemeMode;

/// Time advanced per frame by the background shimmer.
const SHIMMER_TIME_STEP: f64 = 0.008;

/// Which of the two field designs to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
	/// Reflecting network sized to the hero section.
	Hero,
	/// Wrapping, glowing dots behind the whole viewport.
	Global,
}

impl Variant {
	pub fn config(self) -> FieldConfig {
		match self {
			Variant::Hero => FieldConfig::hero(),
			Variant::Global => FieldConfig::global(),
		}
	}
}

/// Owns a particle field, its random source and its shimmer clock.
///
/// Nothing here is shared between instances, so any number of animators can
/// run on the same page.
pub struct ParticleAnimator {
	variant: Variant,
	field: ParticleField,
	rng: Rng,
	time: f64,
}

impl ParticleAnimator {
	pub fn new(variant: Variant) -> Self {
		Self::with_rng(variant, Rng::new())
	}

	pub fn with_rng(variant: Variant, rng: Rng) -> Self {
		Self {
			variant,
			field: ParticleField::new(variant.config()),
			rng,
			time: 0.0,
		}
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn field_mut(&mut self) -> &mut ParticleField {
		&mut self.field
	}

	pub fn time(&self) -> f64 {
		self.time
	}

	pub fn resize(&mut self, width: u32, height: u32) {
		self.field.resize(width, height);
	}

	pub fn populate(&mut self) {
		self.field.populate(&mut self.rng);
	}

	/// Resize and regenerate in one go; returns the new particle count.
	pub fn regenerate(&mut self, width: u32, height: u32) -> usize {
		self.resize(width, height);
		self.populate();
		self.field.particles.len()
	}

	/// Advance one frame and draw it. `mode` must be read fresh by the caller
	/// each frame.
	pub fn step_and_render(&mut self, mode: ThemeMode, surface: &mut impl Surface) {
		self.field.step();
		match self.variant {
			Variant::Hero => {
				render::draw_hero(&self.field, &HeroPalette::for_mode(mode), surface);
			}
			Variant::Global => {
				self.time += SHIMMER_TIME_STEP;
				render::draw_global(
					&self.field,
					self.time,
					&GlobalPalette::for_mode(mode),
					surface,
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::palette::Paint;
	use crate::components::particle_field::render::tests::Recorder;

	#[test]
	fn regenerate_follows_area_formula() {
		let mut hero = ParticleAnimator::with_rng(Variant::Hero, Rng::with_seed(1));
		assert_eq!(hero.regenerate(400, 300), 6);
		assert_eq!(hero.regenerate(1920, 1080), 80);

		let mut global = ParticleAnimator::with_rng(Variant::Global, Rng::with_seed(2));
		assert_eq!(global.regenerate(2000, 1500), 90);
		assert_eq!(global.regenerate(600, 400), 20);
	}

	#[test]
	fn theme_is_honoured_per_frame() {
		let mut hero = ParticleAnimator::with_rng(Variant::Hero, Rng::with_seed(3));
		hero.regenerate(400, 300);

		let mut dark = Recorder::default();
		hero.step_and_render(ThemeMode::Dark, &mut dark);
		let mut light = Recorder::default();
		hero.step_and_render(ThemeMode::Light, &mut light);

		let color = |rec: &Recorder| match rec.circles[0].3 {
			Paint::Rgba(c) => (c.r, c.g, c.b),
			other => panic!("unexpected paint {other:?}"),
		};
		assert_eq!(color(&dark), (0, 212, 255));
		assert_eq!(color(&light), (0, 120, 180));
	}

	#[test]
	fn shimmer_clock_only_runs_for_background() {
		let mut hero = ParticleAnimator::with_rng(Variant::Hero, Rng::with_seed(4));
		let mut global = ParticleAnimator::with_rng(Variant::Global, Rng::with_seed(5));
		hero.regenerate(800, 600);
		global.regenerate(800, 600);

		let mut rec = Recorder::default();
		for _ in 0..10 {
			hero.step_and_render(ThemeMode::Dark, &mut rec);
			global.step_and_render(ThemeMode::Dark, &mut rec);
		}
		assert_eq!(hero.time(), 0.0);
		assert!((global.time() - 0.08).abs() < 1e-9);
		assert_eq!(rec.clears, 20);
	}

	#[test]
	fn positions_stay_in_bounds_over_many_frames() {
		let mut hero = ParticleAnimator::with_rng(Variant::Hero, Rng::with_seed(6));
		hero.regenerate(300, 200);
		let mut rec = Recorder::default();
		for _ in 0..5_000 {
			hero.step_and_render(ThemeMode::Dark, &mut rec);
			rec.circles.clear();
			rec.lines.clear();
			for p in &hero.field().particles {
				assert!((0.0..=300.0).contains(&p.x), "x escaped: {}", p.x);
				assert!((0.0..=200.0).contains(&p.y), "y escaped: {}", p.y);
			}
		}
	}
}
