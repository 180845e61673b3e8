//! Particle population and motion.

use std::f64::consts::TAU;
use std::ops::Range;

use fastrand::Rng;

use super::palette::GLOBAL_HUES;

/// What happens when a particle leaves the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
	/// Mirror back inside and invert the velocity component.
	Reflect,
	/// Reappear past the opposite edge. Particles may drift up to `margin`
	/// units outside the surface before being moved.
	Wrap { margin: f64 },
}

/// Population and motion parameters of one field variant.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Surface area (px²) per particle.
	pub density_divisor: u32,
	/// Upper bound on the particle count.
	pub cap: usize,
	/// Each velocity component is drawn from `-max_speed..max_speed`.
	pub max_speed: f64,
	pub radius: Range<f64>,
	pub opacity: Range<f64>,
	pub boundary: Boundary,
	/// Hue categories; empty means particles carry no shimmer.
	pub hues: &'static [u16],
}

impl FieldConfig {
	/// Connected network behind the hero section.
	pub fn hero() -> Self {
		Self {
			density_divisor: 18_000,
			cap: 80,
			max_speed: 0.2,
			radius: 0.5..2.5,
			opacity: 0.1..0.5,
			boundary: Boundary::Reflect,
			hues: &[],
		}
	}

	/// Glowing, hue-tinted dots floating behind the whole page.
	pub fn global() -> Self {
		Self {
			density_divisor: 12_000,
			cap: 90,
			max_speed: 0.175,
			radius: 0.8..3.3,
			opacity: 0.15..0.65,
			boundary: Boundary::Wrap { margin: 10.0 },
			hues: &GLOBAL_HUES,
		}
	}

	/// `min(floor(area / divisor), cap)`.
	pub fn particle_count(&self, width: u32, height: u32) -> usize {
		let area = u64::from(width) * u64::from(height);
		let count = area / u64::from(self.density_divisor.max(1));
		count.min(self.cap as u64) as usize
	}
}

/// Pulsing and tint state carried by background particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shimmer {
	/// Offset into the pulse cycle, in radians.
	pub phase: f64,
	pub hue: u16,
}

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
	pub shimmer: Option<Shimmer>,
}

fn uniform(rng: &mut Rng, range: &Range<f64>) -> f64 {
	range.start + rng.f64() * (range.end - range.start)
}

/// Reflects one coordinate into `0..=extent`, returning the new position
/// and velocity. The velocity takes the inward sign, so it can only flip
/// once per crossing.
fn reflect(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
	if pos < 0.0 {
		((-pos).min(extent), vel.abs())
	} else if pos > extent {
		((2.0 * extent - pos).max(0.0), -vel.abs())
	} else {
		(pos, vel)
	}
}

fn wrap(pos: f64, extent: f64, margin: f64) -> f64 {
	if pos < -margin {
		extent + margin
	} else if pos > extent + margin {
		-margin
	} else {
		pos
	}
}

/// A surface-sized collection of particles.
///
/// The whole collection is discarded and regenerated by [`populate`]; no
/// particle survives a resize.
///
/// [`populate`]: ParticleField::populate
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub config: FieldConfig,
	pub particles: Vec<Particle>,
	width: u32,
	height: u32,
}

impl ParticleField {
	pub fn new(config: FieldConfig) -> Self {
		Self {
			config,
			particles: Vec::new(),
			width: 0,
			height: 0,
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	/// Adopt new surface dimensions. Existing particles are left untouched
	/// until the next [`populate`](Self::populate).
	pub fn resize(&mut self, width: u32, height: u32) {
		self.width = width;
		self.height = height;
	}

	/// Replace every particle with a fresh batch sized to the current area.
	pub fn populate(&mut self, rng: &mut Rng) {
		let count = self.config.particle_count(self.width, self.height);
		let (w, h) = (f64::from(self.width), f64::from(self.height));
		let speed = -self.config.max_speed..self.config.max_speed;

		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let shimmer = (!self.config.hues.is_empty()).then(|| Shimmer {
				phase: rng.f64() * TAU,
				hue: self.config.hues[rng.usize(..self.config.hues.len())],
			});
			self.particles.push(Particle {
				x: rng.f64() * w,
				y: rng.f64() * h,
				vx: uniform(rng, &speed),
				vy: uniform(rng, &speed),
				radius: uniform(rng, &self.config.radius),
				alpha: uniform(rng, &self.config.opacity),
				shimmer,
			});
		}
	}

	/// Advance every particle by one frame of velocity, then apply the
	/// boundary rule.
	pub fn step(&mut self) {
		let (w, h) = (f64::from(self.width), f64::from(self.height));
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			match self.config.boundary {
				Boundary::Reflect => {
					(p.x, p.vx) = reflect(p.x, p.vx, w);
					(p.y, p.vy) = reflect(p.y, p.vy, h);
				}
				Boundary::Wrap { margin } => {
					p.x = wrap(p.x, w, margin);
					p.y = wrap(p.y, h, margin);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(config: FieldConfig, w: u32, h: u32) -> ParticleField {
		let mut f = ParticleField::new(config);
		f.resize(w, h);
		f.populate(&mut Rng::with_seed(7));
		f
	}

	#[test]
	fn hero_count_for_small_surface() {
		let f = field(FieldConfig::hero(), 400, 300);
		assert_eq!(f.particles.len(), 6);
	}

	#[test]
	fn global_count_is_capped() {
		let f = field(FieldConfig::global(), 2000, 1500);
		assert_eq!(f.particles.len(), 90);
	}

	#[test]
	fn degenerate_surface_has_no_particles() {
		assert_eq!(FieldConfig::hero().particle_count(0, 1080), 0);
		assert_eq!(FieldConfig::global().particle_count(100, 100), 0);
	}

	#[test]
	fn spawned_attributes_respect_ranges() {
		let f = field(FieldConfig::hero(), 1920, 1080);
		assert_eq!(f.particles.len(), 80);
		for p in &f.particles {
			assert!((0.0..=1920.0).contains(&p.x));
			assert!((0.0..=1080.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
			assert!((0.5..=2.5).contains(&p.radius));
			assert!((0.1..=0.5).contains(&p.alpha));
			assert!(p.shimmer.is_none());
		}

		let g = field(FieldConfig::global(), 1920, 1080);
		for p in &g.particles {
			let shimmer = p.shimmer.expect("background particles shimmer");
			assert!(GLOBAL_HUES.contains(&shimmer.hue));
			assert!((0.0..TAU).contains(&shimmer.phase));
			assert!((0.8..=3.3).contains(&p.radius));
			assert!((0.15..=0.65).contains(&p.alpha));
		}
	}

	#[test]
	fn populate_discards_previous_particles() {
		let mut f = field(FieldConfig::hero(), 1920, 1080);
		let before = f.particles.clone();
		f.resize(400, 300);
		assert_eq!(f.particles.len(), 80, "resize alone keeps particles");
		f.populate(&mut Rng::with_seed(8));
		assert_eq!(f.particles.len(), 6);
		assert!(f.particles.iter().all(|p| !before.contains(p)));
	}

	#[test]
	fn reflection_flips_velocity_once_and_keeps_speed() {
		let mut f = ParticleField::new(FieldConfig::hero());
		f.resize(100, 100);
		f.particles.push(Particle {
			x: 99.9,
			y: 50.0,
			vx: 0.2,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.3,
			shimmer: None,
		});

		f.step();
		let p = &f.particles[0];
		assert!(p.x <= 100.0);
		assert!((p.vx + 0.2).abs() < 1e-12);

		// Moving back inward must not flip again.
		f.step();
		let p = &f.particles[0];
		assert!((p.vx + 0.2).abs() < 1e-12);
		assert!(p.x < 100.0);
	}

	#[test]
	fn reflection_at_origin() {
		let (x, vx) = reflect(-0.15, -0.2, 50.0);
		assert!((x - 0.15).abs() < 1e-12);
		assert!((vx - 0.2).abs() < 1e-12);
	}

	#[test]
	fn wrap_reappears_on_opposite_edge() {
		let mut f = ParticleField::new(FieldConfig::global());
		f.resize(200, 100);
		f.particles.push(Particle {
			x: -9.95,
			y: 40.0,
			vx: -0.1,
			vy: 0.05,
			radius: 1.0,
			alpha: 0.3,
			shimmer: None,
		});

		f.step();
		let p = &f.particles[0];
		assert_eq!(p.x, 210.0);
		assert!((p.y - 40.05).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (-0.1, 0.05));

		assert_eq!(wrap(110.5, 100.0, 10.0), -10.0);
		assert_eq!(wrap(110.0, 100.0, 10.0), 110.0);
	}
}
