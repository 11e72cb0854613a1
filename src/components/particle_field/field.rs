//! Interactive particle simulation.
//!
//! A fixed set of particles drifts through a `[0, 100] x [0, 100]` space,
//! bouncing off the edges and accelerating toward the pointer when it comes
//! within `max_distance`. Positions are percentages of the container so the
//! field is independent of its pixel size.

use rand::Rng;

use super::palette::{Color, default_palette};
use super::pointer::PointerState;

/// Lower edge of both axes.
pub const MIN_COORD: f64 = 0.0;
/// Upper edge of both axes.
pub const MAX_COORD: f64 = 100.0;

const SIZE_RANGE: (f64, f64) = (2.0, 6.0);
const OPACITY_RANGE: (f64, f64) = (0.2, 0.7);
const INITIAL_SPEED: f64 = 0.05;

/// Simulator parameters, fixed for the lifetime of a field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of particles.
	pub count: usize,
	/// Radius of pointer influence in normalized units.
	pub max_distance: f64,
	/// Colors drawn from uniformly.
	pub colors: Vec<Color>,
	/// Attraction strength.
	pub speed_factor: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 25,
			max_distance: 150.0,
			colors: default_palette(),
			speed_factor: 0.03,
		}
	}
}

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Stable index, used as the render key.
	pub id: u32,
	/// Horizontal position in percent.
	pub x: f64,
	/// Vertical position in percent.
	pub y: f64,
	/// Horizontal velocity per tick.
	pub vx: f64,
	/// Vertical velocity per tick.
	pub vy: f64,
	/// Diameter in pixels.
	pub size: f64,
	/// Fill color.
	pub color: Color,
	/// Opacity in `[0.2, 0.7]`.
	pub opacity: f64,
}

impl Particle {
	fn random(id: u32, colors: &[Color], rng: &mut impl Rng) -> Self {
		let color = if colors.is_empty() {
			default_palette()[0]
		} else {
			colors[rng.gen_range(0..colors.len())]
		};

		Self {
			id,
			x: rng.gen_range(MIN_COORD..=MAX_COORD),
			y: rng.gen_range(MIN_COORD..=MAX_COORD),
			size: rng.gen_range(SIZE_RANGE.0..=SIZE_RANGE.1),
			color,
			opacity: rng.gen_range(OPACITY_RANGE.0..=OPACITY_RANGE.1),
			vx: rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
			vy: rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
		}
	}

	/// Render-only copy.
	pub fn snapshot(&self) -> ParticleSnapshot {
		ParticleSnapshot {
			id: self.id,
			x: self.x,
			y: self.y,
			size: self.size,
			color: self.color,
			opacity: self.opacity,
		}
	}
}

/// Read-only view of a particle handed to the renderer each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSnapshot {
	/// Id of the source particle.
	pub id: u32,
	/// Horizontal position in percent.
	pub x: f64,
	/// Vertical position in percent.
	pub y: f64,
	/// Diameter in pixels.
	pub size: f64,
	/// Fill color.
	pub color: Color,
	/// Opacity in `[0.2, 0.7]`.
	pub opacity: f64,
}

impl ParticleSnapshot {
	/// Inline style positioning one absolutely-placed element.
	pub fn css(&self) -> String {
		format!(
			"left: {:.3}%; top: {:.3}%; width: {}px; height: {}px; background-color: {}; opacity: {:.3};",
			self.x,
			self.y,
			self.size,
			self.size,
			self.color.to_css(),
			self.opacity
		)
	}
}

/// Owns the particles and the pointer they react to.
#[derive(Clone, Debug)]
pub struct ParticleField {
	config: FieldConfig,
	particles: Vec<Particle>,
	pointer: PointerState,
}

impl ParticleField {
	/// Create `config.count` particles with attributes drawn from `rng`.
	pub fn new(config: FieldConfig, rng: &mut impl Rng) -> Self {
		let particles = (0..config.count)
			.map(|i| Particle::random(i as u32, &config.colors, rng))
			.collect();

		Self::from_particles(config, particles)
	}

	/// Build a field from pre-made particles. `config.count` is reset to match.
	pub fn from_particles(mut config: FieldConfig, particles: Vec<Particle>) -> Self {
		config.count = particles.len();
		Self {
			config,
			particles,
			pointer: PointerState::default(),
		}
	}

	/// Parameters the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Particles in id order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Pointer the particles react to.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	/// Mutable pointer, updated by input handlers.
	pub fn pointer_mut(&mut self) -> &mut PointerState {
		&mut self.pointer
	}

	/// Advance every particle by one step.
	///
	/// Each axis reflects independently at the edges, then particles within
	/// `max_distance` of the pointer gain velocity toward it with linear
	/// falloff. Distance is measured from the position held before this step.
	/// There is no damping, so a particle circling a resting pointer keeps
	/// speeding up.
	pub fn tick(&mut self) {
		let pointer = self.pointer.get();
		let FieldConfig {
			max_distance,
			speed_factor,
			..
		} = self.config;

		for p in &mut self.particles {
			let nx = bounce(p.x, &mut p.vx);
			let ny = bounce(p.y, &mut p.vy);

			if let Some((px, py)) = pointer {
				let (dx, dy) = (px - p.x, py - p.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < max_distance {
					let factor = attraction_factor(distance, max_distance);
					p.vx += dx * factor * speed_factor;
					p.vy += dy * factor * speed_factor;
				}
			}

			p.x = nx;
			p.y = ny;
		}
	}

	/// Current frame in id order.
	pub fn frame(&self) -> Vec<ParticleSnapshot> {
		self.particles.iter().map(Particle::snapshot).collect()
	}
}

/// Move one axis by `velocity`, reflecting it on an edge hit.
///
/// A non-finite step counts as a hit and lands on the edge nearest the old
/// position; a NaN velocity is reset to rest.
fn bounce(pos: f64, velocity: &mut f64) -> f64 {
	let next = pos + *velocity;
	if next > MIN_COORD && next < MAX_COORD {
		return next;
	}

	*velocity = if velocity.is_nan() { 0.0 } else { -*velocity };
	if next.is_nan() {
		if pos < (MIN_COORD + MAX_COORD) / 2.0 { MIN_COORD } else { MAX_COORD }
	} else {
		next.clamp(MIN_COORD, MAX_COORD)
	}
}

/// Linear falloff: 1 at the pointer, 0 at `max_distance` and beyond.
pub fn attraction_factor(distance: f64, max_distance: f64) -> f64 {
	if max_distance <= 0.0 || distance >= max_distance {
		0.0
	} else {
		1.0 - distance / max_distance
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;
	use rand::rngs::mock::StepRng;

	use super::*;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			id: 0,
			x,
			y,
			vx,
			vy,
			size: 3.0,
			color: Color::rgb(0, 0, 0),
			opacity: 0.5,
		}
	}

	fn single(p: Particle) -> ParticleField {
		ParticleField::from_particles(FieldConfig::default(), vec![p])
	}

	#[test]
	fn creates_exactly_count_particles() {
		let mut rng = SmallRng::seed_from_u64(7);
		for count in [0, 1, 25, 200] {
			let mut field = ParticleField::new(
				FieldConfig {
					count,
					..FieldConfig::default()
				},
				&mut rng,
			);
			assert_eq!(field.len(), count);
			for _ in 0..50 {
				field.tick();
			}
			assert_eq!(field.len(), count);
			assert_eq!(field.frame().len(), count);
		}
	}

	#[test]
	fn empty_field_is_inert() {
		let mut field = ParticleField::new(
			FieldConfig {
				count: 0,
				..FieldConfig::default()
			},
			&mut SmallRng::seed_from_u64(1),
		);
		field.pointer_mut().set(50.0, 50.0);
		field.tick();
		assert!(field.is_empty());
	}

	#[test]
	fn ids_are_unique_and_stable() {
		let mut field = ParticleField::new(FieldConfig::default(), &mut SmallRng::seed_from_u64(3));
		let before: Vec<u32> = field.particles().iter().map(|p| p.id).collect();
		field.tick();
		let after: Vec<u32> = field.particles().iter().map(|p| p.id).collect();

		assert_eq!(before, after);
		assert_eq!(before, (0..25).collect::<Vec<_>>());
	}

	#[test]
	fn initial_attributes_within_ranges() {
		let config = FieldConfig::default();
		let field = ParticleField::new(config.clone(), &mut SmallRng::seed_from_u64(11));
		for p in field.particles() {
			assert!((0.0..=100.0).contains(&p.x));
			assert!((0.0..=100.0).contains(&p.y));
			assert!((2.0..=6.0).contains(&p.size));
			assert!((0.2..=0.7).contains(&p.opacity));
			assert!((-0.05..=0.05).contains(&p.vx));
			assert!((-0.05..=0.05).contains(&p.vy));
			assert!(config.colors.contains(&p.color));
		}
	}

	#[test]
	fn zero_source_gives_lower_bounds() {
		let field = ParticleField::new(
			FieldConfig {
				count: 2,
				..FieldConfig::default()
			},
			&mut StepRng::new(0, 0),
		);
		let p = &field.particles()[1];
		assert_eq!(p.id, 1);
		assert_eq!((p.x, p.y), (0.0, 0.0));
		assert_eq!(p.size, 2.0);
		assert_eq!(p.opacity, 0.2);
		assert_eq!((p.vx, p.vy), (-0.05, -0.05));
		assert_eq!(p.color, default_palette()[0]);
	}

	#[test]
	fn same_seed_same_field() {
		let a = ParticleField::new(FieldConfig::default(), &mut SmallRng::seed_from_u64(42));
		let b = ParticleField::new(FieldConfig::default(), &mut SmallRng::seed_from_u64(42));
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn reflects_at_lower_edge() {
		let mut field = single(particle(0.0, 50.0, -0.02, 0.0));
		field.tick();
		let p = &field.particles()[0];
		assert_eq!(p.vx, 0.02);
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 50.0);
	}

	#[test]
	fn reflects_at_upper_edge_per_axis() {
		let mut field = single(particle(50.0, 99.99, 0.01, 0.5));
		field.tick();
		let p = &field.particles()[0];
		assert_eq!(p.vx, 0.01);
		assert_eq!(p.vy, -0.5);
		assert_eq!(p.y, 100.0);
	}

	#[test]
	fn positions_stay_in_bounds_with_large_velocities() {
		let particles = vec![
			particle(1.0, 1.0, -500.0, 300.0),
			particle(99.0, 50.0, 1e6, -1e6),
			particle(50.0, 50.0, 37.3, -81.1),
		];
		let mut field = ParticleField::from_particles(FieldConfig::default(), particles);
		field.pointer_mut().set(10.0, 90.0);

		for _ in 0..500 {
			field.tick();
			for p in field.particles() {
				assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
				assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
			}
		}
	}

	#[test]
	fn overflowing_attraction_stays_in_bounds() {
		let config = FieldConfig {
			speed_factor: 1e307,
			..FieldConfig::default()
		};
		let particles = vec![
			particle(20.0, 30.0, 0.01, -0.02),
			particle(80.0, 70.0, -0.03, 0.04),
		];
		let mut field = ParticleField::from_particles(config, particles);
		field.pointer_mut().set(50.0, 50.0);

		for tick in 0..200 {
			field.tick();
			for p in field.particles() {
				assert!((0.0..=100.0).contains(&p.x), "tick {tick}: x={} vx={}", p.x, p.vx);
				assert!((0.0..=100.0).contains(&p.y), "tick {tick}: y={} vy={}", p.y, p.vy);
			}
		}
	}

	#[test]
	fn non_finite_velocity_lands_on_edge() {
		let mut field = single(particle(10.0, 90.0, f64::NAN, f64::INFINITY));
		field.tick();
		let p = &field.particles()[0];
		assert_eq!((p.x, p.y), (0.0, 100.0));
		assert_eq!(p.vx, 0.0);
		assert_eq!(p.vy, f64::NEG_INFINITY);

		field.tick();
		let p = &field.particles()[0];
		assert_eq!((p.x, p.y), (0.0, 0.0));
		assert_eq!(p.vy, f64::INFINITY);
	}

	#[test]
	fn falloff_endpoints() {
		assert_eq!(attraction_factor(0.0, 150.0), 1.0);
		assert_eq!(attraction_factor(75.0, 150.0), 0.5);
		assert_eq!(attraction_factor(150.0, 150.0), 0.0);
		assert_eq!(attraction_factor(200.0, 150.0), 0.0);
		assert_eq!(attraction_factor(0.0, 0.0), 0.0);
	}

	#[test]
	fn no_attraction_at_max_distance() {
		let config = FieldConfig {
			max_distance: 30.0,
			..FieldConfig::default()
		};
		// 3-4-5 triangle scaled to distance 30
		let mut field = ParticleField::from_particles(config, vec![particle(10.0, 10.0, 0.0, 0.0)]);
		field.pointer_mut().set(28.0, 34.0);
		field.tick();
		let p = &field.particles()[0];
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
	}

	#[test]
	fn attraction_uses_pre_move_position() {
		let config = FieldConfig {
			max_distance: 150.0,
			speed_factor: 0.03,
			..FieldConfig::default()
		};
		let mut field = ParticleField::from_particles(config, vec![particle(50.0, 50.0, 1.0, 0.0)]);
		field.pointer_mut().set(80.0, 50.0);
		field.tick();

		let p = &field.particles()[0];
		let expected = 1.0 + 30.0 * (1.0 - 30.0 / 150.0) * 0.03;
		assert_eq!(p.x, 51.0);
		assert!((p.vx - expected).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn attraction_adds_to_reflected_velocity() {
		let mut field = single(particle(0.0, 50.0, -0.02, 0.0));
		field.pointer_mut().set(10.0, 50.0);
		field.tick();

		let p = &field.particles()[0];
		let expected = 0.02 + 10.0 * (1.0 - 10.0 / 150.0) * 0.03;
		assert!((p.vx - expected).abs() < 1e-12);
	}

	#[test]
	fn pointer_on_particle_adds_nothing() {
		let mut field = single(particle(40.0, 40.0, 0.01, 0.01));
		field.pointer_mut().set(40.0, 40.0);
		field.tick();
		let p = &field.particles()[0];
		assert_eq!((p.vx, p.vy), (0.01, 0.01));
	}

	#[test]
	fn without_pointer_speed_is_constant() {
		let mut field = ParticleField::new(FieldConfig::default(), &mut SmallRng::seed_from_u64(5));
		let speeds: Vec<(f64, f64)> = field
			.particles()
			.iter()
			.map(|p| (p.vx.abs(), p.vy.abs()))
			.collect();

		for _ in 0..5_000 {
			field.tick();
		}

		for (p, (sx, sy)) in field.particles().iter().zip(speeds) {
			assert_eq!(p.vx.abs(), sx);
			assert_eq!(p.vy.abs(), sy);
		}
	}

	#[test]
	fn cleared_pointer_stops_attraction() {
		let mut field = single(particle(50.0, 50.0, 0.0, 0.0));
		field.pointer_mut().set(60.0, 60.0);
		field.tick();
		let after_first = field.particles()[0].clone();
		assert!(after_first.vx > 0.0 && after_first.vy > 0.0);

		field.pointer_mut().clear();
		field.tick();
		let p = &field.particles()[0];
		assert_eq!((p.vx, p.vy), (after_first.vx, after_first.vy));
	}

	#[test]
	fn snapshot_css_positions_by_percentage() {
		let snap = particle(12.5, 50.0, 0.0, 0.0).snapshot();
		let css = snap.css();
		assert!(css.contains("left: 12.500%"));
		assert!(css.contains("top: 50.000%"));
		assert!(css.contains("background-color: #000000"));
	}
}
