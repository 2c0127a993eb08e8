use std::sync::Arc;

use rand::rngs::StdRng;

use crate::jitter::{Jitter, RandJitter};
use crate::particle::Particle;
use crate::preset::EmitterPreset;
use crate::V2;
use protocol::pr_model::PrParticle;

pub struct ParticleEmitter<J: Jitter = RandJitter<StdRng>> {
	pos: V2,
	particles: Vec<Particle>,
	preset: EmitterPreset,
	color: Arc<str>,
	// ms since spawn; the rate schedule is recomputed from it each frame
	elapsed: f64,
	// particles emitted by the rate schedule, bursts excluded
	scheduled: u64,
	emitted: usize,
	jitter: J,
}

impl ParticleEmitter {
	pub fn new(preset: EmitterPreset, pos: V2) -> Self {
		Self::with_jitter(preset, pos, RandJitter::from_entropy())
	}
}

impl<J: Jitter> ParticleEmitter<J> {
	pub fn with_jitter(preset: EmitterPreset, pos: V2, jitter: J) -> Self {
		let color = Arc::from(preset.color.as_str());
		Self {
			pos,
			particles: Vec::new(),
			preset,
			color,
			elapsed: 0.,
			scheduled: 0,
			emitted: 0,
			jitter,
		}
	}

	/// Same as building a new emitter, only the random source survives.
	pub fn respawn(&mut self, preset: EmitterPreset, pos: V2) {
		self.color = Arc::from(preset.color.as_str());
		self.preset = preset;
		self.pos = pos;
		self.particles.clear();
		self.elapsed = 0.;
		self.scheduled = 0;
		self.emitted = 0;
	}

	pub fn preset(&self) -> &EmitterPreset {
		&self.preset
	}

	pub fn position(&self) -> V2 {
		self.pos
	}

	// existing particles stay where they are
	pub fn set_position(&mut self, pos: V2) {
		self.pos = pos;
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn emitted(&self) -> usize {
		self.emitted
	}

	/// Time in ms accumulated towards the next scheduled spawn.
	pub fn emission_timer(&self) -> f32 {
		let rate = self.preset.rate as f64;
		if rate > 0. {
			(self.elapsed - self.scheduled as f64 * 1000. / rate) as f32
		} else {
			self.elapsed as f32
		}
	}

	// floor(elapsed / interval), computed without summing rounded intervals
	fn due(&self) -> u64 {
		let rate = self.preset.rate as f64;
		// also false for NaN
		if rate > 0. {
			(self.elapsed * rate / 1000.).floor() as u64
		} else {
			0
		}
	}

	pub fn clear(&mut self) {
		self.particles.clear();
	}

	pub fn emit_particle(&mut self) {
		let var = self.preset.velocity_variation;
		let vel = self.preset.base_velocity
			+ V2::new(self.jitter.signed() * var[0], self.jitter.signed() * var[1]);
		let size = self.preset.size + self.jitter.unit() * 2.;
		self.particles.push(Particle::new(
			self.pos,
			vel,
			self.preset.particle_lifetime,
			size,
			self.color.clone(),
		));
		self.emitted += 1;
	}

	pub fn burst(&mut self, count: usize) {
		for _ in 0..count {
			self.emit_particle();
		}
	}

	// dt in ms, expected to be clamped by the caller
	pub fn update(&mut self, dt: f32) {
		self.elapsed += dt as f64;
		let due = self.due();
		while self.scheduled < due {
			self.emit_particle();
			self.scheduled += 1;
		}
		self.update_particles(dt);
		self.particles.retain(|p| !p.is_dead());
	}

	#[cfg(not(debug_assertions))]
	fn update_particles(&mut self, dt: f32) {
		use rayon::prelude::*;
		let gravity = self.preset.gravity;
		self.particles
			.par_iter_mut()
			.for_each(|p| p.update(dt, gravity));
	}

	#[cfg(debug_assertions)]
	fn update_particles(&mut self, dt: f32) {
		let gravity = self.preset.gravity;
		self.particles
			.iter_mut()
			.for_each(|p| p.update(dt, gravity));
	}

	pub fn render(&self) -> Vec<PrParticle> {
		self.particles.iter().map(|p| p.render()).collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::jitter::ConstJitter;
	use crate::preset::EMITTER_PRESET_NAMES;
	use approx::assert_relative_eq;

	fn still(preset: EmitterPreset) -> ParticleEmitter<ConstJitter> {
		ParticleEmitter::with_jitter(preset, V2::new(400., 200.), ConstJitter(0.5))
	}

	#[test]
	fn test_rate_one_second() {
		for name in EMITTER_PRESET_NAMES {
			let preset = EmitterPreset::named(name).unwrap();
			let rate = preset.rate as usize;
			let mut e = still(preset);
			e.update(1000.);
			assert_eq!(e.emitted(), rate, "{}", name);
			if rate > 0 {
				assert_eq!(e.emission_timer(), 0.);
			}
		}
	}

	#[test]
	fn test_integer_rates() {
		for rate in 1..=300 {
			let mut preset = EmitterPreset::fireworks();
			preset.rate = rate as f32;
			let mut e = still(preset);
			e.update(1000.);
			assert_eq!(e.emitted(), rate, "rate {}", rate);

			// same second in frames
			let mut e = still(e.preset().clone());
			for _ in 0..125 {
				e.update(8.);
			}
			assert_eq!(e.emitted(), rate, "rate {} in frames", rate);
		}
	}

	#[test]
	fn test_magic_at_frame_rate() {
		let mut e = still(EmitterPreset::magic());
		// 60 per second, one every 16.67ms
		for _ in 0..3 {
			e.update(16.);
		}
		assert_eq!(e.emitted(), 2);
		for _ in 0..122 {
			e.update(16.);
		}
		// 2000ms
		assert_eq!(e.emitted(), 120);
	}

	#[test]
	fn test_rate_frame_split() {
		let mut e = still(EmitterPreset::smoke());
		// 25ms interval
		for _ in 0..62 {
			e.update(16.);
		}
		// 992ms
		assert_eq!(e.emitted(), 39);
		assert_relative_eq!(e.emission_timer(), 17.0, epsilon = 1e-3);
		e.update(8.);
		assert_eq!(e.emitted(), 40);
	}

	#[test]
	fn test_zero_rate() {
		let mut e = still(EmitterPreset::fireworks());
		for _ in 0..100 {
			e.update(32.);
		}
		assert_eq!(e.emitted(), 0);
		let mut p = EmitterPreset::smoke();
		p.rate = -5.;
		let mut e = still(p);
		e.update(32.);
		assert_eq!(e.emitted(), 0);
	}

	#[test]
	fn test_burst() {
		let mut e = still(EmitterPreset::fireworks());
		e.burst(50);
		assert_eq!(e.len(), 50);
		let mut e = still(EmitterPreset::rain());
		e.burst(10);
		assert_eq!(e.len(), 10);
		assert_eq!(e.emission_timer(), 0.);
	}

	#[test]
	fn test_spawn_copies_position() {
		let mut e = still(EmitterPreset::magic());
		e.emit_particle();
		e.set_position(V2::new(10., 10.));
		assert_eq!(e.particles()[0].pos, V2::new(400., 200.));
		e.emit_particle();
		assert_eq!(e.particles()[1].pos, V2::new(10., 10.));
	}

	#[test]
	fn test_spawn_values() {
		let mut e = still(EmitterPreset::snow());
		e.emit_particle();
		let p = &e.particles()[0];
		assert_eq!(p.vel, V2::new(10., 20.));
		assert_eq!(p.size(), 4.);
		assert_eq!(p.life, 4000.);
		assert_eq!(p.max_life(), 4000.);
		assert_eq!(p.color(), "#ffffff");

		let mut e = ParticleEmitter::with_jitter(
			EmitterPreset::sparks(),
			V2::zeros(),
			ConstJitter(0.),
		);
		e.emit_particle();
		assert_eq!(e.particles()[0].vel, V2::new(-100., -100.));
		assert_eq!(e.particles()[0].size(), 2.);
	}

	#[test]
	fn test_random_spread() {
		let preset = EmitterPreset::sparks();
		let mut e = ParticleEmitter::with_jitter(
			preset.clone(),
			V2::zeros(),
			RandJitter::seeded(3),
		);
		e.burst(500);
		for p in e.particles() {
			let dv = p.vel - preset.base_velocity;
			assert!(dv[0].abs() <= 100. && dv[1].abs() <= 50.);
			assert!(p.size() >= 2. && p.size() < 4.);
		}
	}

	#[test]
	fn test_expired_removed_in_order() {
		let mut e = still(EmitterPreset::fireworks());
		e.burst(3);
		e.update(1000.);
		e.set_position(V2::zeros());
		e.burst(2);
		assert_eq!(e.len(), 5);
		e.update(500.);
		// the first three reach 1500ms
		assert_eq!(e.len(), 2);
		assert!(e.particles().iter().all(|p| p.life == 1000.));
	}

	#[test]
	fn test_gravity_applied() {
		let mut e = ParticleEmitter::with_jitter(
			EmitterPreset::sparks(),
			V2::zeros(),
			ConstJitter(0.5),
		);
		e.emit_particle();
		e.update(100.);
		// ten more were emitted, all of them got one 100ms step
		let p = &e.particles()[0];
		assert_relative_eq!(p.vel[1], -50. + 9.8, epsilon = 1e-4);
	}

	#[test]
	fn test_respawn() {
		let mut e = still(EmitterPreset::sparks());
		e.update(30.);
		e.update(5.);
		assert!(!e.is_empty());
		e.respawn(EmitterPreset::smoke(), V2::new(1., 2.));
		assert!(e.is_empty());
		assert_eq!(e.emitted(), 0);
		assert_eq!(e.emission_timer(), 0.);
		assert_eq!(e.position(), V2::new(1., 2.));
		assert_eq!(e.preset().color, "#666666");
		e.emit_particle();
		assert_eq!(e.particles()[0].color(), "#666666");
	}

	#[test]
	fn test_random_source() {
		let mut e = ParticleEmitter::new(EmitterPreset::rain(), V2::new(5., 5.));
		e.update(20.);
		assert_eq!(e.len(), 4);
		assert!(e.particles().iter().all(|p| p.life == 1480.));
	}

	#[test]
	fn test_clear() {
		let mut e = still(EmitterPreset::rain());
		e.update(32.);
		e.clear();
		assert!(e.is_empty());
		assert!(e.render().is_empty());
	}
}
