use std::sync::Arc;

use crate::V2;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug)]
pub struct Particle {
	pub pos: V2,
	pub vel: V2,
	// ms left
	pub life: f32,
	max_life: f32,
	size: f32,
	color: Arc<str>,
}

impl Particle {
	pub fn new(pos: V2, vel: V2, life: f32, size: f32, color: Arc<str>) -> Self {
		Self {
			pos,
			vel,
			life,
			max_life: life,
			size,
			color,
		}
	}

	pub fn max_life(&self) -> f32 {
		self.max_life
	}

	pub fn size(&self) -> f32 {
		self.size
	}

	pub fn color(&self) -> &str {
		&self.color
	}

	// dt in ms, gravity in px/s^2
	pub fn update(&mut self, dt: f32, gravity: V2) {
		let t = dt / 1000.;
		self.vel += gravity * t;
		self.pos += self.vel * t;
		self.life -= dt;
	}

	pub fn is_dead(&self) -> bool {
		self.life <= 0.
	}

	pub fn alpha(&self) -> f32 {
		(self.life / self.max_life).max(0.)
	}

	// shrinks together with the fade
	pub fn radius(&self) -> f32 {
		self.size * self.alpha()
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			radius: self.radius(),
			alpha: self.alpha(),
			color: self.color.to_string(),
		}
	}
}
