use log::debug;
use rand::rngs::StdRng;

use super::{unsupported, Demo};
use crate::controller_message::ControllerMessage;
use crate::emitter::ParticleEmitter;
use crate::error::Result;
use crate::jitter::{Jitter, RandJitter};
use crate::preset::EmitterPreset;
use crate::V2;
use protocol::pr_model::PrScene;

const FIREWORKS_BURST: usize = 50;
const CLICK_BURST: usize = 10;

pub struct ParticleDemo<J: Jitter = RandJitter<StdRng>> {
	emitter: ParticleEmitter<J>,
	preset_name: String,
	size: [f32; 2],
}

impl Default for ParticleDemo {
	fn default() -> Self {
		Self::new(RandJitter::from_entropy())
	}
}

impl<J: Jitter> ParticleDemo<J> {
	pub fn new(jitter: J) -> Self {
		let size = [800., 400.];
		let emitter = ParticleEmitter::with_jitter(
			EmitterPreset::sparks(),
			center(size),
			jitter,
		);
		Self {
			emitter,
			preset_name: "sparks".to_string(),
			size,
		}
	}

	pub fn emitter(&self) -> &ParticleEmitter<J> {
		&self.emitter
	}

	pub fn preset_name(&self) -> &str {
		&self.preset_name
	}

	fn burst_size(&self) -> usize {
		if self.preset_name == "fireworks" {
			FIREWORKS_BURST
		} else {
			CLICK_BURST
		}
	}
}

fn center(size: [f32; 2]) -> V2 {
	V2::new(size[0] / 2., size[1] / 2.)
}

impl<J: Jitter + Send> Demo for ParticleDemo<J> {
	fn name(&self) -> &'static str {
		"particles"
	}

	fn update(&mut self, dt: f32) {
		self.emitter.update(dt);
	}

	fn handle(&mut self, msg: &ControllerMessage) -> Result<()> {
		use ControllerMessage::*;
		match msg {
			Pointer(p) => self.emitter.set_position(V2::from(*p)),
			Click(p) => {
				self.emitter.set_position(V2::from(*p));
				self.emitter.burst(self.burst_size());
			}
			SelectPreset(name) => {
				let preset = EmitterPreset::named(name)?;
				// old particles go away with the old emitter
				self.emitter.respawn(preset, center(self.size));
				self.preset_name = name.clone();
				debug!("emitter preset {}", name);
			}
			Clear => self.emitter.clear(),
			_ => return Err(unsupported(self.name(), msg)),
		}
		Ok(())
	}

	fn render(&self) -> PrScene {
		PrScene::Particles(self.emitter.render())
	}

	fn population(&self) -> usize {
		self.emitter.len()
	}
}
