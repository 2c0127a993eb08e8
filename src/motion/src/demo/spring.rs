use log::{debug, warn};

use super::{unsupported, Demo};
use crate::controller_message::ControllerMessage;
use crate::error::Result;
use crate::preset::SpringPreset;
use crate::spring::SpringSolver;
use crate::trail::Trail;
use crate::V2;
use protocol::pr_model::{PrScene, PrSpring};

pub const START_POSITION: f32 = 50.;
const START_TARGET: f32 = 200.;
// keeps the target away from the canvas edges
const TARGET_MARGIN: f32 = 20.;
const VELOCITY_INDICATOR_MIN: f32 = 1.;

pub struct SpringDemo {
	spring: SpringSolver,
	trail: Trail,
	show_trail: bool,
	size: [f32; 2],
}

impl Default for SpringDemo {
	fn default() -> Self {
		Self::new(SpringPreset::default(), [600., 200.])
	}
}

impl SpringDemo {
	pub fn new(preset: SpringPreset, size: [f32; 2]) -> Self {
		Self {
			spring: SpringSolver::new(preset)
				.with_position(START_POSITION)
				.with_target(START_TARGET),
			trail: Trail::default(),
			show_trail: true,
			size,
		}
	}

	pub fn spring(&self) -> &SpringSolver {
		&self.spring
	}

	pub fn trail(&self) -> &Trail {
		&self.trail
	}

	fn baseline(&self) -> f32 {
		self.size[1] / 2.
	}

	fn check_spring(&self) {
		if let Err(e) = self.spring.preset().validate() {
			warn!("spring will not behave: {}", e);
		}
	}
}

impl Demo for SpringDemo {
	fn name(&self) -> &'static str {
		"spring"
	}

	fn update(&mut self, dt: f32) {
		if self.spring.is_at_rest() {
			return;
		}
		self.spring.update(dt);
		if self.show_trail {
			self.trail.push(V2::new(self.spring.position, self.baseline()));
		}
	}

	fn handle(&mut self, msg: &ControllerMessage) -> Result<()> {
		use ControllerMessage::*;
		match msg {
			Click([x, _]) => {
				let target = x.min(self.size[0] - TARGET_MARGIN).max(TARGET_MARGIN);
				debug!("spring target {}", target);
				self.spring.set_target(target);
				self.trail.clear();
			}
			SelectPreset(name) => {
				self.spring.apply_preset(SpringPreset::named(name)?);
				self.trail.clear();
			}
			SetProperties(props) => {
				self.spring.set_properties(*props);
				self.check_spring();
			}
			Reset => {
				self.spring.reset(START_POSITION);
				self.trail.clear();
			}
			ToggleTrail => self.show_trail = !self.show_trail,
			_ => return Err(unsupported(self.name(), msg)),
		}
		Ok(())
	}

	fn render(&self) -> PrScene {
		let s = &self.spring;
		PrScene::Spring(PrSpring {
			position: s.position,
			velocity: s.velocity,
			target: s.target,
			baseline: self.baseline(),
			at_rest: s.is_at_rest(),
			velocity_tip: (s.velocity.abs() > VELOCITY_INDICATOR_MIN)
				.then(|| s.position + s.velocity * 0.5),
			trail: if self.show_trail {
				self.trail.render()
			} else {
				Vec::new()
			},
		})
	}

	fn population(&self) -> usize {
		1
	}
}
