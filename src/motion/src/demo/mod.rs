pub mod fluid;
pub mod particles;
pub mod spring;

use crate::controller_message::ControllerMessage;
use crate::error::{MotionError, Result};
use protocol::pr_model::PrScene;

pub use fluid::FluidDemo;
pub use particles::ParticleDemo;
pub use spring::SpringDemo;

pub const DEMO_NAMES: [&str; 3] = ["spring", "particles", "fluid"];

/// Headless controller of one canvas demo: input in, render snapshot out.
pub trait Demo: Send {
	fn name(&self) -> &'static str;

	// dt in ms, already clamped by the stage
	fn update(&mut self, dt: f32);

	fn handle(&mut self, msg: &ControllerMessage) -> Result<()>;

	fn render(&self) -> PrScene;

	// number of live simulated elements
	fn population(&self) -> usize;
}

pub fn by_name(name: &str) -> Result<Box<dyn Demo>> {
	Ok(match name {
		"spring" => Box::new(SpringDemo::default()),
		"particles" => Box::new(<ParticleDemo>::default()),
		"fluid" => Box::new(FluidDemo::default()),
		_ => return Err(MotionError::UnknownDemo(name.to_string())),
	})
}

fn unsupported(demo: &'static str, msg: &ControllerMessage) -> MotionError {
	MotionError::Unsupported {
		demo,
		message: msg.kind(),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_by_name() {
		for name in DEMO_NAMES {
			assert_eq!(by_name(name).unwrap().name(), name);
		}
		assert!(matches!(
			by_name("cloth"),
			Err(MotionError::UnknownDemo(_))
		));
	}
}
