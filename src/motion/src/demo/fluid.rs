use log::debug;

use super::{unsupported, Demo};
use crate::controller_message::ControllerMessage;
use crate::error::Result;
use crate::fluid::{FluidGrid, FluidProperties};
use crate::V2;
use protocol::pr_model::PrScene;

const IMPULSE_STRENGTH: f32 = 0.5;
// cells below this count as empty
const VISIBLE_DENSITY: f32 = 1e-3;

pub struct FluidDemo {
	grid: FluidGrid,
}

impl Default for FluidDemo {
	fn default() -> Self {
		Self {
			grid: FluidGrid::new(50, 50, 10.),
		}
	}
}

impl FluidDemo {
	pub fn grid(&self) -> &FluidGrid {
		&self.grid
	}

	fn rebuild(&mut self) {
		let [w, h] = self.grid.size();
		self.grid = FluidGrid::new(w, h, self.grid.cell_size())
			.with_fade(self.grid.fade)
			.with_gravity(self.grid.gravity);
	}

	// new tuning starts from an empty grid
	fn set_properties(&mut self, props: FluidProperties) {
		if let Some(fade) = props.fade {
			self.grid.fade = fade;
		}
		if let Some(g) = props.gravity {
			self.grid.gravity = V2::new(0., g);
		}
		debug!("fluid fade {} gravity {}", self.grid.fade, self.grid.gravity[1]);
		self.rebuild();
	}
}

impl Demo for FluidDemo {
	fn name(&self) -> &'static str {
		"fluid"
	}

	fn update(&mut self, dt: f32) {
		self.grid.update(dt);
	}

	fn handle(&mut self, msg: &ControllerMessage) -> Result<()> {
		use ControllerMessage::*;
		match msg {
			Pointer(p) | Click(p) => {
				self.grid.apply_impulse(V2::from(*p), IMPULSE_STRENGTH);
			}
			SetFluid(props) => self.set_properties(*props),
			Reset | Clear => self.rebuild(),
			_ => return Err(unsupported(self.name(), msg)),
		}
		Ok(())
	}

	fn render(&self) -> PrScene {
		PrScene::Fluid(self.grid.render())
	}

	fn population(&self) -> usize {
		let [w, h] = self.grid.size();
		(0..h)
			.flat_map(|y| (0..w).map(move |x| (x, y)))
			.filter(|&(x, y)| self.grid.density(x, y) > VISIBLE_DENSITY)
			.count()
	}
}
