// pr_model: demo state for rendering

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrParticle {
	pub pos: [f32; 2],
	// already scaled by alpha
	pub radius: f32,
	pub alpha: f32,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrTrailPoint {
	pub pos: [f32; 2],
	pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrSpring {
	pub position: f32,
	pub velocity: f32,
	pub target: f32,
	// y coordinate the object moves along
	pub baseline: f32,
	pub at_rest: bool,
	// end of the velocity indicator, only when fast enough to show
	pub velocity_tip: Option<f32>,
	pub trail: Vec<PrTrailPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrFluid {
	pub width: usize,
	pub height: usize,
	pub cell_size: f32,
	// row major, clamped to [0, 1]
	pub alpha: Vec<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PrScene {
	Spring(PrSpring),
	Particles(Vec<PrParticle>),
	Fluid(PrFluid),
}

impl PrScene {
	pub fn len(&self) -> usize {
		match self {
			PrScene::Spring(s) => s.trail.len() + 1,
			PrScene::Particles(ps) => ps.len(),
			PrScene::Fluid(f) => f.alpha.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrFrame {
	pub index: u64,
	pub demo: String,
	pub paused: bool,
	pub scene: PrScene,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInfo {
	// simulation time spent / frame budget
	pub load: f32,
	pub particle_len: usize,
}
