use crate::V2;
use protocol::pr_model::PrFluid;

/// Partial update of the grid tuning, `None` keeps the old value.
/// `gravity` is the vertical component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FluidProperties {
	pub fade: Option<f32>,
	pub gravity: Option<f32>,
}

/// Density and velocity per cell, decayed and accelerated uniformly.
/// There is no advection: velocities are carried along for rendering and
/// impulses only.
pub struct FluidGrid {
	width: usize,
	height: usize,
	cell_size: f32,
	pub fade: f32,
	pub gravity: V2,
	density: Vec<f32>,
	velocity: Vec<V2>,
}

impl FluidGrid {
	pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
		Self {
			width,
			height,
			cell_size,
			fade: 0.05,
			gravity: V2::new(0., 98.),
			density: vec![0.; width * height],
			velocity: vec![V2::zeros(); width * height],
		}
	}

	pub fn with_fade(mut self, fade: f32) -> Self {
		self.fade = fade;
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn size(&self) -> [usize; 2] {
		[self.width, self.height]
	}

	pub fn cell_size(&self) -> f32 {
		self.cell_size
	}

	// None outside the grid
	fn idx(&self, x: usize, y: usize) -> Option<usize> {
		(x < self.width && y < self.height).then(|| y * self.width + x)
	}

	/// Zero outside the grid.
	pub fn density(&self, x: usize, y: usize) -> f32 {
		self.idx(x, y).map_or(0., |i| self.density[i])
	}

	/// Zero outside the grid.
	pub fn velocity(&self, x: usize, y: usize) -> V2 {
		self.idx(x, y).map_or(V2::zeros(), |i| self.velocity[i])
	}

	pub fn total_density(&self) -> f32 {
		self.density.iter().sum()
	}

	// dt in ms; fade * dt > 1 flips the sign of the density, left as is
	pub fn update(&mut self, dt: f32) {
		let dv = self.gravity * (dt / 1000.);
		let keep = 1. - self.fade * dt;
		self.apply(dv, keep);
	}

	#[cfg(not(debug_assertions))]
	fn apply(&mut self, dv: V2, keep: f32) {
		use rayon::prelude::*;
		self.velocity.par_iter_mut().for_each(|v| *v += dv);
		self.density.par_iter_mut().for_each(|d| *d *= keep);
	}

	#[cfg(debug_assertions)]
	fn apply(&mut self, dv: V2, keep: f32) {
		self.velocity.iter_mut().for_each(|v| *v += dv);
		self.density.iter_mut().for_each(|d| *d *= keep);
	}

	/// Returns false for a cell outside the grid.
	pub fn add_source_density(&mut self, x: usize, y: usize, amount: f32) -> bool {
		match self.idx(x, y) {
			Some(i) => {
				self.density[i] = (self.density[i] + amount).min(1.);
				true
			}
			None => false,
		}
	}

	/// Returns false for a cell outside the grid.
	pub fn add_velocity(&mut self, x: usize, y: usize, v: V2) -> bool {
		match self.idx(x, y) {
			Some(i) => {
				self.velocity[i] += v;
				true
			}
			None => false,
		}
	}

	/// Returns false when `source` lies outside the grid.
	pub fn apply_impulse(&mut self, source: V2, strength: f32) -> bool {
		let x = (source[0] / self.cell_size).floor();
		let y = (source[1] / self.cell_size).floor();
		let inside = x >= 0.
			&& y >= 0.
			&& x < self.width as f32
			&& y < self.height as f32;
		// NaN lands here too
		if !inside {
			return false;
		}
		let (x, y) = (x as usize, y as usize);
		self.add_source_density(x, y, strength);
		self.add_velocity(x, y, V2::new(0., strength));
		true
	}

	pub fn render(&self) -> PrFluid {
		PrFluid {
			width: self.width,
			height: self.height,
			cell_size: self.cell_size,
			alpha: self.density.iter().map(|d| d.clamp(0., 1.)).collect(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn test_impulse() {
		let mut grid = FluidGrid::new(50, 50, 10.);
		assert!(grid.apply_impulse(V2::new(125., 49.), 0.5));
		assert_eq!(grid.density(12, 4), 0.5);
		assert_eq!(grid.velocity(12, 4), V2::new(0., 0.5));
		grid.apply_impulse(V2::new(121., 41.), 0.8);
		// capped
		assert_eq!(grid.density(12, 4), 1.);
		assert_relative_eq!(grid.velocity(12, 4)[1], 1.3, epsilon = 1e-6);
	}

	#[test]
	fn test_impulse_out_of_bounds() {
		let mut grid = FluidGrid::new(5, 5, 10.);
		assert!(!grid.apply_impulse(V2::new(-1., 10.), 1.));
		assert!(!grid.apply_impulse(V2::new(10., 50.), 1.));
		assert!(!grid.apply_impulse(V2::new(f32::NAN, 10.), 1.));
		assert_eq!(grid.total_density(), 0.);
	}

	#[test]
	fn test_cells_out_of_bounds() {
		let mut grid = FluidGrid::new(4, 3, 10.);
		assert!(!grid.add_source_density(4, 0, 1.));
		assert!(!grid.add_source_density(0, 3, 1.));
		assert!(!grid.add_velocity(7, 7, V2::new(1., 1.)));
		assert_eq!(grid.density(4, 0), 0.);
		assert_eq!(grid.velocity(0, 3), V2::zeros());
		assert_eq!(grid.total_density(), 0.);
		assert!(grid.add_source_density(3, 2, 0.25));
		assert_eq!(grid.density(3, 2), 0.25);
	}

	#[test]
	fn test_update() {
		let mut grid = FluidGrid::new(4, 3, 10.).with_fade(0.01);
		grid.add_source_density(3, 2, 0.8);
		grid.update(20.);
		assert_relative_eq!(grid.density(3, 2), 0.8 * 0.8, epsilon = 1e-6);
		assert_relative_eq!(grid.velocity(0, 0)[1], 98. * 0.02, epsilon = 1e-5);
		assert_eq!(grid.velocity(0, 0), grid.velocity(3, 2));
	}

	#[test]
	fn test_render_clamps() {
		let mut grid = FluidGrid::new(2, 2, 10.).with_gravity(V2::zeros());
		grid.add_source_density(0, 0, 1.);
		grid.add_source_density(1, 1, 0.5);
		// 1 - 0.05 * 32 < 0
		grid.update(32.);
		assert!(grid.density(0, 0) < 0.);
		let pr = grid.render();
		assert_eq!(pr.alpha.len(), 4);
		assert!(pr.alpha.iter().all(|a| *a == 0.));
	}
}
