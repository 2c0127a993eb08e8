use std::time::Instant;

pub const MAX_FRAME_MS: f32 = 32.;

pub enum ClockModel {
	// every frame advances by the same dt, for headless runs
	Fixed(f32),
	Wall,
}

/// Turns frame timestamps into clamped deltas in ms.
pub struct FrameClock {
	model: ClockModel,
	max_dt: f32,
	last: f64,
	start: Instant,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self {
			model: ClockModel::Wall,
			max_dt: MAX_FRAME_MS,
			last: 0.,
			start: Instant::now(),
		}
	}
}

impl FrameClock {
	pub fn fixed(dt: f32) -> Self {
		Self {
			model: ClockModel::Fixed(dt),
			..Default::default()
		}
	}

	pub fn with_max_dt(mut self, max_dt: f32) -> Self {
		self.max_dt = max_dt;
		self
	}

	pub fn max_dt(&self) -> f32 {
		self.max_dt
	}

	pub fn clamp(&self, dt: f32) -> f32 {
		dt.min(self.max_dt).max(0.)
	}

	/// `now` is a frame timestamp in ms; the first call measures from 0.
	pub fn tick(&mut self, now: f64) -> f32 {
		let dt = (now - self.last) as f32;
		self.last = now;
		self.clamp(dt)
	}

	pub fn take_time(&mut self) -> f32 {
		match self.model {
			ClockModel::Fixed(dt) => self.clamp(dt),
			ClockModel::Wall => {
				let now = self.start.elapsed().as_secs_f64() * 1e3;
				self.tick(now)
			}
		}
	}
}
