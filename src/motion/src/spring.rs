use crate::preset::SpringPreset;

pub const DEFAULT_PRECISION: f32 = 0.001;

/// Partial update of the physical parameters, `None` keeps the old value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringProperties {
	pub stiffness: Option<f32>,
	pub damping: Option<f32>,
	pub mass: Option<f32>,
}

impl From<SpringPreset> for SpringProperties {
	fn from(p: SpringPreset) -> Self {
		Self {
			stiffness: Some(p.stiffness),
			damping: Some(p.damping),
			mass: Some(p.mass),
		}
	}
}

/// One dimensional damped spring pulling `position` toward `target`.
///
/// Nothing is validated: a zero mass turns the state into NaN on the next
/// `update` and it stays that way.
#[derive(Clone, Debug)]
pub struct SpringSolver {
	pub position: f32,
	pub velocity: f32,
	pub target: f32,
	pub stiffness: f32,
	pub damping: f32,
	pub mass: f32,
	pub precision: f32,
}

impl Default for SpringSolver {
	fn default() -> Self {
		Self::new(SpringPreset::default())
	}
}

impl SpringSolver {
	pub fn new(preset: SpringPreset) -> Self {
		Self {
			position: 0.,
			velocity: 0.,
			target: 0.,
			stiffness: preset.stiffness,
			damping: preset.damping,
			mass: preset.mass,
			precision: DEFAULT_PRECISION,
		}
	}

	pub fn with_position(mut self, position: f32) -> Self {
		self.position = position;
		self
	}

	pub fn with_target(mut self, target: f32) -> Self {
		self.target = target;
		self
	}

	pub fn with_precision(mut self, precision: f32) -> Self {
		self.precision = precision;
		self
	}

	pub fn set_target(&mut self, target: f32) {
		self.target = target;
	}

	// dt in ms
	pub fn update(&mut self, dt: f32) {
		let dt = dt / 1000.;
		let spring_force = (self.target - self.position) * self.stiffness;
		let damping_force = -self.velocity * self.damping;
		let accel = (spring_force + damping_force) / self.mass;
		// semi-implicit: new velocity moves the position
		self.velocity += accel * dt;
		self.position += self.velocity * dt;
	}

	pub fn is_at_rest(&self) -> bool {
		(self.target - self.position).abs() < self.precision
			&& self.velocity.abs() < self.precision
	}

	pub fn set_properties(&mut self, props: SpringProperties) {
		if let Some(k) = props.stiffness {
			self.stiffness = k;
		}
		if let Some(c) = props.damping {
			self.damping = c;
		}
		if let Some(m) = props.mass {
			self.mass = m;
		}
	}

	/// Swaps the spring character, the object keeps moving from where it is.
	pub fn apply_preset(&mut self, preset: SpringPreset) {
		self.set_properties(preset.into());
	}

	pub fn reset(&mut self, position: f32) {
		self.position = position;
		self.velocity = 0.;
	}

	pub fn preset(&self) -> SpringPreset {
		SpringPreset {
			stiffness: self.stiffness,
			damping: self.damping,
			mass: self.mass,
		}
	}
}
