use crate::error::{MotionError, Result};
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringPreset {
	pub stiffness: f32,
	pub damping: f32,
	pub mass: f32,
}

const fn spring(stiffness: f32, damping: f32, mass: f32) -> SpringPreset {
	SpringPreset {
		stiffness,
		damping,
		mass,
	}
}

pub const SPRING_PRESETS: [(&str, SpringPreset); 10] = [
	("gentle", spring(100.0, 10.0, 1.0)),
	("snappy", spring(200.0, 15.0, 1.0)),
	("bouncy", spring(300.0, 8.0, 1.0)),
	("stiff", spring(400.0, 25.0, 1.0)),
	("wobbly", spring(80.0, 5.0, 1.0)),
	("elastic", spring(250.0, 12.0, 2.0)),
	("smooth", spring(120.0, 20.0, 1.0)),
	("quick", spring(350.0, 20.0, 0.8)),
	("heavy", spring(100.0, 15.0, 3.0)),
	("delicate", spring(60.0, 12.0, 0.5)),
];

impl Default for SpringPreset {
	fn default() -> Self {
		SPRING_PRESETS[0].1
	}
}

impl SpringPreset {
	pub fn named(name: &str) -> Result<Self> {
		SPRING_PRESETS
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, p)| *p)
			.ok_or_else(|| MotionError::UnknownPreset {
				kind: "spring",
				name: name.to_string(),
			})
	}

	pub fn names() -> impl Iterator<Item = &'static str> {
		SPRING_PRESETS.iter().map(|(n, _)| *n)
	}

	/// Checks the values the solver silently assumes: finite numbers,
	/// positive mass, non-negative stiffness and damping.
	pub fn validate(&self) -> Result<()> {
		check("stiffness", self.stiffness, |v| v >= 0.0)?;
		check("damping", self.damping, |v| v >= 0.0)?;
		check("mass", self.mass, |v| v > 0.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmitterPreset {
	// particles per second
	pub rate: f32,
	pub gravity: V2,
	// ms
	pub particle_lifetime: f32,
	pub size: f32,
	pub color: String,
	pub velocity_variation: V2,
	pub base_velocity: V2,
}

pub const EMITTER_PRESET_NAMES: [&str; 6] =
	["sparks", "fireworks", "smoke", "magic", "rain", "snow"];

impl Default for EmitterPreset {
	fn default() -> Self {
		Self::sparks()
	}
}

impl EmitterPreset {
	fn new(
		rate: f32,
		gravity: [f32; 2],
		particle_lifetime: f32,
		size: f32,
		color: &str,
		velocity_variation: [f32; 2],
		base_velocity: [f32; 2],
	) -> Self {
		Self {
			rate,
			gravity: gravity.into(),
			particle_lifetime,
			size,
			color: color.to_string(),
			velocity_variation: velocity_variation.into(),
			base_velocity: base_velocity.into(),
		}
	}

	pub fn sparks() -> Self {
		Self::new(100., [0., 98.], 800., 2., "#ffaa00", [100., 50.], [0., -50.])
	}

	// burst only
	pub fn fireworks() -> Self {
		Self::new(0., [0., 20.], 1500., 3., "#ff6b6b", [200., 200.], [0., 0.])
	}

	pub fn smoke() -> Self {
		Self::new(40., [0., -10.], 3000., 8., "#666666", [20., 10.], [0., -30.])
	}

	pub fn magic() -> Self {
		Self::new(60., [0., -20.], 2000., 3., "#aa00ff", [80., 40.], [0., -40.])
	}

	pub fn rain() -> Self {
		Self::new(200., [0., 0.], 1500., 1., "#4499ff", [20., 50.], [0., 300.])
	}

	pub fn snow() -> Self {
		Self::new(80., [0., 10.], 4000., 3., "#ffffff", [30., 10.], [10., 20.])
	}

	pub fn named(name: &str) -> Result<Self> {
		Ok(match name {
			"sparks" => Self::sparks(),
			"fireworks" => Self::fireworks(),
			"smoke" => Self::smoke(),
			"magic" => Self::magic(),
			"rain" => Self::rain(),
			"snow" => Self::snow(),
			_ => {
				return Err(MotionError::UnknownPreset {
					kind: "emitter",
					name: name.to_string(),
				})
			}
		})
	}

	pub fn validate(&self) -> Result<()> {
		check("rate", self.rate, |v| v >= 0.0)?;
		check("particle_lifetime", self.particle_lifetime, |v| v >= 0.0)?;
		check("size", self.size, |v| v >= 0.0)?;
		for (name, v) in [
			("gravity", self.gravity),
			("velocity_variation", self.velocity_variation),
			("base_velocity", self.base_velocity),
		] {
			check(name, v[0], |_| true)?;
			check(name, v[1], |_| true)?;
		}
		Ok(())
	}
}

fn check(name: &'static str, value: f32, ok: impl Fn(f32) -> bool) -> Result<()> {
	if value.is_finite() && ok(value) {
		Ok(())
	} else {
		Err(MotionError::InvalidParameter { name, value })
	}
}
