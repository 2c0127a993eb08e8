use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source used for spawn variation.
pub trait Jitter {
	/// Uniform in [0, 1).
	fn unit(&mut self) -> f32;

	/// Uniform in [-1, 1).
	fn signed(&mut self) -> f32 {
		self.unit() * 2. - 1.
	}
}

pub struct RandJitter<R: Rng>(pub R);

impl RandJitter<StdRng> {
	pub fn from_entropy() -> Self {
		Self(StdRng::from_entropy())
	}

	pub fn seeded(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Jitter for RandJitter<R> {
	fn unit(&mut self) -> f32 {
		self.0.gen()
	}
}

/// Always the same sample. `ConstJitter(0.5)` spawns without variation.
#[derive(Clone, Copy, Debug)]
pub struct ConstJitter(pub f32);

impl Jitter for ConstJitter {
	fn unit(&mut self) -> f32 {
		self.0
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_ranges() {
		let mut j = RandJitter::seeded(7);
		for _ in 0..1000 {
			let u = j.unit();
			assert!((0.0..1.0).contains(&u));
			let s = j.signed();
			assert!((-1.0..1.0).contains(&s));
		}
	}

	#[test]
	fn test_seeded_repeats() {
		let mut a = RandJitter::seeded(42);
		let mut b = RandJitter::seeded(42);
		for _ in 0..16 {
			assert_eq!(a.unit(), b.unit());
		}
	}

	#[test]
	fn test_const() {
		let mut j = ConstJitter(0.5);
		assert_eq!(j.signed(), 0.);
		assert_eq!(ConstJitter(0.).signed(), -1.);
	}
}
