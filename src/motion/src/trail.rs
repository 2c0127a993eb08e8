use std::collections::VecDeque;

use crate::V2;
use protocol::pr_model::PrTrailPoint;

pub struct Trail {
	points: VecDeque<V2>,
	capacity: usize,
	fade_step: f32,
}

impl Default for Trail {
	fn default() -> Self {
		Self {
			points: VecDeque::new(),
			capacity: 50,
			fade_step: 0.05,
		}
	}
}

impl Trail {
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	pub fn push(&mut self, point: V2) {
		self.points.push_back(point);
		while self.points.len() > self.capacity {
			self.points.pop_front();
		}
	}

	pub fn clear(&mut self) {
		self.points.clear();
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	// age 0 is the newest point, which is already slightly faded
	pub fn opacity(&self, age: usize) -> f32 {
		(1. - (age + 1) as f32 * self.fade_step).max(0.)
	}

	/// Oldest point first.
	pub fn render(&self) -> Vec<PrTrailPoint> {
		let n = self.points.len();
		self.points
			.iter()
			.enumerate()
			.map(|(idx, p)| PrTrailPoint {
				pos: [p[0], p[1]],
				opacity: self.opacity(n - 1 - idx),
			})
			.collect()
	}
}
