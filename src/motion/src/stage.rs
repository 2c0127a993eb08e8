use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::controller_message::ControllerMessage;
use crate::demo::Demo;
use crate::error::{MotionError, Result};
use crate::frame_clock::FrameClock;
use protocol::pr_model::{PrFrame, UpdateInfo};
use protocol::Message;

/// Drives one demo: owns the clock, the pause state and the input queue.
pub struct Stage {
	pub frame_ms: f32,
	demo: Box<dyn Demo>,
	clock: FrameClock,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	frame: u64,
}

impl Stage {
	pub fn new(demo: Box<dyn Demo>) -> Self {
		Self {
			frame_ms: 16.,
			demo,
			clock: FrameClock::default(),
			forward_frames: -1,
			frame: 0,
		}
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn with_frame_ms(mut self, frame_ms: f32) -> Self {
		self.frame_ms = frame_ms;
		self
	}

	pub fn with_clock(mut self, clock: FrameClock) -> Self {
		self.clock = clock;
		self
	}

	pub fn with_max_dt(mut self, max_dt: f32) -> Self {
		self.clock = self.clock.with_max_dt(max_dt);
		self
	}

	pub fn demo(&self) -> &dyn Demo {
		self.demo.as_ref()
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			msg => match self.demo.handle(&msg) {
				Ok(()) => {}
				Err(e @ MotionError::Unsupported { .. }) => debug!("{}", e),
				Err(e) => warn!("{}", e),
			},
		}
	}

	fn update_frame(&mut self, dt: f32) {
		if self.forward_frames != 0 {
			if self.forward_frames > 0 {
				self.forward_frames -= 1;
			}
			self.demo.update(dt);
		}
		self.frame += 1;
	}

	pub fn pr_frame(&self) -> PrFrame {
		PrFrame {
			index: self.frame,
			demo: self.demo.name().to_string(),
			paused: self.is_paused(),
			scene: self.demo.render(),
		}
	}

	/// `now` is the frame timestamp in ms.
	pub fn advance(&mut self, now: f64) -> PrFrame {
		let dt = self.clock.tick(now);
		self.update_frame(dt);
		self.pr_frame()
	}

	pub fn step(&mut self, dt: f32) -> PrFrame {
		let dt = self.clock.clamp(dt);
		self.update_frame(dt);
		self.pr_frame()
	}

	pub fn run(&mut self, frames: usize) -> PrFrame {
		for _ in 0..frames {
			let dt = self.clock.take_time();
			self.update_frame(dt);
		}
		self.pr_frame()
	}

	/// Real time loop. Returns when the controller hangs up.
	pub fn run_thread(
		&mut self,
		tx: Sender<Message>,
		rx: Receiver<ControllerMessage>,
	) -> Result<()> {
		let budget = Duration::from_secs_f32(self.frame_ms.max(0.) / 1e3);
		info!("{} stage running at {}ms per frame", self.demo.name(), self.frame_ms);
		loop {
			let start_time = Instant::now();
			loop {
				match rx.try_recv() {
					Ok(msg) => self.handle(msg),
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						info!("controller gone after {} frames", self.frame);
						return Ok(());
					}
				}
			}
			let dt = self.clock.take_time();
			self.update_frame(dt);
			let model = self.pr_frame();
			let spent = start_time.elapsed();
			let info = UpdateInfo {
				load: spent.as_secs_f32() / budget.as_secs_f32().max(f32::EPSILON),
				particle_len: self.demo.population(),
			};
			if tx.send(Message::Update(model, info)).is_err() {
				return Err(MotionError::ChannelClosed);
			}
			if spent < budget {
				std::thread::sleep(budget - spent);
			}
		}
	}
}
