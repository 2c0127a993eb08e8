use std::time::Instant;

use log::{error, info};
use motion::controller_message::ControllerMessage;
use motion::demo::by_name;
use motion::frame_clock::FrameClock;
use motion::stage::Stage;
use protocol::pr_model::UpdateInfo;
use protocol::Message;

const DT: f32 = 16.;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();
	let mut iter = std::env::args();
	iter.next();
	let name = iter.next().unwrap_or_else(|| "particles".to_string());
	let frames: usize = match iter.next().map(|s| s.parse()) {
		None => 600,
		Some(Ok(n)) => n,
		Some(Err(e)) => {
			error!("bad frame count: {}", e);
			std::process::exit(2);
		}
	};
	let demo = match by_name(&name) {
		Ok(demo) => demo,
		Err(e) => {
			error!("{}", e);
			std::process::exit(2);
		}
	};

	let mut stage = Stage::new(demo).with_clock(FrameClock::fixed(DT));
	stage.handle(ControllerMessage::Click([300., 100.]));
	let start = Instant::now();
	let frame = stage.run(frames);
	let duration = start.elapsed().as_secs_f32();
	let sim_time = frames as f32 * DT / 1e3;
	info!(
		"{}: {} frames in {:.3}s, {:.3}% of simulated time",
		name,
		frames,
		duration,
		duration / sim_time * 100.
	);

	let info = UpdateInfo {
		load: duration / sim_time,
		particle_len: stage.demo().population(),
	};
	info!("{} live elements, {} in scene", info.particle_len, frame.scene.len());
	match Message::Update(frame, info).to_bytes() {
		Ok(bytes) => info!("snapshot: {} bytes", bytes.len()),
		Err(e) => error!("snapshot: {}", e),
	}
}
