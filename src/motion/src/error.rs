use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
	#[error("unknown {kind} preset: {name}")]
	UnknownPreset { kind: &'static str, name: String },

	#[error("unknown demo: {0}")]
	UnknownDemo(String),

	#[error("invalid parameter {name}: {value}")]
	InvalidParameter { name: &'static str, value: f32 },

	#[error("{demo} demo does not handle {message}")]
	Unsupported {
		demo: &'static str,
		message: &'static str,
	},

	#[error("frame receiver disconnected")]
	ChannelClosed,
}

pub type Result<T> = std::result::Result<T, MotionError>;
