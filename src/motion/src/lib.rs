pub mod controller_message;
pub mod demo;
pub mod emitter;
pub mod error;
pub mod fluid;
pub mod frame_clock;
pub mod jitter;
pub mod particle;
pub mod preset;
pub mod spring;
pub mod stage;
pub mod trail;

pub use error::{MotionError, Result};

pub type V2 = nalgebra::Vector2<f32>;
