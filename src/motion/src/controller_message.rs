use crate::fluid::FluidProperties;
use crate::spring::SpringProperties;

#[derive(Clone, Debug, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	// canvas coordinates
	Pointer([f32; 2]),
	Click([f32; 2]),
	SelectPreset(String),
	SetProperties(SpringProperties),
	SetFluid(FluidProperties),
	ToggleTrail,
	Reset,
	Clear,
}

impl ControllerMessage {
	pub fn kind(&self) -> &'static str {
		use ControllerMessage::*;
		match self {
			TogglePause => "toggle pause",
			FrameForward => "frame forward",
			Pointer(_) => "pointer",
			Click(_) => "click",
			SelectPreset(_) => "select preset",
			SetProperties(_) => "set properties",
			SetFluid(_) => "set fluid",
			ToggleTrail => "toggle trail",
			Reset => "reset",
			Clear => "clear",
		}
	}
}
