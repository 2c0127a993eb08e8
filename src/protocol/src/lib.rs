pub mod pr_model;
use pr_model::{PrFrame, UpdateInfo};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
	#[error("bincode error: {0}")]
	Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
	Update(PrFrame, UpdateInfo),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(bincode::serialize(&self)?)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Ok(bincode::deserialize(bytes)?)
	}
}
