use std::io;
use thiserror::Error;
use crate::format::Format;

#[derive(Debug, Error)]
pub enum LevelError {
	#[error("unsupported level format")]
	UnsupportedFormat,
	#[error("not a {format} level (signature {found:#010x})")]
	Signature { format: Format, found: u32 },
	#[error("{what} count {count} exceeds capacity {max}")]
	Capacity { what: &'static str, count: usize, max: usize },
	#[error("{what} id {id} out of range (max {max})")]
	IdOutOfRange { what: &'static str, id: usize, max: usize },
	#[error("mesh {index} offset {offset} outside mesh data ({len} bytes)")]
	MeshOffset { index: usize, offset: u32, len: usize },
	#[error("animated texture stream references texture {texture} of {count}")]
	AnimTexture { texture: usize, count: usize },
	#[error(transparent)]
	Io(#[from] io::Error),
}

impl LevelError {
	/// Fatal errors abort the load instead of handing the data to the next decoder.
	pub fn is_fatal(&self) -> bool {
		matches!(
			self,
			LevelError::Capacity { .. }
				| LevelError::IdOutOfRange { .. }
				| LevelError::MeshOffset { .. }
				| LevelError::AnimTexture { .. },
		)
	}
}
