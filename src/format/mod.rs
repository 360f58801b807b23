//! Decoders for the on-disk level formats. Each one fills the canonical [`LevelData`] and [`Storage`].

mod phd;
pub mod pkd;
mod room;

use std::{fmt, io::Result};
use arrayvec::ArrayVec;
use num_traits::AsPrimitive;
use tr_readable::{Cursor, Readable};
use crate::{level::{Blob, LevelData, Storage}, LevelError};

pub use phd::{PHD_VERSION, VAB_MAGIC};

/// Record sizes of tables kept as blobs, shared by all formats.
pub mod stride {
	pub const ATLAS: usize = 256 * 256;
	pub const ANIMATION: usize = 32;
	pub const STATE_CHANGE: usize = 6;
	pub const ANIM_DISPATCH: usize = 8;
	pub const NODE: usize = 4;
	pub const SOUND_SOURCE: usize = 16;
	pub const CINEMATIC_FRAME: usize = 16;
	pub const SOUND_DETAILS: usize = 8;
	pub const SOUND_OFFSET: usize = 4;
	pub const PORTAL: usize = 32;
	pub const SECTOR: usize = 8;
	pub const LIGHT: usize = 18;
	pub const ROOM_STATIC_MESH: usize = 18;
}

/// Rows of 256 palette indices in the light map.
pub const LIGHT_MAP_LEN: usize = 32;
pub const SOUND_MAP_LEN: usize = 256;
/// Zone arrays per box: three ground/fly zones for normal and flipped rooms.
pub const ZONE_FACTOR: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	/// Packed image of the canonical structures.
	Pkd,
	/// TR1 PC.
	Phd,
	/// TR1 console.
	Psx,
}

impl Format {
	/// Compiled-in decoders, in the order they are tried.
	pub const PRIORITY: &'static [Format] = &[
		#[cfg(feature = "pkd")]
		Format::Pkd,
		#[cfg(feature = "phd")]
		Format::Phd,
		#[cfg(feature = "psx")]
		Format::Psx,
	];
	
	pub fn name(self) -> &'static str {
		match self {
			Format::Pkd => "PKD",
			Format::Phd => "PHD",
			Format::Psx => "PSX",
		}
	}
	
	pub fn try_decode<'a>(
		self, cursor: &mut Cursor<'a>, level: &mut LevelData<'a>, store: &mut Storage<'a>,
	) -> std::result::Result<(), LevelError> {
		match self {
			Format::Pkd => pkd::read(cursor, level, store),
			Format::Phd => phd::read::<phd::Phd>(cursor, level, store),
			Format::Psx => phd::read::<phd::Psx>(cursor, level, store),
		}
	}
}

impl fmt::Display for Format {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

pub(crate) fn check_capacity(what: &'static str, count: usize, max: usize) -> std::result::Result<(), LevelError> {
	match count > max {
		true => Err(LevelError::Capacity { what, count, max }),
		false => Ok(()),
	}
}

/// Read `count` records as `R`, converting each into the stored type.
pub(crate) fn read_records<R, T, const N: usize>(
	cursor: &mut Cursor<'_>, count: usize, what: &'static str, dest: &mut ArrayVec<T, N>,
) -> std::result::Result<(), LevelError>
where
	R: Readable + Into<T>,
{
	check_capacity(what, dest.len().saturating_add(count), N)?;
	for _ in 0..count {
		let record = cursor.read::<R>()?.into();
		dest.try_push(record).map_err(|_| LevelError::Capacity { what, count, max: N })?;
	}
	Ok(())
}

/// Read a count stored as `L` and borrow that many records.
pub(crate) fn read_table<'a, L>(cursor: &mut Cursor<'a>, stride: usize) -> Result<Blob<'a>>
where
	L: Readable + AsPrimitive<usize>,
{
	let len = cursor.read_len::<L>()?;
	Blob::read(cursor, len, stride)
}
