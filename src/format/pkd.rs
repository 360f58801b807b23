//! Packed level image: a section directory over flat arrays of canonical records.
//!
//! Layout, all in the source byte order:
//! - `magic: u32` = [`MAGIC`]
//! - `version: u32` = [`VERSION`]
//! - [`SECTION_COUNT`] descriptors of `offset: u32, size: u32`, offsets from the start of the image
//!
//! Record counts are implied by section size. Rooms are a u16 count followed by rooms in the PHD room grammar.

use std::io::{Error, ErrorKind, Result};
use arrayvec::ArrayVec;
use tr_readable::{Cursor, Endian, Readable};
use crate::{
	level::{Blob, ItemObj, LevelData, Storage},
	types::{Camera, ItemInfo, Model, Palette, Sprite, SpriteSeq, StaticMesh, Texture, TrBox, PALETTE_LEN},
	LevelError,
};
use super::{read_records, room::read_rooms, stride, Format};

/// "PKD\0"
pub const MAGIC: u32 = u32::from_le_bytes(*b"PKD\0");
pub const VERSION: u32 = 1;
pub const SECTION_COUNT: usize = 31;
pub const HEADER_SIZE: usize = 8 + SECTION_COUNT * 8;

/// Indices into the section directory.
pub mod section {
	pub const PALETTE: usize = 0;
	pub const LIGHT_MAP: usize = 1;
	pub const TILES: usize = 2;
	pub const ROOMS: usize = 3;
	pub const FLOORS: usize = 4;
	pub const MESH_DATA: usize = 5;
	pub const MESH_OFFSETS: usize = 6;
	pub const ANIMS: usize = 7;
	pub const ANIM_STATES: usize = 8;
	pub const ANIM_RANGES: usize = 9;
	pub const ANIM_COMMANDS: usize = 10;
	pub const NODES: usize = 11;
	pub const FRAME_DATA: usize = 12;
	pub const MODELS: usize = 13;
	pub const STATIC_MESHES: usize = 14;
	pub const TEXTURES: usize = 15;
	pub const SPRITES: usize = 16;
	pub const SPRITE_SEQUENCES: usize = 17;
	pub const CAMERAS: usize = 18;
	pub const SOUND_SOURCES: usize = 19;
	pub const BOXES: usize = 20;
	pub const OVERLAPS: usize = 21;
	pub const ZONES: usize = 22;
	pub const ANIM_TEX_DATA: usize = 23;
	pub const ITEMS: usize = 24;
	pub const CAMERA_FRAMES: usize = 25;
	pub const DEMO_DATA: usize = 26;
	pub const SOUND_MAP: usize = 27;
	pub const SOUND_INFOS: usize = 28;
	pub const SOUND_DATA: usize = 29;
	pub const SOUND_OFFSETS: usize = 30;
}

/// Sizes of canonical records in packed sections.
pub mod record_size {
	pub const MODEL: usize = 16;
	pub const STATIC_MESH: usize = 30;
	pub const SPRITE_SEQ: usize = 6;
	pub const TEXTURE: usize = 20;
	pub const SPRITE: usize = 16;
	pub const CAMERA: usize = 16;
	pub const BOX: usize = 20;
	pub const ITEM: usize = 22;
	pub const PALETTE: usize = super::PALETTE_LEN * 3;
}

#[derive(Readable, Clone, Copy, Debug, Default)]
struct Section {
	offset: u32,
	size: u32,
}

struct Sections<'a> {
	data: &'a [u8],
	endian: Endian,
	table: [Section; SECTION_COUNT],
}

impl<'a> Sections<'a> {
	fn cursor(&self, id: usize) -> Result<Cursor<'a>> {
		let Section { offset, size } = self.table[id];
		let start = offset as usize;
		let bytes = start
			.checked_add(size as usize)
			.and_then(|end| self.data.get(start..end))
			.ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, format!("section {} outside level data", id)))?;
		Ok(Cursor::new(bytes, 0).with_endian(self.endian))
	}
	
	fn count(&self, id: usize, stride: usize) -> Result<usize> {
		let size = self.table[id].size as usize;
		match size % stride {
			0 => Ok(size / stride),
			_ => Err(Error::new(ErrorKind::InvalidData, format!("section {} is not a whole number of records", id))),
		}
	}
	
	fn blob(&self, id: usize, stride: usize) -> Result<Blob<'a>> {
		let len = self.count(id, stride)?;
		Blob::read(&mut self.cursor(id)?, len, stride)
	}
	
	fn records<R, T, const N: usize>(
		&self, id: usize, stride: usize, what: &'static str, dest: &mut ArrayVec<T, N>,
	) -> std::result::Result<(), LevelError>
	where
		R: Readable + Into<T>,
	{
		let count = self.count(id, stride)?;
		read_records::<R, T, N>(&mut self.cursor(id)?, count, what, dest)
	}
}

pub(crate) fn read<'a>(
	cursor: &mut Cursor<'a>, level: &mut LevelData<'a>, store: &mut Storage<'a>,
) -> std::result::Result<(), LevelError> {
	let magic = cursor.read_u32()?;
	if magic != MAGIC {
		return Err(LevelError::Signature { format: Format::Pkd, found: magic });
	}
	let version = cursor.read_u32()?;
	if version != VERSION {
		return Err(LevelError::Signature { format: Format::Pkd, found: version });
	}
	level.version = version;
	let sections = Sections {
		data: cursor.data(),
		endian: cursor.endian(),
		table: cursor.read()?,
	};
	use section::*;
	let mut palette = sections.cursor(PALETTE)?;
	if palette.remaining() != record_size::PALETTE {
		return Err(Error::new(ErrorKind::InvalidData, "palette section size").into());
	}
	level.palette = palette.read::<Palette>()?;
	level.light_map = sections.blob(LIGHT_MAP, PALETTE_LEN)?;
	level.tiles = sections.blob(TILES, stride::ATLAS)?;
	let mut rooms = sections.cursor(ROOMS)?;
	if rooms.remaining() > 0 {
		let num_rooms = rooms.read_len::<u16>()?;
		read_rooms(&mut rooms, num_rooms, &mut store.rooms)?;
	}
	level.floors = sections.blob(FLOORS, 2)?;
	level.mesh_data = sections.cursor(MESH_DATA)?.data();
	sections.records::<u32, _, _>(MESH_OFFSETS, 4, "mesh", &mut level.mesh_offsets)?;
	level.anims = sections.blob(ANIMS, stride::ANIMATION)?;
	level.anim_states = sections.blob(ANIM_STATES, stride::STATE_CHANGE)?;
	level.anim_ranges = sections.blob(ANIM_RANGES, stride::ANIM_DISPATCH)?;
	level.anim_commands = sections.blob(ANIM_COMMANDS, 2)?;
	level.nodes = sections.blob(NODES, stride::NODE)?;
	level.frame_data = sections.blob(FRAME_DATA, 2)?;
	sections.records::<Model, _, _>(MODELS, record_size::MODEL, "model", &mut level.models)?;
	sections.records::<StaticMesh, _, _>(STATIC_MESHES, record_size::STATIC_MESH, "static mesh", &mut level.static_meshes)?;
	sections.records::<Texture, _, _>(TEXTURES, record_size::TEXTURE, "texture", &mut store.textures)?;
	sections.records::<Sprite, _, _>(SPRITES, record_size::SPRITE, "sprite", &mut store.sprites)?;
	sections.records::<SpriteSeq, _, _>(
		SPRITE_SEQUENCES, record_size::SPRITE_SEQ, "sprite sequence", &mut level.sprite_sequences,
	)?;
	sections.records::<Camera, _, _>(CAMERAS, record_size::CAMERA, "camera", &mut store.cameras)?;
	level.sound_sources = sections.blob(SOUND_SOURCES, stride::SOUND_SOURCE)?;
	sections.records::<TrBox, _, _>(BOXES, record_size::BOX, "box", &mut store.boxes)?;
	level.overlaps = sections.blob(OVERLAPS, 2)?;
	level.zones = sections.blob(ZONES, 2)?;
	sections.records::<u16, _, _>(ANIM_TEX_DATA, 2, "animated texture word", &mut level.anim_tex_data)?;
	sections.records::<ItemInfo, ItemObj, _>(ITEMS, record_size::ITEM, "item", &mut store.items)?;
	level.camera_frames = sections.blob(CAMERA_FRAMES, stride::CINEMATIC_FRAME)?;
	level.demo_data = sections.blob(DEMO_DATA, 1)?;
	level.sound_map = sections.blob(SOUND_MAP, 2)?;
	level.sound_infos = sections.blob(SOUND_INFOS, stride::SOUND_DETAILS)?;
	level.sound_data = sections.cursor(SOUND_DATA)?.data();
	level.sound_offsets = sections.blob(SOUND_OFFSETS, stride::SOUND_OFFSET)?;
	Ok(())
}
