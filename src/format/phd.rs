//! TR1 level grammar, as shipped on PC and, behind a sound bank, on console.

use nonmax::NonMaxU16;
use tr_readable::{Cursor, Readable};
use crate::{
	level::{Blob, ItemObj, LevelData, Storage},
	types::{BoundBox, Camera, ItemInfo, Model, Sprite, SpriteSeq, StaticMesh, Texture, TrBox},
	LevelError,
};
use super::{
	read_records, read_table, room::read_rooms, stride, Format, LIGHT_MAP_LEN, SOUND_MAP_LEN, ZONE_FACTOR,
};

pub const PHD_VERSION: u32 = 0x20;
/// "pBAV", head of the console sound bank.
pub const VAB_MAGIC: u32 = 0x5641_4270;

pub(crate) trait Layout {
	const FORMAT: Format;
	/// Sample data and sample offsets follow the sound details.
	const TRAILING_SAMPLES: bool;
	fn read_prelude<'a>(cursor: &mut Cursor<'a>, level: &mut LevelData<'a>) -> Result<(), LevelError>;
}

pub(crate) struct Phd;

impl Layout for Phd {
	const FORMAT: Format = Format::Phd;
	const TRAILING_SAMPLES: bool = true;
	
	fn read_prelude<'a>(_: &mut Cursor<'a>, _: &mut LevelData<'a>) -> Result<(), LevelError> {
		Ok(())
	}
}

pub(crate) struct Psx;

impl Layout for Psx {
	const FORMAT: Format = Format::Psx;
	const TRAILING_SAMPLES: bool = false;
	
	fn read_prelude<'a>(cursor: &mut Cursor<'a>, level: &mut LevelData<'a>) -> Result<(), LevelError> {
		let magic = cursor.read_u32()?;
		if magic != VAB_MAGIC {
			return Err(LevelError::Signature { format: Format::Psx, found: magic });
		}
		level.sound_offsets = read_table::<u32>(cursor, stride::SOUND_OFFSET)?;
		level.sound_data = read_table::<u32>(cursor, 1)?.bytes();
		Ok(())
	}
}

#[derive(Readable)]
struct ModelRecord {
	id: u32,
	num_meshes: u16,
	mesh_offset_index: u16,
	mesh_node_offset: u32,
	frame_byte_offset: u32,
	anim_index: Option<NonMaxU16>,
}

/// Ids past u16 saturate so the remapping bound check rejects them.
fn narrow_id(id: u32) -> u16 {
	u16::try_from(id).unwrap_or(u16::MAX)
}

impl From<ModelRecord> for Model {
	fn from(record: ModelRecord) -> Self {
		Model {
			kind: narrow_id(record.id),
			count: record.num_meshes as i16,
			start: record.mesh_offset_index,
			anim_index: record.anim_index,
			node_index: record.mesh_node_offset,
			frame_offset: record.frame_byte_offset,
		}
	}
}

#[derive(Readable)]
struct StaticMeshRecord {
	id: u32,
	mesh_offset_index: u16,
	visibility: BoundBox,
	collision: BoundBox,
	flags: u16,
}

impl From<StaticMeshRecord> for StaticMesh {
	fn from(record: StaticMeshRecord) -> Self {
		StaticMesh {
			id: narrow_id(record.id),
			mesh_index: record.mesh_offset_index,
			flags: record.flags,
			visibility: record.visibility,
			collision: record.collision,
		}
	}
}

#[derive(Readable)]
struct SpriteSeqRecord {
	id: i32,
	neg_length: i16,
	sprite_texture_index: u16,
}

impl From<SpriteSeqRecord> for SpriteSeq {
	fn from(record: SpriteSeqRecord) -> Self {
		SpriteSeq {
			kind: u32::try_from(record.id).map_or(u16::MAX, narrow_id),
			count: record.neg_length,
			start: record.sprite_texture_index,
		}
	}
}

pub(crate) fn read<'a, L: Layout>(
	cursor: &mut Cursor<'a>, level: &mut LevelData<'a>, store: &mut Storage<'a>,
) -> Result<(), LevelError> {
	L::read_prelude(cursor, level)?;
	let version = cursor.read_u32()?;
	if version != PHD_VERSION {
		return Err(LevelError::Signature { format: L::FORMAT, found: version });
	}
	level.version = version;
	level.tiles = read_table::<u32>(cursor, stride::ATLAS)?;
	cursor.skip(4)?;//unused
	let num_rooms = cursor.read_len::<u16>()?;
	read_rooms(cursor, num_rooms, &mut store.rooms)?;
	level.floors = read_table::<u32>(cursor, 2)?;
	level.mesh_data = read_table::<u32>(cursor, 2)?.bytes();
	let num_meshes = cursor.read_len::<u32>()?;
	read_records::<u32, _, _>(cursor, num_meshes, "mesh", &mut level.mesh_offsets)?;
	level.anims = read_table::<u32>(cursor, stride::ANIMATION)?;
	level.anim_states = read_table::<u32>(cursor, stride::STATE_CHANGE)?;
	level.anim_ranges = read_table::<u32>(cursor, stride::ANIM_DISPATCH)?;
	level.anim_commands = read_table::<u32>(cursor, 2)?;
	level.nodes = read_table::<u32>(cursor, stride::NODE)?;
	level.frame_data = read_table::<u32>(cursor, 2)?;
	let num_models = cursor.read_len::<u32>()?;
	read_records::<ModelRecord, _, _>(cursor, num_models, "model", &mut level.models)?;
	let num_static_meshes = cursor.read_len::<u32>()?;
	read_records::<StaticMeshRecord, _, _>(cursor, num_static_meshes, "static mesh", &mut level.static_meshes)?;
	let num_textures = cursor.read_len::<u32>()?;
	read_records::<Texture, _, _>(cursor, num_textures, "texture", &mut store.textures)?;
	let num_sprites = cursor.read_len::<u32>()?;
	read_records::<Sprite, _, _>(cursor, num_sprites, "sprite", &mut store.sprites)?;
	let num_sprite_sequences = cursor.read_len::<u32>()?;
	read_records::<SpriteSeqRecord, _, _>(cursor, num_sprite_sequences, "sprite sequence", &mut level.sprite_sequences)?;
	let num_cameras = cursor.read_len::<u32>()?;
	read_records::<Camera, _, _>(cursor, num_cameras, "camera", &mut store.cameras)?;
	level.sound_sources = read_table::<u32>(cursor, stride::SOUND_SOURCE)?;
	let num_boxes = cursor.read_len::<u32>()?;
	read_records::<TrBox, _, _>(cursor, num_boxes, "box", &mut store.boxes)?;
	level.overlaps = read_table::<u32>(cursor, 2)?;
	level.zones = Blob::read(cursor, num_boxes * ZONE_FACTOR, 2)?;
	let num_anim_tex_words = cursor.read_len::<u32>()?;
	read_records::<u16, _, _>(cursor, num_anim_tex_words, "animated texture word", &mut level.anim_tex_data)?;
	let num_items = cursor.read_len::<u32>()?;
	read_records::<ItemInfo, ItemObj, _>(cursor, num_items, "item", &mut store.items)?;
	level.light_map = Blob::read(cursor, LIGHT_MAP_LEN, 256)?;
	level.palette = cursor.read()?;
	level.camera_frames = read_table::<u16>(cursor, stride::CINEMATIC_FRAME)?;
	level.demo_data = read_table::<u16>(cursor, 1)?;
	level.sound_map = Blob::read(cursor, SOUND_MAP_LEN, 2)?;
	level.sound_infos = read_table::<u32>(cursor, stride::SOUND_DETAILS)?;
	if L::TRAILING_SAMPLES {
		level.sound_data = read_table::<u32>(cursor, 1)?.bytes();
		level.sound_offsets = read_table::<u32>(cursor, stride::SOUND_OFFSET)?;
	}
	Ok(())
}
