use std::io::{Error, ErrorKind, Result};
use arrayvec::ArrayVec;
use glam::U16Vec2;
use nonmax::NonMaxU16;
use tr_readable::{Cursor, Endian, Readable};
use crate::{
	format::Format,
	types::{
		Camera, ItemInfo, MeshHeader, Model, Palette, RoomFlags, RoomInfo, Sprite, SpriteSeq, StaticMesh, Texture,
		TrBox,
	},
	MAX_ANIM_TEX_DATA, MAX_BOXES, MAX_CAMERAS, MAX_ITEMS, MAX_MESHES, MAX_MODELS, MAX_ROOMS, MAX_SPRITES,
	MAX_SPRITE_SEQUENCES, MAX_STATIC_MESHES, MAX_TEXTURES,
};

/// Table of fixed-size records borrowed from the level image.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blob<'a> {
	bytes: &'a [u8],
	len: usize,
	stride: usize,
	endian: Endian,
}

impl<'a> Blob<'a> {
	/// Borrow `len` records of `stride` bytes at the cursor.
	pub fn read(cursor: &mut Cursor<'a>, len: usize, stride: usize) -> Result<Self> {
		let size = len
			.checked_mul(stride)
			.ok_or_else(|| Error::new(ErrorKind::InvalidData, "table size overflows"))?;
		let endian = cursor.endian();
		let bytes = cursor.read_bytes(size)?;
		Ok(Self { bytes, len, stride, endian })
	}
	
	pub fn len(&self) -> usize {
		self.len
	}
	
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
	
	pub fn stride(&self) -> usize {
		self.stride
	}
	
	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}
	
	pub fn get<T: Readable>(&self, index: usize) -> Option<T> {
		if index >= self.len {
			return None;
		}
		Cursor::new(self.bytes, index * self.stride).with_endian(self.endian).read().ok()
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Room<'a> {
	pub info: RoomInfo,
	/// Vertices, quads, triangles and sprites, each a u16 count followed by its records.
	pub geometry: Blob<'a>,
	pub portals: Blob<'a>,
	/// Sector grid size as (z, x).
	pub sectors_size: U16Vec2,
	pub sectors: Blob<'a>,
	pub ambient: u16,
	pub lights: Blob<'a>,
	pub static_meshes: Blob<'a>,
	/// Index into `Storage.rooms`.
	pub alt_room: Option<NonMaxU16>,
	pub flags: RoomFlags,
}

/// Storage slot of one level item.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemObj {
	pub info: ItemInfo,
	/// Links owned by the item list management.
	pub next_item: Option<NonMaxU16>,
	pub next_active: Option<NonMaxU16>,
}

impl From<ItemInfo> for ItemObj {
	fn from(info: ItemInfo) -> Self {
		Self { info, next_item: None, next_active: None }
	}
}

/// Byte range of one mesh in `LevelData.mesh_data`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshRef {
	pub start: u32,
	pub end: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct Mesh<'a> {
	bytes: &'a [u8],
	endian: Endian,
}

impl<'a> Mesh<'a> {
	pub fn new(bytes: &'a [u8], endian: Endian) -> Self {
		Self { bytes, endian }
	}
	
	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}
	
	pub fn header(&self) -> Result<MeshHeader> {
		Cursor::new(self.bytes, 0).with_endian(self.endian).read()
	}
}

/// The canonical decoded level. Blobs alias the level image.
#[derive(Clone, Debug, Default)]
pub struct LevelData<'a> {
	pub format: Option<Format>,
	pub version: u32,
	pub endian: Endian,
	pub palette: Palette,
	pub light_map: Blob<'a>,
	pub tiles: Blob<'a>,
	pub floors: Blob<'a>,
	pub mesh_data: &'a [u8],
	/// Byte offsets into `mesh_data`, one per mesh index.
	pub mesh_offsets: ArrayVec<u32, MAX_MESHES>,
	pub anims: Blob<'a>,
	pub anim_states: Blob<'a>,
	pub anim_ranges: Blob<'a>,
	pub anim_commands: Blob<'a>,
	pub nodes: Blob<'a>,
	pub frame_data: Blob<'a>,
	/// In decoded order, before remapping by type.
	pub models: ArrayVec<Model, MAX_MODELS>,
	/// In decoded order, before remapping by id.
	pub static_meshes: ArrayVec<StaticMesh, MAX_STATIC_MESHES>,
	pub sprite_sequences: ArrayVec<SpriteSeq, MAX_SPRITE_SEQUENCES>,
	pub sound_sources: Blob<'a>,
	pub overlaps: Blob<'a>,
	pub zones: Blob<'a>,
	pub anim_tex_data: ArrayVec<u16, MAX_ANIM_TEX_DATA>,
	pub camera_frames: Blob<'a>,
	pub demo_data: Blob<'a>,
	pub sound_map: Blob<'a>,
	pub sound_infos: Blob<'a>,
	pub sound_data: &'a [u8],
	pub sound_offsets: Blob<'a>,
}

/// Fixed-capacity arrays the assembler fills and the per-frame update mutates.
#[derive(Debug)]
pub struct Storage<'a> {
	pub textures: ArrayVec<Texture, MAX_TEXTURES>,
	pub sprites: ArrayVec<Sprite, MAX_SPRITES>,
	pub cameras: ArrayVec<Camera, MAX_CAMERAS>,
	pub boxes: ArrayVec<TrBox, MAX_BOXES>,
	pub rooms: ArrayVec<Room<'a>, MAX_ROOMS>,
	pub items: ArrayVec<ItemObj, MAX_ITEMS>,
	/// Indexed by `Model.kind`.
	pub models: [Model; MAX_MODELS],
	/// Indexed by mesh index.
	pub meshes: ArrayVec<MeshRef, MAX_MESHES>,
	/// Indexed by `StaticMesh.id`.
	pub static_meshes: [StaticMesh; MAX_STATIC_MESHES],
}

impl<'a> Storage<'a> {
	pub fn new() -> Self {
		Self {
			textures: ArrayVec::new(),
			sprites: ArrayVec::new(),
			cameras: ArrayVec::new(),
			boxes: ArrayVec::new(),
			rooms: ArrayVec::new(),
			items: ArrayVec::new(),
			models: [Model::default(); MAX_MODELS],
			meshes: ArrayVec::new(),
			static_meshes: [StaticMesh::default(); MAX_STATIC_MESHES],
		}
	}
	
	pub fn clear(&mut self) {
		self.textures.clear();
		self.sprites.clear();
		self.cameras.clear();
		self.boxes.clear();
		self.rooms.clear();
		self.items.clear();
		self.models.fill(Model::default());
		self.meshes.clear();
		self.static_meshes.fill(StaticMesh::default());
	}
}

impl<'a> Default for Storage<'a> {
	fn default() -> Self {
		Self::new()
	}
}
