//! Fixed-layout records of the canonical level model.

use bitfield::bitfield;
use glam::{I16Vec2, I16Vec3, IVec3, U16Vec2};
use nonmax::NonMaxU16;
use tr_readable::Readable;

pub const PALETTE_LEN: usize = 256;

/// 6 bits per channel.
#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

#[derive(Readable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(pub [Rgb; PALETTE_LEN]);

impl Default for Palette {
	fn default() -> Self {
		Palette([Rgb::default(); PALETTE_LEN])
	}
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinMax<T> {
	pub min: T,
	pub max: T,
}

impl<T: PartialOrd> MinMax<T> {
	pub fn contains(&self, a: &T) -> bool {
		self.min <= *a && *a <= self.max
	}
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundBox {
	pub x: MinMax<i16>,
	pub y: MinMax<i16>,
	pub z: MinMax<i16>,
}

/// Gameplay object template. Slot index equals `kind`.
#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Model {
	pub kind: u16,
	/// Mesh count, or negative sprite frame count for sprite types.
	pub count: i16,
	/// Index into the mesh table, or first sprite for sprite types.
	pub start: u16,
	/// Index into `LevelData.anims`.
	pub anim_index: Option<NonMaxU16>,
	/// Offset into `LevelData.nodes`.
	pub node_index: u32,
	/// Byte offset into `LevelData.frame_data`.
	pub frame_offset: u32,
}

impl Model {
	/// An unused slot reads as all zeroes.
	pub fn is_empty(&self) -> bool {
		*self == Model::default()
	}
}

/// Slot index equals `id`.
#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticMesh {
	pub id: u16,
	/// Index into the mesh table.
	pub mesh_index: u16,
	pub flags: u16,
	pub visibility: BoundBox,
	pub collision: BoundBox,
}

impl StaticMesh {
	pub fn is_empty(&self) -> bool {
		*self == StaticMesh::default()
	}
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteSeq {
	/// Item type the sequence belongs to.
	pub kind: u16,
	pub count: i16,
	/// Index into `Storage.sprites`.
	pub start: u16,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Texture {
	/// Blend mode.
	pub attribute: u16,
	/// Index into `LevelData.tiles`.
	pub tile: u16,
	/// Units are 1/256 of a pixel.
	pub uv: [U16Vec2; 4],
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
	/// Index into `LevelData.tiles`.
	pub tile: u16,
	pub pos: [u8; 2],
	pub size: U16Vec2,
	/// Left-top and right-bottom in world units.
	pub bounds: MinMax<I16Vec2>,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Camera {
	/// World coords.
	pub pos: IVec3,
	/// Index into `Storage.rooms`.
	pub room: u16,
	pub flags: u16,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrBox {
	/// World units.
	pub z: MinMax<i32>,
	pub x: MinMax<i32>,
	pub floor: i16,
	/// Index into `LevelData.overlaps`.
	pub overlap: u16,
}

impl TrBox {
	pub fn contains(&self, x: i32, z: i32) -> bool {
		self.x.contains(&x) && self.z.contains(&z)
	}
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct ItemFlags(u16);
	impl Debug;
	pub invisible, _: 8;
	pub activation_mask, _: 13, 9;
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemInfo {
	/// Matched to `Model.kind`.
	pub kind: u16,
	/// Index into `Storage.rooms`.
	pub room: u16,
	/// World coords.
	pub pos: IVec3,
	/// Units are 1/65536 of a rotation.
	pub angle: u16,
	/// If `None`, use mesh light.
	pub intensity: Option<NonMaxU16>,
	pub flags: ItemFlags,
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomInfo {
	/// World coord.
	pub x: i32,
	/// World coord.
	pub z: i32,
	pub y_bottom: i32,
	pub y_top: i32,
}

bitfield! {
	#[derive(Readable, Clone, Copy, Default, PartialEq, Eq)]
	pub struct RoomFlags(u16);
	impl Debug;
	pub water, _: 0;
}

#[derive(Readable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshHeader {
	/// Relative to the mesh origin.
	pub center: I16Vec3,
	pub radius: i32,
	pub vertex_count: u16,
}
