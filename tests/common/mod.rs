//! Builders for small level images in each supported format.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use tr_world::{format::{pkd, PHD_VERSION, VAB_MAGIC}, Endian, ITEM_TYPE_COUNT};

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Byte sink writing in a chosen byte order.
pub struct Out {
	pub buf: Vec<u8>,
	endian: Endian,
}

macro_rules! write_int {
	($($name:ident: $type:ty => $write:ident;)*) => {
		$(
			pub fn $name(&mut self, value: $type) -> &mut Self {
				let written = match self.endian {
					Endian::Little => self.buf.$write::<LittleEndian>(value),
					Endian::Big => self.buf.$write::<BigEndian>(value),
				};
				written.unwrap();
				self
			}
		)*
	};
}

impl Out {
	pub fn new(endian: Endian) -> Self {
		Self { buf: vec![], endian }
	}
	
	write_int! {
		u16: u16 => write_u16;
		i16: i16 => write_i16;
		u32: u32 => write_u32;
		i32: i32 => write_i32;
	}
	
	pub fn zeros(&mut self, len: usize) -> &mut Self {
		self.buf.resize(self.buf.len() + len, 0);
		self
	}
	
	pub fn words(&mut self, words: &[u16]) -> &mut Self {
		for &word in words {
			self.u16(word);
		}
		self
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RoomDef {
	pub x: i32,
	pub z: i32,
	pub sectors: (u16, u16),
	pub alt_room: u16,
	pub flags: u16,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ModelDef {
	pub id: u32,
	pub count: i16,
	pub start: u16,
	pub frame_offset: u32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StaticMeshDef {
	pub id: u32,
	pub mesh: u16,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SpriteSeqDef {
	pub id: i32,
	pub count: i16,
	pub start: u16,
}

/// Contents of a test level. Everything not listed is empty.
#[derive(Clone, Debug, Default)]
pub struct LevelDef {
	pub rooms: Vec<RoomDef>,
	pub mesh_data: Vec<u16>,
	pub mesh_offsets: Vec<u32>,
	pub models: Vec<ModelDef>,
	pub static_meshes: Vec<StaticMeshDef>,
	/// Tile of each texture.
	pub textures: Vec<u16>,
	pub sprite_sequences: Vec<SpriteSeqDef>,
	pub anim_tex: Vec<u16>,
	/// Kind of each item.
	pub items: Vec<u16>,
	/// Palette entry 1, the rest are black.
	pub accent: [u8; 3],
	/// Declared static mesh count, when it should differ from the records written.
	pub static_mesh_count: Option<u32>,
}

impl LevelDef {
	/// One sprite-free model per item type up to `count`.
	pub fn with_models(count: u32) -> Self {
		let models = (0..count.min(ITEM_TYPE_COUNT as u32))
			.map(|id| ModelDef { id, count: 1, start: 0, frame_offset: id * 4 })
			.collect();
		Self { models, ..Default::default() }
	}
}

fn write_room(out: &mut Out, room: &RoomDef) {
	out.i32(room.x).i32(room.z).i32(0).i32(-1024);
	out.u32(0);//geometry words
	out.u16(0);//portals
	out.u16(room.sectors.0).u16(room.sectors.1);
	out.zeros(usize::from(room.sectors.0) * usize::from(room.sectors.1) * 8);
	out.u16(0x1000);
	out.u16(0);//lights
	out.u16(0);//static meshes
	out.u16(room.alt_room).u16(room.flags);
}

fn write_rooms(out: &mut Out, rooms: &[RoomDef]) {
	out.u16(rooms.len() as u16);
	for room in rooms {
		write_room(out, room);
	}
}

fn write_texture(out: &mut Out, tile: u16) {
	out.u16(0).u16(tile).zeros(16);
}

fn write_item(out: &mut Out, kind: u16) {
	out.u16(kind).u16(0).i32(1024).i32(0).i32(2048).u16(0).u16(u16::MAX).u16(0);
}

fn write_palette(out: &mut Out, accent: [u8; 3]) {
	out.zeros(3);
	out.buf.extend(accent);
	out.zeros(254 * 3);
}

/// Body shared by PHD and PSX, starting at the version word.
fn write_phd_body(out: &mut Out, level: &LevelDef, trailing_samples: bool) {
	out.u32(PHD_VERSION);
	out.u32(0);//tiles
	out.u32(0);
	write_rooms(out, &level.rooms);
	out.u32(0);//floors
	out.u32(level.mesh_data.len() as u32).words(&level.mesh_data);
	out.u32(level.mesh_offsets.len() as u32);
	for &offset in &level.mesh_offsets {
		out.u32(offset);
	}
	for _ in 0..6 {
		out.u32(0);//animation tables
	}
	out.u32(level.models.len() as u32);
	for model in &level.models {
		out.u32(model.id).u16(model.count as u16).u16(model.start).u32(0).u32(model.frame_offset).u16(u16::MAX);
	}
	out.u32(level.static_mesh_count.unwrap_or(level.static_meshes.len() as u32));
	for static_mesh in &level.static_meshes {
		out.u32(static_mesh.id).u16(static_mesh.mesh).zeros(24).u16(0);
	}
	out.u32(level.textures.len() as u32);
	for &tile in &level.textures {
		write_texture(out, tile);
	}
	out.u32(0);//sprites
	out.u32(level.sprite_sequences.len() as u32);
	for seq in &level.sprite_sequences {
		out.i32(seq.id).i16(seq.count).u16(seq.start);
	}
	out.u32(0);//cameras
	out.u32(0);//sound sources
	out.u32(0);//boxes
	out.u32(0);//overlaps
	out.u32(level.anim_tex.len() as u32).words(&level.anim_tex);
	out.u32(level.items.len() as u32);
	for &kind in &level.items {
		write_item(out, kind);
	}
	out.zeros(32 * 256);
	write_palette(out, level.accent);
	out.u16(0);//camera frames
	out.u16(0);//demo data
	out.zeros(256 * 2);
	out.u32(0);//sound details
	if trailing_samples {
		out.u32(0).u32(0);
	}
}

pub fn phd(level: &LevelDef) -> Vec<u8> {
	let mut out = Out::new(Endian::Little);
	write_phd_body(&mut out, level, true);
	out.buf
}

pub fn psx(level: &LevelDef) -> Vec<u8> {
	let mut out = Out::new(Endian::Little);
	out.u32(VAB_MAGIC);
	out.u32(2).u32(0).u32(4);
	out.u32(8).zeros(8);
	write_phd_body(&mut out, level, false);
	out.buf
}

pub fn pkd(level: &LevelDef, endian: Endian) -> Vec<u8> {
	let mut sections = (0..pkd::SECTION_COUNT).map(|_| Out::new(endian)).collect::<Vec<_>>();
	write_palette(&mut sections[pkd::section::PALETTE], level.accent);
	if !level.rooms.is_empty() {
		write_rooms(&mut sections[pkd::section::ROOMS], &level.rooms);
	}
	sections[pkd::section::MESH_DATA].words(&level.mesh_data);
	for &offset in &level.mesh_offsets {
		sections[pkd::section::MESH_OFFSETS].u32(offset);
	}
	for model in &level.models {
		sections[pkd::section::MODELS]
			.u16(model.id as u16)
			.i16(model.count)
			.u16(model.start)
			.u16(u16::MAX)
			.u32(0)
			.u32(model.frame_offset);
	}
	for static_mesh in &level.static_meshes {
		sections[pkd::section::STATIC_MESHES].u16(static_mesh.id as u16).u16(static_mesh.mesh).u16(0).zeros(24);
	}
	for &tile in &level.textures {
		write_texture(&mut sections[pkd::section::TEXTURES], tile);
	}
	for seq in &level.sprite_sequences {
		sections[pkd::section::SPRITE_SEQUENCES].u16(seq.id as u16).i16(seq.count).u16(seq.start);
	}
	sections[pkd::section::ANIM_TEX_DATA].words(&level.anim_tex);
	for &kind in &level.items {
		write_item(&mut sections[pkd::section::ITEMS], kind);
	}
	let mut out = Out::new(endian);
	out.u32(pkd::MAGIC).u32(pkd::VERSION);
	let mut offset = pkd::HEADER_SIZE;
	for section in &sections {
		out.u32(offset as u32).u32(section.buf.len() as u32);
		offset += section.buf.len();
	}
	for section in &sections {
		out.buf.extend(&section.buf);
	}
	out.buf
}
