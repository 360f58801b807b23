use crate::{
	anim_tex::{self, ANIM_TEX_PERIOD},
	fade::{Fade, PaletteSink},
	info::{LevelId, LevelInfo},
	level::{ItemObj, LevelData, Mesh, MeshRef, Room, Storage},
	types::{Model, StaticMesh, Texture},
	Settings,
};

/// One resident level and the state the per-frame update drives.
///
/// Everything borrowed from a level image lives as long as `'a`.
/// Loading another level resets and reuses the same storage.
pub struct World<'a> {
	pub(crate) level: LevelData<'a>,
	pub(crate) store: Storage<'a>,
	pub settings: Settings,
	level_id: LevelId,
	fade: Fade,
	/// Sectors allocated at runtime by floor/ceiling changes.
	pub dyn_sectors_count: usize,
	caustics_frame: i32,
	pub(crate) anim_tex_frame: i32,
}

impl<'a> World<'a> {
	pub fn new(settings: Settings) -> Box<Self> {
		Box::new(Self {
			level: LevelData::default(),
			store: Storage::new(),
			settings,
			level_id: LevelId::default(),
			fade: Fade::default(),
			dyn_sectors_count: 0,
			caustics_frame: 0,
			anim_tex_frame: 0,
		})
	}
	
	pub fn level(&self) -> &LevelData<'a> {
		&self.level
	}
	
	pub fn store(&self) -> &Storage<'a> {
		&self.store
	}
	
	pub fn level_id(&self) -> LevelId {
		self.level_id
	}
	
	pub fn set_level_id(&mut self, level_id: LevelId) {
		self.level_id = level_id;
	}
	
	pub fn level_info(&self) -> &'static LevelInfo {
		self.level_id.info()
	}
	
	pub fn ambient_track(&self) -> u8 {
		self.level_info().track
	}
	
	pub fn is_cutscene_level(&self) -> bool {
		self.level_id.is_cutscene()
	}
	
	/// Slot for `kind`. Unused slots read as [`Model::default`].
	pub fn model(&self, kind: usize) -> Option<&Model> {
		self.store.models.get(kind)
	}
	
	/// Slot for `id`. Unused slots read as [`StaticMesh::default`].
	pub fn static_mesh(&self, id: usize) -> Option<&StaticMesh> {
		self.store.static_meshes.get(id)
	}
	
	pub fn mesh(&self, index: usize) -> Option<Mesh<'a>> {
		let MeshRef { start, end } = *self.store.meshes.get(index)?;
		let mesh_data: &'a [u8] = self.level.mesh_data;
		let bytes = mesh_data.get(start as usize..end as usize)?;
		Some(Mesh::new(bytes, self.level.endian))
	}
	
	pub fn textures(&self) -> &[Texture] {
		&self.store.textures
	}
	
	pub fn rooms(&self) -> &[Room<'a>] {
		&self.store.rooms
	}
	
	pub fn items(&self) -> &[ItemObj] {
		&self.store.items
	}
	
	pub fn brightness(&self) -> i32 {
		self.fade.brightness()
	}
	
	/// Start a fade. Negative and positive values both relax toward zero.
	pub fn set_brightness(&mut self, brightness: i32) {
		self.fade.set_brightness(brightness);
	}
	
	pub fn caustics_frame(&self) -> i32 {
		self.caustics_frame
	}
	
	pub fn anim_tex_frame(&self) -> i32 {
		self.anim_tex_frame
	}
	
	pub fn update_fading<P: PaletteSink>(&mut self, frames: i32, palette: &mut P) {
		if self.fade.step(frames) {
			let gamma = i32::from(self.settings.video_gamma) << 4;
			palette.set_palette(&self.level.palette, gamma, self.fade.brightness());
		}
	}
	
	/// Advance per-frame state by `frames` elapsed frames.
	pub fn update_level<P: PaletteSink>(&mut self, frames: i32, palette: &mut P) {
		self.update_fading(frames, palette);
		self.caustics_frame = self.caustics_frame.wrapping_add(frames);
		let period = i64::from(ANIM_TEX_PERIOD);
		let phase = i64::from(self.anim_tex_frame) + i64::from(frames);
		//one pass for each period the phase is above the period
		let passes = match phase > period {
			true => (phase - 1) / period,
			false => 0,
		};
		anim_tex::shift_passes(&self.level.anim_tex_data, &mut self.store.textures, passes as u32);
		self.anim_tex_frame = i32::try_from(phase - passes * period).unwrap_or(i32::MIN);
	}
}
