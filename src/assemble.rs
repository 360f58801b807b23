use log::{debug, error, info};
use tr_readable::Cursor;
use crate::{
	anim_tex,
	format::Format,
	level::{LevelData, MeshRef},
	LevelError, World, ITEM_TYPE_COUNT, MAX_MESHES, MAX_MODELS, MAX_STATIC_MESHES,
};

impl<'a> World<'a> {
	/// Decode `data` and build the resident level from it.
	///
	/// All or nothing: after an error the world is left empty and must be loaded again.
	pub fn read_level(&mut self, data: &'a [u8]) -> Result<(), LevelError> {
		self.dyn_sectors_count = 0;
		self.anim_tex_frame = 0;
		match self.assemble(data) {
			Ok(format) => {
				info!(
					"loaded {} level: {} rooms, {} models, {} meshes, {} static meshes, {} textures, {} items",
					format,
					self.store.rooms.len(),
					self.level.models.len(),
					self.store.meshes.len(),
					self.level.static_meshes.len(),
					self.store.textures.len(),
					self.store.items.len(),
				);
				Ok(())
			},
			Err(e) => {
				self.level = LevelData::default();
				self.store.clear();
				Err(e)
			},
		}
	}
	
	fn assemble(&mut self, data: &'a [u8]) -> Result<Format, LevelError> {
		let mut cursor = Cursor::new(data, 0).with_endian(self.settings.source_endian);
		let format = self.read_level_stream(&mut cursor)?;
		self.level.format = Some(format);
		self.level.endian = cursor.endian();
		self.remap_models()?;
		self.resolve_meshes()?;
		self.remap_static_meshes()?;
		self.graft_sprite_sequences();
		anim_tex::validate(&self.level.anim_tex_data, self.store.textures.len())?;
		Ok(format)
	}
	
	/// Hand the data to each compiled-in decoder in priority order until one accepts it.
	fn read_level_stream(&mut self, cursor: &mut Cursor<'a>) -> Result<Format, LevelError> {
		for &format in Format::PRIORITY {
			cursor.set_position(0);
			self.level = LevelData::default();
			self.store.clear();
			match format.try_decode(cursor, &mut self.level, &mut self.store) {
				Ok(()) => return Ok(format),
				Err(e) if e.is_fatal() => {
					error!("{} level rejected: {}", format, e);
					return Err(e);
				},
				Err(e) => debug!("not a {} level: {}", format, e),
			}
		}
		error!("unsupported level format");
		Err(LevelError::UnsupportedFormat)
	}
	
	/// Index models by type. Later duplicates overwrite earlier ones.
	fn remap_models(&mut self) -> Result<(), LevelError> {
		self.store.models.fill(Default::default());
		for model in &self.level.models {
			let id = usize::from(model.kind);
			let slot = self.store.models
				.get_mut(id)
				.ok_or(LevelError::IdOutOfRange { what: "model", id, max: MAX_MODELS })?;
			*slot = *model;
		}
		Ok(())
	}
	
	/// Turn the mesh offset table into byte ranges of the mesh arena.
	fn resolve_meshes(&mut self) -> Result<(), LevelError> {
		let len = self.level.mesh_data.len();
		let offsets = &self.level.mesh_offsets;
		if let Some((index, &offset)) = offsets.iter().enumerate().find(|&(_, &offset)| offset as usize > len) {
			return Err(LevelError::MeshOffset { index, offset, len });
		}
		let mut sorted = offsets.clone();
		sorted.sort_unstable();
		self.store.meshes.clear();
		for &offset in offsets {
			//a mesh runs up to the next mesh that starts after it
			let end = sorted
				.get(sorted.partition_point(|&o| o <= offset))
				.copied()
				.unwrap_or(len as u32);
			self.store.meshes
				.try_push(MeshRef { start: offset, end })
				.map_err(|_| LevelError::Capacity { what: "mesh", count: offsets.len(), max: MAX_MESHES })?;
		}
		Ok(())
	}
	
	/// Index static meshes by id. Later duplicates overwrite earlier ones.
	fn remap_static_meshes(&mut self) -> Result<(), LevelError> {
		self.store.static_meshes.fill(Default::default());
		for static_mesh in &self.level.static_meshes {
			let id = usize::from(static_mesh.id);
			let slot = self.store.static_meshes
				.get_mut(id)
				.ok_or(LevelError::IdOutOfRange { what: "static mesh", id, max: MAX_STATIC_MESHES })?;
			*slot = *static_mesh;
		}
		Ok(())
	}
	
	/// Copy sprite frame ranges onto the model slots of their item types.
	fn graft_sprite_sequences(&mut self) {
		for sprite_seq in &self.level.sprite_sequences {
			let kind = usize::from(sprite_seq.kind);
			//some shipped levels carry sequences past the item types
			if kind >= ITEM_TYPE_COUNT {
				debug!("skipping sprite sequence of type {}", kind);
				continue;
			}
			let model = &mut self.store.models[kind];
			model.count = sprite_seq.count;
			model.start = sprite_seq.start;
		}
	}
}
