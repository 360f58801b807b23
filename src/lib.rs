pub mod anim_tex;
mod assemble;
mod error;
pub mod fade;
pub mod format;
pub mod info;
pub mod level;
mod settings;
pub mod types;
mod world;

pub use error::LevelError;
pub use settings::Settings;
pub use tr_readable::{Cursor, Endian};
pub use world::World;

pub const MAX_ROOMS: usize = 139;
/// Item types in the TR1 object table. Sprite sequences past this are not item types.
pub const ITEM_TYPE_COUNT: usize = 191;
/// One model slot per item type.
pub const MAX_MODELS: usize = ITEM_TYPE_COUNT;
pub const MAX_MESHES: usize = 512;
pub const MAX_STATIC_MESHES: usize = 50;
pub const MAX_TEXTURES: usize = 1536;
pub const MAX_SPRITES: usize = 180;
pub const MAX_SPRITE_SEQUENCES: usize = 64;
pub const MAX_CAMERAS: usize = 16;
pub const MAX_BOXES: usize = 1024;
pub const MAX_ITEMS: usize = 256;
/// Words in the animated texture instruction stream.
pub const MAX_ANIM_TEX_DATA: usize = 512;
