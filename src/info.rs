//! Static per-level metadata.

pub mod track {
	pub const NONE: u8 = 0;
	pub const TITLE: u8 = 2;
	pub const CAVES: u8 = 5;
	pub const CUT_4: u8 = 22;
	pub const CUT_1: u8 = 23;
	pub const CUT_3: u8 = 24;
	pub const CUT_2: u8 = 25;
	pub const CISTERN: u8 = 57;
	pub const WIND: u8 = 58;
	pub const PYRAMID: u8 = 59;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LevelId {
	#[default]
	Title,
	Gym,
	Level1,
	Level2,
	Level3A,
	Level3B,
	Cut1,
	Level4,
	Level5,
	Level6,
	Level7A,
	Level7B,
	Cut2,
	Level8A,
	Level8B,
	Level8C,
	Level10A,
	Cut3,
	Level10B,
	Cut4,
	Level10C,
	Egypt,
	Cat,
	End,
	End2,
}

#[derive(Clone, Copy, Debug)]
pub struct LevelInfo {
	/// File stem of the level image.
	pub name: &'static str,
	pub title: &'static str,
	/// Ambient music track.
	pub track: u8,
}

macro_rules! level_info {
	($($name:literal, $title:literal, $track:ident;)*) => {
		[$(LevelInfo { name: $name, title: $title, track: track::$track },)*]
	};
}

/// Indexed by `LevelId`.
pub const LEVEL_INFO: [LevelInfo; LevelId::COUNT] = level_info! {
	"TITLE", "", TITLE;
	"GYM", "Lara's Home", NONE;
	"LEVEL1", "Caves", CAVES;
	"LEVEL2", "City of Vilcabamba", CAVES;
	"LEVEL3A", "Lost Valley", CAVES;
	"LEVEL3B", "Tomb of Qualopec", CAVES;
	"CUT1", "", CUT_1;
	"LEVEL4", "St. Francis' Folly", WIND;
	"LEVEL5", "Colosseum", WIND;
	"LEVEL6", "Palace Midas", WIND;
	"LEVEL7A", "The Cistern", CISTERN;
	"LEVEL7B", "Tomb of Tihocan", CISTERN;
	"CUT2", "", CUT_2;
	"LEVEL8A", "City of Khamoon", WIND;
	"LEVEL8B", "Obelisk of Khamoon", WIND;
	"LEVEL8C", "Sanctuary of the Scion", PYRAMID;
	"LEVEL10A", "Natla's Mines", WIND;
	"CUT3", "", CUT_3;
	"LEVEL10B", "Atlantis", PYRAMID;
	"CUT4", "", CUT_4;
	"LEVEL10C", "The Great Pyramid", PYRAMID;
	"EGYPT", "Return to Egypt", WIND;
	"CAT", "Temple of the Cat", WIND;
	"END", "Atlantean Stronghold", PYRAMID;
	"END2", "The Hive", PYRAMID;
};

impl LevelId {
	pub const COUNT: usize = 25;
	
	pub fn info(self) -> &'static LevelInfo {
		&LEVEL_INFO[self as usize]
	}
	
	pub fn is_cutscene(self) -> bool {
		matches!(self, LevelId::Cut1 | LevelId::Cut2 | LevelId::Cut3 | LevelId::Cut4)
	}
}
