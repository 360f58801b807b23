use tr_readable::Endian;

#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
	/// Shifted left by 4 before it reaches the palette.
	pub video_gamma: u8,
	/// Byte order of level images.
	pub source_endian: Endian,
}
