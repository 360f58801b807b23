//! Screen brightness fade. Brightness relaxes toward zero from either side.

use crate::types::Palette;

/// Brightness units per elapsed frame, as a shift.
pub const FADING_RATE_SHIFT: u32 = 4;

/// Receives every brightness change along with the level palette.
pub trait PaletteSink {
	fn set_palette(&mut self, palette: &Palette, gamma: i32, brightness: i32);
}

impl<F: FnMut(&Palette, i32, i32)> PaletteSink for F {
	fn set_palette(&mut self, palette: &Palette, gamma: i32, brightness: i32) {
		self(palette, gamma, brightness)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fade {
	brightness: i32,
}

impl Fade {
	pub fn new(brightness: i32) -> Self {
		Self { brightness }
	}
	
	pub fn brightness(&self) -> i32 {
		self.brightness
	}
	
	pub fn set_brightness(&mut self, brightness: i32) {
		self.brightness = brightness;
	}
	
	pub fn is_active(&self) -> bool {
		self.brightness != 0
	}
	
	/// Advance by `frames`. Returns false, leaving everything untouched, when no fade is in progress.
	pub fn step(&mut self, frames: i32) -> bool {
		if self.brightness == 0 {
			return false;
		}
		let delta = frames.saturating_mul(1 << FADING_RATE_SHIFT);
		if self.brightness < 0 {
			self.brightness = self.brightness.saturating_add(delta).min(0);
		}
		if self.brightness > 0 {
			self.brightness = self.brightness.saturating_sub(delta).max(0);
		}
		true
	}
}
