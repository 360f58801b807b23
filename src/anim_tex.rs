//! Animated texture cycling.
//!
//! The instruction stream is `range_count` followed by that many ranges. Each range is `count` and then
//! `count + 1` texture slots. One pass rotates every range left by one slot.

use std::io::{Error, ErrorKind};
use arrayvec::ArrayVec;
use crate::{types::Texture, LevelError, MAX_TEXTURES};

/// Animation ticks per cycling pass.
pub const ANIM_TEX_PERIOD: i32 = 5;

/// Split one range off the stream, returning its slots and the rest of the stream.
fn next_range(data: &[u16]) -> Option<(&[u16], &[u16])> {
	let (&count, rest) = data.split_first()?;
	let len = usize::from(count) + 1;
	match rest.len() >= len {
		true => Some(rest.split_at(len)),
		false => None,
	}
}

/// Check the stream is whole and only names existing textures.
pub fn validate(stream: &[u16], texture_count: usize) -> Result<(), LevelError> {
	let truncated = || Error::new(ErrorKind::UnexpectedEof, "truncated animated texture stream");
	let Some((&num_ranges, mut data)) = stream.split_first() else {
		return Ok(());
	};
	for _ in 0..num_ranges {
		let (slots, rest) = next_range(data).ok_or_else(truncated)?;
		if let Some(&texture) = slots.iter().find(|&&slot| usize::from(slot) >= texture_count) {
			return Err(LevelError::AnimTexture { texture: usize::from(texture), count: texture_count });
		}
		data = rest;
	}
	Ok(())
}

/// Run one cycling pass. `stream` must have passed [`validate`] against `slots`.
pub fn shift<T: Copy>(stream: &[u16], slots: &mut [T]) {
	let Some((&num_ranges, mut data)) = stream.split_first() else {
		return;
	};
	for _ in 0..num_ranges {
		let Some((range, rest)) = next_range(data) else {
			return;
		};
		let first = slots[usize::from(range[0])];
		for pair in range.windows(2) {
			slots[usize::from(pair[0])] = slots[usize::from(pair[1])];
		}
		slots[usize::from(range[range.len() - 1])] = first;
		data = rest;
	}
}

type SourceMap = ArrayVec<u16, MAX_TEXTURES>;

/// Apply `a`, then `b`.
fn compose(a: &SourceMap, b: &SourceMap) -> SourceMap {
	b.iter().map(|&i| a[usize::from(i)]).collect()
}

/// Run `passes` cycling passes at once.
///
/// One pass is a map from each slot to the slot it copies from. That map is raised to `passes` by squaring.
pub fn shift_passes(stream: &[u16], textures: &mut ArrayVec<Texture, MAX_TEXTURES>, mut passes: u32) {
	if passes <= 1 {
		if passes == 1 {
			shift(stream, textures);
		}
		return;
	}
	let identity = (0..textures.len()).map(|i| i as u16).collect::<SourceMap>();
	let mut step = identity.clone();
	shift(stream, &mut step);
	let mut total = identity;
	while passes > 0 {
		if passes & 1 == 1 {
			total = compose(&total, &step);
		}
		step = compose(&step, &step);
		passes >>= 1;
	}
	let source = textures.clone();
	for (texture, &from) in textures.iter_mut().zip(&total) {
		*texture = source[usize::from(from)];
	}
}

#[cfg(test)]
mod tests {
	use arrayvec::ArrayVec;
	use crate::{types::Texture, LevelError, MAX_TEXTURES};
	use super::{shift, shift_passes, validate};

	fn textures(tiles: &[u16]) -> Vec<Texture> {
		tiles.iter().map(|&tile| Texture { tile, ..Default::default() }).collect()
	}

	fn tiles(textures: &[Texture]) -> Vec<u16> {
		textures.iter().map(|texture| texture.tile).collect()
	}

	#[test]
	fn rotates_range_left() {
		let stream = [1, 2, 0, 1, 2];
		let mut textures = textures(&[10, 11, 12]);
		shift(&stream, &mut textures);
		assert_eq!(tiles(&textures), [11, 12, 10]);
		shift(&stream, &mut textures);
		assert_eq!(tiles(&textures), [12, 10, 11]);
		shift(&stream, &mut textures);
		assert_eq!(tiles(&textures), [10, 11, 12]);
	}

	#[test]
	fn ranges_follow_their_slot_lists() {
		//slots need not be contiguous or ordered
		let stream = [2, 1, 4, 1, 2, 5, 0, 3];
		let mut textures = textures(&[0, 1, 2, 3, 4, 5]);
		shift(&stream, &mut textures);
		assert_eq!(tiles(&textures), [3, 4, 2, 5, 1, 0]);
	}

	#[test]
	fn single_slot_range_is_unchanged() {
		let stream = [1, 0, 2];
		let mut textures = textures(&[7, 8, 9]);
		shift(&stream, &mut textures);
		assert_eq!(tiles(&textures), [7, 8, 9]);
	}

	#[test]
	fn batched_passes_match_single_passes() {
		//two ranges sharing slot 2
		let stream = [2, 2, 0, 1, 2, 1, 2, 3];
		let start = textures(&[0, 1, 2, 3, 4]);
		let mut stepped = start.clone();
		for passes in 0..40 {
			let mut batched = start.iter().copied().collect::<ArrayVec<Texture, MAX_TEXTURES>>();
			shift_passes(&stream, &mut batched, passes);
			assert_eq!(tiles(&batched), tiles(&stepped), "after {} passes", passes);
			shift(&stream, &mut stepped);
		}
	}

	#[test]
	fn empty_stream_is_valid() {
		assert!(validate(&[], 0).is_ok());
		assert!(validate(&[0], 0).is_ok());
		let mut textures = textures(&[1, 2]);
		shift(&[], &mut textures);
		assert_eq!(tiles(&textures), [1, 2]);
	}

	#[test]
	fn validate_rejects_missing_texture() {
		let err = validate(&[1, 1, 0, 3], 3).unwrap_err();
		assert!(matches!(err, LevelError::AnimTexture { texture: 3, count: 3 }));
	}

	#[test]
	fn validate_rejects_truncated_stream() {
		assert!(matches!(validate(&[2, 1, 0, 1], 4), Err(LevelError::Io(_))));
		assert!(matches!(validate(&[1, 3, 0, 1], 4), Err(LevelError::Io(_))));
	}
}
