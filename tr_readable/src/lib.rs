extern crate self as tr_readable;

mod cursor;
mod impls;

use std::io::Result;

pub use cursor::{Cursor, Endian};
pub use tr_derive::Readable;

/// A fixed-layout record decoded field by field from a [`Cursor`].
pub trait Readable: Sized {
	fn read(cursor: &mut Cursor<'_>) -> Result<Self>;
}
