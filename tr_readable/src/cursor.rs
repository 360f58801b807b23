use std::io::{Error, ErrorKind, Result};
use byteorder::{ByteOrder, BE, LE};
use num_traits::AsPrimitive;
use crate::Readable;

/// Byte order of the data being read. The host order does not matter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endian {
	#[default]
	Little,
	Big,
}

/// Reader over a borrowed byte buffer. Never allocates; raw blocks borrow from the buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
	endian: Endian,
}

macro_rules! impl_read_int {
	($name:ident, $type:ty, $func:ident) => {
		pub fn $name(&mut self) -> Result<$type> {
			let bytes = self.read_bytes(std::mem::size_of::<$type>())?;
			Ok(match self.endian {
				Endian::Little => LE::$func(bytes),
				Endian::Big => BE::$func(bytes),
			})
		}
	};
}

impl<'a> Cursor<'a> {
	pub fn new(data: &'a [u8], pos: usize) -> Self {
		Self {
			data,
			pos,
			endian: Endian::Little,
		}
	}
	
	pub fn with_endian(mut self, endian: Endian) -> Self {
		self.endian = endian;
		self
	}
	
	pub fn set_endian(&mut self, endian: Endian) {
		self.endian = endian;
	}
	
	pub fn endian(&self) -> Endian {
		self.endian
	}
	
	pub fn position(&self) -> usize {
		self.pos
	}
	
	pub fn set_position(&mut self, pos: usize) {
		self.pos = pos;
	}
	
	pub fn data(&self) -> &'a [u8] {
		self.data
	}
	
	pub fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.pos)
	}
	
	/// Borrow the next `len` bytes and advance past them.
	pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
		let end = self.pos
			.checked_add(len)
			.filter(|&end| end <= self.data.len())
			.ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, "read past end of level data"))?;
		let bytes = &self.data[self.pos..end];
		self.pos = end;
		Ok(bytes)
	}
	
	pub fn skip(&mut self, len: usize) -> Result<()> {
		self.read_bytes(len).map(|_| ())
	}
	
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_bytes(1)?[0])
	}
	
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(self.read_u8()? as i8)
	}
	
	impl_read_int!(read_u16, u16, read_u16);
	impl_read_int!(read_i16, i16, read_i16);
	impl_read_int!(read_u32, u32, read_u32);
	impl_read_int!(read_i32, i32, read_i32);
	
	pub fn read<T: Readable>(&mut self) -> Result<T> {
		T::read(self)
	}
	
	/// Read an item count stored as `L`.
	pub fn read_len<L: Readable + AsPrimitive<usize>>(&mut self) -> Result<usize> {
		Ok(L::read(self)?.as_())
	}
}
