use std::io::{Error, ErrorKind, Result};
use arrayvec::ArrayVec;
use glam::{I16Vec2, I16Vec3, IVec3, U16Vec2};
use nonmax::NonMaxU16;
use crate::{Cursor, Readable};

//primitive impls

macro_rules! impl_readable_prim {
	($type:ty, $func:ident) => {
		impl Readable for $type {
			fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
				cursor.$func()
			}
		}
	};
}

impl_readable_prim!(u8, read_u8);
impl_readable_prim!(i8, read_i8);
impl_readable_prim!(u16, read_u16);
impl_readable_prim!(i16, read_i16);
impl_readable_prim!(u32, read_u32);
impl_readable_prim!(i32, read_i32);

//array impl

impl<T: Readable, const N: usize> Readable for [T; N] {
	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut array = ArrayVec::<T, N>::new();
		for _ in 0..N {
			array.push(T::read(cursor)?);
		}
		array.into_inner().map_err(|_| Error::new(ErrorKind::InvalidData, "short array"))
	}
}

//nonmax impl, max value means none

impl Readable for Option<NonMaxU16> {
	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(NonMaxU16::new(cursor.read_u16()?))
	}
}

//glam impls

macro_rules! impl_readable_glam {
	($type:ty, $array:ty) => {
		impl Readable for $type {
			fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
				Ok(<$array>::read(cursor)?.into())
			}
		}
	};
}

impl_readable_glam!(U16Vec2, [u16; 2]);
impl_readable_glam!(I16Vec2, [i16; 2]);
impl_readable_glam!(I16Vec3, [i16; 3]);
impl_readable_glam!(IVec3, [i32; 3]);
