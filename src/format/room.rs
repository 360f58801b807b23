use std::io::Result;
use arrayvec::ArrayVec;
use glam::U16Vec2;
use tr_readable::Cursor;
use crate::{level::{Blob, Room}, LevelError};
use super::{check_capacity, read_table, stride};

pub(crate) fn read_room<'a>(cursor: &mut Cursor<'a>) -> Result<Room<'a>> {
	let info = cursor.read()?;
	let geometry = read_table::<u32>(cursor, 2)?;
	let portals = read_table::<u16>(cursor, stride::PORTAL)?;
	let sectors_size = cursor.read::<U16Vec2>()?;
	let sector_count = usize::from(sectors_size.x) * usize::from(sectors_size.y);
	let sectors = Blob::read(cursor, sector_count, stride::SECTOR)?;
	let ambient = cursor.read()?;
	let lights = read_table::<u16>(cursor, stride::LIGHT)?;
	let static_meshes = read_table::<u16>(cursor, stride::ROOM_STATIC_MESH)?;
	let alt_room = cursor.read()?;
	let flags = cursor.read()?;
	Ok(Room {
		info,
		geometry,
		portals,
		sectors_size,
		sectors,
		ambient,
		lights,
		static_meshes,
		alt_room,
		flags,
	})
}

pub(crate) fn read_rooms<'a, const N: usize>(
	cursor: &mut Cursor<'a>, count: usize, rooms: &mut ArrayVec<Room<'a>, N>,
) -> std::result::Result<(), LevelError> {
	check_capacity("room", count, N)?;
	for _ in 0..count {
		let room = read_room(cursor)?;
		rooms.try_push(room).map_err(|_| LevelError::Capacity { what: "room", count, max: N })?;
	}
	Ok(())
}
