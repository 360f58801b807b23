mod common;

use common::{init_logger, LevelDef};
use tr_world::{types::Palette, LevelError, Settings, World};

fn tiles(world: &World) -> Vec<u16> {
	world.textures().iter().map(|t| t.tile).collect()
}

fn cycling_level() -> Vec<u8> {
	common::phd(&LevelDef {
		textures: vec![10, 11, 12, 13],
		//one range over textures 0, 1 and 2
		anim_tex: vec![1, 2, 0, 1, 2],
		..Default::default()
	})
}

#[test]
fn textures_cycle_every_period() {
	init_logger();
	let data = cycling_level();
	let mut world = World::new(Settings::default());
	world.read_level(&data).unwrap();
	let mut ignore = |_: &Palette, _: i32, _: i32| {};
	world.update_level(5, &mut ignore);
	assert_eq!(tiles(&world), [10, 11, 12, 13]);
	assert_eq!(world.anim_tex_frame(), 5);
	world.update_level(1, &mut ignore);
	assert_eq!(tiles(&world), [11, 12, 10, 13]);
	assert_eq!(world.anim_tex_frame(), 1);
}

#[test]
fn long_frame_runs_several_passes() {
	init_logger();
	let data = cycling_level();
	let mut world = World::new(Settings::default());
	world.read_level(&data).unwrap();
	world.update_level(12, &mut |_: &Palette, _: i32, _: i32| {});
	assert_eq!(tiles(&world), [12, 10, 11, 13]);
	assert_eq!(world.anim_tex_frame(), 2);
	assert_eq!(world.caustics_frame(), 12);
}

#[test]
fn huge_frame_counts_keep_the_phase() {
	init_logger();
	let data = cycling_level();
	let mut world = World::new(Settings::default());
	world.read_level(&data).unwrap();
	let mut ignore = |_: &Palette, _: i32, _: i32| {};
	world.update_level(5, &mut ignore);
	world.update_level(i32::MAX, &mut ignore);
	//5 + i32::MAX frames is 429496730 passes, two past a multiple of the range length
	assert_eq!(tiles(&world), [12, 10, 11, 13]);
	assert_eq!(world.anim_tex_frame(), 2);
	world.update_level(4, &mut ignore);
	assert_eq!(tiles(&world), [10, 11, 12, 13]);
	assert_eq!(world.anim_tex_frame(), 1);
}

#[test]
fn anim_tex_past_textures_is_rejected() {
	init_logger();
	let data = common::phd(&LevelDef {
		textures: vec![0, 1],
		anim_tex: vec![1, 1, 0, 2],
		..Default::default()
	});
	let mut world = World::new(Settings::default());
	let result = world.read_level(&data);
	assert!(matches!(result, Err(LevelError::AnimTexture { texture: 2, count: 2 })));
}

#[test]
fn fade_pushes_palette_until_rest() {
	init_logger();
	let data = common::phd(&LevelDef { accent: [1, 2, 3], ..Default::default() });
	let mut world = World::new(Settings { video_gamma: 2, ..Default::default() });
	world.read_level(&data).unwrap();
	world.set_brightness(40);
	let mut calls = vec![];
	let mut sink = |palette: &Palette, gamma: i32, brightness: i32| {
		assert_eq!((palette.0[1].r, palette.0[1].g, palette.0[1].b), (1, 2, 3));
		calls.push((gamma, brightness));
	};
	for _ in 0..4 {
		world.update_level(1, &mut sink);
	}
	assert_eq!(calls, [(32, 24), (32, 8), (32, 0)]);
	assert_eq!(world.brightness(), 0);
}

#[test]
fn negative_fade_rises() {
	let mut world = World::new(Settings::default());
	world.set_brightness(-20);
	let mut seen = vec![];
	world.update_fading(1, &mut |_: &Palette, _: i32, brightness: i32| seen.push(brightness));
	world.update_fading(1, &mut |_: &Palette, _: i32, brightness: i32| seen.push(brightness));
	assert_eq!(seen, [-4, 0]);
}
