use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use fell_core::mapgen::perimeter_coords;
use fell_core::rooms::audit;
use fell_core::{
    Chunk, GeneratedLevel, GeneratorConfig, LevelGenerator, NoEvents, Pos, RoomCoord,
    RoomTemplate, RoomType, TemplateLibrary, TemplateSource, World,
};
use proptest::prelude::*;
use tempfile::tempdir;

fn render_template(template: &RoomTemplate) -> String {
    let size = template.size() as i32;
    let mut text = String::from("; exported for tests\n");
    for y in (0..size).rev() {
        for x in 0..size {
            text.push(template.tile_at(Pos { y, x }).symbol());
        }
        text.push('\n');
    }
    text
}

fn export_library(library: &TemplateLibrary, root: &Path) {
    for (_, template) in library.iter() {
        let path = root.join(format!("{}.txt", template.name()));
        fs::create_dir_all(path.parent().expect("template path has a parent")).unwrap();
        fs::write(path, render_template(template)).unwrap();
    }
    fs::write(root.join("Solid.txt"), render_template(library.solid())).unwrap();
}

fn generate(library: &TemplateLibrary, config: GeneratorConfig, seed: i32) -> (World, GeneratedLevel) {
    let mut world = World::new(config.chunk_size);
    let generator = LevelGenerator::new(library, config).expect("valid config");
    let level = generator.generate(&mut world, Some(seed), &mut NoEvents).expect("level generates");
    (world, level)
}

#[test]
fn test_directory_library_generates_same_level_as_builtin() {
    let builtin = TemplateLibrary::builtin().expect("built-in templates");
    let dir = tempdir().unwrap();
    export_library(&builtin, dir.path());

    let loaded = TemplateLibrary::load_dir(dir.path(), builtin.chunk_size()).expect("exported library loads");
    assert_eq!(loaded, builtin);
    assert!(audit(&loaded).is_empty());

    let (world_a, level_a) = generate(&builtin, GeneratorConfig::default(), 31);
    let (world_b, level_b) = generate(&loaded, GeneratorConfig::default(), 31);
    assert_eq!(level_a, level_b);
    assert_eq!(world_a, world_b);
}

#[test]
fn test_certain_spawns_fill_each_room_to_the_row_cap() {
    let library = TemplateLibrary::builtin().expect("built-in templates");
    let config = GeneratorConfig { mob_spawn_probability_percent: 100, ..GeneratorConfig::default() };
    let (world, level) = generate(&library, config, 8_080);

    for y in 0..level.level_height as i32 {
        let cap = level.mob_cap_for_row(y).expect("row has a cap");
        for x in 0..level.level_width as i32 {
            let room = RoomCoord::new(x, y);
            let placed = level.enemies_in(room).count();
            if room == level.start_room() {
                assert_eq!(placed, 0);
                continue;
            }
            let chunk = world.chunk(room).expect("room chunk is committed");
            let available = chunk.standable_tiles().count();
            assert_eq!(placed, available.min(cap as usize), "room {room:?}");
        }
    }
}

#[test]
fn test_wide_levels_keep_perimeter_and_bounds() {
    let library = TemplateLibrary::builtin().expect("built-in templates");
    let config = GeneratorConfig { level_width: 6, level_height: 3, ..GeneratorConfig::default() };
    let (world, level) = generate(&library, config, -404);

    assert_eq!(level.bounds.width, 96);
    assert_eq!(level.bounds.height, 48);
    assert_eq!(level.room_types.len(), 18);
    assert_eq!(level.mob_caps, vec![2, 3, 4]);
    assert_eq!(world.len(), 18 + 2 * (6 + 3) + 4);
    for coord in perimeter_coords(6, 3) {
        assert!(world.chunk(coord).is_some_and(Chunk::is_fully_impassable), "{coord:?}");
    }
}

#[test]
fn test_untouched_rooms_still_receive_a_type_and_template() {
    let library = TemplateLibrary::builtin().expect("built-in templates");
    let (world, level) = generate(&library, GeneratorConfig::default(), 77);

    for y in 0..4 {
        for x in 0..4 {
            let room = RoomCoord::new(x, y);
            let room_type = level.room_type(room).expect("every room has a type");
            let chunk = world.chunk(room).expect("every room is materialized");
            let matches_template = library
                .templates(room_type)
                .iter()
                .any(|template| template.tiles().iter().enumerate().all(|(index, &tile)| {
                    let pos = Pos { y: (index / 16) as i32, x: (index % 16) as i32 };
                    chunk.tile_at(pos) == tile
                }));
            assert!(matches_template, "room {room:?} does not match a {room_type:?} template");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_path_rooms_support_required_exits(seed in any::<i32>(), width in 1_usize..7, height in 1_usize..7) {
        let library = TemplateLibrary::builtin().expect("built-in templates");
        let config = GeneratorConfig { level_width: width, level_height: height, ..GeneratorConfig::default() };
        let (world, level) = generate(&library, config, seed);

        let mut seen = BTreeSet::new();
        for entry in level.path.entries() {
            prop_assert!(seen.insert(entry.room), "room {:?} visited twice", entry.room);
            if let Some(room_type) = level.room_type(entry.room) {
                prop_assert!(entry.exits.is_subset(room_type.exits()));
                prop_assert_ne!(room_type, RoomType::Arbitrary);
            }
        }
        let last = level.path.entries().last().expect("path is not empty");
        prop_assert_eq!(last.room.y, -1);

        let spawn = level.player.position.tile();
        prop_assert!(world.is_passable(spawn.x, spawn.y));
        prop_assert!(!world.is_passable(spawn.x, spawn.y - 1));
    }
}
