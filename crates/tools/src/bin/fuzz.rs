use anyhow::{Result, ensure};
use clap::Parser;
use fell_core::mapgen::perimeter_coords;
use fell_core::{
    Chunk, GeneratorConfig, LevelGenerator, NoEvents, TemplateLibrary, TemplateSource, World,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    levels: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting level fuzz from seed {} for {} levels...", args.seed, args.levels);
    let library = TemplateLibrary::builtin()?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.levels {
        let level_seed = rng.next_u64() as u32 as i32;
        let config = GeneratorConfig {
            level_width: choose(&mut rng, &[1, 2, 4, 4, 6]),
            level_height: choose(&mut rng, &[1, 3, 4, 4, 5]),
            mob_spawn_probability_percent: choose(&mut rng, &[0, 5, 5, 25, 100]),
            chunk_size: library.chunk_size(),
            ..GeneratorConfig::default()
        };

        let generator = LevelGenerator::new(&library, config.clone())?;
        let mut world = World::new(config.chunk_size);
        let level = generator.generate(&mut world, Some(level_seed), &mut NoEvents)?;
        let mut replay_world = World::new(config.chunk_size);
        let replay = generator.generate(&mut replay_world, Some(level_seed), &mut NoEvents)?;

        // Assert invariants
        ensure!(level.fingerprint() == replay.fingerprint(), "seed {level_seed}: not deterministic");
        ensure!(world == replay_world, "seed {level_seed}: worlds differ between runs");

        for entry in level.path.entries() {
            if let Some(room_type) = level.room_type(entry.room) {
                ensure!(
                    entry.exits.is_subset(room_type.exits()),
                    "seed {level_seed}: room {:?} typed {:?} lacks exits {:?}",
                    entry.room,
                    room_type,
                    entry.exits
                );
            }
        }

        let spawn = level.player.position.tile();
        ensure!(
            world.is_passable(spawn.x, spawn.y) && !world.is_passable(spawn.x, spawn.y - 1),
            "seed {level_seed}: player spawned on unstandable tile {spawn:?}"
        );

        for coord in perimeter_coords(config.level_width, config.level_height) {
            ensure!(
                world.chunk(coord).is_some_and(Chunk::is_fully_impassable),
                "seed {level_seed}: perimeter chunk {coord:?} is open"
            );
        }

        ensure!(
            level.mob_caps.windows(2).all(|pair| pair[0] <= pair[1]),
            "seed {level_seed}: mob caps decrease"
        );
        for enemy in &level.enemies {
            let cap = level.mob_cap_for_row(enemy.room.y).unwrap_or(0) as usize;
            ensure!(
                level.enemies_in(enemy.room).count() <= cap,
                "seed {level_seed}: room {:?} exceeds its cap of {cap}",
                enemy.room
            );
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
