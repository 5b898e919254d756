use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fell_core::{
    GeneratedLevel, GeneratorConfig, LevelEvent, LevelGenerator, Roster, TemplateLibrary, World,
};

#[derive(Parser)]
#[command(author, version, about = "Generate one level and print it", long_about = None)]
struct Args {
    /// Level seed; drawn at random when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,
    /// Generator configuration (`.toml` or `.json`)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Room template directory with `type0/`..`type4/` and `Solid.txt`
    #[arg(short, long)]
    templates: Option<PathBuf>,
    /// Print the generated level as JSON instead of a tile map
    #[arg(long)]
    json: bool,
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    if path.extension().is_some_and(|extension| extension == "toml") {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        return toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()));
    }
    GeneratorConfig::load(path)
        .with_context(|| format!("Failed to load JSON config: {}", path.display()))
}

fn render(world: &World, level: &GeneratedLevel) -> String {
    let size = level.chunk_size as i32;
    let player_tile = level.player.position.tile();
    let mut out = String::new();
    for y in (-size..level.bounds.height + size).rev() {
        for x in -size..level.bounds.width + size {
            let symbol = if player_tile.x == x && player_tile.y == y {
                '@'
            } else if let Some(enemy) = level.enemies.iter().find(|enemy| {
                let tile = enemy.position.tile();
                tile.x == x && tile.y == y
            }) {
                enemy.archetype.chars().next().map_or('?', |c| c.to_ascii_uppercase())
            } else {
                world.tile(x, y).symbol()
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    log::debug!("using {config:?}");
    let library = match &args.templates {
        Some(dir) => TemplateLibrary::load_dir(dir, config.chunk_size)
            .with_context(|| format!("Failed to load room templates from {}", dir.display()))?,
        None => TemplateLibrary::builtin().context("Built-in room templates are invalid")?,
    };

    let generator = LevelGenerator::new(&library, config.clone())
        .context("Invalid generator configuration")?;
    let mut world = World::new(config.chunk_size);
    let mut events: Vec<LevelEvent> = Vec::new();
    let level = generator
        .generate(&mut world, args.seed, &mut events)
        .context("Level generation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    print!("{}", render(&world, &level));
    println!("Seed: {}", level.seed);
    println!("Start room: ({}, {})", level.start_room().x, level.start_room().y);
    println!("Player: ({:.2}, {:.2})", level.player.position.x, level.player.position.y);
    let roster = Roster::from_level(&level);
    println!("Enemies: {}", roster.enemies().count());
    for enemy in roster.enemies() {
        println!("  {:?} in room ({}, {})", enemy.kind, enemy.room.x, enemy.room.y);
    }
    println!("Events: {events:?}");
    println!("Fingerprint: {:016x}", level.fingerprint());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fell_core::generate_level;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_config_accepts_partial_toml_and_json() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("level.toml");
        fs::write(&toml_path, "level_width = 5\nmob_spawn_probability_percent = 10\n").unwrap();
        let config = load_config(&toml_path).expect("toml config loads");
        assert_eq!(config.level_width, 5);
        assert_eq!(config.level_height, 4);
        assert_eq!(config.mob_spawn_probability_percent, 10);

        let json_path = dir.path().join("level.json");
        fs::write(&json_path, r#"{ "level_height": 2 }"#).unwrap();
        let config = load_config(&json_path).expect("json config loads");
        assert_eq!(config.level_height, 2);
        assert_eq!(config.level_width, 4);
    }

    #[test]
    fn render_marks_player_and_includes_perimeter() {
        let mut world = World::default();
        let level = generate_level(&mut world, Some(3)).unwrap();
        let map = render(&world, &level);

        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows.len(), 96);
        assert!(rows.iter().all(|row| row.chars().count() == 96));
        assert_eq!(map.matches('@').count(), 1);
        assert!(rows[0].chars().all(|c| c == '#'));
    }
}
