//! Room template sources: the built-in set and directory-backed libraries.

use std::fs;
use std::path::Path;

use crate::error::TemplateError;
use crate::world::DEFAULT_CHUNK_SIZE;

use super::RoomType;
use super::template::RoomTemplate;

/// Supplies, per room type, the interchangeable templates the generator may
/// instantiate, plus the solid block used to seal the level perimeter.
pub trait TemplateSource {
    fn chunk_size(&self) -> usize;
    fn templates(&self, room_type: RoomType) -> &[RoomTemplate];
    fn solid(&self) -> &RoomTemplate;
}

const BUILTIN_SOLID: &str = include_str!("../../rooms/Solid.txt");

const BUILTIN_ROOMS: &[(RoomType, &str, &str)] = &[
    (RoomType::Arbitrary, "type0/closed_a", include_str!("../../rooms/type0/closed_a.txt")),
    (RoomType::Arbitrary, "type0/closed_b", include_str!("../../rooms/type0/closed_b.txt")),
    (RoomType::LeftRight, "type1/corridor_a", include_str!("../../rooms/type1/corridor_a.txt")),
    (RoomType::LeftRight, "type1/corridor_b", include_str!("../../rooms/type1/corridor_b.txt")),
    (RoomType::LeftRightDown, "type2/drop_a", include_str!("../../rooms/type2/drop_a.txt")),
    (RoomType::LeftRightDown, "type2/drop_b", include_str!("../../rooms/type2/drop_b.txt")),
    (RoomType::LeftRightUp, "type3/climb_a", include_str!("../../rooms/type3/climb_a.txt")),
    (RoomType::LeftRightUp, "type3/climb_b", include_str!("../../rooms/type3/climb_b.txt")),
    (RoomType::AllFour, "type4/cross_a", include_str!("../../rooms/type4/cross_a.txt")),
    (RoomType::AllFour, "type4/cross_b", include_str!("../../rooms/type4/cross_b.txt")),
];

/// Parsed templates grouped by room type. Parsing happens once, when the
/// library is built; the generator only borrows from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateLibrary {
    chunk_size: usize,
    by_type: [Vec<RoomTemplate>; RoomType::COUNT],
    solid: RoomTemplate,
}

impl TemplateLibrary {
    pub fn new(
        chunk_size: usize,
        by_type: [Vec<RoomTemplate>; RoomType::COUNT],
        solid: RoomTemplate,
    ) -> Result<Self, TemplateError> {
        for room_type in RoomType::ALL {
            let templates = &by_type[room_type.code() as usize];
            if templates.is_empty() {
                return Err(TemplateError::EmptyCategory(room_type));
            }
            if let Some(template) = templates.iter().find(|t| t.size() != chunk_size) {
                return Err(size_mismatch(template, chunk_size));
            }
        }
        if solid.size() != chunk_size {
            return Err(size_mismatch(&solid, chunk_size));
        }
        Ok(Self { chunk_size, by_type, solid })
    }

    /// The templates shipped with the crate, sized for the default chunk size.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut by_type: [Vec<RoomTemplate>; RoomType::COUNT] = Default::default();
        for &(room_type, name, text) in BUILTIN_ROOMS {
            by_type[room_type.code() as usize].push(RoomTemplate::parse(
                name,
                text,
                DEFAULT_CHUNK_SIZE,
            )?);
        }
        let solid = RoomTemplate::parse("Solid", BUILTIN_SOLID, DEFAULT_CHUNK_SIZE)?;
        Self::new(DEFAULT_CHUNK_SIZE, by_type, solid)
    }

    /// Loads `type0/` through `type4/` (every `*.txt` file, in file-name order)
    /// and `Solid.txt` from `root`.
    pub fn load_dir(root: &Path, chunk_size: usize) -> Result<Self, TemplateError> {
        let mut by_type: [Vec<RoomTemplate>; RoomType::COUNT] = Default::default();
        for room_type in RoomType::ALL {
            let category_dir = root.join(format!("type{}", room_type.code()));
            if !category_dir.is_dir() {
                return Err(TemplateError::MissingCategory(room_type));
            }

            let mut paths = Vec::new();
            let entries = fs::read_dir(&category_dir)
                .map_err(|source| TemplateError::Io { path: category_dir.clone(), source })?;
            for entry in entries {
                let entry = entry
                    .map_err(|source| TemplateError::Io { path: category_dir.clone(), source })?;
                let path = entry.path();
                if path.extension().is_some_and(|extension| extension == "txt") {
                    paths.push(path);
                }
            }
            paths.sort();

            for path in paths {
                let name = format!(
                    "type{}/{}",
                    room_type.code(),
                    path.file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default()
                );
                let text = fs::read_to_string(&path)
                    .map_err(|source| TemplateError::Io { path: path.clone(), source })?;
                by_type[room_type.code() as usize].push(RoomTemplate::parse(
                    &name, &text, chunk_size,
                )?);
            }
        }

        let solid_path = root.join("Solid.txt");
        if !solid_path.is_file() {
            return Err(TemplateError::MissingSolid);
        }
        let solid_text = fs::read_to_string(&solid_path)
            .map_err(|source| TemplateError::Io { path: solid_path.clone(), source })?;
        let solid = RoomTemplate::parse("Solid", &solid_text, chunk_size)?;

        log::debug!(
            "loaded {} room templates from {}",
            by_type.iter().map(Vec::len).sum::<usize>(),
            root.display()
        );
        Self::new(chunk_size, by_type, solid)
    }

    /// Every room template with its type, in type order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomType, &RoomTemplate)> {
        RoomType::ALL.into_iter().flat_map(move |room_type| {
            self.by_type[room_type.code() as usize].iter().map(move |template| (room_type, template))
        })
    }
}

impl TemplateSource for TemplateLibrary {
    fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn templates(&self, room_type: RoomType) -> &[RoomTemplate] {
        &self.by_type[room_type.code() as usize]
    }

    fn solid(&self) -> &RoomTemplate {
        &self.solid
    }
}

fn size_mismatch(template: &RoomTemplate, chunk_size: usize) -> TemplateError {
    TemplateError::Parse {
        source_name: template.name().to_string(),
        line: 1,
        message: format!("template is {0}x{0}, library uses {chunk_size}", template.size()),
    }
}
