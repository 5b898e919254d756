//! Content-authoring checks for template libraries.

use std::fmt;

use crate::types::Direction;

use super::RoomType;
use super::library::TemplateSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateIssue {
    /// Nowhere to stand: the start room could never place the player here.
    NoSpawnCandidate { template: String, room_type: RoomType },
    /// The room type promises an exit the template walls off.
    ClosedExit { template: String, room_type: RoomType, direction: Direction },
    PassableSolid { template: String },
}

impl TemplateIssue {
    pub fn template(&self) -> &str {
        match self {
            Self::NoSpawnCandidate { template, .. }
            | Self::ClosedExit { template, .. }
            | Self::PassableSolid { template } => template,
        }
    }
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSpawnCandidate { template, room_type } => write!(
                f,
                "{template} ({}) has no passable tile above solid ground",
                room_type.name()
            ),
            Self::ClosedExit { template, room_type, direction } => write!(
                f,
                "{template} ({}) has no opening on its {} edge",
                room_type.name(),
                direction.name()
            ),
            Self::PassableSolid { template } => {
                write!(f, "{template} is used as perimeter fill but contains passable tiles")
            }
        }
    }
}

/// Reports every defect instead of stopping at the first one.
pub fn audit(source: &impl TemplateSource) -> Vec<TemplateIssue> {
    let mut issues = Vec::new();
    for room_type in RoomType::ALL {
        for template in source.templates(room_type) {
            if !template.has_spawn_candidate() {
                issues.push(TemplateIssue::NoSpawnCandidate {
                    template: template.name().to_string(),
                    room_type,
                });
            }
            for direction in room_type.exits().iter() {
                if !template.is_open_towards(direction) {
                    issues.push(TemplateIssue::ClosedExit {
                        template: template.name().to_string(),
                        room_type,
                        direction,
                    });
                }
            }
        }
    }

    if !source.solid().is_fully_impassable() {
        issues.push(TemplateIssue::PassableSolid { template: source.solid().name().to_string() });
    }

    if !issues.is_empty() {
        log::warn!("room template audit found {} issue(s)", issues.len());
    }
    issues
}
