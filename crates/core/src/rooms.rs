//! Room types and the pre-authored tile blocks that back them.

mod audit;
mod library;
mod template;

use serde::Serialize;

use crate::types::{Direction, ExitSet};

pub use audit::{TemplateIssue, audit};
pub use library::{TemplateLibrary, TemplateSource};
pub use template::RoomTemplate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RoomType {
    /// No exit is guaranteed.
    Arbitrary,
    LeftRight,
    LeftRightDown,
    LeftRightUp,
    AllFour,
}

impl RoomType {
    pub const COUNT: usize = 5;

    pub const ALL: [RoomType; RoomType::COUNT] = [
        RoomType::Arbitrary,
        RoomType::LeftRight,
        RoomType::LeftRightDown,
        RoomType::LeftRightUp,
        RoomType::AllFour,
    ];

    pub fn code(self) -> i32 {
        match self {
            RoomType::Arbitrary => 0,
            RoomType::LeftRight => 1,
            RoomType::LeftRightDown => 2,
            RoomType::LeftRightUp => 3,
            RoomType::AllFour => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        RoomType::ALL.into_iter().find(|room_type| room_type.code() == code)
    }

    pub fn exits(self) -> ExitSet {
        match self {
            RoomType::Arbitrary => ExitSet::NONE,
            RoomType::LeftRight => ExitSet::from_directions(&[Direction::Left, Direction::Right]),
            RoomType::LeftRightDown => {
                ExitSet::from_directions(&[Direction::Left, Direction::Right, Direction::Down])
            }
            RoomType::LeftRightUp => {
                ExitSet::from_directions(&[Direction::Left, Direction::Right, Direction::Up])
            }
            RoomType::AllFour => ExitSet::ALL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoomType::Arbitrary => "arbitrary",
            RoomType::LeftRight => "left-right",
            RoomType::LeftRightDown => "left-right-down",
            RoomType::LeftRightUp => "left-right-up",
            RoomType::AllFour => "all-four",
        }
    }
}
