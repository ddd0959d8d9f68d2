use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use uuid::Uuid;

use crate::PigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(PigError::InvalidPlayerType(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlayerState {
    pub id: Uuid,
    pub name: String,
    pub kind: PlayerKind,
    pub score: u32,
}

impl PartialEq for PlayerState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} points", self.name, self.score)
    }
}

impl PlayerState {
    pub fn new(name: String, kind: PlayerKind) -> Self {
        Self::new_with_id(Uuid::new_v4(), name, kind)
    }

    pub fn new_with_id(id: Uuid, name: String, kind: PlayerKind) -> Self {
        Self {
            id,
            name,
            kind,
            score: 0,
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
