use std::fmt::Debug;

use crate::{Decision, PlayerKind, PlayerState};

/// What a player sees when asked whether to keep rolling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    pub last_roll: u8,
    pub turn_total: u32,
    pub opponent_score: u32,
}

pub trait Strategy: Debug {
    fn decide(&mut self, private_info: &PlayerState, turn: &TurnState) -> Decision;
}

#[derive(Debug)]
pub struct Player {
    pub state: PlayerState,
    pub strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, kind: PlayerKind, strategy: Box<dyn Strategy>) -> Self {
        Self {
            state: PlayerState::new(name.to_string(), kind),
            strategy,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.state.kind
    }

    pub fn decide(&mut self, turn: &TurnState) -> Decision {
        self.strategy.decide(&self.state, turn)
    }
}
