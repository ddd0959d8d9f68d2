use std::{fmt::Display, time::Duration};

use itertools::Itertools;
use types::{GameState, PlayerState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    ScoreReached,
    TimeUp { elapsed: Duration },
}

#[derive(Clone, Debug)]
pub struct GameReport {
    pub winner: PlayerState,
    pub final_scores: Vec<PlayerState>,
    pub turns_played: usize,
    pub end: GameEnd,
}

#[derive(Clone, Debug)]
pub enum GameOutcome {
    Finished(GameReport),
    /// A player quit mid-turn; the caller decides how to exit.
    Quit,
}

impl GameReport {
    pub fn from_game(game_state: &GameState, end: GameEnd) -> Self {
        Self {
            winner: game_state.winner().state.clone(),
            final_scores: game_state.scores().cloned().collect(),
            turns_played: game_state.turns_played,
            end,
        }
    }
}

impl GameOutcome {
    pub fn report(&self) -> Option<&GameReport> {
        match self {
            GameOutcome::Finished(report) => Some(report),
            GameOutcome::Quit => None,
        }
    }
}

impl Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n{} wins with {} points!\n\nFinal Scores:\n{}",
            self.winner.name,
            self.winner.score,
            self.final_scores.iter().join("\n")
        )
    }
}
