pub mod input_strategy;

use types::{
    Decision, PigError, Player, PlayerKind, PlayerState, Strategy, TurnState, WINNING_SCORE,
};

pub use crate::input_strategy::{InputStrategy, SharedStdin};

/// Largest turn total the computer will risk in an ordinary turn.
pub const HOLD_CAP: u32 = 25;

/// Holds once the turn total reaches 25, or earlier if fewer points are
/// enough to win.
#[derive(Debug, Default)]
pub struct ComputerStrategy {}

impl ComputerStrategy {
    pub fn hold_threshold(score: u32) -> u32 {
        HOLD_CAP.min(WINNING_SCORE.saturating_sub(score))
    }

    pub fn choose(score: u32, turn_total: u32) -> Decision {
        if turn_total >= Self::hold_threshold(score) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

impl Strategy for ComputerStrategy {
    fn decide(&mut self, private_info: &PlayerState, turn: &TurnState) -> Decision {
        Self::choose(private_info.score, turn.turn_total)
    }
}

pub fn player_for_kind(kind: PlayerKind, name: &str) -> Player {
    let strategy: Box<dyn Strategy> = match kind {
        PlayerKind::Human => Box::new(InputStrategy::stdio()),
        PlayerKind::Computer => Box::new(ComputerStrategy::default()),
    };
    Player::new(name, kind, strategy)
}

/// Builds a player from a kind name such as `"human"` or `"computer"`.
pub fn create_player(kind: &str, name: &str) -> Result<Player, PigError> {
    let kind: PlayerKind = kind.parse()?;
    Ok(player_for_kind(kind, name))
}
