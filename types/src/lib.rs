pub mod action;
pub mod die;
pub mod error;
pub mod game_state;
pub mod player;
pub mod player_state;

pub use action::Decision;
pub use die::{Die, LoadedDie, SixSidedDie};
pub use error::PigError;
pub use game_state::{GameState, TurnOutcome, TurnSummary};
pub use player::{Player, Strategy, TurnState};
pub use player_state::{PlayerKind, PlayerState};

/// Score at or above which the game ends.
pub const WINNING_SCORE: u32 = 100;
