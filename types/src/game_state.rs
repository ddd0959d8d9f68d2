use std::{cmp::Reverse, fmt::Display};

use itertools::Itertools;
use log;

use crate::{Decision, Die, Player, PlayerState, TurnState, WINNING_SCORE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A 1 was rolled and the turn total was lost.
    Forfeited,
    Banked { points: u32, new_score: u32 },
    /// The player asked to leave the game. Nothing from this turn was banked.
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player_index: usize,
    pub rolls: Vec<u8>,
    pub outcome: TurnOutcome,
}

impl TurnSummary {
    /// Sum of the rolls before the turn ended, ignoring a closing 1.
    pub fn turn_total(&self) -> u32 {
        self.rolls
            .iter()
            .filter(|&&roll| roll != 1)
            .map(|&roll| u32::from(roll))
            .sum()
    }

    pub fn is_quit(&self) -> bool {
        self.outcome == TurnOutcome::Quit
    }
}

#[derive(Debug)]
pub struct GameState {
    pub players: [Player; 2],
    pub current_player_index: usize,
    pub turns_played: usize,
    die: Box<dyn Die>,
}

impl GameState {
    pub fn new(players: [Player; 2], die: Box<dyn Die>) -> Self {
        log::info!(
            "New game: {}",
            players
                .iter()
                .map(|p| format!("{} ({})", p.state.name, p.kind()))
                .join(" vs ")
        );
        Self {
            players,
            current_player_index: 0,
            turns_played: 0,
            die,
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[self.opponent_index()]
    }

    fn opponent_index(&self) -> usize {
        (self.current_player_index + 1) % self.players.len()
    }

    /// Plays the current player's turn to completion and passes the die on.
    ///
    /// Rolls until the player holds or rolls a 1. A quitting player leaves
    /// the state untouched: the turn total is discarded and the turn does
    /// not pass.
    pub fn play_turn(&mut self) -> TurnSummary {
        let player_index = self.current_player_index;
        let opponent_score = self.opponent().state.score;
        let mut rolls = Vec::new();
        let mut turn_total = 0;

        let outcome = loop {
            let roll = self.die.roll();
            rolls.push(roll);
            let player = &mut self.players[player_index];
            log::debug!("{} rolled a {roll}", player.state.name);

            if roll == 1 {
                break TurnOutcome::Forfeited;
            }
            turn_total += u32::from(roll);

            let turn = TurnState {
                last_roll: roll,
                turn_total,
                opponent_score,
            };
            let decision = player.decide(&turn);
            log::debug!(
                "{} decides to {decision} with turn total {turn_total}",
                player.state.name
            );
            match decision {
                Decision::Roll => continue,
                Decision::Hold => {
                    player.state.score += turn_total;
                    break TurnOutcome::Banked {
                        points: turn_total,
                        new_score: player.state.score,
                    };
                }
                Decision::Quit => {
                    log::info!("{} quit mid-turn", player.state.name);
                    return TurnSummary {
                        player_index,
                        rolls,
                        outcome: TurnOutcome::Quit,
                    };
                }
            }
        };

        match outcome {
            TurnOutcome::Banked { points, new_score } => log::info!(
                "{} banked {points}, score now {new_score}",
                self.players[player_index].state.name
            ),
            _ => log::info!(
                "{} rolled a 1 and scores nothing this turn",
                self.players[player_index].state.name
            ),
        }

        self.turns_played += 1;
        self.next_players_turn();
        TurnSummary {
            player_index,
            rolls,
            outcome,
        }
    }

    fn next_players_turn(&mut self) {
        self.current_player_index = self.opponent_index();
    }

    pub fn is_game_over(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.state.score >= WINNING_SCORE)
    }

    /// Highest scorer; on a tie the player seated first wins.
    pub fn winner(&self) -> &Player {
        // min_by_key keeps the first of equal elements, max_by_key the last
        self.players
            .iter()
            .min_by_key(|player| Reverse(player.state.score))
            .expect("Should always have two players")
    }

    pub fn scores(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().map(|player| &player.state)
    }

    /// Clears scores and turn order for a fresh round with the same players.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.state.reset_score();
        }
        self.current_player_index = 0;
        self.turns_played = 0;
        log::info!("Game reset");
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scores().join("\n"))
    }
}
