use std::{ops::ControlFlow, thread::sleep, time::Duration};

use types::GameState;

use crate::{GameEnd, GameOutcome, GameRecorder, GameReport};

/// Plays turns until someone reaches the winning score.
pub fn run_game(
    game_state: &mut GameState,
    delay_ms: Option<u64>,
    recorder: &mut dyn GameRecorder,
) -> GameOutcome {
    while !game_state.is_game_over() {
        if play_recorded_turn(game_state, delay_ms, recorder).is_break() {
            return GameOutcome::Quit;
        }
    }
    let report = GameReport::from_game(game_state, GameEnd::ScoreReached);
    log::info!(
        "Game over after {} turns, winner {}",
        report.turns_played,
        report.winner
    );
    GameOutcome::Finished(report)
}

/// Breaks when the player quit during the turn.
pub(crate) fn play_recorded_turn(
    game_state: &mut GameState,
    delay_ms: Option<u64>,
    recorder: &mut dyn GameRecorder,
) -> ControlFlow<()> {
    log::debug!("Scores before turn:\n{game_state}");
    if let Some(ms) = delay_ms {
        sleep(Duration::from_millis(ms));
    }
    let turn = game_state.play_turn();
    recorder.record_turn(game_state, &turn);
    if turn.is_quit() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}
