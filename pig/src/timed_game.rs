use std::time::{Duration, Instant};

use types::GameState;

use crate::{gameplay::play_recorded_turn, GameEnd, GameOutcome, GameRecorder, GameReport};

pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Runs a game against a wall-clock deadline.
///
/// The deadline is only checked between turns, so a turn that has started
/// always finishes. When time runs out the winner is whoever leads.
#[derive(Debug)]
pub struct TimedGame<'a> {
    game_state: &'a mut GameState,
    time_limit: Duration,
    delay_ms: Option<u64>,
}

impl<'a> TimedGame<'a> {
    pub fn new(game_state: &'a mut GameState, time_limit: Duration) -> Self {
        Self {
            game_state,
            time_limit,
            delay_ms: None,
        }
    }

    pub fn with_delay(mut self, delay_ms: Option<u64>) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn play_game(&mut self, recorder: &mut dyn GameRecorder) -> GameOutcome {
        self.play_game_since(Instant::now(), recorder)
    }

    pub fn play_game_since(
        &mut self,
        start: Instant,
        recorder: &mut dyn GameRecorder,
    ) -> GameOutcome {
        let mut end = GameEnd::ScoreReached;
        while !self.game_state.is_game_over() {
            let elapsed = start.elapsed();
            if elapsed > self.time_limit {
                log::info!("Time's up after {}s", elapsed.as_secs());
                recorder.record_time_up(elapsed);
                end = GameEnd::TimeUp { elapsed };
                break;
            }
            if play_recorded_turn(self.game_state, self.delay_ms, recorder).is_break() {
                return GameOutcome::Quit;
            }
        }

        let report = GameReport::from_game(self.game_state, end);
        log::info!(
            "Timed game over after {} turns, winner {}",
            report.turns_played,
            report.winner
        );
        GameOutcome::Finished(report)
    }
}
