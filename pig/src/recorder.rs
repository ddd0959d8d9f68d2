use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

use types::{Decision, GameState, PlayerKind, TurnOutcome, TurnSummary};

/// Observes a game as it is played. Every method defaults to doing nothing.
pub trait GameRecorder {
    fn record_turn(&mut self, _game_state: &GameState, _turn: &TurnSummary) {}

    fn record_time_up(&mut self, _elapsed: Duration) {}
}

// NoopRecorder for when nobody is watching
pub struct NoopRecorder;

impl GameRecorder for NoopRecorder {}

/// Narrates each turn for people at the console.
#[derive(Debug)]
pub struct ConsoleRecorder<W> {
    output: W,
}

impl ConsoleRecorder<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRecorder<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_turn(&mut self, game_state: &GameState, turn: &TurnSummary) -> io::Result<()> {
        let player = &game_state.players[turn.player_index];
        let name = &player.state.name;

        // humans already saw every roll except a closing 1 at their prompt
        if player.kind() == PlayerKind::Computer {
            let score_before = match turn.outcome {
                TurnOutcome::Banked { points, new_score } => new_score - points,
                _ => player.state.score,
            };
            let last_scoring_roll = turn.rolls.iter().rposition(|&roll| roll != 1);
            let mut turn_total = 0;
            for (idx, &roll) in turn.rolls.iter().enumerate() {
                writeln!(self.output, "\n{name} rolled a {roll}")?;
                if roll == 1 {
                    continue;
                }
                turn_total += u32::from(roll);
                writeln!(
                    self.output,
                    "Turn total: {turn_total}, {name}: {score_before} points"
                )?;
                let holds = Some(idx) == last_scoring_roll
                    && matches!(turn.outcome, TurnOutcome::Banked { .. });
                let decision = if holds { Decision::Hold } else { Decision::Roll };
                writeln!(self.output, "{name} decides to {decision}.")?;
            }
        } else if turn.rolls.last() == Some(&1) {
            writeln!(self.output, "\n{name} rolled a 1")?;
        }

        match turn.outcome {
            TurnOutcome::Forfeited => writeln!(self.output, "{name} scores nothing this turn."),
            TurnOutcome::Banked { new_score, .. } => {
                writeln!(self.output, "{name} holds. Total score: {new_score}")
            }
            TurnOutcome::Quit => Ok(()),
        }
    }
}

impl<W: Write> GameRecorder for ConsoleRecorder<W> {
    fn record_turn(&mut self, game_state: &GameState, turn: &TurnSummary) {
        if let Err(err) = self.write_turn(game_state, turn) {
            log::error!("Error writing turn to console: {err}");
        }
    }

    fn record_time_up(&mut self, elapsed: Duration) {
        if let Err(err) = writeln!(
            self.output,
            "\nTime's up! The game lasted {} seconds.",
            elapsed.as_secs()
        ) {
            log::error!("Error writing to console: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use strategies::ComputerStrategy;
    use types::{LoadedDie, Player};

    use super::*;

    fn narrate(rolls: &[u8], starting_score: u32) -> String {
        let mut game_state = GameState::new(
            [
                Player::new(
                    "Player 1",
                    PlayerKind::Computer,
                    Box::new(ComputerStrategy::default()),
                ),
                Player::new(
                    "Player 2",
                    PlayerKind::Computer,
                    Box::new(ComputerStrategy::default()),
                ),
            ],
            Box::new(LoadedDie::new(rolls.iter().copied())),
        );
        game_state.players[0].state.score = starting_score;
        let turn = game_state.play_turn();

        let mut recorder = ConsoleRecorder::new(Vec::new());
        recorder.record_turn(&game_state, &turn);
        String::from_utf8(recorder.into_output()).expect("utf8 output")
    }

    #[test]
    fn narrates_computer_rolls_and_decisions() {
        let output = narrate(&[4, 6], 90);
        assert_eq!(
            output,
            "\nPlayer 1 rolled a 4\n\
             Turn total: 4, Player 1: 90 points\n\
             Player 1 decides to roll again.\n\
             \nPlayer 1 rolled a 6\n\
             Turn total: 10, Player 1: 90 points\n\
             Player 1 decides to hold.\n\
             Player 1 holds. Total score: 100\n"
        );
    }

    #[test]
    fn narrates_forfeit() {
        let output = narrate(&[5, 1], 10);
        assert!(output.contains("Player 1 decides to roll again."));
        assert!(output.contains("\nPlayer 1 rolled a 1\n"));
        assert!(output.ends_with("Player 1 scores nothing this turn.\n"));
        assert!(!output.contains("decides to hold"));
    }

    #[test]
    fn reports_time_up_in_whole_seconds() {
        let mut recorder = ConsoleRecorder::new(Vec::new());
        recorder.record_time_up(Duration::from_millis(61_700));
        let output = String::from_utf8(recorder.into_output()).expect("utf8 output");
        assert_eq!(output, "\nTime's up! The game lasted 61 seconds.\n");
    }
}
