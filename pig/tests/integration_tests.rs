use std::{io::Cursor, time::Duration};

use pig::{run_game, GameEnd, GameOutcome, GameRecorder, NoopRecorder, TimedGame};
use strategies::{create_player, ComputerStrategy, InputStrategy};
use types::{GameState, LoadedDie, Player, PlayerKind, SixSidedDie, TurnOutcome, TurnSummary};

#[derive(Default)]
struct TurnLog {
    turns: Vec<TurnSummary>,
    scores_after: Vec<[u32; 2]>,
    time_ups: Vec<Duration>,
}

impl GameRecorder for TurnLog {
    fn record_turn(&mut self, game_state: &GameState, turn: &TurnSummary) {
        self.turns.push(turn.clone());
        self.scores_after.push([
            game_state.players[0].state.score,
            game_state.players[1].state.score,
        ]);
    }

    fn record_time_up(&mut self, elapsed: Duration) {
        self.time_ups.push(elapsed);
    }
}

fn computer(name: &str) -> Player {
    Player::new(
        name,
        PlayerKind::Computer,
        Box::new(ComputerStrategy::default()),
    )
}

fn scripted_human(name: &str, input: &str) -> Player {
    Player::new(
        name,
        PlayerKind::Human,
        Box::new(InputStrategy::new(
            Cursor::new(input.as_bytes().to_vec()),
            std::io::sink(),
        )),
    )
}

#[test]
fn test_run_game_with_computer_players() {
    let mut game_state = GameState::new(
        [computer("Player 1"), computer("Player 2")],
        Box::new(SixSidedDie::seeded(2024)),
    );
    let mut recorder = TurnLog::default();

    let outcome = run_game(&mut game_state, None, &mut recorder);

    let report = outcome.report().expect("Game should finish");
    assert_eq!(report.end, GameEnd::ScoreReached);
    assert!(report.winner.score >= 100);
    assert_eq!(report.turns_played, recorder.turns.len());
    assert_eq!(
        report
            .final_scores
            .iter()
            .filter(|state| state.score >= 100)
            .count(),
        1
    );
    assert!(recorder.time_ups.is_empty());

    // scores never go down and only the player taking the turn scores
    let mut previous = [0, 0];
    for (turn, scores) in recorder.turns.iter().zip(&recorder.scores_after) {
        let other = 1 - turn.player_index;
        assert_eq!(scores[other], previous[other]);
        assert!(scores[turn.player_index] >= previous[turn.player_index]);
        previous = *scores;
    }
}

#[test]
fn test_computer_holds_at_points_needed() {
    let mut game_state = GameState::new(
        [computer("Player 1"), computer("Player 2")],
        Box::new(LoadedDie::new([6, 6, 4, 4, 6])),
    );
    game_state.players[0].state.score = 80;

    let turn = game_state.play_turn();

    assert_eq!(turn.rolls, vec![6, 6, 4, 4]);
    assert_eq!(
        turn.outcome,
        TurnOutcome::Banked {
            points: 20,
            new_score: 100
        }
    );
    assert!(game_state.is_game_over());
}

#[test]
fn test_game_ends_before_opponent_turn() {
    let mut game_state = GameState::new(
        [computer("Player 1"), computer("Player 2")],
        Box::new(LoadedDie::new([3, 3, 6, 6, 6, 6])),
    );
    game_state.players[0].state.score = 95;
    let mut recorder = TurnLog::default();

    let outcome = run_game(&mut game_state, None, &mut recorder);

    let report = outcome.report().expect("Game should finish");
    assert_eq!(recorder.turns.len(), 1);
    assert_eq!(report.winner.name, "Player 1");
    assert_eq!(report.winner.score, 101);
    assert_eq!(game_state.players[1].state.score, 0);
}

#[test]
fn test_human_quit_stops_the_game() {
    let mut game_state = GameState::new(
        [scripted_human("Player 1", "h\nr\nq\n"), computer("Player 2")],
        Box::new(LoadedDie::new([5, 1, 4, 2])),
    );
    let mut recorder = TurnLog::default();

    let outcome = run_game(&mut game_state, None, &mut recorder);

    assert!(matches!(outcome, GameOutcome::Quit));
    assert_eq!(recorder.turns.len(), 3);
    assert_eq!(recorder.turns[1].outcome, TurnOutcome::Forfeited);
    assert!(recorder.turns[2].is_quit());
    assert_eq!(game_state.players[0].state.score, 5);
    assert_eq!(game_state.players[1].state.score, 0);
}

#[test]
fn test_human_quit_ends_timed_game() {
    let mut game_state = GameState::new(
        [
            create_player("computer", "Player 1").expect("valid kind"),
            scripted_human("Player 2", "exit\n"),
        ],
        Box::new(LoadedDie::new([1, 3])),
    );

    let outcome =
        TimedGame::new(&mut game_state, Duration::from_secs(60)).play_game(&mut NoopRecorder);

    assert!(matches!(outcome, GameOutcome::Quit));
    assert!(game_state.scores().all(|state| state.score == 0));
}

#[test]
fn test_reset_allows_replay() {
    let mut game_state = GameState::new(
        [computer("Player 1"), computer("Player 2")],
        Box::new(SixSidedDie::seeded(5)),
    );
    run_game(&mut game_state, None, &mut NoopRecorder);
    assert!(game_state.is_game_over());

    game_state.reset();
    assert!(!game_state.is_game_over());
    assert_eq!(game_state.current_player_index, 0);

    let outcome = run_game(&mut game_state, None, &mut NoopRecorder);
    assert!(outcome.report().is_some());
    assert!(game_state.is_game_over());
}
