pub mod gameplay;
pub mod recorder;
pub mod report;
pub mod timed_game;

pub use gameplay::run_game;
pub use recorder::{ConsoleRecorder, GameRecorder, NoopRecorder};
pub use report::{GameEnd, GameOutcome, GameReport};
pub use timed_game::{TimedGame, TIME_LIMIT};
