use clap::Parser;
use pig::{run_game, ConsoleRecorder, GameOutcome, TimedGame, TIME_LIMIT};
use strategies::create_player;
use types::{Die, GameState, PigError, SixSidedDie};

/// Play the game of Pig.
#[derive(Parser, Debug)]
#[command(about)]
struct Params {
    /// Type of player 1
    #[arg(long, default_value = "human", value_parser = ["human", "computer"])]
    player1: String,

    /// Type of player 2
    #[arg(long, default_value = "computer", value_parser = ["human", "computer"])]
    player2: String,

    /// Play a timed version of the game
    #[arg(long)]
    timed: bool,

    /// Seed the die for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between turns, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<(), PigError> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let players = [
        create_player(&args.player1, "Player 1")?,
        create_player(&args.player2, "Player 2")?,
    ];
    let die: Box<dyn Die> = match args.seed {
        Some(seed) => Box::new(SixSidedDie::seeded(seed)),
        None => Box::new(SixSidedDie::new()),
    };
    let mut game_state = GameState::new(players, die);
    let mut recorder = ConsoleRecorder::stdout();

    let outcome = if args.timed {
        println!("\nStarting timed game of Pig!");
        TimedGame::new(&mut game_state, TIME_LIMIT)
            .with_delay(args.delay_ms)
            .play_game(&mut recorder)
    } else {
        println!("\nWelcome to the game of Pig!\n");
        run_game(&mut game_state, args.delay_ms, &mut recorder)
    };

    match outcome {
        GameOutcome::Finished(report) => {
            println!("{report}");
            Ok(())
        }
        GameOutcome::Quit => {
            println!("Thanks for playing! Exiting the game.");
            std::process::exit(0);
        }
    }
}
