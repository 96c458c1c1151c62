//! Console driver.
//!
//! Interactive two-player game over stdin/stdout:
//!
//! ```text
//! pokemon                    play a game
//! pokemon --simulate 1000    opening-hand sweep, 1000 runs per Pokémon count
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use pokemon_tcg::core::{MENU_USE_MOVE, MENU_USE_TRAINER};
use pokemon_tcg::games::pokemon::{opening_hand_sweep, PokemonGame, PokemonGameBuilder};
use pokemon_tcg::{Agent, GameConfig, GameEvent, GameRng, GameState, PlayerId, RulesEngine, TurnAction};

/// Line-based prompt over any reader.
struct Console<R> {
    input: R,
    closed: bool,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self { input, closed: false }
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        if io::stdout().flush().is_err() {
            self.closed = true;
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Read an integer; unparseable input becomes -1, which no menu accepts.
    fn ask_number(&mut self, prompt: &str) -> i64 {
        self.ask(prompt)
            .and_then(|line| line.parse().ok())
            .unwrap_or(-1)
    }
}

impl<R: BufRead> Agent<PokemonGame> for Console<R> {
    fn choose_action(&mut self, _engine: &PokemonGame, state: &GameState, player: PlayerId) -> TurnAction {
        let me = state.player(player);
        println!("{}'s turn.", me.name());
        println!("{}", me);
        println!("Select an action:");
        println!("{}: Use Pokémon Move", MENU_USE_MOVE);
        println!("{}: Use Trainer Card", MENU_USE_TRAINER);

        let choice = self.ask_number("> ");
        let selection = match choice {
            MENU_USE_MOVE => match me.active_pokemon() {
                Some(active) => {
                    println!("Select a move for {}:", active.name);
                    for (i, m) in active.moves().iter().enumerate() {
                        println!("{}: {}", i, m);
                    }
                    self.ask_number("> ")
                }
                None => 0,
            },
            MENU_USE_TRAINER => {
                println!("Select a Trainer card to use:");
                for i in me.trainer_indices() {
                    println!("{}: {}", i, me.hand()[i]);
                }
                self.ask_number("> ")
            }
            _ => 0,
        };

        TurnAction::from_menu(choice, selection)
    }
}

fn print_events<'a>(events: impl IntoIterator<Item = &'a GameEvent>) {
    for event in events {
        if !matches!(event, GameEvent::TurnStarted { .. }) {
            println!("{}", event);
        }
    }
}

fn simulate(runs: usize) -> ExitCode {
    let config = GameConfig::default();
    let mut rng = GameRng::from_entropy();

    match opening_hand_sweep(runs, &config, &mut rng) {
        Ok(sweep) => {
            for point in sweep {
                println!("With {} Pokémon in deck: {}", point.pokemon_count, point.percent);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn play() -> ExitCode {
    let mut console = Console::new(io::stdin().lock());

    let Some(count) = console.ask("Enter amount of pokemon in deck: ") else {
        return ExitCode::FAILURE;
    };
    let Ok(pokemon_count) = count.parse::<usize>() else {
        eprintln!("Not a number: {}", count);
        return ExitCode::FAILURE;
    };
    let first = console.ask("Enter Player 1 name: ").unwrap_or_default();
    let second = console.ask("Enter Player 2 name: ").unwrap_or_default();

    let built = PokemonGameBuilder::new()
        .pokemon_count(pokemon_count)
        .player_names(first, second)
        .build_with_rng(GameRng::from_entropy());
    let (mut game, mut state) = match built {
        Ok(built) => built,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    print_events(state.log());

    while let Some(player) = state.current_player() {
        let action = console.choose_action(&game, &state, player);
        if console.closed {
            return ExitCode::FAILURE;
        }
        let report = game.apply_action(&mut state, player, action);
        print_events(&report.events);
    }

    debug_assert!(game.is_terminal(&state).is_some());
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [] => play(),
        [flag, runs] if flag == "--simulate" => match runs.parse() {
            Ok(runs) => simulate(runs),
            Err(_) => {
                eprintln!("--simulate expects a number of runs, got {}", runs);
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("usage: pokemon [--simulate <runs>]");
            ExitCode::FAILURE
        }
    }
}
