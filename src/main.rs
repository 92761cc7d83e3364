use anyhow::{Context, Result};
use connections_core::{
    config::Config,
    game::{remaining_layout, submit_guess, GameState, GuessOutcome},
    models::{GameStatus, WordPositions},
    utils::wait,
    GameError, Puzzle,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connections_core=info,connections=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let puzzle = Puzzle::load(&config.puzzle_path)
        .await
        .with_context(|| format!("Failed to load puzzle from {}", config.puzzle_path))?;
    let mut state = puzzle.new_game()?;
    let mut rng = rand::rng();

    let (mut words, mut positions) =
        remaining_layout(&puzzle, &state, config.grid_columns, &mut rng);
    print_board(&state, &words, &positions, config.grid_columns);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while state.status() == GameStatus::Playing {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" => break,
            "shuffle" => {
                (words, positions) =
                    remaining_layout(&puzzle, &state, config.grid_columns, &mut rng);
                print_board(&state, &words, &positions, config.grid_columns);
                continue;
            }
            _ => {}
        }

        let guess: Vec<String> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        let outcome = match submit_guess(&mut state, &puzzle, &guess) {
            Ok(outcome) => outcome,
            Err(e @ (GameError::WrongGuessSize { .. } | GameError::UnknownWord(_))) => {
                println!("{}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        wait(config.reveal_delay_ms).await?;

        match outcome {
            GuessOutcome::Correct { group_index } => {
                let group = &puzzle.groups()[group_index];
                println!("Correct! {}: {}", group.theme, group.words.join(", "));
                (words, positions) =
                    remaining_layout(&puzzle, &state, config.grid_columns, &mut rng);
            }
            GuessOutcome::OneAway => println!("One away..."),
            GuessOutcome::Incorrect => println!("Incorrect."),
            GuessOutcome::AlreadyGuessed => println!("Already guessed!"),
        }

        if !state.is_over() {
            print_board(&state, &words, &positions, config.grid_columns);
        }
    }

    match state.status() {
        GameStatus::Won => println!("You solved all {} groups!", state.num_groups()),
        GameStatus::Lost => {
            println!("Out of mistakes. The groups were:");
            for group in puzzle.groups() {
                println!("  {}: {}", group.theme, group.words.join(", "));
            }
        }
        GameStatus::Playing => tracing::info!("Game abandoned after {} guesses", state.guesses.len()),
    }

    Ok(())
}

fn print_board(state: &GameState, words: &[String], positions: &WordPositions, columns: usize) {
    let rows = words.len().div_ceil(columns);
    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);

    for row in 0..rows {
        let cells: Vec<String> = (0..columns)
            .filter_map(|col| {
                words
                    .iter()
                    .find(|w| positions.get(*w).is_some_and(|p| p.row == row && p.col == col))
                    .map(|w| format!("{:<width$}", w, width = width))
            })
            .collect();
        println!("  {}", cells.join("  "));
    }

    println!(
        "Mistakes remaining: {}  Solved: {}/{}",
        state.num_mistakes_remaining.max(0),
        state.completed_group_indexes.len(),
        state.num_groups()
    );
}
