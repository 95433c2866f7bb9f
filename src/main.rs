//! fadetac CLI - play fading tic-tac-toe against the search engine
//!
//! Two modes:
//! - `play`: interactive terminal game against the engine
//! - `selfplay`: pit two difficulty profiles against each other and report
//!   the score

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use fadetac::{
    BoardState, Difficulty, Game, GameOutcome, Player, ScoreBoard, choose_move,
};

#[derive(Parser)]
#[command(name = "fadetac")]
#[command(version, about = "Fading tic-tac-toe: three pieces per side, the oldest fades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play(PlayArgs),

    /// Pit two difficulty profiles against each other
    Selfplay(SelfplayArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Engine difficulty (easy, normal, hard, hardest)
    #[arg(long, short = 'd', default_value = "normal")]
    difficulty: String,

    /// Which mark the engine plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    engine_player: String,

    /// Random seed for reproducible engine behavior
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 20)]
    games: usize,

    /// Difficulty for the X side
    #[arg(long, default_value = "normal")]
    x_difficulty: String,

    /// Difficulty for the O side
    #[arg(long, default_value = "hard")]
    o_difficulty: String,

    /// Abandon a game after this many moves (fading games can cycle)
    #[arg(long, default_value_t = 60)]
    move_cap: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Export the score summary as JSON
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Selfplay(args) => selfplay(args),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

/// Render the board with position hints for empty cells and a `*` on the
/// piece that fades next for the side on turn.
fn render(state: &BoardState) -> String {
    let fading = state.fading_cell(state.to_move);
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            let cell = state.get(pos);
            let text = match cell.to_player() {
                Some(player) if fading == Some(pos) => format!("{player}*"),
                Some(player) => format!("{player} "),
                None => format!("{pos} "),
            };
            out.push_str(&text);
            if col < 2 {
                out.push_str("| ");
            }
        }
        out.push('\n');
    }
    out
}

fn read_human_move(state: &BoardState) -> Result<Option<usize>> {
    let stdin = std::io::stdin();
    loop {
        print!("your move (0-8, q to quit): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(pos) if pos < 9 && state.is_empty(pos) => return Ok(Some(pos)),
            Ok(pos) => println!("cell {pos} is not available"),
            Err(_) => println!("enter a cell index between 0 and 8"),
        }
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let difficulty: Difficulty = args
        .difficulty
        .parse()
        .with_context(|| format!("unusable --difficulty '{}'", args.difficulty))?;
    let engine_player: Player = args
        .engine_player
        .parse()
        .with_context(|| format!("unusable --engine-player '{}'", args.engine_player))?;
    let mut rng = make_rng(args.seed);
    let mut score = ScoreBoard::new();

    println!("fading tic-tac-toe: engine plays {engine_player} at {difficulty}");
    println!("a side's fourth piece removes its oldest one (marked *)\n");

    loop {
        let mut game = Game::new();
        while !game.is_over() {
            let state = *game.state();
            println!("{}", render(&state));

            let pos = if state.to_move == engine_player {
                let pos = choose_move(&state, difficulty, &mut rng)?;
                println!("engine plays {pos}");
                pos
            } else {
                match read_human_move(&state)? {
                    Some(pos) => pos,
                    None => {
                        println!(
                            "final score: you {} | engine {}",
                            human_wins(&score, engine_player),
                            engine_wins(&score, engine_player)
                        );
                        return Ok(());
                    }
                }
            };
            game.play(pos)?;
        }

        println!("{}", render(game.state()));
        let winner = game.winner().expect("finished game has a winner");
        if winner == engine_player {
            println!("engine wins");
        } else {
            println!("you win");
        }
        score.record(GameOutcome::Win(winner));
        println!(
            "score: you {} | engine {}\n",
            human_wins(&score, engine_player),
            engine_wins(&score, engine_player)
        );
    }
}

fn engine_wins(score: &ScoreBoard, engine_player: Player) -> usize {
    match engine_player {
        Player::X => score.x_wins,
        Player::O => score.o_wins,
    }
}

fn human_wins(score: &ScoreBoard, engine_player: Player) -> usize {
    engine_wins(score, engine_player.opponent())
}

#[derive(Debug, Serialize)]
struct SelfplayReport {
    games: usize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    move_cap: usize,
    seed: Option<u64>,
    score: ScoreBoard,
}

fn selfplay(args: SelfplayArgs) -> Result<()> {
    let x_difficulty: Difficulty = args
        .x_difficulty
        .parse()
        .with_context(|| format!("unusable --x-difficulty '{}'", args.x_difficulty))?;
    let o_difficulty: Difficulty = args
        .o_difficulty
        .parse()
        .with_context(|| format!("unusable --o-difficulty '{}'", args.o_difficulty))?;
    let mut rng = make_rng(args.seed);
    let mut score = ScoreBoard::new();

    for _ in 0..args.games {
        let mut game = Game::new();
        while !game.is_over() {
            if game.moves.len() >= args.move_cap {
                game.abandon();
                break;
            }
            let difficulty = match game.state().to_move {
                Player::X => x_difficulty,
                Player::O => o_difficulty,
            };
            let pos = choose_move(game.state(), difficulty, &mut rng)?;
            game.play(pos)?;
        }
        score.record(game.outcome.expect("game loop always sets an outcome"));
    }

    println!(
        "X ({x_difficulty}) wins: {} | O ({o_difficulty}) wins: {} | unresolved: {}",
        score.x_wins, score.o_wins, score.unresolved
    );

    if let Some(path) = args.export {
        let report = SelfplayReport {
            games: args.games,
            x_difficulty,
            o_difficulty,
            move_cap: args.move_cap,
            seed: args.seed,
            score,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
