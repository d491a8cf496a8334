use battleship_rules::{
    init_logging, render, Board, BoardState, ShotResult, BOARD_SIZE, STANDARD_FLEET,
};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place the standard fleet at random and print the board.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place a random fleet, then fire random shots at it.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE * BOARD_SIZE)]
        max_shots: usize,
    },
    /// Place a random fleet and print its snapshot as JSON.
    Snapshot {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn fleet_board(rng: &mut SmallRng) -> anyhow::Result<Board> {
    let mut board = Board::new();
    board.place_fleet_randomly(rng, &STANDARD_FLEET)?;
    Ok(board)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { seed } => {
            let mut rng = make_rng(seed);
            let board = fleet_board(&mut rng)?;
            print!("{}", render::owner_view(&board));
        }
        Commands::Play { seed, max_shots } => {
            let mut rng = make_rng(seed);
            let mut board = fleet_board(&mut rng)?;

            let mut targets: Vec<(i32, i32)> = (0..BOARD_SIZE as i32)
                .flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| (r, c)))
                .collect();
            targets.shuffle(&mut rng);

            let (mut hits, mut sunk) = (0usize, 0usize);
            for (r, c) in targets.into_iter().take(max_shots) {
                match board.receive_attack(r, c) {
                    ShotResult::Hit => hits += 1,
                    ShotResult::Sunk => {
                        hits += 1;
                        sunk += 1;
                    }
                    _ => {}
                }
                if board.all_ships_sunk() {
                    break;
                }
            }

            print!("{}", render::opponent_view(&board));
            let summary = json!({
                "shots": board.shots_fired(),
                "hits": hits,
                "sunk": sunk,
                "all_sunk": board.all_ships_sunk(),
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Snapshot { seed } => {
            let mut rng = make_rng(seed);
            let board = fleet_board(&mut rng)?;
            let state = BoardState::from(&board);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }
    Ok(())
}
