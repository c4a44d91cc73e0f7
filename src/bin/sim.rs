use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use hexstead::cli::{StatisticsAccumulator, StrategyInstance, create_strategy, print_strategy_help};
use hexstead::config::Config;
use hexstead::game::{Game, GameConfig, GameSummary, NullSink, Transcript};
use hexstead::types::Color;

#[derive(Debug, Parser, Clone)]
#[command(name = "hexstead-sim")]
#[command(about = "Hex-board trading game simulator - runs randomized games to completion")]
struct Args {
    /// Path to a key=value config file (recognized key: turns)
    config: Option<PathBuf>,

    /// Comma-separated strategy codes, one per seat (e.g. R,R,R,R)
    #[arg(long, default_value = "R,R,R,R")]
    players: String,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    games: u32,

    /// Victory points needed to win
    #[arg(long, default_value_t = 10)]
    vps_to_win: u8,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Silence the per-event transcript
    #[arg(long)]
    quiet: bool,

    /// Show strategy codes and exit
    #[arg(long)]
    help_players: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.help_players {
        print_strategy_help();
        return;
    }

    let strategy_keys: Vec<&str> = args.players.split(',').collect();
    if strategy_keys.len() < 2 || strategy_keys.len() > 4 {
        eprintln!("Error: Must specify 2-4 players");
        process::exit(1);
    }
    let mut strategies: Vec<StrategyInstance> = Vec::new();
    for key in &strategy_keys {
        match create_strategy(key.trim()) {
            Some(strategy) => strategies.push(strategy),
            None => {
                eprintln!("Error: Unknown strategy code '{key}'");
                eprintln!("Use --help-players to see available codes");
                process::exit(1);
            }
        }
    }

    let file_config = match &args.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };

    let mut stats = StatisticsAccumulator::new();
    for game_idx in 0..args.games {
        let config = GameConfig {
            num_players: strategies.len(),
            max_rounds: file_config.max_rounds,
            vps_to_win: args.vps_to_win,
            seed: args.seed + game_idx as u64,
        };
        let mut game = Game::new(config);

        let start = Instant::now();
        let result = if args.quiet || args.games > 1 {
            game.play(&strategies, &mut NullSink)
        } else {
            let stdout = io::stdout();
            let mut sink = Transcript::new(stdout.lock());
            game.play(&strategies, &mut sink)
        };
        let duration = start.elapsed();

        let summary = match result {
            Ok(summary) => summary,
            Err(err) => {
                eprintln!("simulation failed: {err}");
                process::exit(1);
            }
        };
        stats.after(&summary, duration);

        if args.games == 1 {
            print_single(&args, &summary);
        } else if !args.quiet {
            println!(
                "Game {:>4}: Winner={:>6}, Rounds={:>4}, Duration={:?}",
                game_idx + 1,
                summary
                    .winner
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                summary.rounds_played,
                duration
            );
        }
    }

    if args.games > 1 && !args.quiet {
        print_batch_summary(&stats, &strategies);
    }
}

fn print_single(args: &Args, summary: &GameSummary) {
    if args.json {
        match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("cannot serialize summary: {err}"),
        }
    } else {
        print!("{summary}");
        let _ = io::stdout().flush();
    }
}

fn print_batch_summary(stats: &StatisticsAccumulator, strategies: &[StrategyInstance]) {
    println!("\n{}", "=".repeat(70));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(70));

    println!(
        "\n{:<18} {:<8} {:<10} {:<8}",
        "Player", "Wins", "Win Rate", "Avg VP"
    );
    println!("{}", "-".repeat(48));
    for (idx, strategy) in strategies.iter().enumerate() {
        let color = Color::ORDERED[idx];
        let wins = stats.stats.wins.get(&color).copied().unwrap_or(0);
        let win_rate = if stats.stats.games > 0 {
            wins as f64 / stats.stats.games as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "{:<18} {:<8} {:<9.1}% {:<8.2}",
            format!("{} ({})", strategy.name(), color),
            wins,
            win_rate,
            stats.stats.avg_vps(color)
        );
    }

    println!("\n  Total Games: {}", stats.stats.games);
    println!("  Avg Rounds: {:.2}", stats.stats.avg_rounds());
    println!("  Avg Duration: {:.2?}", stats.stats.avg_duration());
}
