// src/bin/minority_sim_cli.rs
//
// Прогон целой игры ботами со случайными голосами.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minority_engine::domain::{GameConfig, ParticipantId};
use minority_engine::engine::GameEngine;
use minority_engine::infra::{
    play_random_game, round_label, ChoiceSource, DefaultNameResolver, DeterministicRng,
    PlayerNameResolver, SystemRng,
};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "minority_sim_cli")]
#[command(about = "Plays a whole minority game with random voters")]
struct Args {
    /// Number of bot participants.
    #[arg(long, env = "MINORITY_PLAYERS", default_value_t = 5)]
    players: u32,

    /// Regulation rounds (0 or negative falls back to the default).
    #[arg(long, env = "MINORITY_ROUNDS", allow_negative_numbers = true)]
    rounds: Option<i64>,

    /// Seed for reproducible runs.
    #[arg(long, env = "MINORITY_SEED")]
    seed: Option<u64>,

    /// Force a finish after this many overtime rounds.
    #[arg(long, default_value_t = 50)]
    max_overtime: u32,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("minority_engine=info".parse()?))
        .init();

    let args = Args::parse();

    let config = GameConfig::default();
    config.validate()?;
    let title = config.default_title.clone();

    let mut engine = GameEngine::with_config(config);
    engine.announce(title);
    for id in 1..=ParticipantId::from(args.players) {
        engine.register(id)?;
    }

    let mut source: Box<dyn ChoiceSource> = match args.seed {
        Some(seed) => Box::new(DeterministicRng::from_seed(seed)),
        None => Box::new(SystemRng),
    };

    let report = play_random_game(&mut engine, args.rounds, source.as_mut(), args.max_overtime)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== MINORITY GAME SIMULATION ===\n");
    for r in &report.rounds {
        println!(
            "{:<22} A={:<3} B={:<3} → {} ({:?}), +1: {:?}",
            round_label(r.round_index, r.is_overtime),
            r.count_a,
            r.count_b,
            r.winner,
            r.reason,
            r.winners
        );
    }

    let names = DefaultNameResolver;
    println!(
        "\nИтоги «{}» (раундов: {}{}):",
        report.summary.title,
        report.summary.rounds_played,
        if report.summary.forced { ", остановлена принудительно" } else { "" }
    );
    for s in &report.summary.ranking {
        println!("  {}. {}: {}", s.place, names.resolve_name(s.participant_id), s.score);
    }

    Ok(())
}
