// src/bin/minority_dev_cli.rs
//
// Консоль для ручной игры: каждая строка stdin — "<отправитель> <команда>",
// например:
//     admin /announce_game
//     alice /join
//     admin /start_game 3
//     alice /A
//     admin /end_round

use std::io::{self, BufRead};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minority_engine::api::{execute_command, parse_chat_command, ApiError, CommandResponse};
use minority_engine::domain::{GameConfig, RegistrationPolicy, DEFAULT_TITLE, DEFAULT_TOTAL_ROUNDS};
use minority_engine::engine::{dispatch_events, GameEngine};
use minority_engine::infra::{render_api_error, ParticipantDirectory, TextNotifier};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "minority_dev_cli")]
#[command(about = "Interactive console for the minority game engine")]
struct Args {
    /// Title used by /announce_game.
    #[arg(long, env = "MINORITY_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Regulation rounds when /start_game has no argument.
    #[arg(long, env = "MINORITY_DEFAULT_ROUNDS", default_value_t = DEFAULT_TOTAL_ROUNDS)]
    default_rounds: u32,

    /// Accept registrations while a game is running.
    #[arg(long, env = "MINORITY_OPEN_REGISTRATION")]
    open_registration: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("minority_engine=info".parse()?))
        .init();

    let args = Args::parse();

    let policy = if args.open_registration {
        RegistrationPolicy::OpenDuringGame
    } else {
        RegistrationPolicy::ClosedAfterStart
    };
    let config = GameConfig {
        default_title: args.title,
        default_total_rounds: args.default_rounds,
        registration_policy: policy,
    };
    config.validate()?;

    let mut engine = GameEngine::with_config(config);
    let mut directory = ParticipantDirectory::new();

    println!("=== MINORITY GAME DEV CLI ===");
    println!("Формат строки: <отправитель> <команда>, например: alice /join");
    println!("Выход: quit\n");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some((sender, text)) = line.split_once(char::is_whitespace) else {
            println!("  Нужно: <отправитель> <команда>");
            continue;
        };

        let Some(chat) = parse_chat_command(text) else {
            let err = ApiError::BadRequest(format!("неизвестная команда {}", text.trim()));
            println!("  [{}] {}", sender, render_api_error(&err));
            continue;
        };

        let participant_id = directory.resolve(sender);

        match execute_command(&mut engine, chat.into_command(participant_id)) {
            Ok(outcome) => {
                if let CommandResponse::ChoiceRecorded { choice, .. } = &outcome.response {
                    println!(
                        "  [{}] Выбор записан: {} (можно менять, засчитывается последний)",
                        sender, choice
                    );
                }
                if let CommandResponse::Registered {
                    newly_registered: false,
                    ..
                } = &outcome.response
                {
                    println!("  [{}] Вы уже зарегистрированы.", sender);
                }

                let mut notifier = TextNotifier::new(&directory);
                let report = dispatch_events(&outcome.events, &mut notifier);
                if !report.is_clean() {
                    println!("  (не доставлено уведомлений: {})", report.failures.len());
                }
                for msg in notifier.into_messages() {
                    println!("{}\n", msg);
                }
            }
            Err(err) => println!("  [{}] {}", sender, render_api_error(&err)),
        }
    }

    println!("=== MINORITY GAME DEV CLI DONE ===");
    Ok(())
}
