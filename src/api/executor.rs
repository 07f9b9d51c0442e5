// src/api/executor.rs

use crate::engine::GameEngine;

use super::commands::Command;
use super::dto::{CommandOutcome, CommandResponse};
use super::errors::ApiError;

/// Выполнить команду над движком.
///
/// Права администратора здесь не проверяются — это делает вызывающий код.
pub fn execute_command(engine: &mut GameEngine, command: Command) -> Result<CommandOutcome, ApiError> {
    let outcome = match command {
        Command::Announce(cmd) => {
            let title = cmd
                .title
                .unwrap_or_else(|| engine.config().default_title.clone());
            let events = engine.announce(title.clone());
            CommandOutcome {
                response: CommandResponse::Announced { title },
                events,
            }
        }

        Command::Register(cmd) => {
            let res = engine.register(cmd.participant_id)?;
            CommandOutcome {
                response: CommandResponse::Registered {
                    participant_id: res.participant_id,
                    registered_count: res.registered_count,
                    newly_registered: res.newly_registered,
                },
                events: res.events,
            }
        }

        Command::Start(cmd) => {
            let res = engine.start(cmd.total_rounds)?;
            CommandOutcome {
                response: CommandResponse::Started {
                    total_rounds: res.total_rounds,
                    registered_count: res.registered_count,
                    round: res.round,
                },
                events: res.events,
            }
        }

        Command::SubmitChoice(cmd) => {
            let res = engine.submit_choice(cmd.participant_id, cmd.choice)?;
            CommandOutcome {
                response: CommandResponse::ChoiceRecorded {
                    participant_id: res.participant_id,
                    choice: res.choice,
                    round_index: res.round_index,
                },
                events: Vec::new(),
            }
        }

        Command::EndRound => {
            let res = engine.close_round()?;
            CommandOutcome {
                response: CommandResponse::RoundClosed {
                    settlement: res.settlement,
                    continuation: res.continuation,
                },
                events: res.events,
            }
        }

        Command::EndGame => {
            let res = engine.force_end_game()?;
            CommandOutcome {
                response: CommandResponse::GameEnded {
                    settlement: res.settlement,
                    summary: res.summary,
                },
                events: res.events,
            }
        }
    };

    Ok(outcome)
}
