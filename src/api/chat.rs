//! Разбор текстовых команд чата.
//!
//! Формат как у чат-бота: `/команда [аргумент]`. Отправитель сюда не
//! попадает — его id подставляет вызывающий код (`into_command`).

use serde::{Deserialize, Serialize};

use crate::domain::{Choice, ParticipantId};

use super::commands::{AnnounceCommand, Command, RegisterCommand, StartCommand, SubmitChoiceCommand};

/// Все варианты команды регистрации (на случай, если `/register`
/// перехвачен другим ботом).
pub const REGISTER_ALIASES: [&str; 5] = ["mg_register", "join", "报名", "参加", "register"];

/// Разобранная команда чата.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatCommand {
    AnnounceGame,
    Register,
    StartGame { total_rounds: Option<i64> },
    Choose(Choice),
    EndRound,
    EndGame,
}

impl ChatCommand {
    /// Административные команды (проверка прав — на стороне вызывающего кода).
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            ChatCommand::AnnounceGame
                | ChatCommand::StartGame { .. }
                | ChatCommand::EndRound
                | ChatCommand::EndGame
        )
    }

    /// Превратить в типизированную команду от имени отправителя.
    pub fn into_command(self, sender: ParticipantId) -> Command {
        match self {
            ChatCommand::AnnounceGame => Command::Announce(AnnounceCommand { title: None }),
            ChatCommand::Register => Command::Register(RegisterCommand {
                participant_id: sender,
            }),
            ChatCommand::StartGame { total_rounds } => Command::Start(StartCommand { total_rounds }),
            ChatCommand::Choose(choice) => Command::SubmitChoice(SubmitChoiceCommand {
                participant_id: sender,
                choice,
            }),
            ChatCommand::EndRound => Command::EndRound,
            ChatCommand::EndGame => Command::EndGame,
        }
    }
}

/// Разобрать строку чата. Не команда или неизвестная команда → None.
pub fn parse_chat_command(text: &str) -> Option<ChatCommand> {
    let body = text.trim().strip_prefix('/')?;
    let mut parts = body.split_whitespace();
    let name = parts.next()?;

    let cmd = match name {
        "announce_game" => ChatCommand::AnnounceGame,
        n if REGISTER_ALIASES.contains(&n) => ChatCommand::Register,
        "start_game" => ChatCommand::StartGame {
            total_rounds: parts.next().and_then(parse_round_count),
        },
        "A" | "a" => ChatCommand::Choose(Choice::A),
        "B" | "b" => ChatCommand::Choose(Choice::B),
        "end_round" => ChatCommand::EndRound,
        "end_game" => ChatCommand::EndGame,
        _ => return None,
    };

    Some(cmd)
}

/// Только цифры. Всё остальное (включая "-3" и "abc") → по умолчанию.
fn parse_round_count(arg: &str) -> Option<i64> {
    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}
