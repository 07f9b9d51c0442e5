use serde::{Deserialize, Serialize};

use crate::domain::{Choice, ParticipantId};

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`MinorityOperation`),
/// которые Linera экспонирует наружу. Аргументы уже разобраны и
/// типизированы — текстовый разбор живёт в `api::chat`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Объявить новую игру (административная).
    Announce(AnnounceCommand),

    /// Зарегистрировать участника.
    Register(RegisterCommand),

    /// Старт игры (административная).
    Start(StartCommand),

    /// Выбор участника в открытом раунде.
    SubmitChoice(SubmitChoiceCommand),

    /// Закрыть текущий раунд и подсчитать (административная, "end_round").
    EndRound,

    /// Принудительно завершить игру (административная, "end_game").
    EndGame,
}

/// Объявление игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnounceCommand {
    /// None → название из `GameConfig::default_title`.
    pub title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterCommand {
    pub participant_id: ParticipantId,
}

/// Старт игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartCommand {
    /// Число регулярных раундов. None / 0 / отрицательное → по умолчанию.
    pub total_rounds: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitChoiceCommand {
    pub participant_id: ParticipantId,
    pub choice: Choice,
}
