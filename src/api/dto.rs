use serde::{Deserialize, Serialize};

use crate::domain::{Choice, GamePhase, ParticipantId};
use crate::engine::{Continuation, FinishSummary, GameEvent, RoundOpened, RoundSettlement};

/// DTO строки таблицы очков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingDto {
    pub place: u32,
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub score: u32,
}

/// DTO участника.
///
/// Сам выбор не раскрываем до подсчёта — только факт голосования.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantDto {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub score: u32,
    pub has_submitted: bool,
}

/// DTO игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub title: String,
    pub phase: GamePhase,
    pub total_rounds: u32,
    pub round_index: u32,
    pub is_overtime: bool,
    pub registered_count: u32,
    pub submitted_count: u32,
    /// Текущая таблица, а после финиша — итоговая.
    pub standings: Vec<StandingDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Игра объявлена.
    Announced { title: String },

    /// Регистрация принята (в том числе повторная).
    Registered {
        participant_id: ParticipantId,
        registered_count: u32,
        newly_registered: bool,
    },

    /// Игра стартовала, первый раунд открыт.
    Started {
        total_rounds: u32,
        registered_count: u32,
        round: RoundOpened,
    },

    /// Выбор записан.
    ChoiceRecorded {
        participant_id: ParticipantId,
        choice: Choice,
        round_index: u32,
    },

    /// Раунд подсчитан.
    RoundClosed {
        settlement: RoundSettlement,
        continuation: Continuation,
    },

    /// Игра завершена принудительно.
    GameEnded {
        settlement: Option<RoundSettlement>,
        summary: FinishSummary,
    },
}

/// Ответ плюс события, которые вызывающий код должен разослать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandOutcome {
    pub response: CommandResponse,
    pub events: Vec<GameEvent>,
}
