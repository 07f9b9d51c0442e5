//! Результаты операций движка.
//!
//! Каждая мутирующая операция возвращает структурированный результат
//! плюс список событий, которые она породила.

use serde::{Deserialize, Serialize};

use crate::domain::{Choice, ParticipantId, Standing};
use crate::engine::events::GameEvent;
use crate::engine::settlement::RoundSettlement;

/// Открыт новый раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOpened {
    pub round_index: u32,
    pub is_overtime: bool,
}

/// Результат `register`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterResult {
    pub participant_id: ParticipantId,
    pub registered_count: u32,
    /// false — участник уже был зарегистрирован (операция идемпотентна).
    pub newly_registered: bool,
    pub events: Vec<GameEvent>,
}

/// Результат `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartResult {
    pub total_rounds: u32,
    pub registered_count: u32,
    pub round: RoundOpened,
    pub events: Vec<GameEvent>,
}

/// Результат `submit_choice`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitResult {
    pub participant_id: ParticipantId,
    pub choice: Choice,
    /// Предыдущий выбор в этом раунде, если участник передумал.
    pub previous: Option<Choice>,
    pub round_index: u32,
    /// Сколько участников уже проголосовало в раунде.
    pub submitted_count: u32,
}

/// Что произошло после подсчёта раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Continuation {
    /// Обычный следующий раунд (регулярный или очередной овертайм).
    NextRound(RoundOpened),

    /// Регулярные раунды кончились вничью наверху — первый раунд овертайма.
    OvertimeEntered {
        tied_top_score: u32,
        leaders: Vec<ParticipantId>,
        round: RoundOpened,
    },

    /// Единоличный лидер определён, игра завершена.
    Finished(FinishSummary),
}

/// Результат `close_round`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub settlement: RoundSettlement,
    pub continuation: Continuation,
    pub events: Vec<GameEvent>,
}

/// Итог завершённой игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinishSummary {
    pub title: String,
    /// Очки по убыванию, при равенстве id по возрастанию.
    pub ranking: Vec<Standing>,
    /// Сколько раундов сыграно, включая овертайм.
    pub rounds_played: u32,
    /// Завершена принудительно (`force_end_game`).
    pub forced: bool,
}

impl FinishSummary {
    /// Победители: все, у кого максимальный счёт. При принудительном
    /// завершении их может быть несколько.
    pub fn winners(&self) -> Vec<ParticipantId> {
        let top = match self.ranking.first() {
            Some(first) => first.score,
            None => return Vec::new(),
        };
        self.ranking
            .iter()
            .take_while(|s| s.score == top)
            .map(|s| s.participant_id)
            .collect()
    }
}

/// Результат `force_end_game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishResult {
    /// Подсчёт раунда, который был открыт в момент остановки.
    pub settlement: Option<RoundSettlement>,
    pub summary: FinishSummary,
    pub events: Vec<GameEvent>,
}
