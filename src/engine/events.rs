use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;
use crate::engine::outcomes::{FinishSummary, RoundOpened};
use crate::engine::settlement::RoundSettlement;

/// Тип события в игре.
///
/// Движок сам ничего не отправляет: события возвращаются вызывающему коду,
/// который превращает их в сообщения (см. `engine::notify`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Объявлена новая игра, открыта регистрация.
    GameAnnounced { title: String },

    /// Новый участник (повторная регистрация события не даёт).
    ParticipantRegistered {
        participant_id: ParticipantId,
        registered_count: u32,
    },

    /// Игра стартовала.
    GameStarted {
        total_rounds: u32,
        registered_count: u32,
    },

    /// Открыт очередной раунд (регулярный или овертайм).
    RoundOpened(RoundOpened),

    /// Раунд подсчитан.
    RoundSettled(RoundSettlement),

    /// Регулярные раунды кончились, наверху ничья.
    OvertimeEntered {
        tied_top_score: u32,
        leaders: Vec<ParticipantId>,
    },

    /// Игра завершена.
    GameFinished(FinishSummary),
}

/// Событие с порядковым номером внутри игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история текущей игры. Сбрасывается на `announce`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Добавить событие и вернуть его копию (для результата операции).
    pub fn push(&mut self, kind: GameEventKind) -> GameEvent {
        let event = GameEvent {
            index: self.events.len() as u32,
            kind,
        };
        self.events.push(event.clone());
        event
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// События, начиная с индекса `from` (для догоняющих подписчиков).
    pub fn since(&self, from: u32) -> &[GameEvent] {
        let start = (from as usize).min(self.events.len());
        &self.events[start..]
    }
}
