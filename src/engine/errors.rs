use crate::domain::ParticipantId;

use thiserror::Error;

/// Ошибки движка игры.
///
/// Все они ожидаемые: неверный порядок команд или чужой участник.
/// Состояние игры при ошибке не меняется.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Игра не объявлена")]
    NoActiveGame,

    #[error("Игра уже идёт")]
    AlreadyRunning,

    #[error("Нет зарегистрированных участников")]
    NoParticipants,

    #[error("Раунд не открыт")]
    RoundNotOpen,

    #[error("Участник {0} не зарегистрирован")]
    NotRegistered(ParticipantId),

    #[error("Игра не запущена")]
    NoGameRunning,
}
