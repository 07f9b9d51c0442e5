use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём клиенту / чат-адаптеру).
///
/// Текст для пользователя собирается снаружи (см. `infra::mapping`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Игра не объявлена.
    NoActiveGame,

    /// Игра уже идёт.
    AlreadyRunning,

    /// Некого запускать.
    NoParticipants,

    /// Раунд сейчас не открыт.
    RoundNotOpen,

    /// Участник не зарегистрирован.
    NotRegistered(ParticipantId),

    /// Игра не запущена.
    NoGameRunning,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoActiveGame => ApiError::NoActiveGame,
            EngineError::AlreadyRunning => ApiError::AlreadyRunning,
            EngineError::NoParticipants => ApiError::NoParticipants,
            EngineError::RoundNotOpen => ApiError::RoundNotOpen,
            EngineError::NotRegistered(id) => ApiError::NotRegistered(id),
            EngineError::NoGameRunning => ApiError::NoGameRunning,
        }
    }
}
