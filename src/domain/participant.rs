use serde::{Deserialize, Serialize};

use crate::domain::choice::Choice;
use crate::domain::ParticipantId;

/// Участник в контексте текущей игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    /// Накопленные очки за игру.
    pub score: u32,
    /// Выбор в открытом раунде (None — ещё не голосовал).
    pub choice: Option<Choice>,
}

/// Строка итоговой таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    /// Позиция в таблице, начиная с 1.
    pub place: u32,
    pub participant_id: ParticipantId,
    pub score: u32,
}
