use serde::{Deserialize, Serialize};

/// Фаза игры.
///
/// Idle → Registering → RoundOpen ⇄ RoundClosed → … → Finished
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    /// Игра ещё ни разу не объявлялась.
    #[default]
    Idle,
    /// Игра объявлена, идёт регистрация.
    Registering,
    /// Раунд открыт, принимаем выбор участников.
    RoundOpen,
    /// Раунд подсчитан, следующий ещё не открыт (внутри `close_round`).
    RoundClosed,
    /// Игра завершена, для новой нужен `announce`.
    Finished,
}

impl GamePhase {
    /// Игра стартовала и ещё не закончилась.
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::RoundOpen | GamePhase::RoundClosed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Idle => "Idle",
            GamePhase::Registering => "Registering",
            GamePhase::RoundOpen => "RoundOpen",
            GamePhase::RoundClosed => "RoundClosed",
            GamePhase::Finished => "Finished",
        }
    }
}
