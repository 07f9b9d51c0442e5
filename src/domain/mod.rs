//! Доменная модель игры «меньшинство побеждает»: выбор A/B, участники,
//! фазы игры, конфигурация и итоговая таблица.

pub mod choice;
pub mod config;
pub mod game;
pub mod participant;

// Стабильный идентификатор участника. Как он получается из отправителя
// сообщения — забота вызывающего кода (см. infra::ids).
pub type ParticipantId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Choice и т.п.
pub use choice::*;
pub use config::*;
pub use game::*;
pub use participant::*;
