use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Сколько регулярных раундов играем, если при старте не указано иное.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;

/// Название игры по умолчанию.
pub const DEFAULT_TITLE: &str = "Minority Game";

/// Можно ли регистрироваться после старта игры.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Регистрация закрывается на `start`: состав участников фиксирован на всю игру.
    #[default]
    ClosedAfterStart,
    /// Поздний вход разрешён: новичок стартует с 0 очков и голосует уже в текущем раунде.
    OpenDuringGame,
}

/// Ошибки конфигурации игры.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("GameConfig: default_total_rounds = 0")]
    ZeroDefaultRounds,

    #[error("GameConfig: default_title is empty")]
    EmptyDefaultTitle,
}

/// Конфигурация движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Название, которое вызывающий код подставляет, если админ его не задал.
    pub default_title: String,

    /// Количество регулярных раундов по умолчанию.
    pub default_total_rounds: u32,

    /// Политика регистрации после старта.
    pub registration_policy: RegistrationPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_total_rounds: DEFAULT_TOTAL_ROUNDS,
            registration_policy: RegistrationPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_total_rounds == 0 {
            return Err(ConfigError::ZeroDefaultRounds);
        }
        if self.default_title.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultTitle);
        }
        Ok(())
    }

    pub fn with_registration_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.registration_policy = policy;
        self
    }

    /// Итоговое число регулярных раундов для `start`.
    ///
    /// Не задано, 0 или отрицательное → значение по умолчанию (это не ошибка).
    pub fn resolve_total_rounds(&self, requested: Option<i64>) -> u32 {
        match requested {
            Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => self.default_total_rounds,
        }
    }
}
