//! Движок игры: регистрация, жизненный цикл раундов, правило меньшинства,
//! очки, лидеры и овертайм.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `announce` – объявить новую игру (полный сброс)
//!   - `register` – зарегистрировать участника
//!   - `start` – старт и открытие первого раунда
//!   - `submit_choice` – выбор A/B в открытом раунде
//!   - `close_round` – подсчёт и переход дальше
//!   - `force_end_game` – принудительный финиш

pub mod errors;
pub mod events;
pub mod game_loop;
pub mod leaderboard;
pub mod notify;
pub mod outcomes;
pub mod settlement;
pub mod shared;

pub use errors::EngineError;
pub use events::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::GameEngine;
pub use leaderboard::{compute_leaders, rank_standings, Leaders};
pub use notify::{dispatch_events, DispatchReport, NotificationSink, NotifyError};
pub use outcomes::{
    Continuation, FinishResult, FinishSummary, RegisterResult, RoundOpened, RoundResult,
    StartResult, SubmitResult,
};
pub use settlement::{decide_winner, settle_round, RoundSettlement, SettlementReason, VoteTally};
pub use shared::SharedGameEngine;
