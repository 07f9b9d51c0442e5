// src/engine/shared.rs

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Choice, ParticipantId};
use crate::engine::errors::EngineError;
use crate::engine::events::GameEvent;
use crate::engine::game_loop::GameEngine;
use crate::engine::outcomes::{FinishResult, RegisterResult, RoundResult, StartResult, SubmitResult};

/// Разделяемый движок:
/// - одна блокировка на всю игру, каждая операция выполняется под ней целиком;
/// - клоны указывают на один и тот же `GameEngine`;
/// - для нескольких игр заводите несколько `SharedGameEngine`.
#[derive(Clone, Debug, Default)]
pub struct SharedGameEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedGameEngine {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn announce(&self, title: impl Into<String>) -> Vec<GameEvent> {
        self.inner.lock().announce(title)
    }

    pub fn register(&self, participant_id: ParticipantId) -> Result<RegisterResult, EngineError> {
        self.inner.lock().register(participant_id)
    }

    pub fn start(&self, total_rounds: Option<i64>) -> Result<StartResult, EngineError> {
        self.inner.lock().start(total_rounds)
    }

    pub fn submit_choice(
        &self,
        participant_id: ParticipantId,
        choice: Choice,
    ) -> Result<SubmitResult, EngineError> {
        self.inner.lock().submit_choice(participant_id, choice)
    }

    pub fn close_round(&self) -> Result<RoundResult, EngineError> {
        self.inner.lock().close_round()
    }

    pub fn force_end_game(&self) -> Result<FinishResult, EngineError> {
        self.inner.lock().force_end_game()
    }

    /// Прочитать состояние под блокировкой.
    pub fn read<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Выполнить произвольную последовательность операций атомарно
    /// (например, командный исполнитель из `api`).
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Копия текущего состояния.
    pub fn snapshot(&self) -> GameEngine {
        self.inner.lock().clone()
    }
}
