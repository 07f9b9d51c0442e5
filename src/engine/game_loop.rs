use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    Choice, GameConfig, GamePhase, Participant, ParticipantId, RegistrationPolicy, Standing,
};
use crate::engine::errors::EngineError;
use crate::engine::events::{GameEvent, GameEventKind, GameHistory};
use crate::engine::leaderboard::{compute_leaders, rank_standings, Leaders};
use crate::engine::outcomes::{
    Continuation, FinishResult, FinishSummary, RegisterResult, RoundOpened, RoundResult,
    StartResult, SubmitResult,
};
use crate::engine::settlement::{settle_round, RoundSettlement};

/// Движок одной игры «меньшинство побеждает».
///
/// Чистая машина состояний без ввода-вывода: операции возвращают
/// результаты и события, рассылкой занимается вызывающий код.
/// Один экземпляр = одна активная игра; для нескольких игр заводите
/// несколько движков.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    title: String,
    phase: GamePhase,
    /// Регулярных раундов в текущей игре.
    total_rounds: u32,
    /// Номер текущего раунда (0 — до первого), растёт и в овертайме.
    round_index: u32,
    is_overtime: bool,
    registered: HashSet<ParticipantId>,
    /// Выбор в открытом раунде. Ключи ⊆ registered.
    choices: HashMap<ParticipantId, Choice>,
    /// Очки за игру. Ключи ⊇ registered.
    scores: HashMap<ParticipantId, u32>,
    history: GameHistory,
    /// Итог последней завершённой игры (до следующего `announce`).
    last_result: Option<FinishSummary>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Движок с конфигурацией по умолчанию.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            title: config.default_title.clone(),
            total_rounds: config.default_total_rounds,
            config,
            phase: GamePhase::Idle,
            round_index: 0,
            is_overtime: false,
            registered: HashSet::new(),
            choices: HashMap::new(),
            scores: HashMap::new(),
            history: GameHistory::new(),
            last_result: None,
        }
    }

    // ---------------------------------------------------------------
    // Операции
    // ---------------------------------------------------------------

    /// Объявить новую игру.
    ///
    /// Полностью сбрасывает предыдущую (включая очки), открывает регистрацию.
    pub fn announce(&mut self, title: impl Into<String>) -> Vec<GameEvent> {
        let title = title.into();

        if self.phase.is_running() {
            info!(
                previous = %self.title,
                round_index = self.round_index,
                "discarding running game"
            );
        }

        self.title = title.clone();
        self.phase = GamePhase::Registering;
        self.total_rounds = self.config.default_total_rounds;
        self.round_index = 0;
        self.is_overtime = false;
        self.registered.clear();
        self.choices.clear();
        self.scores.clear();
        self.history = GameHistory::new();
        self.last_result = None;

        info!(title = %self.title, "game announced");

        vec![self.history.push(GameEventKind::GameAnnounced { title })]
    }

    /// Зарегистрировать участника. Повторная регистрация — успешный no-op.
    pub fn register(&mut self, participant_id: ParticipantId) -> Result<RegisterResult, EngineError> {
        match self.phase {
            GamePhase::Idle | GamePhase::Finished => return Err(EngineError::NoActiveGame),
            GamePhase::Registering => {}
            GamePhase::RoundOpen | GamePhase::RoundClosed => {
                if self.config.registration_policy == RegistrationPolicy::ClosedAfterStart {
                    return Err(EngineError::AlreadyRunning);
                }
            }
        }

        let newly_registered = self.registered.insert(participant_id);
        self.scores.entry(participant_id).or_insert(0);
        let registered_count = self.registered_count();

        let mut events = Vec::new();
        if newly_registered {
            debug!(participant_id, registered_count, "participant registered");
            events.push(self.history.push(GameEventKind::ParticipantRegistered {
                participant_id,
                registered_count,
            }));
        }

        Ok(RegisterResult {
            participant_id,
            registered_count,
            newly_registered,
            events,
        })
    }

    /// Старт игры и сразу открытие первого раунда.
    ///
    /// `total_rounds`: None, 0 или отрицательное → значение из конфига.
    pub fn start(&mut self, total_rounds: Option<i64>) -> Result<StartResult, EngineError> {
        match self.phase {
            GamePhase::Idle | GamePhase::Finished => return Err(EngineError::NoActiveGame),
            GamePhase::RoundOpen | GamePhase::RoundClosed => {
                return Err(EngineError::AlreadyRunning)
            }
            GamePhase::Registering => {}
        }
        if self.registered.is_empty() {
            return Err(EngineError::NoParticipants);
        }

        self.total_rounds = self.config.resolve_total_rounds(total_rounds);
        self.round_index = 0;
        self.is_overtime = false;

        let registered_count = self.registered_count();
        info!(
            title = %self.title,
            total_rounds = self.total_rounds,
            registered_count,
            "game started"
        );

        let mut events = vec![self.history.push(GameEventKind::GameStarted {
            total_rounds: self.total_rounds,
            registered_count,
        })];
        let round = self.open_next_round(&mut events);

        Ok(StartResult {
            total_rounds: self.total_rounds,
            registered_count,
            round,
            events,
        })
    }

    /// Принять выбор участника. Пока раунд открыт, засчитывается последний.
    pub fn submit_choice(
        &mut self,
        participant_id: ParticipantId,
        choice: Choice,
    ) -> Result<SubmitResult, EngineError> {
        if self.phase != GamePhase::RoundOpen {
            return Err(EngineError::RoundNotOpen);
        }
        if !self.registered.contains(&participant_id) {
            return Err(EngineError::NotRegistered(participant_id));
        }

        let previous = self.choices.insert(participant_id, choice);
        debug!(
            participant_id,
            %choice,
            round_index = self.round_index,
            changed = previous.is_some(),
            "choice recorded"
        );

        Ok(SubmitResult {
            participant_id,
            choice,
            previous,
            round_index: self.round_index,
            submitted_count: self.choices.len() as u32,
        })
    }

    /// Закрыть раунд: подсчёт, начисление очков и переход дальше
    /// (следующий раунд, овертайм или финиш).
    pub fn close_round(&mut self) -> Result<RoundResult, EngineError> {
        if self.phase != GamePhase::RoundOpen {
            return Err(EngineError::RoundNotOpen);
        }

        let mut events = Vec::new();
        let settlement = self.settle_open_round(&mut events);
        let continuation = self.decide_continuation(&mut events);

        Ok(RoundResult {
            settlement,
            continuation,
            events,
        })
    }

    /// Принудительно завершить игру.
    ///
    /// Открытый раунд сначала подсчитывается. Овертайм не назначается,
    /// даже если наверху ничья.
    pub fn force_end_game(&mut self) -> Result<FinishResult, EngineError> {
        if !self.phase.is_running() {
            return Err(EngineError::NoGameRunning);
        }

        let mut events = Vec::new();
        let settlement = if self.phase == GamePhase::RoundOpen {
            Some(self.settle_open_round(&mut events))
        } else {
            None
        };
        let summary = self.finalize(true, &mut events);

        Ok(FinishResult {
            settlement,
            summary,
            events,
        })
    }

    // ---------------------------------------------------------------
    // Внутренние шаги
    // ---------------------------------------------------------------

    fn open_next_round(&mut self, events: &mut Vec<GameEvent>) -> RoundOpened {
        self.round_index += 1;
        self.choices.clear();
        self.phase = GamePhase::RoundOpen;

        let opened = RoundOpened {
            round_index: self.round_index,
            is_overtime: self.is_overtime,
        };
        info!(
            round_index = opened.round_index,
            is_overtime = opened.is_overtime,
            "round opened"
        );
        events.push(self.history.push(GameEventKind::RoundOpened(opened)));
        opened
    }

    fn settle_open_round(&mut self, events: &mut Vec<GameEvent>) -> RoundSettlement {
        let settlement = settle_round(
            &self.choices,
            &mut self.scores,
            self.round_index,
            self.is_overtime,
        );
        self.phase = GamePhase::RoundClosed;

        info!(
            round_index = settlement.round_index,
            count_a = settlement.count_a,
            count_b = settlement.count_b,
            winner = %settlement.winner,
            reason = ?settlement.reason,
            "round settled"
        );
        events.push(self.history.push(GameEventKind::RoundSettled(settlement.clone())));
        settlement
    }

    fn decide_continuation(&mut self, events: &mut Vec<GameEvent>) -> Continuation {
        if !self.is_overtime && self.round_index >= self.total_rounds {
            let leaders = compute_leaders(&self.scores);
            if !leaders.is_tied() {
                return Continuation::Finished(self.finalize(false, events));
            }

            self.is_overtime = true;
            info!(
                tied_top_score = leaders.top_score,
                leaders = leaders.ids.len(),
                "regulation ended tied, entering overtime"
            );
            events.push(self.history.push(GameEventKind::OvertimeEntered {
                tied_top_score: leaders.top_score,
                leaders: leaders.ids.clone(),
            }));
            let round = self.open_next_round(events);
            return Continuation::OvertimeEntered {
                tied_top_score: leaders.top_score,
                leaders: leaders.ids,
                round,
            };
        }

        if self.is_overtime {
            let leaders = compute_leaders(&self.scores);
            if !leaders.is_tied() {
                return Continuation::Finished(self.finalize(false, events));
            }
        }

        Continuation::NextRound(self.open_next_round(events))
    }

    fn finalize(&mut self, forced: bool, events: &mut Vec<GameEvent>) -> FinishSummary {
        let summary = FinishSummary {
            title: self.title.clone(),
            ranking: rank_standings(&self.scores),
            rounds_played: self.round_index,
            forced,
        };

        // Название остаётся, участники и очки — нет: новая игра только через announce.
        self.phase = GamePhase::Finished;
        self.round_index = 0;
        self.is_overtime = false;
        self.registered.clear();
        self.choices.clear();
        self.scores.clear();

        info!(
            title = %summary.title,
            rounds_played = summary.rounds_played,
            forced,
            winners = ?summary.winners(),
            "game finished"
        );
        events.push(self.history.push(GameEventKind::GameFinished(summary.clone())));
        self.last_result = Some(summary.clone());
        summary
    }

    // ---------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    pub fn is_overtime(&self) -> bool {
        self.is_overtime
    }

    pub fn registered_count(&self) -> u32 {
        self.registered.len() as u32
    }

    pub fn is_registered(&self, participant_id: ParticipantId) -> bool {
        self.registered.contains(&participant_id)
    }

    /// Зарегистрированные участники по возрастанию id.
    pub fn registered_ids(&self) -> Vec<ParticipantId> {
        let mut ids: Vec<ParticipantId> = self.registered.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn submitted_count(&self) -> u32 {
        self.choices.len() as u32
    }

    pub fn choice_of(&self, participant_id: ParticipantId) -> Option<Choice> {
        self.choices.get(&participant_id).copied()
    }

    pub fn score_of(&self, participant_id: ParticipantId) -> Option<u32> {
        self.scores.get(&participant_id).copied()
    }

    pub fn participant(&self, participant_id: ParticipantId) -> Option<Participant> {
        if !self.registered.contains(&participant_id) {
            return None;
        }
        Some(Participant {
            id: participant_id,
            score: self.scores.get(&participant_id).copied().unwrap_or(0),
            choice: self.choices.get(&participant_id).copied(),
        })
    }

    /// Текущие лидеры (пересчёт по всей таблице).
    pub fn leaders(&self) -> Leaders {
        compute_leaders(&self.scores)
    }

    /// Текущая таблица очков.
    pub fn standings(&self) -> Vec<Standing> {
        rank_standings(&self.scores)
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn last_result(&self) -> Option<&FinishSummary> {
        self.last_result.as_ref()
    }
}
