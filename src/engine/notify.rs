use thiserror::Error;
use tracing::warn;

use crate::domain::{ParticipantId, Standing};
use crate::engine::events::{GameEvent, GameEventKind};
use crate::engine::settlement::RoundSettlement;

/// Ошибка доставки уведомления (транспорт, чат-платформа и т.п.).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("Доставка не удалась: {0}")]
    Delivery(String),
}

/// Получатель уведомлений об игре.
///
/// Реализует вызывающий код (чат-бот, консоль, тесты). Сам движок этот
/// трейт не вызывает: события раздаёт `dispatch_events`.
pub trait NotificationSink {
    fn announce_opened(&mut self, title: &str) -> Result<(), NotifyError>;

    fn registration_updated(
        &mut self,
        _participant_id: ParticipantId,
        _registered_count: u32,
    ) -> Result<(), NotifyError> {
        Ok(())
    }

    fn game_started(&mut self, _total_rounds: u32, _registered_count: u32) -> Result<(), NotifyError> {
        Ok(())
    }

    fn round_opened(&mut self, round_index: u32, is_overtime: bool) -> Result<(), NotifyError>;

    fn round_settled(&mut self, settlement: &RoundSettlement) -> Result<(), NotifyError>;

    fn overtime_entered(&mut self, tied_top_score: u32) -> Result<(), NotifyError>;

    fn game_finished(&mut self, ranking: &[Standing]) -> Result<(), NotifyError>;
}

/// Итог рассылки пачки событий.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    /// (индекс события, ошибка).
    pub failures: Vec<(u32, NotifyError)>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Раздать события получателю.
///
/// Состояние игры к этому моменту уже зафиксировано: сбой доставки
/// только попадает в отчёт, рассылка продолжается со следующего события.
pub fn dispatch_events<S>(events: &[GameEvent], sink: &mut S) -> DispatchReport
where
    S: NotificationSink + ?Sized,
{
    let mut report = DispatchReport::default();

    for event in events {
        let res = match &event.kind {
            GameEventKind::GameAnnounced { title } => sink.announce_opened(title),
            GameEventKind::ParticipantRegistered {
                participant_id,
                registered_count,
            } => sink.registration_updated(*participant_id, *registered_count),
            GameEventKind::GameStarted {
                total_rounds,
                registered_count,
            } => sink.game_started(*total_rounds, *registered_count),
            GameEventKind::RoundOpened(opened) => {
                sink.round_opened(opened.round_index, opened.is_overtime)
            }
            GameEventKind::RoundSettled(settlement) => sink.round_settled(settlement),
            GameEventKind::OvertimeEntered { tied_top_score, .. } => {
                sink.overtime_entered(*tied_top_score)
            }
            GameEventKind::GameFinished(summary) => sink.game_finished(&summary.ranking),
        };

        match res {
            Ok(()) => report.delivered += 1,
            Err(err) => {
                warn!(event_index = event.index, error = %err, "notification delivery failed");
                report.failures.push((event.index, err));
            }
        }
    }

    report
}
