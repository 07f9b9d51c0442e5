use crate::api::ApiError;
use crate::domain::{ParticipantId, Standing};
use crate::engine::{NotificationSink, NotifyError, RoundSettlement, SettlementReason};

/// Утилита: получить отображаемое имя участника.
pub trait PlayerNameResolver {
    fn resolve_name(&self, participant_id: ParticipantId) -> String;
}

/// Простая реализация: отображаемое имя = "Player {id}".
pub struct DefaultNameResolver;

impl PlayerNameResolver for DefaultNameResolver {
    fn resolve_name(&self, participant_id: ParticipantId) -> String {
        format!("Player {}", participant_id)
    }
}

/// Подпись раунда: "Раунд N" или "Овертайм (раунд N)".
pub fn round_label(round_index: u32, is_overtime: bool) -> String {
    if is_overtime {
        format!("Овертайм (раунд {})", round_index)
    } else {
        format!("Раунд {}", round_index)
    }
}

/// Объяснение победы стороны.
pub fn reason_text(reason: SettlementReason) -> &'static str {
    match reason {
        SettlementReason::Minority => "меньшинство побеждает",
        SettlementReason::TieParityOdd => "ничья, нечётный раунд: A побеждает",
        SettlementReason::TieParityEven => "ничья, чётный раунд: B побеждает",
    }
}

/// Текст ошибки для пользователя.
pub fn render_api_error(err: &ApiError) -> String {
    match err {
        ApiError::BadRequest(msg) => format!("Некорректный запрос: {}", msg),
        ApiError::NoActiveGame => "Сейчас нет игры с открытой регистрацией. Ждите /announce_game.".into(),
        ApiError::AlreadyRunning => "Игра уже идёт.".into(),
        ApiError::NoParticipants => "Ещё никто не зарегистрировался.".into(),
        ApiError::RoundNotOpen => "Сейчас не идёт приём голосов.".into(),
        ApiError::NotRegistered(_) => {
            "Вы не зарегистрированы. Отправьте /mg_register или /join.".into()
        }
        ApiError::NoGameRunning => "Нет идущей игры.".into(),
    }
}

/// Получатель уведомлений, который собирает готовые тексты сообщений.
///
/// Удобен для консоли и тестов; чат-адаптер может отправлять эти строки
/// как есть.
pub struct TextNotifier<'a, R: PlayerNameResolver> {
    names: &'a R,
    messages: Vec<String>,
}

impl<'a, R: PlayerNameResolver> TextNotifier<'a, R> {
    pub fn new(names: &'a R) -> Self {
        Self {
            names,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl<'a, R: PlayerNameResolver> NotificationSink for TextNotifier<'a, R> {
    fn announce_opened(&mut self, title: &str) -> Result<(), NotifyError> {
        self.messages.push(format!(
            "【{}】\nОткрыта регистрация! Отправьте /mg_register или /join.\n\
             Админ запускает игру командой /start_game (по умолчанию 5 раундов, /start_game 7 — семь).\n\
             В каждом раунде отправьте /A или /B; побеждает меньшинство, при ничьей в нечётном раунде A, в чётном B.",
            title
        ));
        Ok(())
    }

    fn registration_updated(
        &mut self,
        participant_id: ParticipantId,
        registered_count: u32,
    ) -> Result<(), NotifyError> {
        self.messages.push(format!(
            "Регистрация: {} в игре (всего {}).",
            self.names.resolve_name(participant_id),
            registered_count
        ));
        Ok(())
    }

    fn game_started(&mut self, total_rounds: u32, registered_count: u32) -> Result<(), NotifyError> {
        self.messages.push(format!(
            "Игра началась! Раундов: {}; участников: {}.",
            total_rounds, registered_count
        ));
        Ok(())
    }

    fn round_opened(&mut self, round_index: u32, is_overtime: bool) -> Result<(), NotifyError> {
        self.messages.push(format!(
            "{} начался! Отправьте /A или /B. Админ закрывает раунд командой /end_round.",
            round_label(round_index, is_overtime)
        ));
        Ok(())
    }

    fn round_settled(&mut self, settlement: &RoundSettlement) -> Result<(), NotifyError> {
        let lines = [
            format!(
                "{} — итоги:",
                round_label(settlement.round_index, settlement.is_overtime)
            ),
            format!("A: {}", settlement.count_a),
            format!("B: {}", settlement.count_b),
            format!(
                "Победила сторона {} ({})",
                settlement.winner,
                reason_text(settlement.reason)
            ),
            "Каждый на стороне победителя получает +1.".to_string(),
        ];
        self.messages.push(lines.join("\n"));
        Ok(())
    }

    fn overtime_entered(&mut self, tied_top_score: u32) -> Result<(), NotifyError> {
        self.messages.push(format!(
            "Регулярные раунды окончены, наверху ничья ({} очк.). Овертайм!",
            tied_top_score
        ));
        Ok(())
    }

    fn game_finished(&mut self, ranking: &[Standing]) -> Result<(), NotifyError> {
        if ranking.is_empty() {
            self.messages.push("В этой игре никто не набрал очков.".to_string());
            return Ok(());
        }

        let mut lines = vec!["Итоги игры:".to_string()];
        for s in ranking {
            lines.push(format!(
                "{}. {}: {} очк.",
                s.place,
                self.names.resolve_name(s.participant_id),
                s.score
            ));
        }
        self.messages.push(lines.join("\n"));
        Ok(())
    }
}
