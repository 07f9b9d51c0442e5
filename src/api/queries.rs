use serde::{Deserialize, Serialize};

use crate::domain::{GamePhase, ParticipantId, Standing};
use crate::engine::{GameEngine, GameHistory};

use super::dto::{GameViewDto, ParticipantDto, StandingDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние игры.
    GetGame,

    /// Таблица очков (после финиша — итоговая).
    GetLeaderboard,

    /// Один участник.
    GetParticipant { participant_id: ParticipantId },

    /// Все события текущей игры.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    Leaderboard(Vec<StandingDto>),
    Participant(Option<ParticipantDto>),
    History(GameHistory),
}

/// Ответить на запрос.
pub fn answer_query(
    engine: &GameEngine,
    query: Query,
    resolve_name: impl Fn(ParticipantId) -> String,
) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(build_game_view(engine, resolve_name)),
        Query::GetLeaderboard => {
            QueryResponse::Leaderboard(build_standings_dto(&visible_standings(engine), &resolve_name))
        }
        Query::GetParticipant { participant_id } => {
            let dto = engine.participant(participant_id).map(|p| ParticipantDto {
                participant_id: p.id,
                display_name: resolve_name(p.id),
                score: p.score,
                has_submitted: p.choice.is_some(),
            });
            QueryResponse::Participant(dto)
        }
        Query::GetHistory => QueryResponse::History(engine.history().clone()),
    }
}

/// Сформировать DTO игры.
pub fn build_game_view(
    engine: &GameEngine,
    resolve_name: impl Fn(ParticipantId) -> String,
) -> GameViewDto {
    let standings = build_standings_dto(&visible_standings(engine), &resolve_name);

    GameViewDto {
        title: engine.title().to_string(),
        phase: engine.phase(),
        total_rounds: engine.total_rounds(),
        round_index: engine.round_index(),
        is_overtime: engine.is_overtime(),
        registered_count: engine.registered_count(),
        submitted_count: engine.submitted_count(),
        standings,
    }
}

/// Во время игры — живая таблица, после финиша — сохранённый итог.
fn visible_standings(engine: &GameEngine) -> Vec<Standing> {
    match (engine.phase(), engine.last_result()) {
        (GamePhase::Finished, Some(summary)) => summary.ranking.clone(),
        _ => engine.standings(),
    }
}

fn build_standings_dto(
    standings: &[Standing],
    resolve_name: &impl Fn(ParticipantId) -> String,
) -> Vec<StandingDto> {
    standings
        .iter()
        .map(|s| StandingDto {
            place: s.place,
            participant_id: s.participant_id,
            display_name: resolve_name(s.participant_id),
            score: s.score,
        })
        .collect()
}
