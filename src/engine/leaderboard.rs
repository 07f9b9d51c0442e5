// src/engine/leaderboard.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ParticipantId, Standing};

/// Лидеры по очкам.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Leaders {
    /// Все, у кого максимальный счёт (по возрастанию id).
    pub ids: Vec<ParticipantId>,
    pub top_score: u32,
}

impl Leaders {
    /// Наверху двое и больше — нужен овертайм.
    pub fn is_tied(&self) -> bool {
        self.ids.len() >= 2
    }

    pub fn sole_leader(&self) -> Option<ParticipantId> {
        match self.ids.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Лидеры считаются заново полным проходом по таблице очков.
///
/// Пустая таблица → лидеров нет, top_score = 0.
pub fn compute_leaders(scores: &HashMap<ParticipantId, u32>) -> Leaders {
    let mut top_score = 0;
    let mut ids: Vec<ParticipantId> = Vec::new();

    for (&id, &score) in scores {
        if ids.is_empty() || score > top_score {
            top_score = score;
            ids.clear();
            ids.push(id);
        } else if score == top_score {
            ids.push(id);
        }
    }

    ids.sort_unstable();
    Leaders { ids, top_score }
}

/// Итоговая таблица: очки по убыванию, при равенстве — id по возрастанию.
pub fn rank_standings(scores: &HashMap<ParticipantId, u32>) -> Vec<Standing> {
    let mut rows: Vec<(ParticipantId, u32)> = scores.iter().map(|(&id, &s)| (id, s)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    rows.into_iter()
        .enumerate()
        .map(|(idx, (participant_id, score))| Standing {
            place: idx as u32 + 1,
            participant_id,
            score,
        })
        .collect()
}
