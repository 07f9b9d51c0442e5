//! Прогон целой игры с ботами: каждый зарегистрированный участник
//! голосует по `ChoiceSource`, раунды закрываются сразу.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{Continuation, EngineError, FinishSummary, GameEngine, RoundSettlement};
use crate::infra::rng::ChoiceSource;

/// Отчёт симуляции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationReport {
    pub rounds: Vec<RoundSettlement>,
    pub summary: FinishSummary,
}

/// Стартовать объявленную игру и доиграть её до конца.
///
/// Случайные голоса могут держать ничью наверху сколь угодно долго,
/// поэтому после `max_overtime_rounds` раундов овертайма игра
/// завершается принудительно.
pub fn play_random_game<S>(
    engine: &mut GameEngine,
    total_rounds: Option<i64>,
    source: &mut S,
    max_overtime_rounds: u32,
) -> Result<SimulationReport, EngineError>
where
    S: ChoiceSource + ?Sized,
{
    engine.start(total_rounds)?;

    let mut rounds = Vec::new();
    let mut overtime_played = 0u32;

    loop {
        for id in engine.registered_ids() {
            engine.submit_choice(id, source.next_choice())?;
        }

        if engine.is_overtime() && overtime_played >= max_overtime_rounds {
            info!(overtime_played, "overtime limit reached, forcing finish");
            let finish = engine.force_end_game()?;
            rounds.extend(finish.settlement);
            return Ok(SimulationReport {
                rounds,
                summary: finish.summary,
            });
        }

        let result = engine.close_round()?;
        if result.settlement.is_overtime {
            overtime_played += 1;
        }
        rounds.push(result.settlement);

        if let Continuation::Finished(summary) = result.continuation {
            return Ok(SimulationReport { rounds, summary });
        }
    }
}
