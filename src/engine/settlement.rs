use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Choice, ParticipantId};

/// Почему победила именно эта сторона.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementReason {
    /// Строго меньше голосов.
    Minority,
    /// Ничья в нечётном раунде → A.
    TieParityOdd,
    /// Ничья в чётном раунде → B.
    TieParityEven,
}

/// Подсчёт голосов раунда.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteTally {
    pub count_a: u32,
    pub count_b: u32,
}

impl VoteTally {
    pub fn new(count_a: u32, count_b: u32) -> Self {
        Self { count_a, count_b }
    }

    /// Посчитать голоса. Кто не голосовал — не учитывается ни за одну сторону.
    pub fn from_choices<'a, I>(choices: I) -> Self
    where
        I: IntoIterator<Item = &'a Choice>,
    {
        let mut tally = Self::default();
        for choice in choices {
            match choice {
                Choice::A => tally.count_a += 1,
                Choice::B => tally.count_b += 1,
            }
        }
        tally
    }

    pub fn count(&self, choice: Choice) -> u32 {
        match choice {
            Choice::A => self.count_a,
            Choice::B => self.count_b,
        }
    }

    pub fn total(&self) -> u32 {
        self.count_a + self.count_b
    }
}

/// Правило меньшинства.
///
/// Меньше голосов — победа. При равенстве (включая 0:0) решает чётность
/// номера раунда: нечётный → A, чётный → B. В овертайме правило то же,
/// номер раунда продолжает расти.
pub fn decide_winner(tally: VoteTally, round_index: u32) -> (Choice, SettlementReason) {
    match tally.count_a.cmp(&tally.count_b) {
        Ordering::Less => (Choice::A, SettlementReason::Minority),
        Ordering::Greater => (Choice::B, SettlementReason::Minority),
        Ordering::Equal if round_index % 2 == 1 => (Choice::A, SettlementReason::TieParityOdd),
        Ordering::Equal => (Choice::B, SettlementReason::TieParityEven),
    }
}

/// Итог одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSettlement {
    pub round_index: u32,
    pub is_overtime: bool,
    pub count_a: u32,
    pub count_b: u32,
    pub winner: Choice,
    pub reason: SettlementReason,
    /// Кто получил +1 (по возрастанию id).
    pub winners: Vec<ParticipantId>,
}

impl RoundSettlement {
    pub fn tally(&self) -> VoteTally {
        VoteTally::new(self.count_a, self.count_b)
    }
}

/// Подсчитать раунд и начислить очки победившей стороне.
///
/// Каждый, чей выбор совпал с победителем, получает ровно +1.
pub fn settle_round(
    choices: &HashMap<ParticipantId, Choice>,
    scores: &mut HashMap<ParticipantId, u32>,
    round_index: u32,
    is_overtime: bool,
) -> RoundSettlement {
    let tally = VoteTally::from_choices(choices.values());
    let (winner, reason) = decide_winner(tally, round_index);

    let mut winners: Vec<ParticipantId> = choices
        .iter()
        .filter(|(_, choice)| **choice == winner)
        .map(|(id, _)| *id)
        .collect();
    winners.sort_unstable();

    for id in &winners {
        *scores.entry(*id).or_insert(0) += 1;
    }

    RoundSettlement {
        round_index,
        is_overtime,
        count_a: tally.count_a,
        count_b: tally.count_b,
        winner,
        reason,
        winners,
    }
}
