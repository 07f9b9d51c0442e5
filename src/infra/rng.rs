use crate::domain::Choice;

/// Источник случайных голосов для ботов и симуляций.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32): тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl ChoiceSource for SystemRng {
    fn next_choice(&mut self) -> Choice {
        use rand::Rng;

        if rand::thread_rng().gen_bool(0.5) {
            Choice::A
        } else {
            Choice::B
        }
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed даёт одну и ту же последовательность голосов.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ChoiceSource for DeterministicRng {
    fn next_choice(&mut self) -> Choice {
        use rand::Rng;

        if self.inner.gen_bool(0.5) {
            Choice::A
        } else {
            Choice::B
        }
    }
}

//
// ✅ WASM ВАРИАНТ (Linera контракт): rand нет.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng {
    flip: bool,
}

#[cfg(target_arch = "wasm32")]
impl ChoiceSource for SystemRng {
    fn next_choice(&mut self) -> Choice {
        // Без rand просто чередуем: контракт обязан быть детерминированным.
        self.flip = !self.flip;
        if self.flip {
            Choice::A
        } else {
            Choice::B
        }
    }
}

/// Повторяет заданную последовательность по кругу (удобно в тестах).
#[derive(Clone, Debug)]
pub struct ScriptedChoices {
    script: Vec<Choice>,
    pos: usize,
}

impl ScriptedChoices {
    /// Пустой сценарий ведёт себя как бесконечное "A".
    pub fn new(script: Vec<Choice>) -> Self {
        Self { script, pos: 0 }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self) -> Choice {
        if self.script.is_empty() {
            return Choice::A;
        }
        let choice = self.script[self.pos % self.script.len()];
        self.pos += 1;
        choice
    }
}
