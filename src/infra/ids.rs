use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;
use crate::infra::mapping::PlayerNameResolver;

/// Внешний идентификатор отправителя (id в чате, ник в консоли и т.п.).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExternalId(pub String);

impl From<&str> for ExternalId {
    fn from(s: &str) -> Self {
        ExternalId(s.to_string())
    }
}

/// Справочник участников: внешний id → стабильный `ParticipantId`.
///
/// Движку всё равно, откуда пришёл отправитель; этот справочник — простая
/// реализация для консоли и тестов. Id выдаются по порядку, начиная с 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticipantDirectory {
    by_external: HashMap<ExternalId, ParticipantId>,
    names: HashMap<ParticipantId, String>,
    next_id: ParticipantId,
}

impl Default for ParticipantDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantDirectory {
    pub fn new() -> Self {
        Self {
            by_external: HashMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }

    /// Найти или выдать id. Отображаемое имя = внешний id.
    pub fn resolve(&mut self, external: &str) -> ParticipantId {
        self.resolve_with_name(external, external)
    }

    /// Найти или выдать id, обновив отображаемое имя.
    pub fn resolve_with_name(&mut self, external: &str, display_name: &str) -> ParticipantId {
        let key = ExternalId::from(external);
        let id = match self.by_external.get(&key) {
            Some(id) => *id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.by_external.insert(key, id);
                id
            }
        };
        self.names.insert(id, display_name.to_string());
        id
    }

    pub fn lookup(&self, external: &str) -> Option<ParticipantId> {
        self.by_external.get(&ExternalId::from(external)).copied()
    }

    pub fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_external.is_empty()
    }
}

impl PlayerNameResolver for ParticipantDirectory {
    fn resolve_name(&self, participant_id: ParticipantId) -> String {
        match self.display_name(participant_id) {
            Some(name) => name.to_string(),
            None => format!("Player {}", participant_id),
        }
    }
}
