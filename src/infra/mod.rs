//! Инфраструктурный слой вокруг движка:
//! - справочник участников (внешний id → ParticipantId);
//! - тексты уведомлений и ошибок;
//! - источники случайных голосов;
//! - прогон игры ботами.

pub mod ids;
pub mod mapping;
pub mod rng;
pub mod simulation;

pub use ids::*;
pub use mapping::*;
pub use rng::*;
pub use simulation::*;
