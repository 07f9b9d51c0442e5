//! Внешний API движка игры.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние;
//! - разбор текстовых команд чата (chat.rs);
//! - исполнитель команд (executor.rs);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для клиента;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod chat;
pub mod commands;
pub mod dto;
pub mod errors;
pub mod executor;
pub mod queries;

pub use chat::*;
pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use executor::*;
pub use queries::*;
