//! Главный модуль игры «меньшинство побеждает» на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) поверх
//! команд и запросов из `api`. Сам движок (`engine::GameEngine`) — чистая
//! машина состояний и от Linera не зависит.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Command, CommandResponse, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MinorityOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Одна игра живёт на одной цепочке, сообщений нет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MinorityMessage {}

/// Запросы к сервису (read-only).
pub type MinorityQuery = Query;

/// Ответы на запросы.
pub type MinorityResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct MinorityAbi;

impl ContractAbi for MinorityAbi {
    type Operation = MinorityOperation;
    type Response = Result<CommandResponse, ApiError>;
}

impl ServiceAbi for MinorityAbi {
    type Query = MinorityQuery;
    type QueryResponse = MinorityResponse;
}
