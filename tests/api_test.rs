// tests/api_test.rs
//
// Внешний слой: разбор чата, выполнение команд, запросы, ошибки API.

use minority_engine::api::{
    answer_query, execute_command, parse_chat_command, AnnounceCommand, ApiError, ChatCommand,
    Command, CommandResponse, Query, QueryResponse, RegisterCommand, StartCommand,
    SubmitChoiceCommand, REGISTER_ALIASES,
};
use minority_engine::domain::{Choice, GameConfig, GamePhase, ParticipantId};
use minority_engine::engine::{Continuation, EngineError, GameEngine};
use minority_engine::{MinorityOperation, MinorityQuery};

fn name_of(id: ParticipantId) -> String {
    format!("P{}", id)
}

fn run(engine: &mut GameEngine, cmd: Command) -> CommandResponse {
    execute_command(engine, cmd).unwrap().response
}

fn register(id: ParticipantId) -> Command {
    Command::Register(RegisterCommand { participant_id: id })
}

fn submit(id: ParticipantId, choice: Choice) -> Command {
    Command::SubmitChoice(SubmitChoiceCommand {
        participant_id: id,
        choice,
    })
}

// -----------------------------
// Разбор чата
// -----------------------------

#[test]
fn parse_admin_commands() {
    assert_eq!(parse_chat_command("/announce_game"), Some(ChatCommand::AnnounceGame));
    assert_eq!(parse_chat_command("/end_round"), Some(ChatCommand::EndRound));
    assert_eq!(parse_chat_command("  /end_game  "), Some(ChatCommand::EndGame));
    assert!(ChatCommand::EndGame.is_admin());
    assert!(!ChatCommand::Register.is_admin());
    assert!(!ChatCommand::Choose(Choice::A).is_admin());
}

#[test]
fn every_register_alias_is_recognised() {
    for alias in REGISTER_ALIASES {
        let text = format!("/{}", alias);
        assert_eq!(parse_chat_command(&text), Some(ChatCommand::Register), "{}", text);
    }
}

#[test]
fn choices_are_case_insensitive() {
    assert_eq!(parse_chat_command("/A"), Some(ChatCommand::Choose(Choice::A)));
    assert_eq!(parse_chat_command("/a"), Some(ChatCommand::Choose(Choice::A)));
    assert_eq!(parse_chat_command("/B"), Some(ChatCommand::Choose(Choice::B)));
    assert_eq!(parse_chat_command("/b"), Some(ChatCommand::Choose(Choice::B)));
    assert_eq!(parse_chat_command("/C"), None);
}

#[test]
fn start_game_argument_must_be_digits() {
    let rounds = |text: &str| match parse_chat_command(text) {
        Some(ChatCommand::StartGame { total_rounds }) => total_rounds,
        other => panic!("{} → {:?}", text, other),
    };

    assert_eq!(rounds("/start_game"), None);
    assert_eq!(rounds("/start_game 7"), Some(7));
    assert_eq!(rounds("/start_game 0"), Some(0));
    assert_eq!(rounds("/start_game -3"), None);
    assert_eq!(rounds("/start_game abc"), None);
}

#[test]
fn non_commands_are_ignored() {
    assert_eq!(parse_chat_command("hello"), None);
    assert_eq!(parse_chat_command("A"), None);
    assert_eq!(parse_chat_command("/"), None);
    assert_eq!(parse_chat_command("/unknown"), None);
}

#[test]
fn chat_command_carries_sender() {
    assert_eq!(
        ChatCommand::Choose(Choice::B).into_command(5),
        submit(5, Choice::B)
    );
    assert_eq!(ChatCommand::Register.into_command(3), register(3));
    assert_eq!(
        ChatCommand::AnnounceGame.into_command(1),
        Command::Announce(AnnounceCommand { title: None })
    );
}

// -----------------------------
// Выполнение команд
// -----------------------------

#[test]
fn announce_without_title_uses_config_default() {
    let config = GameConfig {
        default_title: "Вечерняя игра".into(),
        ..GameConfig::default()
    };
    let mut engine = GameEngine::with_config(config);

    let resp = run(&mut engine, Command::Announce(AnnounceCommand { title: None }));
    assert_eq!(
        resp,
        CommandResponse::Announced {
            title: "Вечерняя игра".into()
        }
    );

    let resp = run(
        &mut engine,
        Command::Announce(AnnounceCommand {
            title: Some("Своя".into()),
        }),
    );
    assert_eq!(resp, CommandResponse::Announced { title: "Своя".into() });
    assert_eq!(engine.title(), "Своя");
}

#[test]
fn full_game_through_executor() {
    let mut engine = GameEngine::new();
    run(&mut engine, Command::Announce(AnnounceCommand { title: None }));
    for id in 1..=3 {
        run(&mut engine, register(id));
    }

    let started = execute_command(&mut engine, Command::Start(StartCommand { total_rounds: Some(1) })).unwrap();
    assert!(matches!(
        started.response,
        CommandResponse::Started {
            total_rounds: 1,
            registered_count: 3,
            ..
        }
    ));
    assert_eq!(started.events.len(), 2);

    let recorded = execute_command(&mut engine, submit(1, Choice::A)).unwrap();
    assert_eq!(
        recorded.response,
        CommandResponse::ChoiceRecorded {
            participant_id: 1,
            choice: Choice::A,
            round_index: 1
        }
    );
    // Выбор не рассылается.
    assert!(recorded.events.is_empty());

    run(&mut engine, submit(2, Choice::A));
    run(&mut engine, submit(3, Choice::B));

    let closed = execute_command(&mut engine, Command::EndRound).unwrap();
    match closed.response {
        CommandResponse::RoundClosed {
            settlement,
            continuation: Continuation::Finished(summary),
        } => {
            assert_eq!(settlement.winners, vec![3]);
            assert_eq!(summary.winners(), vec![3]);
        }
        other => panic!("ожидали финиш, получили {:?}", other),
    }
    assert_eq!(closed.events.len(), 2);
}

#[test]
fn end_game_command_forces_finish() {
    let mut engine = GameEngine::new();
    run(&mut engine, Command::Announce(AnnounceCommand { title: None }));
    run(&mut engine, register(1));
    run(&mut engine, Command::Start(StartCommand { total_rounds: None }));

    match run(&mut engine, Command::EndGame) {
        CommandResponse::GameEnded { settlement, summary } => {
            assert!(settlement.is_some());
            assert!(summary.forced);
        }
        other => panic!("{:?}", other),
    }
}

// -----------------------------
// Ошибки
// -----------------------------

#[test]
fn engine_errors_map_to_api_errors() {
    let mut engine = GameEngine::new();

    assert_eq!(execute_command(&mut engine, register(1)).unwrap_err(), ApiError::NoActiveGame);
    assert_eq!(execute_command(&mut engine, Command::EndGame).unwrap_err(), ApiError::NoGameRunning);

    run(&mut engine, Command::Announce(AnnounceCommand { title: None }));
    assert_eq!(
        execute_command(&mut engine, Command::Start(StartCommand { total_rounds: None })).unwrap_err(),
        ApiError::NoParticipants
    );
    assert_eq!(execute_command(&mut engine, Command::EndRound).unwrap_err(), ApiError::RoundNotOpen);

    run(&mut engine, register(1));
    run(&mut engine, Command::Start(StartCommand { total_rounds: None }));
    assert_eq!(
        execute_command(&mut engine, submit(8, Choice::A)).unwrap_err(),
        ApiError::NotRegistered(8)
    );
    assert_eq!(execute_command(&mut engine, register(2)).unwrap_err(), ApiError::AlreadyRunning);

    assert_eq!(ApiError::from(EngineError::RoundNotOpen), ApiError::RoundNotOpen);
}

// -----------------------------
// Запросы
// -----------------------------

#[test]
fn game_query_reports_live_state() {
    let mut engine = GameEngine::new();
    engine.announce("q");
    engine.register(1).unwrap();
    engine.register(2).unwrap();
    engine.start(Some(3)).unwrap();
    engine.submit_choice(2, Choice::B).unwrap();

    let view = match answer_query(&engine, Query::GetGame, name_of) {
        QueryResponse::Game(view) => view,
        other => panic!("{:?}", other),
    };

    assert_eq!(view.title, "q");
    assert_eq!(view.phase, GamePhase::RoundOpen);
    assert_eq!(view.total_rounds, 3);
    assert_eq!(view.round_index, 1);
    assert_eq!(view.registered_count, 2);
    assert_eq!(view.submitted_count, 1);
    assert_eq!(view.standings.len(), 2);
    assert_eq!(view.standings[0].display_name, "P1");
}

#[test]
fn participant_query_hides_the_choice_itself() {
    let mut engine = GameEngine::new();
    engine.announce("q");
    engine.register(1).unwrap();
    engine.start(None).unwrap();
    engine.submit_choice(1, Choice::A).unwrap();

    match answer_query(&engine, Query::GetParticipant { participant_id: 1 }, name_of) {
        QueryResponse::Participant(Some(p)) => {
            assert_eq!(p.display_name, "P1");
            assert!(p.has_submitted);
            assert_eq!(p.score, 0);
        }
        other => panic!("{:?}", other),
    }

    assert_eq!(
        answer_query(&engine, Query::GetParticipant { participant_id: 5 }, name_of),
        QueryResponse::Participant(None)
    );
}

#[test]
fn leaderboard_after_finish_shows_final_ranking() {
    let mut engine = GameEngine::new();
    engine.announce("q");
    engine.register(1).unwrap();
    engine.register(2).unwrap();
    engine.start(Some(1)).unwrap();
    engine.submit_choice(1, Choice::B).unwrap();
    engine.submit_choice(2, Choice::A).unwrap();
    engine.close_round().unwrap();

    // 1:1 в раунде 1 → A → id=2.
    match answer_query(&engine, Query::GetLeaderboard, name_of) {
        QueryResponse::Leaderboard(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].participant_id, 2);
            assert_eq!(rows[0].score, 1);
            assert_eq!(rows[1].place, 2);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn history_query_returns_all_events() {
    let mut engine = GameEngine::new();
    engine.announce("q");
    engine.register(1).unwrap();

    match answer_query(&engine, Query::GetHistory, name_of) {
        QueryResponse::History(history) => assert_eq!(history.len(), 2),
        other => panic!("{:?}", other),
    }
}

// -----------------------------
// ABI: операции и запросы ходят через JSON
// -----------------------------

#[test]
fn operation_and_query_travel_as_json() {
    let op = MinorityOperation::Command(Command::Start(StartCommand {
        total_rounds: Some(3),
    }));
    let json = serde_json::to_string(&op).unwrap();
    let back: MinorityOperation = serde_json::from_str(&json).unwrap();
    let MinorityOperation::Command(cmd) = back;
    assert_eq!(cmd, Command::Start(StartCommand { total_rounds: Some(3) }));

    let query: MinorityQuery = serde_json::from_str("\"GetLeaderboard\"").unwrap();
    assert_eq!(query, Query::GetLeaderboard);
}
