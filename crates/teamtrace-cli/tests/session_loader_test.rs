use serde_json::json;
use teamtrace_cli::session_loader::SessionLoader;
use teamtrace_providers::{discover_team, locate_session};
use teamtrace_testing::TestWorld;
use teamtrace_testing::fixtures::*;
use teamtrace_types::{EventKind, SessionDocument, SessionType};

fn load(world: &TestWorld, session_id: &str) -> SessionDocument {
    SessionLoader::new(world.log_root().to_path_buf())
        .load(session_id)
        .unwrap()
}

#[test]
fn test_solo_session() {
    let world = TestWorld::new();
    world
        .write_log(
            "-repo",
            "solo",
            &[
                snapshot(),
                assistant_text(&ts(1), "Hello"),
                user_text(&ts(2), "Hi"),
            ],
        )
        .unwrap();

    let doc = load(&world, "solo");
    assert_eq!(doc.session_type, SessionType::Solo);
    assert_eq!(doc.team_name, None);
    assert_eq!(doc.project_name, "-repo");

    let kinds: Vec<_> = doc.events.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![EventKind::AgentText, EventKind::HumanInput]);
    assert_eq!(doc.stats.total_events, 2);
    assert_eq!(doc.stats.agent_count, 1);
    assert_eq!(doc.stats.duration_seconds, 1);
}

#[test]
fn test_solo_session_reversed_timestamps() {
    let world = TestWorld::new();
    world
        .write_log(
            "-repo",
            "solo",
            &[assistant_text(&ts(5), "Hello"), user_text(&ts(2), "Hi")],
        )
        .unwrap();

    let doc = load(&world, "solo");
    let kinds: Vec<_> = doc.events.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![EventKind::HumanInput, EventKind::AgentText]);
}

#[test]
fn test_team_session_merges_and_consolidates() {
    let world = TestWorld::new();
    let same = ts(10);
    world
        .write_log(
            "-repo",
            "lead-session",
            &[
                in_team(user_text(&ts(0), "Spin up a team"), "alpha", "team-lead", "lead-session"),
                assistant_blocks(
                    &same,
                    json!([
                        {"type": "text", "text": "Part one"},
                        {"type": "text", "text": "Part two"}
                    ]),
                ),
                tool_use(
                    &ts(20),
                    "toolu_sm",
                    "SendMessage",
                    json!({"type": "message", "recipient": "researcher", "content": "Go", "summary": "Kickoff"}),
                ),
            ],
        )
        .unwrap();
    world
        .write_log(
            "-repo",
            "mate-session",
            &[
                in_team(
                    user_text(&ts(21), "<teammate-message teammate_id=\"team-lead\">Go</teammate-message>"),
                    "alpha",
                    "researcher",
                    "mate-session",
                ),
                assistant_text(&same, "Researcher at the same instant"),
                tool_use(
                    &ts(30),
                    "toolu_bye",
                    "SendMessage",
                    json!({"type": "shutdown_response", "approve": false}),
                ),
            ],
        )
        .unwrap();

    let doc = load(&world, "lead-session");
    assert_eq!(doc.session_type, SessionType::Team);
    assert_eq!(doc.team_name.as_deref(), Some("alpha"));
    assert_eq!(doc.agents.len(), 2);
    assert_eq!(doc.agents[1].id, "mate-session");
    assert_eq!(doc.agents[1].name, "researcher");

    let summary: Vec<_> = doc
        .events
        .iter()
        .map(|e| (e.agent_id.as_str(), e.kind(), e.content.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("lead", EventKind::HumanInput, "Spin up a team"),
            ("lead", EventKind::AgentText, "Part one\n\nPart two"),
            (
                "mate-session",
                EventKind::AgentText,
                "Researcher at the same instant"
            ),
            ("lead", EventKind::SendMessage, "Go"),
            ("mate-session", EventKind::SendMessage, "Shutdown declined"),
        ]
    );
    assert_eq!(doc.stats.duration_seconds, 30);
    assert_eq!(doc.stats.total_events, doc.events.len());
}

#[test]
fn test_document_json_round_trip() {
    let world = TestWorld::new();
    world
        .write_log(
            "-repo",
            "abc",
            &[
                user_text(&ts(0), "Run the tests"),
                tool_use(&ts(1), "toolu_1", "Bash", json!({"command": "cargo test"})),
                tool_result(&ts(2), "toolu_1", json!([{"type": "text", "text": "ok"}])),
                system(&ts(3), json!("Conversation compacted")),
            ],
        )
        .unwrap();

    let doc = load(&world, "abc");
    let json = serde_json::to_string(&doc).unwrap();
    let parsed: SessionDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, doc);
}


#[test]
fn test_unknown_session_is_error() {
    let world = TestWorld::new();
    let loader = SessionLoader::new(world.log_root().to_path_buf());

    let err = loader.load("missing").unwrap_err();
    assert!(err.to_string().contains("No JSONL file found for session missing"));
}

#[test]
fn test_unreadable_teammate_log_is_skipped() {
    let world = TestWorld::new();
    world
        .write_log(
            "-repo",
            "lead-session",
            &[
                in_team(user_text(&ts(0), "Spin up a team"), "alpha", "team-lead", "lead-session"),
                in_team(assistant_text(&ts(3), "Waiting"), "alpha", "team-lead", "lead-session"),
            ],
        )
        .unwrap();
    let mate = world
        .write_log(
            "-repo",
            "s-worker",
            &[in_team(user_text(&ts(1), "task"), "alpha", "worker", "s-worker")],
        )
        .unwrap();

    let lead = locate_session(world.log_root(), "lead-session").unwrap();
    let discovery = discover_team(&lead).unwrap();
    assert_eq!(discovery.teammates.len(), 1);
    std::fs::remove_file(&mate).unwrap();

    let loader = SessionLoader::new(world.log_root().to_path_buf());
    let doc = loader.load_discovered("lead-session", discovery).unwrap();

    assert_eq!(doc.session_type, SessionType::Team);
    assert_eq!(doc.agents.len(), 2);
    let summary: Vec<_> = doc
        .events
        .iter()
        .map(|e| (e.agent_id.as_str(), e.content.as_str()))
        .collect();
    assert_eq!(summary, vec![("lead", "Spin up a team"), ("lead", "Waiting")]);
    assert_eq!(doc.stats.total_events, 2);
}

#[test]
fn test_unreadable_lead_log_is_fatal() {
    let world = TestWorld::new();
    let lead = world
        .write_log(
            "-repo",
            "lead-session",
            &[in_team(user_text(&ts(0), "go"), "alpha", "team-lead", "lead-session")],
        )
        .unwrap();

    let discovery = discover_team(&lead).unwrap();
    std::fs::remove_file(&lead).unwrap();

    let loader = SessionLoader::new(world.log_root().to_path_buf());
    let err = loader.load_discovered("lead-session", discovery).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
