use serde_json::{Value, json};
use teamtrace_providers::{TOOL_RESULT_MAX_CHARS, TRUNCATION_MARKER, parse_log_file};
use teamtrace_testing::TestWorld;
use teamtrace_testing::fixtures::*;
use teamtrace_types::{EventKind, EventPayload};

/// Upper bound on events for a line: one per content block, or one for the record
fn max_events(record: &Value) -> usize {
    record["message"]["content"]
        .as_array()
        .map(|blocks| blocks.len())
        .unwrap_or(1)
}

#[test]
fn test_parser_never_invents_events() {
    let world = TestWorld::new();
    let records = vec![
        snapshot(),
        progress(&ts(0)),
        user_text(&ts(1), "Start"),
        assistant_blocks(
            &ts(2),
            json!([
                {"type": "thinking", "thinking": "plan"},
                {"type": "text", "text": "Sure"},
                {"type": "tool_use", "id": "t1", "name": "Bash", "input": {"command": "ls"}}
            ]),
        ),
        tool_result(&ts(3), "t1", json!("a\nb")),
        system(&ts(4), json!({"type": "idle_notification"})),
        system(&ts(5), json!("note")),
        user_text(&ts(6), "<teammate-message>receipt</teammate-message>"),
    ];
    let path = world.write_log("-repo", "abc", &records).unwrap();

    let events = parse_log_file(&path, "lead", "team-lead").unwrap();
    let bound: usize = records.iter().map(max_events).sum();
    assert!(events.len() <= bound);

    let kinds: Vec<_> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::HumanInput,
            EventKind::AgentThinking,
            EventKind::AgentText,
            EventKind::ToolCall,
            EventKind::ToolResult,
            EventKind::SystemEvent,
        ]
    );
}

#[test]
fn test_parse_log_file_missing_file_is_io_error() {
    let world = TestWorld::new();
    let path = world.log_root().join("nope.jsonl");
    assert!(parse_log_file(&path, "lead", "team-lead").is_err());
}

#[test]
fn test_large_tool_result_is_truncated() {
    let world = TestWorld::new();
    let path = world
        .write_log(
            "-repo",
            "abc",
            &[tool_result(
                &ts(0),
                "toolu_big",
                json!([{"type": "text", "text": "y".repeat(12_000)}]),
            )],
        )
        .unwrap();

    let events = parse_log_file(&path, "lead", "team-lead").unwrap();
    assert_eq!(events.len(), 1);
    let content = &events[0].content;
    assert_eq!(
        content,
        &format!("{}{}", "y".repeat(TOOL_RESULT_MAX_CHARS), TRUNCATION_MARKER)
    );
    match &events[0].payload {
        EventPayload::ToolResult(meta) => assert_eq!(meta.tool_id, "toolu_big"),
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_line_skips_only_that_line() {
    let world = TestWorld::new();
    let mut bytes = to_jsonl(&[user_text(&ts(0), "first")]).into_bytes();
    bytes.extend_from_slice(b"\xff\xfe\n");
    bytes.extend_from_slice(to_jsonl(&[assistant_text(&ts(1), "second")]).as_bytes());
    let path = world.project_dir("-repo").unwrap().join("abc.jsonl");
    std::fs::write(&path, bytes).unwrap();

    let events = parse_log_file(&path, "lead", "team-lead").unwrap();
    let contents: Vec<_> = events.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}
