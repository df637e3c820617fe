use std::cmp::Ordering;

use teamtrace_types::{Event, EventKind};

/// Global event order: plain string comparison of ISO-8601 timestamps
///
/// Events without a timestamp (empty string) sort first.
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Merge per-agent event sequences into one timeline
///
/// Sequences are concatenated in the order given, then stably sorted, so
/// events sharing a timestamp keep their read order. Adjacent text from the
/// same agent and timestamp is then consolidated.
pub fn merge_timelines(timelines: Vec<Vec<Event>>) -> Vec<Event> {
    let mut events: Vec<Event> = timelines.into_iter().flatten().collect();
    events.sort_by(|a, b| compare_timestamps(&a.timestamp, &b.timestamp));
    consolidate_agent_text(events)
}

/// Join runs of `agent_text` events sharing agent and timestamp
///
/// One text block per record is how Claude Code splits a single reply, so a
/// run like that reads as one message. Nothing is reordered.
pub fn consolidate_agent_text(events: Vec<Event>) -> Vec<Event> {
    let mut consolidated: Vec<Event> = Vec::with_capacity(events.len());

    for event in events {
        if let Some(last) = consolidated.last_mut()
            && continues_text_run(last, &event)
        {
            last.content.push_str("\n\n");
            last.content.push_str(&event.content);
            continue;
        }
        consolidated.push(event);
    }

    consolidated
}

fn continues_text_run(prev: &Event, next: &Event) -> bool {
    prev.kind() == EventKind::AgentText
        && next.kind() == EventKind::AgentText
        && prev.agent_id == next.agent_id
        && prev.timestamp == next.timestamp
}
