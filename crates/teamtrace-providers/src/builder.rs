use teamtrace_types::{Event, EventPayload};

/// Stamps events with the identity of the agent whose log is being read
pub struct EventBuilder<'a> {
    agent_id: &'a str,
    agent_name: &'a str,
}

impl<'a> EventBuilder<'a> {
    pub fn new(agent_id: &'a str, agent_name: &'a str) -> Self {
        Self {
            agent_id,
            agent_name,
        }
    }

    pub fn build(&self, timestamp: &str, payload: EventPayload, content: String) -> Event {
        Event::new(timestamp, self.agent_id, self.agent_name, payload, content)
    }

    pub fn build_and_push(
        &self,
        events: &mut Vec<Event>,
        timestamp: &str,
        payload: EventPayload,
        content: String,
    ) {
        events.push(self.build(timestamp, payload, content));
    }
}
