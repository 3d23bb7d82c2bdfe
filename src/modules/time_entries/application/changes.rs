// Notifications a view subscribes to so it knows when to re-render.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    TimerStarted { label: String },
    TimerStopped { entry_id: u64 },
    TimerReset,
    EntryInserted { id: u64 },
    EntryDeleted { id: u64 },
    EntryUpdated { id: u64 },
    ProjectAdded { name: String },
}

#[cfg(test)]
mod change_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Change::TimerReset, serde_json::json!({"type": "timer_reset"}))]
    #[case(
        Change::TimerStopped { entry_id: 7 },
        serde_json::json!({"type": "timer_stopped", "entry_id": 7})
    )]
    #[case(
        Change::ProjectAdded { name: "Kunde X".into() },
        serde_json::json!({"type": "project_added", "name": "Kunde X"})
    )]
    fn it_should_serialize_with_a_type_tag(#[case] change: Change, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(change).unwrap(), expected);
    }
}
