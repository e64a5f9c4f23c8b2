
use chrono::{DateTime, FixedOffset, TimeZone};

/// A small team: two members, a session task and a tracker task finished
/// yesterday, one issue reported through two collections, one milestone.
pub(crate) const SNAPSHOT: &str = r#"{
    "members": [
        { "name": "Danny", "role": "lead" },
        { "name": "Rusty", "role": "engineer" }
    ],
    "logEntries": [
        { "date": "2026-02-17", "participants": ["Danny", "Rusty"] },
        { "date": "2026-02-16", "participants": ["Danny"] }
    ],
    "tasks": [
        {
            "id": "2026-02-17-danny",
            "title": "Wire burndown",
            "status": "completed",
            "owner": "Danny",
            "startedAt": "2026-02-16",
            "completedAt": "2026-02-17",
            "source": "session_log"
        },
        {
            "id": "T-7",
            "title": "Review palette",
            "status": "in_progress",
            "owner": "Rusty",
            "startedAt": "2026-02-15"
        },
        {
            "id": "T-8",
            "title": "Ship heatmap",
            "status": "done",
            "owner": "Rusty",
            "completedAt": "2026-02-17"
        }
    ],
    "memberIssues": {
        "danny": [
            {
                "number": 40,
                "title": "Fix date keys",
                "state": "closed",
                "createdAt": "2026-02-12",
                "closedAt": "2026-02-16T10:00:00-05:00"
            }
        ]
    },
    "closedIssues": [
        {
            "number": 40,
            "title": "Fix date keys",
            "state": "closed",
            "createdAt": "2026-02-12",
            "closedAt": "2026-02-16T10:00:00-05:00"
        }
    ],
    "milestones": [
        {
            "title": "Sprint 1",
            "number": 1,
            "dueOn": "2026-02-20",
            "issues": [
                {
                    "number": 40,
                    "title": "Fix date keys",
                    "state": "closed",
                    "createdAt": "2026-02-12",
                    "closedAt": "2026-02-16T10:00:00-05:00",
                    "assignee": "copilot",
                    "labels": ["squad:Danny"]
                },
                {
                    "number": 41,
                    "title": "Stack burndown by member",
                    "createdAt": "2026-02-14",
                    "assignee": "Rusty"
                }
            ]
        }
    ],
    "decisions": [
        { "title": "Local dates everywhere", "date": "2026-02-15" }
    ]
}"#;

pub(crate) fn eastern() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

/// Pinned clock: 2026-02-18 15:00 local.
pub(crate) fn now() -> DateTime<FixedOffset> {
    eastern().with_ymd_and_hms(2026, 2, 18, 15, 0, 0).unwrap()
}
