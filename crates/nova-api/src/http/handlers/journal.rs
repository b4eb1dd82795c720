//! Journal HTTP handlers.
//!
//! Endpoints:
//! - GET /journal           - Every recorded exchange, oldest first
//! - GET /summarize-journal - Condensed summary of the last few exchanges

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use nova_types::chat::JournalEntry;

use crate::state::AppState;

/// Either a summary or the reason there is none.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary { summary: String },
    Error { error: String },
}

/// GET /journal
pub async fn journal(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    Json(state.session.journal().await)
}

/// GET /summarize-journal
///
/// Oracle failures are reported in the body with a 200, like `/ask`.
pub async fn summarize_journal(State(state): State<AppState>) -> Json<SummaryResponse> {
    let body = match state.session.summarize_journal().await {
        Ok(summary) => SummaryResponse::Summary { summary },
        Err(err) => SummaryResponse::Error {
            error: err.to_string(),
        },
    };
    Json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handlers::conversation::{AskRequest, ask};
    use crate::state::test_support::state_with;
    use nova_core::journal::summarizer::NOT_ENOUGH_ENTRIES;
    use nova_types::error::OracleError;

    async fn say(state: &AppState, message: &str) {
        ask(
            State(state.clone()),
            Json(AskRequest {
                message: message.to_string(),
            }),
        )
        .await;
    }

    #[tokio::test]
    async fn test_journal_grows_by_one_per_successful_ask() {
        let (_tmp, state, _) = state_with(vec![
            Ok("first".to_string()),
            Err(OracleError::Timeout { secs: 120 }),
            Ok("third".to_string()),
        ]);

        say(&state, "a").await;
        say(&state, "b").await;
        say(&state, "c").await;

        let Json(entries) = journal(State(state)).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user, "a");
        assert_eq!(entries[0].nova, "first");
        assert_eq!(entries[1].user, "c");
        assert!(!entries[1].timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_summarize_with_one_entry_skips_the_oracle() {
        let (_tmp, state, prompts) = state_with(Vec::new());
        say(&state, "only one").await;

        let Json(body) = summarize_journal(State(state)).await;
        match body {
            SummaryResponse::Summary { summary } => assert_eq!(summary, NOT_ENOUGH_ENTRIES),
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_returns_cleaned_summary() {
        let (_tmp, state, prompts) = state_with(vec![
            Ok("hey".to_string()),
            Ok("sure".to_string()),
            Ok(">>> summarizing\nFranz said hi and asked for help.".to_string()),
        ]);
        say(&state, "hi").await;
        say(&state, "help me").await;

        let Json(body) = summarize_journal(State(state)).await;
        match body {
            SummaryResponse::Summary { summary } => {
                assert_eq!(summary, "Franz said hi and asked for help.");
            }
            other => panic!("unexpected response: {other:?}"),
        }

        let prompts = prompts.lock().unwrap();
        assert!(prompts[2].starts_with("Summarize the following conversation between Franz and Nova:\n"));
        assert!(prompts[2].contains("User: help me\nNova: sure"));
        assert!(prompts[2].ends_with("\nSummary:"));
    }

    #[tokio::test]
    async fn test_journal_with_an_odd_entry_still_lists_and_summarizes() {
        let (tmp, state, prompts) = state_with(vec![Ok("A short recap.".to_string())]);
        std::fs::write(
            tmp.path().join("journal.json"),
            r#"[
                {"timestamp": "2023-01-01T10:00:00", "user": "hi", "nova": "hey", "mood": "goofy"},
                {"timestamp": "2023-01-01T10:01:00", "user": "still there?"},
                {"timestamp": "2023-01-01T10:02:00", "user": "bye", "nova": "later"}
            ]"#,
        )
        .unwrap();

        let Json(entries) = journal(State(state.clone())).await;
        assert_eq!(entries.len(), 3);
        let listed = serde_json::to_value(&entries).unwrap();
        assert_eq!(listed[0]["mood"], "goofy");
        assert_eq!(listed[1]["nova"], "");

        let Json(body) = summarize_journal(State(state)).await;
        match body {
            SummaryResponse::Summary { summary } => assert_eq!(summary, "A short recap."),
            other => panic!("unexpected response: {other:?}"),
        }
        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User: still there?\nNova: \n"));
    }

    #[tokio::test]
    async fn test_summarize_oracle_failure_is_reported_as_error_field() {
        let (_tmp, state, _) = state_with(vec![
            Ok("one".to_string()),
            Ok("two".to_string()),
            Err(OracleError::ModelNotFound("nova".to_string())),
        ]);
        say(&state, "x").await;
        say(&state, "y").await;

        let Json(body) = summarize_journal(State(state)).await;
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "model 'nova' not found" }));
    }
}
