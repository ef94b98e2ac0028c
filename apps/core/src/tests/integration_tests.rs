//! Integration Tests
//!
//! End-to-end conversations: content and config loaded from files, the actor
//! driven through several turns, and independent conversations side by side.

use super::actor_tests::{seeded_config, spawn, RecordingSink};
use crate::actors::ConversationHandle;
use crate::brain::{Category, TriggerMatch};
use crate::config::ChatConfig;
use crate::content::ContentBank;
use crate::error::AppError;
use crate::models::Sender;
use crate::preflight::run_preflight_checks;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::time::{sleep, Duration};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Write `contents` to a temporary JSON file.
fn temp_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");
    file
}

/// Built-in content with a single, recognizable anxiety reply.
fn custom_bank() -> ContentBank {
    let mut bank = ContentBank::builtin();
    bank.greeting = "Welcome to the test room.".to_string();
    bank.anxiety.responses = vec!["Custom anxiety reply.".to_string()];
    bank.anxiety.follow_ups = vec!["Custom follow-up?".to_string()];
    bank
}

#[cfg(test)]
mod full_workflow_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_multi_turn_conversation() {
        let sink = Arc::new(RecordingSink::new());
        let handle = spawn(sink.clone());

        let turns = [
            ("I've been so stressed at work", Category::Anxiety),
            ("and honestly I feel hopeless", Category::Depression),
            ("thanks for listening", Category::General),
        ];

        for (line, category) in turns {
            assert_eq!(handle.handle_user_utterance(line).await.unwrap(), Some(category));
            sleep(Duration::from_secs(10)).await;
        }

        let snapshot = handle.snapshot().await.unwrap();
        let users = snapshot.history.iter().filter(|m| m.sender == Sender::User).count();
        let bots = snapshot.history.iter().filter(|m| m.sender == Sender::Bot).count();

        assert_eq!(users, 3);
        assert_eq!(bots, 1 + 3 * 5);
        assert_eq!(snapshot.state.message_count, users + bots);
        assert_eq!(sink.shown().len(), snapshot.history.len());
        assert_eq!(
            snapshot.state.topics_discussed,
            vec![Category::Anxiety, Category::Depression, Category::General]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_then_continue() {
        let sink = Arc::new(RecordingSink::new());
        let handle = spawn(sink.clone());

        handle.handle_user_utterance("I'm anxious").await.unwrap();
        sleep(Duration::from_secs(10)).await;
        assert!(handle.clear_session(true).await.unwrap());

        handle.handle_user_utterance("I feel lonely").await.unwrap();
        sleep(Duration::from_secs(10)).await;

        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.state.chat_active);
        // fresh greeting + user line + five bot emissions
        assert_eq!(snapshot.state.message_count, 7);
        assert_eq!(snapshot.state.topics_discussed, vec![Category::Depression]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_conversations_are_independent() {
        let first_sink = Arc::new(RecordingSink::new());
        let second_sink = Arc::new(RecordingSink::new());
        let first = spawn(first_sink.clone());
        let second = spawn(second_sink.clone());

        first.handle_user_utterance("I'm worried").await.unwrap();
        second.handle_user_utterance("I want to end it all").await.unwrap();
        sleep(Duration::from_secs(10)).await;

        assert_eq!(first.snapshot().await.unwrap().state.message_count, 7);
        assert_eq!(second.snapshot().await.unwrap().state.message_count, 4);
        assert_eq!(first_sink.shown().len(), 7);
        assert_eq!(second_sink.shown().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cloned_handles_share_one_conversation() {
        let handle = spawn(Arc::new(RecordingSink::new()));
        let clone = handle.clone();

        let (a, b) = tokio::join!(
            handle.handle_user_utterance("I'm nervous"),
            clone.handle_user_utterance("I feel down")
        );
        assert!(a.unwrap().is_some() && b.unwrap().is_some());

        let snapshot = clone.snapshot().await.unwrap();
        let greetings = snapshot
            .history
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .count();
        assert_eq!(greetings, 1, "only one greeting before replies arrive");
        assert_eq!(snapshot.state.message_count, 3);
    }
}

#[cfg(test)]
mod file_loading_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_conversation_uses_loaded_content() {
        let file = temp_json(&serde_json::to_string(&custom_bank()).unwrap());
        let bank = ContentBank::load_from_file(file.path()).unwrap();

        let sink = Arc::new(RecordingSink::new());
        let handle = ConversationHandle::new(seeded_config(), Arc::new(bank), sink.clone()).unwrap();

        handle.handle_user_utterance("I'm anxious").await.unwrap();
        sleep(Duration::from_secs(10)).await;

        let texts: Vec<String> = sink
            .bot_messages()
            .iter()
            .filter_map(|m| m.content.as_text().map(str::to_string))
            .collect();
        assert_eq!(texts[0], "Welcome to the test room.");
        assert_eq!(texts[1], "Custom anxiety reply.");
        assert_eq!(texts[2], "Custom follow-up?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_loaded_config_controls_timing_and_matching() {
        let file = temp_json(r#"{ "delay_unit_ms": 10, "trigger_match": "word_boundary", "rng_seed": 7 }"#);
        let config = ChatConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.trigger_match, TriggerMatch::WordBoundary);

        let sink = Arc::new(RecordingSink::new());
        let handle = ConversationHandle::with_builtin_content(config, sink.clone()).unwrap();

        let category = handle.handle_user_utterance("my hardware is broken").await.unwrap();
        assert_eq!(category, Some(Category::General));

        // thinking 1.5, then 0, 1.5 and 3 units at 10ms each
        sleep(Duration::from_millis(55)).await;
        assert_eq!(sink.bot_messages().len(), 3, "coping offer still waiting");

        sleep(Duration::from_millis(10)).await;
        assert_eq!(sink.bot_messages().len(), 6);
    }

    #[tokio::test]
    async fn test_broken_content_file_is_rejected() {
        let mut bank = custom_bank();
        bank.anxiety.follow_ups.clear();
        let file = temp_json(&serde_json::to_string(&bank).unwrap());

        let bank = ContentBank::load_from_file(file.path()).unwrap();
        let report = run_preflight_checks(&bank, &ChatConfig::default());
        assert!(!report.all_passed);

        let result = ConversationHandle::new(ChatConfig::default(), Arc::new(bank), Arc::new(RecordingSink::new()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_malformed_content_file() {
        let file = temp_json("{ \"greeting\": 42 }");
        let result = ContentBank::load_from_file(file.path());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
