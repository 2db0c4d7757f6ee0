//! Feedback loop integration tests
//!
//! Drive reactions, generation, and instructor decisions end to end over the
//! demo lectures.
//!
//! Run with: cargo test -p integration-tests --test feedback_loop_tests

use std::collections::HashMap;
use std::sync::Arc;

use integration_tests::{
    reaction, EditingRewriter, FixedRewriter, RecordingRewriter, ScriptedRewriter, TestApp,
};
use lecture_common::AppConfig;
use lecture_core::{LectureStore, RewriteError, SuggestionPolicy, SuggestionStatus};
use lecture_service::dto::UpdateSectionRequest;
use lecture_store::InMemoryLectureStore;

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_confused_section_gets_one_pending_suggestion() {
    let rewriter = Arc::new(RecordingRewriter::default());
    let app = TestApp::new(rewriter.clone());

    app.react("lec1", "lec1-sec3", "like", 1).await.unwrap();
    app.react("lec1", "lec1-sec3", "confused", 2).await.unwrap();
    let before = app.section("lec1", "lec1-sec3").await.unwrap();

    let response = app.generate("lec1").await.unwrap();
    assert_eq!(response.message, "Generated AI suggestions");
    assert_eq!(response.generated_count, 1);
    assert_eq!(response.generated_suggestion_ids.len(), 1);

    let suggestions = app.suggestions().list_suggestions("lec1").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    let suggestion = &suggestions[0];
    assert_eq!(suggestion.section_id, "lec1-sec3");
    assert_eq!(suggestion.status, SuggestionStatus::Pending);
    assert_eq!(suggestion.original_text, before.text);
    assert_eq!(suggestion.suggested_text, before.text.to_uppercase());

    let calls = rewriter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].feedback.like_count, 1);
    assert_eq!(calls[0].feedback.confused_count, 2);
    assert!(calls[0].prompt.contains(&before.text));

    // Generation never touches the lecture itself
    assert_eq!(app.section("lec1", "lec1-sec3").await.unwrap(), before);
}

#[tokio::test]
async fn test_sections_without_reactions_are_never_sent() {
    let rewriter = Arc::new(RecordingRewriter::default());
    let app = TestApp::new(rewriter.clone());

    let response = app.generate("lec2").await.unwrap();
    assert_eq!(response.generated_count, 0);
    assert_eq!(rewriter.call_count(), 0);
}

#[tokio::test]
async fn test_gate_matches_threshold_and_aversion_rule() {
    // (confused, dislike, accepted, rejected, expect suggestion)
    let cases = [
        (0, 1, 0, 0, false),
        (1, 1, 0, 0, true),
        (0, 2, 0, 0, true),
        (5, 0, 2, 8, false),
        (5, 0, 3, 7, true),
        (2, 0, 1, 1, true),
        (1, 0, 0, 10, false),
    ];

    for (confused, dislike, accepted, rejected, expected) in cases {
        let rewriter = Arc::new(RecordingRewriter::default());
        let app = TestApp::new(rewriter.clone());
        app.react("lec2", "lec2-sec5", "like", 1).await.unwrap();
        app.react("lec2", "lec2-sec5", "confused", confused).await.unwrap();
        app.react("lec2", "lec2-sec5", "dislike", dislike).await.unwrap();
        app.seed_stats("lec2", "lec2-sec5", accepted, rejected).await.unwrap();

        let response = app.generate("lec2").await.unwrap();
        assert_eq!(
            response.generated_count == 1,
            expected,
            "confused={confused} dislike={dislike} accepted={accepted} rejected={rejected}"
        );
        assert_eq!(rewriter.call_count(), usize::from(expected));
    }
}

#[tokio::test]
async fn test_learned_aversion_skips_high_confusion() {
    let app = TestApp::new(Arc::new(FixedRewriter::new("never used")));
    app.react("lec1", "lec1-sec5", "confused", 6).await.unwrap();
    app.seed_stats("lec1", "lec1-sec5", 2, 8).await.unwrap();

    let response = app.generate("lec1").await.unwrap();
    assert_eq!(response.generated_count, 0);
}

#[tokio::test]
async fn test_rewriter_failure_does_not_stop_other_sections() {
    let rewriter = Arc::new(ScriptedRewriter::new([
        Err(RewriteError::Timeout),
        Ok("Gradient descent, step by step.".to_string()),
    ]));
    let app = TestApp::new(rewriter);

    app.react("lec1", "lec1-sec4", "dislike", 2).await.unwrap();
    app.react("lec1", "lec1-sec5", "confused", 3).await.unwrap();

    let response = app.generate("lec1").await.unwrap();
    assert_eq!(response.generated_count, 1);

    let suggestions = app.suggestions().list_suggestions("lec1").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].section_id, "lec1-sec5");
    assert_eq!(suggestions[0].suggested_text, "Gradient descent, step by step.");
}

#[tokio::test]
async fn test_blank_rewrite_is_discarded() {
    let app = TestApp::new(Arc::new(FixedRewriter::new("   \n")));
    app.react("lec2", "lec2-sec3", "confused", 2).await.unwrap();

    let response = app.generate("lec2").await.unwrap();
    assert_eq!(response.generated_count, 0);
    assert_eq!(app.store.suggestion_count(), 0);
}

#[tokio::test]
async fn test_ids_follow_section_order() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec2", "lec2-sec6", "confused", 2).await.unwrap();
    app.react("lec2", "lec2-sec2", "dislike", 2).await.unwrap();

    let response = app.generate("lec2").await.unwrap();
    assert_eq!(response.generated_count, 2);

    let suggestions = app.suggestions().list_suggestions("lec2").await.unwrap();
    let by_id: HashMap<_, _> = suggestions
        .iter()
        .map(|s| (s.id.as_str(), s.section_id.as_str()))
        .collect();
    let sections: Vec<_> = response
        .generated_suggestion_ids
        .iter()
        .map(|id| by_id[id.as_str()])
        .collect();
    assert_eq!(sections, ["lec2-sec2", "lec2-sec6"]);
}

#[tokio::test]
async fn test_repeated_generation_stacks_pending_suggestions() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec1", "lec1-sec2", "confused", 2).await.unwrap();

    app.generate("lec1").await.unwrap();
    app.generate("lec1").await.unwrap();

    let suggestions = app.suggestions().list_suggestions("lec1").await.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.iter().all(|s| s.status == SuggestionStatus::Pending));
    assert_ne!(suggestions[0].id, suggestions[1].id);
}

#[tokio::test]
async fn test_edit_during_rewrite_keeps_requested_text() {
    let store = Arc::new(InMemoryLectureStore::with_demo_content());
    let rewriter = Arc::new(EditingRewriter::new(
        store.clone() as Arc<dyn LectureStore>,
        "lec1",
        "lec1-sec1",
        "Edited by the instructor mid-flight.",
    ));
    let app = TestApp::with_store(store, rewriter, SuggestionPolicy::default());

    app.react("lec1", "lec1-sec1", "confused", 2).await.unwrap();
    let before = app.section("lec1", "lec1-sec1").await.unwrap();

    app.generate("lec1").await.unwrap();

    let suggestions = app.suggestions().list_suggestions("lec1").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].original_text, before.text);

    let live = app.section("lec1", "lec1-sec1").await.unwrap();
    assert_eq!(live.text, "Edited by the instructor mid-flight.");
    assert_ne!(live.text, suggestions[0].original_text);
}

#[tokio::test]
async fn test_generate_unknown_lecture() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    let err = app.suggestions().generate_for_lecture("lec9").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error_code(), "NOT_FOUND");
}

// ============================================================================
// Decisions
// ============================================================================

#[tokio::test]
async fn test_accept_then_reject_keeps_stats_consistent() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec2", "lec2-sec5", "confused", 2).await.unwrap();

    let first = app.generate("lec2").await.unwrap().generated_suggestion_ids;
    let second = app.generate("lec2").await.unwrap().generated_suggestion_ids;

    let accepted = app.suggestions().accept(&first[0]).await.unwrap();
    assert_eq!(accepted.updated_section.id, "lec2-sec5");
    assert_eq!(
        app.section("lec2", "lec2-sec5").await.unwrap().text,
        accepted.suggestion.suggested_text
    );

    let text_after_accept = app.section("lec2", "lec2-sec5").await.unwrap().text;
    let rejected = app.suggestions().reject(&second[0]).await.unwrap();
    assert_eq!(rejected.suggestion.status, SuggestionStatus::Rejected);
    assert_eq!(app.section("lec2", "lec2-sec5").await.unwrap().text, text_after_accept);

    let stats = app
        .suggestions()
        .get_section_stats("lec2", "lec2-sec5")
        .await
        .unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.total, stats.accepted + stats.rejected);
}

#[tokio::test]
async fn test_decided_suggestion_cannot_be_decided_again() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec1", "lec1-sec6", "dislike", 3).await.unwrap();
    let id = app.generate("lec1").await.unwrap().generated_suggestion_ids[0].clone();

    app.suggestions().reject(&id).await.unwrap();
    let text = app.section("lec1", "lec1-sec6").await.unwrap().text;

    let err = app.suggestions().accept(&id).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.error_code(), "SUGGESTION_ALREADY_RESOLVED");
    assert_eq!(app.section("lec1", "lec1-sec6").await.unwrap().text, text);

    let stats = app
        .suggestions()
        .get_section_stats("lec1", "lec1-sec6")
        .await
        .unwrap();
    assert_eq!((stats.total, stats.rejected), (1, 1));
}

#[tokio::test]
async fn test_unknown_suggestion_changes_nothing() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.seed_stats("lec1", "lec1-sec3", 2, 1).await.unwrap();
    let text = app.section("lec1", "lec1-sec3").await.unwrap().text;

    let err = app.suggestions().accept("sugg-missing").await.unwrap_err();
    assert!(err.is_not_found());
    let err = app.suggestions().reject("sugg-missing").await.unwrap_err();
    assert!(err.is_not_found());

    let stats = app
        .suggestions()
        .get_section_stats("lec1", "lec1-sec3")
        .await
        .unwrap();
    assert_eq!((stats.total, stats.accepted, stats.rejected), (3, 2, 1));
    assert_eq!(app.section("lec1", "lec1-sec3").await.unwrap().text, text);
    assert_eq!(app.store.suggestion_count(), 0);
}

#[tokio::test]
async fn test_rejections_teach_aversion() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec1", "lec1-sec2", "confused", 2).await.unwrap();

    let ids = app.generate("lec1").await.unwrap().generated_suggestion_ids;
    assert_eq!(ids.len(), 1);
    app.suggestions().reject(&ids[0]).await.unwrap();

    // One rejection out of one decision is above the 0.7 ratio
    let response = app.generate("lec1").await.unwrap();
    assert_eq!(response.generated_count, 0);
}

#[tokio::test]
async fn test_accept_after_direct_edit_overwrites_edit() {
    let app = TestApp::new(Arc::new(FixedRewriter::new("The accepted wording.")));
    app.react("lec2", "lec2-sec4", "confused", 2).await.unwrap();
    let id = app.generate("lec2").await.unwrap().generated_suggestion_ids[0].clone();

    app.lectures()
        .edit_section("lec2", "lec2-sec4", UpdateSectionRequest::new("Instructor wording."))
        .await
        .unwrap();

    let accepted = app.suggestions().accept(&id).await.unwrap();
    assert_eq!(accepted.updated_section.text, "The accepted wording.");
    assert_ne!(accepted.suggestion.original_text, "Instructor wording.");
}

// ============================================================================
// Reactions and lecture lifecycle
// ============================================================================

#[tokio::test]
async fn test_invalid_reactions_leave_ledger_untouched() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));

    let bad = [
        reaction("lec1", "lec1-sec1", ""),
        reaction("lec1", "lec1-sec1", "angry"),
        reaction("lec9", "lec1-sec1", "like"),
        reaction("lec1", "lec2-sec1", "like"),
    ];
    for request in bad {
        assert!(app.reactions().create_reaction(request).await.is_err());
    }

    assert!(app.reactions().list_reactions("lec1").await.unwrap().is_empty());
    assert_eq!(app.store.reaction_count(), 0);
}

#[tokio::test]
async fn test_comments_reach_the_rewriter_trimmed() {
    let rewriter = Arc::new(RecordingRewriter::default());
    let app = TestApp::new(rewriter.clone());

    app.reactions()
        .create_reaction(reaction("lec2", "lec2-sec5", "confused").with_comment("  what is a quantum?  "))
        .await
        .unwrap();
    app.reactions()
        .create_reaction(reaction("lec2", "lec2-sec5", "dislike").with_comment("   "))
        .await
        .unwrap();

    app.generate("lec2").await.unwrap();

    let calls = rewriter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].feedback.comments, ["what is a quantum?"]);
    assert_eq!(calls[0].feedback.dislike_count, 1);

    // The stored reaction keeps the comment as given
    let reactions = app.reactions().list_reactions("lec2").await.unwrap();
    assert_eq!(reactions[0].comment, "  what is a quantum?  ");
}

#[tokio::test]
async fn test_publish_leaves_suggestions_alone() {
    let app = TestApp::new(Arc::new(RecordingRewriter::default()));
    app.react("lec1", "lec1-sec1", "confused", 2).await.unwrap();
    app.generate("lec1").await.unwrap();

    let published = app.lectures().publish("lec1").await.unwrap();
    assert!(published.lecture.published_at.is_some());

    let suggestions = app.suggestions().list_suggestions("lec1").await.unwrap();
    assert_eq!(suggestions[0].status, SuggestionStatus::Pending);

    let value = serde_json::to_value(&published).unwrap();
    assert_eq!(value["message"], "Lecture published");
    assert!(value["lecture"]["publishedAt"].is_string());
}

#[tokio::test]
async fn test_config_drives_store_and_policy() {
    let vars: HashMap<&str, &str> = [
        ("STORE_SEED_DEMO_CONTENT", "false"),
        ("SUGGESTION_CONFUSION_THRESHOLD", "1"),
    ]
    .into_iter()
    .collect();
    let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();

    let app = TestApp::from_config(&config, Arc::new(RecordingRewriter::default()));
    assert!(app.lecture("lec1").await.is_err());
    assert_eq!(*app.ctx.policy(), SuggestionPolicy::new(1, 0.7));

    let seeded = TestApp::from_config(
        &AppConfig::from_lookup(|_| None).unwrap(),
        Arc::new(RecordingRewriter::default()),
    );
    seeded.react("lec1", "lec1-sec1", "confused", 1).await.unwrap();
    assert_eq!(seeded.generate("lec1").await.unwrap().generated_count, 0);
}
