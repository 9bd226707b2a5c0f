mod common;
use edtech::model::entity::{SUBMISSION_STATE_APPROVED, SUBMISSION_STATE_SUBMITTED};
use serde_json::json;

use crate::common::{
    Action, Flow, create_course_action, create_lesson_action, create_unit_action, setup_server,
};

const SUBMIT: &str = "mutation($id: ID!) { submitForReview(lessonId: $id) { id state } }";
const APPROVE: &str = "mutation($id: ID!) { approveSubmission(lessonId: $id) { id state } }";

#[tokio::test]
async fn review_approve_flow_test() {
    let (_, server) = setup_server();

    let ctx = Flow::new()
        // nothing to approve yet
        .step(
            Action::new("approve_empty", APPROVE)
                .with_variables(json!({ "id": "1" }))
                .with_expect_error("no submission"),
        )
        .step(
            Action::new("submit_first", SUBMIT)
                .with_variables(json!({ "id": "100" }))
                .assert_data(|data| {
                    assert_eq!(data["submitForReview"]["state"], SUBMISSION_STATE_SUBMITTED)
                })
                .with_save_as("first"),
        )
        // same lesson again still makes a new submission
        .step(
            Action::new("submit_second", SUBMIT)
                .with_variables(json!({ "id": "100" }))
                .with_save_as("second"),
        )
        .step(
            Action::new("approve", APPROVE)
                .with_variables(json!({ "id": "200" }))
                .assert_data(|data| {
                    assert_eq!(data["approveSubmission"]["state"], SUBMISSION_STATE_APPROVED)
                })
                .with_save_as("approved"),
        )
        .step(
            Action::new("list_filtered", r#"query { submissions(state: "SUBMITTED") { id state } }"#)
                .assert_data(|data| {
                    // the filter is a no-op, both submissions come back
                    let states: Vec<_> = data["submissions"]
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|s| s["state"].as_str().unwrap().to_string())
                        .collect();
                    assert_eq!(states, vec![SUBMISSION_STATE_APPROVED, SUBMISSION_STATE_SUBMITTED]);
                }),
        )
        .run(&server)
        .await;

    assert_ne!(
        ctx.get_str("first", "/submitForReview/id"),
        ctx.get_str("second", "/submitForReview/id")
    );
    assert_eq!(
        ctx.get_str("approved", "/approveSubmission/id"),
        ctx.get_str("first", "/submitForReview/id")
    );
}

#[tokio::test]
async fn review_lesson_content_is_not_linked_test() {
    let (state, server) = setup_server();

    Flow::new()
        .step(create_course_action("1", 2, "Reading").with_save_as("course"))
        .step(create_unit_action("course", "Phonics").with_save_as("unit"))
        .step(create_lesson_action("unit", "Short vowels").with_save_as("lesson"))
        .step(
            Action::new(
                "add_blocks",
                r#"mutation($id: ID!) {
                    addTextBlock(lessonId: $id, input: { text: "a e i o u" }) { id text order }
                    addImageBlock(lessonId: $id, input: { url: "https://cdn/a.png", alt: "apple" }) { id url alt }
                    addAudioBlock(lessonId: $id, input: { url: "https://cdn/a.mp3", durationSec: 4 }) { id durationSec }
                    addVideoBlock(lessonId: $id, input: { url: "https://cdn/a.mp4" }) { id durationSec }
                    createQuiz(lessonId: $id, questions: [{ prompt: "Which is a vowel?", choices: ["a", "b"] }]) { id lessonId }
                }"#,
            )
            .with_dyn_variables(|ctx| json!({ "id": ctx.get_str("lesson", "/createLesson/id") }))
            .assert_data(|data| {
                assert_eq!(data["addTextBlock"]["text"], "a e i o u");
                assert_eq!(data["addTextBlock"]["order"], 0);
                assert_eq!(data["addImageBlock"]["alt"], "apple");
                assert_eq!(data["addAudioBlock"]["durationSec"], 4);
                assert!(data["addVideoBlock"]["durationSec"].is_null());
                assert!(data["createQuiz"]["lessonId"].is_string());
            }),
        )
        // blocks for a lesson that does not exist are accepted as well
        .step(
            Action::new(
                "add_block_unknown_lesson",
                r#"mutation { addTextBlock(lessonId: "404", input: { text: "?" }) { id } }"#,
            )
            .assert_data(|data| assert!(data["addTextBlock"]["id"].is_string())),
        )
        .step(
            Action::new(
                "progress",
                r#"mutation($id: ID!) {
                    startLesson(lessonId: $id) { id }
                    completeLesson(lessonId: $id, score: 90) { id }
                    submitQuiz(input: { quizId: "1", answers: [0] }) { id }
                }"#,
            )
            .with_dyn_variables(|ctx| json!({ "id": ctx.get_str("lesson", "/createLesson/id") })),
        )
        .step(
            Action::new("my_progress", "query { myProgress { id } }")
                .assert_data(|data| assert_eq!(data["myProgress"], json!([]))),
        )
        .run(&server)
        .await;

    // only the catalog chain itself was stored
    let tables = state.model().store().read().await;
    assert_eq!(tables.lessons.len(), 1);
    assert!(tables.submissions.is_empty());
}

#[tokio::test]
async fn review_accounts_are_placeholders_test() {
    let (_, server) = setup_server();

    Flow::new()
        .step(
            Action::new(
                "sign_up",
                r#"mutation { signUp(input: { email: "t@school.test", role: TEACHER }) { id role } }"#,
            )
            .assert_data(|data| assert_eq!(data["signUp"]["role"], "TEACHER")),
        )
        .step(
            Action::new(
                "profile",
                "mutation { createStudentProfile(input: { grade: 3, age: 9 }) { id grade age } }",
            )
            .assert_data(|data| {
                assert_eq!(data["createStudentProfile"]["grade"], 3);
                assert_eq!(data["createStudentProfile"]["age"], 9);
            }),
        )
        .step(
            Action::new("sign_in", r#"mutation { signIn(phone: "555", otp: "0000") }"#)
                .assert_data(|data| assert_eq!(data["signIn"], "dev-token")),
        )
        .step(
            Action::new("viewer", "query { viewer { id } }")
                .assert_data(|data| assert!(data["viewer"].is_null())),
        )
        .run(&server)
        .await;
}
