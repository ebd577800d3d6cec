mod common;

use clubmeet::{
    meetings,
    models::RsvpStatus,
    outcome::{Level, OpError, Outcome},
    rsvps::{self, DELETE_RSVP, RECORD_RESPONSE, RsvpForm, SEND_INVITATION, store},
};

async fn with_meeting() -> common::Seeded {
    let s = common::seeded().await;
    meetings::store::upsert(&s.db_pool, 1, &s.fields()).await.unwrap();
    s
}

#[tokio::test]
async fn invitation_starts_as_maybe() {
    let s = with_meeting().await;

    let outcome = store::send_invitation(&s.db_pool, 1, s.jane, None).await.unwrap();
    assert_eq!(outcome, Outcome::success("Invitation sent successfully!"));

    let rsvp = store::find(&s.db_pool, 1, s.jane).await.unwrap().unwrap();
    assert_eq!(rsvp.status, RsvpStatus::Maybe);
}

#[tokio::test]
async fn invitation_can_choose_its_id() {
    let s = with_meeting().await;

    store::send_invitation(&s.db_pool, 1, s.john, Some(500)).await.unwrap();
    assert_eq!(store::find(&s.db_pool, 1, s.john).await.unwrap().unwrap().rsvp_id, 500);
}

#[tokio::test]
async fn second_invitation_is_rejected_and_changes_nothing() {
    let s = with_meeting().await;
    store::send_invitation(&s.db_pool, 1, s.jane, None).await.unwrap();
    store::record_response(&s.db_pool, 1, s.jane, RsvpStatus::No).await.unwrap();
    let before = store::find(&s.db_pool, 1, s.jane).await.unwrap().unwrap();

    let err = store::send_invitation(&s.db_pool, 1, s.jane, None).await.unwrap_err();
    assert!(matches!(err, OpError::Duplicate(_)));
    assert_eq!(Outcome::from(err).level, Level::Warning);

    let after = store::find(&s.db_pool, 1, s.jane).await.unwrap().unwrap();
    assert_eq!(after, before);
    assert_eq!(s.count("SELECT COUNT(*) FROM rsvps").await, 1);
}

#[tokio::test]
async fn invitation_to_unknown_meeting_fails() {
    let s = with_meeting().await;

    let err = store::send_invitation(&s.db_pool, 77, s.jane, None).await.unwrap_err();
    assert!(matches!(err, OpError::ReferentialIntegrity(_)), "{err:?}");
    assert_eq!(s.count("SELECT COUNT(*) FROM rsvps").await, 0);
}

#[tokio::test]
async fn taken_rsvp_id_reports_the_failed_operation() {
    let s = with_meeting().await;
    store::send_invitation(&s.db_pool, 1, s.jane, Some(5)).await.unwrap();

    let err = store::send_invitation(&s.db_pool, 1, s.john, Some(5)).await.unwrap_err();
    assert!(matches!(err, OpError::Persistence { .. }), "{err:?}");

    let outcome = Outcome::from(err);
    assert_eq!(outcome.level, Level::Error);
    assert!(
        outcome.message.starts_with("Failed to send invitation. Error: "),
        "{}",
        outcome.message
    );
    assert!(store::find(&s.db_pool, 1, s.john).await.unwrap().is_none());
}

#[tokio::test]
async fn recording_without_invitation_is_not_found() {
    let s = with_meeting().await;

    let err = store::record_response(&s.db_pool, 1, s.alice, RsvpStatus::Yes)
        .await
        .unwrap_err();
    assert!(matches!(err, OpError::NotFound(_)));
    assert_eq!(err.to_string(), "RSVP not found.");
    assert_eq!(s.count("SELECT COUNT(*) FROM rsvps").await, 0);
}

#[tokio::test]
async fn any_status_can_follow_any_other() {
    let s = with_meeting().await;
    store::send_invitation(&s.db_pool, 1, s.john, None).await.unwrap();

    for status in [RsvpStatus::Yes, RsvpStatus::No, RsvpStatus::Yes, RsvpStatus::Maybe] {
        let outcome = store::record_response(&s.db_pool, 1, s.john, status).await.unwrap();
        assert_eq!(outcome.message, "RSVP response recorded!");
        assert_eq!(store::find(&s.db_pool, 1, s.john).await.unwrap().unwrap().status, status);
    }
}

#[tokio::test]
async fn delete_removes_the_rsvp() {
    let s = with_meeting().await;
    store::send_invitation(&s.db_pool, 1, s.john, None).await.unwrap();

    assert_eq!(
        store::delete(&s.db_pool, 1, s.john).await.unwrap(),
        Outcome::success("RSVP deleted successfully!")
    );
    assert!(store::find(&s.db_pool, 1, s.john).await.unwrap().is_none());
    assert!(matches!(store::delete(&s.db_pool, 1, s.john).await, Err(OpError::NotFound(_))));
}

fn form(s: &common::Seeded, action: &str, status: Option<&str>) -> RsvpForm {
    RsvpForm {
        action: Some(action.to_owned()),
        rsvp_id: Some("".to_owned()),
        meeting_id: Some("1".to_owned()),
        student_id: Some(s.jane.to_string()),
        rsvp_status: status.map(str::to_owned),
    }
}

#[tokio::test]
async fn form_walks_the_invitation_lifecycle() {
    let s = with_meeting().await;

    assert!(rsvps::apply(&s.db_pool, form(&s, SEND_INVITATION, None)).await.is_success());
    assert_eq!(
        rsvps::apply(&s.db_pool, form(&s, SEND_INVITATION, None)).await,
        Outcome::warning("RSVP already exists for this student.")
    );

    let yes = rsvps::apply(&s.db_pool, form(&s, RECORD_RESPONSE, Some("YES"))).await;
    assert!(yes.is_success());
    let rsvp = store::find(&s.db_pool, 1, s.jane).await.unwrap().unwrap();
    assert_eq!(rsvp.status, RsvpStatus::Yes);

    let bad = rsvps::apply(&s.db_pool, form(&s, RECORD_RESPONSE, Some("sure"))).await;
    assert_eq!(bad.level, Level::Error);
    let rsvp = store::find(&s.db_pool, 1, s.jane).await.unwrap().unwrap();
    assert_eq!(rsvp.status, RsvpStatus::Yes);

    assert!(rsvps::apply(&s.db_pool, form(&s, DELETE_RSVP, None)).await.is_success());
    assert_eq!(s.count("SELECT COUNT(*) FROM rsvps").await, 0);
}

#[tokio::test]
async fn form_rejects_unknown_action() {
    let s = with_meeting().await;

    assert_eq!(
        rsvps::apply(&s.db_pool, form(&s, "Cancel Everything", None)).await,
        Outcome::error("Invalid action.")
    );
}

#[tokio::test]
async fn missing_rsvp_is_reported_before_a_bad_status() {
    let s = with_meeting().await;

    assert_eq!(
        rsvps::apply(&s.db_pool, form(&s, RECORD_RESPONSE, Some("sure"))).await,
        Outcome::error("RSVP not found.")
    );
    assert_eq!(
        rsvps::apply(&s.db_pool, form(&s, RECORD_RESPONSE, None)).await,
        Outcome::error("RSVP not found.")
    );
}
