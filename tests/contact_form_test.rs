use httpmock::prelude::*;
use portfolio_site::core::{NotificationKind, SubmissionState};
use portfolio_site::domain::model::{SEND_FAILURE_MESSAGE, SEND_SUCCESS_MESSAGE};
use portfolio_site::{
    ContactForm, EmailJsRelay, PortfolioPage, RecordingNotifier, RelayConfig, SubmitOutcome,
};
use std::sync::Arc;

const SEND_PATH: &str = "/api/v1.0/email/send";

fn relay_for(server: &MockServer) -> EmailJsRelay {
    let config = RelayConfig::new("gmail", "template_jxal6oi", "public_key_123")
        .with_endpoint(server.url(SEND_PATH));
    EmailJsRelay::new(config)
}

fn filled_form() -> ContactForm {
    ContactForm::new(
        "Grace Hopper",
        "grace@example.com",
        "Collaboration",
        "Would love to work together.",
    )
}

fn mounted_page(
    server: &MockServer,
) -> (
    PortfolioPage<EmailJsRelay, Arc<RecordingNotifier>>,
    Arc<RecordingNotifier>,
) {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut page = PortfolioPage::new(relay_for(server), notifier.clone());
    page.mount();
    page.contact_form().with_form(|form| *form = filled_form());
    (page, notifier)
}

#[tokio::test]
async fn test_successful_send_clears_form_and_notifies_once() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH).json_body(serde_json::json!({
                "service_id": "gmail",
                "template_id": "template_jxal6oi",
                "user_id": "public_key_123",
                "template_params": {
                    "user_name": "Grace Hopper",
                    "user_email": "grace@example.com",
                    "subject": "Collaboration",
                    "message": "Would love to work together."
                }
            }));
        then.status(200).body("OK");
    });

    let (page, notifier) = mounted_page(&server);
    let outcome = page.submit_contact().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    send_mock.assert();
    assert_eq!(page.submission_state(), SubmissionState::Idle);
    assert!(page.submit_enabled());
    assert_eq!(page.contact_form().form_snapshot(), Some(ContactForm::default()));

    let shown = notifier.notifications();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Success);
    assert_eq!(shown[0].message, SEND_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_provider_rejection_keeps_fields() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(400).body("The Public Key is invalid");
    });

    let (page, notifier) = mounted_page(&server);
    let outcome = page.submit_contact().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    send_mock.assert();
    assert_eq!(page.submission_state(), SubmissionState::Idle);
    assert_eq!(page.contact_form().form_snapshot(), Some(filled_form()));

    let shown = notifier.notifications();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Failure);
    assert_eq!(shown[0].message, SEND_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_server_error_is_a_failure() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(500);
    });

    let (page, notifier) = mounted_page(&server);

    assert_eq!(page.submit_contact().await, SubmitOutcome::Failed);
    send_mock.assert_hits(1);
    assert_eq!(notifier.notifications().len(), 1);
}

#[tokio::test]
async fn test_unreachable_relay_is_a_failure() {
    // 沒有任何程式在這個埠口上監聽
    let config =
        RelayConfig::new("gmail", "template", "key").with_endpoint("http://127.0.0.1:9/send");
    let notifier = Arc::new(RecordingNotifier::new());
    let mut page = PortfolioPage::new(EmailJsRelay::new(config), notifier.clone());
    page.mount();
    page.contact_form().with_form(|form| *form = filled_form());

    assert_eq!(page.submit_contact().await, SubmitOutcome::Failed);
    assert_eq!(page.submission_state(), SubmissionState::Idle);
    assert_eq!(page.contact_form().form_snapshot(), Some(filled_form()));

    let shown = notifier.notifications();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Failure);
}

#[tokio::test]
async fn test_resubmit_after_failure_sends_again() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(503);
    });

    let (page, notifier) = mounted_page(&server);
    assert_eq!(page.submit_contact().await, SubmitOutcome::Failed);
    failing.assert_hits(1);
    failing.delete();

    let ok = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(200).body("OK");
    });
    assert_eq!(page.submit_contact().await, SubmitOutcome::Sent);
    ok.assert_hits(1);

    let kinds: Vec<NotificationKind> = notifier.notifications().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [NotificationKind::Failure, NotificationKind::Success]);
}

#[tokio::test]
async fn test_empty_form_never_reaches_relay() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(200).body("OK");
    });

    let notifier = Arc::new(RecordingNotifier::new());
    let mut page = PortfolioPage::new(relay_for(&server), notifier.clone());
    page.mount();

    let outcome = page.submit_contact().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            missing: vec!["user_name", "user_email", "subject", "message"]
        }
    );
    send_mock.assert_hits(0);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_whitespace_field_still_counts_as_filled() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path(SEND_PATH);
        then.status(200).body("OK");
    });

    let notifier = Arc::new(RecordingNotifier::new());
    let mut page = PortfolioPage::new(relay_for(&server), notifier.clone());
    page.mount();
    page.contact_form()
        .with_form(|form| *form = ContactForm::new("Ada", "ada@example.com", " ", "hi"));

    assert_eq!(page.submit_contact().await, SubmitOutcome::Sent);
    send_mock.assert_hits(1);
    assert_eq!(notifier.notifications().len(), 1);
}
