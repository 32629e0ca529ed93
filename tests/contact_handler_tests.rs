use std::sync::Arc;

use chrono::Utc;
use mockall::{mock, predicate::*};
use showcase_api::{
    entities::{
        contact_message::{ContactMessage, ContactMessageForm, NewContactMessage},
        notification::{NotificationOutcome, OutgoingEmail},
    },
    errors::{AppError, NotificationError},
    repositories::{contact_message::ContactMessageRepository, mailer::Mailer},
    use_cases::contact::ContactMessageHandler,
};

mock! {
    pub ContactRepo {}

    #[async_trait::async_trait]
    impl ContactMessageRepository for ContactRepo {
        async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
        async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError>;
        async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
        async fn update_contact_message(&self, id: i64, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
        async fn delete_contact_message(&self, id: i64) -> Result<(), AppError>;
    }
}

mock! {
    pub Mail {}

    #[async_trait::async_trait]
    impl Mailer for Mail {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError>;
    }
}

const OPERATOR: &str = "owner@example.com";

fn request(email: &str) -> ContactMessageForm {
    ContactMessageForm {
        name: Some("Ada".into()),
        email: Some(email.into()),
        subject: Some("Hiring".into()),
        message: Some("Are you available?".into()),
    }
}

fn stored(msg: &NewContactMessage) -> ContactMessage {
    msg.clone().into_contact_message(1, Utc::now())
}

fn handler(repo: MockContactRepo, mailer: MockMail) -> ContactMessageHandler<MockContactRepo, MockMail> {
    ContactMessageHandler::new(Arc::new(repo), Arc::new(mailer), OPERATOR.to_string())
}

#[actix_rt::test]
async fn sends_notification_after_insert() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|msg| Ok(stored(msg)));

    let mut mailer = MockMail::new();
    mailer.expect_send()
        .withf(|email| {
            email.subject == "New Contact Message: Hiring"
                && email.to == OPERATOR
                && email.from == OPERATOR
                && email.body.contains("Are you available?")
        })
        .times(1)
        .returning(|_| Ok(()));

    let submission = handler(repo, mailer)
        .create_contact_message(request("ada@example.com"))
        .await
        .expect("submission should succeed");

    assert_eq!(submission.message.id, 1);
    assert_eq!(submission.notification, NotificationOutcome::Sent);
}

#[actix_rt::test]
async fn mail_failure_is_reported_but_not_raised() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|msg| Ok(stored(msg)));

    let mut mailer = MockMail::new();
    mailer.expect_send()
        .times(1)
        .returning(|_| Err(NotificationError::Transport("timed out".into())));

    let submission = handler(repo, mailer)
        .create_contact_message(request("ada@example.com"))
        .await
        .expect("mail failure must not fail the submission");

    assert_eq!(submission.message.email, "ada@example.com");
    assert_eq!(
        submission.notification,
        NotificationOutcome::Failed("Mail transport failed: timed out".into())
    );
}

#[actix_rt::test]
async fn storage_failure_skips_notification() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|_| Err(AppError::InternalError("connection reset".into())));

    let mut mailer = MockMail::new();
    mailer.expect_send().never();

    let result = handler(repo, mailer)
        .create_contact_message(request("ada@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[actix_rt::test]
async fn invalid_email_never_reaches_storage() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().never();

    let mut mailer = MockMail::new();
    mailer.expect_send().never();

    let result = handler(repo, mailer)
        .create_contact_message(request("ada-at-example"))
        .await;

    match result {
        Err(AppError::ValidationError(errors)) => assert_eq!(errors[0].field, "email"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[actix_rt::test]
async fn blank_subject_never_reaches_storage() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().never();

    let mut mailer = MockMail::new();
    mailer.expect_send().never();

    let form = ContactMessageForm { subject: Some("   ".into()), ..request("ada@example.com") };
    let result = handler(repo, mailer).create_contact_message(form).await;

    match result {
        Err(AppError::ValidationError(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "subject");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[actix_rt::test]
async fn non_numeric_id_is_not_found_without_lookup() {
    let mut repo = MockContactRepo::new();
    repo.expect_get_contact_message_by_id().never();

    let result = handler(repo, MockMail::new())
        .get_contact_message_by_id("abc")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn missing_row_maps_to_contact_not_found() {
    let mut repo = MockContactRepo::new();
    repo.expect_delete_contact_message()
        .with(eq(42))
        .times(1)
        .returning(|_| Err(AppError::NotFound("Record not found".into())));

    let result = handler(repo, MockMail::new())
        .delete_contact_message("42")
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Contact message not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}
