//! Seeder and seed command tests.
//!
//! These tests use a recording store double to observe connection
//! lifecycle without a running MongoDB server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{NewNotification, Notification, NotificationType};
use notification_service_lib::cli::{run_seed_command, EXIT_FAILURE, EXIT_SUCCESS, USAGE};
use notification_service_lib::{
    seed_notifications, MongoConnector, NotificationRepository, StoreConnector, StoreSession,
};

// =============================================================================
// Recording Store Double
// =============================================================================

#[derive(Default)]
struct Recorder {
    opened: AtomicUsize,
    closed: AtomicUsize,
    insert_calls: AtomicUsize,
    inserted: Mutex<Vec<NewNotification>>,
}

struct RecordingConnector {
    recorder: Arc<Recorder>,
    fail_insert: bool,
    fail_close: bool,
    fail_connect: bool,
}

impl RecordingConnector {
    fn new() -> Self {
        Self {
            recorder: Arc::new(Recorder::default()),
            fail_insert: false,
            fail_close: false,
            fail_connect: false,
        }
    }

    fn failing_insert() -> Self {
        Self {
            fail_insert: true,
            ..Self::new()
        }
    }

    fn failing_close() -> Self {
        Self {
            fail_close: true,
            ..Self::new()
        }
    }

    fn failing_connect() -> Self {
        Self {
            fail_connect: true,
            ..Self::new()
        }
    }

    fn opened(&self) -> usize {
        self.recorder.opened.load(Ordering::SeqCst)
    }

    fn closed(&self) -> usize {
        self.recorder.closed.load(Ordering::SeqCst)
    }

    fn inserted(&self) -> Vec<NewNotification> {
        self.recorder.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreConnector for RecordingConnector {
    async fn connect(&self) -> AppResult<Box<dyn StoreSession>> {
        if self.fail_connect {
            return Err(AppError::internal("connection refused"));
        }
        self.recorder.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingSession {
            recorder: self.recorder.clone(),
            fail_insert: self.fail_insert,
            fail_close: self.fail_close,
        }))
    }
}

struct RecordingSession {
    recorder: Arc<Recorder>,
    fail_insert: bool,
    fail_close: bool,
}

#[async_trait]
impl StoreSession for RecordingSession {
    fn notifications(&self) -> &dyn NotificationRepository {
        self
    }

    async fn close(self: Box<Self>) -> AppResult<()> {
        self.recorder.closed.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(AppError::internal("close failed"));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for RecordingSession {
    async fn insert_many(&self, notifications: Vec<NewNotification>) -> AppResult<usize> {
        self.recorder.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert {
            return Err(AppError::internal("write rejected"));
        }
        let count = notifications.len();
        self.recorder.inserted.lock().unwrap().extend(notifications);
        Ok(count)
    }

    async fn list_for_user(&self, _user: &str, _limit: u32) -> AppResult<Vec<Notification>> {
        Ok(vec![])
    }

    async fn mark_read(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

// =============================================================================
// Seeding Operation
// =============================================================================

#[tokio::test]
async fn test_seed_inserts_three_fixed_notifications() {
    let connector = RecordingConnector::new();

    let count = seed_notifications(&connector, "u123").await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(connector.recorder.insert_calls.load(Ordering::SeqCst), 1);

    let inserted = connector.inserted();
    assert_eq!(inserted.len(), 3);
    assert!(inserted.iter().all(|n| n.user == "u123"));

    let triples: Vec<(NotificationType, &str, &str)> = inserted
        .iter()
        .map(|n| (n.kind, n.title.as_str(), n.message.as_str()))
        .collect();
    assert_eq!(
        triples,
        vec![
            (
                NotificationType::Like,
                "New like on your recipe",
                "Someone liked your recipe \"Creamy Garlic Pasta\".",
            ),
            (
                NotificationType::Comment,
                "New comment",
                "Someone left a comment on your recipe \"Creamy Garlic Pasta\".",
            ),
            (
                NotificationType::System,
                "Welcome to the kitchen",
                "Start by sharing your first recipe with the community.",
            ),
        ]
    );

    assert_eq!(connector.opened(), 1);
    assert_eq!(connector.closed(), 1);
}

#[tokio::test]
async fn test_seed_closes_connection_when_insert_fails() {
    let connector = RecordingConnector::failing_insert();

    let result = seed_notifications(&connector, "u123").await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "write rejected"));
    assert_eq!(connector.opened(), 1);
    assert_eq!(connector.closed(), 1);
    assert!(connector.inserted().is_empty());
}

#[tokio::test]
async fn test_seed_reports_close_failure_after_insert() {
    let connector = RecordingConnector::failing_close();

    let result = seed_notifications(&connector, "u123").await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "close failed"));
    assert_eq!(connector.inserted().len(), 3);
    assert_eq!(connector.closed(), 1);
}

#[tokio::test]
async fn test_seed_insert_error_wins_over_close_error() {
    let connector = RecordingConnector {
        fail_insert: true,
        fail_close: true,
        ..RecordingConnector::new()
    };

    let result = seed_notifications(&connector, "u123").await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "write rejected"));
    assert_eq!(connector.opened(), 1);
    assert_eq!(connector.closed(), 1);
}

#[tokio::test]
async fn test_seed_propagates_connect_failure() {
    let connector = RecordingConnector::failing_connect();

    let result = seed_notifications(&connector, "u123").await;

    assert!(result.is_err());
    assert_eq!(connector.opened(), 0);
    assert_eq!(connector.closed(), 0);
}

#[tokio::test]
async fn test_seed_rejects_blank_user_without_connecting() {
    let connector = RecordingConnector::new();

    let result = seed_notifications(&connector, "   ").await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    assert_eq!(connector.opened(), 0);
}

#[tokio::test]
async fn test_seed_is_not_idempotent() {
    let connector = RecordingConnector::new();

    seed_notifications(&connector, "u123").await.unwrap();
    seed_notifications(&connector, "u123").await.unwrap();

    assert_eq!(connector.inserted().len(), 6);
    assert_eq!(connector.opened(), 2);
    assert_eq!(connector.closed(), 2);
}

// =============================================================================
// MongoDB Connector
// =============================================================================

#[tokio::test]
async fn test_mongo_connector_without_uri_is_configuration_error() {
    let result = seed_notifications(&MongoConnector::new(""), "u123").await;

    match result {
        Err(err @ AppError::Configuration(_)) => {
            assert_eq!(err.code(), "CONFIGURATION_ERROR");
            assert_eq!(err.to_string(), "Configuration error: MONGODB_URI is not set");
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mongo_connector_with_malformed_uri_is_store_error() {
    let result = seed_notifications(&MongoConnector::new("not-a-mongodb-uri"), "u123").await;

    match result {
        Err(err @ AppError::Store(_)) => {
            assert_eq!(err.code(), "STORE_ERROR");
            assert_eq!(err.status().as_u16(), 503);
            assert_eq!(err.user_message(), "A database error occurred");
        }
        other => panic!("expected store error, got {:?}", other),
    }
}

// =============================================================================
// Command-Line Adapter
// =============================================================================

#[tokio::test]
async fn test_command_without_user_prints_usage() {
    let connector = RecordingConnector::new();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let code = run_seed_command(None, &connector, &mut stdout, &mut stderr).await;

    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(code, 1);
    assert_eq!(String::from_utf8(stderr).unwrap().trim(), USAGE);
    assert!(stdout.is_empty());
    assert_eq!(connector.opened(), 0);
}

#[tokio::test]
async fn test_command_with_user_succeeds() {
    let connector = RecordingConnector::new();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let code = run_seed_command(Some("u123"), &connector, &mut stdout, &mut stderr).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "Seeded 3 notifications for user u123\n"
    );
    assert!(stderr.is_empty());
    assert_eq!(connector.inserted().len(), 3);
    assert_eq!(connector.closed(), 1);
}

#[tokio::test]
async fn test_command_reports_store_failure() {
    let connector = RecordingConnector::failing_insert();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let code = run_seed_command(Some("u123"), &connector, &mut stdout, &mut stderr).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(!stderr.is_empty());
    assert_eq!(connector.closed(), 1);
}
