//! End-to-end conversation tests against mock collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use cybersathi_config::Settings;
use cybersathi_core::{
    CaseStatus, CaseStatusProvider, ComplaintRecord, ComplaintStore, ComplaintStoreError,
    ConversationStage, FraudBranch, MessengerError, OutboundMessenger, Response, StatusError,
    StatusSummary,
};
use cybersathi_engine::IntakeEngine;
use cybersathi_session::{InMemorySessionStore, SessionStore};

#[derive(Default)]
struct MockMessenger {
    sent: Mutex<Vec<(String, Response)>>,
    failures_remaining: AtomicU32,
}

#[async_trait]
impl OutboundMessenger for MockMessenger {
    async fn send(&self, user_id: &str, response: &Response) -> Result<(), MessengerError> {
        if self.failures_remaining.load(Ordering::SeqCst) > 0 {
            self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(MessengerError::Delivery("channel hiccup".to_string()));
        }
        self.sent
            .lock()
            .push((user_id.to_string(), response.clone()));
        Ok(())
    }
}

#[derive(Default)]
struct MockComplaintStore {
    records: Mutex<Vec<ComplaintRecord>>,
    conflicts_remaining: AtomicU32,
    failures_remaining: AtomicU32,
}

#[async_trait]
impl ComplaintStore for MockComplaintStore {
    async fn create(&self, record: &ComplaintRecord) -> Result<String, ComplaintStoreError> {
        if self.conflicts_remaining.load(Ordering::SeqCst) > 0 {
            self.conflicts_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(ComplaintStoreError::Conflict);
        }
        if self.failures_remaining.load(Ordering::SeqCst) > 0 {
            self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(ComplaintStoreError::Unavailable("db down".to_string()));
        }
        self.records.lock().push(record.clone());
        Ok(record.ticket_id.clone())
    }
}

#[derive(Default)]
struct MockStatusProvider {
    cases: Mutex<HashMap<String, StatusSummary>>,
    failures_remaining: AtomicU32,
}

#[async_trait]
impl CaseStatusProvider for MockStatusProvider {
    async fn lookup(&self, ticket_id: &str) -> Result<CaseStatus, StatusError> {
        if self.failures_remaining.load(Ordering::SeqCst) > 0 {
            self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(StatusError::Unavailable("portal down".to_string()));
        }
        Ok(match self.cases.lock().get(ticket_id) {
            Some(summary) => CaseStatus::Found(summary.clone()),
            None => CaseStatus::NotFound,
        })
    }
}

struct Harness {
    engine: IntakeEngine,
    sessions: Arc<InMemorySessionStore>,
    complaints: Arc<MockComplaintStore>,
    statuses: Arc<MockStatusProvider>,
    messenger: Arc<MockMessenger>,
}

fn harness() -> Harness {
    let mut settings = Settings::default();
    settings.retry.base_delay_ms = 1;
    settings.retry.max_delay_ms = 2;
    settings.collaborator_timeout_ms = 500;

    let sessions = Arc::new(InMemorySessionStore::new());
    let complaints = Arc::new(MockComplaintStore::default());
    let statuses = Arc::new(MockStatusProvider::default());
    let messenger = Arc::new(MockMessenger::default());

    let engine = IntakeEngine::new(
        settings,
        sessions.clone(),
        complaints.clone(),
        statuses.clone(),
        messenger.clone(),
    );

    Harness {
        engine,
        sessions,
        complaints,
        statuses,
        messenger,
    }
}

const USER: &str = "919876543210";

const FIELD_ANSWERS: [&str; 12] = [
    "Scanned a QR code sent on WhatsApp and ₹25000 was deducted instantly",
    "14/11/2024",
    "14:30",
    "25000",
    "Unknown",
    "9012345678",
    "Asha Kumar",
    "9876543210",
    "asha@example.com",
    "Pune, Maharashtra",
    "No, not yet",
    "None",
];

/// Drive a conversation to the confirmation summary.
async fn drive_to_confirmation(engine: &IntakeEngine, user: &str) {
    engine.handle_inbound(user, "I lost money in a UPI scam").await;
    engine.handle_inbound(user, "UPI/Payment App Fraud").await;
    for answer in FIELD_ANSWERS {
        engine.handle_inbound(user, answer).await;
    }
}

#[tokio::test]
async fn happy_path_files_one_complaint_and_clears_the_session() {
    let h = harness();

    let menu = h.engine.handle_inbound(USER, "money deducted from my account").await;
    assert!(menu.text.contains("financial fraud"));
    assert_eq!(menu.options.len(), 6);

    let first_prompt = h.engine.handle_inbound(USER, "UPI/Payment App Fraud").await;
    assert!(first_prompt.text.contains("describe the incident"));

    let mut last = Response::text("");
    for answer in FIELD_ANSWERS {
        last = h.engine.handle_inbound(USER, answer).await;
    }
    assert!(last.text.contains("COMPLAINT SUMMARY"));
    assert!(last.text.contains("Asha Kumar"));

    let submitted = h.engine.handle_inbound(USER, "Yes, confirm").await;
    assert!(submitted.text.contains("REGISTERED SUCCESSFULLY"));
    assert!(submitted.text.contains("CS-"));

    let records = h.complaints.records.lock();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.fraud_branch, FraudBranch::Financial);
    assert_eq!(record.fraud_type, "UPI/Payment App Fraud");
    assert_eq!(record.reporter_phone, "9876543210");
    assert_eq!(record.source, "conversational");
    assert!(submitted.text.contains(&record.ticket_id));
    drop(records);

    assert!(h.sessions.get(USER).await.is_none());
}

#[tokio::test]
async fn invalid_answers_do_not_lose_progress() {
    let h = harness();
    h.engine.handle_inbound(USER, "I was scammed").await;
    h.engine.handle_inbound(USER, "Other Financial Fraud").await;
    h.engine.handle_inbound(USER, "Lost money to a fake trading app").await;

    let error = h.engine.handle_inbound(USER, "yesterday evening").await;
    assert!(error.text.contains("Invalid date format"));

    let next = h.engine.handle_inbound(USER, "14/11/2024").await;
    assert!(next.text.contains("What time"));

    let session = h.sessions.get(USER).await.unwrap();
    assert_eq!(
        session.field(cybersathi_core::ComplaintField::IncidentDate),
        Some("14/11/2024")
    );
}

#[tokio::test]
async fn cancel_at_confirmation_clears_everything() {
    let h = harness();
    drive_to_confirmation(&h.engine, USER).await;

    let cancelled = h.engine.handle_inbound(USER, "No, cancel it").await;
    assert!(cancelled.text.contains("cancelled"));
    assert!(h.sessions.get(USER).await.is_none());
    assert!(h.complaints.records.lock().is_empty());
}

#[tokio::test]
async fn persistence_failure_keeps_the_session_at_confirmation() {
    let h = harness();
    drive_to_confirmation(&h.engine, USER).await;

    // More failures than the retry budget
    h.complaints.failures_remaining.store(10, Ordering::SeqCst);
    let apology = h.engine.handle_inbound(USER, "yes").await;
    assert!(apology.text.contains("went wrong"));
    assert!(h.complaints.records.lock().is_empty());

    let session = h.sessions.get(USER).await.unwrap();
    assert_eq!(session.stage, ConversationStage::Confirmation);

    // The user retries once the store recovers, without re-answering
    h.complaints.failures_remaining.store(0, Ordering::SeqCst);
    let submitted = h.engine.handle_inbound(USER, "yes").await;
    assert!(submitted.text.contains("REGISTERED SUCCESSFULLY"));
    assert_eq!(h.complaints.records.lock().len(), 1);
    assert!(h.sessions.get(USER).await.is_none());
}

#[tokio::test]
async fn transient_store_errors_are_retried_within_one_turn() {
    let h = harness();
    drive_to_confirmation(&h.engine, USER).await;

    // Fewer failures than the retry budget: the turn still succeeds
    h.complaints.failures_remaining.store(2, Ordering::SeqCst);
    let submitted = h.engine.handle_inbound(USER, "yes").await;
    assert!(submitted.text.contains("REGISTERED SUCCESSFULLY"));
    assert_eq!(h.complaints.records.lock().len(), 1);
}

#[tokio::test]
async fn ticket_conflict_regenerates_instead_of_failing() {
    let h = harness();
    drive_to_confirmation(&h.engine, USER).await;

    h.complaints.conflicts_remaining.store(1, Ordering::SeqCst);
    let submitted = h.engine.handle_inbound(USER, "yes").await;
    assert!(submitted.text.contains("REGISTERED SUCCESSFULLY"));
    assert_eq!(h.complaints.records.lock().len(), 1);
}

#[tokio::test]
async fn tracking_a_known_ticket_returns_its_status() {
    let h = harness();
    h.statuses.cases.lock().insert(
        "CS-20241114-123456".to_string(),
        StatusSummary {
            ticket_id: "CS-20241114-123456".to_string(),
            status: "Under Investigation".to_string(),
            filed_on: "2024-11-14".to_string(),
            assigned_to: "Cyber Cell Pune".to_string(),
            last_update: "2024-11-20".to_string(),
        },
    );

    let prompt = h.engine.handle_inbound(USER, "check my complaint status").await;
    assert!(prompt.text.contains("ticket ID"));

    let status = h.engine.handle_inbound(USER, "CS-20241114-123456").await;
    assert!(status.text.contains("Under Investigation"));
    assert!(status.text.contains("Cyber Cell Pune"));
    assert!(!status.options.is_empty());
    assert!(h.sessions.get(USER).await.is_none());
}

#[tokio::test]
async fn tracking_an_unknown_ticket_says_not_found() {
    let h = harness();
    h.engine.handle_inbound(USER, "track status").await;
    let response = h.engine.handle_inbound(USER, "CS-20240101-999999").await;
    assert!(response.text.contains("could not find"));
    assert!(h.sessions.get(USER).await.is_none());
}

#[tokio::test]
async fn tracking_rejects_malformed_ids_without_leaving_the_stage() {
    let h = harness();
    h.engine.handle_inbound(USER, "track status").await;
    let response = h.engine.handle_inbound(USER, "my ticket please").await;
    assert!(response.text.contains("Invalid ticket ID"));

    let session = h.sessions.get(USER).await.unwrap();
    assert_eq!(session.stage, ConversationStage::Tracking);
}

#[tokio::test]
async fn status_provider_outage_preserves_the_tracking_session() {
    let h = harness();
    h.statuses.failures_remaining.store(10, Ordering::SeqCst);

    h.engine.handle_inbound(USER, "track status").await;
    let apology = h.engine.handle_inbound(USER, "CS-20241114-123456").await;
    assert!(apology.text.contains("went wrong"));

    let session = h.sessions.get(USER).await.unwrap();
    assert_eq!(session.stage, ConversationStage::Tracking);
}

#[tokio::test]
async fn handle_and_send_retries_delivery() {
    let h = harness();
    h.messenger.failures_remaining.store(1, Ordering::SeqCst);

    let response = h.engine.handle_and_send(USER, "hello").await.unwrap();
    assert!(response.text.contains("CyberSathi"));

    let sent = h.messenger.sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, USER);
}

#[tokio::test]
async fn concurrent_messages_from_one_user_do_not_corrupt_the_session() {
    let h = harness();
    let engine = Arc::new(h.engine);

    let a = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.handle_inbound(USER, "I was scammed").await })
    };
    let b = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.handle_inbound(USER, "I was scammed").await })
    };
    a.await.unwrap();
    b.await.unwrap();

    // Both turns observed a consistent session; whichever ran second saw
    // the fraud-type stage and re-offered the menu.
    let session = h.sessions.get(USER).await.unwrap();
    assert!(matches!(
        session.stage,
        ConversationStage::AwaitingFraudType | ConversationStage::Collecting { .. }
    ));
}

#[tokio::test]
async fn turn_lock_registry_does_not_grow_with_distinct_users() {
    let h = harness();
    for i in 0..50 {
        let user = format!("9190000{i:05}");
        h.engine.handle_inbound(&user, "hello").await;
    }

    // Sessions persist until the sweeper evicts them; the lock registry
    // must not — every finished turn releases its entry.
    assert_eq!(h.sessions.len().await, 50);
    assert_eq!(h.engine.active_turns(), 0);
}

#[tokio::test]
async fn contended_turn_lock_is_released_after_the_last_turn() {
    let h = harness();
    let engine = Arc::new(h.engine);

    let turns: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            tokio::spawn(async move { engine.handle_inbound(USER, "I was scammed").await })
        })
        .collect();
    for turn in turns {
        turn.await.unwrap();
    }

    assert_eq!(engine.active_turns(), 0);
}

#[tokio::test]
async fn independent_users_have_independent_sessions() {
    let h = harness();
    h.engine.handle_inbound("919876543210", "I was scammed").await;
    h.engine.handle_inbound("918765432109", "track status").await;

    let first = h.sessions.get("919876543210").await.unwrap();
    let second = h.sessions.get("918765432109").await.unwrap();
    assert_eq!(first.stage, ConversationStage::AwaitingFraudType);
    assert_eq!(second.stage, ConversationStage::Tracking);
}
