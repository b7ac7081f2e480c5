//! Intake engine
//!
//! Wires the conversation state machine to the session store and the
//! external collaborators. [`IntakeEngine::handle_inbound`] is the single
//! entry point: one inbound message in, one response out, with per-user
//! serialization so concurrent messages from the same user cannot corrupt a
//! session.
//!
//! Collaborator calls are bounded by a timeout and retried with exponential
//! backoff. A failed submission or lookup never loses collected answers:
//! the session stays where it was and the user gets an apology.

pub mod machine;
pub mod retry;

pub use machine::{StateMachine, TurnOutcome};
pub use retry::RetryPolicy;

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use cybersathi_config::{follow_up_menu, Settings};
use cybersathi_core::{
    mask_phone, CaseStatus, CaseStatusProvider, ComplaintRecord, ComplaintStore,
    ComplaintStoreError, MessengerError, OutboundMessenger, Response, Session, StatusError,
    StatusSummary,
};
use cybersathi_session::SessionStore;

/// Conversational intake orchestrator.
pub struct IntakeEngine {
    machine: StateMachine,
    sessions: Arc<dyn SessionStore>,
    complaints: Arc<dyn ComplaintStore>,
    statuses: Arc<dyn CaseStatusProvider>,
    messenger: Arc<dyn OutboundMessenger>,
    retry: RetryPolicy,
    call_timeout: Duration,
    settings: Settings,
    turn_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl IntakeEngine {
    pub fn new(
        settings: Settings,
        sessions: Arc<dyn SessionStore>,
        complaints: Arc<dyn ComplaintStore>,
        statuses: Arc<dyn CaseStatusProvider>,
        messenger: Arc<dyn OutboundMessenger>,
    ) -> Self {
        Self {
            machine: StateMachine::default(),
            sessions,
            complaints,
            statuses,
            messenger,
            retry: RetryPolicy::from(&settings.retry),
            call_timeout: Duration::from_millis(settings.collaborator_timeout_ms),
            settings,
            turn_locks: DashMap::new(),
        }
    }

    /// Process one inbound message and return the response to send.
    ///
    /// Conversationally infallible: collaborator failures surface as an
    /// apology response, never as an error to the transport.
    pub async fn handle_inbound(&self, user_id: &str, text: &str) -> Response {
        let lock = self.turn_lock(user_id);
        let guard = lock.lock().await;
        let response = self.run_turn(user_id, text).await;
        drop(guard);

        // Two strong counts mean the registry entry and our own handle;
        // no other turn is holding or awaiting this lock, so the entry can
        // go. `remove_if` and `turn_lock` contend on the same shard lock,
        // which rules out a waiter cloning in between.
        self.turn_locks
            .remove_if(user_id, |_, entry| Arc::strong_count(entry) == 2);

        response
    }

    async fn run_turn(&self, user_id: &str, text: &str) -> Response {
        let mut session = match self.sessions.get(user_id).await {
            Some(session) => session,
            None => Session::new(user_id),
        };
        session.touch();

        let outcome = self.machine.advance(&mut session, text);
        tracing::info!(
            user = %mask_phone(user_id),
            stage = %session.stage,
            "turn handled"
        );

        match outcome {
            TurnOutcome::Reply(response) => {
                self.sessions.put(session).await;
                response
            }
            TurnOutcome::ClearAndReply(response) => {
                self.sessions.clear(user_id).await;
                response
            }
            TurnOutcome::Submit => self.submit(session).await,
            TurnOutcome::Track { ticket_id } => self.track(session, &ticket_id).await,
        }
    }

    /// Process one inbound message and deliver the response over the
    /// messenger. Delivery is retried; a delivery failure never mutates the
    /// session, so the user can simply resend.
    pub async fn handle_and_send(
        &self,
        user_id: &str,
        text: &str,
    ) -> Result<Response, MessengerError> {
        let response = self.handle_inbound(user_id, text).await;
        self.retry
            .run(
                || async {
                    match tokio::time::timeout(
                        self.call_timeout,
                        self.messenger.send(user_id, &response),
                    )
                    .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(MessengerError::Timeout),
                    }
                },
                |_| true,
            )
            .await?;
        Ok(response)
    }

    /// Periodically evict idle sessions per the configured TTL.
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let sessions = Arc::clone(&self.sessions);
        let interval = Duration::from_secs(self.settings.session.sweep_interval_secs.max(1));
        let max_idle = chrono::Duration::seconds(self.settings.session.idle_ttl_secs as i64);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                sessions.evict_idle(max_idle).await;
            }
        })
    }

    /// Number of users with a turn currently in flight (or queued). Lock
    /// entries are removed as soon as the last turn for a user finishes, so
    /// the registry stays bounded by concurrency, not by user count.
    pub fn active_turns(&self) -> usize {
        self.turn_locks.len()
    }

    fn turn_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.turn_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Finalize a confirmed complaint: generate a ticket, persist the
    /// record, then clear the session. A ticket collision regenerates; any
    /// other persistence failure keeps the session at confirmation so the
    /// user can retry without re-answering.
    async fn submit(&self, session: Session) -> Response {
        let templates = self.machine.templates();

        for attempt in 1..=self.settings.ticket.max_regenerate_attempts.max(1) {
            let ticket_id = cybersathi_ticket::generate_ticket();
            let record = match ComplaintRecord::from_session(&session, &ticket_id) {
                Ok(record) => record,
                Err(err) => {
                    // The machine only emits Submit from a complete session;
                    // an incomplete one here is unrecoverable, start over.
                    tracing::error!(user = %mask_phone(&session.user_id), error = %err, "confirmed session was incomplete");
                    self.sessions.clear(&session.user_id).await;
                    return Response::text(&templates.apology);
                }
            };

            let result = self
                .retry
                .run(
                    || async {
                        match tokio::time::timeout(
                            self.call_timeout,
                            self.complaints.create(&record),
                        )
                        .await
                        {
                            Ok(result) => result,
                            Err(_) => Err(ComplaintStoreError::Timeout),
                        }
                    },
                    |err| !err.is_conflict(),
                )
                .await;

            match result {
                Ok(stored_id) => {
                    tracing::info!(
                        user = %mask_phone(&session.user_id),
                        ticket_id = %stored_id,
                        "complaint registered"
                    );
                    self.sessions.clear(&session.user_id).await;
                    return Response::with_options(
                        templates.submitted_text(&ticket_id),
                        follow_up_menu(),
                    );
                }
                Err(err) if err.is_conflict() => {
                    tracing::warn!(attempt, ticket_id = %ticket_id, "ticket ID collision, regenerating");
                }
                Err(err) => {
                    tracing::error!(user = %mask_phone(&session.user_id), error = %err, "complaint persistence failed");
                    self.sessions.put(session).await;
                    return Response::text(&templates.apology);
                }
            }
        }

        tracing::error!(
            user = %mask_phone(&session.user_id),
            "ticket regeneration budget exhausted"
        );
        self.sessions.put(session).await;
        Response::text(&templates.apology)
    }

    /// Look up a complaint's status. Found and not-found both end the
    /// tracking exchange; a provider failure keeps the session in tracking
    /// so the user can retry the same ID.
    async fn track(&self, session: Session, ticket_id: &str) -> Response {
        let templates = self.machine.templates();

        let result = self
            .retry
            .run(
                || async {
                    match tokio::time::timeout(self.call_timeout, self.statuses.lookup(ticket_id))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(StatusError::Timeout),
                    }
                },
                |_| true,
            )
            .await;

        match result {
            Ok(CaseStatus::Found(summary)) => {
                self.sessions.clear(&session.user_id).await;
                Response::with_options(format_status(&summary), follow_up_menu())
            }
            Ok(CaseStatus::NotFound) => {
                self.sessions.clear(&session.user_id).await;
                Response::text(&templates.status_not_found)
            }
            Err(err) => {
                tracing::error!(ticket_id = %ticket_id, error = %err, "status lookup failed");
                self.sessions.put(session).await;
                Response::text(&templates.apology)
            }
        }
    }
}

fn format_status(summary: &StatusSummary) -> String {
    format!(
        "📊 COMPLAINT STATUS\n\n\
         🎫 Ticket: {}\n\
         📌 Status: {}\n\
         📅 Filed On: {}\n\
         👮 Assigned To: {}\n\
         🕐 Last Update: {}",
        summary.ticket_id, summary.status, summary.filed_on, summary.assigned_to, summary.last_update,
    )
}
