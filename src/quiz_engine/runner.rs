//! Timer-driven session runner.
//!
//! [`GameSession`] is a plain state machine; something has to call
//! [`GameSession::advance`] once the post-answer cooldown has elapsed. The
//! runner does that with a task per answer that sleeps for the cooldown and
//! races a [`CancellationToken`], and it reports what happened on a single
//! event channel:
//!
//! ```text
//! submit_answer ──▶ AnswerPlaced ──▶ (cooldown) ──▶ advance ──▶ Finished { score }
//!                                        ▲
//!                        dispose ── cancel ┘
//! ```
//!
//! Must be used from inside a tokio runtime. Dropping the runner disposes it.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::quiz_engine::session::{Advance, GameSession, SessionEvent, SubmitOutcome};

pub struct SessionRunner {
    session: Arc<Mutex<GameSession>>,
    events: mpsc::UnboundedSender<SessionEvent>,
    shutdown: CancellationToken,
    pending: Option<JoinHandle<()>>,
}

fn lock(session: &Mutex<GameSession>) -> MutexGuard<'_, GameSession> {
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SessionRunner {
    /// Wrap `session`; events arrive on the returned receiver.
    pub fn new(session: GameSession) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let runner = Self {
            session: Arc::new(Mutex::new(session)),
            events,
            shutdown: CancellationToken::new(),
            pending: None,
        };
        (runner, rx)
    }

    /// Score an answer and schedule the advance. Ignored submissions schedule nothing.
    pub fn submit_answer(&mut self, selected: &str) -> SubmitOutcome {
        let (outcome, cooldown) = {
            let mut session = lock(&self.session);
            (session.submit_answer(selected), session.cooldown())
        };

        if let SubmitOutcome::Placed(record) = &outcome {
            self.emit(SessionEvent::AnswerPlaced(record.clone()));
            self.schedule_advance(cooldown);
        }
        outcome
    }

    fn schedule_advance(&mut self, cooldown: std::time::Duration) {
        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let shutdown = self.shutdown.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    trace!("pending advance cancelled");
                }
                _ = tokio::time::sleep(cooldown) => {
                    let advance = lock(&session).advance();
                    if let Advance::Finished(score) = advance {
                        if events.send(SessionEvent::Finished { score }).is_err() {
                            debug!("finish event dropped, receiver gone");
                        }
                    }
                }
            }
        }));
    }

    fn emit(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("session event dropped, receiver gone");
        }
    }

    /// Read the session under the lock.
    pub fn with_session<T>(&self, f: impl FnOnce(&GameSession) -> T) -> T {
        f(&lock(&self.session))
    }

    /// Cancel any pending advance and abandon the session. Idempotent.
    pub fn dispose(&mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        lock(&self.session).dispose();
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        self.dispose();
    }
}
