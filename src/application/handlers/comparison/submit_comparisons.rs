//! SubmitComparisonsHandler - Runs the submission pipeline against the solver.
//!
//! Sends the completed matrix exactly once and applies the verdict. Three
//! entry points cover the ways a caller may hold the session:
//!
//! - `handle` borrows the session for the whole round trip
//! - `handle_abortable` does the same, but can be aborted; the pending
//!   attempt is then cancelled and its result never applied
//! - `handle_shared` only locks the session to begin and to complete, so it
//!   can be cancelled or reset in between; a late result is then stale

use std::sync::Arc;

use futures::future::{AbortRegistration, Abortable};
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::session::{
    ComparisonSession, SessionError, SubmissionFailure, SubmissionStatus, WeightHandoff,
};
use crate::ports::WeightSolver;

/// Outcome of one submission round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitComparisonsResult {
    pub status: SubmissionStatus,
    /// Present on success.
    pub handoff: Option<WeightHandoff>,
    /// Present on failure.
    pub failure: Option<SubmissionFailure>,
}

impl SubmitComparisonsResult {
    fn from_session(session: &ComparisonSession) -> Self {
        Self {
            status: session.status(),
            handoff: session.handoff(),
            failure: session.last_failure().cloned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}

/// Handler for submitting a completed session.
pub struct SubmitComparisonsHandler {
    solver: Arc<dyn WeightSolver>,
}

impl SubmitComparisonsHandler {
    pub fn new(solver: Arc<dyn WeightSolver>) -> Self {
        Self { solver }
    }

    /// Submits and waits for the verdict.
    ///
    /// Remote failures are not errors here: they leave the session in
    /// `Failure` and come back in the result.
    ///
    /// # Errors
    ///
    /// Whatever `begin_submission` rejects (incomplete matrix, already
    /// processing, locked).
    pub async fn handle(
        &self,
        session: &mut ComparisonSession,
    ) -> Result<SubmitComparisonsResult, SessionError> {
        let ticket = session.begin_submission()?;
        let result = self.solver.solve(ticket.request).await;
        session.complete_submission(ticket.id, result)?;
        Ok(SubmitComparisonsResult::from_session(session))
    }

    /// Like `handle`, but stops waiting when `registration` is aborted.
    ///
    /// # Errors
    ///
    /// `Cancelled` after an abort; the session is back in `Idle`.
    pub async fn handle_abortable(
        &self,
        session: &mut ComparisonSession,
        registration: AbortRegistration,
    ) -> Result<SubmitComparisonsResult, SessionError> {
        let ticket = session.begin_submission()?;
        let solve = Abortable::new(self.solver.solve(ticket.request), registration);
        match solve.await {
            Ok(result) => {
                session.complete_submission(ticket.id, result)?;
                Ok(SubmitComparisonsResult::from_session(session))
            }
            Err(_aborted) => {
                warn!(session_id = %session.id(), "Submission aborted while waiting for solver");
                session.cancel_submission()?;
                Err(SessionError::Cancelled)
            }
        }
    }

    /// Submits a session shared behind a lock, without holding the lock
    /// while the solver works.
    ///
    /// # Errors
    ///
    /// `StaleSubmission` if the attempt was cancelled while in flight.
    pub async fn handle_shared(
        &self,
        session: Arc<Mutex<ComparisonSession>>,
    ) -> Result<SubmitComparisonsResult, SessionError> {
        let ticket = session.lock().await.begin_submission()?;
        let result = self.solver.solve(ticket.request).await;

        let mut guard = session.lock().await;
        guard.complete_submission(ticket.id, result)?;
        Ok(SubmitComparisonsResult::from_session(&guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use futures::future::AbortHandle;

    use crate::adapters::solver::MockWeightSolver;
    use crate::domain::comparison::ItemSet;
    use crate::domain::session::{DecisionContext, FailureKind};
    use crate::ports::{ItemWeight, SolverError, SolverResponse};

    fn complete_session() -> ComparisonSession {
        let items = ItemSet::from_labels(["Price", "Battery", "Display"]).unwrap();
        let mut session = ComparisonSession::for_criteria(items, DecisionContext::new());
        for i in 0..3 {
            session.jump_to(i).unwrap();
            let favored = session.current_pair().unwrap().item_a.id.clone();
            session.record_judgment("2", &favored).unwrap();
        }
        session
    }

    #[tokio::test]
    async fn success_produces_handoff() {
        let solver = MockWeightSolver::new().with_response(SolverResponse::consistent(
            vec![
                ItemWeight::new("Price", 0.5),
                ItemWeight::new("Battery", 0.3),
                ItemWeight::new("Display", 0.2),
            ],
            0.02,
        ));
        let handler = SubmitComparisonsHandler::new(Arc::new(solver.clone()));
        let mut session = complete_session();

        let result = handler.handle(&mut session).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.handoff.unwrap().weight_of("Battery"), Some(0.3));
        assert_eq!(solver.call_count(), 1);
        assert_eq!(solver.get_calls()[0].comparisons.len(), 3);
    }

    #[tokio::test]
    async fn transport_failure_is_reported_not_raised() {
        let solver = MockWeightSolver::new().with_error(SolverError::network("refused"));
        let handler = SubmitComparisonsHandler::new(Arc::new(solver));
        let mut session = complete_session();

        let result = handler.handle(&mut session).await.unwrap();

        assert_eq!(result.status, SubmissionStatus::Failure);
        assert_eq!(result.failure.unwrap().kind, FailureKind::Transport);
    }

    #[tokio::test]
    async fn incomplete_session_never_reaches_solver() {
        let solver = MockWeightSolver::new();
        let handler = SubmitComparisonsHandler::new(Arc::new(solver.clone()));
        let items = ItemSet::from_labels(["A", "B"]).unwrap();
        let mut session = ComparisonSession::for_criteria(items, DecisionContext::new());

        let err = handler.handle(&mut session).await.unwrap_err();

        assert!(matches!(err, SessionError::IncompleteMatrix { .. }));
        assert_eq!(solver.call_count(), 0);
    }

    #[tokio::test]
    async fn abort_cancels_pending_submission() {
        let solver = MockWeightSolver::new().with_delay(Duration::from_secs(60));
        let handler = SubmitComparisonsHandler::new(Arc::new(solver));
        let mut session = complete_session();

        let (abort, registration) = AbortHandle::new_pair();
        abort.abort();
        let err = handler
            .handle_abortable(&mut session, registration)
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Cancelled);
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(session.pending_submission().is_none());
    }

    #[tokio::test]
    async fn shared_session_discards_result_after_cancel() {
        let solver = MockWeightSolver::new().with_delay(Duration::from_millis(50));
        let handler = SubmitComparisonsHandler::new(Arc::new(solver));
        let session = Arc::new(Mutex::new(complete_session()));

        let task = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { handler.handle_shared(session).await })
        };
        // wait until the submission is in flight, then walk away from it
        loop {
            if session.lock().await.status() == SubmissionStatus::Processing {
                break;
            }
            tokio::task::yield_now().await;
        }
        session.lock().await.cancel_submission().unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, SessionError::StaleSubmission(_)));
        assert_eq!(session.lock().await.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn shared_session_applies_result() {
        let handler = SubmitComparisonsHandler::new(Arc::new(MockWeightSolver::new()));
        let session = Arc::new(Mutex::new(complete_session()));

        let result = handler.handle_shared(Arc::clone(&session)).await.unwrap();

        assert!(result.is_success());
        assert_eq!(session.lock().await.status(), SubmissionStatus::Success);
    }
}
