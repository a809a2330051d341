//! Mock Weight Solver for testing.
//!
//! Returns queued verdicts in order, optionally after a delay, and records
//! every request it receives.
//!
//! # Example
//!
//! ```ignore
//! let solver = MockWeightSolver::new()
//!     .with_response(SolverResponse::inconsistent(0.46, "CR too high"))
//!     .with_error(SolverError::timeout(30));
//!
//! let first = solver.solve(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ItemWeight, SolverError, SolverRequest, SolverResponse, WeightSolver};

/// Queue-driven solver double.
///
/// When the queue is empty it answers with a consistent verdict that
/// gives every item of the request equal weight.
#[derive(Debug, Clone, Default)]
pub struct MockWeightSolver {
    responses: Arc<Mutex<VecDeque<Result<SolverResponse, SolverError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<SolverRequest>>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockWeightSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a verdict.
    pub fn with_response(self, response: SolverResponse) -> Self {
        locked(&self.responses).push_back(Ok(response));
        self
    }

    /// Queues a transport failure.
    pub fn with_error(self, error: SolverError) -> Self {
        locked(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<SolverRequest> {
        locked(&self.calls).clone()
    }

    fn equal_weights(request: &SolverRequest) -> SolverResponse {
        let mut items: Vec<String> = Vec::new();
        for comparison in &request.comparisons {
            for item in [&comparison.item_a, &comparison.item_b] {
                if !items.contains(item) {
                    items.push(item.clone());
                }
            }
        }
        let share = if items.is_empty() {
            0.0
        } else {
            1.0 / items.len() as f64
        };
        SolverResponse::consistent(
            items
                .into_iter()
                .map(|item| ItemWeight::new(item, share))
                .collect(),
            0.0,
        )
    }
}

#[async_trait]
impl WeightSolver for MockWeightSolver {
    async fn solve(&self, request: SolverRequest) -> Result<SolverResponse, SolverError> {
        let queued = locked(&self.responses).pop_front();
        let fallback = Self::equal_weights(&request);
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        queued.unwrap_or(Ok(fallback))
    }
}
