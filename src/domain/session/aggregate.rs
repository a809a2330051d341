//! ComparisonSession aggregate - one pairwise comparison run.
//!
//! Owns the item set, one comparison matrix and cursor per dimension, the
//! evaluation mode, and the submission pipeline state. All mutation is
//! synchronous; the only suspend point is between `begin_submission` and
//! `complete_submission`, during which judgments are frozen.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::{
    DecisionContext, EvaluationMode, FailureKind, SessionError, SubmissionFailure,
    SubmissionStatus, WeightHandoff,
};
use crate::domain::comparison::{
    Advance, ComparisonMatrix, ComparisonPair, ItemId, ItemSet, JudgmentValue, TraversalCursor,
};
use crate::domain::foundation::{Percentage, SessionId, StateMachine, SubmissionId, Timestamp};
use crate::domain::suggest::{AutoSuggest, Dimension, ProductSpecs};
use crate::ports::{
    ItemWeight, SolverError, SolverRequest, SolverResponse, WireComparison, CONSISTENCY_THRESHOLD,
};

/// Dimension name used by single-matrix criteria sessions.
pub const CRITERIA_DIMENSION: &str = "criteria";

/// The matrix and cursor for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionState {
    name: String,
    matrix: ComparisonMatrix,
    cursor: TraversalCursor,
}

impl DimensionState {
    fn new(name: impl Into<String>, items: ItemSet) -> Self {
        let matrix = ComparisonMatrix::new(items);
        let cursor = TraversalCursor::for_matrix(&matrix);
        Self {
            name: name.into(),
            matrix,
            cursor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matrix(&self) -> &ComparisonMatrix {
        &self.matrix
    }

    pub fn cursor(&self) -> &TraversalCursor {
        &self.cursor
    }

    fn reset(&mut self) {
        self.matrix.clear();
        self.cursor.reset();
    }
}

/// Handed out by `begin_submission`; the id must come back with the result.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub id: SubmissionId,
    pub request: SolverRequest,
}

#[derive(Debug, Clone, PartialEq)]
struct SolvedWeights {
    weights: Vec<ItemWeight>,
    consistency_ratio: f64,
    solved_at: Timestamp,
}

/// A pairwise comparison session.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    id: SessionId,
    items: ItemSet,
    context: DecisionContext,
    mode: EvaluationMode,
    dimensions: Vec<DimensionState>,
    active: usize,
    products: Vec<ProductSpecs>,
    status: SubmissionStatus,
    pending: Option<SubmissionId>,
    last_failure: Option<SubmissionFailure>,
    solved: Option<SolvedWeights>,
    created_at: Timestamp,
}

impl ComparisonSession {
    /// Starts a session that ranks abstract criteria against each other.
    pub fn for_criteria(items: ItemSet, context: DecisionContext) -> Self {
        let dimensions = vec![DimensionState::new(CRITERIA_DIMENSION, items.clone())];
        Self::assemble(items, context, dimensions, Vec::new())
    }

    /// Starts a session that compares products once per dimension.
    ///
    /// # Errors
    ///
    /// - `Comparison` if the products do not form a valid item set
    /// - `NoDimensions` if `dimensions` is empty
    /// - `InvalidState` if a dimension is listed twice
    pub fn for_products<S: AsRef<str>>(
        products: Vec<ProductSpecs>,
        dimensions: &[S],
        context: DecisionContext,
    ) -> Result<Self, SessionError> {
        let items = ItemSet::new(products.iter().map(ProductSpecs::to_item).collect())?;
        if dimensions.is_empty() {
            return Err(SessionError::NoDimensions);
        }
        let mut states: Vec<DimensionState> = Vec::with_capacity(dimensions.len());
        for name in dimensions {
            let name = name.as_ref();
            if states.iter().any(|d| d.name == name) {
                return Err(SessionError::invalid_state(format!(
                    "dimension '{}' listed twice",
                    name
                )));
            }
            states.push(DimensionState::new(name, items.clone()));
        }
        Ok(Self::assemble(items, context, states, products))
    }

    fn assemble(
        items: ItemSet,
        context: DecisionContext,
        dimensions: Vec<DimensionState>,
        products: Vec<ProductSpecs>,
    ) -> Self {
        let session = Self {
            id: SessionId::new(),
            items,
            context,
            mode: EvaluationMode::Manual,
            dimensions,
            active: 0,
            products,
            status: SubmissionStatus::Idle,
            pending: None,
            last_failure: None,
            solved: None,
            created_at: Timestamp::now(),
        };
        debug!(
            session_id = %session.id,
            items = session.items.len(),
            dimensions = session.dimensions.len(),
            "Comparison session started"
        );
        session
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn context(&self) -> &DecisionContext {
        &self.context
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn dimensions(&self) -> &[DimensionState] {
        &self.dimensions
    }

    pub fn active_dimension(&self) -> &DimensionState {
        &self.dimensions[self.active]
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Result<&DimensionState, SessionError> {
        self.dimensions
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| SessionError::UnknownDimension(name.to_string()))
    }

    /// The pair under the active dimension's cursor.
    pub fn current_pair(&self) -> Option<&ComparisonPair> {
        let dim = self.active_dimension();
        dim.matrix.pair(dim.cursor.position()).ok()
    }

    /// Details of the most recent failed submission, cleared on reset.
    pub fn last_failure(&self) -> Option<&SubmissionFailure> {
        self.last_failure.as_ref()
    }

    /// The submission the session is waiting on, if any.
    pub fn pending_submission(&self) -> Option<SubmissionId> {
        self.pending
    }

    /// Combined progress over every dimension.
    pub fn progress(&self) -> Percentage {
        let decided = self
            .dimensions
            .iter()
            .map(|d| d.matrix.decided_count())
            .sum();
        let total = self.dimensions.iter().map(|d| d.matrix.total_pairs()).sum();
        Percentage::of(decided, total)
    }

    pub fn is_complete(&self) -> bool {
        self.dimensions.iter().all(|d| d.matrix.is_complete())
    }

    fn has_any_judgment(&self) -> bool {
        self.dimensions.iter().any(|d| d.matrix.decided_count() > 0)
    }

    // ───────────────────────────────────────────────────────────────
    // Judgments
    // ───────────────────────────────────────────────────────────────

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.status {
            SubmissionStatus::Processing => Err(SessionError::SubmissionInProgress),
            SubmissionStatus::Success => Err(SessionError::Locked),
            SubmissionStatus::Idle | SubmissionStatus::Failure => Ok(()),
        }
    }

    /// Parses `raw` and records it for the current pair.
    ///
    /// Returns `true` if the pair was undecided before.
    ///
    /// # Errors
    ///
    /// - `Comparison(Value(..))` for input the codec rejects; nothing changes
    /// - `SubmissionInProgress` or `Locked` while judgments are frozen
    pub fn record_judgment(&mut self, raw: &str, favored: &ItemId) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let value = JudgmentValue::parse(raw)?;
        self.record_value(value, favored)
    }

    /// Records an already-parsed value for the current pair.
    pub fn record_value(
        &mut self,
        value: JudgmentValue,
        favored: &ItemId,
    ) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let dim = &mut self.dimensions[self.active];
        let index = dim.cursor.position();
        Ok(dim.matrix.set_judgment(index, value, favored)?)
    }

    /// Marks the current pair as equally important.
    pub fn record_neutral(&mut self) -> Result<bool, SessionError> {
        let favored = self
            .current_pair()
            .map(|pair| pair.item_a.id.clone())
            .ok_or_else(|| SessionError::invalid_state("no current pair"))?;
        self.record_value(JudgmentValue::neutral(), &favored)
    }

    /// Overwrites any pair of the active dimension, without moving the cursor.
    pub fn edit_judgment(
        &mut self,
        pair_index: usize,
        raw: &str,
        favored: &ItemId,
    ) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        let value = JudgmentValue::parse(raw)?;
        let dim = &mut self.dimensions[self.active];
        Ok(dim.matrix.set_judgment(pair_index, value, favored)?)
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves to the next pair of the active dimension.
    ///
    /// # Errors
    ///
    /// `Comparison(IncompleteJudgment)` if the current pair is undecided.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let dim = &mut self.dimensions[self.active];
        Ok(dim.cursor.advance(&dim.matrix)?)
    }

    pub fn retreat(&mut self) -> usize {
        self.dimensions[self.active].cursor.retreat()
    }

    pub fn jump_to(&mut self, pair_index: usize) -> Result<usize, SessionError> {
        Ok(self.dimensions[self.active].cursor.jump_to(pair_index)?)
    }

    /// Moves to the next undecided pair of the active dimension.
    pub fn seek_next_undecided(&mut self) -> Option<usize> {
        let dim = &mut self.dimensions[self.active];
        dim.cursor.seek_next_undecided(&dim.matrix)
    }

    /// Makes `name` the active dimension.
    pub fn select_dimension(&mut self, name: &str) -> Result<(), SessionError> {
        let index = self
            .dimensions
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| SessionError::UnknownDimension(name.to_string()))?;
        self.active = index;
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Mode and auto-suggest
    // ───────────────────────────────────────────────────────────────

    /// Changes the evaluation mode, clearing every judgment.
    ///
    /// # Errors
    ///
    /// `ModeSwitchNeedsConfirmation` when leaving manual mode with
    /// judgments recorded and `confirmed` is false.
    pub fn switch_mode(
        &mut self,
        mode: EvaluationMode,
        confirmed: bool,
    ) -> Result<(), SessionError> {
        self.ensure_editable()?;
        if mode == self.mode {
            return Ok(());
        }
        if self.mode == EvaluationMode::Manual
            && mode == EvaluationMode::Auto
            && self.has_any_judgment()
            && !confirmed
        {
            return Err(SessionError::ModeSwitchNeedsConfirmation);
        }
        self.dimensions.iter_mut().for_each(DimensionState::reset);
        self.active = 0;
        info!(session_id = %self.id, from = %self.mode, to = %mode, "Evaluation mode switched");
        self.mode = mode;
        Ok(())
    }

    /// Replaces the active dimension's judgments with suggestions, then
    /// moves on to the next dimension if there is one.
    ///
    /// # Errors
    ///
    /// `Suggest` if the dimension has no scoring rule or a product lacks specs.
    pub fn suggest_active(&mut self, suggest: &AutoSuggest) -> Result<(), SessionError> {
        self.ensure_editable()?;
        let dim = &mut self.dimensions[self.active];
        let dimension = Dimension::from_str(&dim.name)?;
        suggest.fill(&mut dim.matrix, dimension, &self.products)?;
        dim.cursor.reset();
        debug!(session_id = %self.id, dimension = %dimension, "Dimension auto-filled");
        if self.active + 1 < self.dimensions.len() {
            self.active += 1;
        }
        Ok(())
    }

    /// Fills every dimension from product specs. Requires auto mode.
    ///
    /// Every dimension is filled on a copy first, so a failure on any of
    /// them leaves all matrices as they were.
    pub fn auto_fill(&mut self, suggest: &AutoSuggest) -> Result<(), SessionError> {
        self.ensure_editable()?;
        if self.mode != EvaluationMode::Auto {
            return Err(SessionError::invalid_state("auto fill requires auto mode"));
        }
        let parsed = self
            .dimensions
            .iter()
            .map(|d| Dimension::from_str(&d.name))
            .collect::<Result<Vec<_>, _>>()?;
        let mut filled = Vec::with_capacity(self.dimensions.len());
        for (dim, dimension) in self.dimensions.iter().zip(parsed) {
            let mut matrix = dim.matrix.clone();
            suggest.fill(&mut matrix, dimension, &self.products)?;
            filled.push(matrix);
        }
        for (dim, matrix) in self.dimensions.iter_mut().zip(filled) {
            dim.matrix = matrix;
            dim.cursor.reset();
        }
        info!(session_id = %self.id, dimensions = self.dimensions.len(), "Session auto-filled");
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Submission
    // ───────────────────────────────────────────────────────────────

    /// Freezes the matrices and builds the solver request.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` if a submission is already pending
    /// - `Locked` after a successful submission
    /// - `InvalidState` after a failure that has not been reset
    /// - `IncompleteMatrix` naming the first dimension with undecided pairs
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SessionError> {
        match self.status {
            SubmissionStatus::Processing => return Err(SessionError::SubmissionInProgress),
            SubmissionStatus::Success => return Err(SessionError::Locked),
            SubmissionStatus::Failure => {
                return Err(SessionError::invalid_state(
                    "reset the failed submission before resubmitting",
                ))
            }
            SubmissionStatus::Idle => {}
        }
        if let Some(dim) = self.dimensions.iter().find(|d| !d.matrix.is_complete()) {
            return Err(SessionError::IncompleteMatrix {
                dimension: dim.name.clone(),
                decided: dim.matrix.decided_count(),
                total: dim.matrix.total_pairs(),
            });
        }

        let request = self.build_request();
        self.status = self.status.transition_to(SubmissionStatus::Processing)?;
        let id = SubmissionId::new();
        self.pending = Some(id);
        self.last_failure = None;
        info!(
            session_id = %self.id,
            submission_id = %id,
            comparisons = request.comparisons.len(),
            "Submission started"
        );
        Ok(SubmissionTicket { id, request })
    }

    fn build_request(&self) -> SolverRequest {
        let tag_dimension = self.dimensions.len() > 1;
        let comparisons = self
            .dimensions
            .iter()
            .flat_map(|dim| {
                dim.matrix.entries().filter_map(move |(pair, judgment)| {
                    let judgment = judgment?;
                    let favored = if judgment.favored == pair.item_a.id {
                        &pair.item_a.label
                    } else {
                        &pair.item_b.label
                    };
                    Some(WireComparison {
                        item_a: pair.item_a.label.clone(),
                        item_b: pair.item_b.label.clone(),
                        value: judgment.value,
                        favored: favored.clone(),
                        dimension: tag_dimension.then(|| dim.name.clone()),
                    })
                })
            })
            .collect();
        SolverRequest {
            decision_context: self.context.clone(),
            evaluation_mode: self.mode,
            comparisons,
        }
    }

    /// Applies the solver's verdict for submission `ticket`.
    ///
    /// Transport errors, solver errors, and inconsistent matrices all end
    /// in `Failure`; judgments stay as they were. An inconsistency scoped to
    /// a known dimension makes that dimension active.
    ///
    /// # Errors
    ///
    /// `StaleSubmission` if `ticket` is not the pending submission; the
    /// result is discarded and nothing changes.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionId,
        result: Result<SolverResponse, SolverError>,
    ) -> Result<SubmissionStatus, SessionError> {
        if self.pending != Some(ticket) {
            warn!(session_id = %self.id, submission_id = %ticket, "Discarding stale solver result");
            return Err(SessionError::StaleSubmission(ticket));
        }
        self.pending = None;

        match result {
            Err(err) => {
                error!(session_id = %self.id, error = %err, "Solver request failed");
                self.fail(FailureKind::Transport, err.to_string(), None, None)?;
            }
            Ok(SolverResponse::Error { message }) => {
                error!(session_id = %self.id, message = %message, "Solver reported an error");
                self.fail(FailureKind::Solver, message, None, None)?;
            }
            Ok(SolverResponse::Success { consistency, .. }) if !consistency.is_consistent => {
                warn!(
                    session_id = %self.id,
                    ratio = consistency.ratio,
                    failed_dimension = ?consistency.failed_dimension,
                    "Judgments are inconsistent"
                );
                let message = consistency.message.unwrap_or_else(|| {
                    format!(
                        "Consistency ratio {:.2} is not below {}",
                        consistency.ratio, CONSISTENCY_THRESHOLD
                    )
                });
                if let Some(index) = consistency
                    .failed_dimension
                    .as_deref()
                    .and_then(|name| self.dimensions.iter().position(|d| d.name == name))
                {
                    self.active = index;
                }
                self.fail(
                    FailureKind::Inconsistent,
                    message,
                    consistency.failed_dimension,
                    Some(consistency.ratio),
                )?;
            }
            Ok(SolverResponse::Success {
                weights,
                consistency,
            }) => {
                self.status = self.status.transition_to(SubmissionStatus::Success)?;
                info!(
                    session_id = %self.id,
                    ratio = consistency.ratio,
                    weights = weights.len(),
                    "Submission accepted"
                );
                self.solved = Some(SolvedWeights {
                    weights,
                    consistency_ratio: consistency.ratio,
                    solved_at: Timestamp::now(),
                });
            }
        }
        Ok(self.status)
    }

    fn fail(
        &mut self,
        kind: FailureKind,
        message: String,
        failed_dimension: Option<String>,
        consistency_ratio: Option<f64>,
    ) -> Result<(), SessionError> {
        self.status = self.status.transition_to(SubmissionStatus::Failure)?;
        self.last_failure = Some(SubmissionFailure {
            kind,
            message,
            failed_dimension,
            consistency_ratio,
        });
        Ok(())
    }

    /// Abandons the pending submission; its result will be discarded.
    pub fn cancel_submission(&mut self) -> Result<(), SessionError> {
        if self.status != SubmissionStatus::Processing {
            return Err(SessionError::invalid_state("no submission in progress"));
        }
        self.status = self.status.transition_to(SubmissionStatus::Idle)?;
        if let Some(id) = self.pending.take() {
            warn!(session_id = %self.id, submission_id = %id, "Submission cancelled");
        }
        Ok(())
    }

    /// Leaves `Failure` so the matrix can be corrected and resubmitted.
    pub fn reset_submission(&mut self) -> Result<(), SessionError> {
        if self.status != SubmissionStatus::Failure {
            return Err(SessionError::invalid_state(format!(
                "cannot reset from {:?}",
                self.status
            )));
        }
        self.status = self.status.transition_to(SubmissionStatus::Idle)?;
        self.last_failure = None;
        Ok(())
    }

    /// The weights for the next stage, once a submission has succeeded.
    pub fn handoff(&self) -> Option<WeightHandoff> {
        let solved = self.solved.as_ref()?;
        let weights: BTreeMap<String, f64> = solved
            .weights
            .iter()
            .map(|w| (w.item.clone(), w.weight))
            .collect();
        Some(WeightHandoff {
            session_id: self.id,
            items: self.items.items().to_vec(),
            weights,
            consistency_ratio: solved.consistency_ratio,
            decision_context: self.context.clone(),
            produced_at: solved.solved_at,
        })
    }
}
