//! Run Draw use case
//!
//! Loads the roster through the [`RosterSource`] port, runs the allocator and
//! derives the reporting summary. The outcome is an explicit value owned by
//! the caller; nothing is stashed in process-wide state between runs.

use crate::ports::notifier::{DrawNotifier, NoNotifier};
use crate::ports::roster_source::{RosterSource, RosterSourceError};
use chrono::{DateTime, Utc};
use draw_domain::{allocate, AllocationResult, DomainError, DrawSummary, QuotaSet, Roster};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a draw
#[derive(Error, Debug)]
pub enum RunDrawError {
    #[error("No quotas configured")]
    NoQuotas,

    #[error(transparent)]
    Roster(#[from] RosterSourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunDraw use case
#[derive(Debug, Clone)]
pub struct RunDrawInput {
    /// Seats per category for each of the two groups
    pub quotas: QuotaSet,
}

impl RunDrawInput {
    pub fn new(quotas: QuotaSet) -> Self {
        Self { quotas }
    }
}

/// Everything a single draw produced, owned by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The roster the draw ran over, as loaded
    pub roster: Roster,
    /// The closed partition into group1/group2/unassigned
    pub result: AllocationResult,
    /// Per-group/per-category counts for reporting
    pub summary: DrawSummary,
    /// When the draw happened
    pub drawn_at: DateTime<Utc>,
}

/// Use case for running one draw
pub struct RunDrawUseCase<S: RosterSource> {
    source: Arc<S>,
}

impl<S: RosterSource> RunDrawUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case without narration
    pub fn execute<R: Rng + ?Sized>(
        &self,
        input: RunDrawInput,
        rng: &mut R,
    ) -> Result<DrawOutcome, RunDrawError> {
        self.execute_with_notifier(input, rng, &NoNotifier)
    }

    /// Execute the use case with phase callbacks
    pub fn execute_with_notifier<R: Rng + ?Sized>(
        &self,
        input: RunDrawInput,
        rng: &mut R,
        notifier: &dyn DrawNotifier,
    ) -> Result<DrawOutcome, RunDrawError> {
        if input.quotas.is_empty() {
            return Err(RunDrawError::NoQuotas);
        }

        let roster = self.source.load()?;
        info!("Loaded roster with {} people", roster.len());
        notifier.on_roster_loaded(&roster);

        for (category, quota) in input.quotas.iter() {
            debug!(
                "Category {}: {} available, {} seats",
                category,
                roster.count(category),
                quota.total()
            );
        }

        let result = allocate(&roster, &input.quotas, rng)?;
        let summary = DrawSummary::from_result(&roster, &result);
        info!(
            "Draw complete: {} in group1, {} in group2, {} unassigned",
            summary.group1_total, summary.group2_total, summary.unassigned_total
        );
        notifier.on_draw_complete(&summary);

        Ok(DrawOutcome {
            roster,
            result,
            summary,
            drawn_at: Utc::now(),
        })
    }
}
