use crate::network::ScoreType;
use serde::{Deserialize, Serialize};
use structdoc::StructDoc;

// ----------------------------------------------------------------------------
// View State
// ----------------------------------------------------------------------------

/// The user-facing view selection, passed down the pipeline explicitly.
///
/// Every update function is pure and returns the next state; there is no
/// process-wide store. A changed state means the whole layout is recomputed
/// from scratch, so stale positions can never leak between selections.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, StructDoc)]
#[serde(default)]
pub struct ViewState {
    /// Restrict interactions to one score channel; `None` keeps all.
    pub score_type: Option<ScoreType>,
    /// Minimum interaction weight, in [0, 1].
    pub threshold: f64,
    /// Keep proteins pulled in by ortholog enrichment.
    pub include_orthologs: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState { score_type: None, threshold: 0.0, include_orthologs: true }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select one score channel, or `None` for all.
    pub fn with_score_type(self, score_type: Option<ScoreType>) -> Self {
        ViewState { score_type, ..self }
    }

    /// Set the minimum interaction weight, clamped into [0, 1].
    pub fn with_threshold(self, threshold: f64) -> Self {
        ViewState { threshold: threshold.clamp(0.0, 1.0), ..self }
    }

    /// Toggle ortholog-enriched proteins.
    pub fn with_orthologs(self, include_orthologs: bool) -> Self {
        ViewState { include_orthologs, ..self }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
