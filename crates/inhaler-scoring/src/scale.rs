use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::criteria::Criterion;
use crate::engine::{ScoreResult, compute_score, interpret};
use crate::error::{Result, ScaleConfigError};
use crate::selection::ScoreSelection;
use crate::thresholds::ThresholdTable;
use crate::wells;

/// A complete scale: criteria plus the table that interprets their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub criteria: Cow<'static, [Criterion]>,
    pub thresholds: ThresholdTable,
}

impl Scale {
    pub const fn from_static(
        id: &'static str,
        name: &'static str,
        criteria: &'static [Criterion],
        thresholds: ThresholdTable,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            criteria: Cow::Borrowed(criteria),
            thresholds,
        }
    }

    /// Built-in scale with data, if `id` names one.
    pub fn builtin(id: &str) -> Option<&'static Scale> {
        match id {
            wells::ID => Some(&wells::SCALE),
            _ => None,
        }
    }

    /// Check invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.criteria.is_empty() {
            return Err(ScaleConfigError::NoCriteria {
                scale: self.id.to_string(),
            });
        }
        let mut seen = BTreeSet::new();
        for criterion in self.criteria.iter() {
            if !seen.insert(&*criterion.id) {
                return Err(ScaleConfigError::DuplicateCriterion {
                    scale: self.id.to_string(),
                    id: criterion.id.to_string(),
                });
            }
        }
        let reach: i64 = self
            .criteria
            .iter()
            .map(|criterion| i64::from(criterion.points).abs())
            .sum();
        if reach > i64::from(i32::MAX) {
            return Err(ScaleConfigError::PointsOverflow {
                scale: self.id.to_string(),
            });
        }
        Ok(())
    }

    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }

    pub fn score(&self, selection: &ScoreSelection) -> i32 {
        compute_score(&self.criteria, selection)
    }

    pub fn evaluate(&self, selection: &ScoreSelection) -> ScoreResult {
        let score = self.score(selection);
        let interpretation = interpret(score, &self.thresholds);
        debug!(
            scale = %self.id,
            score,
            band = %interpretation.band,
            "evaluated scale"
        );
        ScoreResult {
            score,
            interpretation,
        }
    }
}
