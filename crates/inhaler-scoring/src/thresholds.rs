//! Score bucketing.
//!
//! A threshold table is an ascending list of inclusive upper bounds closed
//! by one unbounded row. The first row whose bound is not below the score
//! wins, so the unbounded row catches everything above the last bound.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaleConfigError};

/// Coarse risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInterpretation {
    pub label: Cow<'static, str>,
    pub band: Band,
}

impl ScoreInterpretation {
    pub const fn new(label: &'static str, band: Band) -> Self {
        Self {
            label: Cow::Borrowed(label),
            band,
        }
    }
}

/// A bounded row: scores `<= upper_bound` map to `interpretation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threshold {
    pub upper_bound: i32,
    pub interpretation: ScoreInterpretation,
}

impl Threshold {
    pub const fn at_most(upper_bound: i32, label: &'static str, band: Band) -> Self {
        Self {
            upper_bound,
            interpretation: ScoreInterpretation::new(label, band),
        }
    }
}

/// Flat form of a table row as written in configuration files.
///
/// A missing `upper_bound` stands for +infinity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<i32>,
    pub label: String,
    pub band: Band,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ThresholdRow>", into = "Vec<ThresholdRow>")]
pub struct ThresholdTable {
    bounded: Cow<'static, [Threshold]>,
    otherwise: ScoreInterpretation,
}

impl ThresholdTable {
    /// Table over compile-time rows. `bounded` must already ascend.
    pub const fn from_static(bounded: &'static [Threshold], otherwise: ScoreInterpretation) -> Self {
        Self {
            bounded: Cow::Borrowed(bounded),
            otherwise,
        }
    }

    /// Validate and build a table from configuration rows.
    pub fn from_rows(rows: Vec<ThresholdRow>) -> Result<Self> {
        let Some((last, rest)) = rows.split_last() else {
            return Err(ScaleConfigError::EmptyThresholds);
        };
        if last.upper_bound.is_some() {
            return Err(ScaleConfigError::MissingUnboundedRow);
        }

        let mut bounded = Vec::with_capacity(rest.len());
        let mut previous: Option<i32> = None;
        for row in rest {
            let Some(bound) = row.upper_bound else {
                return Err(ScaleConfigError::UnboundedRowNotLast);
            };
            if let Some(prev) = previous
                && bound <= prev
            {
                return Err(ScaleConfigError::NotAscending {
                    previous: prev,
                    next: bound,
                });
            }
            previous = Some(bound);
            bounded.push(Threshold {
                upper_bound: bound,
                interpretation: ScoreInterpretation {
                    label: Cow::Owned(row.label.clone()),
                    band: row.band,
                },
            });
        }

        Ok(Self {
            bounded: Cow::Owned(bounded),
            otherwise: ScoreInterpretation {
                label: Cow::Owned(last.label.clone()),
                band: last.band,
            },
        })
    }

    /// First matching row in ascending order.
    pub fn classify(&self, score: i32) -> &ScoreInterpretation {
        self.bounded
            .iter()
            .find(|row| score <= row.upper_bound)
            .map_or(&self.otherwise, |row| &row.interpretation)
    }

    /// Rows in evaluation order, the unbounded one last.
    pub fn rows(&self) -> Vec<ThresholdRow> {
        self.bounded
            .iter()
            .map(|row| ThresholdRow {
                upper_bound: Some(row.upper_bound),
                label: row.interpretation.label.to_string(),
                band: row.interpretation.band,
            })
            .chain(std::iter::once(ThresholdRow {
                upper_bound: None,
                label: self.otherwise.label.to_string(),
                band: self.otherwise.band,
            }))
            .collect()
    }
}

impl TryFrom<Vec<ThresholdRow>> for ThresholdTable {
    type Error = ScaleConfigError;

    fn try_from(rows: Vec<ThresholdRow>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<ThresholdTable> for Vec<ThresholdRow> {
    fn from(table: ThresholdTable) -> Self {
        table.rows()
    }
}
