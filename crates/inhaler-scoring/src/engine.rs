//! The generic evaluator shared by every scale.

use serde::Serialize;

use crate::criteria::Criterion;
use crate::selection::ScoreSelection;
use crate::thresholds::{ScoreInterpretation, ThresholdTable};

/// Plain weighted sum of the selected criteria.
///
/// Unselected criteria and selection entries that name no criterion add
/// nothing. Each criterion contributes its signed `points` as is. The sum
/// saturates at the `i32` range; validated scales never reach it.
pub fn compute_score(criteria: &[Criterion], selection: &ScoreSelection) -> i32 {
    criteria
        .iter()
        .filter(|criterion| selection.is_selected(&criterion.id))
        .fold(0i32, |total, criterion| total.saturating_add(criterion.points))
}

/// Bucket `score` with `table`.
pub fn interpret(score: i32, table: &ThresholdTable) -> ScoreInterpretation {
    table.classify(score).clone()
}

/// Score and interpretation for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: i32,
    pub interpretation: ScoreInterpretation,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRITERIA: &[Criterion] = &[
        Criterion::new("a", "A", 1),
        Criterion::new("b", "B", 2),
        // Flagged negative but worth positive points: the flag must not flip it.
        Criterion::negative("c", "C", 3),
    ];

    #[test]
    fn sums_selected_points() {
        let selection = ScoreSelection::from_toggles(["a", "b"]);
        assert_eq!(compute_score(CRITERIA, &selection), 3);
    }

    #[test]
    fn negative_flag_does_not_change_sign() {
        let selection = ScoreSelection::from_toggles(["c"]);
        assert_eq!(compute_score(CRITERIA, &selection), 3);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let selection = ScoreSelection::from_toggles(["a", "gone"]);
        assert_eq!(compute_score(CRITERIA, &selection), 1);
    }

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        const HUGE: &[Criterion] = &[
            Criterion::new("max", "Max", i32::MAX),
            Criterion::new("one", "One", 1),
        ];
        let selection = ScoreSelection::from_toggles(["max", "one"]);
        assert_eq!(compute_score(HUGE, &selection), i32::MAX);
    }

    #[test]
    fn empty_selection_scores_zero() {
        assert_eq!(compute_score(CRITERIA, &ScoreSelection::new()), 0);
    }
}
