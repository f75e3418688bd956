use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One weighted item of a scale.
///
/// `is_negative` is a presentation hint only. The sign of the contribution
/// is carried by `points` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub points: i32,
    #[serde(default)]
    pub is_negative: bool,
}

impl Criterion {
    pub const fn new(id: &'static str, label: &'static str, points: i32) -> Self {
        Self {
            id: Cow::Borrowed(id),
            label: Cow::Borrowed(label),
            points,
            is_negative: false,
        }
    }

    /// A criterion rendered with negative styling.
    pub const fn negative(id: &'static str, label: &'static str, points: i32) -> Self {
        Self {
            id: Cow::Borrowed(id),
            label: Cow::Borrowed(label),
            points,
            is_negative: true,
        }
    }

    /// Points as shown next to the label: `+1`, `0`, `-2`.
    pub fn points_label(&self) -> String {
        if self.points > 0 {
            format!("+{}", self.points)
        } else {
            self.points.to_string()
        }
    }
}
