//! Wellness category and work context model.
//!
//! # Responsibility
//! - Define the fixed, ordered category set painted on the wheel.
//! - Define the work context chosen during onboarding.
//!
//! # Invariants
//! - `Category::ALL` order is the wheel slice order; slice `i` is `ALL[i]`.
//! - Labels are stable and round-trip through `Category::from_label`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One wellness category, associated with exactly one wheel slice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Sleep,
    Stress,
    Energy,
    Focus,
    Fitness,
    Nutrition,
}

impl Category {
    /// All categories in wheel order.
    pub const ALL: [Category; 6] = [
        Category::Sleep,
        Category::Stress,
        Category::Energy,
        Category::Focus,
        Category::Fitness,
        Category::Nutrition,
    ];

    /// Number of wheel slices.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the slice index of this category.
    pub fn index(self) -> usize {
        match self {
            Self::Sleep => 0,
            Self::Stress => 1,
            Self::Energy => 2,
            Self::Focus => 3,
            Self::Fitness => 4,
            Self::Nutrition => 5,
        }
    }

    /// Returns the category painted on slice `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label shown on the wheel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Stress => "Stress",
            Self::Energy => "Energy",
            Self::Focus => "Focus",
            Self::Fitness => "Fitness",
            Self::Nutrition => "Nutrition",
        }
    }

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    pub fn from_label(value: &str) -> Result<Self, ParseLabelError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseLabelError::UnknownCategory(normalized.to_string()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the user currently works; selects which tip table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkContext {
    Onshore,
    Offshore,
}

impl WorkContext {
    pub const ALL: [WorkContext; 2] = [WorkContext::Onshore, WorkContext::Offshore];

    pub fn label(self) -> &'static str {
        match self {
            Self::Onshore => "Onshore",
            Self::Offshore => "Offshore",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, ParseLabelError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|context| context.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseLabelError::UnknownContext(normalized.to_string()))
    }
}

impl Display for WorkContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label parsing errors for host-provided strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLabelError {
    UnknownCategory(String),
    UnknownContext(String),
}

impl Display for ParseLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(value) => write!(f, "unknown category: `{value}`"),
            Self::UnknownContext(value) => {
                write!(f, "unknown work context: `{value}`; expected onshore|offshore")
            }
        }
    }
}

impl Error for ParseLabelError {}

#[cfg(test)]
mod tests {
    use super::{Category, ParseLabelError, WorkContext};

    #[test]
    fn index_matches_wheel_order() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), position);
            assert_eq!(Category::from_index(position), Some(category));
        }
        assert_eq!(Category::from_index(Category::COUNT), None);
    }

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(Category::from_label(" energy "), Ok(Category::Energy));
        assert_eq!(WorkContext::from_label("OFFSHORE"), Ok(WorkContext::Offshore));
    }

    #[test]
    fn from_label_rejects_unknown_values() {
        let err = Category::from_label("hydration").expect_err("unknown label must fail");
        assert_eq!(err, ParseLabelError::UnknownCategory("hydration".to_string()));
    }
}
