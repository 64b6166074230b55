//! Immutable two-key tip lookup.
//!
//! # Responsibility
//! - Map `(chosen, landed)` category pairs to advice text.
//! - Reject incomplete or ambiguous tables at construction time.
//!
//! # Invariants
//! - A constructed `TipMatrix` has exactly `Category::COUNT²` non-empty entries.
//! - Entries are never mutated after construction.

use crate::model::category::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tip table construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipMatrixError {
    MissingEntry {
        table: String,
        chosen: Category,
        landed: Category,
    },
    EmptyEntry {
        table: String,
        chosen: Category,
        landed: Category,
    },
    DuplicateEntry {
        table: String,
        chosen: Category,
        landed: Category,
    },
}

impl Display for TipMatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEntry {
                table,
                chosen,
                landed,
            } => write!(f, "tip table `{table}` has no entry for ({chosen}, {landed})"),
            Self::EmptyEntry {
                table,
                chosen,
                landed,
            } => write!(f, "tip table `{table}` has an empty entry for ({chosen}, {landed})"),
            Self::DuplicateEntry {
                table,
                chosen,
                landed,
            } => write!(
                f,
                "tip table `{table}` defines ({chosen}, {landed}) more than once"
            ),
        }
    }
}

impl Error for TipMatrixError {}

/// Complete `(chosen, landed) -> tip` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipMatrix {
    name: String,
    entries: Vec<String>,
}

impl TipMatrix {
    /// Builds a table from loose `(chosen, landed, tip)` triples.
    ///
    /// # Errors
    /// - `DuplicateEntry` when a pair appears twice.
    /// - `EmptyEntry` when a tip is blank after trimming.
    /// - `MissingEntry` for the first uncovered pair, in wheel order.
    pub fn from_entries<I, T>(name: impl Into<String>, entries: I) -> Result<Self, TipMatrixError>
    where
        I: IntoIterator<Item = (Category, Category, T)>,
        T: Into<String>,
    {
        let name = name.into();
        let mut slots: Vec<Option<String>> = vec![None; Category::COUNT * Category::COUNT];

        for (chosen, landed, tip) in entries {
            let tip = tip.into();
            if tip.trim().is_empty() {
                return Err(TipMatrixError::EmptyEntry {
                    table: name,
                    chosen,
                    landed,
                });
            }
            let slot = &mut slots[slot_index(chosen, landed)];
            if slot.is_some() {
                return Err(TipMatrixError::DuplicateEntry {
                    table: name,
                    chosen,
                    landed,
                });
            }
            *slot = Some(tip);
        }

        let mut filled = Vec::with_capacity(slots.len());
        for chosen in Category::ALL {
            for landed in Category::ALL {
                match slots[slot_index(chosen, landed)].take() {
                    Some(tip) => filled.push(tip),
                    None => {
                        return Err(TipMatrixError::MissingEntry {
                            table: name,
                            chosen,
                            landed,
                        })
                    }
                }
            }
        }

        Ok(Self {
            name,
            entries: filled,
        })
    }

    /// Builds a table from rows indexed by chosen, then landed, in wheel order.
    pub fn from_rows(
        name: impl Into<String>,
        rows: &[[&str; Category::COUNT]; Category::COUNT],
    ) -> Result<Self, TipMatrixError> {
        let triples = Category::ALL.into_iter().flat_map(|chosen| {
            Category::ALL
                .into_iter()
                .map(move |landed| (chosen, landed, rows[chosen.index()][landed.index()]))
        });
        Self::from_entries(name, triples)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tip for `(chosen, landed)`. Total by construction.
    pub fn tip(&self, chosen: Category, landed: Category) -> &str {
        &self.entries[slot_index(chosen, landed)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn slot_index(chosen: Category, landed: Category) -> usize {
    chosen.index() * Category::COUNT + landed.index()
}
