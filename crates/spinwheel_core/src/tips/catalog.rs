//! Built-in tip catalog, loaded once per process.
//!
//! # Responsibility
//! - Own the general, onshore and offshore tip tables.
//! - Select the table for a wizard work context.
//!
//! # Invariants
//! - The catalog is validated on first access; later accesses never re-validate.
//! - A failed validation is returned to every caller, never masked.

use crate::model::category::WorkContext;
use crate::tips::data::{GENERAL_TIPS, OFFSHORE_TIPS, ONSHORE_TIPS};
use crate::tips::matrix::{TipMatrix, TipMatrixError};
use log::{error, info};
use once_cell::sync::OnceCell;

static BUILTIN_CATALOG: OnceCell<TipCatalog> = OnceCell::new();

/// Tip tables keyed by work context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCatalog {
    general: TipMatrix,
    onshore: TipMatrix,
    offshore: TipMatrix,
}

impl TipCatalog {
    pub fn new(general: TipMatrix, onshore: TipMatrix, offshore: TipMatrix) -> Self {
        Self {
            general,
            onshore,
            offshore,
        }
    }

    /// Builds the catalog from the compiled-in tables.
    pub fn builtin() -> Result<Self, TipMatrixError> {
        Ok(Self::new(
            TipMatrix::from_rows("general", &GENERAL_TIPS)?,
            TipMatrix::from_rows("onshore", &ONSHORE_TIPS)?,
            TipMatrix::from_rows("offshore", &OFFSHORE_TIPS)?,
        ))
    }

    /// Table used when no work context was chosen.
    pub fn general(&self) -> &TipMatrix {
        &self.general
    }

    pub fn for_context(&self, context: Option<WorkContext>) -> &TipMatrix {
        match context {
            None => &self.general,
            Some(WorkContext::Onshore) => &self.onshore,
            Some(WorkContext::Offshore) => &self.offshore,
        }
    }
}

/// Returns the process-wide built-in catalog, validating it on first use.
///
/// # Errors
/// - Returns the first table error when a built-in table is incomplete.
pub fn tip_catalog() -> Result<&'static TipCatalog, TipMatrixError> {
    BUILTIN_CATALOG
        .get_or_try_init(|| {
            let catalog = TipCatalog::builtin().inspect_err(|err| {
                error!("event=tips_load module=tips status=error error={err}");
            })?;
            info!(
                "event=tips_load module=tips status=ok tables=3 entries_per_table={}",
                catalog.general.len()
            );
            Ok(catalog)
        })
}

#[cfg(test)]
mod tests {
    use super::{tip_catalog, TipCatalog};
    use crate::model::category::{Category, WorkContext};

    #[test]
    fn builtin_catalog_loads_and_is_shared() {
        let first = tip_catalog().expect("builtin catalog");
        let second = tip_catalog().expect("builtin catalog");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn for_context_selects_matching_table() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.for_context(None).name(), "general");
        assert_eq!(catalog.for_context(Some(WorkContext::Onshore)).name(), "onshore");
        assert_eq!(
            catalog.for_context(Some(WorkContext::Offshore)).name(),
            "offshore"
        );
    }

    #[test]
    fn general_table_keeps_known_texts() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        assert_eq!(
            catalog.general().tip(Category::Nutrition, Category::Nutrition),
            "Consistent, balanced eating supports every system in your body."
        );
        assert!(catalog
            .for_context(Some(WorkContext::Offshore))
            .tip(Category::Sleep, Category::Sleep)
            .contains("blackout curtains"));
    }
}
