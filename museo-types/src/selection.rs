//! Selection summary types.

use serde::{Deserialize, Serialize};

/// Derived tri-state summary of the selection, scoped to the currently
/// displayed page.
///
/// The indicator reflects page-visible coverage only: a selection spanning
/// other pages does not mark the indicator `All` unless it also covers every
/// visible record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SelectAllState {
    /// Nothing is selected.
    #[default]
    None,
    /// Every record on the visible page is selected.
    All,
    /// Some, but not all, visible records are selected, or the selection
    /// lies entirely outside the visible page.
    Partial,
}
