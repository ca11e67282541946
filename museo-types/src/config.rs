//! Configuration defaults shared by table controllers.

use serde::{Deserialize, Serialize};

/// Page sizes the paginator offers to the user.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[5, 10, 25, 50];

/// Configuration for a table controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of rows fetched per page until the user picks another size.
    pub page_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}
