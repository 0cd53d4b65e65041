//! Controller settings.

use grocer_commerce::browse::PAGE_SIZE;
use grocer_commerce::money::Currency;
use serde::{Deserialize, Serialize};

/// Settings the view controllers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Products revealed per "show more".
    pub page_size: usize,
    /// Currency cart totals are computed in.
    pub currency: Currency,
    /// Restore a cart line locally when its delete call fails.
    pub rollback_on_failure: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            currency: Currency::default(),
            rollback_on_failure: false,
        }
    }
}
