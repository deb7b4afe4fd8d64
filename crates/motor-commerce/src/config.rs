//! Store configuration.

use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Settings a session runs with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency listing prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_name() -> String {
    "MotorPro".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: Currency::default(),
        }
    }
}
