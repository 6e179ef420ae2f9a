//! Store Info Model

use serde::{Deserialize, Serialize};

/// Store identity block (receipt header)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
    pub website: Option<String>,
}

impl StoreInfo {
    /// Built-in identity used when the configuration store has none.
    pub fn fallback() -> Self {
        Self {
            name: "Kasir Mart".to_string(),
            address: "Jl. Merdeka No. 12, Jakarta".to_string(),
            phone: "(021) 555-0123".to_string(),
            email: None,
            website: None,
        }
    }
}
