// Installed software models

use serde::{Deserialize, Serialize};

/// One installed package from the package manager's status database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwarePackage {
    pub name: String,
    pub version: String,
    pub architecture: String,
    pub description: String,
}
