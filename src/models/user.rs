// Account models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanAccount {
    pub username: String,
    pub password_field: String,
    pub uid: i64,
    pub gid: i64,
    /// GECOS segments; `None` (omitted from JSON) when the field holds no non-empty segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Vec<String>>,
    pub home_directory: String,
    pub default_shell: String,
}
