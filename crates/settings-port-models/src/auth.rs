use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    /// Credentials for the configured backend. Omitted entirely from exports
    /// that exclude sensitive data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    pub backend_url: Option<String>,
    pub proxy_set: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub profile: Profile,
    pub session_id: String,
    pub user_id: String,
    pub token: String,
    pub seed: String,
    pub device_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub color_a: String,
    pub color_b: String,
    pub icon: String,
}
