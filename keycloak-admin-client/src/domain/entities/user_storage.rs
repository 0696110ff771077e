use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Provider type shared by every user storage component
pub const USER_STORAGE_PROVIDER_TYPE: &str = "org.keycloak.storage.UserStorageProvider";

/// A user storage provider registered as a realm component (LDAP, Kerberos, custom SPI)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStorageComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, Vec<String>>,
    /// Attributes the server returns that are not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserStorageComponent {
    /// New component for `realm`, ready to be posted
    pub fn new(name: impl Into<String>, provider_id: impl Into<String>, realm: &str) -> Self {
        Self {
            name: Some(name.into()),
            provider_id: Some(provider_id.into()),
            provider_type: Some(USER_STORAGE_PROVIDER_TYPE.to_string()),
            parent_id: Some(realm.to_string()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a single-valued config entry, replacing any previous values
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), vec![value.into()]);
        self
    }

    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.config.get(key)?.first().map(String::as_str)
    }
}

/// Summary returned by a synchronization trigger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynchronizationResult {
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub added: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub removed: i64,
    #[serde(default)]
    pub failed: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `action` query value of the user storage sync endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    ChangedUsers,
    Full,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::ChangedUsers => "triggerChangedUsersSync",
            SyncAction::Full => "triggerFullSync",
        }
    }
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
