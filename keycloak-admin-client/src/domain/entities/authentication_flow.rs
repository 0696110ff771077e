use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One step of an authentication flow's ordered execution list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_flow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirement_choices: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthenticationExecution {
    /// Copy of this execution with a different requirement (`REQUIRED`, `ALTERNATIVE`, ...)
    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    pub fn allows_requirement(&self, requirement: &str) -> bool {
        self.requirement_choices.iter().any(|choice| choice == requirement)
    }
}
