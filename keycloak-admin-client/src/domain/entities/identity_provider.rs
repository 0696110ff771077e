use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An external authentication source bound to a realm, keyed by alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_token: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_broker_login_flow_alias: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityProviderInstance {
    pub fn new(alias: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            provider_id: Some(provider_id.into()),
            enabled: Some(true),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_camel_case() {
        let idp = IdentityProviderInstance::new("github", "github")
            .with_display_name("GitHub")
            .with_config("clientId", "abc");

        let value = serde_json::to_value(&idp).unwrap();
        assert_eq!(
            value,
            json!({
                "alias": "github",
                "providerId": "github",
                "displayName": "GitHub",
                "enabled": true,
                "config": {"clientId": "abc"}
            })
        );
    }

    #[test]
    fn keeps_unmodelled_fields() {
        let idp: IdentityProviderInstance = serde_json::from_value(json!({
            "alias": "saml-idp",
            "providerId": "saml",
            "linkOnly": false,
            "addReadTokenRoleOnCreate": true
        }))
        .unwrap();

        assert_eq!(idp.alias.as_deref(), Some("saml-idp"));
        assert_eq!(idp.extra.get("linkOnly"), Some(&json!(false)));
        assert_eq!(idp.extra.len(), 2);
    }
}
