use crate::{
    application::ports::{AdminRequest, AdminResponse, AdminTransport},
    domain::{
        entities::resource_id_from_location,
        errors::{AdminError, AdminResult},
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub(crate) const OK: u16 = 200;
pub(crate) const CREATED: u16 = 201;
pub(crate) const NO_CONTENT: u16 = 204;

/// Applies the request/response contract shared by every admin operation:
/// send once, compare the status against the single expected value, and hand
/// back the body or the created resource's identifier.
#[derive(Clone)]
pub struct AdminExchange {
    transport: Arc<dyn AdminTransport>,
}

impl AdminExchange {
    pub fn new(transport: Arc<dyn AdminTransport>) -> Self {
        Self { transport }
    }

    /// Send `request` and return the raw response when its status is `expected`
    pub async fn send(&self, request: AdminRequest, expected: u16) -> AdminResult<AdminResponse> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.execute(request).await?;
        if response.status != expected {
            warn!(
                "{} {} returned status {} (expected {})",
                method, path, response.status, expected
            );
            return Err(AdminError::RemoteApi {
                status: response.status,
                body: response.body,
            });
        }

        debug!("{} {} -> {}", method, path, response.status);
        Ok(response)
    }

    /// Send and return the decoded body untyped
    pub async fn expect_body(&self, request: AdminRequest, expected: u16) -> AdminResult<Value> {
        Ok(self.send(request, expected).await?.body)
    }

    /// Send and decode the body into `T`
    pub async fn expect_json<T>(&self, request: AdminRequest, expected: u16) -> AdminResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.expect_body(request, expected).await?;
        serde_json::from_value(body).map_err(|e| AdminError::Serialization {
            message: format!("Unexpected response representation: {e}"),
        })
    }

    /// Send a create request and return the identifier from its `Location` header
    pub async fn expect_created(&self, request: AdminRequest) -> AdminResult<String> {
        let response = self.send(request, CREATED).await?;
        response
            .location
            .as_deref()
            .and_then(resource_id_from_location)
            .ok_or(AdminError::MissingLocation {
                status: response.status,
            })
    }
}

impl std::fmt::Debug for AdminExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminExchange").finish_non_exhaustive()
    }
}

/// Serialize an entity for a request body
pub(crate) fn to_body<T: serde::Serialize>(entity: &T) -> AdminResult<Value> {
    serde_json::to_value(entity).map_err(|e| AdminError::Serialization {
        message: format!("Failed to serialize request body: {e}"),
    })
}

/// Fail before sending anything when an update lacks its key
pub(crate) fn require_key<'a>(key: Option<&'a str>, field: &str) -> AdminResult<&'a str> {
    match key {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AdminError::Validation {
            field: field.to_string(),
            message: format!("{field} is required to address the resource"),
        }),
    }
}

/// Path builders for the admin endpoints. Segments are substituted verbatim.
pub(crate) mod paths {
    pub fn realm(realm: &str) -> String {
        format!("/admin/realms/{realm}")
    }

    pub fn components(realm: &str) -> String {
        format!("{}/components", self::realm(realm))
    }

    pub fn component(realm: &str, id: &str) -> String {
        format!("{}/components/{id}", self::realm(realm))
    }

    pub fn user_storage_action(realm: &str, id: &str, action: &str) -> String {
        format!("{}/user-storage/{id}/{action}", self::realm(realm))
    }

    pub fn identity_providers(realm: &str) -> String {
        format!("{}/identity-provider/instances", self::realm(realm))
    }

    pub fn identity_provider(realm: &str, alias: &str) -> String {
        format!("{}/identity-provider/instances/{alias}", self::realm(realm))
    }

    pub fn flow_executions(realm: &str, flow: &str) -> String {
        format!(
            "{}/authentication/flows/{flow}/executions",
            self::realm(realm)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct Fixed(AdminResponse);

    #[async_trait]
    impl AdminTransport for Fixed {
        async fn execute(&self, _request: AdminRequest) -> AdminResult<AdminResponse> {
            Ok(self.0.clone())
        }
    }

    fn exchange(response: AdminResponse) -> AdminExchange {
        AdminExchange::new(Arc::new(Fixed(response)))
    }

    #[tokio::test]
    async fn mismatched_status_carries_raw_body() {
        let exchange = exchange(AdminResponse::new(400, json!({"error": "invalid"})));

        let err = exchange
            .expect_body(AdminRequest::get("/x"), OK)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.into_body(), Some(json!({"error": "invalid"})));
    }

    #[tokio::test]
    async fn success_statuses_are_exact() {
        let exchange = exchange(AdminResponse::new(200, Value::Null));

        let err = exchange
            .expect_body(AdminRequest::delete("/x"), NO_CONTENT)
            .await
            .unwrap_err();
        assert!(err.is_remote());
    }

    #[tokio::test]
    async fn created_requires_location() {
        let missing = exchange(AdminResponse::new(201, Value::Null));
        let err = missing
            .expect_created(AdminRequest::post("/x", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::MissingLocation { status: 201 }));

        let located = exchange(
            AdminResponse::new(201, Value::Null).with_location("http://h/x/abc-123"),
        );
        let id = located
            .expect_created(AdminRequest::post("/x", json!({})))
            .await
            .unwrap();
        assert_eq!(id, "abc-123");
    }

    #[tokio::test]
    async fn typed_decoding_failure_is_serialization_error() {
        let exchange = exchange(AdminResponse::new(200, json!("not a list")));

        let err = exchange
            .expect_json::<Vec<Value>>(AdminRequest::get("/x"), OK)
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Serialization { .. }));
    }

    #[test]
    fn keys_are_required() {
        assert_eq!(require_key(Some("abc"), "id").unwrap(), "abc");
        assert!(require_key(Some(""), "id").is_err());
        assert!(require_key(None, "alias").is_err());
    }

    #[test]
    fn paths_substitute_verbatim() {
        assert_eq!(
            paths::component("my realm", "abc"),
            "/admin/realms/my realm/components/abc"
        );
        assert_eq!(
            paths::flow_executions("master", "browser"),
            "/admin/realms/master/authentication/flows/browser/executions"
        );
        assert_eq!(
            paths::user_storage_action("master", "id-1", "unlink-users"),
            "/admin/realms/master/user-storage/id-1/unlink-users"
        );
    }
}
