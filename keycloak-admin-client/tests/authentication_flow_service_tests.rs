use keycloak_admin_client::{
    AuthenticationExecution, AuthenticationFlowService, HttpMethod, QueryParams,
};
use serde_json::{json, Value};

mod mocks;
use mocks::MockAdminTransport;

fn browser_executions() -> Value {
    json!([
        {
            "id": "e-cookie",
            "requirement": "ALTERNATIVE",
            "displayName": "Cookie",
            "requirementChoices": ["REQUIRED", "ALTERNATIVE", "DISABLED"],
            "configurable": false,
            "providerId": "auth-cookie",
            "level": 0,
            "index": 0
        },
        {
            "id": "e-forms",
            "requirement": "ALTERNATIVE",
            "displayName": "forms",
            "requirementChoices": ["REQUIRED", "ALTERNATIVE", "DISABLED", "CONDITIONAL"],
            "configurable": false,
            "authenticationFlow": true,
            "flowId": "f-forms",
            "level": 0,
            "index": 1
        }
    ])
}

#[tokio::test]
async fn test_find_returns_ordered_executions() {
    let transport = MockAdminTransport::new();
    transport.respond(200, browser_executions());

    let executions = AuthenticationFlowService::new(transport.arc())
        .find("acme", "browser", &QueryParams::new())
        .await
        .unwrap();

    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].provider_id.as_deref(), Some("auth-cookie"));
    assert_eq!(executions[1].authentication_flow, Some(true));
    assert_eq!(executions[1].index, Some(1));

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.path,
        "/admin/realms/acme/authentication/flows/browser/executions"
    );
}

#[tokio::test]
async fn test_find_passes_options_through() {
    let transport = MockAdminTransport::new();
    transport.respond(200, json!([]));

    let params = QueryParams::new().with("anything", "goes").with("anything", "twice");
    AuthenticationFlowService::new(transport.arc())
        .find("acme", "first broker login", &params)
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.query, params);
    assert_eq!(
        request.path,
        "/admin/realms/acme/authentication/flows/first broker login/executions"
    );
}

#[tokio::test]
async fn test_update_puts_execution_to_flow() {
    let transport = MockAdminTransport::new();
    transport.respond(204, Value::Null);

    let execution = AuthenticationExecution {
        id: Some("e-cookie".to_string()),
        provider_id: Some("auth-cookie".to_string()),
        ..Default::default()
    }
    .with_requirement("DISABLED");

    let body = AuthenticationFlowService::new(transport.arc())
        .update("acme", "browser", &execution)
        .await
        .unwrap();

    assert_eq!(body, Value::Null);
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(
        request.path,
        "/admin/realms/acme/authentication/flows/browser/executions"
    );
    assert_eq!(
        request.body,
        Some(json!({"id": "e-cookie", "providerId": "auth-cookie", "requirement": "DISABLED"}))
    );
}

#[tokio::test]
async fn test_update_rejects_non_204() {
    let transport = MockAdminTransport::new();
    transport
        .respond(200, json!({"ok": true}))
        .respond(400, json!({"error": "invalid"}));
    let service = AuthenticationFlowService::new(transport.arc());
    let execution = AuthenticationExecution::default();

    let err = service.update("acme", "browser", &execution).await.unwrap_err();
    assert_eq!(err.into_body(), Some(json!({"ok": true})));

    let err = service.update("acme", "browser", &execution).await.unwrap_err();
    assert_eq!(err.into_body(), Some(json!({"error": "invalid"})));
}
