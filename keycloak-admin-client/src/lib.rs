/*!
# Keycloak Admin Client

Async client for the federation-related parts of the Keycloak admin REST API,
laid out along hexagonal architecture lines.

This crate provides:
- Services for user storage components, identity provider instances and
  authentication flow executions
- Port definitions for the HTTP transport and the bearer token store
- A `reqwest` transport adapter and an in-memory token store

## Architecture

```text
┌─────────────────────────────────────────────────────────────┐
│                  KeycloakAdminClient                        │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                Application Layer                            │
├─────────────────────────────────────────────────────────────┤
│  • UserStorageService       • IdentityProviderService       │
│  • AuthenticationFlowService                                │
│            (all through AdminExchange)                      │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                        Ports                                │
├─────────────────────────────────────────────────────────────┤
│  • AdminTransport           • TokenStore                    │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│              Infrastructure Layer (Adapters)                │
├─────────────────────────────────────────────────────────────┤
│  • ReqwestTransport         • InMemoryTokenStore            │
└─────────────────────────────────────────────────────────────┘
```

Every operation sends one request (create sends two: the POST and a read-back
of the created resource) and succeeds only on its exact expected status. Any
other status yields [`AdminError::RemoteApi`] carrying the server's body as-is;
failures below HTTP yield [`AdminError::Transport`].

## Usage

```rust,no_run
use keycloak_admin_client::{
    ClientConfig, InMemoryTokenStore, KeycloakAdminClient, QueryParams, UserStorageComponent,
};
use std::sync::Arc;

# async fn run() -> keycloak_admin_client::AdminResult<()> {
let tokens = Arc::new(InMemoryTokenStore::new("eyJhbGciOi..."));
let client = KeycloakAdminClient::new(&ClientConfig::from_env()?, tokens.clone())?;

let ldap = UserStorageComponent::new("corporate-ldap", "ldap", "acme")
    .with_config("connectionUrl", "ldap://ldap.acme.internal");
let created = client.user_storage().create("acme", &ldap).await?;

let id = created.id.as_deref().unwrap_or_default();
let result = client.user_storage().trigger_full_sync("acme", id).await?;
println!("imported {} users", result.added);

// Token refreshed elsewhere: the next request picks it up.
tokens.set_access_token("eyJhbGciOi...new").await;
let all = client.user_storage().find("acme", &QueryParams::new()).await?;
# Ok(())
# }
```
*/

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use client::KeycloakAdminClient;
pub use domain::entities::*;
pub use domain::errors::*;
pub use infrastructure::adapters::{InMemoryTokenStore, ReqwestTransport};
