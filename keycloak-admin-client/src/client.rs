use std::sync::Arc;

use crate::application::ports::{AdminTransport, ClientConfig, TokenStore};
use crate::application::services::{
    AuthenticationFlowService, IdentityProviderService, UserStorageService,
};
use crate::domain::errors::AdminResult;
use crate::infrastructure::adapters::ReqwestTransport;

/// Entry point bundling the admin services over one shared transport.
///
/// Cloning is cheap; clones share the transport and therefore the token store.
#[derive(Debug, Clone)]
pub struct KeycloakAdminClient {
    user_storage: UserStorageService,
    identity_providers: IdentityProviderService,
    authentication_flows: AuthenticationFlowService,
}

impl KeycloakAdminClient {
    /// Client talking HTTP to `config.base_url`, authenticating with whatever
    /// token `tokens` holds at the time of each request
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> AdminResult<Self> {
        let transport = ReqwestTransport::new(config, tokens)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn AdminTransport>) -> Self {
        Self {
            user_storage: UserStorageService::new(transport.clone()),
            identity_providers: IdentityProviderService::new(transport.clone()),
            authentication_flows: AuthenticationFlowService::new(transport),
        }
    }

    pub fn user_storage(&self) -> &UserStorageService {
        &self.user_storage
    }

    pub fn identity_providers(&self) -> &IdentityProviderService {
        &self.identity_providers
    }

    pub fn authentication_flows(&self) -> &AuthenticationFlowService {
        &self.authentication_flows
    }
}
