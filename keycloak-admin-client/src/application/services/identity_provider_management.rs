use super::exchange::{paths, require_key, to_body, AdminExchange, NO_CONTENT, OK};
use crate::{
    application::ports::{AdminRequest, AdminTransport},
    domain::{entities::*, errors::AdminResult},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Identity provider instance management
#[derive(Debug, Clone)]
pub struct IdentityProviderService {
    exchange: AdminExchange,
}

impl IdentityProviderService {
    pub fn new(transport: Arc<dyn AdminTransport>) -> Self {
        Self {
            exchange: AdminExchange::new(transport),
        }
    }

    /// List the realm's identity providers
    #[instrument(skip(self, params), fields(realm = %realm))]
    pub async fn find(
        &self,
        realm: &str,
        params: &QueryParams,
    ) -> AdminResult<Vec<IdentityProviderInstance>> {
        let request =
            AdminRequest::get(paths::identity_providers(realm)).with_query(params.clone());
        let providers: Vec<IdentityProviderInstance> =
            self.exchange.expect_json(request, OK).await?;

        debug!("Found {} identity providers", providers.len());
        Ok(providers)
    }

    #[instrument(skip(self), fields(realm = %realm, alias = %alias))]
    pub async fn find_one(&self, realm: &str, alias: &str) -> AdminResult<IdentityProviderInstance> {
        self.exchange
            .expect_json(AdminRequest::get(paths::identity_provider(realm, alias)), OK)
            .await
    }

    /// Single-resource lookup when `options.id` (the alias) is set, collection query otherwise
    pub async fn lookup(
        &self,
        realm: &str,
        options: &FindOptions,
    ) -> AdminResult<Found<IdentityProviderInstance>> {
        match options.id.as_deref() {
            Some(alias) => self.find_one(realm, alias).await.map(Found::One),
            None => self.find(realm, &options.params).await.map(Found::Many),
        }
    }

    /// Create an identity provider and return the server's representation of it
    #[instrument(skip(self, provider), fields(realm = %realm))]
    pub async fn create(
        &self,
        realm: &str,
        provider: &IdentityProviderInstance,
    ) -> AdminResult<IdentityProviderInstance> {
        info!(
            "Creating identity provider '{}'",
            provider.alias.as_deref().unwrap_or_default()
        );

        let request = AdminRequest::post(paths::identity_providers(realm), to_body(provider)?);
        let alias = self.exchange.expect_created(request).await?;

        info!("Created identity provider '{}'", alias);
        self.find_one(realm, &alias).await
    }

    /// Replace an identity provider. Its `alias` addresses the endpoint.
    #[instrument(skip(self, provider), fields(realm = %realm))]
    pub async fn update(
        &self,
        realm: &str,
        provider: &IdentityProviderInstance,
    ) -> AdminResult<Value> {
        let alias = require_key(provider.alias.as_deref(), "alias")?;
        info!("Updating identity provider '{}'", alias);

        let request = AdminRequest::put(paths::identity_provider(realm, alias), to_body(provider)?);
        self.exchange.expect_body(request, NO_CONTENT).await
    }

    #[instrument(skip(self), fields(realm = %realm, alias = %alias))]
    pub async fn remove(&self, realm: &str, alias: &str) -> AdminResult<Value> {
        info!("Removing identity provider '{}'", alias);
        self.exchange
            .expect_body(
                AdminRequest::delete(paths::identity_provider(realm, alias)),
                NO_CONTENT,
            )
            .await
    }

    /// Provider-specific configuration export (SAML descriptor, OIDC settings)
    #[instrument(skip(self), fields(realm = %realm, alias = %alias))]
    pub async fn export_configuration(&self, realm: &str, alias: &str) -> AdminResult<Value> {
        let path = format!("{}/export", paths::identity_provider(realm, alias));
        self.exchange.expect_body(AdminRequest::get(path), OK).await
    }
}
