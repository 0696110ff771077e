use super::exchange::{paths, require_key, to_body, AdminExchange, NO_CONTENT, OK};
use crate::{
    application::ports::{AdminRequest, AdminTransport},
    domain::{entities::*, errors::AdminResult},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// User storage component management (LDAP/Kerberos federation providers)
#[derive(Debug, Clone)]
pub struct UserStorageService {
    exchange: AdminExchange,
}

impl UserStorageService {
    pub fn new(transport: Arc<dyn AdminTransport>) -> Self {
        Self {
            exchange: AdminExchange::new(transport),
        }
    }

    /// List the realm's user storage components.
    ///
    /// `params` is appended after the fixed `parent`/`type` filter.
    #[instrument(skip(self, params), fields(realm = %realm))]
    pub async fn find(
        &self,
        realm: &str,
        params: &QueryParams,
    ) -> AdminResult<Vec<UserStorageComponent>> {
        let mut query = QueryParams::new()
            .with("parent", realm)
            .with("type", USER_STORAGE_PROVIDER_TYPE);
        query.extend(params);

        let components: Vec<UserStorageComponent> = self
            .exchange
            .expect_json(AdminRequest::get(paths::components(realm)).with_query(query), OK)
            .await?;

        debug!("Found {} user storage components", components.len());
        Ok(components)
    }

    /// Get one component by id
    #[instrument(skip(self), fields(realm = %realm, id = %id))]
    pub async fn find_one(&self, realm: &str, id: &str) -> AdminResult<UserStorageComponent> {
        self.exchange
            .expect_json(AdminRequest::get(paths::component(realm, id)), OK)
            .await
    }

    /// Single-resource lookup when `options.id` is set, collection query otherwise
    pub async fn lookup(
        &self,
        realm: &str,
        options: &FindOptions,
    ) -> AdminResult<Found<UserStorageComponent>> {
        match options.id.as_deref() {
            Some(id) => self.find_one(realm, id).await.map(Found::One),
            None => self.find(realm, &options.params).await.map(Found::Many),
        }
    }

    /// Create a component and return the server's representation of it
    #[instrument(skip(self, component), fields(realm = %realm))]
    pub async fn create(
        &self,
        realm: &str,
        component: &UserStorageComponent,
    ) -> AdminResult<UserStorageComponent> {
        info!(
            "Creating user storage component '{}'",
            component.name.as_deref().unwrap_or_default()
        );

        let request = AdminRequest::post(paths::components(realm), to_body(component)?);
        let id = self.exchange.expect_created(request).await?;

        info!("Created user storage component with ID '{}'", id);
        self.find_one(realm, &id).await
    }

    /// Replace a component. Its `id` addresses the endpoint.
    #[instrument(skip(self, component), fields(realm = %realm))]
    pub async fn update(&self, realm: &str, component: &UserStorageComponent) -> AdminResult<Value> {
        let id = require_key(component.id.as_deref(), "id")?;
        info!("Updating user storage component '{}'", id);

        let request = AdminRequest::put(paths::component(realm, id), to_body(component)?);
        self.exchange.expect_body(request, NO_CONTENT).await
    }

    #[instrument(skip(self), fields(realm = %realm, id = %id))]
    pub async fn remove(&self, realm: &str, id: &str) -> AdminResult<Value> {
        info!("Removing user storage component '{}'", id);
        self.exchange
            .expect_body(AdminRequest::delete(paths::component(realm, id)), NO_CONTENT)
            .await
    }

    /// Import users changed since the last synchronization
    pub async fn trigger_changed_users_sync(
        &self,
        realm: &str,
        id: &str,
    ) -> AdminResult<SynchronizationResult> {
        self.sync(realm, id, SyncAction::ChangedUsers).await
    }

    /// Import every user from the provider
    pub async fn trigger_full_sync(
        &self,
        realm: &str,
        id: &str,
    ) -> AdminResult<SynchronizationResult> {
        self.sync(realm, id, SyncAction::Full).await
    }

    #[instrument(skip(self), fields(realm = %realm, id = %id, action = %action))]
    pub async fn sync(
        &self,
        realm: &str,
        id: &str,
        action: SyncAction,
    ) -> AdminResult<SynchronizationResult> {
        info!("Triggering user storage synchronization");

        let query = QueryParams::new().with("action", action.as_str());
        let request =
            AdminRequest::get(paths::user_storage_action(realm, id, "sync")).with_query(query);
        let result: SynchronizationResult = self.exchange.expect_json(request, OK).await?;

        info!(
            "Synchronization finished: {} added, {} updated, {} removed, {} failed",
            result.added, result.updated, result.removed, result.failed
        );
        Ok(result)
    }

    /// Delete every user imported from this provider
    #[instrument(skip(self), fields(realm = %realm, id = %id))]
    pub async fn remove_imported_users(&self, realm: &str, id: &str) -> AdminResult<Value> {
        info!("Removing users imported by user storage component '{}'", id);
        self.exchange
            .expect_body(
                AdminRequest::get(paths::user_storage_action(realm, id, "remove-imported-users")),
                OK,
            )
            .await
    }

    /// Detach imported users from this provider, keeping them as local users
    #[instrument(skip(self), fields(realm = %realm, id = %id))]
    pub async fn unlink_imported_users(&self, realm: &str, id: &str) -> AdminResult<Value> {
        info!("Unlinking users imported by user storage component '{}'", id);
        self.exchange
            .expect_body(
                AdminRequest::get(paths::user_storage_action(realm, id, "unlink-users")),
                OK,
            )
            .await
    }
}
