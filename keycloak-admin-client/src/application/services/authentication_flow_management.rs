use super::exchange::{paths, to_body, AdminExchange, NO_CONTENT, OK};
use crate::{
    application::ports::{AdminRequest, AdminTransport},
    domain::{entities::*, errors::AdminResult},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Authentication flow execution management
#[derive(Debug, Clone)]
pub struct AuthenticationFlowService {
    exchange: AdminExchange,
}

impl AuthenticationFlowService {
    pub fn new(transport: Arc<dyn AdminTransport>) -> Self {
        Self {
            exchange: AdminExchange::new(transport),
        }
    }

    /// Ordered executions of `flow`. `params` is passed through untouched.
    #[instrument(skip(self, params), fields(realm = %realm, flow = %flow))]
    pub async fn find(
        &self,
        realm: &str,
        flow: &str,
        params: &QueryParams,
    ) -> AdminResult<Vec<AuthenticationExecution>> {
        let request =
            AdminRequest::get(paths::flow_executions(realm, flow)).with_query(params.clone());
        let executions: Vec<AuthenticationExecution> =
            self.exchange.expect_json(request, OK).await?;

        debug!("Flow has {} executions", executions.len());
        Ok(executions)
    }

    /// Update one execution of `flow` (typically its requirement)
    #[instrument(skip(self, execution), fields(realm = %realm, flow = %flow))]
    pub async fn update(
        &self,
        realm: &str,
        flow: &str,
        execution: &AuthenticationExecution,
    ) -> AdminResult<Value> {
        info!(
            "Updating execution '{}' of flow '{}'",
            execution.id.as_deref().unwrap_or_default(),
            flow
        );

        let request = AdminRequest::put(paths::flow_executions(realm, flow), to_body(execution)?);
        self.exchange.expect_body(request, NO_CONTENT).await
    }
}
