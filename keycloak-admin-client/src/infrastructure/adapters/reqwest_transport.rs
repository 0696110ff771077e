use async_trait::async_trait;
use reqwest::header::{ACCEPT, LOCATION};
use std::sync::Arc;
use tracing::debug;

use crate::application::ports::*;
use crate::domain::errors::*;

/// `reqwest`-backed transport for the Keycloak admin REST API
#[derive(Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> AdminResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.get_timeout())
            .connect_timeout(config.get_connect_timeout())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AdminError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self::new_with_client(
            config.normalized_base_url().to_string(),
            tokens,
            client,
        ))
    }

    pub fn new_with_client(
        base_url: String,
        tokens: Arc<dyn TokenStore>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl AdminTransport for ReqwestTransport {
    async fn execute(&self, request: AdminRequest) -> AdminResult<AdminResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let token = self.tokens.access_token().await?;

        let mut builder = self
            .client
            .request(Self::method(request.method), &url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        debug!(
            "{} {} completed with status {} ({} bytes)",
            request.method,
            url,
            status,
            bytes.len()
        );

        Ok(AdminResponse {
            status,
            location,
            body: decode_body(&bytes),
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
