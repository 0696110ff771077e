use async_trait::async_trait;
use keycloak_admin_client::{AdminError, AdminRequest, AdminResponse, AdminResult, AdminTransport};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock transport: records every request and replays scripted responses in order
#[derive(Clone, Default)]
pub struct MockAdminTransport {
    pub requests: Arc<Mutex<Vec<AdminRequest>>>,
    pub responses: Arc<Mutex<VecDeque<AdminResponse>>>,
    pub should_fail: Arc<Mutex<bool>>, // For testing transport failures
}

#[allow(dead_code)]
impl MockAdminTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(AdminResponse::new(status, body));
        self
    }

    pub fn respond_created(&self, location: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(AdminResponse::new(201, Value::Null).with_location(location));
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn recorded(&self) -> Vec<AdminRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> AdminRequest {
        self.recorded()
            .pop()
            .expect("at least one request should have been sent")
    }

    pub fn arc(&self) -> Arc<dyn AdminTransport> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl AdminTransport for MockAdminTransport {
    async fn execute(&self, request: AdminRequest) -> AdminResult<AdminResponse> {
        self.requests.lock().unwrap().push(request);

        if *self.should_fail.lock().unwrap() {
            return Err(AdminError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock connection refused",
            )));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for request"))
    }
}
