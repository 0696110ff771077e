use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::TokenStore;
use crate::domain::errors::AdminResult;

/// Per-client token holder. The owner swaps the token when it is refreshed;
/// requests only ever read it.
pub struct InMemoryTokenStore {
    access_token: RwLock<String>,
}

impl InMemoryTokenStore {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: RwLock::new(access_token.into()),
        }
    }

    /// Replace the token used by every subsequent request
    pub async fn set_access_token(&self, access_token: impl Into<String>) {
        *self.access_token.write().await = access_token.into();
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn access_token(&self) -> AdminResult<String> {
        Ok(self.access_token.read().await.clone())
    }
}

impl std::fmt::Debug for InMemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTokenStore")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rotation_is_visible_to_readers() {
        let store = InMemoryTokenStore::new("first");
        assert_eq!(store.access_token().await.unwrap(), "first");

        store.set_access_token("second").await;
        assert_eq!(store.access_token().await.unwrap(), "second");
    }

    #[test]
    fn debug_redacts_token() {
        let store = InMemoryTokenStore::new("super-secret");
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
