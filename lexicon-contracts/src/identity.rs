use async_trait::async_trait;
use lexicon_model::Identity;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("sign-in was cancelled by the user")]
    Cancelled,
    #[error("sign-in provider is not configured: {0}")]
    NotConfigured(String),
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Source of authentication state.
///
/// Changes are delivered in order through a `watch` channel, at most once per
/// actual sign-in or sign-out. `sign_in`/`sign_out` are triggers for the
/// surrounding UI; the engine itself only subscribes.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;

    fn current(&self) -> Option<Identity> {
        self.subscribe().borrow().clone()
    }

    async fn sign_in(&self) -> Result<Identity, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}
