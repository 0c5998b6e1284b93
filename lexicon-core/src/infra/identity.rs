use async_trait::async_trait;
use lexicon_contracts::{IdentityError, IdentityProvider};
use lexicon_model::Identity;
use tokio::sync::watch;
use tracing::info;

/// Identity provider driven by the host process.
///
/// `sign_in` announces the configured account; hosts that already know the
/// user (the CLI's `--user` flag, tests) call [`LocalIdentityProvider::set`].
/// Re-announcing the current identity does not notify subscribers.
#[derive(Debug)]
pub struct LocalIdentityProvider {
    account: Option<Identity>,
    sender: watch::Sender<Option<Identity>>,
}

impl LocalIdentityProvider {
    pub fn new(account: Option<Identity>) -> Self {
        let (sender, _) = watch::channel(None);
        Self { account, sender }
    }

    /// Provider that starts signed in as `identity`.
    pub fn signed_in(identity: Identity) -> Self {
        let (sender, _) = watch::channel(Some(identity.clone()));
        Self {
            account: Some(identity),
            sender,
        }
    }

    /// Announce `identity`; returns whether subscribers were notified.
    pub fn set(&self, identity: Option<Identity>) -> bool {
        self.sender.send_if_modified(|current| {
            let changed = current.as_ref().map(|i| &i.id)
                != identity.as_ref().map(|i| &i.id);
            if changed {
                *current = identity;
            }
            changed
        })
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }

    async fn sign_in(&self) -> Result<Identity, IdentityError> {
        let account = self.account.clone().ok_or_else(|| {
            IdentityError::NotConfigured("no local account".to_owned())
        })?;
        info!(user = %account.id, "signed in");
        self.set(Some(account.clone()));
        Ok(account)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        if self.set(None) {
            info!("signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repeated_identity_does_not_notify() {
        let provider = LocalIdentityProvider::new(Some(Identity::new("alice")));
        let mut rx = provider.subscribe();
        assert!(rx.borrow_and_update().is_none());

        provider.sign_in().await.expect("sign in");
        assert!(rx.has_changed().expect("open"));
        rx.borrow_and_update();

        assert!(!provider.set(Some(Identity::new("alice"))));
        assert!(!rx.has_changed().expect("open"));

        provider.sign_out().await.expect("sign out");
        assert!(rx.has_changed().expect("open"));
        assert!(provider.current().is_none());
    }

    #[tokio::test]
    async fn sign_in_without_account_fails() {
        let provider = LocalIdentityProvider::new(None);
        let err = provider.sign_in().await.expect_err("no account");
        assert!(matches!(err, IdentityError::NotConfigured(_)));
    }
}
