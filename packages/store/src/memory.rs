use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::backup;
use crate::cloud::{CloudAccount, CloudSync};
use crate::models::User;

#[derive(Debug)]
struct CloudState {
    account: Option<CloudAccount>,
    snapshot: Option<String>,
    last_sync: Option<DateTime<Utc>>,
    online: bool,
    pushes: u32,
}

impl Default for CloudState {
    fn default() -> Self {
        Self {
            account: None,
            snapshot: None,
            last_sync: None,
            online: true,
            pushes: 0,
        }
    }
}

/// In-process [`CloudSync`] for tests and for shells without a remote.
///
/// Snapshots are stored in the same JSON format as local backups. Clones share
/// state.
#[derive(Clone, Debug, Default)]
pub struct MemoryCloud {
    state: Arc<Mutex<CloudState>>,
}

impl MemoryCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing or regaining connectivity. Offline pushes and pulls fail.
    pub fn set_online(&self, online: bool) {
        self.state().online = online;
    }

    pub fn is_online(&self) -> bool {
        self.state().online
    }

    /// Number of push attempts that reached the store.
    pub fn push_count(&self) -> u32 {
        self.state().pushes
    }

    fn state(&self) -> MutexGuard<'_, CloudState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CloudSync for MemoryCloud {
    fn account(&self) -> Option<CloudAccount> {
        self.state().account.clone()
    }

    fn sign_in(&self, account: CloudAccount) {
        tracing::info!("cloud: signed in as {}", account.name);
        self.state().account = Some(account);
    }

    fn sign_out(&self) {
        let mut state = self.state();
        state.account = None;
        state.last_sync = None;
    }

    fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.state().last_sync
    }

    async fn push(&self, user: &User) -> bool {
        let mut state = self.state();
        state.pushes += 1;
        if !state.online || state.account.is_none() {
            tracing::warn!("cloud: push refused (online: {}, signed in: {})", state.online, state.account.is_some());
            return false;
        }
        let now = Utc::now();
        match backup::export(user, now) {
            Ok(snapshot) => {
                state.snapshot = Some(snapshot);
                state.last_sync = Some(now);
                true
            }
            Err(e) => {
                tracing::error!("cloud: could not encode snapshot: {e}");
                false
            }
        }
    }

    async fn pull(&self) -> Option<User> {
        let state = self.state();
        if !state.online || state.account.is_none() {
            return None;
        }
        let snapshot = state.snapshot.as_deref()?;
        match backup::import(snapshot) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::error!("cloud: stored snapshot is unreadable: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    fn account() -> CloudAccount {
        CloudAccount {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            picture: None,
        }
    }

    #[tokio::test]
    async fn test_push_then_pull() {
        let cloud = MemoryCloud::new();
        let user = User::new("user_1", "Sara", Profile::default());

        // Not signed in yet
        assert!(!cloud.push(&user).await);
        assert!(cloud.pull().await.is_none());

        cloud.sign_in(account());
        assert!(cloud.push(&user).await);
        assert!(cloud.last_sync().is_some());
        assert_eq!(cloud.pull().await, Some(user));
        assert_eq!(cloud.push_count(), 2);
    }

    #[tokio::test]
    async fn test_offline_push_fails() {
        let cloud = MemoryCloud::new();
        cloud.sign_in(account());
        cloud.set_online(false);
        let user = User::new("user_1", "Sara", Profile::default());
        assert!(!cloud.push(&user).await);
        assert!(cloud.last_sync().is_none());
    }

    #[tokio::test]
    async fn test_pull_without_snapshot() {
        let cloud = MemoryCloud::new();
        cloud.sign_in(account());
        assert!(cloud.pull().await.is_none());
    }

    #[test]
    fn test_sign_out_clears_account() {
        let cloud = MemoryCloud::new();
        let shared = cloud.clone();
        cloud.sign_in(account());
        assert_eq!(shared.account(), Some(account()));
        shared.sign_out();
        assert!(cloud.account().is_none());
    }
}
