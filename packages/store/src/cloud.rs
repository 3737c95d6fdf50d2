//! # Cloud sync seam
//!
//! The settings screen talks to cloud storage only through [`CloudSync`]: push
//! a snapshot of the user, pull one back, and report the signed-in account.
//! Both async methods resolve to plain success values; the screen turns them
//! into a modal and never retries.
//!
//! The only implementation shipped here is [`crate::MemoryCloud`], which keeps
//! the snapshot in process.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// The account shown in the Drive card once signed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudAccount {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Async interface to remote backup storage.
pub trait CloudSync {
    fn account(&self) -> Option<CloudAccount>;
    fn sign_in(&self, account: CloudAccount);
    fn sign_out(&self);
    /// When the last successful push finished.
    fn last_sync(&self) -> Option<DateTime<Utc>>;
    /// Upload a snapshot of `user`. Resolves to `true` on success.
    fn push(&self, user: &User) -> impl Future<Output = bool>;
    /// Download the stored snapshot, if any.
    fn pull(&self) -> impl Future<Output = Option<User>>;
}
