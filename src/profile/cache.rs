//! Shared cache of the signed-in user's profile.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::Profile;

/// Receiver of refreshed profiles.
pub trait ProfileSink: Send + Sync {
    fn set_profile(&self, profile: Profile);
}

/// Process-wide profile cache shared by every screen.
///
/// Readers get a clone of the last stored profile; a refresh replaces it
/// wholesale.
#[derive(Clone, Default)]
pub struct ProfileCache {
    inner: Arc<RwLock<Option<Profile>>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(profile))),
        }
    }

    pub fn get(&self) -> Option<Profile> {
        self.inner.read().clone()
    }
}

impl ProfileSink for ProfileCache {
    fn set_profile(&self, profile: Profile) {
        tracing::debug!(balance = profile.balance, "Profile cache updated");
        *self.inner.write() = Some(profile);
    }
}
