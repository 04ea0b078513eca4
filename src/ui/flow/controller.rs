//! Sequencing of the reveal screen.
//!
//! Mounting triggers the purchase once. After a successful purchase the
//! controller refreshes the user's profile with a bounded retry; if every
//! attempt fails the reveal still shows and the cached profile stays stale.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ProfileService, ServiceError};
use crate::profile::ProfileSink;
use crate::retry;
use crate::ui::acquisition::{AcquisitionPhase, AcquisitionStore};

use super::navigator::{GachaMarker, Navigator};
use super::view::{FlowView, ProfileRefresh};

/// Extra profile fetches after the first one fails.
pub const DEFAULT_PROFILE_RETRIES: u32 = 1;

pub struct FlowController {
    store: AcquisitionStore,
    profiles: Arc<dyn ProfileService>,
    profile_sink: Arc<dyn ProfileSink>,
    navigator: Arc<dyn Navigator>,
    max_profile_retries: u32,
    mounted: AtomicBool,
    profile_refresh: Mutex<ProfileRefresh>,
}

impl FlowController {
    pub fn new(
        store: AcquisitionStore,
        profiles: Arc<dyn ProfileService>,
        profile_sink: Arc<dyn ProfileSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            profiles,
            profile_sink,
            navigator,
            max_profile_retries: DEFAULT_PROFILE_RETRIES,
            mounted: AtomicBool::new(false),
            profile_refresh: Mutex::new(ProfileRefresh::NotStarted),
        }
    }

    pub fn with_profile_retries(mut self, max_retries: u32) -> Self {
        self.max_profile_retries = max_retries;
        self
    }

    /// Screen entered. Only the first call does anything.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!(screen_id = %self.store.lifetime().id(), "Already mounted");
            return;
        }

        // Another hook may have triggered the store already; in that case this
        // trigger is dropped and the purchase is awaited through `settled`.
        self.store.trigger().await;

        match self.store.settled().await {
            Some(state) if state.phase() == AcquisitionPhase::Succeeded => {
                self.refresh_profile().await
            }
            Some(_) => {}
            None => {
                tracing::debug!(screen_id = %self.store.lifetime().id(), "Unmounted before purchase settled");
            }
        }
    }

    /// Screen left: results still in flight are dropped from now on.
    pub fn unmount(&self) {
        self.store.lifetime().tear_down();
    }

    /// User pressed back on the reveal.
    pub fn back(&self) {
        tracing::debug!(screen_id = %self.store.lifetime().id(), "Leaving reveal screen");
        self.navigator.mark_transition(GachaMarker::CameFromGacha);
        self.navigator.leave_reveal_screen();
    }

    pub fn view(&self) -> FlowView {
        FlowView::new(&self.store.snapshot(), *self.profile_refresh.lock())
    }

    async fn refresh_profile(&self) {
        let screen_id = self.store.lifetime().id();
        let profiles: &dyn ProfileService = self.profiles.as_ref();

        let refresh = retry::attempt(
            move |attempt_no| {
                tracing::debug!(screen_id = %screen_id, attempt = attempt_no + 1, "Refreshing profile");
                profiles.fetch_current_user()
            },
            self.max_profile_retries,
        );

        // Teardown cancels the pending attempt and any retry after it.
        let result: Result<_, ServiceError> = tokio::select! {
            result = refresh => result,
            _ = self.store.lifetime().torn_down() => {
                tracing::debug!(screen_id = %screen_id, "Profile refresh cancelled by teardown");
                return;
            }
        };

        if !self.store.lifetime().is_alive() {
            tracing::debug!(screen_id = %screen_id, "Discarding profile refresh for torn down screen");
            return;
        }

        let outcome = match result {
            Ok(profile) => {
                self.profile_sink.set_profile(profile);
                ProfileRefresh::Refreshed
            }
            Err(err) => {
                tracing::warn!(
                    screen_id = %screen_id,
                    kind = err.kind(),
                    error = %err,
                    "Profile refresh failed, keeping cached profile"
                );
                ProfileRefresh::Stale
            }
        };

        *self.profile_refresh.lock() = outcome;
    }
}
