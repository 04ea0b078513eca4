//! Screen-scoped store that performs the single reward purchase.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::api::{PurchaseKind, RewardService};
use crate::ui::lifetime::ScreenLifetime;
use crate::ui::mvi::Reducer;

use super::intent::AcquisitionIntent;
use super::reducer::AcquisitionReducer;
use super::state::{AcquisitionPhase, AcquisitionState};

/// Holds the acquisition state of one reveal screen.
///
/// At most one purchase is ever issued per store: only the first trigger
/// from `Idle` reaches the reward service, later triggers are dropped.
/// Clones share the same state. Once the screen's lifetime is torn down no
/// intent is applied anymore.
#[derive(Clone)]
pub struct AcquisitionStore {
    state: Arc<watch::Sender<AcquisitionState>>,
    rewards: Arc<dyn RewardService>,
    lifetime: ScreenLifetime,
    reveal_delay: Duration,
}

impl AcquisitionStore {
    pub fn new(rewards: Arc<dyn RewardService>, lifetime: ScreenLifetime) -> Self {
        let (state, _) = watch::channel(AcquisitionState::Idle);
        Self {
            state: Arc::new(state),
            rewards,
            lifetime,
            reveal_delay: Duration::ZERO,
        }
    }

    /// Pause between a successful purchase and publishing the reward.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn snapshot(&self) -> AcquisitionState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> AcquisitionPhase {
        self.state.borrow().phase()
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// Wait until the acquisition succeeds or fails, whoever triggered it.
    ///
    /// Returns `None` if the screen is torn down first.
    pub async fn settled(&self) -> Option<AcquisitionState> {
        let mut updates = self.state.subscribe();
        tokio::select! {
            state = updates.wait_for(AcquisitionState::is_terminal) => {
                state.ok().map(|state| state.clone())
            }
            _ = self.lifetime.torn_down() => None,
        }
    }

    /// Start the purchase if nothing has been requested yet.
    ///
    /// Returns once the purchase has resolved, or immediately when the
    /// trigger was dropped.
    pub async fn trigger(&self) {
        let screen_id = self.lifetime.id();

        if !self.dispatch(AcquisitionIntent::Trigger) {
            tracing::debug!(
                screen_id = %screen_id,
                phase = ?self.phase(),
                "Trigger dropped"
            );
            return;
        }

        // Torn down right after the transition.
        if !self.lifetime.is_alive() {
            tracing::debug!(screen_id = %screen_id, "Screen torn down before purchase");
            return;
        }

        tracing::debug!(screen_id = %screen_id, "Purchasing random reward");
        let intent = match self.rewards.purchase(PurchaseKind::Random).await {
            Ok(reward) => {
                if !self.reveal_delay.is_zero() {
                    tokio::time::sleep(self.reveal_delay).await;
                }
                tracing::info!(
                    screen_id = %screen_id,
                    name = %reward.name,
                    tier = %reward.rarity_tier,
                    already_owned = reward.already_owned,
                    "Reward acquired"
                );
                AcquisitionIntent::Resolved { reward }
            }
            Err(err) => {
                tracing::warn!(
                    screen_id = %screen_id,
                    kind = err.kind(),
                    transient = err.is_transient(),
                    error = %err,
                    "Reward purchase failed"
                );
                AcquisitionIntent::Rejected
            }
        };

        if !self.dispatch(intent) {
            tracing::debug!(screen_id = %screen_id, "Purchase result discarded");
        }
    }

    /// Apply an intent. Returns whether the state changed.
    fn dispatch(&self, intent: AcquisitionIntent) -> bool {
        let screen_id = self.lifetime.id();
        self.state.send_if_modified(|state| {
            if !self.lifetime.is_alive() {
                return false;
            }
            let previous = std::mem::take(state);
            let from = previous.phase();
            let next = AcquisitionReducer::reduce(previous, intent);
            let changed = next.phase() != from;
            if changed {
                tracing::debug!(
                    screen_id = %screen_id,
                    from = ?from,
                    to = ?next.phase(),
                    "Acquisition transition"
                );
            }
            *state = next;
            changed
        })
    }
}
