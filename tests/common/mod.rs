//! Shared test utilities: scripted services and recording collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_shop;

use async_trait::async_trait;
use gacha_reveal::api::{
    Profile, ProfileService, PurchaseKind, RarityTier, RewardDescriptor, RewardService,
    ServiceError,
};
use gacha_reveal::ui::flow::{GachaMarker, Navigator};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

pub fn going_merry() -> RewardDescriptor {
    RewardDescriptor {
        name: "Going Merry".to_string(),
        rarity_tier: RarityTier::Legendary,
        image_ref: Some("/ship_images/x.png".to_string()),
        already_owned: false,
    }
}

pub fn profile_with_balance(balance: i64) -> Profile {
    Profile {
        name: Some("Luffy".to_string()),
        balance,
        ..Profile::default()
    }
}

pub fn unavailable() -> ServiceError {
    ServiceError::Status {
        status: 503,
        message: "unavailable".to_string(),
    }
}

/// Reward service with a fixed answer.
///
/// When gated, every purchase blocks until `release()` is called, which lets
/// tests observe the store while the call is in flight.
pub struct ScriptedRewards {
    reward: Option<RewardDescriptor>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl ScriptedRewards {
    pub fn granting(reward: RewardDescriptor) -> Self {
        Self {
            reward: Some(reward),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            reward: None,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RewardService for ScriptedRewards {
    async fn purchase(&self, kind: PurchaseKind) -> Result<RewardDescriptor, ServiceError> {
        assert_eq!(kind, PurchaseKind::Random);
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        self.reward.clone().ok_or_else(unavailable)
    }
}

/// Profile service that replays queued results, then keeps failing.
///
/// When gated, each fetch waits for one `release()`.
pub struct ScriptedProfiles {
    results: Mutex<VecDeque<Result<Profile, ServiceError>>>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl ScriptedProfiles {
    pub fn new(results: Vec<Result<Profile, ServiceError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileService for ScriptedProfiles {
    async fn fetch_current_user(&self) -> Result<Profile, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Marker(GachaMarker),
    Left,
}

#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn mark_transition(&self, marker: GachaMarker) {
        self.events.lock().push(NavEvent::Marker(marker));
    }

    fn leave_reveal_screen(&self) {
        self.events.lock().push(NavEvent::Left);
    }
}

/// Poll until `check` holds, failing the test after one second.
pub async fn wait_until(mut check: impl FnMut() -> bool) {
    for _ in 0..200 {
        if check() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}
