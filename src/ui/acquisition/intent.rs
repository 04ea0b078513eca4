//! Intents for the acquisition store.

use crate::api::RewardDescriptor;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AcquisitionIntent {
    /// Request a draw. Ignored unless the store is idle.
    Trigger,

    /// The purchase call returned a reward.
    Resolved { reward: RewardDescriptor },

    /// The purchase call failed.
    Rejected,
}

impl Intent for AcquisitionIntent {}
