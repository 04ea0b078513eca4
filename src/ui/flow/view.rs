//! View state the reveal screen renders from.

use crate::api::RewardDescriptor;
use crate::ui::acquisition::{AcquisitionPhase, AcquisitionState};
use crate::ui::reveal::RevealCard;

/// Outcome of the post-purchase profile refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileRefresh {
    #[default]
    NotStarted,
    Refreshed,
    /// Every attempt failed; the cached profile was left as it was.
    Stale,
}

/// Combined state the reveal screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowView {
    pub phase: AcquisitionPhase,
    pub reward: Option<RewardDescriptor>,
    pub profile_refresh: ProfileRefresh,
}

impl FlowView {
    pub fn new(state: &AcquisitionState, profile_refresh: ProfileRefresh) -> Self {
        Self {
            phase: state.phase(),
            reward: state.reward().cloned(),
            profile_refresh,
        }
    }

    /// Card to draw, or `None` while the screen should stay blank.
    pub fn card(&self) -> Option<RevealCard> {
        self.reward.as_ref().map(RevealCard::from_reward)
    }
}
