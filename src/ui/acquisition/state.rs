//! State of one reward acquisition attempt.

use crate::api::RewardDescriptor;
use crate::ui::mvi::UiState;

/// Coarse lifecycle phase of an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionPhase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Acquisition state for one mounted reveal screen.
///
/// The reward only exists in `Succeeded`, so a failed or pending attempt can
/// never expose a partial result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AcquisitionState {
    /// Screen mounted, nothing requested yet.
    #[default]
    Idle,

    /// Purchase request in flight.
    Loading,

    /// The shop granted a reward.
    Succeeded { reward: RewardDescriptor },

    /// The purchase call failed. Terminal for this screen.
    Failed,
}

impl UiState for AcquisitionState {}

impl AcquisitionState {
    pub fn phase(&self) -> AcquisitionPhase {
        match self {
            Self::Idle => AcquisitionPhase::Idle,
            Self::Loading => AcquisitionPhase::Loading,
            Self::Succeeded { .. } => AcquisitionPhase::Succeeded,
            Self::Failed => AcquisitionPhase::Failed,
        }
    }

    pub fn reward(&self) -> Option<&RewardDescriptor> {
        match self {
            Self::Succeeded { reward } => Some(reward),
            _ => None,
        }
    }

    /// Whether a trigger from this state may start a purchase.
    pub fn can_trigger(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed)
    }
}
