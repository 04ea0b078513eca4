//! Reducer for acquisition state transitions.
//!
//! Transitions only move forward: `Idle -> Loading -> Succeeded | Failed`.
//! Any intent that does not fit the current state leaves it unchanged.

use crate::ui::mvi::Reducer;

use super::intent::AcquisitionIntent;
use super::state::AcquisitionState;

pub struct AcquisitionReducer;

impl Reducer for AcquisitionReducer {
    type State = AcquisitionState;
    type Intent = AcquisitionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (state, AcquisitionIntent::Trigger) if state.can_trigger() => AcquisitionState::Loading,

            (AcquisitionState::Loading, AcquisitionIntent::Resolved { reward }) => {
                AcquisitionState::Succeeded { reward }
            }

            (AcquisitionState::Loading, AcquisitionIntent::Rejected) => AcquisitionState::Failed,

            (other, _) => other,
        }
    }
}
