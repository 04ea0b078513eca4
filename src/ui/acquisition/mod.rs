//! Reward acquisition: one purchase per mounted reveal screen.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::AcquisitionIntent;
pub use reducer::AcquisitionReducer;
pub use state::{AcquisitionPhase, AcquisitionState};
pub use store::AcquisitionStore;
