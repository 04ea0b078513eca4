//! Reveal screen orchestration: purchase, then profile refresh.

mod controller;
mod navigator;
mod view;

pub use controller::FlowController;
pub use navigator::{GachaMarker, Navigator};
pub use view::{FlowView, ProfileRefresh};
