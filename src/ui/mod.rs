//! Screen-level state for the gacha reveal.

pub mod acquisition;
pub mod flow;
pub mod lifetime;
pub mod mvi;
pub mod reveal;
