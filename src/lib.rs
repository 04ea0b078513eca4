//! Client-side gacha reveal flow.
//!
//! A reveal screen spends currency on exactly one randomized reward, shows it
//! with a rarity-dependent treatment, and refreshes the user's profile
//! afterwards on a best-effort basis.

pub mod api;
pub mod config;
pub mod logging;
pub mod profile;
pub mod retry;
pub mod ui;
