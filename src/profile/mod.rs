//! Cached profile of the signed-in user.

mod cache;

pub use cache::{ProfileCache, ProfileSink};
