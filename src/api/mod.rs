//! Shop and profile service clients.

mod error;
mod http;
mod traits;
mod types;

pub use error::ServiceError;
pub use http::HttpShopClient;
pub use traits::{ProfileService, RewardService};
pub use types::{Profile, PurchaseKind, PurchaseRequest, RarityTier, RewardDescriptor};
