//! Seams between the reveal flow and the remote services it depends on.

use async_trait::async_trait;

use super::error::ServiceError;
use super::types::{Profile, PurchaseKind, RewardDescriptor};

/// Remote shop that sells randomized rewards.
#[async_trait]
pub trait RewardService: Send + Sync {
    /// Spend currency on one draw of the given kind.
    async fn purchase(&self, kind: PurchaseKind) -> Result<RewardDescriptor, ServiceError>;
}

/// Remote source of the signed-in user's profile.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn fetch_current_user(&self) -> Result<Profile, ServiceError>;
}
