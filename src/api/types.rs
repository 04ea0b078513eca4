//! Wire types of the shop and profile services.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rarity classification of a drawn reward.
///
/// Labels are matched case-insensitively. Anything outside the known tiers is
/// kept verbatim in `Unknown` so decoding never fails on a new tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RarityTier {
    Legendary,
    Rare,
    Common,
    Unknown(String),
}

impl RarityTier {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "legendary" => Self::Legendary,
            "rare" => Self::Rare,
            "common" => Self::Common,
            _ => Self::Unknown(label.to_string()),
        }
    }

    /// Label as shown on the reveal card.
    pub fn label(&self) -> &str {
        match self {
            Self::Legendary => "LEGENDARY",
            Self::Rare => "RARE",
            Self::Common => "COMMON",
            Self::Unknown(label) => label,
        }
    }
}

impl From<String> for RarityTier {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<RarityTier> for String {
    fn from(tier: RarityTier) -> Self {
        tier.label().to_string()
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The item granted by one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDescriptor {
    pub name: String,
    #[serde(rename = "grade")]
    pub rarity_tier: RarityTier,
    #[serde(rename = "imgUrl", default)]
    pub image_ref: Option<String>,
    #[serde(rename = "hasItemAlready", default)]
    pub already_owned: bool,
}

/// What kind of product is being bought from the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseKind {
    Random,
}

/// Request body of a shop purchase.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequest {
    #[serde(rename = "type")]
    pub kind: PurchaseKind,
}

/// Current user's profile.
///
/// Only the balance is interpreted here; every other attribute is carried
/// through untouched for whoever renders the profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub balance: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
