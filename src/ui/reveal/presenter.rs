//! Rarity tier to display treatment mapping.

use crate::api::{RarityTier, RewardDescriptor};

/// Color a reveal is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    Gold,
    Green,
    Gray,
    White,
}

impl DisplayColor {
    /// CSS color value.
    pub fn hex(self) -> &'static str {
        match self {
            DisplayColor::Gold => "#ffc800",
            DisplayColor::Green => "#73e337",
            DisplayColor::Gray => "#b2adad",
            DisplayColor::White => "white",
        }
    }
}

/// How a tier is presented on the reveal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTreatment {
    pub color: DisplayColor,
    pub label: String,
}

/// Maps any tier label to a treatment. Unknown labels get white.
pub fn treatment_for_label(label: &str) -> RevealTreatment {
    treatment_for(&RarityTier::parse(label))
}

pub fn treatment_for(tier: &RarityTier) -> RevealTreatment {
    let color = match tier {
        RarityTier::Legendary => DisplayColor::Gold,
        RarityTier::Rare => DisplayColor::Green,
        RarityTier::Common => DisplayColor::Gray,
        RarityTier::Unknown(_) => DisplayColor::White,
    };

    RevealTreatment {
        color,
        label: tier.label().to_string(),
    }
}

/// Everything the view needs to draw a revealed reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCard {
    pub heading: RevealTreatment,
    pub image: String,
    pub name: String,
    pub name_color: DisplayColor,
    pub already_owned: bool,
}

impl RevealCard {
    pub fn from_reward(reward: &RewardDescriptor) -> Self {
        Self {
            heading: treatment_for(&reward.rarity_tier),
            image: reward.image_ref.clone().unwrap_or_default(),
            name: reward.name.clone(),
            name_color: DisplayColor::Gray,
            already_owned: reward.already_owned,
        }
    }
}
