//! Creator tier progression.
//!
//! Tiers are derived from a creator's lifetime count of completed
//! collaborations. Nothing here holds state: the tier is recomputed from the
//! count on every call, so a creator can never be demoted by this module.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One of the six creator tiers, ordered from `Newbie` to `Legend`.
///
/// Serialized as its integer level (`0`..=`5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TierLevel {
    Newbie = 0,
    Explorer = 1,
    Pro = 2,
    Elite = 3,
    Master = 4,
    Legend = 5,
}

impl TierLevel {
    pub const ALL: [TierLevel; 6] = [
        TierLevel::Newbie,
        TierLevel::Explorer,
        TierLevel::Pro,
        TierLevel::Elite,
        TierLevel::Master,
        TierLevel::Legend,
    ];

    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The tier directly above this one, or `None` at `Legend`.
    #[must_use]
    pub fn next(self) -> Option<TierLevel> {
        match self {
            TierLevel::Newbie => Some(TierLevel::Explorer),
            TierLevel::Explorer => Some(TierLevel::Pro),
            TierLevel::Pro => Some(TierLevel::Elite),
            TierLevel::Elite => Some(TierLevel::Master),
            TierLevel::Master => Some(TierLevel::Legend),
            TierLevel::Legend => None,
        }
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self == TierLevel::Legend
    }

    /// Returns `true` if this tier satisfies a `required` minimum tier.
    #[must_use]
    pub fn meets(self, required: TierLevel) -> bool {
        self >= required
    }

    #[must_use]
    pub fn info(self) -> &'static TierInfo {
        tier_info(self)
    }
}

impl TryFrom<u8> for TierLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TierLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CoreError::InvalidTierLevel(value))
    }
}

impl From<TierLevel> for u8 {
    fn from(level: TierLevel) -> Self {
        level.as_u8()
    }
}

impl std::fmt::Display for TierLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", tier_info(*self).display_name)
    }
}

/// Static metadata for a tier.
///
/// The color and emoji fields are presentation tokens and are carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    pub level: TierLevel,
    pub name: &'static str,
    pub display_name: &'static str,
    pub color: &'static str,
    pub color_light: &'static str,
    pub color_dark: &'static str,
    pub description: &'static str,
    /// Lifetime completed collaborations needed to reach this tier.
    pub min_collabs: u32,
    pub emoji: &'static str,
}

/// Tier table indexed by level. Thresholds are strictly increasing.
pub const TIER_CONFIG: [TierInfo; 6] = [
    TierInfo {
        level: TierLevel::Newbie,
        name: "newbie",
        display_name: "Newbie",
        color: "tier-0",
        color_light: "tier-0-light",
        color_dark: "tier-0-dark",
        description: "Just getting started on your creator journey",
        min_collabs: 0,
        emoji: "🌟",
    },
    TierInfo {
        level: TierLevel::Explorer,
        name: "explorer",
        display_name: "Explorer",
        color: "tier-1",
        color_light: "tier-1-light",
        color_dark: "tier-1-dark",
        description: "Building your presence with fresh collaborations",
        min_collabs: 3,
        emoji: "💫",
    },
    TierInfo {
        level: TierLevel::Pro,
        name: "pro",
        display_name: "Pro",
        color: "tier-2",
        color_light: "tier-2-light",
        color_dark: "tier-2-dark",
        description: "Established creator with consistent impact",
        min_collabs: 10,
        emoji: "⚡",
    },
    TierInfo {
        level: TierLevel::Elite,
        name: "elite",
        display_name: "Elite",
        color: "tier-3",
        color_light: "tier-3-light",
        color_dark: "tier-3-dark",
        description: "Premium influencer with exclusive opportunities",
        min_collabs: 25,
        emoji: "💎",
    },
    TierInfo {
        level: TierLevel::Master,
        name: "master",
        display_name: "Master",
        color: "tier-4",
        color_light: "tier-4-light",
        color_dark: "tier-4-dark",
        description: "Top-tier creator with powerful influence",
        min_collabs: 50,
        emoji: "🔥",
    },
    TierInfo {
        level: TierLevel::Legend,
        name: "legend",
        display_name: "Legend",
        color: "tier-5",
        color_light: "tier-5-light",
        color_dark: "tier-5-dark",
        description: "Legendary creator - pinnacle of achievement",
        min_collabs: 100,
        emoji: "🏆",
    },
];

/// Look up the static metadata for a tier.
#[must_use]
pub fn tier_info(level: TierLevel) -> &'static TierInfo {
    &TIER_CONFIG[usize::from(level.as_u8())]
}

/// Progress readout toward the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    pub current_tier: TierLevel,
    /// `None` once the creator has reached `Legend`.
    pub next_tier: Option<TierLevel>,
    /// Percentage through the current tier's band, `0..=100`.
    pub progress_percent: u8,
    /// Completed collaborations still missing to reach `next_tier`.
    pub collabs_needed: u32,
}

/// Highest tier whose threshold is at or below `completed_collabs`.
///
/// Thresholds are checked from the top down, so each tier's lower bound is
/// inclusive. Negative counts are treated as zero.
#[must_use]
pub fn calculate_tier_level(completed_collabs: i64) -> TierLevel {
    TIER_CONFIG
        .iter()
        .rev()
        .find(|tier| completed_collabs >= i64::from(tier.min_collabs))
        .map_or(TierLevel::Newbie, |tier| tier.level)
}

/// Compute the current tier and how far the creator is through it.
///
/// `progress_percent` is the share of the band between the current tier's
/// threshold and the next one, rounded half up. At `Legend` the readout is
/// pinned to 100% with nothing left to complete.
#[must_use]
pub fn progress_to_next_tier(completed_collabs: i64) -> TierProgress {
    let completed = completed_collabs.max(0);
    let current_tier = calculate_tier_level(completed);

    let Some(next_tier) = current_tier.next() else {
        return TierProgress {
            current_tier,
            next_tier: None,
            progress_percent: 100,
            collabs_needed: 0,
        };
    };

    let current_min = i64::from(tier_info(current_tier).min_collabs);
    let next_min = i64::from(tier_info(next_tier).min_collabs);

    let collabs_needed = next_min - completed;
    let band = next_min - current_min;
    let into_band = completed - current_min;
    // round(100 * into / band) with ties rounding up, kept in integers
    let percent = (200 * into_band + band) / (2 * band);

    TierProgress {
        current_tier,
        next_tier: Some(next_tier),
        progress_percent: u8::try_from(percent.clamp(0, 100)).unwrap_or(100),
        collabs_needed: u32::try_from(collabs_needed.max(0)).unwrap_or(0),
    }
}

#[cfg(test)]
#[path = "tiers_test.rs"]
mod tests;
