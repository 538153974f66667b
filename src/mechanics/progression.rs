//! # Progression Formulas
//!
//! XP rewards, level derivation and stat-upgrade accounting.

use serde::{Deserialize, Serialize};

pub const XP_PER_TIER: u32 = 10;

/// Level multiplier bounds and step, in tenths.
const MULTIPLIER_BASE_TENTHS: i64 = 10;
const MIN_MULTIPLIER_TENTHS: i64 = 5;
const MAX_MULTIPLIER_TENTHS: i64 = 20;

/// Breakdown of the XP awarded for slaying a beast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpReward {
    pub base_xp: u32,
    pub level_difference: i64,
    /// In `[0.5, 2.0]`
    pub level_multiplier: f64,
    pub final_xp: u32,
}

/// Computes the XP reward for a beast of the given tier and level.
///
/// # Examples
///
/// ```
/// use death_mountain::calculate_xp_reward;
///
/// let reward = calculate_xp_reward(10, 3, 5);
/// assert_eq!(reward.base_xp, 30);
/// assert_eq!(reward.level_multiplier, 1.5);
/// assert_eq!(reward.final_xp, 45);
/// ```
pub fn calculate_xp_reward(beast_level: u32, beast_tier: u8, adventurer_level: u32) -> XpReward {
    let base_xp = u32::from(beast_tier) * XP_PER_TIER;
    let level_difference = i64::from(beast_level) - i64::from(adventurer_level);
    let tenths = (MULTIPLIER_BASE_TENTHS + level_difference)
        .clamp(MIN_MULTIPLIER_TENTHS, MAX_MULTIPLIER_TENTHS);

    // tenths is within [5, 20] so the product fits comfortably
    let final_xp = (i64::from(base_xp) * tenths / 10) as u32;

    XpReward {
        base_xp,
        level_difference,
        level_multiplier: tenths as f64 / 10.0,
        final_xp,
    }
}

/// Stat upgrades earned and still available at a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatUpgrades {
    pub current_level: u32,
    pub total_earned: u32,
    pub used: u32,
    pub available: u32,
    pub next_upgrade_at_level: u32,
}

/// One upgrade is earned per level after the first.
///
/// `used` beyond the earned total is rejected by argument validation; here it
/// saturates at zero available.
pub fn calculate_stat_upgrades(level: u32, used: u32) -> StatUpgrades {
    let total_earned = level.saturating_sub(1);
    StatUpgrades {
        current_level: level,
        total_earned,
        used,
        available: total_earned.saturating_sub(used),
        next_upgrade_at_level: level.saturating_add(1),
    }
}

/// Level implied by an XP total: `max(1, floor(sqrt(xp)))`.
///
/// # Examples
///
/// ```
/// use death_mountain::level_from_xp;
///
/// assert_eq!(level_from_xp(0), 1);
/// assert_eq!(level_from_xp(15), 3);
/// assert_eq!(level_from_xp(16), 4);
/// ```
pub fn level_from_xp(xp: u32) -> u32 {
    integer_sqrt(xp).max(1)
}

fn integer_sqrt(n: u32) -> u32 {
    let mut root = (f64::from(n)).sqrt() as u32;
    // correct any float rounding at perfect-square boundaries
    while u64::from(root) * u64::from(root) > u64::from(n) {
        root -= 1;
    }
    while u64::from(root + 1) * u64::from(root + 1) <= u64::from(n) {
        root += 1;
    }
    root
}
