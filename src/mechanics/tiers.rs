//! # Tier Formulas
//!
//! Shared constants and formulas deriving item, beast and obstacle values
//! from tier and level.

use super::{MAX_TIER, MIN_TIER};
use crate::data::{ItemSlot, ItemType};

/// Weapon damage per point of tier bonus.
pub const WEAPON_DAMAGE_PER_BONUS: u32 = 3;

/// Armor per point of tier bonus.
pub const ARMOR_PER_BONUS: u32 = 2;

/// Health every beast starts with before level scaling.
pub const BEAST_BASE_HEALTH: u32 = 10;

/// Beast health ceiling.
pub const BEAST_MAX_HEALTH: u32 = 1023;

/// Gold reward divisor applied to `tier_bonus * level`.
pub const GOLD_REWARD_DIVISOR: u32 = 2;

/// Returns `6 - tier`; tier 1 is the strongest and gets a bonus of 5.
///
/// # Examples
///
/// ```
/// use death_mountain::tier_bonus;
///
/// assert_eq!(tier_bonus(1), 5);
/// assert_eq!(tier_bonus(5), 1);
/// ```
///
/// Tiers run from 1 to 5. Debug builds panic outside that range; release
/// builds saturate at zero above it.
pub fn tier_bonus(tier: u8) -> u32 {
    debug_assert!(
        (MIN_TIER..=MAX_TIER).contains(&tier),
        "tier {} outside {}..={}",
        tier,
        MIN_TIER,
        MAX_TIER
    );
    6u32.saturating_sub(u32::from(tier))
}

/// Damage of a weapon-type item, `None` for everything else.
pub fn item_damage(tier: u8, item_type: ItemType) -> Option<u32> {
    item_type
        .is_weapon()
        .then(|| tier_bonus(tier) * WEAPON_DAMAGE_PER_BONUS)
}

/// Armor of an armor-type item worn in an armor slot, `None` otherwise.
pub fn item_armor(tier: u8, item_type: ItemType, slot: ItemSlot) -> Option<u32> {
    (item_type.is_armor() && slot.is_armor_slot()).then(|| tier_bonus(tier) * ARMOR_PER_BONUS)
}

pub fn beast_health(tier: u8, level: u32) -> u32 {
    let scaled = 2u32
        .saturating_mul(tier_bonus(tier))
        .saturating_mul(level);
    BEAST_BASE_HEALTH
        .saturating_add(scaled)
        .min(BEAST_MAX_HEALTH)
}

pub fn beast_gold_reward(tier: u8, level: u32) -> u32 {
    (tier_bonus(tier).saturating_mul(level) / GOLD_REWARD_DIVISOR).max(1)
}

/// Damage a beast deals per strike before armor.
pub fn beast_attack(tier: u8, level: u32) -> u32 {
    tier_bonus(tier).saturating_mul(level)
}

pub fn obstacle_damage(tier: u8, level: u32) -> u32 {
    tier_bonus(tier).saturating_mul(level)
}
