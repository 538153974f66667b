//! # Combat Formulas
//!
//! Strike damage and flee chance.

use serde::{Deserialize, Serialize};

/// Critical strikes deal `CRITICAL_NUMERATOR / CRITICAL_DENOMINATOR` of base damage.
pub const CRITICAL_NUMERATOR: u32 = 3;
pub const CRITICAL_DENOMINATOR: u32 = 2;

/// No strike deals less than this.
pub const MIN_DAMAGE: u32 = 1;

pub const BASE_FLEE_CHANCE: i64 = 20;
pub const FLEE_PER_DEXTERITY: i64 = 2;
pub const FLEE_PER_LEVEL: i64 = 5;
pub const MIN_FLEE_CHANCE: i64 = 5;
pub const MAX_FLEE_CHANCE: i64 = 95;

/// Breakdown of a single strike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageCalculation {
    /// Strength plus weapon damage
    pub base_damage: u32,
    pub critical_multiplier: f64,
    /// Base damage after the critical multiplier, floored
    pub critical_damage: u32,
    pub armor_reduction: u32,
    pub final_damage: u32,
}

/// Computes the damage of one strike.
///
/// # Examples
///
/// ```
/// use death_mountain::calculate_damage;
///
/// let hit = calculate_damage(10, 5, 3, true);
/// assert_eq!(hit.base_damage, 15);
/// assert_eq!(hit.critical_damage, 22);
/// assert_eq!(hit.final_damage, 19);
/// ```
pub fn calculate_damage(strength: u32, weapon_damage: u32, armor: u32, critical: bool) -> DamageCalculation {
    let base_damage = strength.saturating_add(weapon_damage);
    let (critical_multiplier, critical_damage) = if critical {
        (
            f64::from(CRITICAL_NUMERATOR) / f64::from(CRITICAL_DENOMINATOR),
            base_damage.saturating_mul(CRITICAL_NUMERATOR) / CRITICAL_DENOMINATOR,
        )
    } else {
        (1.0, base_damage)
    };

    DamageCalculation {
        base_damage,
        critical_multiplier,
        critical_damage,
        armor_reduction: armor,
        final_damage: critical_damage.saturating_sub(armor).max(MIN_DAMAGE),
    }
}

/// Breakdown of the chance to escape a beast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleeCalculation {
    pub base_flee_chance: i64,
    pub level_modifier: i64,
    /// Percentage in `[5, 95]`
    pub flee_chance: i64,
}

/// Computes the percentage chance to flee.
///
/// # Examples
///
/// ```
/// use death_mountain::calculate_flee_chance;
///
/// assert_eq!(calculate_flee_chance(0, 1, 20).flee_chance, 5);
/// assert_eq!(calculate_flee_chance(10, 5, 5).flee_chance, 40);
/// ```
pub fn calculate_flee_chance(dexterity: u32, adventurer_level: u32, beast_level: u32) -> FleeCalculation {
    let base_flee_chance = BASE_FLEE_CHANCE + FLEE_PER_DEXTERITY * i64::from(dexterity);
    let level_modifier = FLEE_PER_LEVEL * (i64::from(adventurer_level) - i64::from(beast_level));

    FleeCalculation {
        base_flee_chance,
        level_modifier,
        flee_chance: (base_flee_chance + level_modifier).clamp(MIN_FLEE_CHANCE, MAX_FLEE_CHANCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hit() {
        let hit = calculate_damage(10, 5, 0, false);
        assert_eq!(hit.base_damage, 15);
        assert_eq!(hit.critical_multiplier, 1.0);
        assert_eq!(hit.final_damage, 15);
    }

    #[test]
    fn test_critical_hit_floors() {
        let hit = calculate_damage(10, 5, 3, true);
        assert_eq!(hit.critical_multiplier, 1.5);
        assert_eq!(hit.critical_damage, 22);
        assert_eq!(hit.armor_reduction, 3);
        assert_eq!(hit.final_damage, 19);
    }

    #[test]
    fn test_armor_never_drops_below_one() {
        assert_eq!(calculate_damage(1, 1, 500, false).final_damage, 1);
        assert_eq!(calculate_damage(0, 0, 0, false).final_damage, 1);
        assert_eq!(calculate_damage(4, 0, 6, true).final_damage, 1);
    }

    #[test]
    fn test_flee_chance_breakdown() {
        let flee = calculate_flee_chance(0, 1, 20);
        assert_eq!(flee.base_flee_chance, 20);
        assert_eq!(flee.level_modifier, -95);
        assert_eq!(flee.flee_chance, 5);
    }

    #[test]
    fn test_flee_chance_upper_clamp() {
        let flee = calculate_flee_chance(40, 30, 1);
        assert_eq!(flee.flee_chance, 95);
    }

    #[test]
    fn test_flee_chance_unclamped() {
        // 20 + 2 * 5 + 5 * (4 - 2)
        assert_eq!(calculate_flee_chance(5, 4, 2).flee_chance, 40);
    }
}
