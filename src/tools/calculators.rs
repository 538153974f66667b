//! # Calculator Tools
//!
//! Thin wrappers exposing the mechanics formulas as tools.

use super::lookup::{not_found, MAX_ENTITY_ID, MAX_LEVEL};
use super::{parse_args, to_result, FieldError, FieldSpec, Tool};
use crate::config::MAX_SIMULATION_TRIALS;
use crate::data::{item_template, GameDataClient};
use crate::mechanics::{
    calculate_damage, calculate_flee_chance, calculate_market_price, calculate_stat_upgrades,
    calculate_xp_reward, simulate_combat, MarketCategory, SimulationParams, MAX_TIER, MIN_TIER,
};
use crate::GameResult;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const MAX_ATTRIBUTE: i64 = 255;
pub const MAX_COMBAT_VALUE: i64 = 1023;
pub const MAX_GOLD: i64 = 65_535;

const TIER_MIN: i64 = MIN_TIER as i64;
const TIER_MAX: i64 = MAX_TIER as i64;

/// Damage of a single strike.
pub struct CalculateDamage;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DamageArgs {
    strength: u32,
    weapon_damage: u32,
    armor: u32,
    critical: bool,
}

impl Tool for CalculateDamage {
    fn name(&self) -> &'static str {
        "calculate_damage"
    }

    fn description(&self) -> &'static str {
        "Calculate strike damage from strength, weapon damage, target armor and critical hit"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("strength", "Attacker strength", 0, MAX_ATTRIBUTE),
            FieldSpec::integer("weaponDamage", "Weapon base damage", 0, MAX_COMBAT_VALUE),
            FieldSpec::integer("armor", "Target armor", 0, MAX_COMBAT_VALUE).default_int(0),
            FieldSpec::boolean("critical", "Whether the strike is a critical hit")
                .default_bool(false),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, _data: &GameDataClient) -> GameResult<Value> {
        let args: DamageArgs = parse_args(args)?;
        to_result(&calculate_damage(
            args.strength,
            args.weapon_damage,
            args.armor,
            args.critical,
        ))
    }
}

/// XP for slaying a beast.
pub struct CalculateXpReward;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct XpArgs {
    beast_level: u32,
    beast_tier: u8,
    adventurer_level: u32,
}

impl Tool for CalculateXpReward {
    fn name(&self) -> &'static str {
        "calculate_xp_reward"
    }

    fn description(&self) -> &'static str {
        "Calculate the XP reward for slaying a beast given its level and tier and the adventurer's level"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("beastLevel", "Beast level", 1, MAX_LEVEL),
            FieldSpec::integer("beastTier", "Beast tier, 1 strongest", TIER_MIN, TIER_MAX),
            FieldSpec::integer("adventurerLevel", "Adventurer level", 1, MAX_LEVEL),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, _data: &GameDataClient) -> GameResult<Value> {
        let args: XpArgs = parse_args(args)?;
        to_result(&calculate_xp_reward(
            args.beast_level,
            args.beast_tier,
            args.adventurer_level,
        ))
    }
}

/// Percentage chance to escape a beast.
pub struct CalculateFleeChance;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FleeArgs {
    dexterity: u32,
    adventurer_level: u32,
    beast_level: u32,
}

impl Tool for CalculateFleeChance {
    fn name(&self) -> &'static str {
        "calculate_flee_chance"
    }

    fn description(&self) -> &'static str {
        "Calculate the percentage chance to flee a beast from dexterity and both levels"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("dexterity", "Adventurer dexterity", 0, MAX_ATTRIBUTE),
            FieldSpec::integer("adventurerLevel", "Adventurer level", 1, MAX_LEVEL),
            FieldSpec::integer("beastLevel", "Beast level", 1, MAX_LEVEL),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, _data: &GameDataClient) -> GameResult<Value> {
        let args: FleeArgs = parse_args(args)?;
        to_result(&calculate_flee_chance(
            args.dexterity,
            args.adventurer_level,
            args.beast_level,
        ))
    }
}

/// Stat upgrades earned and still available.
pub struct CalculateStatUpgrades;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatUpgradeArgs {
    level: u32,
    used_upgrades: u32,
}

impl Tool for CalculateStatUpgrades {
    fn name(&self) -> &'static str {
        "calculate_stat_upgrades"
    }

    fn description(&self) -> &'static str {
        "Calculate how many stat upgrades an adventurer has earned and has left at a level"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("level", "Current adventurer level", 1, MAX_LEVEL),
            FieldSpec::integer("usedUpgrades", "Upgrades already spent", 0, MAX_LEVEL - 1)
                .default_int(0),
        ];
        FIELDS
    }

    fn check(&self, args: &Map<String, Value>) -> Vec<FieldError> {
        let level = args.get("level").and_then(Value::as_i64).unwrap_or(1);
        let used = args.get("usedUpgrades").and_then(Value::as_i64).unwrap_or(0);
        if used > level - 1 {
            vec![FieldError::new(
                "usedUpgrades",
                format!("must not exceed level - 1 ({}) (got {})", level - 1, used),
            )]
        } else {
            Vec::new()
        }
    }

    fn execute(&self, args: Map<String, Value>, _data: &GameDataClient) -> GameResult<Value> {
        let args: StatUpgradeArgs = parse_args(args)?;
        to_result(&calculate_stat_upgrades(args.level, args.used_upgrades))
    }
}

/// Market price of an item, with affordability.
pub struct CalculateMarketPrice;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketArgs {
    tier: u8,
    item_type: MarketCategory,
    gold: Option<u32>,
}

impl Tool for CalculateMarketPrice {
    fn name(&self) -> &'static str {
        "calculate_market_price"
    }

    fn description(&self) -> &'static str {
        "Calculate an item's market price from tier and category, and whether the given gold covers it"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("tier", "Item tier, 1 strongest", TIER_MIN, TIER_MAX),
            FieldSpec::one_of("itemType", "Market category", MarketCategory::NAMES),
            FieldSpec::integer("gold", "Gold the adventurer holds", 0, MAX_GOLD).optional(),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, _data: &GameDataClient) -> GameResult<Value> {
        let args: MarketArgs = parse_args(args)?;
        to_result(&calculate_market_price(args.tier, args.item_type, args.gold))
    }
}

/// Seeded estimate of fighting a beast to the death.
pub struct SimulateCombat {
    default_trials: u32,
}

impl SimulateCombat {
    /// `default_trials` applies when a call omits `trials`.
    pub fn new(default_trials: u32) -> Self {
        Self {
            default_trials: default_trials.clamp(1, MAX_SIMULATION_TRIALS),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimulationArgs {
    health: u32,
    strength: u32,
    weapon_item_id: Option<u64>,
    weapon_damage: Option<u32>,
    armor: u32,
    crit_chance: u32,
    beast_id: u64,
    beast_level: u32,
    trials: Option<u32>,
    seed: u64,
}

impl Tool for SimulateCombat {
    fn name(&self) -> &'static str {
        "simulate_combat"
    }

    fn description(&self) -> &'static str {
        "Estimate win rate, fight length and damage taken against a beast with a seeded simulation"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("health", "Adventurer health", 1, MAX_COMBAT_VALUE),
            FieldSpec::integer("strength", "Adventurer strength", 0, MAX_ATTRIBUTE),
            FieldSpec::integer("weaponItemId", "Equipped weapon item id (1-101)", 1, MAX_ENTITY_ID)
                .optional(),
            FieldSpec::integer(
                "weaponDamage",
                "Weapon damage, for weapons not described by an item id",
                0,
                MAX_COMBAT_VALUE,
            )
            .optional(),
            FieldSpec::integer("armor", "Armor against the beast's attack type", 0, MAX_COMBAT_VALUE)
                .default_int(0),
            FieldSpec::integer("critChance", "Percent chance of a critical strike", 0, 100)
                .default_int(0),
            FieldSpec::integer("beastId", "Beast id (1-75)", 1, MAX_ENTITY_ID),
            FieldSpec::integer("beastLevel", "Beast level", 1, MAX_LEVEL),
            FieldSpec::integer("trials", "Number of fights to simulate", 1, MAX_SIMULATION_TRIALS as i64)
                .optional(),
            FieldSpec::integer("seed", "Random seed", 0, i64::MAX).default_int(0),
        ];
        FIELDS
    }

    /// Exactly one of `weaponItemId` and `weaponDamage`; a known item id must
    /// name a weapon.
    fn check(&self, args: &Map<String, Value>) -> Vec<FieldError> {
        let item_id = args.get("weaponItemId").and_then(Value::as_u64);
        let has_damage = args.contains_key("weaponDamage");

        match (item_id, has_damage) {
            (None, false) => vec![FieldError::new(
                "weaponItemId",
                "is required unless weaponDamage is given",
            )],
            (Some(_), true) => vec![FieldError::new(
                "weaponDamage",
                "must not be combined with weaponItemId",
            )],
            (Some(id), false) => match item_template(id) {
                Some(item) if !item.item_type.is_weapon() => vec![FieldError::new(
                    "weaponItemId",
                    format!("item {} ({}) is not a weapon", id, item.name),
                )],
                _ => Vec::new(),
            },
            (None, true) => Vec::new(),
        }
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: SimulationArgs = parse_args(args)?;
        let weapon_damage = match (args.weapon_item_id, args.weapon_damage) {
            (Some(id), _) => match data.item(id) {
                Some(item) => item.damage.unwrap_or(0),
                None => return Ok(not_found("Item", id)),
            },
            (None, damage) => damage.unwrap_or(0),
        };
        let beast = match data.beast(args.beast_id, args.beast_level) {
            Some(beast) => beast,
            None => return Ok(not_found("Beast", args.beast_id)),
        };

        let params = SimulationParams {
            adventurer_health: args.health,
            strength: args.strength,
            weapon_damage,
            armor: args.armor,
            crit_chance: args.crit_chance,
            trials: args.trials.unwrap_or(self.default_trials),
            seed: args.seed,
        };
        to_result(&simulate_combat(&params, &beast))
    }
}
