//! # Lookup Tools
//!
//! Read-only game-data queries. Unknown ids produce a `found: false` result
//! instead of an error.

use super::{parse_args, FieldSpec, Tool};
use crate::data::{BeastFilter, BeastType, GameDataClient, ItemFilter, ItemSlot, ItemType};
use crate::mechanics::{MAX_TIER, MIN_TIER};
use crate::GameResult;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const MAX_LEVEL: i64 = 255;
pub const MAX_ENTITY_ID: i64 = u32::MAX as i64;

const TIER_MIN: i64 = MIN_TIER as i64;
const TIER_MAX: i64 = MAX_TIER as i64;

pub(crate) fn not_found(kind: &str, id: u64) -> Value {
    json!({
        "found": false,
        "message": format!("{} {} not found", kind, id),
    })
}

/// Fetches an adventurer record from the indexer snapshot.
pub struct GetAdventurer;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdventurerArgs {
    adventurer_id: u64,
}

impl Tool for GetAdventurer {
    fn name(&self) -> &'static str {
        "get_adventurer"
    }

    fn description(&self) -> &'static str {
        "Get an adventurer's stats, gold, level and pending stat upgrades by id"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::integer(
            "adventurerId",
            "Adventurer token id",
            1,
            i64::MAX,
        )];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: AdventurerArgs = parse_args(args)?;
        Ok(match data.adventurer(args.adventurer_id)? {
            Some(adventurer) => json!({ "found": true, "adventurer": adventurer }),
            None => not_found("Adventurer", args.adventurer_id),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeveledLookupArgs {
    #[serde(alias = "beastId", alias = "obstacleId")]
    id: u64,
    level: u32,
}

/// Fetches a beast with its health and gold reward at a level.
pub struct GetBeast;

impl Tool for GetBeast {
    fn name(&self) -> &'static str {
        "get_beast"
    }

    fn description(&self) -> &'static str {
        "Get a beast's tier, type, health and gold reward at a given level"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("beastId", "Beast id (1-75)", 1, MAX_ENTITY_ID),
            FieldSpec::integer("level", "Beast level", 1, MAX_LEVEL).default_int(1),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: LeveledLookupArgs = parse_args(args)?;
        Ok(match data.beast(args.id, args.level) {
            Some(beast) => json!({ "found": true, "beast": beast }),
            None => not_found("Beast", args.id),
        })
    }
}

/// Fetches a loot item with its derived damage or armor.
pub struct GetItem;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemArgs {
    item_id: u64,
}

impl Tool for GetItem {
    fn name(&self) -> &'static str {
        "get_item"
    }

    fn description(&self) -> &'static str {
        "Get a loot item's tier, type, slot and derived damage or armor"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::integer(
            "itemId",
            "Item id (1-101)",
            1,
            MAX_ENTITY_ID,
        )];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: ItemArgs = parse_args(args)?;
        Ok(match data.item(args.item_id) {
            Some(item) => json!({ "found": true, "item": item }),
            None => not_found("Item", args.item_id),
        })
    }
}

/// Fetches an obstacle with its damage at a level.
pub struct GetObstacle;

impl Tool for GetObstacle {
    fn name(&self) -> &'static str {
        "get_obstacle"
    }

    fn description(&self) -> &'static str {
        "Get an obstacle's tier, damage type, avoid stat and damage at a given level"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("obstacleId", "Obstacle id (1-75)", 1, MAX_ENTITY_ID),
            FieldSpec::integer("level", "Adventurer level when encountered", 1, MAX_LEVEL)
                .default_int(1),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: LeveledLookupArgs = parse_args(args)?;
        Ok(match data.obstacle(args.id, args.level) {
            Some(obstacle) => json!({ "found": true, "obstacle": obstacle }),
            None => not_found("Obstacle", args.id),
        })
    }
}

/// Lists beast table entries, optionally filtered.
pub struct ListBeasts;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListBeastsArgs {
    tier: Option<u8>,
    beast_type: Option<BeastType>,
}

impl Tool for ListBeasts {
    fn name(&self) -> &'static str {
        "list_beasts"
    }

    fn description(&self) -> &'static str {
        "List beasts, optionally filtered by tier and beast type"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("tier", "Beast tier, 1 strongest", TIER_MIN, TIER_MAX).optional(),
            FieldSpec::one_of("beastType", "Beast family", BeastType::NAMES).optional(),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: ListBeastsArgs = parse_args(args)?;
        let beasts = data.beasts(BeastFilter {
            tier: args.tier,
            beast_type: args.beast_type,
        });
        Ok(json!({ "count": beasts.len(), "beasts": beasts }))
    }
}

/// Lists loot items, optionally filtered.
pub struct ListItems;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItemsArgs {
    tier: Option<u8>,
    item_type: Option<ItemType>,
    slot: Option<ItemSlot>,
}

impl Tool for ListItems {
    fn name(&self) -> &'static str {
        "list_items"
    }

    fn description(&self) -> &'static str {
        "List loot items, optionally filtered by tier, item type and slot"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::integer("tier", "Item tier, 1 strongest", TIER_MIN, TIER_MAX).optional(),
            FieldSpec::one_of("itemType", "Item type", ItemType::NAMES).optional(),
            FieldSpec::one_of("slot", "Equipment slot", ItemSlot::NAMES).optional(),
        ];
        FIELDS
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value> {
        let args: ListItemsArgs = parse_args(args)?;
        let items = data.items(ItemFilter {
            tier: args.tier,
            item_type: args.item_type,
            slot: args.slot,
        });
        Ok(json!({ "count": items.len(), "items": items }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Adventurer, AdventurerStats, InMemorySource};
    use crate::ToolRegistry;
    use std::sync::Arc;

    fn client_with_adventurer() -> GameDataClient {
        let adventurer = Adventurer {
            id: 42,
            owner: "0x0123".to_string(),
            name: "Brienne".to_string(),
            health: 90,
            xp: 49,
            level: 7,
            stats: AdventurerStats {
                strength: 6,
                dexterity: 3,
                ..AdventurerStats::default()
            },
            gold: 120,
            beast_health: 0,
            stat_upgrades_available: 1,
            created_at: 1_700_000_000,
            last_action_at: 1_700_003_600,
        };
        let source = InMemorySource::from_adventurers(vec![adventurer]).unwrap();
        GameDataClient::new(Arc::new(source))
    }

    #[test]
    fn test_get_adventurer_found_and_missing() {
        let registry = ToolRegistry::default();
        let data = client_with_adventurer();

        let found = registry
            .call("get_adventurer", &json!({"adventurerId": 42}), &data)
            .unwrap();
        assert_eq!(found["found"], true);
        assert_eq!(found["adventurer"]["name"], "Brienne");
        assert_eq!(found["adventurer"]["stats"]["strength"], 6);

        let missing = registry
            .call("get_adventurer", &json!({"adventurerId": 43}), &data)
            .unwrap();
        assert_eq!(missing["found"], false);
        assert_eq!(missing["message"], "Adventurer 43 not found");
    }

    #[test]
    fn test_get_beast_default_level() {
        let registry = ToolRegistry::default();
        let result = registry
            .call("get_beast", &json!({"beastId": 75}), &GameDataClient::default())
            .unwrap();
        assert_eq!(result["beast"]["name"], "Skeleton");
        assert_eq!(result["beast"]["level"], 1);
        assert_eq!(result["beast"]["health"], 12);
        assert_eq!(result["beast"]["goldReward"], 1);
    }

    #[test]
    fn test_get_beast_miss_is_not_an_error() {
        let registry = ToolRegistry::default();
        let result = registry
            .call("get_beast", &json!({"beastId": 99}), &GameDataClient::default())
            .unwrap();
        assert_eq!(result["found"], false);
    }

    #[test]
    fn test_get_obstacle_at_level() {
        let registry = ToolRegistry::default();
        let result = registry
            .call(
                "get_obstacle",
                &json!({"obstacleId": 51, "level": 3}),
                &GameDataClient::default(),
            )
            .unwrap();
        assert_eq!(result["obstacle"]["name"], "Collapsing Ceiling");
        assert_eq!(result["obstacle"]["damageType"], "Bludgeon");
        assert_eq!(result["obstacle"]["avoidStat"], "Intelligence");
        assert_eq!(result["obstacle"]["damage"], 15);
    }

    #[test]
    fn test_get_item() {
        let registry = ToolRegistry::default();
        let result = registry
            .call("get_item", &json!({"itemId": 77}), &GameDataClient::default())
            .unwrap();
        assert_eq!(result["item"]["name"], "Holy Chestplate");
        assert_eq!(result["item"]["armor"], 10);
        assert!(result["item"].get("damage").is_none());
    }

    #[test]
    fn test_list_filters() {
        let registry = ToolRegistry::default();
        let data = GameDataClient::default();

        let hunters = registry
            .call("list_beasts", &json!({"beastType": "Hunter", "tier": 1}), &data)
            .unwrap();
        assert_eq!(hunters["count"], 5);

        let metal_hands = registry
            .call("list_items", &json!({"itemType": "Metal", "slot": "Hand"}), &data)
            .unwrap();
        assert_eq!(metal_hands["count"], 5);

        let bad = registry.call("list_items", &json!({"slot": "Tail"}), &data);
        assert!(bad.is_err());
    }
}
