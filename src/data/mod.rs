//! # Data Module
//!
//! Game entities and the client that resolves them.
//!
//! Beasts, items and obstacles come from the static tables in [`tables`];
//! every computed field on them is a pure function of tier and level. Adventurers
//! are owned by the indexer and reach this crate read-only through an
//! [`AdventurerSource`].

pub mod source;
pub mod tables;

pub use source::*;
pub use tables::*;

use crate::mechanics::tiers;
use crate::GameResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Beast family. Each family fights with one attack type and wears one armor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeastType {
    Magical,
    Hunter,
    Brute,
}

impl BeastType {
    pub const ALL: [BeastType; 3] = [BeastType::Magical, BeastType::Hunter, BeastType::Brute];
    pub const NAMES: &'static [&'static str] = &["Magical", "Hunter", "Brute"];

    pub fn name(self) -> &'static str {
        match self {
            BeastType::Magical => "Magical",
            BeastType::Hunter => "Hunter",
            BeastType::Brute => "Brute",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn attack_type(self) -> AttackType {
        match self {
            BeastType::Magical => AttackType::Magic,
            BeastType::Hunter => AttackType::Blade,
            BeastType::Brute => AttackType::Bludgeon,
        }
    }

    pub fn armor_type(self) -> ArmorType {
        match self {
            BeastType::Magical => ArmorType::Cloth,
            BeastType::Hunter => ArmorType::Hide,
            BeastType::Brute => ArmorType::Metal,
        }
    }
}

/// Damage type dealt by weapons, beasts and obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Magic,
    Blade,
    Bludgeon,
}

/// Armor material worn by adventurers and beasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorType {
    Cloth,
    Hide,
    Metal,
}

/// Loot item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Magic,
    Blade,
    Bludgeon,
    Cloth,
    Hide,
    Metal,
    Necklace,
    Ring,
}

impl ItemType {
    pub const ALL: [ItemType; 8] = [
        ItemType::Magic,
        ItemType::Blade,
        ItemType::Bludgeon,
        ItemType::Cloth,
        ItemType::Hide,
        ItemType::Metal,
        ItemType::Necklace,
        ItemType::Ring,
    ];
    pub const NAMES: &'static [&'static str] = &[
        "Magic", "Blade", "Bludgeon", "Cloth", "Hide", "Metal", "Necklace", "Ring",
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemType::Magic => "Magic",
            ItemType::Blade => "Blade",
            ItemType::Bludgeon => "Bludgeon",
            ItemType::Cloth => "Cloth",
            ItemType::Hide => "Hide",
            ItemType::Metal => "Metal",
            ItemType::Necklace => "Necklace",
            ItemType::Ring => "Ring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Weapon types deal damage.
    pub fn is_weapon(self) -> bool {
        matches!(self, ItemType::Magic | ItemType::Blade | ItemType::Bludgeon)
    }

    /// Armor types provide armor when worn in an armor slot.
    pub fn is_armor(self) -> bool {
        matches!(self, ItemType::Cloth | ItemType::Hide | ItemType::Metal)
    }
}

/// Equipment slot an item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl ItemSlot {
    pub const ALL: [ItemSlot; 8] = [
        ItemSlot::Weapon,
        ItemSlot::Chest,
        ItemSlot::Head,
        ItemSlot::Waist,
        ItemSlot::Foot,
        ItemSlot::Hand,
        ItemSlot::Neck,
        ItemSlot::Ring,
    ];
    pub const NAMES: &'static [&'static str] = &[
        "Weapon", "Chest", "Head", "Waist", "Foot", "Hand", "Neck", "Ring",
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Chest => "Chest",
            ItemSlot::Head => "Head",
            ItemSlot::Waist => "Waist",
            ItemSlot::Foot => "Foot",
            ItemSlot::Hand => "Hand",
            ItemSlot::Neck => "Neck",
            ItemSlot::Ring => "Ring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn is_armor_slot(self) -> bool {
        matches!(
            self,
            ItemSlot::Chest | ItemSlot::Head | ItemSlot::Waist | ItemSlot::Foot | ItemSlot::Hand
        )
    }
}

/// Obstacle family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleType {
    Magical,
    Sharp,
    Crushing,
}

impl ObstacleType {
    pub fn damage_type(self) -> AttackType {
        match self {
            ObstacleType::Magical => AttackType::Magic,
            ObstacleType::Sharp => AttackType::Blade,
            ObstacleType::Crushing => AttackType::Bludgeon,
        }
    }
}

/// Adventurer attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Dexterity,
    Vitality,
    Intelligence,
    Wisdom,
    Charisma,
}

/// A beast encountered at a specific level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beast {
    pub id: u8,
    pub name: String,
    pub tier: u8,
    pub beast_type: BeastType,
    pub attack_type: AttackType,
    pub armor_type: ArmorType,
    pub level: u32,
    pub health: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_reward: Option<u32>,
}

impl Beast {
    /// Builds a beast from its table entry at the given level, without a gold reward.
    pub fn new(template: &BeastTemplate, level: u32) -> Self {
        Self {
            id: template.id,
            name: template.name.to_string(),
            tier: template.tier,
            beast_type: template.beast_type,
            attack_type: template.beast_type.attack_type(),
            armor_type: template.beast_type.armor_type(),
            level,
            health: tiers::beast_health(template.tier, level),
            gold_reward: None,
        }
    }

    /// Fills in the gold paid out for slaying this beast.
    pub fn with_gold_reward(mut self) -> Self {
        self.gold_reward = Some(tiers::beast_gold_reward(self.tier, self.level));
        self
    }

    /// Damage this beast deals per strike before armor.
    pub fn attack_power(&self) -> u32 {
        tiers::beast_attack(self.tier, self.level)
    }
}

/// A loot item with its tier-derived combat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u8,
    pub name: String,
    pub tier: u8,
    pub item_type: ItemType,
    pub slot: ItemSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,
}

impl Item {
    pub fn new(template: &ItemTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name.to_string(),
            tier: template.tier,
            item_type: template.item_type,
            slot: template.slot,
            damage: tiers::item_damage(template.tier, template.item_type),
            armor: tiers::item_armor(template.tier, template.item_type, template.slot),
        }
    }
}

/// An obstacle encountered at a specific level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacle {
    pub id: u8,
    pub name: String,
    pub tier: u8,
    pub obstacle_type: ObstacleType,
    pub damage_type: AttackType,
    pub avoid_stat: Stat,
    pub level: u32,
    pub damage: u32,
}

impl Obstacle {
    pub fn new(template: &ObstacleTemplate, level: u32) -> Self {
        Self {
            id: template.id,
            name: template.name.to_string(),
            tier: template.tier,
            obstacle_type: template.obstacle_type,
            damage_type: template.obstacle_type.damage_type(),
            avoid_stat: Stat::Intelligence,
            level,
            damage: tiers::obstacle_damage(template.tier, level),
        }
    }
}

/// The six adventurer attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventurerStats {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
}

/// An adventurer as exported by the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventurer {
    pub id: u64,
    pub owner: String,
    pub name: String,
    pub health: u32,
    pub xp: u32,
    pub level: u32,
    pub stats: AdventurerStats,
    pub gold: u32,
    /// Health of the beast currently being fought, zero outside combat
    #[serde(default)]
    pub beast_health: u32,
    #[serde(default)]
    pub stat_upgrades_available: u32,
    /// Unix seconds
    pub created_at: u64,
    /// Unix seconds
    pub last_action_at: u64,
}

impl Adventurer {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn in_combat(&self) -> bool {
        self.beast_health > 0
    }
}

/// Optional filters for [`GameDataClient::beasts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeastFilter {
    pub tier: Option<u8>,
    pub beast_type: Option<BeastType>,
}

/// Optional filters for [`GameDataClient::items`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub tier: Option<u8>,
    pub item_type: Option<ItemType>,
    pub slot: Option<ItemSlot>,
}

/// Resolves game entities from the static tables and the adventurer source.
///
/// Cloning is cheap; clones share the same adventurer source.
#[derive(Clone)]
pub struct GameDataClient {
    adventurers: Arc<dyn AdventurerSource>,
}

impl std::fmt::Debug for GameDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameDataClient")
            .field("adventurers", &self.adventurers.source_name())
            .finish()
    }
}

impl Default for GameDataClient {
    fn default() -> Self {
        Self::new(Arc::new(InMemorySource::new()))
    }
}

impl GameDataClient {
    /// Creates a client backed by the given adventurer source.
    ///
    /// # Examples
    ///
    /// ```
    /// use death_mountain::GameDataClient;
    ///
    /// let client = GameDataClient::default();
    /// let beast = client.beast(29, 10).unwrap();
    /// assert_eq!(beast.name, "Dragon");
    /// assert_eq!(beast.tier, 1);
    /// ```
    pub fn new(adventurers: Arc<dyn AdventurerSource>) -> Self {
        Self { adventurers }
    }

    pub fn beast(&self, id: u64, level: u32) -> Option<Beast> {
        beast_template(id).map(|t| Beast::new(&t, level).with_gold_reward())
    }

    pub fn item(&self, id: u64) -> Option<Item> {
        item_template(id).map(|t| Item::new(&t))
    }

    pub fn obstacle(&self, id: u64, level: u32) -> Option<Obstacle> {
        obstacle_template(id).map(|t| Obstacle::new(&t, level))
    }

    pub fn adventurer(&self, id: u64) -> GameResult<Option<Adventurer>> {
        self.adventurers.adventurer(id)
    }

    pub fn beasts(&self, filter: BeastFilter) -> Vec<BeastTemplate> {
        all_beasts()
            .filter(|b| filter.tier.map_or(true, |t| b.tier == t))
            .filter(|b| filter.beast_type.map_or(true, |t| b.beast_type == t))
            .collect()
    }

    pub fn items(&self, filter: ItemFilter) -> Vec<Item> {
        ITEMS
            .iter()
            .filter(|i| filter.tier.map_or(true, |t| i.tier == t))
            .filter(|i| filter.item_type.map_or(true, |t| i.item_type == t))
            .filter(|i| filter.slot.map_or(true, |s| i.slot == s))
            .map(Item::new)
            .collect()
    }

    pub fn adventurer_source_name(&self) -> &'static str {
        self.adventurers.source_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beast_lookup() {
        let client = GameDataClient::default();
        let beast = client.beast(1, 5).unwrap();
        assert_eq!(beast.name, "Warlock");
        assert_eq!(beast.beast_type, BeastType::Magical);
        assert_eq!(beast.attack_type, AttackType::Magic);
        assert_eq!(beast.armor_type, ArmorType::Cloth);
        // 10 + 2 * 5 * 5
        assert_eq!(beast.health, 60);
        assert_eq!(beast.gold_reward, Some(12));
    }

    #[test]
    fn test_beast_lookup_miss() {
        let client = GameDataClient::default();
        assert!(client.beast(0, 1).is_none());
        assert!(client.beast(76, 1).is_none());
    }

    #[test]
    fn test_item_derived_values() {
        let client = GameDataClient::default();

        let katana = client.item(42).unwrap();
        assert_eq!(katana.name, "Katana");
        assert_eq!(katana.damage, Some(15));
        assert_eq!(katana.armor, None);

        let helm = client.item(86).unwrap();
        assert_eq!(helm.slot, ItemSlot::Head);
        assert_eq!(helm.armor, Some(2));
        assert_eq!(helm.damage, None);

        let ring = client.item(8).unwrap();
        assert_eq!(ring.damage, None);
        assert_eq!(ring.armor, None);
    }

    #[test]
    fn test_obstacle_lookup() {
        let client = GameDataClient::default();
        let obstacle = client.obstacle(26, 4).unwrap();
        assert_eq!(obstacle.obstacle_type, ObstacleType::Sharp);
        assert_eq!(obstacle.damage_type, AttackType::Blade);
        assert_eq!(obstacle.avoid_stat, Stat::Intelligence);
        assert_eq!(obstacle.damage, 20);
        assert!(client.obstacle(100, 1).is_none());
    }

    #[test]
    fn test_beast_filters() {
        let client = GameDataClient::default();
        assert_eq!(client.beasts(BeastFilter::default()).len(), 75);

        let tier_one = client.beasts(BeastFilter {
            tier: Some(1),
            beast_type: None,
        });
        assert_eq!(tier_one.len(), 15);

        let brutes = client.beasts(BeastFilter {
            tier: Some(5),
            beast_type: Some(BeastType::Brute),
        });
        assert_eq!(brutes.len(), 5);
        assert!(brutes.iter().any(|b| b.name == "Skeleton"));
    }

    #[test]
    fn test_item_filters() {
        let client = GameDataClient::default();
        assert_eq!(client.items(ItemFilter::default()).len(), 101);

        let weapons = client.items(ItemFilter {
            slot: Some(ItemSlot::Weapon),
            ..ItemFilter::default()
        });
        assert_eq!(weapons.len(), 18);
        assert!(weapons.iter().all(|w| w.damage.is_some()));
    }

    #[test]
    fn test_enum_names_round_trip() {
        for t in ItemType::ALL {
            assert_eq!(ItemType::from_name(t.name()), Some(t));
        }
        for s in ItemSlot::ALL {
            assert_eq!(ItemSlot::from_name(s.name()), Some(s));
        }
        assert_eq!(BeastType::from_name("Hunter"), Some(BeastType::Hunter));
        assert_eq!(BeastType::from_name("hunter"), None);
    }
}
