//! # Static Game Tables
//!
//! Beasts, loot items and obstacles as fixed at contract deployment.
//!
//! Beasts and obstacles come in three families of 25, ordered five per tier
//! from tier 1 down to tier 5, so tier and family are derived from the id.

use super::{BeastType, ItemSlot, ItemType, ObstacleType};
use serde::Serialize;

/// Number of beasts across all families.
pub const BEAST_COUNT: u8 = 75;

/// Number of obstacles across all families.
pub const OBSTACLE_COUNT: u8 = 75;

/// Number of loot items.
pub const ITEM_COUNT: u8 = 101;

const FAMILY_SIZE: usize = 25;
const PER_TIER: usize = 5;

const MAGICAL_BEASTS: [&str; FAMILY_SIZE] = [
    "Warlock", "Typhon", "Jiangshi", "Anansi", "Basilisk",
    "Gorgon", "Kitsune", "Lich", "Chimera", "Wendigo",
    "Rakshasa", "Werewolf", "Banshee", "Draugr", "Vampire",
    "Goblin", "Ghoul", "Wraith", "Sprite", "Kappa",
    "Fairy", "Leprechaun", "Kelpie", "Pixie", "Gnome",
];

const HUNTER_BEASTS: [&str; FAMILY_SIZE] = [
    "Griffin", "Manticore", "Phoenix", "Dragon", "Minotaur",
    "Qilin", "Ammit", "Nue", "Skinwalker", "Chupacabra",
    "Weretiger", "Wyvern", "Roc", "Harpy", "Pegasus",
    "Hippogriff", "Fenrir", "Jaguar", "Satori", "Dire Wolf",
    "Bear", "Wolf", "Mantis", "Spider", "Rat",
];

const BRUTE_BEASTS: [&str; FAMILY_SIZE] = [
    "Kraken", "Colossus", "Balrog", "Leviathan", "Tarrasque",
    "Titan", "Nephilim", "Behemoth", "Hydra", "Juggernaut",
    "Oni", "Jotunn", "Ettin", "Cyclops", "Giant",
    "Nemean Lion", "Berserker", "Yeti", "Golem", "Ent",
    "Troll", "Bigfoot", "Ogre", "Orc", "Skeleton",
];

const MAGICAL_OBSTACLES: [&str; FAMILY_SIZE] = [
    "Demonic Altar", "Vortex Of Despair", "Eldritch Barrier", "Soul Trap", "Phantom Vortex",
    "Ectoplasm Barrier", "Spectral Chains", "Infernal Pact", "Arcane Explosion", "Hypnotic Essence",
    "Mischievous Sprites", "Soul Draining Statue", "Petrifying Gaze", "Mesmerizing Mirror", "Bewitched Gate",
    "Haunted Bells", "Cursed Tome", "Ghostly Whispers", "Spectral Fog", "Pulsating Rune",
    "Glowing Glyph", "Flickering Lights", "Strange Symbols", "Eerie Echoes", "Whispering Wind",
];

const SHARP_OBSTACLES: [&str; FAMILY_SIZE] = [
    "Pendulum Blades", "Icy Razor Winds", "Acidic Thorns", "Dragons Breath", "Pendulum Scythe",
    "Flame Jet", "Piercing Ice Darts", "Glass Sand Storm", "Poisoned Dart Wall", "Spinning Blade Wheel",
    "Poison Dart", "Spiked Pit", "Hidden Arrow", "Razor Wire", "Swinging Axe",
    "Barbed Net", "Rusty Blades", "Jagged Rocks", "Falling Shards", "Bladed Floor",
    "Thorn Bush", "Splintered Beam", "Sharp Reeds", "Broken Glass", "Loose Nails",
];

const CRUSHING_OBSTACLES: [&str; FAMILY_SIZE] = [
    "Collapsing Ceiling", "Crushing Walls", "Rockslide", "Tumbling Boulders", "Swinging Logs",
    "Unstable Cliff", "Toppling Statue", "Falling Chandelier", "Hammer Trap", "Avalanche",
    "Rolling Barrel", "Battering Ram", "Sinking Floor", "Hidden Club", "Swinging Mace",
    "Falling Bricks", "Collapsing Bridge", "Heavy Door", "Crumbling Pillar", "Loose Stones",
    "Falling Bucket", "Swinging Lantern", "Slippery Slope", "Low Beam", "Pebble Shower",
];

/// Static beast entry; health and rewards depend on the encounter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeastTemplate {
    pub id: u8,
    pub name: &'static str,
    pub tier: u8,
    pub beast_type: BeastType,
}

/// Static loot item entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    pub id: u8,
    pub name: &'static str,
    pub tier: u8,
    pub item_type: ItemType,
    pub slot: ItemSlot,
}

/// Static obstacle entry; damage depends on the encounter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleTemplate {
    pub id: u8,
    pub name: &'static str,
    pub tier: u8,
    pub obstacle_type: ObstacleType,
}

/// Splits a 1-based family id into (family index, tier, name index).
fn family_position(id: u64, count: u8) -> Option<(usize, u8, usize)> {
    if id == 0 || id > u64::from(count) {
        return None;
    }
    let index = (id - 1) as usize;
    let family = index / FAMILY_SIZE;
    let within = index % FAMILY_SIZE;
    Some((family, (within / PER_TIER) as u8 + 1, within))
}

/// Looks up a beast by id (1-75).
pub fn beast_template(id: u64) -> Option<BeastTemplate> {
    let (family, tier, within) = family_position(id, BEAST_COUNT)?;
    let (names, beast_type) = match family {
        0 => (&MAGICAL_BEASTS, BeastType::Magical),
        1 => (&HUNTER_BEASTS, BeastType::Hunter),
        _ => (&BRUTE_BEASTS, BeastType::Brute),
    };
    Some(BeastTemplate {
        id: id as u8,
        name: names[within],
        tier,
        beast_type,
    })
}

/// Iterates every beast in id order.
pub fn all_beasts() -> impl Iterator<Item = BeastTemplate> {
    (1..=u64::from(BEAST_COUNT)).filter_map(beast_template)
}

/// Looks up an obstacle by id (1-75).
pub fn obstacle_template(id: u64) -> Option<ObstacleTemplate> {
    let (family, tier, within) = family_position(id, OBSTACLE_COUNT)?;
    let (names, obstacle_type) = match family {
        0 => (&MAGICAL_OBSTACLES, ObstacleType::Magical),
        1 => (&SHARP_OBSTACLES, ObstacleType::Sharp),
        _ => (&CRUSHING_OBSTACLES, ObstacleType::Crushing),
    };
    Some(ObstacleTemplate {
        id: id as u8,
        name: names[within],
        tier,
        obstacle_type,
    })
}

/// Looks up a loot item by id (1-101).
pub fn item_template(id: u64) -> Option<ItemTemplate> {
    if id == 0 || id > u64::from(ITEM_COUNT) {
        return None;
    }
    ITEMS.get((id - 1) as usize).copied()
}

const fn item(id: u8, name: &'static str, tier: u8, item_type: ItemType, slot: ItemSlot) -> ItemTemplate {
    ItemTemplate {
        id,
        name,
        tier,
        item_type,
        slot,
    }
}

use super::ItemSlot as S;
use super::ItemType as T;

/// All loot items, indexed by `id - 1`.
pub const ITEMS: [ItemTemplate; ITEM_COUNT as usize] = [
    // Jewelry
    item(1, "Pendant", 1, T::Necklace, S::Neck),
    item(2, "Necklace", 1, T::Necklace, S::Neck),
    item(3, "Amulet", 1, T::Necklace, S::Neck),
    item(4, "Silver Ring", 2, T::Ring, S::Ring),
    item(5, "Bronze Ring", 3, T::Ring, S::Ring),
    item(6, "Platinum Ring", 1, T::Ring, S::Ring),
    item(7, "Titanium Ring", 1, T::Ring, S::Ring),
    item(8, "Gold Ring", 1, T::Ring, S::Ring),
    // Magic weapons
    item(9, "Ghost Wand", 1, T::Magic, S::Weapon),
    item(10, "Grave Wand", 2, T::Magic, S::Weapon),
    item(11, "Bone Wand", 3, T::Magic, S::Weapon),
    item(12, "Wand", 5, T::Magic, S::Weapon),
    item(13, "Grimoire", 1, T::Magic, S::Weapon),
    item(14, "Chronicle", 2, T::Magic, S::Weapon),
    item(15, "Tome", 3, T::Magic, S::Weapon),
    item(16, "Book", 5, T::Magic, S::Weapon),
    // Cloth
    item(17, "Divine Robe", 1, T::Cloth, S::Chest),
    item(18, "Silk Robe", 2, T::Cloth, S::Chest),
    item(19, "Linen Robe", 3, T::Cloth, S::Chest),
    item(20, "Robe", 4, T::Cloth, S::Chest),
    item(21, "Shirt", 5, T::Cloth, S::Chest),
    item(22, "Crown", 1, T::Cloth, S::Head),
    item(23, "Divine Hood", 2, T::Cloth, S::Head),
    item(24, "Silk Hood", 3, T::Cloth, S::Head),
    item(25, "Linen Hood", 4, T::Cloth, S::Head),
    item(26, "Hood", 5, T::Cloth, S::Head),
    item(27, "Brightsilk Sash", 1, T::Cloth, S::Waist),
    item(28, "Silk Sash", 2, T::Cloth, S::Waist),
    item(29, "Wool Sash", 3, T::Cloth, S::Waist),
    item(30, "Linen Sash", 4, T::Cloth, S::Waist),
    item(31, "Sash", 5, T::Cloth, S::Waist),
    item(32, "Divine Slippers", 1, T::Cloth, S::Foot),
    item(33, "Silk Slippers", 2, T::Cloth, S::Foot),
    item(34, "Wool Shoes", 3, T::Cloth, S::Foot),
    item(35, "Linen Shoes", 4, T::Cloth, S::Foot),
    item(36, "Shoes", 5, T::Cloth, S::Foot),
    item(37, "Divine Gloves", 1, T::Cloth, S::Hand),
    item(38, "Silk Gloves", 2, T::Cloth, S::Hand),
    item(39, "Wool Gloves", 3, T::Cloth, S::Hand),
    item(40, "Linen Gloves", 4, T::Cloth, S::Hand),
    item(41, "Gloves", 5, T::Cloth, S::Hand),
    // Blades
    item(42, "Katana", 1, T::Blade, S::Weapon),
    item(43, "Falchion", 2, T::Blade, S::Weapon),
    item(44, "Scimitar", 3, T::Blade, S::Weapon),
    item(45, "Long Sword", 4, T::Blade, S::Weapon),
    item(46, "Short Sword", 5, T::Blade, S::Weapon),
    // Hide
    item(47, "Demon Husk", 1, T::Hide, S::Chest),
    item(48, "Dragonskin Armor", 2, T::Hide, S::Chest),
    item(49, "Studded Leather Armor", 3, T::Hide, S::Chest),
    item(50, "Hard Leather Armor", 4, T::Hide, S::Chest),
    item(51, "Leather Armor", 5, T::Hide, S::Chest),
    item(52, "Demon Crown", 1, T::Hide, S::Head),
    item(53, "Dragons Crown", 2, T::Hide, S::Head),
    item(54, "War Cap", 3, T::Hide, S::Head),
    item(55, "Leather Cap", 4, T::Hide, S::Head),
    item(56, "Cap", 5, T::Hide, S::Head),
    item(57, "Demonhide Belt", 1, T::Hide, S::Waist),
    item(58, "Dragonskin Belt", 2, T::Hide, S::Waist),
    item(59, "Studded Leather Belt", 3, T::Hide, S::Waist),
    item(60, "Hard Leather Belt", 4, T::Hide, S::Waist),
    item(61, "Leather Belt", 5, T::Hide, S::Waist),
    item(62, "Demonhide Boots", 1, T::Hide, S::Foot),
    item(63, "Dragonskin Boots", 2, T::Hide, S::Foot),
    item(64, "Studded Leather Boots", 3, T::Hide, S::Foot),
    item(65, "Hard Leather Boots", 4, T::Hide, S::Foot),
    item(66, "Leather Boots", 5, T::Hide, S::Foot),
    item(67, "Demons Hands", 1, T::Hide, S::Hand),
    item(68, "Dragonskin Gloves", 2, T::Hide, S::Hand),
    item(69, "Studded Leather Gloves", 3, T::Hide, S::Hand),
    item(70, "Hard Leather Gloves", 4, T::Hide, S::Hand),
    item(71, "Leather Gloves", 5, T::Hide, S::Hand),
    // Bludgeons
    item(72, "Warhammer", 1, T::Bludgeon, S::Weapon),
    item(73, "Quarterstaff", 2, T::Bludgeon, S::Weapon),
    item(74, "Maul", 3, T::Bludgeon, S::Weapon),
    item(75, "Mace", 4, T::Bludgeon, S::Weapon),
    item(76, "Club", 5, T::Bludgeon, S::Weapon),
    // Metal
    item(77, "Holy Chestplate", 1, T::Metal, S::Chest),
    item(78, "Ornate Chestplate", 2, T::Metal, S::Chest),
    item(79, "Plate Mail", 3, T::Metal, S::Chest),
    item(80, "Chain Mail", 4, T::Metal, S::Chest),
    item(81, "Ring Mail", 5, T::Metal, S::Chest),
    item(82, "Ancient Helm", 1, T::Metal, S::Head),
    item(83, "Ornate Helm", 2, T::Metal, S::Head),
    item(84, "Great Helm", 3, T::Metal, S::Head),
    item(85, "Full Helm", 4, T::Metal, S::Head),
    item(86, "Helm", 5, T::Metal, S::Head),
    item(87, "Ornate Belt", 1, T::Metal, S::Waist),
    item(88, "War Belt", 2, T::Metal, S::Waist),
    item(89, "Plated Belt", 3, T::Metal, S::Waist),
    item(90, "Mesh Belt", 4, T::Metal, S::Waist),
    item(91, "Heavy Belt", 5, T::Metal, S::Waist),
    item(92, "Holy Greaves", 1, T::Metal, S::Foot),
    item(93, "Ornate Greaves", 2, T::Metal, S::Foot),
    item(94, "Greaves", 3, T::Metal, S::Foot),
    item(95, "Chain Boots", 4, T::Metal, S::Foot),
    item(96, "Heavy Boots", 5, T::Metal, S::Foot),
    item(97, "Holy Gauntlets", 1, T::Metal, S::Hand),
    item(98, "Ornate Gauntlets", 2, T::Metal, S::Hand),
    item(99, "Gauntlets", 3, T::Metal, S::Hand),
    item(100, "Chain Gloves", 4, T::Metal, S::Hand),
    item(101, "Heavy Gloves", 5, T::Metal, S::Hand),
];
