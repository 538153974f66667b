//! # Market Pricing
//!
//! Prices for items offered by the market between encounters.

use super::{MAX_TIER, MIN_TIER};
use serde::{Deserialize, Serialize};

/// Item category as priced by the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketCategory {
    Weapon,
    Armor,
    Shield,
    Ring,
    Amulet,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 5] = [
        MarketCategory::Weapon,
        MarketCategory::Armor,
        MarketCategory::Shield,
        MarketCategory::Ring,
        MarketCategory::Amulet,
    ];
    pub const NAMES: &'static [&'static str] = &["Weapon", "Armor", "Shield", "Ring", "Amulet"];

    pub fn name(self) -> &'static str {
        match self {
            MarketCategory::Weapon => "Weapon",
            MarketCategory::Armor => "Armor",
            MarketCategory::Shield => "Shield",
            MarketCategory::Ring => "Ring",
            MarketCategory::Amulet => "Amulet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Price multiplier as a percentage.
    pub fn multiplier_percent(self) -> u32 {
        match self {
            MarketCategory::Weapon => 120,
            MarketCategory::Armor => 100,
            MarketCategory::Shield => 80,
            MarketCategory::Ring | MarketCategory::Amulet => 150,
        }
    }
}

/// Base price for an item of the given tier before the category multiplier.
///
/// Tiers run from 1 to 5. Debug builds panic outside that range; release
/// builds price such tiers at zero.
pub fn base_price(tier: u8) -> u32 {
    debug_assert!(
        (MIN_TIER..=MAX_TIER).contains(&tier),
        "tier {} outside {}..={}",
        tier,
        MIN_TIER,
        MAX_TIER
    );
    match tier {
        1 => 10,
        2 => 25,
        3 => 50,
        4 => 100,
        5 => 250,
        _ => 0,
    }
}

/// Market quote, with affordability when the buyer's gold is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub tier: u8,
    pub item_type: MarketCategory,
    pub base_price: u32,
    pub type_multiplier: f64,
    pub final_price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_afford: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_needed: Option<u32>,
}

/// Prices an item and, if `gold` is given, checks whether it is affordable.
///
/// # Examples
///
/// ```
/// use death_mountain::{calculate_market_price, MarketCategory};
///
/// let quote = calculate_market_price(5, MarketCategory::Ring, Some(100));
/// assert_eq!(quote.final_price, 375);
/// assert_eq!(quote.can_afford, Some(false));
/// assert_eq!(quote.gold_needed, Some(275));
/// ```
pub fn calculate_market_price(tier: u8, item_type: MarketCategory, gold: Option<u32>) -> MarketPrice {
    let base_price = base_price(tier);
    let percent = item_type.multiplier_percent();
    let final_price = base_price * percent / 100;

    MarketPrice {
        tier,
        item_type,
        base_price,
        type_multiplier: f64::from(percent) / 100.0,
        final_price,
        gold,
        can_afford: gold.map(|g| g >= final_price),
        gold_needed: gold.map(|g| final_price.saturating_sub(g)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_five_ring_unaffordable() {
        let quote = calculate_market_price(5, MarketCategory::Ring, Some(100));
        assert_eq!(quote.base_price, 250);
        assert_eq!(quote.type_multiplier, 1.5);
        assert_eq!(quote.final_price, 375);
        assert_eq!(quote.can_afford, Some(false));
        assert_eq!(quote.gold_needed, Some(275));
    }

    #[test]
    fn test_weapon_multiplier_exact() {
        // 25 * 1.2 must floor to 30, not 29
        assert_eq!(calculate_market_price(2, MarketCategory::Weapon, None).final_price, 30);
        assert_eq!(calculate_market_price(1, MarketCategory::Shield, None).final_price, 8);
    }

    #[test]
    fn test_every_tier_priced_explicitly() {
        let prices: Vec<u32> = (MIN_TIER..=MAX_TIER).map(base_price).collect();
        assert_eq!(prices, vec![10, 25, 50, 100, 250]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "tier 6 outside 1..=5")]
    fn test_tier_six_not_priced_as_tier_five() {
        base_price(6);
    }

    #[test]
    fn test_affordable_when_gold_covers() {
        let quote = calculate_market_price(3, MarketCategory::Armor, Some(50));
        assert_eq!(quote.can_afford, Some(true));
        assert_eq!(quote.gold_needed, Some(0));
    }

    #[test]
    fn test_no_gold_no_affordability() {
        let quote = calculate_market_price(4, MarketCategory::Amulet, None);
        assert_eq!(quote.final_price, 150);
        assert!(quote.can_afford.is_none());
        assert!(quote.gold_needed.is_none());

        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("canAfford").is_none());
        assert_eq!(json["itemType"], "Amulet");
    }
}
