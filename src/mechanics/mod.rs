//! # Mechanics Module
//!
//! Deterministic game formulas: damage, XP rewards, flee chance, stat
//! upgrades, market pricing and tier-derived attributes.
//!
//! Every function here is pure and total over its validated input range.
//! Fractional multipliers are carried as integer tenths or percentages so
//! that floors are exact; the float values in results are for display only.

pub mod combat;
pub mod market;
pub mod progression;
pub mod simulation;
pub mod tiers;

pub use combat::*;
pub use market::*;
pub use progression::*;
pub use simulation::*;
pub use tiers::tier_bonus;

/// Lowest tier number (strongest).
pub const MIN_TIER: u8 = 1;

/// Highest tier number (weakest).
pub const MAX_TIER: u8 = 5;
