//! # Adventurer Sources
//!
//! Read-only access to adventurer records exported by the indexer.

use super::Adventurer;
use crate::mechanics::level_from_xp;
use crate::{GameError, GameResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Trait for anything that can resolve adventurers by id.
///
/// Implementations are shared across transport threads, so they must be
/// `Send + Sync` and never mutate through `&self`.
pub trait AdventurerSource: Send + Sync {
    /// Returns the adventurer, or `None` when the id is unknown.
    fn adventurer(&self, id: u64) -> GameResult<Option<Adventurer>>;

    /// Gets the source name for logging and debugging.
    fn source_name(&self) -> &'static str;
}

/// Indexer export file layout.
#[derive(Debug, Deserialize)]
struct Snapshot {
    adventurers: Vec<Adventurer>,
}

/// Adventurers held in memory, typically loaded from an indexer snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    adventurers: HashMap<u64, Adventurer>,
}

impl InMemorySource {
    /// Creates an empty source; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from adventurer records, rejecting duplicate ids.
    pub fn from_adventurers(adventurers: Vec<Adventurer>) -> GameResult<Self> {
        let mut source = Self::new();
        for adventurer in adventurers {
            let id = adventurer.id;
            if adventurer.level != level_from_xp(adventurer.xp) {
                log::warn!(
                    "Adventurer {} reports level {} but xp {} implies level {}",
                    id,
                    adventurer.level,
                    adventurer.xp,
                    level_from_xp(adventurer.xp)
                );
            }
            if source.adventurers.insert(id, adventurer).is_some() {
                return Err(GameError::DataSource(format!(
                    "duplicate adventurer id {} in snapshot",
                    id
                )));
            }
        }
        Ok(source)
    }

    /// Parses a snapshot document of the form `{"adventurers": [...]}`.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_adventurers(snapshot.adventurers)
    }

    /// Loads a snapshot file written by the indexer export.
    pub fn load_snapshot(path: &Path) -> GameResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json(&json)?;
        log::info!(
            "Loaded {} adventurers from {}",
            source.len(),
            path.display()
        );
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.adventurers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adventurers.is_empty()
    }
}

impl AdventurerSource for InMemorySource {
    fn adventurer(&self, id: u64) -> GameResult<Option<Adventurer>> {
        Ok(self.adventurers.get(&id).cloned())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdventurerStats;

    fn adventurer(id: u64, xp: u32, level: u32) -> Adventurer {
        Adventurer {
            id,
            owner: "0x0456".to_string(),
            name: format!("Adventurer {}", id),
            health: 100,
            xp,
            level,
            stats: AdventurerStats::default(),
            gold: 25,
            beast_health: 0,
            stat_upgrades_available: 0,
            created_at: 1_700_000_000,
            last_action_at: 1_700_000_100,
        }
    }

    #[test]
    fn test_empty_source_misses() {
        let source = InMemorySource::new();
        assert!(source.is_empty());
        assert!(source.adventurer(1).unwrap().is_none());
    }

    #[test]
    fn test_lookup_hit() {
        let source = InMemorySource::from_adventurers(vec![adventurer(7, 16, 4)]).unwrap();
        let found = source.adventurer(7).unwrap().unwrap();
        assert_eq!(found.level, 4);
        assert!(source.adventurer(8).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemorySource::from_adventurers(vec![adventurer(1, 0, 1), adventurer(1, 4, 2)]);
        assert!(matches!(result, Err(GameError::DataSource(_))));
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "adventurers": [{
                "id": 3,
                "owner": "0xabc",
                "name": "Lyra",
                "health": 80,
                "xp": 9,
                "level": 3,
                "stats": {"strength": 4, "dexterity": 2, "vitality": 1,
                          "intelligence": 0, "wisdom": 1, "charisma": 3},
                "gold": 40,
                "createdAt": 1700000000,
                "lastActionAt": 1700000500
            }]
        }"#;
        let source = InMemorySource::from_json(json).unwrap();
        let lyra = source.adventurer(3).unwrap().unwrap();
        assert_eq!(lyra.stats.strength, 4);
        assert_eq!(lyra.beast_health, 0);
        assert!(!lyra.in_combat());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            InMemorySource::from_json("{\"adventurers\": 5}"),
            Err(GameError::Serde(_))
        ));
    }
}
