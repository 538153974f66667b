//! # Combat Simulation
//!
//! Seeded Monte-Carlo estimate of an adventurer fighting a beast to the death,
//! built on the strike formula from [`super::combat`].

use super::combat::{calculate_damage, MIN_DAMAGE};
use crate::config::MAX_SIMULATION_ROUNDS;
use crate::data::Beast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Adventurer loadout and simulation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationParams {
    pub adventurer_health: u32,
    pub strength: u32,
    pub weapon_damage: u32,
    /// Armor reducing each beast strike
    pub armor: u32,
    /// Percent chance that an adventurer strike is critical
    pub crit_chance: u32,
    pub trials: u32,
    pub seed: u64,
}

/// Aggregate outcome of all simulated fights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub beast: Beast,
    pub trials: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub average_rounds: f64,
    pub average_damage_taken: f64,
    pub seed: u64,
}

struct FightOutcome {
    won: bool,
    rounds: u32,
    damage_taken: u32,
}

/// Runs `params.trials` independent fights against `beast`.
///
/// The adventurer strikes first each round. Identical inputs and seed always
/// produce the identical report.
pub fn simulate_combat(params: &SimulationParams, beast: &Beast) -> SimulationReport {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let beast_strike = beast
        .attack_power()
        .saturating_sub(params.armor)
        .max(MIN_DAMAGE);

    let mut wins = 0u32;
    let mut total_rounds = 0u64;
    let mut total_damage = 0u64;

    for _ in 0..params.trials {
        let outcome = fight(params, beast.health, beast_strike, &mut rng);
        if outcome.won {
            wins += 1;
        }
        total_rounds += u64::from(outcome.rounds);
        total_damage += u64::from(outcome.damage_taken);
    }

    let trials = params.trials.max(1) as f64;
    log::debug!(
        "Simulated {} fights against {} (level {}): {} wins",
        params.trials,
        beast.name,
        beast.level,
        wins
    );

    SimulationReport {
        beast: beast.clone(),
        trials: params.trials,
        wins,
        losses: params.trials - wins,
        win_rate: f64::from(wins) / trials,
        average_rounds: total_rounds as f64 / trials,
        average_damage_taken: total_damage as f64 / trials,
        seed: params.seed,
    }
}

fn fight(params: &SimulationParams, beast_health: u32, beast_strike: u32, rng: &mut StdRng) -> FightOutcome {
    let mut adventurer_health = params.adventurer_health;
    let mut beast_health = beast_health;
    let mut damage_taken = 0u32;

    for round in 1..=MAX_SIMULATION_ROUNDS {
        let critical = rng.gen_range(0..100u32) < params.crit_chance;
        let strike = calculate_damage(params.strength, params.weapon_damage, 0, critical);
        beast_health = beast_health.saturating_sub(strike.final_damage);
        if beast_health == 0 {
            return FightOutcome {
                won: true,
                rounds: round,
                damage_taken,
            };
        }

        let dealt = beast_strike.min(adventurer_health);
        adventurer_health -= dealt;
        damage_taken += dealt;
        if adventurer_health == 0 {
            return FightOutcome {
                won: false,
                rounds: round,
                damage_taken,
            };
        }
    }

    FightOutcome {
        won: false,
        rounds: MAX_SIMULATION_ROUNDS,
        damage_taken,
    }
}
