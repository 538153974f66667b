//! # Server Settings
//!
//! Runtime configuration, loaded from an optional JSON file and overridden
//! from the command line.

use crate::config::{
    DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_HTTP_THREADS, DEFAULT_SIMULATION_TRIALS,
    MAX_SIMULATION_TRIALS,
};
use crate::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// How MCP messages reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for the tool server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub transport: Transport,
    /// Bind address for the HTTP transport
    pub http_address: SocketAddr,
    /// HTTP worker threads
    pub http_threads: usize,
    /// Indexer export with adventurer records; none means every lookup misses
    pub adventurer_snapshot: Option<PathBuf>,
    /// Fights per `simulate_combat` call when the caller gives no count
    pub simulation_trials: u32,
    pub log_level: String,
}

impl ServerConfig {
    /// Creates the default configuration: stdio transport, no snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use death_mountain::{ServerConfig, Transport};
    ///
    /// let config = ServerConfig::new();
    /// assert_eq!(config.transport, Transport::Stdio);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            transport: Transport::Stdio,
            http_address: SocketAddr::from((DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT)),
            http_threads: DEFAULT_HTTP_THREADS,
            adventurer_snapshot: None,
            simulation_trials: DEFAULT_SIMULATION_TRIALS,
            log_level: "info".to_string(),
        }
    }

    /// Creates a configuration for tests with small simulations and quiet logs.
    pub fn for_testing() -> Self {
        Self {
            simulation_trials: 50,
            log_level: "warn".to_string(),
            ..Self::new()
        }
    }

    /// Loads a JSON configuration file; omitted keys take their defaults.
    pub fn load(path: &Path) -> GameResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> GameResult<()> {
        if self.http_threads == 0 {
            return Err(GameError::InvalidConfig(
                "httpThreads must be at least 1".to_string(),
            ));
        }
        if self.simulation_trials == 0 || self.simulation_trials > MAX_SIMULATION_TRIALS {
            return Err(GameError::InvalidConfig(format!(
                "simulationTrials must be between 1 and {}",
                MAX_SIMULATION_TRIALS
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(GameError::InvalidConfig(format!(
                "logLevel must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
