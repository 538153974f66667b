//! # Death Mountain MCP
//!
//! Game-data lookups and deterministic combat math for the Death Mountain
//! roguelike, exposed to AI agents over the Model Context Protocol.
//!
//! ## Architecture Overview
//!
//! The crate is layered, each layer only depending on the ones below it:
//!
//! - **Data**: static beast, item and obstacle tables plus the read-only
//!   adventurer source, wrapped by [`GameDataClient`]
//! - **Mechanics**: pure formula functions for damage, XP, flee chance,
//!   stat upgrades, market pricing and tier-derived attributes
//! - **Tools**: named, schema-validated operations over the two layers above
//! - **Server**: JSON-RPC 2.0 handler speaking MCP over stdio or HTTP
//!
//! ## MCP Integration
//!
//! Every tool publishes a JSON Schema generated from the same field table
//! that validates its arguments, so the schema an agent sees is exactly the
//! contract that is enforced.

pub mod data;
pub mod mechanics;
pub mod server;
pub mod tools;

pub use data::*;
pub use mechanics::*;
pub use server::*;
pub use tools::*;

/// Core error type for the Death Mountain tool server.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Tool arguments failed validation
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationErrors),

    /// No tool is registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Adventurer data could not be loaded
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport failed to start or serve
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;

/// Version information for the server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration constants.
pub mod config {
    /// MCP protocol revision this server speaks
    pub const PROTOCOL_VERSION: &str = "2024-11-05";

    /// Name reported in the `initialize` handshake
    pub const SERVER_NAME: &str = "death-mountain-mcp";

    /// Default bind host for the HTTP transport
    pub const DEFAULT_HTTP_HOST: [u8; 4] = [127, 0, 0, 1];

    /// Default bind port for the HTTP transport
    pub const DEFAULT_HTTP_PORT: u16 = 3030;

    /// Default number of HTTP worker threads
    pub const DEFAULT_HTTP_THREADS: usize = 2;

    /// Default number of fights per combat simulation
    pub const DEFAULT_SIMULATION_TRIALS: u32 = 1000;

    /// Upper bound on fights per combat simulation
    pub const MAX_SIMULATION_TRIALS: u32 = 100_000;

    /// Rounds after which a simulated fight is called a loss
    pub const MAX_SIMULATION_ROUNDS: u32 = 2048;
}
