//! # Death Mountain MCP Entry Point
//!
//! Loads configuration, sets up logging, and serves the game tools over the
//! selected transport.

use clap::Parser;
use death_mountain::{
    serve_http, serve_stdio, GameError, GameResult, McpServer, ServerConfig, ToolRegistry,
    Transport,
};
use std::net::SocketAddr;
use std::path::PathBuf;
#[cfg(not(feature = "dev-tools"))]
use log::{error, info};
#[cfg(feature = "dev-tools")]
use tracing::{error, info};

/// Command line arguments for the Death Mountain tool server.
#[derive(Parser, Debug)]
#[command(name = "death-mountain-mcp")]
#[command(about = "MCP server exposing Death Mountain game data and combat math")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Transport to serve on
    #[arg(short, long, value_enum)]
    transport: Option<Transport>,

    /// Bind address for the HTTP transport
    #[arg(long)]
    http_address: Option<SocketAddr>,

    /// Adventurer snapshot exported by the indexer
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the tool definitions as JSON and exit
    #[arg(long)]
    list_tools: bool,
}

fn main() -> GameResult<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    initialize_logging(&config.log_level)?;
    info!("Starting Death Mountain MCP v{}", death_mountain::VERSION);

    if args.list_tools {
        let registry = ToolRegistry::with_default_tools(config.simulation_trials);
        println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        return Ok(());
    }

    let result = run(&config);
    if let Err(e) = &result {
        error!("Server stopped: {}", e);
    }
    result
}

/// Builds the server and blocks on the configured transport.
fn run(config: &ServerConfig) -> GameResult<()> {
    let server = McpServer::from_config(config)?;
    let io = server.io_handler();

    match config.transport {
        Transport::Stdio => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve_stdio(io))
        }
        Transport::Http => {
            info!("Binding HTTP transport on {}", config.http_address);
            serve_http(io, config.http_address, config.http_threads)
        }
    }
}

/// Merges the optional config file with command line overrides.
fn resolve_config(args: &Args) -> GameResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::new(),
    };

    if let Some(transport) = args.transport {
        config.transport = transport;
    }
    if let Some(address) = args.http_address {
        config.http_address = address;
    }
    if let Some(snapshot) = &args.snapshot {
        config.adventurer_snapshot = Some(snapshot.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Initializes logging on stderr; stdout is reserved for protocol traffic.
fn initialize_logging(log_level: &str) -> GameResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level.to_lowercase()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| GameError::InvalidConfig(format!("cannot start logging: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .try_init()
            .map_err(|e| GameError::InvalidConfig(format!("cannot start logging: {}", e)))?;
    }

    Ok(())
}
