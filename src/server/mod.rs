//! # Server Module
//!
//! Model Context Protocol endpoint: a JSON-RPC 2.0 handler answering the MCP
//! handshake, tool listing and tool calls, plus the transports that feed it.

pub mod settings;
pub mod transport;

pub use settings::*;
pub use transport::*;

use crate::config::{PROTOCOL_VERSION, SERVER_NAME};
use crate::data::{GameDataClient, InMemorySource};
use crate::tools::ToolRegistry;
use crate::{GameError, GameResult, VERSION};
use jsonrpc_core::{IoHandler, Params};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Parameters of a `tools/call` request.
#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// MCP server state shared by every request.
///
/// Cloning is cheap; clones share the registry and data client.
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    data: GameDataClient,
}

impl McpServer {
    /// Creates a server over the given tools and data.
    pub fn new(registry: ToolRegistry, data: GameDataClient) -> Self {
        Self {
            registry: Arc::new(registry),
            data,
        }
    }

    /// Builds the server described by a configuration, loading the adventurer
    /// snapshot if one is configured.
    pub fn from_config(config: &ServerConfig) -> GameResult<Self> {
        let source = match &config.adventurer_snapshot {
            Some(path) => InMemorySource::load_snapshot(path)?,
            None => {
                log::warn!("No adventurer snapshot configured; adventurer lookups will miss");
                InMemorySource::new()
            }
        };
        let registry = ToolRegistry::with_default_tools(config.simulation_trials);
        log::info!("Registered {} tools", registry.len());
        Ok(Self::new(registry, GameDataClient::new(Arc::new(source))))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Result of the `initialize` handshake.
    pub fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": VERSION,
            }
        })
    }

    /// Result of `tools/list`.
    pub fn list_tools(&self) -> GameResult<Value> {
        Ok(json!({ "tools": serde_json::to_value(self.registry.definitions())? }))
    }

    /// Runs a tool and wraps the outcome as MCP content.
    ///
    /// Tool failures, including invalid arguments, come back as a result with
    /// `isError: true` so the agent can read and correct them. Only an unknown
    /// tool name is a protocol error.
    pub fn call_tool(&self, name: &str, arguments: &Value) -> GameResult<Value> {
        match self.registry.call(name, arguments, &self.data) {
            Ok(result) => Ok(text_content(serde_json::to_string_pretty(&result)?, false)),
            Err(GameError::UnknownTool(name)) => Err(GameError::UnknownTool(name)),
            Err(GameError::Validation(errors)) => {
                log::info!("Rejected {} call: {}", name, errors);
                Ok(text_content(format!("Invalid arguments: {}", errors), true))
            }
            Err(e) => {
                log::error!("Tool {} failed: {}", name, e);
                Ok(text_content(e.to_string(), true))
            }
        }
    }

    /// Builds the JSON-RPC handler exposing the MCP methods.
    pub fn io_handler(&self) -> IoHandler {
        let mut io = IoHandler::new();

        let server = self.clone();
        io.add_sync_method("initialize", move |params: Params| {
            let params: Value = params.into();
            if let Some(client) = params.get("clientInfo") {
                log::info!(
                    "Client connected: {} {}",
                    client["name"].as_str().unwrap_or("unknown"),
                    client["version"].as_str().unwrap_or("")
                );
            }
            Ok(server.initialize_result())
        });

        io.add_notification("notifications/initialized", |_params: Params| {
            log::debug!("Client finished initialization");
        });

        io.add_sync_method("ping", |_params: Params| Ok(json!({})));

        let server = self.clone();
        io.add_sync_method("tools/list", move |_params: Params| {
            server.list_tools().map_err(rpc_error)
        });

        let server = self.clone();
        io.add_sync_method("tools/call", move |params: Params| {
            let call: CallParams = params.parse()?;
            server
                .call_tool(&call.name, &call.arguments)
                .map_err(rpc_error)
        });

        io
    }
}

fn text_content(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

/// Maps crate errors onto JSON-RPC errors.
fn rpc_error(error: GameError) -> jsonrpc_core::Error {
    match error {
        GameError::UnknownTool(_) | GameError::Validation(_) => {
            jsonrpc_core::Error::invalid_params(error.to_string())
        }
        other => {
            log::error!("Internal error: {}", other);
            jsonrpc_core::Error::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(ToolRegistry::default(), GameDataClient::default())
    }

    fn request(io: &IoHandler, body: Value) -> Value {
        let response = io
            .handle_request_sync(&body.to_string())
            .expect("expected a response");
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_initialize_handshake() {
        let io = server().io_handler();
        let response = request(
            &io,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": PROTOCOL_VERSION,
                              "clientInfo": {"name": "agent", "version": "1.0"}}}),
        );
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn test_notification_has_no_response() {
        let io = server().io_handler();
        let body = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(io.handle_request_sync(&body.to_string()).is_none());
    }

    #[test]
    fn test_tools_list() {
        let io = server().io_handler();
        let response = request(&io, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 12);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[test]
    fn test_tools_call_success() {
        let io = server().io_handler();
        let response = request(
            &io,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "calculate_stat_upgrades",
                              "arguments": {"level": 7, "usedUpgrades": 3}}}),
        );
        let result = &response["result"];
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["available"], 3);
    }

    #[test]
    fn test_tools_call_invalid_arguments_is_tool_error() {
        let io = server().io_handler();
        let response = request(
            &io,
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                   "params": {"name": "calculate_market_price",
                              "arguments": {"tier": 6, "itemType": "Ring"}}}),
        );
        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("tier: must be between 1 and 5 (got 6)"));
    }

    #[test]
    fn test_tools_call_unknown_tool_is_rpc_error() {
        let io = server().io_handler();
        let response = request(
            &io,
            json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call",
                   "params": {"name": "open_chest"}}),
        );
        assert_eq!(response["error"]["code"], -32602);
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("open_chest"));
    }

    #[test]
    fn test_tools_call_missing_name() {
        let io = server().io_handler();
        let response = request(
            &io,
            json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call", "params": {}}),
        );
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn test_async_handling_matches_sync() {
        let io = server().io_handler();
        let body = json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call",
                          "params": {"name": "get_beast", "arguments": {"beastId": 29, "level": 5}}})
        .to_string();

        let async_response = tokio_test::block_on(io.handle_request(&body));
        assert_eq!(async_response, io.handle_request_sync(&body));
    }

    #[test]
    fn test_ping() {
        let io = server().io_handler();
        let response = request(&io, json!({"jsonrpc": "2.0", "id": 7, "method": "ping"}));
        assert_eq!(response["result"], json!({}));
    }
}
