//! Tool dispatch through the registry and the MCP wrapper.

use death_mountain::{
    Adventurer, AdventurerSource, AdventurerStats, GameDataClient, GameError, GameResult,
    McpServer, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn payload(result: &Value) -> Value {
    serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
}

#[test]
fn test_every_tool_advertises_its_required_fields() {
    let registry = ToolRegistry::default();
    for definition in registry.definitions() {
        let schema = &definition.input_schema;
        let properties = schema["properties"].as_object().unwrap();
        for required in schema["required"].as_array().unwrap() {
            assert!(
                properties.contains_key(required.as_str().unwrap()),
                "{} requires undeclared field {}",
                definition.name,
                required
            );
        }
    }
}

#[test]
fn test_validation_reports_every_bad_field() {
    let registry = ToolRegistry::default();
    let result = registry.call(
        "calculate_flee_chance",
        &json!({"dexterity": -1, "adventurerLevel": "high"}),
        &GameDataClient::default(),
    );

    let errors = match result {
        Err(GameError::Validation(errors)) => errors,
        other => panic!("expected validation error, got {:?}", other),
    };
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, vec!["dexterity", "adventurerLevel", "beastLevel"]);
}

#[test]
fn test_non_object_arguments_rejected() {
    let registry = ToolRegistry::default();
    let result = registry.call("get_item", &json!([1, 2]), &GameDataClient::default());
    assert!(matches!(result, Err(GameError::Validation(_))));
}

#[test]
fn test_lookup_miss_is_a_normal_result() {
    let server = McpServer::new(ToolRegistry::default(), GameDataClient::default());

    for (tool, args) in [
        ("get_adventurer", json!({"adventurerId": 1})),
        ("get_beast", json!({"beastId": 76})),
        ("get_item", json!({"itemId": 102})),
        ("get_obstacle", json!({"obstacleId": 1000})),
    ] {
        let result = server.call_tool(tool, &args).unwrap();
        assert_eq!(result["isError"], false, "{}", tool);
        assert_eq!(payload(&result)["found"], false, "{}", tool);
    }
}

#[test]
fn test_invalid_arguments_are_tool_errors() {
    let server = McpServer::new(ToolRegistry::default(), GameDataClient::default());
    let result = server
        .call_tool("calculate_stat_upgrades", &json!({"level": 0}))
        .unwrap();

    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Invalid arguments:"));
    assert!(text.contains("level"));
}

#[test]
fn test_unknown_tool_is_an_error() {
    let server = McpServer::new(ToolRegistry::default(), GameDataClient::default());
    assert!(matches!(
        server.call_tool("loot_chest", &json!({})),
        Err(GameError::UnknownTool(_))
    ));
}

#[test]
fn test_simulation_is_reproducible_through_tools() {
    let server = McpServer::new(ToolRegistry::with_default_tools(200), GameDataClient::default());
    let args = json!({"health": 60, "strength": 8, "weaponDamage": 6, "armor": 2,
                      "critChance": 25, "beastId": 3, "beastLevel": 4, "seed": 1234});

    let first = payload(&server.call_tool("simulate_combat", &args).unwrap());
    let second = payload(&server.call_tool("simulate_combat", &args).unwrap());
    assert_eq!(first, second);
    assert_eq!(first["trials"], 200);
    assert_eq!(
        first["wins"].as_u64().unwrap() + first["losses"].as_u64().unwrap(),
        200
    );
}

/// Source that synthesizes adventurers on demand, standing in for a live feed.
struct GeneratedSource;

impl AdventurerSource for GeneratedSource {
    fn adventurer(&self, id: u64) -> GameResult<Option<Adventurer>> {
        if id % 2 == 1 {
            return Ok(None);
        }
        Ok(Some(Adventurer {
            id,
            owner: "0xfeed".to_string(),
            name: format!("Runner {}", id),
            health: 100,
            xp: 16,
            level: 4,
            stats: AdventurerStats::default(),
            gold: 40,
            beast_health: 0,
            stat_upgrades_available: 3,
            created_at: 1_700_000_000,
            last_action_at: 1_700_000_000,
        }))
    }

    fn source_name(&self) -> &'static str {
        "generated"
    }
}

#[test]
fn test_custom_adventurer_source_behind_client() {
    let data = GameDataClient::new(Arc::new(GeneratedSource));
    assert_eq!(data.adventurer_source_name(), "generated");
    let server = McpServer::new(ToolRegistry::default(), data);

    let found = payload(&server.call_tool("get_adventurer", &json!({"adventurerId": 8})).unwrap());
    assert_eq!(found["found"], true);
    assert_eq!(found["adventurer"]["name"], "Runner 8");

    let missing = payload(&server.call_tool("get_adventurer", &json!({"adventurerId": 9})).unwrap());
    assert_eq!(missing["found"], false);
}
