// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use random_mcp_core::{OsEntropy, ToolServer};
use serde_json::{json, Value};

fn server() -> ToolServer<OsEntropy> {
    ToolServer::new("random-number-mcp", "0.1.0", OsEntropy)
}

fn roundtrip(server: &ToolServer<OsEntropy>, message: Value) -> Value {
    let reply = server
        .handle_raw(message.to_string().as_bytes())
        .expect("expected a response");
    serde_json::from_str(&reply).expect("response is valid JSON")
}

#[test]
fn test_initialize_reports_protocol_and_server_info() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": { "name": "test-client", "version": "0.0.1" }
            }
        }),
    );

    assert_eq!(response["id"], 1);
    let result = &response["result"];
    assert_eq!(result["protocolVersion"], "2025-03-26");
    assert_eq!(result["serverInfo"]["name"], "random-number-mcp");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["instructions"].as_str().unwrap().contains("random_int"));
}

#[test]
fn test_initialized_notification_gets_no_response() {
    let server = server();
    let message = json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    });
    assert!(server.handle_raw(message.to_string().as_bytes()).is_none());
}

#[test]
fn test_tools_list_reports_all_three_tools() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
    );

    let tools = response["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["random_int", "random_float", "random_ascii"]);
    for tool in tools {
        assert!(tool["inputSchema"].is_object());
        assert!(tool["outputSchema"].is_object());
        assert_eq!(tool["annotations"]["readOnlyHint"], true);
    }
}

#[test]
fn test_tools_call_returns_text_and_structured_content() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "random_int", "arguments": { "min": 1, "max": 1 } }
        }),
    );

    let result = &response["result"];
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "1");
    assert_eq!(result["structuredContent"]["value"], 1);
    assert!(result.get("isError").is_none());
}

#[test]
fn test_tool_failures_are_tool_results_not_protocol_errors() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": { "name": "random_ascii", "arguments": { "length": 0 } }
        }),
    );

    assert!(response.get("error").is_none());
    let result = &response["result"];
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("length must be greater than zero"));
    assert!(result.get("structuredContent").is_none());
}

#[test]
fn test_unknown_tool_is_invalid_params() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": { "name": "random_uuid" }
        }),
    );
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_missing_params_is_invalid_params() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({ "jsonrpc": "2.0", "id": 6, "method": "tools/call" }),
    );
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_unknown_method_is_method_not_found() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({ "jsonrpc": "2.0", "id": 7, "method": "resources/list" }),
    );
    assert_eq!(response["error"]["code"], -32601);
}

#[test]
fn test_ping_returns_an_empty_result() {
    let server = server();
    let response = roundtrip(&server, json!({ "jsonrpc": "2.0", "id": 8, "method": "ping" }));
    assert_eq!(response["result"], json!({}));
}

#[test]
fn test_malformed_json_is_a_parse_error_with_null_id() {
    let server = server();
    let reply = server.handle_raw(b"{ not json").expect("parse errors are answered");
    let response: Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(response["error"]["code"], -32700);
    assert!(response["id"].is_null());
}

#[test]
fn test_json_that_is_not_a_request_is_invalid_request() {
    let server = server();
    let reply = server
        .handle_raw(br#"{"id": 1}"#)
        .expect("malformed requests are answered");
    let response: Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(response["error"]["code"], -32600);
    assert!(response["id"].is_null());
}

#[test]
fn test_wrong_jsonrpc_version_is_invalid_request() {
    let server = server();
    let response = roundtrip(
        &server,
        json!({ "jsonrpc": "1.0", "id": 9, "method": "ping" }),
    );
    assert_eq!(response["error"]["code"], -32600);
}
