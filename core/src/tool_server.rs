// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::mcp::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability, INVALID_PARAMS,
    INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
};
use crate::{
    EntropySource, RandomAsciiTool, RandomFloatTool, RandomIntTool, UniformSource,
};
use log::{debug, warn};
use serde_json::{json, Value};

const INSTRUCTIONS: &str = "Use the random_int, random_float and random_ascii tools to get \
                            cryptographically secure random values.";

/// Stateless MCP dispatch over the three random-value tools.
///
/// Each call is an independent synchronous computation; the only shared
/// collaborator is the entropy source, which is safe for concurrent use.
pub struct ToolServer<E: EntropySource> {
    name: String,
    version: String,
    uniform: UniformSource<E>,
}

impl<E: EntropySource> ToolServer<E> {
    pub fn new(name: &str, version: &str, entropy: E) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            uniform: UniformSource::new(entropy),
        }
    }

    /// Handles one raw JSON-RPC message. Returns the serialized response,
    /// or `None` for notifications and anything else that must not be
    /// answered.
    pub fn handle_raw(&self, body: &[u8]) -> Option<String> {
        let message: Value = match serde_json::from_slice(body) {
            Ok(message) => message,
            Err(err) => {
                warn!("unparseable message: {}", err);
                let response = JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("parse error: {}", err),
                );
                return serde_json::to_string(&response).ok();
            }
        };
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(request) => request,
            Err(err) => {
                warn!("malformed request: {}", err);
                let response = JsonRpcResponse::failure(
                    Value::Null,
                    INVALID_REQUEST,
                    format!("invalid request: {}", err),
                );
                return serde_json::to_string(&response).ok();
            }
        };

        let response = self.handle_request(request)?;
        serde_json::to_string(&response).ok()
    }

    fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("dispatching method '{}'", request.method);

        // Notifications carry no id and expect no response.
        let id = request.id?;

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                id,
                INVALID_REQUEST,
                format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.list_tools()),
            "tools/call" => match self.call_tool(request.params) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(message) => JsonRpcResponse::failure(id, INVALID_PARAMS, message),
            },
            method => JsonRpcResponse::failure(
                id,
                METHOD_NOT_FOUND,
                format!("method '{}' not found", method),
            ),
        };
        Some(response)
    }

    fn initialize(&self) -> Value {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            capabilities: ServerCapabilities {
                tools: ToolsCapability {},
            },
            server_info: ServerInfo {
                name: self.name.clone(),
                version: self.version.clone(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        };
        serde_json::to_value(result).unwrap_or_default()
    }

    fn list_tools(&self) -> Value {
        let result = ListToolsResult {
            tools: vec![
                RandomIntTool::<E>::descriptor(),
                RandomFloatTool::<E>::descriptor(),
                RandomAsciiTool::<E>::descriptor(),
            ],
        };
        serde_json::to_value(result).unwrap_or_default()
    }

    fn call_tool(&self, params: Option<Value>) -> Result<Value, String> {
        let params: CallToolParams = match params {
            Some(params) => {
                serde_json::from_value(params).map_err(|err| format!("invalid params: {}", err))?
            }
            None => return Err("missing params".to_string()),
        };
        let arguments = params.arguments.unwrap_or_else(|| json!({}));

        let name = params.name.as_str();
        let result: CallToolResult = if name == RandomIntTool::<E>::NAME {
            RandomIntTool::new(&self.uniform).call(arguments)
        } else if name == RandomFloatTool::<E>::NAME {
            RandomFloatTool::new(&self.uniform).call(arguments)
        } else if name == RandomAsciiTool::<E>::NAME {
            RandomAsciiTool::new(&self.uniform).call(arguments)
        } else {
            return Err(format!("unknown tool '{}'", name));
        };
        serde_json::to_value(result).map_err(|err| format!("unserializable result: {}", err))
    }
}
