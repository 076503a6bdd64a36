// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::mcp::{CallToolResult, Tool, ToolAnnotations};
use crate::{AsciiGenerator, EntropySource, UniformSource};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
struct RandomAsciiArgs {
    length: i64,
}

#[derive(Debug, Serialize)]
struct RandomAsciiResponse {
    value: String,
}

/// The `random_ascii` tool: a fixed-length string of uniformly chosen
/// printable ASCII characters.
pub struct RandomAsciiTool<'a, E: EntropySource> {
    uniform: &'a UniformSource<E>,
}

impl<'a, E: EntropySource> RandomAsciiTool<'a, E> {
    pub const NAME: &'static str = "random_ascii";

    pub fn new(uniform: &'a UniformSource<E>) -> Self {
        Self { uniform }
    }

    pub fn descriptor() -> Tool {
        Tool {
            name: Self::NAME,
            description: "Returns a cryptographically secure random ASCII string. \
                          Required argument: length.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "length": { "type": "integer", "minimum": 1 }
                },
                "required": ["length"]
            }),
            output_schema: Some(json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string" }
                },
                "required": ["value"]
            })),
            annotations: Some(ToolAnnotations::read_only()),
        }
    }

    pub fn call(&self, arguments: serde_json::Value) -> CallToolResult {
        let args: RandomAsciiArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(err) => return failed(&err.to_string()),
        };

        info!("random_ascii length={}", args.length);

        let value = match AsciiGenerator::new(self.uniform).generate(args.length) {
            Ok(value) => value,
            Err(err) => return failed(&err.to_string()),
        };

        let response = RandomAsciiResponse {
            value: value.clone(),
        };
        CallToolResult::success(value, serde_json::to_value(response).unwrap_or_default())
    }
}

fn failed(message: &str) -> CallToolResult {
    CallToolResult::error(format!("random_ascii failed: {}", message))
}
