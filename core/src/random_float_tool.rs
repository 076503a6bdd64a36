// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::mcp::{CallToolResult, Tool, ToolAnnotations};
use crate::{BoundArg, EntropySource, FloatGenerator, UniformSource};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RandomFloatArgs {
    #[serde(default)]
    min: BoundArg<f64>,
    #[serde(default)]
    max: BoundArg<f64>,
    #[serde(default = "default_true")]
    include_min: bool,
    #[serde(default = "default_true")]
    include_max: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
struct RandomFloatResponse {
    value: f64,
}

/// The `random_float` tool: a uniform double in an arbitrary range with
/// independently inclusive or exclusive endpoints.
pub struct RandomFloatTool<'a, E: EntropySource> {
    uniform: &'a UniformSource<E>,
}

impl<'a, E: EntropySource> RandomFloatTool<'a, E> {
    pub const NAME: &'static str = "random_float";

    pub fn new(uniform: &'a UniformSource<E>) -> Self {
        Self { uniform }
    }

    pub fn descriptor() -> Tool {
        Tool {
            name: Self::NAME,
            description: "Returns a cryptographically secure random floating-point number. \
                          Optional arguments: min, max, includeMin, includeMax.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "min": { "type": "number" },
                    "max": { "type": "number" },
                    "includeMin": { "type": "boolean", "default": true },
                    "includeMax": { "type": "boolean", "default": true }
                }
            }),
            output_schema: Some(json!({
                "type": "object",
                "properties": {
                    "value": { "type": "number" }
                },
                "required": ["value"]
            })),
            annotations: Some(ToolAnnotations::read_only()),
        }
    }

    pub fn call(&self, arguments: serde_json::Value) -> CallToolResult {
        let args: RandomFloatArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(err) => return failed(&err.to_string()),
        };

        info!(
            "random_float min={:?} max={:?} include_min={} include_max={}",
            args.min, args.max, args.include_min, args.include_max
        );

        let generator = FloatGenerator::new(self.uniform);
        let value = match generator.generate(args.min, args.max, args.include_min, args.include_max)
        {
            Ok(value) => value,
            Err(err) => return failed(&err.to_string()),
        };
        info!("random_float result={}", value);

        let response = RandomFloatResponse { value };
        CallToolResult::success(
            value.to_string(),
            serde_json::to_value(response).unwrap_or_default(),
        )
    }
}

fn failed(message: &str) -> CallToolResult {
    CallToolResult::error(format!("random_float failed: {}", message))
}
