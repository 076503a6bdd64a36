// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::mcp::{CallToolResult, Tool, ToolAnnotations};
use crate::{BoundArg, EntropySource, IntGenerator, RandomError, UniformSource};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RandomIntArgs {
    #[serde(default)]
    min: BoundArg<i64>,
    #[serde(default)]
    max: BoundArg<i64>,
    #[serde(default = "default_true")]
    include_min: bool,
    #[serde(default = "default_true")]
    include_max: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
struct RandomIntResponse {
    value: i64,
}

/// The `random_int` tool: a uniform signed 64-bit integer in an
/// arbitrary range with optional bound exclusion.
pub struct RandomIntTool<'a, E: EntropySource> {
    uniform: &'a UniformSource<E>,
}

impl<'a, E: EntropySource> RandomIntTool<'a, E> {
    pub const NAME: &'static str = "random_int";

    pub fn new(uniform: &'a UniformSource<E>) -> Self {
        Self { uniform }
    }

    pub fn descriptor() -> Tool {
        Tool {
            name: Self::NAME,
            description: "Returns a cryptographically secure random integer. \
                          Optional arguments: min, max, includeMin, includeMax.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "min": { "type": "integer" },
                    "max": { "type": "integer" },
                    "includeMin": { "type": "boolean", "default": true },
                    "includeMax": { "type": "boolean", "default": true }
                }
            }),
            output_schema: Some(json!({
                "type": "object",
                "properties": {
                    "value": { "type": "integer" }
                },
                "required": ["value"]
            })),
            annotations: Some(ToolAnnotations::read_only()),
        }
    }

    pub fn call(&self, arguments: serde_json::Value) -> CallToolResult {
        let args: RandomIntArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(err) => return failed(&err.to_string()),
        };

        info!(
            "random_int min={:?} max={:?} include_min={} include_max={}",
            args.min, args.max, args.include_min, args.include_max
        );

        let value = match self.generate(&args) {
            Ok(value) => value,
            Err(err) => return failed(&err.to_string()),
        };
        info!("random_int result={}", value);

        let response = RandomIntResponse { value };
        CallToolResult::success(
            value.to_string(),
            serde_json::to_value(response).unwrap_or_default(),
        )
    }

    fn generate(&self, args: &RandomIntArgs) -> Result<i64, RandomError> {
        // Exclusion only applies to bounds the caller actually supplied;
        // a default bound has nothing to exclude.
        let adjusted_min = match args.min {
            BoundArg::Provided(min) if !args.include_min => {
                if min == i64::MAX {
                    return Err(RandomError::BoundaryExhausted { bound: "min" });
                }
                min + 1
            }
            _ => args.min.value_or(0),
        };
        let adjusted_max = match args.max {
            BoundArg::Provided(max) if !args.include_max => {
                if max == i64::MIN {
                    return Err(RandomError::BoundaryExhausted { bound: "max" });
                }
                max - 1
            }
            _ => args.max.value_or(i64::MAX),
        };

        IntGenerator::new(self.uniform).generate(adjusted_min, adjusted_max)
    }
}

fn failed(message: &str) -> CallToolResult {
    CallToolResult::error(format!("random_int failed: {}", message))
}
