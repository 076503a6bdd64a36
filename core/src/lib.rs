// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod random_error;
pub use random_error::RandomError;

mod entropy;
pub use entropy::EntropySource;

mod os_entropy;
pub use os_entropy::OsEntropy;

mod uniform_source;
pub use uniform_source::UniformSource;

mod int_generator;
pub use int_generator::IntGenerator;

mod float_generator;
pub use float_generator::FloatGenerator;

mod ascii_generator;
pub use ascii_generator::AsciiGenerator;

mod bound_arg;
pub use bound_arg::BoundArg;

mod random_int_tool;
pub use random_int_tool::RandomIntTool;

mod random_float_tool;
pub use random_float_tool::RandomFloatTool;

mod random_ascii_tool;
pub use random_ascii_tool::RandomAsciiTool;

pub mod mcp;

mod tool_server;
pub use tool_server::ToolServer;
