// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Gruntshim
//!
//! `gruntshim` turns a declared build command (a grunt target, `npm install`,
//! or any executable) into the command line the host shell can actually
//! launch, and optionally runs it.
//!
//! On Windows commands go through `cmd /C`; elsewhere they are launched
//! directly. Option arguments written as `--option value` are fused into
//! `--option=value` because launchers fed an argument list cut each entry at
//! its first whitespace.
//!
//! ## Core Modules
//!
//! * [`builder`]: `CommandSpec` -> `ResolvedCommand` for the target OS family.
//! * [`normalize`]: The whitespace normalization of option arguments.
//! * [`task`]: The `Task` variants (grunt, npm, exec) and their argument rules.
//! * [`exec`]: Runs a `ResolvedCommand` and checks its exit code.
//! * [`config`]: Layered `Settings` (defaults, file, env, CLI flags).
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`command`]: The `OsFamily`, `CommandSpec` and `ResolvedCommand` types.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod builder;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod normalize;
pub mod task;
