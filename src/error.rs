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
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while declaring a command (src/command.rs, src/task.rs).
#[derive(Error, Debug)]
pub enum ShimError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
}

/// Errors related to settings resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Config file not found: {0}")]
  FileNotFound(PathBuf),

  #[error("Failed to extract settings: {0}")]
  Extract(#[from] Box<figment::Error>),
}

/// Errors raised while running a resolved command (src/exec.rs).
#[derive(Error, Debug)]
pub enum ExecError {
  #[error("Failed to spawn '{executable}'")]
  Spawn {
    executable: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to wait for '{executable}'")]
  Wait {
    executable: String,
    #[source]
    source: std::io::Error,
  },

  #[error("'{executable}' was terminated by a signal")]
  Terminated { executable: String },

  #[error("'{executable}' exited with code {code}, accepted codes: {accepted:?}")]
  UnacceptableExitCode {
    executable: String,
    code: i32,
    accepted: Vec<i32>,
  },
}
