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
use crate::error::ShimError;
use serde::Serialize;
use std::path::PathBuf;

const WINDOWS_OS_FAMILY: &str = "WINDOWS";

/// The shell family a command is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
  Windows,
  Posix,
}

impl OsFamily {
  /// Classifies a free-form OS name, e.g. "Windows 10", "Linux", "Mac OS X".
  /// Case is folded to upper case, so "wındows" (dotless ı) counts too.
  pub fn from_os_name(os_name: &str) -> Self {
    if os_name.to_uppercase().contains(WINDOWS_OS_FAMILY) {
      OsFamily::Windows
    } else {
      OsFamily::Posix
    }
  }
}

/// A command as declared by a task, before any shell adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  executable: String,
  raw_arguments: Vec<String>,
  os_family: OsFamily,
  success_codes: Option<Vec<i32>>,
}

impl CommandSpec {
  pub fn new(
    executable: impl Into<String>,
    raw_arguments: Vec<String>,
    os_family: OsFamily,
    success_codes: Option<Vec<i32>>,
  ) -> Result<Self, ShimError> {
    let executable = executable.into();
    if executable.trim().is_empty() {
      return Err(ShimError::InvalidArgument(
        "executable must not be empty".to_string(),
      ));
    }

    Ok(CommandSpec {
      executable,
      raw_arguments,
      os_family,
      success_codes,
    })
  }

  pub fn executable(&self) -> &str {
    &self.executable
  }

  pub fn raw_arguments(&self) -> &[String] {
    &self.raw_arguments
  }

  pub fn os_family(&self) -> OsFamily {
    self.os_family
  }

  pub fn success_codes(&self) -> Option<&[i32]> {
    self.success_codes.as_deref()
  }
}

/// Holds the final executable and arguments handed to the process launcher.
///
/// Serialized with the field names a process launcher configuration expects:
/// `executable`, `arguments`, `workingDirectory` and, only when custom codes
/// were requested, `successCodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCommand {
  pub executable: String,

  pub arguments: Vec<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub working_directory: Option<PathBuf>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub success_codes: Option<Vec<i32>>,
}

impl ResolvedCommand {
  /// Exit codes treated as success. Zero only, unless overridden.
  pub fn accepted_codes(&self) -> Vec<i32> {
    self.success_codes.clone().unwrap_or_else(|| vec![0])
  }

  pub fn accepts(&self, code: i32) -> bool {
    match &self.success_codes {
      Some(codes) => codes.contains(&code),
      None => code == 0,
    }
  }
}
