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
use crate::builder;
use crate::command::CommandSpec;
use crate::command::OsFamily;
use crate::command::ResolvedCommand;
use crate::config::Settings;
use crate::error::ShimError;
use crate::normalize::normalize_all;

/// Grunt exits with 3 on a failed task and 6 on warnings.
pub const GRUNT_TOLERATED_CODES: [i32; 3] = [0, 3, 6];

const GRUNT_NO_COLOR: &str = "--no-color";
const NPM_NO_COLOR: &str = "--color=false";
const NPM_INSTALL: &str = "install";

/// The kinds of command this tool knows how to declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
  /// Runs a grunt target through the grunt CLI.
  Grunt {
    target: Option<String>,
    options: Vec<String>,
    ignore_task_errors: bool,
  },

  /// Runs `npm install`.
  Npm { options: Vec<String> },

  /// Runs any executable as given.
  Exec {
    executable: String,
    arguments: Vec<String>,
    normalize: bool,
  },
}

impl Task {
  /// Declares the command for this task, before shell adjustment.
  pub fn command_spec(&self, settings: &Settings) -> Result<CommandSpec, ShimError> {
    let os_family = OsFamily::from_os_name(&settings.os_name);

    match self {
      Task::Grunt {
        target,
        options,
        ignore_task_errors,
      } => {
        let mut arguments = Vec::new();
        if let Some(target) = target.as_ref().filter(|t| !t.is_empty()) {
          arguments.push(target.clone());
        }
        if !settings.show_colors {
          arguments.push(GRUNT_NO_COLOR.to_string());
        }
        arguments.extend(normalize_all(options));

        let success_codes = if *ignore_task_errors {
          Some(GRUNT_TOLERATED_CODES.to_vec())
        } else {
          settings.success_codes.clone()
        };

        CommandSpec::new(
          settings.grunt_executable.as_str(),
          arguments,
          os_family,
          success_codes,
        )
      }
      Task::Npm { options } => {
        let mut arguments = vec![NPM_INSTALL.to_string()];
        if !settings.show_colors {
          arguments.push(NPM_NO_COLOR.to_string());
        }
        arguments.extend(normalize_all(options));

        CommandSpec::new(
          settings.npm_executable.as_str(),
          arguments,
          os_family,
          settings.success_codes.clone(),
        )
      }
      Task::Exec {
        executable,
        arguments,
        normalize,
      } => {
        let arguments = if *normalize {
          normalize_all(arguments)
        } else {
          arguments.clone()
        };

        CommandSpec::new(
          executable.as_str(),
          arguments,
          os_family,
          settings.success_codes.clone(),
        )
      }
    }
  }

  /// Declares the command and adjusts it for the configured OS.
  pub fn resolve(&self, settings: &Settings) -> Result<ResolvedCommand, ShimError> {
    tracing::info!("OS Name: {}", settings.os_name);

    let spec = self.command_spec(settings)?;
    Ok(builder::build(&spec, settings.working_directory.as_deref()))
  }
}
