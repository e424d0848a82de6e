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
use crate::cli::GlobalArgs;
use crate::error::ConfigError;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Settings file picked up from the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gruntshim.toml";

/// Prefix for environment overrides, e.g. `GRUNTSHIM_OS_NAME=Windows`.
pub const ENV_PREFIX: &str = "GRUNTSHIM_";

/// Fully resolved settings shared by every task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
  /// Free-form OS name used to pick the shell family.
  pub os_name: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub working_directory: Option<PathBuf>,

  /// Let grunt/npm print colored output.
  pub show_colors: bool,

  pub grunt_executable: String,

  pub npm_executable: String,

  /// Extra exit codes accepted as success. `None` accepts zero only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub success_codes: Option<Vec<i32>>,
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      os_name: std::env::consts::OS.to_string(),
      working_directory: None,
      show_colors: false,
      grunt_executable: "grunt".to_string(),
      npm_executable: "npm".to_string(),
      success_codes: None,
    }
  }
}

/// Values given explicitly on the command line. Unset fields leave the
/// lower layers alone.
#[derive(Debug, Default, Serialize)]
pub struct SettingsOverrides {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub os_name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub working_directory: Option<PathBuf>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_colors: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub success_codes: Option<Vec<i32>>,
}

impl From<&GlobalArgs> for SettingsOverrides {
  fn from(args: &GlobalArgs) -> Self {
    SettingsOverrides {
      os_name: args.os_name.clone(),
      working_directory: args.working_dir.clone(),
      show_colors: args.show_colors.then_some(true),
      success_codes: (!args.success_codes.is_empty()).then(|| args.success_codes.clone()),
    }
  }
}

impl Settings {
  /// Layers defaults, the config file, `GRUNTSHIM_*` variables and CLI flags,
  /// in that order of increasing precedence.
  pub fn load(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
  ) -> Result<Settings, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));

    figment = match config_path {
      Some(path) => {
        if !path.exists() {
          return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "Loading settings file");
        if path.extension().is_some_and(|ext| ext == "json") {
          figment.merge(Json::file(path))
        } else {
          figment.merge(Toml::file(path))
        }
      }
      None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };

    figment
      .merge(Env::prefixed(ENV_PREFIX))
      .merge(Serialized::defaults(overrides))
      .extract()
      .map_err(|e| ConfigError::Extract(Box::new(e)))
  }
}
