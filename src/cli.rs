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
use crate::normalize::DEFAULT_REPLACEMENT;
use crate::task::Task;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Builds OS-appropriate command lines for grunt, npm and friends"
)]
pub struct Cli {
  #[command(flatten)]
  pub global: GlobalArgs,

  #[command(subcommand)]
  pub command: Commands,
}

/// Settings overrides accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
  /// Settings file (TOML, or JSON with a `.json` extension).
  /// Defaults to ./gruntshim.toml when present.
  #[arg(long, global = true)]
  pub config: Option<PathBuf>,

  /// OS name used to pick the shell, e.g. "Windows 10" or "Linux".
  #[arg(long, global = true)]
  pub os_name: Option<String>,

  /// Directory the command runs in.
  #[arg(long, global = true)]
  pub working_dir: Option<PathBuf>,

  /// Let grunt/npm print colored output.
  #[arg(long, global = true)]
  pub show_colors: bool,

  /// Exit codes treated as success, comma separated (default: 0).
  #[arg(long, global = true, value_delimiter = ',', allow_negative_numbers = true)]
  pub success_codes: Vec<i32>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Prints the resolved command as JSON without running it.
  Plan {
    #[command(subcommand)]
    task: TaskCommand,
  },

  /// Resolves the command and runs it.
  Run {
    #[command(subcommand)]
    task: TaskCommand,
  },

  /// Joins whitespace-separated option/value pairs, one result per line.
  Normalize {
    /// Separator placed between option name and value.
    #[arg(long, default_value = DEFAULT_REPLACEMENT)]
    replacement: String,

    #[arg(required = true, allow_hyphen_values = true)]
    arguments: Vec<String>,
  },
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
  /// Runs a grunt target.
  Grunt {
    /// Grunt target, e.g. `dist`.
    target: Option<String>,

    /// Treat grunt task failures and warnings (exit codes 3 and 6) as success.
    #[arg(long)]
    ignore_task_errors: bool,

    /// Options passed to grunt after `--`, e.g. `-- "--gruntfile Gruntfile.js"`.
    #[arg(last = true)]
    options: Vec<String>,
  },

  /// Runs `npm install`.
  Npm {
    /// Options passed to npm after `--`.
    #[arg(last = true)]
    options: Vec<String>,
  },

  /// Runs an arbitrary executable.
  Exec {
    /// Join `--option value` arguments into `--option=value`.
    #[arg(long)]
    normalize: bool,

    /// Executable followed by its arguments. Everything after the
    /// executable goes to it verbatim, including flags gruntshim knows.
    #[arg(
      required = true,
      value_name = "COMMAND",
      trailing_var_arg = true,
      allow_hyphen_values = true
    )]
    command: Vec<String>,
  },
}

impl From<TaskCommand> for Task {
  fn from(command: TaskCommand) -> Self {
    match command {
      TaskCommand::Grunt {
        target,
        ignore_task_errors,
        options,
      } => Task::Grunt {
        target,
        options,
        ignore_task_errors,
      },
      TaskCommand::Npm { options } => Task::Npm { options },
      TaskCommand::Exec { normalize, command } => {
        let mut command = command.into_iter();
        Task::Exec {
          executable: command.next().unwrap_or_default(),
          arguments: command.collect(),
          normalize,
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn grunt_options_follow_double_dash() {
    let cli = Cli::parse_from([
      "gruntshim",
      "--os-name",
      "Windows 10",
      "plan",
      "grunt",
      "dist",
      "--",
      "--gruntfile Gruntfile.js",
    ]);
    assert_eq!(cli.global.os_name.as_deref(), Some("Windows 10"));
    let Commands::Plan { task } = cli.command else {
      panic!("expected plan");
    };
    assert_eq!(
      Task::from(task),
      Task::Grunt {
        target: Some("dist".into()),
        options: vec!["--gruntfile Gruntfile.js".into()],
        ignore_task_errors: false,
      }
    );
  }

  #[test]
  fn exec_takes_hyphenated_arguments() {
    let cli = Cli::parse_from([
      "gruntshim",
      "run",
      "exec",
      "--normalize",
      "node",
      "--inspect",
      "--max-old-space-size 4096",
    ]);
    let Commands::Run { task } = cli.command else {
      panic!("expected run");
    };
    assert_eq!(
      Task::from(task),
      Task::Exec {
        executable: "node".into(),
        arguments: vec![
          "--inspect".into(),
          "--max-old-space-size 4096".into()
        ],
        normalize: true,
      }
    );
  }

  #[test]
  fn exec_arguments_shadowing_settings_flags_reach_the_child() {
    let cli = Cli::parse_from([
      "gruntshim",
      "plan",
      "exec",
      "node",
      "--show-colors",
      "--normalize",
      "--os-name",
      "app.js",
    ]);
    assert!(!cli.global.show_colors);
    assert_eq!(cli.global.os_name, None);
    let Commands::Plan { task } = cli.command else {
      panic!("expected plan");
    };
    assert_eq!(
      Task::from(task),
      Task::Exec {
        executable: "node".into(),
        arguments: vec![
          "--show-colors".into(),
          "--normalize".into(),
          "--os-name".into(),
          "app.js".into()
        ],
        normalize: false,
      }
    );
  }

  #[test]
  fn settings_flags_still_apply_before_exec_command() {
    let cli = Cli::parse_from([
      "gruntshim",
      "plan",
      "exec",
      "--show-colors",
      "node",
      "app.js",
    ]);
    assert!(cli.global.show_colors);
  }

  #[test]
  fn success_codes_are_comma_separated() {
    let cli = Cli::parse_from(["gruntshim", "--success-codes", "0,1,2", "plan", "npm"]);
    assert_eq!(cli.global.success_codes, vec![0, 1, 2]);
  }
}
