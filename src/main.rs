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
use Commands::Normalize;
use Commands::Plan;
use Commands::Run;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use gruntshim::cli::Cli;
use gruntshim::cli::Commands;
use gruntshim::config::Settings;
use gruntshim::config::SettingsOverrides;
use gruntshim::exec;
use gruntshim::logging::setup_tracing;
use gruntshim::normalize::normalize;
use gruntshim::task::Task;

#[tokio::main]
async fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let Cli { global, command } = Cli::parse();
  let main_span = tracing::info_span!("gruntshim");
  let _enter = main_span.enter();

  match command {
    Normalize {
      replacement,
      arguments,
    } => {
      for argument in &arguments {
        println!("{}", normalize(argument, &replacement));
      }
    }
    Plan { task } => {
      let settings = Settings::load(global.config.as_deref(), &SettingsOverrides::from(&global))?;
      let resolved = Task::from(task).resolve(&settings)?;

      println!("{}", serde_json::to_string_pretty(&resolved)?);
    }
    Run { task } => {
      let settings = Settings::load(global.config.as_deref(), &SettingsOverrides::from(&global))?;
      let resolved = Task::from(task).resolve(&settings)?;

      tracing::info!("Executing {} {:?}", resolved.executable, resolved.arguments);
      exec::run(&resolved)
        .await
        .with_context(|| format!("Build failed running '{}'", resolved.executable))?;
    }
  }

  Ok(())
}
