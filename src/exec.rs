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
use crate::command::ResolvedCommand;
use crate::error::ExecError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::Instrument;

/// Launches a resolved command with inherited stdio and waits for it.
///
/// Returns the exit code when it is one of the accepted codes. Any other
/// outcome is reported as an error and left for the caller to act on.
pub async fn run(command: &ResolvedCommand) -> Result<i32, ExecError> {
  let span = tracing::info_span!("exec", executable = %command.executable);

  async {
    let mut cmd = Command::new(&command.executable);
    cmd
      .args(&command.arguments)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .kill_on_drop(true);

    if let Some(dir) = &command.working_directory {
      cmd.current_dir(dir);
    }

    tracing::debug!(cmd = ?cmd, "Spawning command");
    let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
      executable: command.executable.clone(),
      source,
    })?;

    let status = child.wait().await.map_err(|source| ExecError::Wait {
      executable: command.executable.clone(),
      source,
    })?;

    let Some(code) = status.code() else {
      return Err(ExecError::Terminated {
        executable: command.executable.clone(),
      });
    };

    if !command.accepts(code) {
      tracing::error!(code, "Command failed");
      return Err(ExecError::UnacceptableExitCode {
        executable: command.executable.clone(),
        code,
        accepted: command.accepted_codes(),
      });
    }

    tracing::info!(code, "Command finished");
    Ok(code)
  }
  .instrument(span)
  .await
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;
  use std::path::PathBuf;

  fn sh(script: &str, success_codes: Option<Vec<i32>>) -> ResolvedCommand {
    ResolvedCommand {
      executable: "sh".into(),
      arguments: vec!["-c".into(), script.into()],
      working_directory: None,
      success_codes,
    }
  }

  #[tokio::test]
  async fn zero_is_accepted_by_default() {
    assert_eq!(run(&sh("exit 0", None)).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn nonzero_fails_by_default() {
    let err = run(&sh("exit 2", None)).await.unwrap_err();
    match err {
      ExecError::UnacceptableExitCode { code, accepted, .. } => {
        assert_eq!(code, 2);
        assert_eq!(accepted, vec![0]);
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn custom_codes_are_accepted() {
    assert_eq!(run(&sh("exit 3", Some(vec![0, 3, 6]))).await.unwrap(), 3);
  }

  #[tokio::test]
  async fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = sh("test -f marker", None);
    std::fs::write(dir.path().join("marker"), "").unwrap();
    cmd.working_directory = Some(PathBuf::from(dir.path()));
    assert_eq!(run(&cmd).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn missing_executable_fails_to_spawn() {
    let cmd = ResolvedCommand {
      executable: "gruntshim-definitely-not-installed".into(),
      arguments: vec![],
      working_directory: None,
      success_codes: None,
    };
    assert!(matches!(run(&cmd).await, Err(ExecError::Spawn { .. })));
  }
}
