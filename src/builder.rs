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
use crate::command::CommandSpec;
use crate::command::OsFamily;
use crate::command::ResolvedCommand;
use std::path::Path;

const WINDOWS_SHELL: &str = "cmd";
const WINDOWS_SHELL_RUN_FLAG: &str = "/C";

/// Turns a declared command into the form the host shell can launch.
///
/// On Windows the executable is wrapped in `cmd /C` so that `.cmd` shims
/// such as `grunt.cmd` or `npm.cmd` resolve. Elsewhere the executable is
/// launched directly.
pub fn build(spec: &CommandSpec, working_directory: Option<&Path>) -> ResolvedCommand {
  let (executable, arguments) = match spec.os_family() {
    OsFamily::Windows => {
      let mut arguments = Vec::with_capacity(spec.raw_arguments().len() + 2);
      arguments.push(WINDOWS_SHELL_RUN_FLAG.to_string());
      arguments.push(spec.executable().to_string());
      arguments.extend_from_slice(spec.raw_arguments());
      (WINDOWS_SHELL.to_string(), arguments)
    }
    OsFamily::Posix => (
      spec.executable().to_string(),
      spec.raw_arguments().to_vec(),
    ),
  };

  let success_codes = spec
    .success_codes()
    .filter(|codes| !codes.is_empty())
    .map(<[i32]>::to_vec);

  tracing::debug!(
    os_family = ?spec.os_family(),
    %executable,
    ?arguments,
    "Resolved command"
  );

  ResolvedCommand {
    executable,
    arguments,
    working_directory: working_directory.map(Path::to_path_buf),
    success_codes,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
  }

  fn spec(os_name: &str, codes: Option<Vec<i32>>) -> CommandSpec {
    CommandSpec::new(
      "grunt",
      args(&["build", "--no-color"]),
      OsFamily::from_os_name(os_name),
      codes,
    )
    .unwrap()
  }

  #[test]
  fn posix_launches_executable_directly() {
    for os in ["Linux", "Mac OS X", "SunOS"] {
      let resolved = build(&spec(os, None), Some(Path::new("target-grunt")));
      assert_eq!(resolved.executable, "grunt");
      assert_eq!(resolved.arguments, args(&["build", "--no-color"]));
      assert_eq!(
        resolved.working_directory,
        Some(PathBuf::from("target-grunt"))
      );
    }
  }

  #[test]
  fn windows_wraps_in_cmd() {
    for os in ["Windows 7", "windows", "WINDOWS SERVER"] {
      let resolved = build(&spec(os, None), None);
      assert_eq!(resolved.executable, "cmd");
      assert_eq!(
        resolved.arguments,
        args(&["/C", "grunt", "build", "--no-color"])
      );
    }
  }

  #[test]
  fn success_codes_stay_out_of_arguments() {
    let resolved = build(&spec("Linux", Some(vec![0, 1, 2])), None);
    assert_eq!(resolved.success_codes, Some(vec![0, 1, 2]));
    assert!(!resolved.arguments.iter().any(|a| a == "1"));
  }

  #[test]
  fn absent_or_empty_success_codes_produce_no_field() {
    assert_eq!(build(&spec("Linux", None), None).success_codes, None);
    assert_eq!(build(&spec("Linux", Some(vec![])), None).success_codes, None);
  }

  #[test]
  fn working_directory_follows_arguments_in_output() {
    let resolved = build(&spec("Linux", Some(vec![3])), Some(Path::new("web")));
    let json = serde_json::to_string(&resolved).unwrap();
    let args_at = json.find("\"arguments\"").unwrap();
    let dir_at = json.find("\"workingDirectory\"").unwrap();
    let codes_at = json.find("\"successCodes\"").unwrap();
    assert!(args_at < dir_at && dir_at < codes_at);
  }
}
