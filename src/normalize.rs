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

//! Rewrites `--option value` into `--option=value`.
//!
//! Process launchers driven by an argument list tend to cut an argument at
//! its first whitespace, so an option and its value given as one string must
//! be fused into a single token before they reach the launcher.

use regex::NoExpand;
use regex::Regex;
use std::sync::LazyLock;

/// Default separator placed between an option name and its value.
pub const DEFAULT_REPLACEMENT: &str = "=";

/// One or two leading dashes, an option name, then whitespace.
/// Character classes are ASCII-only.
static WHITESPACED_OPTION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^-{1,2}?[0-9A-Za-z_-]*[ \t\n\x0B\f\r]+").expect("valid option pattern")
});

static WHITESPACE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t\n\x0B\f\r]+").expect("valid whitespace pattern"));

/// Replaces the first whitespace run of an option-like argument with
/// `replacement`. Anything that does not start with a dash is returned as is.
pub fn normalize(argument: &str, replacement: &str) -> String {
  if WHITESPACED_OPTION.is_match(argument) {
    WHITESPACE_RUN
      .replacen(argument, 1, NoExpand(replacement))
      .into_owned()
  } else {
    argument.to_string()
  }
}

/// Normalizes every argument with [`DEFAULT_REPLACEMENT`].
pub fn normalize_all<I, S>(arguments: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  arguments
    .into_iter()
    .map(|arg| normalize(arg.as_ref(), DEFAULT_REPLACEMENT))
    .collect()
}
