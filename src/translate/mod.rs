// Copyright 2025 dentsusoken
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

//! Conversion of compatibility-layer paths to native OS paths.

use crate::error::{LocateError, Result};
use crate::platform;
use std::io::ErrorKind;
use std::process::Command;

/// Converts a compatibility-layer path into native OS syntax.
///
/// One operation, path in, path out. Injectable so discovery can run against
/// a deterministic stub instead of spawning a real utility.
#[cfg_attr(test, mockall::automock)]
pub trait PathTranslator {
    fn translate(&self, path: &str) -> Result<String>;
}

/// Translator backed by the `cygpath` utility.
///
/// Spawns one synchronous subprocess per call and returns the first line of
/// its standard output, trimmed. No retries, no timeout.
#[derive(Debug, Clone)]
pub struct CygpathTranslator {
    command: String,
}

impl CygpathTranslator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for CygpathTranslator {
    fn default() -> Self {
        Self::new(platform::TRANSLATOR_COMMAND)
    }
}

impl PathTranslator for CygpathTranslator {
    fn translate(&self, path: &str) -> Result<String> {
        log::trace!("Translating path via '{} -w {path}'", self.command);

        let output = Command::new(&self.command)
            .arg(platform::TRANSLATOR_WINDOWS_FLAG)
            .arg(path)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => LocateError::TranslatorUnavailable {
                    command: self.command.clone(),
                    source: err,
                },
                _ => LocateError::TranslatorFailed(format!(
                    "Failed to spawn '{}': {err}",
                    self.command
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LocateError::TranslatorFailed(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            LocateError::TranslatorFailed(format!(
                "'{}' produced output that is not valid UTF-8",
                self.command
            ))
        })?;

        Ok(stdout.lines().next().unwrap_or("").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn script_translator(dir: &tempfile::TempDir, body: &str) -> CygpathTranslator {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.path().join("fake-cygpath");
        std::fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        CygpathTranslator::new(script.to_string_lossy().into_owned())
    }

    #[cfg(unix)]
    #[test]
    fn translate_returns_first_line_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let translator = script_translator(
            &dir,
            "printf '  C:\\\\java\\\\jre  \\nsecond line ignored\\n'",
        );

        let result = translator.translate("/cygdrive/c/java/jre").unwrap();
        assert_eq!(result, r"C:\java\jre");
    }

    #[cfg(unix)]
    #[test]
    fn translate_handles_empty_output() {
        let dir = tempfile::tempdir().unwrap();
        let translator = script_translator(&dir, "true");

        let result = translator.translate("/anything").unwrap();
        assert_eq!(result, "");
    }

    #[cfg(unix)]
    #[test]
    fn translate_reports_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let translator = script_translator(&dir, "echo 'bad path' >&2; exit 3");

        let err = translator.translate("/anything").unwrap_err();
        match err {
            LocateError::TranslatorFailed(message) => {
                assert!(message.contains("bad path"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn translate_reports_missing_utility() {
        let translator = CygpathTranslator::new("definitely-not-a-real-cygpath");

        let err = translator.translate("/anything").unwrap_err();
        match err {
            LocateError::TranslatorUnavailable { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-cygpath");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn mock_translator_substitutes_for_real_utility() {
        let mut translator = MockPathTranslator::new();
        translator
            .expect_translate()
            .returning(|path| Ok(format!("C:{}", path.replace('/', "\\"))));

        assert_eq!(
            translator.translate("/java/jre").unwrap(),
            r"C:\java\jre"
        );
    }
}
