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

use crate::error::LocateError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a LocateError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a LocateError) -> Self {
        let (suggestion, details) = match error {
            LocateError::RootNotFound(lib_path) => {
                let suggestion = Some(
                    "The path to the JVM shared library must contain a directory named after \
                     the installation, e.g. 'jdk1.8.0' or 'jre'. Point jvmlocate at the jvm.dll \
                     inside a conventionally laid out JDK or JRE."
                        .to_string(),
                );
                let details = Some(format!("Searched path: {lib_path}"));
                (suggestion, details)
            }
            LocateError::RequiredFilesMissing {
                library_path,
                boot_classpath,
            } => {
                let mut missing = Vec::new();
                if library_path.is_none() {
                    missing.push("zip.dll (native library folder)");
                }
                if boot_classpath.is_none() {
                    missing.push("rt.jar (boot class archive)");
                }
                let suggestion = Some(format!(
                    "The installation is missing: {}. Boot-argument discovery requires a \
                     pre-modular JDK/JRE layout (Java 8 or earlier).",
                    missing.join(", ")
                ));
                (suggestion, None)
            }
            LocateError::TranslatorUnavailable { command, .. } => {
                let suggestion = Some(format!(
                    "Ensure '{command}' is installed and on PATH. Under Cygwin it ships with \
                     the base installation."
                ));
                (suggestion, None)
            }
            LocateError::TranslatorFailed(msg) => {
                let details = Some(format!("Translator output: {msg}"));
                (None, details)
            }
            LocateError::UnsupportedPlatform(_) => {
                let suggestion = Some(
                    "The Cygwin finder only runs on Windows hosts. Set \
                     JVMLOCATE_FORCE_CYGWIN=1 to override the platform check."
                        .to_string(),
                );
                (suggestion, None)
            }
            LocateError::InvalidConfig(msg) => {
                let suggestion =
                    Some("Check the syntax of jvmlocate.toml and try again.".to_string());
                let details = Some(format!("Configuration error: {msg}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
