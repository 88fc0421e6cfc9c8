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

//! JVM discovery for Cygwin-hosted Windows installations.

use crate::config::LocateConfig;
use crate::error::{LocateError, Result};
use crate::finder::JvmFinder;
use crate::platform::{BOOT_ARCHIVE_NAME, CLASSLOADER_LIBRARY_NAME};
use crate::translate::{CygpathTranslator, PathTranslator};
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Path separator of the compatibility layer.
const SEPARATOR: &str = "/";

/// Directory-name fragments that mark a JDK/JRE installation.
const ROOT_MARKERS: [&str; 2] = ["jre", "jdk"];

/// The JVM shared library is always the Windows one under Cygwin.
const JVM_LIBRARY_FILE: &str = "jvm.dll";

/// Locates Windows JDK/JRE installations through Cygwin path conventions.
///
/// Given a Cygwin-style path to `jvm.dll`, walks the installation tree for
/// the class-loading library and the boot class archive, translating each
/// hit to Windows syntax through the configured [`PathTranslator`].
pub struct CygwinJvmFinder<T = CygpathTranslator> {
    config: LocateConfig,
    translator: T,
}

impl CygwinJvmFinder {
    pub fn new(config: LocateConfig) -> Self {
        let translator = CygpathTranslator::new(config.translator_command.clone());
        Self { config, translator }
    }
}

impl<T: PathTranslator> CygwinJvmFinder<T> {
    /// Build a finder with an injected translator, bypassing `cygpath`.
    pub fn with_translator(config: LocateConfig, translator: T) -> Self {
        Self { config, translator }
    }
}

impl<T: PathTranslator> JvmFinder for CygwinJvmFinder<T> {
    fn boot_arguments(&self, jvm_lib_path: &str) -> Result<Vec<String>> {
        let lowered = jvm_lib_path.to_lowercase();
        let segments: Vec<&str> = lowered.split(SEPARATOR).collect();

        // Reverse scan: the first segment naming a jre/jdk folder marks the
        // installation root.
        let Some(idx) = segments
            .iter()
            .rev()
            .position(|segment| ROOT_MARKERS.iter().any(|marker| segment.contains(marker)))
        else {
            return Err(LocateError::RootNotFound(jvm_lib_path.to_string()));
        };

        // Drop exactly `idx` trailing segments, keeping the matched jre/jdk
        // segment in the root. The root keeps the lowercased spelling; the
        // walk relies on the case-insensitive semantics of Cygwin-mounted
        // volumes.
        let java_home = segments[..segments.len() - idx].join(SEPARATOR);
        log::debug!("Computed installation root: {java_home}");

        let mut library_path: Option<String> = None;
        let mut boot_classpath: Option<String> = None;

        let walker = WalkDir::new(&java_home).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Skipping unreadable entry under {java_home}: {err}");
                None
            }
        }) {
            if !entry.file_type().is_dir() {
                continue;
            }
            let dir = entry.path();

            if library_path.is_none() && dir.join(CLASSLOADER_LIBRARY_NAME).is_file() {
                log::info!("Found {CLASSLOADER_LIBRARY_NAME} in {}", dir.display());
                library_path = Some(self.translator.translate(&dir.to_string_lossy())?);
            }
            if boot_classpath.is_none() {
                let archive = dir.join(BOOT_ARCHIVE_NAME);
                if archive.is_file() {
                    log::info!("Found {BOOT_ARCHIVE_NAME} in {}", dir.display());
                    boot_classpath = Some(self.translator.translate(&archive.to_string_lossy())?);
                }
            }
            if library_path.is_some() && boot_classpath.is_some() {
                break;
            }
        }

        match (library_path, boot_classpath) {
            (Some(library_path), Some(boot_classpath)) => Ok(vec![
                format!("-Dsun.boot.library.path={library_path}"),
                format!("-Xbootclasspath:{boot_classpath}"),
            ]),
            (library_path, boot_classpath) => Err(LocateError::RequiredFilesMissing {
                library_path,
                boot_classpath,
            }),
        }
    }

    fn search_locations(&self) -> BTreeSet<PathBuf> {
        let mut locations: BTreeSet<PathBuf> = self
            .config
            .env
            .values()
            .map(|folder| PathBuf::from(folder).join("Java"))
            .collect();
        locations.extend(self.config.extra_search_roots.iter().cloned());
        locations
    }

    fn library_file(&self) -> &str {
        JVM_LIBRARY_FILE
    }
}
