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

//! JVM installation discovery.
//!
//! Each supported platform provides one [`JvmFinder`] implementation;
//! [`select_finder`] picks the variant for the current host.

mod cygwin;

pub use cygwin::CygwinJvmFinder;

use crate::config::LocateConfig;
use crate::error::{LocateError, Result};
use crate::platform;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Capability set of a per-platform JVM finder.
pub trait JvmFinder {
    /// Prepare the arguments required to start an embedded JVM, given the
    /// path to its shared library in the finder's path syntax.
    fn boot_arguments(&self, jvm_lib_path: &str) -> Result<Vec<String>>;

    /// Candidate installation roots derived from the configuration.
    fn search_locations(&self) -> BTreeSet<PathBuf>;

    /// File name of the JVM shared library this finder looks for.
    fn library_file(&self) -> &str;
}

impl std::fmt::Debug for dyn JvmFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JvmFinder")
            .field("library_file", &self.library_file())
            .finish()
    }
}

/// Pick the finder variant for the current host.
pub fn select_finder(config: &LocateConfig) -> Result<Box<dyn JvmFinder>> {
    if platform::cygwin_capable() {
        log::debug!("Selected the Cygwin JVM finder");
        return Ok(Box::new(CygwinJvmFinder::new(config.clone())));
    }

    Err(LocateError::UnsupportedPlatform(
        platform::get_platform_description(),
    ))
}
