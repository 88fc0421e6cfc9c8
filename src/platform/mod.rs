//! Platform detection utilities for the entire application.
//!
//! This module provides functions to detect whether the current host can run
//! the Cygwin-based JVM discovery, plus the well-known file names the
//! discovery looks for.

mod constants;
mod detection;

pub use constants::{
    BOOT_ARCHIVE_NAME, CLASSLOADER_LIBRARY_NAME, TRANSLATOR_COMMAND, TRANSLATOR_WINDOWS_FLAG,
};
pub use detection::{FORCE_CYGWIN_ENV, cygwin_capable, get_platform_description};
