//! Well-known file names used by JVM discovery.

/// Shared library used by the JVM's class-loading subsystem. Its parent
/// directory becomes the value of `-Dsun.boot.library.path`.
pub const CLASSLOADER_LIBRARY_NAME: &str = "zip.dll";

/// Core runtime archive of a pre-modular JDK/JRE. Its full path becomes the
/// value of `-Xbootclasspath:`.
pub const BOOT_ARCHIVE_NAME: &str = "rt.jar";

/// External utility that converts compatibility-layer paths to native ones.
pub const TRANSLATOR_COMMAND: &str = "cygpath";

/// Flag asking the translator for Windows-style output.
pub const TRANSLATOR_WINDOWS_FLAG: &str = "-w";
