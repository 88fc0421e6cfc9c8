use std::env;

/// Environment variable that forces the Cygwin finder on non-Windows hosts.
/// Used for testing against fabricated installation trees.
pub const FORCE_CYGWIN_ENV: &str = "JVMLOCATE_FORCE_CYGWIN";

/// Check whether the Cygwin JVM finder can run on this host.
///
/// Cygwin only exists on Windows, so the compile target decides. The
/// `JVMLOCATE_FORCE_CYGWIN` override lets tests and CI exercise the finder
/// elsewhere.
pub fn cygwin_capable() -> bool {
    if env::var_os(FORCE_CYGWIN_ENV).is_some() {
        return true;
    }

    cfg!(windows)
}

/// Get a human-readable description of the current platform
pub fn get_platform_description() -> String {
    format!("{}/{}", env::consts::OS, env::consts::ARCH)
}
