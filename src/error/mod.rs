mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Can't find the root jre nor jdk folder")]
    RootNotFound(String),

    #[error(
        "A folder has not been found: library path='{}' -- boot path='{}'",
        .library_path.as_deref().unwrap_or("None"),
        .boot_classpath.as_deref().unwrap_or("None")
    )]
    RequiredFilesMissing {
        library_path: Option<String>,
        boot_classpath: Option<String>,
    },

    #[error("Path translator '{command}' is not available")]
    TranslatorUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path translator failed: {0}")]
    TranslatorFailed(String),

    #[error("JVM discovery is not supported on this platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LocateError>;
