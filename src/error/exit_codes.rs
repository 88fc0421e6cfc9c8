use crate::error::LocateError;

pub fn get_exit_code(error: &LocateError) -> i32 {
    match error {
        LocateError::InvalidConfig(_) => 2,

        LocateError::UnsupportedPlatform(_) => 3,

        LocateError::RootNotFound(_) => 4,

        LocateError::RequiredFilesMissing { .. } => 5,

        LocateError::TranslatorUnavailable { .. } => 127, // Standard "command not found" exit code

        _ => 1,
    }
}
