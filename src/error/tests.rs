use crate::error::format::format_error_with_color;
use crate::error::*;

#[test]
fn test_error_context_root_not_found() {
    let error = LocateError::RootNotFound("/cygdrive/c/java/bin/jvm.dll".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.details.unwrap().contains("/cygdrive/c/java/bin"));
}

#[test]
fn test_error_context_required_files_missing_both() {
    let error = LocateError::RequiredFilesMissing {
        library_path: None,
        boot_classpath: None,
    };
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("zip.dll"));
    assert!(suggestion.contains("rt.jar"));
}

#[test]
fn test_error_context_required_files_missing_one() {
    let error = LocateError::RequiredFilesMissing {
        library_path: Some(r"C:\java\jre\bin".to_string()),
        boot_classpath: None,
    };
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(!suggestion.contains("zip.dll"));
    assert!(suggestion.contains("rt.jar"));
}

#[test]
fn test_required_files_missing_message_matches_legacy_format() {
    let error = LocateError::RequiredFilesMissing {
        library_path: Some(r"C:\java\jre\bin".to_string()),
        boot_classpath: None,
    };

    assert_eq!(
        error.to_string(),
        r"A folder has not been found: library path='C:\java\jre\bin' -- boot path='None'"
    );
}

#[test]
fn test_root_not_found_message() {
    let error = LocateError::RootNotFound("/tmp/whatever".to_string());
    assert_eq!(error.to_string(), "Can't find the root jre nor jdk folder");
}

#[test]
fn test_error_context_translator_unavailable() {
    let error = LocateError::TranslatorUnavailable {
        command: "cygpath".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("cygpath"));
}

#[test]
fn test_error_context_with_custom_suggestion() {
    let error = LocateError::TranslatorFailed("exit code 1".to_string());
    let context =
        ErrorContext::new(&error).with_suggestion("Run the translator by hand.".to_string());

    assert_eq!(
        context.suggestion,
        Some("Run the translator by hand.".to_string())
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&LocateError::InvalidConfig("bad".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&LocateError::UnsupportedPlatform("linux".to_string())),
        3
    );
    assert_eq!(
        get_exit_code(&LocateError::RootNotFound("p".to_string())),
        4
    );
    assert_eq!(
        get_exit_code(&LocateError::RequiredFilesMissing {
            library_path: None,
            boot_classpath: None,
        }),
        5
    );
    assert_eq!(
        get_exit_code(&LocateError::TranslatorUnavailable {
            command: "cygpath".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
        127
    );
    assert_eq!(
        get_exit_code(&LocateError::TranslatorFailed("oops".to_string())),
        1
    );
}

#[test]
fn test_format_error_with_color_includes_suggestion_bullets() {
    let error = LocateError::UnsupportedPlatform("linux".to_string());

    let plain = format_error_with_color(&error, false);
    assert!(plain.starts_with("Error:"));
    assert!(plain.contains("• "));

    let colored = format_error_with_color(&error, true);
    assert!(colored.contains("\x1b[31m"));
    assert!(colored.ends_with("\x1b[0m"));
}
