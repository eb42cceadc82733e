use crate::{ConfigError, LogOptions};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, is_empty, is_true};

// =========================================================================
// Validation Tests - Format
// =========================================================================

#[test]
fn given_xml_format_when_validate_then_single_format_error() {
    // Given
    let mut options = LogOptions::new();
    options.format = String::from("XML");

    // When
    let errors = options.validate();

    // Then
    assert_that!(errors.len(), eq(1));
    assert_that!(errors[0].to_string(), eq(r#"not a valid log format: "XML""#));
    assert!(matches!(&errors[0], ConfigError::Format { value } if value == "XML"));
}

#[test]
fn given_mixed_case_format_when_validate_then_ok() {
    for format in ["JSON", "Json", "CONSOLE", "Console", "json", "console"] {
        let mut options = LogOptions::new();
        options.format = String::from(format);

        assert_that!(options.validate(), is_empty());
    }
}

#[test]
fn given_unknown_formats_when_validate_then_message_echoes_original_value() {
    for format in ["Plain", "", "jsonl", " json", "TEXT"] {
        let mut options = LogOptions::new();
        options.format = String::from(format);

        let errors = options.validate();

        assert_that!(errors.len(), eq(1));
        assert_that!(errors[0].to_string(), contains_substring(format));
        assert!(matches!(errors[0], ConfigError::Format { .. }));
    }
}

// =========================================================================
// Validation Tests - Level
// =========================================================================

#[test]
fn given_unparseable_level_when_validate_then_single_level_error() {
    // Given
    let mut options = LogOptions::new();
    options.level = String::from("not-a-level");

    // When
    let errors = options.validate();

    // Then
    assert_that!(errors.len(), eq(1));
    assert!(matches!(errors[0], ConfigError::Level { .. }));
    assert_that!(errors[0].to_string(), contains_substring("not-a-level"));
}

#[test]
fn given_every_known_level_when_validate_then_ok() {
    for level in ["debug", "INFO", "Warn", "error", "DPANIC", "panic", "fatal", ""] {
        let mut options = LogOptions::new();
        options.level = String::from(level);

        assert_that!(options.validate(), is_empty());
    }
}

// =========================================================================
// Validation Tests - Combined
// =========================================================================

#[test]
fn given_invalid_level_and_format_when_validate_then_both_errors_level_first() {
    // Given
    let mut options = LogOptions::new();
    options.level = String::from("loud");
    options.format = String::from("yaml");

    // When
    let errors = options.validate();

    // Then
    assert_that!(errors.len(), eq(2));
    assert!(matches!(errors[0], ConfigError::Level { .. }));
    assert!(matches!(errors[1], ConfigError::Format { .. }));
    assert_that!(errors.iter().all(ConfigError::is_validation), is_true());
}

#[test]
fn given_invalid_options_when_validate_twice_then_same_errors_and_no_mutation() {
    // Given
    let mut options = LogOptions::new();
    options.level = String::from("loud");
    options.format = String::from("yaml");
    let before = options.clone();

    // When
    let first: Vec<String> = options.validate().iter().map(ToString::to_string).collect();
    let second: Vec<String> = options.validate().iter().map(ToString::to_string).collect();

    // Then
    assert_that!(first, eq(&second));
    assert_that!(options, eq(&before));
}

#[test]
fn given_other_fields_set_freely_when_validate_then_ok() {
    let mut options = LogOptions::new();
    options.output_paths = vec![];
    options.max_size_in_mb = -5;
    options.max_age_in_days = 365;
    options.name = String::from("any name at all");

    assert_that!(options.validate(), is_empty());
}
