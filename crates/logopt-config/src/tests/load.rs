use crate::LogOptions;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use tempfile::TempDir;

// =========================================================================
// File Loading Tests
// =========================================================================

#[test]
fn given_partial_toml_when_parsed_then_missing_keys_keep_defaults() {
    // When
    let result = LogOptions::from_toml_str(
        r#"
            level = "debug"
            enable-caller = true
            output-paths = ["stdout", "/tmp/app.log"]
            max-age-in-days = 14
        "#,
    );

    // Then
    assert_that!(result, ok(anything()));
    let options = result.unwrap();
    assert_that!(options.level, eq("debug"));
    assert_that!(options.enable_caller, eq(true));
    assert_that!(
        options.output_paths,
        eq(&vec![String::from("stdout"), String::from("/tmp/app.log")])
    );
    assert_that!(options.max_age_in_days, eq(14));
    assert_that!(options.format, eq("console"));
    assert_that!(options.error_output_paths, eq(&vec![String::from("stderr")]));
}

#[test]
fn given_toml_file_when_load_then_values_read() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("log.toml");
    std::fs::write(&path, "format = \"json\"\nname = \"worker\"\n").unwrap();

    // When
    let options = LogOptions::load(&path).unwrap();

    // Then
    assert_that!(options.format, eq("json"));
    assert_that!(options.name, eq("worker"));
}

#[test]
fn given_missing_file_when_load_then_error_mentions_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let result = LogOptions::load(&path);

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("absent.toml")
    );
}

#[test]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "this is not valid toml {{{{").unwrap();

    let result = LogOptions::load(&path);

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("broken.toml")
    );
}

#[test]
fn given_wrong_value_type_when_parsed_then_error() {
    let result = LogOptions::from_toml_str("max-size-in-mb = \"big\"");

    assert_that!(result, err(anything()));
}

#[test]
fn given_malformed_inline_toml_when_parsed_then_toml_error_for_inline_source() {
    let result = LogOptions::from_toml_str("level = ");

    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("<inline>")
    );
}
