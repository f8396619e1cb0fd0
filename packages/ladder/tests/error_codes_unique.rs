use std::collections::HashSet;

use ladder::errors::ErrorCode;

#[test]
fn error_codes_are_unique() {
    let all = [
        // Keep in sync with ErrorCode enum variants
        ErrorCode::BothSidesDefaulted,
        ErrorCode::InvalidWindow,
        ErrorCode::WindowTooLarge,
        ErrorCode::EmptyTeamName,
        ErrorCode::ValidationError,
        ErrorCode::TeamNotFound,
        ErrorCode::FixtureNotFound,
        ErrorCode::NotFound,
        ErrorCode::StoreTimeout,
        ErrorCode::StoreUnavailable,
        ErrorCode::DataCorruption,
        ErrorCode::StoreError,
        ErrorCode::ConfigError,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
    }
}
