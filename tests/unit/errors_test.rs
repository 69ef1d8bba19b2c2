use pwforge::types::errors::*;

// === GeneratorError Tests ===

#[test]
fn generator_error_display_variants() {
    assert_eq!(
        GeneratorError::InvalidArgument("length 0".to_string()).to_string(),
        "Invalid argument: length 0"
    );
    assert_eq!(
        GeneratorError::RandomGeneration("no entropy".to_string()).to_string(),
        "Random generation failed: no entropy"
    );
}

#[test]
fn generator_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(GeneratorError::InvalidArgument("x".to_string()));
    assert!(err.source().is_none());
}

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("locked".to_string()).to_string(),
        "Storage database error: locked"
    );
    assert_eq!(
        StorageError::Unavailable("Quota exceeded".to_string()).to_string(),
        "Storage unavailable: Quota exceeded"
    );
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::Persistence("disk full".to_string()).to_string(),
        "History persistence failed: disk full"
    );
    assert_eq!(
        HistoryError::Decode("expected value".to_string()).to_string(),
        "History decode failed: expected value"
    );
}

#[test]
fn history_error_from_storage_error_is_persistence() {
    let err: HistoryError = StorageError::Unavailable("Quota exceeded".to_string()).into();
    assert_eq!(
        err,
        HistoryError::Persistence("Storage unavailable: Quota exceeded".to_string())
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a number".to_string()).to_string(),
        "Invalid settings value: not a number"
    );
}

// === AppError Tests ===

#[test]
fn app_error_wraps_component_errors() {
    let from_generator: AppError = GeneratorError::InvalidArgument("empty".to_string()).into();
    assert_eq!(
        from_generator.to_string(),
        "App generation error: Invalid argument: empty"
    );

    let from_settings: AppError = SettingsError::IoError("denied".to_string()).into();
    assert_eq!(
        from_settings.to_string(),
        "App settings error: Settings I/O error: denied"
    );

    let from_sqlite: AppError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(from_sqlite, AppError::Database(_)));
}
