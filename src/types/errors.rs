use std::fmt;

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The generator was called with a non-positive length or an empty alphabet.
    InvalidArgument(String),
    /// The random source could not produce a value.
    RandomGeneration(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeneratorError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === StorageError ===

/// Errors raised by a key-value persistence backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// The store refused the operation (quota exceeded, read-only, ...).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HistoryError ===

/// Errors related to password history persistence.
///
/// Never returned from history operations; they are logged and recorded so
/// the in-memory history stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Writing the history to the store failed.
    Persistence(String),
    /// The stored history could not be decoded.
    Decode(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Persistence(msg) => write!(f, "History persistence failed: {}", msg),
            HistoryError::Decode(msg) => write!(f, "History decode failed: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<StorageError> for HistoryError {
    fn from(err: StorageError) -> Self {
        HistoryError::Persistence(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors raised while wiring the application together.
#[derive(Debug)]
pub enum AppError {
    /// The database could not be opened or migrated.
    Database(String),
    /// Settings could not be loaded.
    Settings(String),
    /// The startup generation failed.
    Generation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "App database error: {}", msg),
            AppError::Settings(msg) => write!(f, "App settings error: {}", msg),
            AppError::Generation(msg) => write!(f, "App generation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        AppError::Generation(err.to_string())
    }
}
