#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Distance must be a positive number (got {0})")]
    InvalidDistance(String),
    #[error("Duration must be a positive number (got {0})")]
    InvalidDuration(String),
    #[error("Cadence must be a positive number (got {0})")]
    InvalidCadence(String),
    #[error("Elevation must be a number (got {0})")]
    InvalidElevation(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Access to your position was denied")]
    Denied,
    #[error("Your position is unavailable")]
    Unavailable,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode workouts: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    #[error("Workout {0} has non-finite values and cannot be stored")]
    NonFinite(String),
}

/// Warnings surfaced to the user. None of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum Warning {
    #[error("Please enter positive numbers: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("{0}. The map is unavailable for this session.")]
    GeolocationUnavailable(#[from] GeolocationError),
    #[error("Your workouts could not be saved: {0}")]
    PersistFailed(#[from] StorageError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
