use thiserror::Error;

/// Errors reported by features and presentations while restoring state.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("invalid feature configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported configuration version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("{0}")]
    Other(String),
}

/// Errors raised while converting a preset to or from JSON.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to parse preset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while reading feature set settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse feature set settings: {0}")]
    Parse(#[from] serde_json::Error),
}
