/// Convenience result type used across isocontrib.
pub type ContribResult<T> = Result<T, ContribError>;

/// Top-level error taxonomy used by render and loading APIs.
///
/// Every variant is fatal for the render in progress: there is no degraded output mode.
#[derive(thiserror::Error, Debug)]
pub enum ContribError {
    /// Canvas dimensions that cannot be projected (non-finite, negative, zero width).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Theme settings that do not cover the data being rendered.
    #[error("settings error: {0}")]
    Settings(String),

    /// Scene assembly steps invoked out of order.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors when deserializing calendar or settings JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// File system errors, with the offending path in the message.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ContribError {
    /// Build a [`ContribError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ContribError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Build a [`ContribError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ContribError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ContribError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
