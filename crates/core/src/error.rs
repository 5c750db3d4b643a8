// Error handling for the video player

use thiserror::Error;

/// Message used when the native layer reports a fault without any text.
pub const UNKNOWN_NATIVE_ERROR: &str = "Unknown native playback error";

/// Video player error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The native engine reported a load or playback fault
    #[error("Native playback error: {0}")]
    NativePlayback(String),

    /// Invalid state transition
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The backend or feature is not available on this platform
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The host window refused an orientation or chrome change
    #[error("Host window error: {0}")]
    HostWindow(String),

    /// State mutation attempted outside the UI context
    #[error("Native events must be dispatched on the UI thread")]
    ThreadAffinity,

    /// JNI error (Android-specific)
    #[cfg(target_os = "android")]
    #[error("JNI error: {0}")]
    Jni(String),
}

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for PlayerError {
    fn from(err: jni::errors::Error) -> Self {
        PlayerError::Jni(err.to_string())
    }
}

/// Fault reported by a native surface.
///
/// Stays inside the adapter: the backend turns it into an `OnError`
/// notification and never hands it to the element's callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    message: String,
}

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_NATIVE_ERROR.to_string()
        } else {
            message
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for NativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for NativeError {}

impl From<NativeError> for PlayerError {
    fn from(err: NativeError) -> Self {
        PlayerError::NativePlayback(err.message)
    }
}

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for NativeError {
    fn from(err: jni::errors::Error) -> Self {
        NativeError::new(err.to_string())
    }
}
