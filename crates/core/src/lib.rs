// Core types and traits for the vidview player

pub mod callback;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod native;
pub mod player;
pub mod state;

// Re-export commonly used types
pub use callback::{NotificationHub, PlayerCallback, PlayerEvent, RecordingCallback, SubscriptionId};
pub use config::BackendConfig;
pub use dispatch::{NativeEventSender, UiDispatcher};
pub use error::{NativeError, PlayerError, Result};
pub use host::{ChromeVisibility, FullscreenController, HostWindow, Orientation};
pub use native::{NativeEvent, NativeEventKind, NativeSurface};
pub use player::{BackendFactory, ElementSurface, NativePlayer};
pub use state::{PlaybackState, PlayerConfiguration, PlayerStateContainer, SessionId};

#[cfg(any(test, feature = "testing"))]
pub use host::MockHostWindow;

/// Log tag used on Android
pub const LOG_TAG: &str = "VidView";

// Initialize logging based on platform
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag(LOG_TAG),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        // Ignore the error from a second initialization
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();
    }
}
