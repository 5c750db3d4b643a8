// Android backend driving android.widget.VideoView over JNI
//
// The Java side supplies the widgets (VideoView, MediaController, busy
// ProgressBar) and the hosting Activity; this crate adapts them to the
// portable player contract and exports the JNI entry points used by
// `com.vidview.VideoPlayer` and `com.vidview.NativeListener`.

pub mod codes;
pub mod listeners;
pub mod slots;

#[cfg(target_os = "android")]
mod android;

#[cfg(target_os = "android")]
pub use android::{ActivityHostWindow, AndroidBackendFactory, VideoViewSurface, LISTENER_CLASS};

#[cfg(not(target_os = "android"))]
pub use stub::AndroidBackendFactory;

#[cfg(not(target_os = "android"))]
mod stub {
    use std::sync::Arc;
    use vidview_core::{
        BackendConfig, BackendFactory, HostWindow, NativePlayer, PlayerError, Result,
    };

    /// Placeholder so callers compile on every target
    #[derive(Debug, Default, Clone, Copy)]
    pub struct AndroidBackendFactory;

    impl BackendFactory for AndroidBackendFactory {
        fn create_backend(
            &self,
            _config: BackendConfig,
            _host: Option<Arc<dyn HostWindow>>,
        ) -> Result<Box<dyn NativePlayer>> {
            Err(PlayerError::Unsupported(
                "VideoView backend is only available on Android".to_string(),
            ))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use vidview_element::{PlaybackState, VideoPlayer};

        #[test]
        fn attach_reports_unsupported() {
            let mut player = VideoPlayer::new();
            let result = player.attach_with(&AndroidBackendFactory, None);

            assert!(matches!(result, Err(PlayerError::Unsupported(_))));
            assert!(!player.is_attached());
            assert_eq!(player.state(), PlaybackState::Unloaded);
        }
    }
}
