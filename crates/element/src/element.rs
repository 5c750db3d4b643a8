// Portable video player element

use crate::binding::NativeSurfaceBinding;
use parking_lot::RwLock;
use std::sync::Arc;
use vidview_core::state::is_blank;
use vidview_core::{
    BackendFactory, ElementSurface, HostWindow, NativePlayer, NotificationHub, PlaybackState,
    PlayerCallback, PlayerConfiguration, PlayerEvent, Result, SubscriptionId,
};

/// State shared with the bound backend
#[derive(Debug, Default)]
struct ElementShared {
    config: RwLock<PlayerConfiguration>,
    hub: NotificationHub,
}

impl ElementSurface for ElementShared {
    fn configuration(&self) -> PlayerConfiguration {
        self.config.read().clone()
    }

    fn on_prepare(&self) {
        self.hub.dispatch(PlayerEvent::Prepared);
    }

    fn on_completion(&self) {
        self.hub.dispatch(PlayerEvent::Completion);
    }

    fn on_error(&self, message: &str) {
        self.hub.dispatch(PlayerEvent::Error {
            message: message.to_string(),
        });
    }
}

/// Declarative video player control.
///
/// Holds the desired configuration and forwards commands to whichever
/// backend is attached. Commands issued before the source is prepared, or
/// while nothing is attached, are dropped rather than queued.
///
/// ```
/// use vidview_element::VideoPlayer;
///
/// let mut player = VideoPlayer::new();
/// player.set_autoplay(true);
/// player.set_source("file:///sdcard/movie.mp4");
/// player.on_error(|message| eprintln!("playback failed: {message}"));
///
/// // Nothing is attached yet, so commands are no-ops.
/// player.play();
/// assert_eq!(player.duration(), 0);
/// ```
#[derive(Debug, Default)]
pub struct VideoPlayer {
    shared: Arc<ElementShared>,
    binding: Option<NativeSurfaceBinding>,
}

impl VideoPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(config: PlayerConfiguration) -> Self {
        let player = Self::new();
        *player.shared.config.write() = config;
        player
    }

    pub fn configuration(&self) -> PlayerConfiguration {
        self.shared.configuration()
    }

    pub fn source(&self) -> Option<String> {
        self.shared.config.read().source.clone()
    }

    /// Sets the source and reloads the bound backend.
    ///
    /// Empty or whitespace-only URIs mean "no source" and are ignored.
    pub fn set_source(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        if is_blank(&uri) {
            log::debug!("Ignoring blank source");
            return;
        }

        let config = {
            let mut config = self.shared.config.write();
            config.set_source(uri);
            config.clone()
        };

        if let Some(binding) = &mut self.binding {
            binding.backend_mut().load(&config);
        }
    }

    pub fn autoplay(&self) -> bool {
        self.shared.config.read().autoplay
    }

    /// Takes effect on the next prepared notification.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.shared.config.write().autoplay = autoplay;
    }

    pub fn play(&mut self) {
        self.forward("play", |backend| backend.play());
    }

    pub fn pause(&mut self) {
        self.forward("pause", |backend| backend.pause());
    }

    pub fn stop(&mut self) {
        self.forward("stop", |backend| backend.stop());
    }

    pub fn seek(&mut self, seconds: u32) {
        self.forward("seek", |backend| backend.seek(seconds));
    }

    /// Duration in milliseconds, `0` until prepared
    pub fn duration(&self) -> u64 {
        self.backend().map(|backend| backend.duration()).unwrap_or(0)
    }

    /// Position in milliseconds, `0` until prepared
    pub fn current_position(&self) -> u64 {
        self.backend()
            .map(|backend| backend.current_position())
            .unwrap_or(0)
    }

    pub fn is_native_controls_visible(&self) -> bool {
        self.backend()
            .map(|backend| backend.is_native_controls_visible())
            .unwrap_or(false)
    }

    pub fn hide_native_controls(&mut self) {
        if let Some(binding) = &mut self.binding {
            binding.backend_mut().hide_native_controls();
        }
    }

    /// Mirror of the backend's state; `Unloaded` when nothing is attached.
    pub fn state(&self) -> PlaybackState {
        self.backend()
            .map(|backend| backend.state())
            .unwrap_or_default()
    }

    pub fn is_buffering(&self) -> bool {
        self.backend()
            .map(|backend| backend.is_buffering())
            .unwrap_or(false)
    }

    pub fn full_screen(&mut self) {
        if let Some(binding) = &mut self.binding {
            binding.backend_mut().full_screen();
        }
    }

    pub fn exit_full_screen(&mut self) {
        if let Some(binding) = &mut self.binding {
            binding.backend_mut().exit_full_screen();
        }
    }

    pub fn set_screen(&mut self, full_screen: bool) {
        if let Some(binding) = &mut self.binding {
            binding.backend_mut().set_screen(full_screen);
        }
    }

    pub fn subscribe(&self, callback: Arc<dyn PlayerCallback>) -> SubscriptionId {
        self.shared.hub.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.hub.unsubscribe(id)
    }

    pub fn on_prepare<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(move |event: &PlayerEvent| {
            if matches!(event, PlayerEvent::Prepared) {
                f();
            }
        }))
    }

    pub fn on_completion<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(move |event: &PlayerEvent| {
            if matches!(event, PlayerEvent::Completion) {
                f();
            }
        }))
    }

    pub fn on_error<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(move |event: &PlayerEvent| {
            if let PlayerEvent::Error { message } = event {
                f(message);
            }
        }))
    }

    /// Binds `backend`, tearing down any previous binding first.
    ///
    /// If a source is already configured the new backend starts loading it.
    pub fn attach(&mut self, backend: Box<dyn NativePlayer>) -> Result<()> {
        self.detach();

        let element: Arc<dyn ElementSurface> = self.shared.clone();
        let mut binding = NativeSurfaceBinding::establish(backend, element)?;
        log::info!("Backend attached");

        let config = self.configuration();
        if config.playable_source().is_some() {
            binding.backend_mut().load(&config);
        }
        self.binding = Some(binding);
        Ok(())
    }

    pub fn attach_with(
        &mut self,
        factory: &dyn BackendFactory,
        host: Option<Arc<dyn HostWindow>>,
    ) -> Result<()> {
        let backend = factory.create_backend(factory.preferred_config(), host)?;
        self.attach(backend)
    }

    pub fn detach(&mut self) {
        if let Some(mut binding) = self.binding.take() {
            binding.release();
            log::info!("Backend detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Apply native callbacks queued since the last call.
    ///
    /// Must run on the UI thread that created the backend.
    pub fn dispatch_native_events(&mut self) -> Result<usize> {
        match &mut self.binding {
            Some(binding) => binding.backend_mut().dispatch_pending(),
            None => Ok(0),
        }
    }

    fn backend(&self) -> Option<&dyn NativePlayer> {
        self.binding.as_ref().map(|binding| binding.backend())
    }

    fn forward<F>(&mut self, name: &str, command: F)
    where
        F: FnOnce(&mut dyn NativePlayer),
    {
        let Some(binding) = &mut self.binding else {
            log::debug!("No backend attached, dropping {}", name);
            return;
        };

        let state = binding.backend().state();
        if !state.is_prepared() {
            log::debug!("Dropping {} in {:?}", name, state);
            return;
        }
        command(binding.backend_mut());
    }
}

impl Drop for VideoPlayer {
    fn drop(&mut self) {
        self.detach();
    }
}
