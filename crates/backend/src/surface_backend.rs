// Adapter that drives an opaque native surface through the playback state machine

use std::sync::Arc;
use vidview_core::native::{describe_media_error, MEDIA_INFO_BUFFERING_START};
use vidview_core::{
    BackendConfig, ElementSurface, FullscreenController, HostWindow, NativeError, NativeEvent,
    NativeEventKind, NativePlayer, NativeSurface, PlaybackState, PlayerConfiguration,
    PlayerStateContainer, Result, UiDispatcher,
};

/// Milliseconds per second, the native engine's time unit
const MS_PER_SECOND: u64 = 1000;

/// Player backend over any [`NativeSurface`].
///
/// Owns the playback state. Native callbacks are queued by the surface and
/// only take effect when the UI context calls [`NativePlayer::dispatch_pending`].
pub struct SurfaceBackend<S: NativeSurface> {
    surface: S,
    config: BackendConfig,
    state: PlayerStateContainer,
    dispatcher: UiDispatcher,
    fullscreen: FullscreenController,
    element: Option<Arc<dyn ElementSurface>>,
    listening: bool,
}

impl<S: NativeSurface> SurfaceBackend<S> {
    pub fn new(surface: S, config: BackendConfig, host: Option<Arc<dyn HostWindow>>) -> Self {
        log::info!("Creating surface backend (host window: {})", host.is_some());
        Self {
            surface,
            dispatcher: UiDispatcher::new(config.event_queue_capacity),
            config,
            state: PlayerStateContainer::new(),
            fullscreen: FullscreenController::new(host),
            element: None,
            listening: false,
        }
    }

    pub fn fullscreen(&self) -> &FullscreenController {
        &self.fullscreen
    }

    /// Apply one native callback. Callbacks from abandoned sessions are ignored.
    pub fn handle_native_event(&mut self, event: NativeEvent) {
        let current = self.state.current_session();
        if event.session != current {
            log::debug!(
                "Ignoring stale {:?} from {} (current {})",
                event.kind,
                event.session,
                current
            );
            return;
        }

        match event.kind {
            NativeEventKind::Prepared => self.on_prepared(),
            NativeEventKind::Error { what, extra } => {
                self.fail(&describe_media_error(what, extra));
            }
            NativeEventKind::Completion => self.on_completion(),
            NativeEventKind::Info { what, .. } => {
                self.set_busy(what == MEDIA_INFO_BUFFERING_START);
            }
        }
    }

    fn on_prepared(&mut self) {
        if self.state.get_state() != PlaybackState::Preparing {
            log::debug!("Ignoring prepared callback in {:?}", self.state.get_state());
            return;
        }
        if let Err(e) = self.state.transition(PlaybackState::Ready) {
            log::warn!("{}", e);
            return;
        }
        self.set_busy(false);

        let Some(element) = self.element() else {
            return;
        };
        element.on_prepare();

        // A failed autoplay start reports its error after the prepared notification
        if element.configuration().autoplay && self.state.get_state() == PlaybackState::Ready {
            log::debug!("Autoplay enabled, starting playback");
            self.play();
        }
    }

    fn on_completion(&mut self) {
        match self.state.get_state() {
            PlaybackState::Playing => {
                if let Err(e) = self.state.transition(PlaybackState::Stopped) {
                    log::warn!("{}", e);
                    return;
                }
                if let Some(element) = self.element() {
                    element.on_completion();
                }
            }
            other => log::debug!("Ignoring completion callback in {:?}", other),
        }
    }

    /// Moves to `Error` and reports exactly one `on_error` per failed attempt.
    ///
    /// Follow-up faults for a session already in `Error` are only logged.
    fn fail(&mut self, message: &str) {
        let message = NativeError::new(message);
        if self.state.get_state() == PlaybackState::Error {
            log::debug!("Already failed, ignoring further error: {}", message);
            return;
        }
        log::error!("Native playback error: {}", message);

        if let Err(e) = self.state.transition(PlaybackState::Error) {
            log::warn!("{}", e);
        }
        self.set_busy(false);

        if let Some(element) = self.element() {
            element.on_error(message.message());
        }
    }

    fn set_busy(&mut self, busy: bool) {
        self.state.set_buffering(busy);
        if self.config.busy_indicator {
            self.surface.set_busy_indicator(busy);
        }
    }

    fn element(&self) -> Option<Arc<dyn ElementSurface>> {
        self.element.clone()
    }

    /// Runs a native command, converting a fault into the error notification.
    fn native_command<F>(&mut self, name: &str, command: F) -> bool
    where
        F: FnOnce(&mut S) -> std::result::Result<(), NativeError>,
    {
        match command(&mut self.surface) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Native {} failed: {}", name, e);
                self.fail(e.message());
                false
            }
        }
    }

    fn drop_command(&self, name: &str) {
        log::debug!("Dropping {} in {:?}", name, self.state.get_state());
    }

    fn enter(&self, to: PlaybackState) {
        if let Err(e) = self.state.transition(to) {
            log::warn!("{}", e);
        }
    }
}

impl<S: NativeSurface> NativePlayer for SurfaceBackend<S> {
    fn bind(&mut self, element: Arc<dyn ElementSurface>) -> Result<()> {
        if !self.listening {
            self.surface.register_listener(self.dispatcher.sender())?;
            self.listening = true;
        }
        self.element = Some(element);
        log::info!("Backend bound to element");
        Ok(())
    }

    fn load(&mut self, config: &PlayerConfiguration) {
        let Some(uri) = config.playable_source() else {
            log::debug!("No playable source, ignoring load");
            return;
        };

        self.enter(PlaybackState::Preparing);
        let session = self.state.begin_session();
        log::info!("Loading {} ({})", uri, session);
        self.set_busy(true);

        let uri = uri.to_string();
        if self.native_command("load", |surface| surface.set_video_uri(&uri, session)) {
            self.surface.request_focus();
        }
    }

    fn play(&mut self) {
        match self.state.get_state() {
            PlaybackState::Ready | PlaybackState::Paused => {
                if self.native_command("play", |surface| surface.start()) {
                    self.enter(PlaybackState::Playing);
                }
            }
            PlaybackState::Playing => {}
            _ => self.drop_command("play"),
        }
    }

    fn pause(&mut self) {
        match self.state.get_state() {
            PlaybackState::Playing => {
                if !self.surface.can_pause() {
                    log::debug!("Native surface cannot pause");
                    return;
                }
                if self.native_command("pause", |surface| surface.pause()) {
                    self.enter(PlaybackState::Paused);
                }
            }
            PlaybackState::Paused => {}
            _ => self.drop_command("pause"),
        }
    }

    fn stop(&mut self) {
        match self.state.get_state() {
            PlaybackState::Ready | PlaybackState::Playing | PlaybackState::Paused => {
                if self.native_command("stop", |surface| surface.stop_playback()) {
                    self.enter(PlaybackState::Stopped);
                }
            }
            PlaybackState::Stopped => {}
            _ => self.drop_command("stop"),
        }
    }

    fn seek(&mut self, seconds: u32) {
        if !self.state.get_state().is_prepared() {
            self.drop_command("seek");
            return;
        }
        // Seeking never changes the state; a paused player stays paused
        let position_ms = u64::from(seconds) * MS_PER_SECOND;
        self.native_command("seek", |surface| surface.seek_to(position_ms));
    }

    fn duration(&self) -> u64 {
        if self.state.get_state().is_prepared() {
            self.surface.duration_ms()
        } else {
            0
        }
    }

    fn current_position(&self) -> u64 {
        if self.state.get_state().is_prepared() {
            self.surface.current_position_ms()
        } else {
            0
        }
    }

    fn is_native_controls_visible(&self) -> bool {
        self.config.show_native_controls && self.surface.is_controls_shown()
    }

    fn hide_native_controls(&mut self) {
        self.surface.hide_controls();
    }

    fn state(&self) -> PlaybackState {
        self.state.get_state()
    }

    fn is_buffering(&self) -> bool {
        self.state.is_buffering()
    }

    fn full_screen(&mut self) {
        self.fullscreen.full_screen();
    }

    fn exit_full_screen(&mut self) {
        self.fullscreen.exit_full_screen();
    }

    fn set_screen(&mut self, full_screen: bool) {
        self.fullscreen.set_screen(full_screen);
    }

    fn dispatch_pending(&mut self) -> Result<usize> {
        let mut events = Vec::new();
        let handled = self.dispatcher.drain(|event| events.push(event))?;
        for event in events {
            self.handle_native_event(event);
        }
        Ok(handled)
    }

    fn release(&mut self) {
        if self.listening {
            self.surface.unregister_listener();
            self.listening = false;
        }

        if self.state.get_state().is_prepared() {
            if let Err(e) = self.surface.stop_playback() {
                log::warn!("Failed to stop playback on release: {}", e);
            }
        }

        // Anything still queued, or posted late, belongs to a dead session
        let discarded = self.dispatcher.discard_pending();
        self.state.begin_session();
        self.state.reset();
        self.element = None;
        log::info!("Backend released ({} queued callbacks discarded)", discarded);
    }
}

impl<S: NativeSurface> Drop for SurfaceBackend<S> {
    fn drop(&mut self) {
        if self.listening {
            self.surface.unregister_listener();
        }
    }
}

impl<S: NativeSurface> std::fmt::Debug for SurfaceBackend<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceBackend")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("fullscreen", &self.fullscreen)
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeSurface, SurfaceCall};
    use vidview_core::{PlayerCallback, PlayerEvent, RecordingCallback};

    /// Element stand-in that records notifications
    struct TestElement {
        config: parking_lot::RwLock<PlayerConfiguration>,
        events: Arc<RecordingCallback>,
    }

    impl TestElement {
        fn new(autoplay: bool) -> Arc<Self> {
            Arc::new(Self {
                config: parking_lot::RwLock::new(PlayerConfiguration {
                    source: None,
                    autoplay,
                }),
                events: Arc::new(RecordingCallback::new()),
            })
        }

        fn events(&self) -> Vec<PlayerEvent> {
            self.events.get_events()
        }
    }

    impl ElementSurface for TestElement {
        fn configuration(&self) -> PlayerConfiguration {
            self.config.read().clone()
        }

        fn on_prepare(&self) {
            self.events.on_event(&PlayerEvent::Prepared);
        }

        fn on_completion(&self) {
            self.events.on_event(&PlayerEvent::Completion);
        }

        fn on_error(&self, message: &str) {
            self.events.on_event(&PlayerEvent::Error {
                message: message.to_string(),
            });
        }
    }

    fn bound(autoplay: bool) -> (SurfaceBackend<FakeSurface>, FakeSurface, Arc<TestElement>) {
        let surface = FakeSurface::new();
        let mut backend = SurfaceBackend::new(surface.clone(), BackendConfig::default(), None);
        let element = TestElement::new(autoplay);
        backend.bind(element.clone()).unwrap();
        (backend, surface, element)
    }

    fn source(uri: &str) -> PlayerConfiguration {
        PlayerConfiguration::new(uri, false)
    }

    fn prepared(autoplay: bool) -> (SurfaceBackend<FakeSurface>, FakeSurface, Arc<TestElement>) {
        let (mut backend, surface, element) = bound(autoplay);
        backend.load(&source("file://a.mp4"));
        surface.emit_prepared();
        backend.dispatch_pending().unwrap();
        (backend, surface, element)
    }

    #[test]
    fn bind_registers_listener_once() {
        let (mut backend, surface, _) = bound(false);
        backend.bind(TestElement::new(false)).unwrap();
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::RegisterListener)), 1);
        assert!(surface.is_listening());
    }

    #[test]
    fn load_moves_to_preparing_and_shows_busy() {
        let (mut backend, surface, _) = bound(false);
        backend.load(&source("file://a.mp4"));

        assert_eq!(backend.state(), PlaybackState::Preparing);
        assert!(backend.is_buffering());
        assert!(surface.busy());
        assert_eq!(surface.last_uri().as_deref(), Some("file://a.mp4"));
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::RequestFocus)), 1);
    }

    #[test]
    fn blank_source_is_ignored() {
        let (mut backend, surface, element) = bound(false);
        for uri in ["", "   ", "\t\n"] {
            backend.load(&PlayerConfiguration {
                source: Some(uri.to_string()),
                autoplay: false,
            });
        }
        backend.load(&PlayerConfiguration::default());

        assert_eq!(backend.state(), PlaybackState::Unloaded);
        assert_eq!(surface.last_uri(), None);
        assert!(element.events().is_empty());
    }

    #[test]
    fn prepared_moves_to_ready_and_notifies() {
        let (backend, surface, element) = prepared(false);
        assert_eq!(backend.state(), PlaybackState::Ready);
        assert!(!backend.is_buffering());
        assert!(!surface.busy());
        assert_eq!(element.events(), vec![PlayerEvent::Prepared]);
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Start)), 0);
    }

    #[test]
    fn autoplay_starts_after_prepared() {
        let (backend, surface, element) = prepared(true);
        assert_eq!(backend.state(), PlaybackState::Playing);
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Start)), 1);
        assert_eq!(element.events(), vec![PlayerEvent::Prepared]);
    }

    #[test]
    fn transport_round_trip() {
        let (mut backend, surface, _) = prepared(false);

        backend.play();
        assert_eq!(backend.state(), PlaybackState::Playing);
        backend.pause();
        assert_eq!(backend.state(), PlaybackState::Paused);
        backend.play();
        assert_eq!(backend.state(), PlaybackState::Playing);
        backend.stop();
        assert_eq!(backend.state(), PlaybackState::Stopped);

        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Start)), 2);
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Pause)), 1);
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::StopPlayback)), 1);
    }

    #[test]
    fn commands_before_prepared_are_dropped() {
        let (mut backend, surface, element) = bound(false);

        backend.play();
        backend.pause();
        backend.stop();
        backend.seek(10);
        assert_eq!(backend.state(), PlaybackState::Unloaded);

        backend.load(&source("file://a.mp4"));
        backend.play();
        backend.pause();
        backend.stop();
        backend.seek(10);
        assert_eq!(backend.state(), PlaybackState::Preparing);

        assert_eq!(
            surface.count(|c| matches!(
                c,
                SurfaceCall::Start | SurfaceCall::Pause | SurfaceCall::StopPlayback | SurfaceCall::SeekTo(_)
            )),
            0
        );
        assert!(element.events().is_empty());
    }

    #[test]
    fn seek_converts_seconds_to_milliseconds() {
        let (mut backend, surface, _) = prepared(false);
        backend.seek(42);
        assert_eq!(surface.last_seek(), Some(42_000));
    }

    #[test]
    fn seek_while_paused_stays_paused() {
        let (mut backend, surface, _) = prepared(false);
        backend.play();
        backend.pause();
        backend.seek(5);

        assert_eq!(backend.state(), PlaybackState::Paused);
        assert_eq!(surface.last_seek(), Some(5_000));
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Start)), 1);
    }

    #[test]
    fn pause_respects_can_pause() {
        let (mut backend, surface, _) = prepared(false);
        backend.play();
        surface.set_can_pause(false);
        backend.pause();

        assert_eq!(backend.state(), PlaybackState::Playing);
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::Pause)), 0);
    }

    #[test]
    fn queries_are_zero_until_prepared() {
        let (mut backend, surface, _) = bound(false);
        surface.set_media(120_000, 3_000);

        assert_eq!(backend.duration(), 0);
        assert_eq!(backend.current_position(), 0);

        backend.load(&source("file://a.mp4"));
        assert_eq!(backend.duration(), 0);

        surface.emit_prepared();
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.duration(), 120_000);
        assert_eq!(backend.current_position(), 3_000);

        surface.emit(NativeEventKind::Error { what: 1, extra: -1004 });
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.duration(), 0);
        assert_eq!(backend.current_position(), 0);
    }

    #[test]
    fn stale_prepared_is_ignored() {
        let (mut backend, surface, element) = bound(false);
        backend.load(&source("file://a.mp4"));
        let abandoned = surface.last_session().unwrap();
        backend.load(&source("file://b.mp4"));

        surface.emit_for(abandoned, NativeEventKind::Prepared);
        backend.dispatch_pending().unwrap();

        assert_eq!(backend.state(), PlaybackState::Preparing);
        assert!(element.events().is_empty());

        surface.emit_prepared();
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.state(), PlaybackState::Ready);
        assert_eq!(element.events(), vec![PlayerEvent::Prepared]);
    }

    fn stay_unloaded(_: &mut SurfaceBackend<FakeSurface>, _: &FakeSurface) {}

    fn start_preparing(backend: &mut SurfaceBackend<FakeSurface>, _: &FakeSurface) {
        backend.load(&source("file://a.mp4"));
    }

    fn start_playing(backend: &mut SurfaceBackend<FakeSurface>, surface: &FakeSurface) {
        start_ready(backend, surface);
        backend.play();
    }

    fn start_ready(backend: &mut SurfaceBackend<FakeSurface>, surface: &FakeSurface) {
        backend.load(&source("file://a.mp4"));
        surface.emit_prepared();
        backend.dispatch_pending().unwrap();
    }

    fn start_paused(backend: &mut SurfaceBackend<FakeSurface>, surface: &FakeSurface) {
        start_playing(backend, surface);
        backend.pause();
    }

    fn start_stopped(backend: &mut SurfaceBackend<FakeSurface>, surface: &FakeSurface) {
        start_playing(backend, surface);
        backend.stop();
    }

    #[test]
    fn native_error_from_any_state_reports_once() {
        let setups: [fn(&mut SurfaceBackend<FakeSurface>, &FakeSurface); 6] = [
            stay_unloaded,
            start_preparing,
            start_ready,
            start_playing,
            start_paused,
            start_stopped,
        ];

        for setup in setups {
            let (mut backend, surface, element) = bound(false);
            setup(&mut backend, &surface);
            element.events.clear();

            // MediaPlayer tends to follow the real fault with a generic one
            surface.emit(NativeEventKind::Error { what: 1, extra: -1004 });
            surface.emit(NativeEventKind::Error { what: -38, extra: 0 });
            backend.dispatch_pending().unwrap();

            assert_eq!(backend.state(), PlaybackState::Error);
            let events = element.events();
            assert_eq!(events.len(), 1, "after {:?}", events);
            match &events[0] {
                PlayerEvent::Error { message } => assert!(message.contains("MEDIA_ERROR_IO")),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn failed_session_stays_silent_until_reloaded() {
        let (mut backend, surface, element) = bound(false);
        start_preparing(&mut backend, &surface);
        surface.emit(NativeEventKind::Error { what: 100, extra: 0 });
        backend.dispatch_pending().unwrap();
        element.events.clear();

        surface.emit(NativeEventKind::Error { what: 1, extra: 0 });
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.state(), PlaybackState::Error);
        assert!(element.events().is_empty());

        // A new load is a new attempt and may fail again
        backend.load(&source("file://b.mp4"));
        surface.emit(NativeEventKind::Error { what: 1, extra: 0 });
        backend.dispatch_pending().unwrap();
        assert_eq!(element.events().len(), 1);
    }

    #[test]
    fn autoplay_start_failure_follows_prepared() {
        let (mut backend, surface, element) = bound(true);
        backend.load(&source("file://a.mp4"));
        surface.fail_next_start("IllegalStateException");
        surface.emit_prepared();
        backend.dispatch_pending().unwrap();

        assert_eq!(backend.state(), PlaybackState::Error);
        assert_eq!(
            element.events(),
            vec![
                PlayerEvent::Prepared,
                PlayerEvent::Error {
                    message: "IllegalStateException".to_string()
                }
            ]
        );
    }

    #[test]
    fn load_failure_becomes_error_notification() {
        let (mut backend, surface, element) = bound(false);
        surface.fail_next_load("");
        backend.load(&source("file://missing.mp4"));

        assert_eq!(backend.state(), PlaybackState::Error);
        assert!(!surface.busy());
        assert_eq!(
            element.events(),
            vec![PlayerEvent::Error {
                message: vidview_core::error::UNKNOWN_NATIVE_ERROR.to_string()
            }]
        );
        assert_eq!(surface.count(|c| matches!(c, SurfaceCall::RequestFocus)), 0);
    }

    #[test]
    fn recovers_from_error_with_new_source() {
        let (mut backend, surface, _) = bound(false);
        surface.fail_next_load("boom");
        backend.load(&source("file://a.mp4"));
        assert_eq!(backend.state(), PlaybackState::Error);

        backend.load(&source("file://b.mp4"));
        surface.emit_prepared();
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.state(), PlaybackState::Ready);
    }

    #[test]
    fn completion_stops_and_requires_reload() {
        let (mut backend, surface, element) = prepared(false);
        backend.play();
        surface.emit(NativeEventKind::Completion);
        backend.dispatch_pending().unwrap();

        assert_eq!(backend.state(), PlaybackState::Stopped);
        assert_eq!(
            element.events(),
            vec![PlayerEvent::Prepared, PlayerEvent::Completion]
        );

        backend.play();
        assert_eq!(backend.state(), PlaybackState::Stopped);
    }

    #[test]
    fn completion_only_ends_playback() {
        let setups: [fn(&mut SurfaceBackend<FakeSurface>, &FakeSurface); 2] =
            [start_ready, start_paused];

        for setup in setups {
            let (mut backend, surface, element) = bound(false);
            setup(&mut backend, &surface);
            let before = backend.state();
            element.events.clear();

            surface.emit(NativeEventKind::Completion);
            backend.dispatch_pending().unwrap();

            assert_eq!(backend.state(), before);
            assert!(element.events().is_empty());
        }
    }

    #[test]
    fn buffering_info_toggles_busy_only() {
        let (mut backend, surface, element) = prepared(false);
        backend.play();

        surface.emit(NativeEventKind::Info { what: 701, extra: 0 });
        backend.dispatch_pending().unwrap();
        assert!(backend.is_buffering());
        assert!(surface.busy());
        assert_eq!(backend.state(), PlaybackState::Playing);

        surface.emit(NativeEventKind::Info { what: 702, extra: 0 });
        backend.dispatch_pending().unwrap();
        assert!(!backend.is_buffering());
        assert_eq!(backend.state(), PlaybackState::Playing);
        assert_eq!(element.events(), vec![PlayerEvent::Prepared]);
    }

    #[test]
    fn busy_indicator_can_be_disabled() {
        let surface = FakeSurface::new();
        let config = BackendConfig {
            busy_indicator: false,
            ..BackendConfig::default()
        };
        let mut backend = SurfaceBackend::new(surface.clone(), config, None);
        backend.bind(TestElement::new(false)).unwrap();
        backend.load(&source("file://a.mp4"));

        assert!(backend.is_buffering());
        assert!(!surface.busy());
    }

    #[test]
    fn release_unregisters_and_ignores_late_callbacks() {
        let (mut backend, surface, element) = bound(false);
        backend.load(&source("file://a.mp4"));
        let session = surface.last_session().unwrap();
        surface.emit_prepared();

        backend.release();
        assert!(!surface.is_listening());
        assert_eq!(backend.state(), PlaybackState::Unloaded);

        surface.post_raw(NativeEvent::prepared(session));
        backend.dispatch_pending().unwrap();
        assert_eq!(backend.state(), PlaybackState::Unloaded);
        assert!(element.events().is_empty());
    }

    #[test]
    fn native_controls_visibility_passes_through() {
        let (mut backend, surface, _) = bound(false);
        assert!(!backend.is_native_controls_visible());
        surface.set_controls_shown(true);
        assert!(backend.is_native_controls_visible());
        backend.hide_native_controls();
        assert!(!backend.is_native_controls_visible());
    }

    #[test]
    fn fullscreen_goes_through_host_window() {
        use mockall::predicate::eq;
        use vidview_core::{ChromeVisibility, MockHostWindow, Orientation};

        let mut host = MockHostWindow::new();
        host.expect_set_orientation()
            .with(eq(Orientation::Landscape))
            .times(1)
            .returning(|_| Ok(()));
        host.expect_set_chrome_visibility()
            .with(eq(ChromeVisibility::HiddenImmersive))
            .times(1)
            .returning(|_| Ok(()));

        let mut backend =
            SurfaceBackend::new(FakeSurface::new(), BackendConfig::default(), Some(Arc::new(host)));
        backend.full_screen();
        assert_eq!(backend.fullscreen().orientation(), Some(Orientation::Landscape));
        assert_eq!(backend.state(), PlaybackState::Unloaded);
    }

    #[test]
    fn fullscreen_without_host_is_noop() {
        let (mut backend, _, element) = bound(false);
        backend.full_screen();
        backend.set_screen(false);
        backend.exit_full_screen();
        assert_eq!(backend.state(), PlaybackState::Unloaded);
        assert!(element.events().is_empty());
    }
}
