// Scriptable native surface for tests

use parking_lot::Mutex;
use std::sync::Arc;
use vidview_core::{NativeError, NativeEvent, NativeEventKind, NativeEventSender, NativeSurface, SessionId};

/// A call the backend made on the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    RegisterListener,
    UnregisterListener,
    SetVideoUri { uri: String, session: SessionId },
    RequestFocus,
    Start,
    Pause,
    StopPlayback,
    SeekTo(u64),
    HideControls,
    BusyIndicator(bool),
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<SurfaceCall>,
    listener: Option<NativeEventSender>,
    retained: Option<NativeEventSender>,
    last_session: Option<SessionId>,
    last_uri: Option<String>,
    duration_ms: u64,
    position_ms: u64,
    can_pause: bool,
    controls_shown: bool,
    busy: bool,
    fail_next_load: Option<String>,
    fail_next_start: Option<String>,
}

/// In-memory surface that records calls and lets tests raise native callbacks.
///
/// Clones share state, so a test can keep one handle while the backend owns
/// another.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                can_pause: true,
                ..FakeState::default()
            })),
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.inner.lock().calls.clone()
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&SurfaceCall) -> bool,
    {
        self.inner.lock().calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn is_listening(&self) -> bool {
        self.inner.lock().listener.is_some()
    }

    pub fn last_session(&self) -> Option<SessionId> {
        self.inner.lock().last_session
    }

    pub fn last_uri(&self) -> Option<String> {
        self.inner.lock().last_uri.clone()
    }

    pub fn last_seek(&self) -> Option<u64> {
        self.inner.lock().calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SeekTo(ms) => Some(*ms),
            _ => None,
        })
    }

    pub fn busy(&self) -> bool {
        self.inner.lock().busy
    }

    pub fn set_media(&self, duration_ms: u64, position_ms: u64) {
        let mut state = self.inner.lock();
        state.duration_ms = duration_ms;
        state.position_ms = position_ms;
    }

    pub fn set_can_pause(&self, can_pause: bool) {
        self.inner.lock().can_pause = can_pause;
    }

    pub fn set_controls_shown(&self, shown: bool) {
        self.inner.lock().controls_shown = shown;
    }

    pub fn fail_next_load(&self, message: &str) {
        self.inner.lock().fail_next_load = Some(message.to_string());
    }

    pub fn fail_next_start(&self, message: &str) {
        self.inner.lock().fail_next_start = Some(message.to_string());
    }

    /// Raise a callback for the most recent load, as the engine would.
    ///
    /// Returns `false` when no listener is registered.
    pub fn emit(&self, kind: NativeEventKind) -> bool {
        let session = self.last_session().unwrap_or_default();
        self.emit_for(session, kind)
    }

    pub fn emit_prepared(&self) -> bool {
        self.emit(NativeEventKind::Prepared)
    }

    pub fn emit_for(&self, session: SessionId, kind: NativeEventKind) -> bool {
        let listener = self.inner.lock().listener.clone();
        match listener {
            Some(sender) => sender.post(NativeEvent::new(session, kind)),
            None => false,
        }
    }

    /// Post through the last sender ever registered, even after unregistration.
    ///
    /// Models an engine thread that grabbed the sender before teardown.
    pub fn post_raw(&self, event: NativeEvent) -> bool {
        let retained = self.inner.lock().retained.clone();
        retained.map(|sender| sender.post(event)).unwrap_or(false)
    }

    fn record(&self, call: SurfaceCall) {
        self.inner.lock().calls.push(call);
    }
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSurface for FakeSurface {
    fn register_listener(&mut self, sender: NativeEventSender) -> Result<(), NativeError> {
        self.record(SurfaceCall::RegisterListener);
        let mut state = self.inner.lock();
        state.retained = Some(sender.clone());
        state.listener = Some(sender);
        Ok(())
    }

    fn unregister_listener(&mut self) {
        self.record(SurfaceCall::UnregisterListener);
        self.inner.lock().listener = None;
    }

    fn set_video_uri(&mut self, uri: &str, session: SessionId) -> Result<(), NativeError> {
        self.record(SurfaceCall::SetVideoUri {
            uri: uri.to_string(),
            session,
        });
        let mut state = self.inner.lock();
        if let Some(message) = state.fail_next_load.take() {
            return Err(NativeError::new(message));
        }
        state.last_uri = Some(uri.to_string());
        state.last_session = Some(session);
        Ok(())
    }

    fn request_focus(&mut self) {
        self.record(SurfaceCall::RequestFocus);
    }

    fn start(&mut self) -> Result<(), NativeError> {
        self.record(SurfaceCall::Start);
        match self.inner.lock().fail_next_start.take() {
            Some(message) => Err(NativeError::new(message)),
            None => Ok(()),
        }
    }

    fn can_pause(&self) -> bool {
        self.inner.lock().can_pause
    }

    fn pause(&mut self) -> Result<(), NativeError> {
        self.record(SurfaceCall::Pause);
        Ok(())
    }

    fn stop_playback(&mut self) -> Result<(), NativeError> {
        self.record(SurfaceCall::StopPlayback);
        Ok(())
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<(), NativeError> {
        self.record(SurfaceCall::SeekTo(position_ms));
        self.inner.lock().position_ms = position_ms;
        Ok(())
    }

    fn duration_ms(&self) -> u64 {
        self.inner.lock().duration_ms
    }

    fn current_position_ms(&self) -> u64 {
        self.inner.lock().position_ms
    }

    fn is_controls_shown(&self) -> bool {
        self.inner.lock().controls_shown
    }

    fn hide_controls(&mut self) {
        self.record(SurfaceCall::HideControls);
        self.inner.lock().controls_shown = false;
    }

    fn set_busy_indicator(&mut self, visible: bool) {
        self.record(SurfaceCall::BusyIndicator(visible));
        self.inner.lock().busy = visible;
    }
}
