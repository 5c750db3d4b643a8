// Playback state machine and shared state container

use crate::error::{PlayerError, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// No source has been loaded
    #[default]
    Unloaded,
    /// A source was handed to the native engine and is not ready yet
    Preparing,
    /// The engine is prepared and can play or seek
    Ready,
    /// Media is currently playing
    Playing,
    /// Media is paused
    Paused,
    /// Playback was stopped or reached the end of the media
    Stopped,
    /// The engine reported a fault
    Error,
}

impl PlaybackState {
    /// Whether the engine has prepared the current source.
    ///
    /// Duration and position are only meaningful in these states, and
    /// transport commands are only forwarded while this holds.
    pub fn is_prepared(self) -> bool {
        matches!(
            self,
            PlaybackState::Ready
                | PlaybackState::Playing
                | PlaybackState::Paused
                | PlaybackState::Stopped
        )
    }

    pub fn can_transition_to(self, to: PlaybackState) -> bool {
        use PlaybackState::*;

        match (self, to) {
            // Native errors are accepted from anywhere
            (_, Error) => true,

            // Loading a new source abandons whatever came before
            (Unloaded | Ready | Playing | Paused | Stopped | Error, Preparing) => true,
            (Preparing, Preparing) => true,

            (Preparing, Ready) => true,

            (Ready, Playing) | (Paused, Playing) => true,
            (Playing, Paused) => true,
            (Ready | Playing | Paused, Stopped) => true,

            _ => false,
        }
    }
}

/// Identifies one source load.
///
/// Every load hands the native surface a fresh id; native callbacks carry
/// the id back so callbacks from an abandoned load can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Desired configuration of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerConfiguration {
    /// Source URI; `None` means "no source"
    pub source: Option<String>,
    /// Start playback as soon as the source is prepared
    pub autoplay: bool,
}

impl PlayerConfiguration {
    pub fn new(source: impl Into<String>, autoplay: bool) -> Self {
        let mut config = Self {
            source: None,
            autoplay,
        };
        config.set_source(source);
        config
    }

    /// Returns the source only when it is usable.
    pub fn playable_source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !is_blank(s))
    }

    /// Stores `uri` unless it is blank. Returns whether anything changed.
    pub fn set_source(&mut self, uri: impl Into<String>) -> bool {
        let uri = uri.into();
        if is_blank(&uri) {
            return false;
        }
        self.source = Some(uri);
        true
    }
}

/// Empty and whitespace-only URIs mean "no source".
pub fn is_blank(uri: &str) -> bool {
    uri.trim().is_empty()
}

/// Thread-safe player state container
#[derive(Clone)]
pub struct PlayerStateContainer {
    state: Arc<RwLock<PlaybackState>>,
    session: Arc<AtomicU64>,
    buffering: Arc<AtomicBool>,
}

impl PlayerStateContainer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(PlaybackState::Unloaded)),
            session: Arc::new(AtomicU64::new(0)),
            buffering: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn get_state(&self) -> PlaybackState {
        *self.state.read()
    }

    /// Moves to `to` if the state machine allows it.
    pub fn transition(&self, to: PlaybackState) -> Result<PlaybackState> {
        let mut state = self.state.write();
        let from = *state;
        if !from.can_transition_to(to) {
            return Err(PlayerError::InvalidState(format!(
                "Invalid state transition from {:?} to {:?}",
                from, to
            )));
        }
        *state = to;
        log::debug!("Player state changed: {:?} -> {:?}", from, to);
        Ok(from)
    }

    /// Starts a new load session and returns its id.
    pub fn begin_session(&self) -> SessionId {
        SessionId(self.session.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn current_session(&self) -> SessionId {
        SessionId(self.session.load(Ordering::SeqCst))
    }

    pub fn is_buffering(&self) -> bool {
        self.buffering.load(Ordering::Relaxed)
    }

    pub fn set_buffering(&self, buffering: bool) {
        self.buffering.store(buffering, Ordering::Relaxed);
    }

    /// Forgets the current state without validating the transition.
    pub fn reset(&self) {
        *self.state.write() = PlaybackState::Unloaded;
        self.buffering.store(false, Ordering::Relaxed);
    }
}

impl Default for PlayerStateContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlayerStateContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStateContainer")
            .field("state", &self.get_state())
            .field("session", &self.current_session())
            .field("buffering", &self.is_buffering())
            .finish()
    }
}
