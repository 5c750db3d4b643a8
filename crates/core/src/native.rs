// Opaque native playback surface and the events it reports

use crate::dispatch::NativeEventSender;
use crate::error::NativeError;
use crate::state::SessionId;

/// `MediaPlayer.MEDIA_INFO_BUFFERING_START`
pub const MEDIA_INFO_BUFFERING_START: i32 = 701;
/// `MediaPlayer.MEDIA_INFO_BUFFERING_END`
pub const MEDIA_INFO_BUFFERING_END: i32 = 702;

/// Callback kinds a native engine reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEventKind {
    /// The engine can play the loaded source
    Prepared,
    /// The engine failed; `what`/`extra` are engine specific codes
    Error { what: i32, extra: i32 },
    /// Playback reached the end of the media
    Completion,
    /// Informational callback, e.g. buffering start/end
    Info { what: i32, extra: i32 },
}

/// A native callback, tagged with the load session it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeEvent {
    pub session: SessionId,
    pub kind: NativeEventKind,
}

impl NativeEvent {
    pub fn new(session: SessionId, kind: NativeEventKind) -> Self {
        Self { session, kind }
    }

    pub fn prepared(session: SessionId) -> Self {
        Self::new(session, NativeEventKind::Prepared)
    }

    pub fn error(session: SessionId, what: i32, extra: i32) -> Self {
        Self::new(session, NativeEventKind::Error { what, extra })
    }

    pub fn completion(session: SessionId) -> Self {
        Self::new(session, NativeEventKind::Completion)
    }

    pub fn info(session: SessionId, what: i32) -> Self {
        Self::new(session, NativeEventKind::Info { what, extra: 0 })
    }
}

/// Human readable description of a native media error.
pub fn describe_media_error(what: i32, extra: i32) -> String {
    let what_name = match what {
        1 => "MEDIA_ERROR_UNKNOWN",
        100 => "MEDIA_ERROR_SERVER_DIED",
        _ => "MEDIA_ERROR",
    };
    let extra_name = match extra {
        -1004 => Some("MEDIA_ERROR_IO"),
        -1007 => Some("MEDIA_ERROR_MALFORMED"),
        -1010 => Some("MEDIA_ERROR_UNSUPPORTED"),
        -110 => Some("MEDIA_ERROR_TIMED_OUT"),
        _ => None,
    };

    match extra_name {
        Some(extra_name) => format!("{} ({}): {} ({})", what_name, what, extra_name, extra),
        None => format!("{} ({}), extra {}", what_name, what, extra),
    }
}

/// Opaque native video widget.
///
/// Given a URI the widget produces frames and reports prepared, error,
/// completion and info callbacks through the registered sender. Callbacks
/// may be raised from any thread.
pub trait NativeSurface: Send {
    /// Register the sender native callbacks are posted to.
    fn register_listener(&mut self, sender: NativeEventSender) -> Result<(), NativeError>;

    /// Drop every native listener registration. Must be idempotent.
    fn unregister_listener(&mut self);

    /// Hand a new source to the engine. Callbacks for it carry `session`.
    fn set_video_uri(&mut self, uri: &str, session: SessionId) -> Result<(), NativeError>;

    fn request_focus(&mut self) {}

    fn start(&mut self) -> Result<(), NativeError>;

    fn can_pause(&self) -> bool {
        true
    }

    fn pause(&mut self) -> Result<(), NativeError>;

    fn stop_playback(&mut self) -> Result<(), NativeError>;

    fn seek_to(&mut self, position_ms: u64) -> Result<(), NativeError>;

    fn duration_ms(&self) -> u64;

    fn current_position_ms(&self) -> u64;

    /// Whether the native transport controls are on screen
    fn is_controls_shown(&self) -> bool {
        false
    }

    fn hide_controls(&mut self) {}

    fn set_busy_indicator(&mut self, _visible: bool) {}
}
