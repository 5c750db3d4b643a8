// Backend configuration

/// Default capacity of the native event queue
pub const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 64;

/// Backend configuration passed to platform factories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendConfig {
    /// Keep the display awake while the surface is attached
    pub keep_screen_on: bool,
    /// Attach the platform's transport controls to the surface
    pub show_native_controls: bool,
    /// Show a busy indicator while preparing and buffering
    pub busy_indicator: bool,
    /// Queue depth past which buffering info callbacks are shed; lifecycle
    /// callbacks are always queued
    pub event_queue_capacity: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            keep_screen_on: true,
            show_native_controls: true,
            busy_indicator: true,
            event_queue_capacity: DEFAULT_EVENT_QUEUE_CAPACITY,
        }
    }
}
