// Backend capability trait and the element surface backends report to

use crate::config::BackendConfig;
use crate::error::Result;
use crate::host::HostWindow;
use crate::state::{PlaybackState, PlayerConfiguration};
use std::sync::Arc;

/// What a backend reads from, and reports to, the element it is bound to.
pub trait ElementSurface: Send + Sync {
    /// Snapshot of the element's current configuration
    fn configuration(&self) -> PlayerConfiguration;

    fn on_prepare(&self);

    fn on_completion(&self);

    fn on_error(&self, message: &str);
}

/// Core player backend trait
/// All platform-specific implementations must implement this trait
///
/// Transport commands never fail from the caller's point of view: commands
/// issued before the source is prepared are dropped, and native faults are
/// reported through [`ElementSurface::on_error`].
pub trait NativePlayer: Send {
    /// Bind to an element. Replaces any earlier element.
    fn bind(&mut self, element: Arc<dyn ElementSurface>) -> Result<()>;

    /// Load the configuration's source. Blank sources are ignored.
    fn load(&mut self, config: &PlayerConfiguration);

    fn play(&mut self);

    fn pause(&mut self);

    fn stop(&mut self);

    /// Seek to a position given in whole seconds
    fn seek(&mut self, seconds: u32);

    /// Duration in milliseconds, `0` until prepared
    fn duration(&self) -> u64;

    /// Position in milliseconds, `0` until prepared
    fn current_position(&self) -> u64;

    fn is_native_controls_visible(&self) -> bool;

    fn hide_native_controls(&mut self);

    fn state(&self) -> PlaybackState;

    fn is_buffering(&self) -> bool;

    fn full_screen(&mut self);

    fn exit_full_screen(&mut self);

    fn set_screen(&mut self, full_screen: bool);

    /// Handle queued native callbacks. Must be called from the UI context.
    fn dispatch_pending(&mut self) -> Result<usize>;

    /// Unregister native listeners and forget the bound element
    fn release(&mut self);
}

/// Backend factory trait
/// Allows creating platform-specific backends on attach
pub trait BackendFactory: Send + Sync {
    fn create_backend(
        &self,
        config: BackendConfig,
        host: Option<Arc<dyn HostWindow>>,
    ) -> Result<Box<dyn NativePlayer>>;

    fn preferred_config(&self) -> BackendConfig {
        BackendConfig::default()
    }
}
