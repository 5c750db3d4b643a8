// Player backend over an opaque native surface
//
// Platform crates supply a `NativeSurface`; `SurfaceBackend` turns it into a
// `NativePlayer` with the playback state machine, session guard and error
// conversion.

mod surface_backend;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use surface_backend::SurfaceBackend;

use std::sync::Arc;
use vidview_core::{BackendConfig, BackendFactory, HostWindow, NativePlayer, Result};

/// Factory for backends over surfaces built by a closure
pub struct SurfaceBackendFactory<F> {
    make_surface: F,
}

impl<F, S> SurfaceBackendFactory<F>
where
    F: Fn(&BackendConfig) -> Result<S> + Send + Sync,
    S: vidview_core::NativeSurface + 'static,
{
    pub fn new(make_surface: F) -> Self {
        Self { make_surface }
    }
}

impl<F, S> BackendFactory for SurfaceBackendFactory<F>
where
    F: Fn(&BackendConfig) -> Result<S> + Send + Sync,
    S: vidview_core::NativeSurface + 'static,
{
    fn create_backend(
        &self,
        config: BackendConfig,
        host: Option<Arc<dyn HostWindow>>,
    ) -> Result<Box<dyn NativePlayer>> {
        let surface = (self.make_surface)(&config)?;
        Ok(Box::new(SurfaceBackend::new(surface, config, host)))
    }
}
