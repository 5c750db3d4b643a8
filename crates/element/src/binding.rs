// Live association between one element and one backend

use std::sync::Arc;
use vidview_core::{ElementSurface, NativePlayer, Result};

/// Owns the backend bound to an element.
///
/// Releasing the binding (explicitly or on drop) unregisters the backend's
/// native listeners and makes it forget the element, so nothing is
/// dispatched into a torn-down element.
pub struct NativeSurfaceBinding {
    backend: Box<dyn NativePlayer>,
    released: bool,
}

impl NativeSurfaceBinding {
    pub fn establish(
        mut backend: Box<dyn NativePlayer>,
        element: Arc<dyn ElementSurface>,
    ) -> Result<Self> {
        if let Err(e) = backend.bind(element) {
            log::error!("Failed to bind backend: {}", e);
            backend.release();
            return Err(e);
        }
        Ok(Self {
            backend,
            released: false,
        })
    }

    pub fn backend(&self) -> &dyn NativePlayer {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn NativePlayer {
        self.backend.as_mut()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.backend.release();
    }
}

impl Drop for NativeSurfaceBinding {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for NativeSurfaceBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeSurfaceBinding")
            .field("state", &self.backend.state())
            .field("released", &self.released)
            .finish()
    }
}
