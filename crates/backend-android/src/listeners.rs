// Registry routing native listener callbacks to the backend that owns the view

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use vidview_core::{NativeEvent, NativeEventSender};

static LISTENER_REGISTRY: Lazy<Mutex<HashMap<i64, NativeEventSender>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

static NEXT_SURFACE_HANDLE: AtomicI64 = AtomicI64::new(1);

/// Allocates the handle a surface's Java listener reports back with.
pub fn next_surface_handle() -> i64 {
    NEXT_SURFACE_HANDLE.fetch_add(1, Ordering::Relaxed)
}

pub fn register(handle: i64, sender: NativeEventSender) {
    LISTENER_REGISTRY.lock().insert(handle, sender);
    log::debug!("Listener registered for surface {}", handle);
}

pub fn unregister(handle: i64) -> bool {
    let removed = LISTENER_REGISTRY.lock().remove(&handle).is_some();
    if removed {
        log::debug!("Listener unregistered for surface {}", handle);
    }
    removed
}

/// Posts a native callback; safe from any thread.
///
/// Returns `false` if the surface is no longer registered.
pub fn post(handle: i64, event: NativeEvent) -> bool {
    let sender = LISTENER_REGISTRY.lock().get(&handle).cloned();
    match sender {
        Some(sender) => sender.post(event),
        None => {
            log::debug!("No listener for surface {}, dropping {:?}", handle, event);
            false
        }
    }
}
