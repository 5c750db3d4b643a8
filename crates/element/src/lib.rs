// Portable video player element and its backend binding

pub mod binding;
pub mod element;

pub use binding::NativeSurfaceBinding;
pub use element::VideoPlayer;

// Re-export the vocabulary application code needs alongside the element
pub use vidview_core::{
    BackendFactory, HostWindow, PlaybackState, PlayerCallback, PlayerConfiguration, PlayerEvent,
    SubscriptionId,
};
