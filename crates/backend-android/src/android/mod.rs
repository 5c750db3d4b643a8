mod bindings;
mod callbacks;
mod factory;
mod host_window;
mod jni_util;
mod video_view;

pub use factory::AndroidBackendFactory;
pub use host_window::ActivityHostWindow;
pub use video_view::{VideoViewSurface, LISTENER_CLASS};
