// Android framework constants and the integer codes passed across JNI

use vidview_core::{ChromeVisibility, Orientation, PlaybackState};

/// `ActivityInfo.SCREEN_ORIENTATION_LANDSCAPE`
pub const SCREEN_ORIENTATION_LANDSCAPE: i32 = 0;
/// `ActivityInfo.SCREEN_ORIENTATION_PORTRAIT`
pub const SCREEN_ORIENTATION_PORTRAIT: i32 = 1;

pub const SYSTEM_UI_FLAG_VISIBLE: i32 = 0;
pub const SYSTEM_UI_FLAG_HIDE_NAVIGATION: i32 = 0x0000_0002;
pub const SYSTEM_UI_FLAG_FULLSCREEN: i32 = 0x0000_0004;
pub const SYSTEM_UI_FLAG_LAYOUT_STABLE: i32 = 0x0000_0100;
pub const SYSTEM_UI_FLAG_LAYOUT_HIDE_NAVIGATION: i32 = 0x0000_0200;
pub const SYSTEM_UI_FLAG_LAYOUT_FULLSCREEN: i32 = 0x0000_0400;
pub const SYSTEM_UI_FLAG_IMMERSIVE_STICKY: i32 = 0x0000_1000;

/// `View.VISIBLE`
pub const VIEW_VISIBLE: i32 = 0;
/// `View.INVISIBLE`
pub const VIEW_INVISIBLE: i32 = 4;

pub fn orientation_code(orientation: Orientation) -> i32 {
    match orientation {
        Orientation::Portrait => SCREEN_ORIENTATION_PORTRAIT,
        Orientation::Landscape => SCREEN_ORIENTATION_LANDSCAPE,
    }
}

/// Flags for `View.setSystemUiVisibility` on the decor view
pub fn system_ui_flags(visibility: ChromeVisibility) -> i32 {
    match visibility {
        ChromeVisibility::Visible => SYSTEM_UI_FLAG_VISIBLE,
        ChromeVisibility::HiddenImmersive => {
            SYSTEM_UI_FLAG_LAYOUT_STABLE
                | SYSTEM_UI_FLAG_LAYOUT_HIDE_NAVIGATION
                | SYSTEM_UI_FLAG_LAYOUT_FULLSCREEN
                | SYSTEM_UI_FLAG_HIDE_NAVIGATION
                | SYSTEM_UI_FLAG_FULLSCREEN
                | SYSTEM_UI_FLAG_IMMERSIVE_STICKY
        }
    }
}

pub fn view_visibility(visible: bool) -> i32 {
    if visible {
        VIEW_VISIBLE
    } else {
        VIEW_INVISIBLE
    }
}

/// Code reported to Java for each playback state
pub fn state_code(state: PlaybackState) -> i32 {
    match state {
        PlaybackState::Unloaded => 0,
        PlaybackState::Preparing => 1,
        PlaybackState::Ready => 2,
        PlaybackState::Playing => 3,
        PlaybackState::Paused => 4,
        PlaybackState::Stopped => 5,
        PlaybackState::Error => 6,
    }
}
