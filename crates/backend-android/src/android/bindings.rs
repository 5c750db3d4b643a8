// JNI bindings for com.vidview.VideoPlayer
//
// Each Java player owns one `VideoPlayer` element bound to a VideoView
// backend, behind its own lock. Element notifications are collected while
// the player is locked and delivered to the Java listener after it is
// released, so Java code may call straight back into the player from
// `onPrepare` and friends.

use super::factory::AndroidBackendFactory;
use super::host_window::ActivityHostWindow;
use super::jni_util::{non_null, with_env};
use crate::codes::state_code;
use crate::listeners;
use crate::slots::PlayerSlots;
use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::sys::{jboolean, jint, jlong, JNI_FALSE};
use jni::{JNIEnv, JavaVM};
use once_cell::sync::Lazy;
use std::sync::Arc;
use vidview_core::{
    BackendConfig, HostWindow, PlayerError, PlayerEvent, RecordingCallback, Result,
};
use vidview_element::VideoPlayer;

static PLAYER_REGISTRY: Lazy<PlayerSlots<JniPlayer>> = Lazy::new(PlayerSlots::new);

/// Java object receiving `onPrepare`, `onCompletion` and `onError(String)`
struct JavaListener {
    vm: JavaVM,
    target: GlobalRef,
}

impl JavaListener {
    fn deliver(&self, event: &PlayerEvent) {
        let result = with_env(&self.vm, |env| {
            match event {
                PlayerEvent::Prepared => env.call_method(&self.target, "onPrepare", "()V", &[])?,
                PlayerEvent::Completion => {
                    env.call_method(&self.target, "onCompletion", "()V", &[])?
                }
                PlayerEvent::Error { message } => {
                    let message = env.new_string(message)?;
                    env.call_method(
                        &self.target,
                        "onError",
                        "(Ljava/lang/String;)V",
                        &[JValue::Object(message.as_ref())],
                    )?
                }
            };
            Ok(())
        });
        if let Err(err) = result {
            log::warn!("Java listener failed on {:?}: {}", event, err);
        }
    }
}

type Delivery = (Arc<JavaListener>, Vec<PlayerEvent>);

struct JniPlayer {
    player: VideoPlayer,
    events: Arc<RecordingCallback>,
    listener: Option<Arc<JavaListener>>,
}

impl JniPlayer {
    /// Applies queued native callbacks and collects notifications for Java.
    fn settle(&mut self) -> Option<Delivery> {
        if let Err(err) = self.player.dispatch_native_events() {
            log::debug!("Native events not dispatched: {}", err);
        }
        let events = self.events.take_events();
        if events.is_empty() {
            return None;
        }
        self.listener.clone().map(|listener| (listener, events))
    }
}

fn deliver(delivery: Option<Delivery>) {
    if let Some((listener, events)) = delivery {
        for event in &events {
            listener.deliver(event);
        }
    }
}

fn with_player<T, F>(player_id: i64, default: T, f: F) -> T
where
    F: FnOnce(&mut VideoPlayer) -> T,
{
    let outcome = PLAYER_REGISTRY.with(player_id, |entry| {
        let result = f(&mut entry.player);
        (result, entry.settle())
    });
    match outcome {
        Some((result, delivery)) => {
            deliver(delivery);
            result
        }
        None => {
            log::error!("Invalid player ID: {}", player_id);
            default
        }
    }
}

/// Drains native callbacks for the player registered under `handle`.
///
/// Called from the listener entry points. Waits if another thread is using
/// the player. If this thread is inside a command on it, the callback was
/// raised synchronously and the command settles it on return.
pub(crate) fn dispatch_events(handle: i64) {
    if let Some(delivery) = PLAYER_REGISTRY.reenter(handle, JniPlayer::settle) {
        deliver(delivery);
    }
}

fn create_player(
    env: &mut JNIEnv,
    video_view: &JObject,
    controller: &JObject,
    busy_indicator: &JObject,
    activity: &JObject,
    listener: &JObject,
) -> Result<i64> {
    if video_view.is_null() {
        return Err(PlayerError::InvalidState("VideoView is null".to_string()));
    }

    let handle = listeners::next_surface_handle();
    let factory = AndroidBackendFactory::new(
        env,
        handle,
        video_view,
        non_null(controller),
        non_null(busy_indicator),
        BackendConfig::default(),
    )?;

    let host: Option<Arc<dyn HostWindow>> = match non_null(activity) {
        Some(activity) => Some(Arc::new(ActivityHostWindow::new(
            env.get_java_vm()?,
            env.new_global_ref(activity)?,
        ))),
        None => None,
    };
    let listener = match non_null(listener) {
        Some(listener) => Some(Arc::new(JavaListener {
            vm: env.get_java_vm()?,
            target: env.new_global_ref(listener)?,
        })),
        None => None,
    };

    let events = Arc::new(RecordingCallback::new());
    let mut player = VideoPlayer::new();
    player.subscribe(events.clone());
    player.attach_with(&factory, host)?;

    PLAYER_REGISTRY.insert(
        factory.handle(),
        JniPlayer {
            player,
            events,
            listener,
        },
    );
    Ok(factory.handle())
}

/// Create a player bound to `videoView`
///
/// `controller`, `busyIndicator`, `activity` and `listener` may be null.
/// Returns the player handle, or -1 on failure.
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeCreate(
    mut env: JNIEnv,
    _class: JClass,
    video_view: JObject,
    controller: JObject,
    busy_indicator: JObject,
    activity: JObject,
    listener: JObject,
) -> jlong {
    vidview_core::init_logging();

    match create_player(
        &mut env,
        &video_view,
        &controller,
        &busy_indicator,
        &activity,
        &listener,
    ) {
        Ok(player_id) => {
            log::info!("Video player created with ID: {}", player_id);
            player_id
        }
        Err(e) => {
            log::error!("Failed to create video player: {}", e);
            -1
        }
    }
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeSetSource(
    mut env: JNIEnv,
    _class: JClass,
    player_id: jlong,
    uri: JString,
) {
    let uri: String = match env.get_string(&uri) {
        Ok(uri) => uri.into(),
        Err(e) => {
            log::error!("Failed to convert source: {}", e);
            return;
        }
    };

    with_player(player_id, (), |player| player.set_source(uri));
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeSetAutoplay(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
    autoplay: jboolean,
) {
    with_player(player_id, (), |player| {
        player.set_autoplay(autoplay != JNI_FALSE)
    });
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativePlay(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) {
    with_player(player_id, (), |player| player.play());
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativePause(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) {
    with_player(player_id, (), |player| player.pause());
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeStop(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) {
    with_player(player_id, (), |player| player.stop());
}

/// Seek to `seconds` from the start
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeSeek(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
    seconds: jint,
) {
    let Ok(seconds) = u32::try_from(seconds) else {
        log::warn!("Ignoring negative seek: {}", seconds);
        return;
    };
    with_player(player_id, (), |player| player.seek(seconds));
}

/// Duration in milliseconds
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeGetDuration(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) -> jlong {
    with_player(player_id, 0, |player| player.duration() as jlong)
}

/// Position in milliseconds
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeGetCurrentPosition(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) -> jlong {
    with_player(player_id, 0, |player| player.current_position() as jlong)
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeIsNativeControlsVisible(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) -> jboolean {
    with_player(player_id, JNI_FALSE, |player| {
        jboolean::from(player.is_native_controls_visible())
    })
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeHideNativeControls(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) {
    with_player(player_id, (), |player| player.hide_native_controls());
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeGetState(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) -> jint {
    with_player(player_id, -1, |player| state_code(player.state()))
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeIsBuffering(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) -> jboolean {
    with_player(player_id, JNI_FALSE, |player| {
        jboolean::from(player.is_buffering())
    })
}

/// `true` enters fullscreen, `false` restores the window
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeSetScreen(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
    full_screen: jboolean,
) {
    with_player(player_id, (), |player| {
        player.set_screen(full_screen != JNI_FALSE)
    });
}

/// Release the player and its VideoView binding
#[no_mangle]
pub extern "C" fn Java_com_vidview_VideoPlayer_nativeRelease(
    _env: JNIEnv,
    _class: JClass,
    player_id: jlong,
) {
    let slot = PLAYER_REGISTRY.remove(player_id);
    match slot {
        Some(slot) => {
            slot.lock().player.detach();
            log::info!("Video player {} released", player_id);
        }
        None => log::warn!("Release of unknown player {}", player_id),
    }
}
