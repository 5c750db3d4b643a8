// Entry points for com.vidview.NativeListener
//
// VideoView invokes its MediaPlayer listeners on the main looper. Each
// callback is queued for the surface's backend and then drained through the
// owning player.

use super::bindings;
use crate::listeners;
use jni::objects::JClass;
use jni::sys::{jboolean, jint, jlong, JNI_TRUE};
use jni::JNIEnv;
use vidview_core::{NativeEvent, SessionId};

fn forward(handle: jlong, event: NativeEvent) -> bool {
    let posted = listeners::post(handle, event);
    if posted {
        bindings::dispatch_events(handle);
    }
    posted
}

fn session(raw: jlong) -> SessionId {
    SessionId(raw as u64)
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_NativeListener_nativeOnPrepared(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    session_id: jlong,
) {
    forward(handle, NativeEvent::prepared(session(session_id)));
}

/// Always reports the error as handled so VideoView skips its own dialog
#[no_mangle]
pub extern "C" fn Java_com_vidview_NativeListener_nativeOnError(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    session_id: jlong,
    what: jint,
    extra: jint,
) -> jboolean {
    forward(handle, NativeEvent::error(session(session_id), what, extra));
    JNI_TRUE
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_NativeListener_nativeOnCompletion(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    session_id: jlong,
) {
    forward(handle, NativeEvent::completion(session(session_id)));
}

#[no_mangle]
pub extern "C" fn Java_com_vidview_NativeListener_nativeOnInfo(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    session_id: jlong,
    what: jint,
    _extra: jint,
) -> jboolean {
    jboolean::from(forward(handle, NativeEvent::info(session(session_id), what)))
}
