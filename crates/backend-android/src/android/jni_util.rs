// JNI call helpers shared by the surface and host window

use jni::objects::{JObject, JString};
use jni::{JNIEnv, JavaVM};
use vidview_core::NativeError;

const LOCAL_FRAME_CAPACITY: i32 = 16;

/// Runs `f` on an attached env inside its own local reference frame.
///
/// A pending Java exception is cleared and its text becomes the error.
pub(crate) fn with_env<T, F>(vm: &JavaVM, f: F) -> Result<T, NativeError>
where
    F: FnOnce(&mut JNIEnv) -> jni::errors::Result<T>,
{
    let mut env = vm
        .attach_current_thread()
        .map_err(|err| NativeError::new(err.to_string()))?;

    let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, f);
    result.map_err(|err| match take_exception(&mut env) {
        Some(message) => NativeError::new(message),
        None => NativeError::new(err.to_string()),
    })
}

fn take_exception(env: &mut JNIEnv) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }

    let throwable = env.exception_occurred().ok();
    let _ = env.exception_clear();
    let text = throwable
        .and_then(|throwable| throwable_text(env, &throwable))
        .unwrap_or_default();
    Some(text)
}

fn throwable_text(env: &mut JNIEnv, throwable: &JObject) -> Option<String> {
    let text = env
        .call_method(throwable, "toString", "()Ljava/lang/String;", &[])
        .and_then(|value| value.l())
        .ok()?;
    let text = JString::from(text);
    let text = env.get_string(&text).ok()?;
    Some(text.into())
}

/// `None` for a null reference
pub(crate) fn non_null<'a, 'local>(obj: &'a JObject<'local>) -> Option<&'a JObject<'local>> {
    if obj.is_null() {
        None
    } else {
        Some(obj)
    }
}
