// NativeSurface over android.widget.VideoView

use super::jni_util::with_env;
use crate::codes::view_visibility;
use crate::listeners;
use jni::objects::{GlobalRef, JObject, JValue};
use jni::sys::JNI_TRUE;
use jni::JavaVM;
use vidview_core::{BackendConfig, NativeError, NativeEventSender, NativeSurface, SessionId};

/// Java class forwarding `MediaPlayer` listener callbacks to `nativeOn*`
pub const LISTENER_CLASS: &str = "com/vidview/NativeListener";

const LISTENER_SETTERS: [(&str, &str); 4] = [
    (
        "setOnPreparedListener",
        "(Landroid/media/MediaPlayer$OnPreparedListener;)V",
    ),
    (
        "setOnErrorListener",
        "(Landroid/media/MediaPlayer$OnErrorListener;)V",
    ),
    (
        "setOnCompletionListener",
        "(Landroid/media/MediaPlayer$OnCompletionListener;)V",
    ),
    (
        "setOnInfoListener",
        "(Landroid/media/MediaPlayer$OnInfoListener;)V",
    ),
];

/// A `VideoView` with its optional `MediaController` and busy `ProgressBar`.
///
/// Every load installs a fresh `NativeListener` carrying the surface handle
/// and the session, so callbacks from an abandoned load arrive tagged with
/// a stale session.
pub struct VideoViewSurface {
    vm: JavaVM,
    handle: i64,
    video_view: GlobalRef,
    controller: Option<GlobalRef>,
    busy_indicator: Option<GlobalRef>,
}

impl VideoViewSurface {
    pub fn new(
        vm: JavaVM,
        handle: i64,
        video_view: GlobalRef,
        controller: Option<GlobalRef>,
        busy_indicator: Option<GlobalRef>,
        config: &BackendConfig,
    ) -> Result<Self, NativeError> {
        let surface = Self {
            vm,
            handle,
            video_view,
            controller,
            busy_indicator,
        };
        surface.configure(config)?;
        log::info!("VideoView surface {} created", handle);
        Ok(surface)
    }

    pub fn handle(&self) -> i64 {
        self.handle
    }

    fn configure(&self, config: &BackendConfig) -> Result<(), NativeError> {
        with_env(&self.vm, |env| {
            if config.keep_screen_on {
                env.call_method(
                    &self.video_view,
                    "setKeepScreenOn",
                    "(Z)V",
                    &[JValue::Bool(JNI_TRUE)],
                )?;
            }

            match (&self.controller, config.show_native_controls) {
                (Some(controller), true) => {
                    env.call_method(
                        controller,
                        "setAnchorView",
                        "(Landroid/view/View;)V",
                        &[JValue::Object(self.video_view.as_obj())],
                    )?;
                    env.call_method(
                        &self.video_view,
                        "setMediaController",
                        "(Landroid/widget/MediaController;)V",
                        &[JValue::Object(controller.as_obj())],
                    )?;
                }
                _ => {
                    env.call_method(
                        &self.video_view,
                        "setMediaController",
                        "(Landroid/widget/MediaController;)V",
                        &[JValue::Object(&JObject::null())],
                    )?;
                }
            }
            Ok(())
        })
    }

    fn call_void(&self, name: &str) -> Result<(), NativeError> {
        with_env(&self.vm, |env| {
            env.call_method(&self.video_view, name, "()V", &[])?;
            Ok(())
        })
    }

    fn query_ms(&self, name: &str) -> u64 {
        let value = with_env(&self.vm, |env| {
            env.call_method(&self.video_view, name, "()I", &[])?.i()
        });
        match value {
            // VideoView reports -1 while the duration is unknown
            Ok(ms) => u64::try_from(ms).unwrap_or(0),
            Err(err) => {
                log::warn!("{} failed: {}", name, err);
                0
            }
        }
    }

    fn set_listeners(&self, listener: Option<(i64, SessionId)>) -> Result<(), NativeError> {
        with_env(&self.vm, |env| {
            let listener = match listener {
                Some((handle, session)) => env.new_object(
                    LISTENER_CLASS,
                    "(JJ)V",
                    &[JValue::Long(handle), JValue::Long(session.0 as i64)],
                )?,
                None => JObject::null(),
            };
            for (setter, signature) in LISTENER_SETTERS {
                env.call_method(
                    &self.video_view,
                    setter,
                    signature,
                    &[JValue::Object(&listener)],
                )?;
            }
            Ok(())
        })
    }
}

impl NativeSurface for VideoViewSurface {
    fn register_listener(&mut self, sender: NativeEventSender) -> Result<(), NativeError> {
        listeners::register(self.handle, sender);
        Ok(())
    }

    fn unregister_listener(&mut self) {
        listeners::unregister(self.handle);
        if let Err(err) = self.set_listeners(None) {
            log::warn!("Failed to clear VideoView listeners: {}", err);
        }
    }

    fn set_video_uri(&mut self, uri: &str, session: SessionId) -> Result<(), NativeError> {
        self.set_listeners(Some((self.handle, session)))?;
        with_env(&self.vm, |env| {
            let uri = env.new_string(uri)?;
            let parsed = env
                .call_static_method(
                    "android/net/Uri",
                    "parse",
                    "(Ljava/lang/String;)Landroid/net/Uri;",
                    &[JValue::Object(uri.as_ref())],
                )?
                .l()?;
            env.call_method(
                &self.video_view,
                "setVideoURI",
                "(Landroid/net/Uri;)V",
                &[JValue::Object(&parsed)],
            )?;
            Ok(())
        })
    }

    fn request_focus(&mut self) {
        let result = with_env(&self.vm, |env| {
            env.call_method(&self.video_view, "requestFocus", "()Z", &[])?.z()
        });
        if let Err(err) = result {
            log::debug!("requestFocus failed: {}", err);
        }
    }

    fn start(&mut self) -> Result<(), NativeError> {
        self.call_void("start")
    }

    fn can_pause(&self) -> bool {
        with_env(&self.vm, |env| {
            env.call_method(&self.video_view, "canPause", "()Z", &[])?.z()
        })
        .unwrap_or(false)
    }

    fn pause(&mut self) -> Result<(), NativeError> {
        self.call_void("pause")
    }

    fn stop_playback(&mut self) -> Result<(), NativeError> {
        self.call_void("stopPlayback")
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<(), NativeError> {
        let position = i32::try_from(position_ms).unwrap_or(i32::MAX);
        with_env(&self.vm, |env| {
            env.call_method(&self.video_view, "seekTo", "(I)V", &[JValue::Int(position)])?;
            Ok(())
        })
    }

    fn duration_ms(&self) -> u64 {
        self.query_ms("getDuration")
    }

    fn current_position_ms(&self) -> u64 {
        self.query_ms("getCurrentPosition")
    }

    fn is_controls_shown(&self) -> bool {
        let Some(controller) = &self.controller else {
            return false;
        };
        with_env(&self.vm, |env| {
            env.call_method(controller, "isShowing", "()Z", &[])?.z()
        })
        .unwrap_or(false)
    }

    fn hide_controls(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        let result = with_env(&self.vm, |env| {
            env.call_method(controller, "hide", "()V", &[])?;
            Ok(())
        });
        if let Err(err) = result {
            log::warn!("Failed to hide media controller: {}", err);
        }
    }

    fn set_busy_indicator(&mut self, visible: bool) {
        let Some(indicator) = &self.busy_indicator else {
            return;
        };
        let result = with_env(&self.vm, |env| {
            env.call_method(
                indicator,
                "setVisibility",
                "(I)V",
                &[JValue::Int(view_visibility(visible))],
            )?;
            Ok(())
        });
        if let Err(err) = result {
            log::warn!("Failed to toggle busy indicator: {}", err);
        }
    }
}
