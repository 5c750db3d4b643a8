// HostWindow over the hosting Activity

use super::jni_util::with_env;
use crate::codes::{orientation_code, system_ui_flags};
use jni::objects::{GlobalRef, JValue};
use jni::JavaVM;
use vidview_core::{ChromeVisibility, HostWindow, NativeError, Orientation, PlayerError, Result};

pub struct ActivityHostWindow {
    vm: JavaVM,
    activity: GlobalRef,
}

impl ActivityHostWindow {
    pub fn new(vm: JavaVM, activity: GlobalRef) -> Self {
        Self { vm, activity }
    }
}

fn host_error(err: NativeError) -> PlayerError {
    PlayerError::HostWindow(err.message().to_string())
}

impl HostWindow for ActivityHostWindow {
    fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        log::debug!("Requesting {:?} orientation", orientation);
        with_env(&self.vm, |env| {
            env.call_method(
                &self.activity,
                "setRequestedOrientation",
                "(I)V",
                &[JValue::Int(orientation_code(orientation))],
            )?;
            Ok(())
        })
        .map_err(host_error)
    }

    fn set_chrome_visibility(&self, visibility: ChromeVisibility) -> Result<()> {
        with_env(&self.vm, |env| {
            let window = env
                .call_method(&self.activity, "getWindow", "()Landroid/view/Window;", &[])?
                .l()?;
            let decor = env
                .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])?
                .l()?;
            env.call_method(
                &decor,
                "setSystemUiVisibility",
                "(I)V",
                &[JValue::Int(system_ui_flags(visibility))],
            )?;
            Ok(())
        })
        .map_err(host_error)
    }
}
