use super::video_view::VideoViewSurface;
use jni::objects::{GlobalRef, JObject};
use jni::{JNIEnv, JavaVM};
use std::sync::Arc;
use vidview_backend::SurfaceBackend;
use vidview_core::{BackendConfig, BackendFactory, HostWindow, NativePlayer, Result};

/// Builds `VideoView` backends for widgets created by the Java layout.
///
/// Every backend from one factory reports native callbacks under the same
/// handle, so at most one of them may be attached at a time.
pub struct AndroidBackendFactory {
    vm: JavaVM,
    handle: i64,
    video_view: GlobalRef,
    controller: Option<GlobalRef>,
    busy_indicator: Option<GlobalRef>,
    config: BackendConfig,
}

impl AndroidBackendFactory {
    pub fn new(
        env: &mut JNIEnv,
        handle: i64,
        video_view: &JObject,
        controller: Option<&JObject>,
        busy_indicator: Option<&JObject>,
        config: BackendConfig,
    ) -> Result<Self> {
        let vm = env.get_java_vm()?;
        let video_view = env.new_global_ref(video_view)?;
        let controller = match controller {
            Some(controller) => Some(env.new_global_ref(controller)?),
            None => None,
        };
        let busy_indicator = match busy_indicator {
            Some(indicator) => Some(env.new_global_ref(indicator)?),
            None => None,
        };

        Ok(Self {
            vm,
            handle,
            video_view,
            controller,
            busy_indicator,
            config,
        })
    }

    pub fn handle(&self) -> i64 {
        self.handle
    }
}

impl BackendFactory for AndroidBackendFactory {
    fn create_backend(
        &self,
        config: BackendConfig,
        host: Option<Arc<dyn HostWindow>>,
    ) -> Result<Box<dyn NativePlayer>> {
        let vm = self.vm.attach_current_thread()?.get_java_vm()?;
        let surface = VideoViewSurface::new(
            vm,
            self.handle,
            self.video_view.clone(),
            self.controller.clone(),
            self.busy_indicator.clone(),
            &config,
        )?;
        Ok(Box::new(SurfaceBackend::new(surface, config, host)))
    }

    fn preferred_config(&self) -> BackendConfig {
        self.config
    }
}
