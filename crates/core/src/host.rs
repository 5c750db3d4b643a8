// Host window capability and fullscreen/orientation control

use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Requested screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Visibility of system chrome (status and navigation bars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromeVisibility {
    /// Default system bars
    #[default]
    Visible,
    /// Bars hidden; a swipe reveals them briefly before they hide again
    HiddenImmersive,
}

/// Window or activity hosting the player surface.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait HostWindow: Send + Sync {
    fn set_orientation(&self, orientation: Orientation) -> Result<()>;

    fn set_chrome_visibility(&self, visibility: ChromeVisibility) -> Result<()>;
}

/// Toggles the host between contained and immersive fullscreen presentation.
///
/// Orientation is best effort: without a host window every request is a
/// silent no-op, and host failures are logged rather than returned.
pub struct FullscreenController {
    host: Option<Arc<dyn HostWindow>>,
    orientation: Mutex<Option<Orientation>>,
}

impl FullscreenController {
    pub fn new(host: Option<Arc<dyn HostWindow>>) -> Self {
        Self {
            host,
            orientation: Mutex::new(None),
        }
    }

    pub fn detached() -> Self {
        Self::new(None)
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Last orientation successfully requested from the host
    pub fn orientation(&self) -> Option<Orientation> {
        *self.orientation.lock()
    }

    pub fn full_screen(&self) {
        self.apply(Orientation::Landscape, ChromeVisibility::HiddenImmersive);
    }

    pub fn exit_full_screen(&self) {
        self.apply(Orientation::Portrait, ChromeVisibility::Visible);
    }

    /// `true` enters fullscreen, `false` leaves it.
    pub fn set_screen(&self, full_screen: bool) {
        if self.host.is_none() {
            log::debug!("No host window bound, ignoring set_screen({})", full_screen);
            return;
        }

        if full_screen {
            self.full_screen();
        } else {
            self.exit_full_screen();
        }
    }

    fn apply(&self, orientation: Orientation, chrome: ChromeVisibility) {
        let Some(host) = &self.host else {
            log::debug!("No host window bound, ignoring {:?} request", orientation);
            return;
        };

        match host.set_orientation(orientation) {
            Ok(()) => *self.orientation.lock() = Some(orientation),
            Err(e) => log::warn!("Failed to request {:?} orientation: {}", orientation, e),
        }

        if let Err(e) = host.set_chrome_visibility(chrome) {
            log::warn!("Failed to set chrome visibility {:?}: {}", chrome, e);
        }
    }
}

impl Default for FullscreenController {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for FullscreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullscreenController")
            .field("has_host", &self.has_host())
            .field("orientation", &self.orientation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn no_host_is_a_silent_noop() {
        let controller = FullscreenController::detached();
        controller.full_screen();
        controller.exit_full_screen();
        controller.set_screen(true);
        controller.set_screen(false);
        assert_eq!(controller.orientation(), None);
    }

    #[test]
    fn full_screen_requests_landscape_and_immersive_chrome() {
        let mut host = MockHostWindow::new();
        let mut seq = Sequence::new();
        host.expect_set_orientation()
            .with(eq(Orientation::Landscape))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        host.expect_set_chrome_visibility()
            .with(eq(ChromeVisibility::HiddenImmersive))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let controller = FullscreenController::new(Some(Arc::new(host)));
        controller.set_screen(true);
        assert_eq!(controller.orientation(), Some(Orientation::Landscape));
    }

    #[test]
    fn exit_full_screen_restores_portrait_and_chrome() {
        let mut host = MockHostWindow::new();
        host.expect_set_orientation()
            .with(eq(Orientation::Portrait))
            .times(1)
            .returning(|_| Ok(()));
        host.expect_set_chrome_visibility()
            .with(eq(ChromeVisibility::Visible))
            .times(1)
            .returning(|_| Ok(()));

        let controller = FullscreenController::new(Some(Arc::new(host)));
        controller.set_screen(false);
        assert_eq!(controller.orientation(), Some(Orientation::Portrait));
    }

    #[test]
    fn host_failures_are_swallowed() {
        let mut host = MockHostWindow::new();
        host.expect_set_orientation()
            .returning(|_| Err(PlayerError::HostWindow("activity destroyed".to_string())));
        host.expect_set_chrome_visibility()
            .returning(|_| Err(PlayerError::HostWindow("activity destroyed".to_string())));

        let controller = FullscreenController::new(Some(Arc::new(host)));
        controller.full_screen();
        assert_eq!(controller.orientation(), None);
    }
}
