//! Tracking-session status banners and failure reporting.

use crate::effects::{Effects, SceneEffect};
use std::fmt;

/// Which DOM banners should be on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerState {
    pub loading: bool,
    pub scanning: bool,
    pub error: bool,
}

impl Default for BannerState {
    fn default() -> Self {
        Self {
            loading: true,
            scanning: false,
            error: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Model,
    SlideTexture,
    CalloutTexture,
}

/// A terminal failure of an external operation. Never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReport {
    AssetLoad {
        asset: AssetKind,
        url: String,
        message: String,
    },
    SessionStart {
        message: String,
    },
    PanelBuild {
        message: String,
    },
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReport::AssetLoad {
                asset,
                url,
                message,
            } => write!(f, "failed to load {:?} from {}: {}", asset, url, message),
            FailureReport::SessionStart { message } => {
                write!(f, "failed to start tracking session: {}", message)
            }
            FailureReport::PanelBuild { message } => {
                write!(f, "failed to build info panel: {}", message)
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionBanners {
    state: BannerState,
    failures: Vec<FailureReport>,
}

impl SessionBanners {
    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn failures(&self) -> &[FailureReport] {
        &self.failures
    }

    pub fn session_started(&mut self, out: &mut Effects) {
        log::info!("[tracking] session started");
        self.update(out, |b| {
            b.loading = false;
            b.scanning = true;
        });
    }

    pub fn target_found(&mut self, out: &mut Effects) {
        self.update(out, |b| b.scanning = false);
    }

    pub fn target_lost(&mut self, out: &mut Effects) {
        self.update(out, |b| b.scanning = true);
    }

    pub fn report(&mut self, failure: FailureReport, out: &mut Effects) {
        let session_failed = matches!(failure, FailureReport::SessionStart { .. });
        match failure {
            FailureReport::SessionStart { .. } => log::error!("[tracking] {}", failure),
            FailureReport::PanelBuild { .. } => log::error!("[panel] {}", failure),
            FailureReport::AssetLoad { .. } => log::error!("[asset] {}", failure),
        }
        self.failures.push(failure);
        self.update(out, |b| {
            if session_failed {
                b.loading = false;
            }
            b.error = true;
        });
    }

    fn update(&mut self, out: &mut Effects, change: impl FnOnce(&mut BannerState)) {
        let mut next = self.state;
        change(&mut next);
        if next != self.state {
            self.state = next;
            out.push(SceneEffect::Banners(next));
        }
    }
}
