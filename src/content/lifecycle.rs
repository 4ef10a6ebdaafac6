use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{ContentConfig, ContentPayload, ContentSource, Diagnostics, resolve_content};

/// Loading state of one mount. Only ever moves from `Loading` to `Settled`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    /// `None` when the fetch failed and the fallback applies.
    Settled(Option<ContentPayload>),
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `false` if the phase had already settled, the earlier
    /// result is kept in that case.
    pub fn settle(&mut self, content: Option<ContentPayload>) -> bool {
        if self.is_loading() {
            *self = Self::Settled(content);
            true
        } else {
            false
        }
    }

    /// Content to render, with the fallback applied. `None` while loading.
    pub fn content(&self) -> Option<ContentPayload> {
        match self {
            Self::Loading => None,
            Self::Settled(content) => {
                Some(content.clone().unwrap_or_else(ContentPayload::fallback))
            }
        }
    }
}

/// Tied to a mounted component. Once ended, pending continuations must not
/// touch component state.
#[derive(Clone, Debug, Default)]
pub struct MountLifetime {
    ended: Arc<AtomicBool>,
}

impl MountLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end(&self) {
        self.ended.store(true, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        !self.ended.load(Ordering::Acquire)
    }
}

/// Runs `settle` exactly once: with the loaded content on [`finish`], or
/// with `None` when dropped unfinished (e.g. the future unwound).
///
/// [`finish`]: SettleGuard::finish
pub struct SettleGuard<F: FnOnce(Option<ContentPayload>)> {
    settle: Option<F>,
}

impl<F: FnOnce(Option<ContentPayload>)> SettleGuard<F> {
    pub fn new(settle: F) -> Self {
        Self {
            settle: Some(settle),
        }
    }

    pub fn finish(mut self, content: Option<ContentPayload>) {
        if let Some(settle) = self.settle.take() {
            settle(content);
        }
    }
}

impl<F: FnOnce(Option<ContentPayload>)> Drop for SettleGuard<F> {
    fn drop(&mut self) {
        if let Some(settle) = self.settle.take() {
            settle(None);
        }
    }
}

/// The per-mount load: resolves the content and hands it to `settle`,
/// unless `lifetime` ended while the request was in flight.
pub async fn load_for_mount<S, D, F>(
    source: &S,
    config: &ContentConfig,
    diagnostics: &D,
    lifetime: &MountLifetime,
    settle: F,
) where
    S: ContentSource,
    D: Diagnostics,
    F: FnOnce(Option<ContentPayload>),
{
    let guard = SettleGuard::new(|content| {
        if lifetime.is_alive() {
            settle(content);
        } else {
            log::debug!(target: "content", "unmounted before content settled, result dropped");
        }
    });
    let content = resolve_content(source, config, diagnostics).await;
    guard.finish(content);
}
