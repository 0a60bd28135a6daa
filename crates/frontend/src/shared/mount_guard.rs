use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// Tracks whether the component that created it is still mounted.
///
/// Async loads check it before writing results back, so a page left while a
/// request is in flight never touches its disposed signals.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Creates a guard bound to the current reactive owner's lifetime.
    pub fn new() -> Self {
        let guard = Self::detached();
        let flag = guard.0.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        guard
    }

    /// A guard that only goes down when [`MountGuard::unmount`] is called.
    pub fn detached() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Runs `f` only while still mounted.
    pub fn run(&self, f: impl FnOnce()) {
        if self.is_mounted() {
            f();
        } else {
            log::debug!("Skipping update for an unmounted view");
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_skipped_after_unmount() {
        let guard = MountGuard::detached();
        let clone = guard.clone();
        let mut applied = 0;
        guard.run(|| applied += 1);
        clone.unmount();
        guard.run(|| applied += 1);
        assert_eq!(applied, 1);
        assert!(!guard.is_mounted());
    }
}
