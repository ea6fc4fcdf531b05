use crate::core::composer::TryOnRequestComposer;
use crate::domain::model::{
    AspectRatio, ExperimentSettings, PhotoHandle, PhotoRole, ReadinessState, TryOnRequest,
};
use crate::utils::error::ComposerError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to a [`TryOnRequestComposer`].
///
/// Every call holds the lock for one assignment or one read, so concurrent
/// picker completions resolve as last-writer-wins.
#[derive(Debug, Clone, Default)]
pub struct SharedComposer {
    inner: Arc<Mutex<TryOnRequestComposer>>,
}

impl SharedComposer {
    pub fn new(composer: TryOnRequestComposer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(composer)),
        }
    }

    // Any interleaving of mutators leaves a valid composer, so a poisoned
    // lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, TryOnRequestComposer> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_photo(&self, role: PhotoRole, handle: PhotoHandle) {
        self.lock().set_photo(role, handle);
    }

    pub fn clear_photo(&self, role: PhotoRole) {
        self.lock().clear_photo(role);
    }

    pub fn set_pose_protection(&self, enabled: bool) {
        self.lock().set_pose_protection(enabled);
    }

    pub fn set_aspect_ratio(&self, ratio: AspectRatio) {
        self.lock().set_aspect_ratio(ratio);
    }

    pub fn settings(&self) -> ExperimentSettings {
        self.lock().settings()
    }

    pub fn readiness(&self) -> ReadinessState {
        self.lock().readiness()
    }

    pub fn build_request(&self) -> Result<TryOnRequest, ComposerError> {
        self.lock().build_request()
    }

    /// Runs `f` against the composer while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut TryOnRequestComposer) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedComposer::default();
        let other = shared.clone();

        other.set_photo(PhotoRole::Person, PhotoHandle::new("p1").unwrap());
        assert_eq!(shared.readiness(), ReadinessState::MissingGarmentPhoto);

        shared.set_aspect_ratio(AspectRatio::OneByOne);
        assert_eq!(other.settings().aspect_ratio, AspectRatio::OneByOne);
    }

    #[test]
    fn test_concurrent_picks_leave_one_handle() {
        let shared = SharedComposer::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let handle = PhotoHandle::new(format!("garment-{}", i)).unwrap();
                    shared.set_photo(PhotoRole::Garment, handle);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let picked = shared.with(|c| c.garment_photo().cloned()).unwrap();
        assert!(picked.as_str().starts_with("garment-"));
        assert_eq!(shared.readiness(), ReadinessState::MissingPersonPhoto);
    }
}
