use crate::core::photo_slot::PhotoSlot;
use crate::domain::model::{
    AspectRatio, ExperimentSettings, PhotoHandle, PhotoRole, ReadinessState, TryOnRequest,
};
use crate::utils::error::ComposerError;

/// Tracks the two photos and the experiment settings of a try-on request.
///
/// Readiness is derived from the slots on every call to [`readiness`](Self::readiness)
/// and [`build_request`](Self::build_request); nothing is cached between mutations.
/// The composer has no terminal state: photos can be cleared and picked again
/// after any number of successful builds.
#[derive(Debug, Clone, Default)]
pub struct TryOnRequestComposer {
    person: PhotoSlot,
    garment: PhotoSlot,
    settings: ExperimentSettings,
}

impl TryOnRequestComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with configured settings instead of the built-in defaults.
    pub fn with_settings(settings: ExperimentSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn set_person_photo(&mut self, handle: PhotoHandle) {
        self.set_photo(PhotoRole::Person, handle);
    }

    pub fn clear_person_photo(&mut self) {
        self.clear_photo(PhotoRole::Person);
    }

    pub fn set_garment_photo(&mut self, handle: PhotoHandle) {
        self.set_photo(PhotoRole::Garment, handle);
    }

    pub fn clear_garment_photo(&mut self) {
        self.clear_photo(PhotoRole::Garment);
    }

    pub fn set_photo(&mut self, role: PhotoRole, handle: PhotoHandle) {
        let replaced = self.slot_mut(role).set(handle);
        tracing::debug!(
            role = role.label(),
            replaced = replaced.is_some(),
            readiness = %self.readiness(),
            "photo selected"
        );
    }

    pub fn clear_photo(&mut self, role: PhotoRole) {
        self.slot_mut(role).clear();
        tracing::debug!(role = role.label(), readiness = %self.readiness(), "photo cleared");
    }

    pub fn set_pose_protection(&mut self, enabled: bool) {
        self.settings.pose_protection = enabled;
        tracing::debug!(pose_protection = enabled, "pose protection updated");
    }

    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.settings.aspect_ratio = ratio;
        tracing::debug!(aspect_ratio = %ratio, "aspect ratio updated");
    }

    pub fn settings(&self) -> ExperimentSettings {
        self.settings
    }

    pub fn person_photo(&self) -> Option<&PhotoHandle> {
        self.person.handle()
    }

    pub fn garment_photo(&self) -> Option<&PhotoHandle> {
        self.garment.handle()
    }

    pub fn photo(&self, role: PhotoRole) -> Option<&PhotoHandle> {
        match role {
            PhotoRole::Person => self.person.handle(),
            PhotoRole::Garment => self.garment.handle(),
        }
    }

    pub fn readiness(&self) -> ReadinessState {
        ReadinessState::from_slots(self.person.is_filled(), self.garment.is_filled())
    }

    /// Produces a fresh snapshot of the current photos and settings.
    ///
    /// Fails with [`ComposerError::NotReady`] carrying the current readiness when
    /// either photo is missing.
    pub fn build_request(&self) -> Result<TryOnRequest, ComposerError> {
        match (self.person.handle(), self.garment.handle()) {
            (Some(person), Some(garment)) => Ok(TryOnRequest::new(
                person.clone(),
                garment.clone(),
                self.settings,
            )),
            _ => Err(ComposerError::NotReady(self.readiness())),
        }
    }

    fn slot_mut(&mut self, role: PhotoRole) -> &mut PhotoSlot {
        match role {
            PhotoRole::Person => &mut self.person,
            PhotoRole::Garment => &mut self.garment,
        }
    }
}
