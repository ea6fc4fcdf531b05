use crate::core::composer::TryOnRequestComposer;
use crate::domain::model::{PhotoHandle, PhotoRole, ReadinessState};
use crate::utils::error::{Result, TryOnError};
use crate::utils::validation::{validate_file_size, validate_image_extension};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// What the platform image picker reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(PickedAsset),
    Cancelled,
    PermissionDenied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedAsset {
    pub uri: String,
    pub file_size_bytes: Option<u64>,
}

impl PickedAsset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            file_size_bytes: None,
        }
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.file_size_bytes = Some(bytes);
        self
    }
}

/// Limits applied to picked photos before they reach the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for PickerPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: ["jpg", "jpeg", "png", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl PickerPolicy {
    pub fn check(&self, asset: &PickedAsset) -> Result<PhotoHandle> {
        let handle = PhotoHandle::new(asset.uri.clone())?;
        validate_image_extension(handle.as_str(), &self.allowed_extensions)?;
        if let Some(size) = asset.file_size_bytes {
            validate_file_size(size, self.max_file_size_bytes)?;
        }
        Ok(handle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// The slot took the new photo; carries the readiness afterwards.
    Updated(ReadinessState),
    /// The user backed out; nothing changed.
    Unchanged,
}

/// Applies a finished pick to the composer.
///
/// Cancellation, denied permission and rejected assets all leave the slot as
/// it was. Denied permission and rejections are returned as errors so the
/// caller can tell the user.
pub fn apply_pick(
    composer: &mut TryOnRequestComposer,
    role: PhotoRole,
    outcome: PickOutcome,
    policy: &PickerPolicy,
) -> Result<PickResult> {
    match outcome {
        PickOutcome::Cancelled => {
            tracing::debug!(role = role.label(), "photo pick cancelled");
            Ok(PickResult::Unchanged)
        }
        PickOutcome::PermissionDenied => {
            tracing::warn!(role = role.label(), "photo library permission denied");
            Err(TryOnError::PermissionDenied)
        }
        PickOutcome::Selected(asset) => {
            let handle = policy.check(&asset).map_err(|e| {
                tracing::warn!(role = role.label(), uri = %asset.uri, "photo rejected: {}", e);
                e
            })?;
            composer.set_photo(role, handle);
            Ok(PickResult::Updated(composer.readiness()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_photo_fills_slot() {
        let mut composer = TryOnRequestComposer::new();
        let result = apply_pick(
            &mut composer,
            PhotoRole::Person,
            PickOutcome::Selected(PickedAsset::new("file:///p1.jpg").with_size(2048)),
            &PickerPolicy::default(),
        )
        .unwrap();

        assert_eq!(result, PickResult::Updated(ReadinessState::MissingGarmentPhoto));
        assert_eq!(composer.person_photo().unwrap().as_str(), "file:///p1.jpg");
    }

    #[test]
    fn test_cancel_keeps_existing_photo() {
        let mut composer = TryOnRequestComposer::new();
        composer.set_garment_photo(PhotoHandle::new("g1.png").unwrap());

        let result = apply_pick(
            &mut composer,
            PhotoRole::Garment,
            PickOutcome::Cancelled,
            &PickerPolicy::default(),
        )
        .unwrap();

        assert_eq!(result, PickResult::Unchanged);
        assert_eq!(composer.garment_photo().unwrap().as_str(), "g1.png");
    }

    #[test]
    fn test_permission_denied_is_reported_without_mutation() {
        let mut composer = TryOnRequestComposer::new();
        let err = apply_pick(
            &mut composer,
            PhotoRole::Person,
            PickOutcome::PermissionDenied,
            &PickerPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(err, TryOnError::PermissionDenied));
        assert_eq!(composer.readiness(), ReadinessState::MissingBoth);
    }

    #[test]
    fn test_extensionless_content_uri_is_accepted() {
        let mut composer = TryOnRequestComposer::new();
        let uri = "content://media/external/images/media/42";

        let result = apply_pick(
            &mut composer,
            PhotoRole::Person,
            PickOutcome::Selected(PickedAsset::new(uri)),
            &PickerPolicy::default(),
        )
        .unwrap();

        assert_eq!(result, PickResult::Updated(ReadinessState::MissingGarmentPhoto));
        assert_eq!(composer.person_photo().unwrap().as_str(), uri);
    }

    #[test]
    fn test_oversized_or_wrong_type_is_rejected() {
        let mut composer = TryOnRequestComposer::new();
        composer.set_person_photo(PhotoHandle::new("old.jpg").unwrap());
        let policy = PickerPolicy::default();
        let mut pick = |asset: PickedAsset| {
            apply_pick(
                &mut composer,
                PhotoRole::Person,
                PickOutcome::Selected(asset),
                &policy,
            )
        };

        let too_big = PickedAsset::new("big.jpg").with_size(DEFAULT_MAX_FILE_SIZE_BYTES + 1);
        assert!(pick(too_big).is_err());
        assert!(pick(PickedAsset::new("anim.gif")).is_err());

        let err = pick(PickedAsset::new("  ")).unwrap_err();
        assert!(matches!(err, TryOnError::InvalidHandle { .. }));

        assert_eq!(composer.person_photo().unwrap().as_str(), "old.jpg");
    }
}
