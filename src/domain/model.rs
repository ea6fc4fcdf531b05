use crate::utils::error::{Result, TryOnError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque reference to a picked image (usually a URI). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhotoHandle(String);

impl PhotoHandle {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TryOnError::InvalidHandle {
                reason: "handle cannot be empty or whitespace-only".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhotoHandle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PhotoHandle::new(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoRole {
    Person,
    Garment,
}

impl PhotoRole {
    pub fn label(self) -> &'static str {
        match self {
            PhotoRole::Person => "person photo",
            PhotoRole::Garment => "garment photo",
        }
    }
}

/// Output image proportions. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "3:4")]
    ThreeByFour,
    #[serde(rename = "1:1")]
    OneByOne,
    #[serde(rename = "16:9")]
    SixteenByNine,
}

impl AspectRatio {
    /// Choices in the order they are offered to the user.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::ThreeByFour,
        AspectRatio::OneByOne,
        AspectRatio::SixteenByNine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::ThreeByFour => "3:4",
            AspectRatio::OneByOne => "1:1",
            AspectRatio::SixteenByNine => "16:9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::ThreeByFour => "3:4 (Fashion)",
            AspectRatio::OneByOne => "1:1 (Square)",
            AspectRatio::SixteenByNine => "16:9 (Wide)",
        }
    }

    /// `(width, height)`
    pub fn ratio(self) -> (u32, u32) {
        match self {
            AspectRatio::ThreeByFour => (3, 4),
            AspectRatio::OneByOne => (1, 1),
            AspectRatio::SixteenByNine => (16, 9),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = TryOnError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == trimmed || ratio.label() == trimmed)
            .ok_or_else(|| TryOnError::InvalidAspectRatio {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSettings {
    pub pose_protection: bool,
    pub aspect_ratio: AspectRatio,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            pose_protection: true,
            aspect_ratio: AspectRatio::ThreeByFour,
        }
    }
}

/// Derived from the two slots on every read; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessState {
    MissingPersonPhoto,
    MissingGarmentPhoto,
    MissingBoth,
    Ready,
}

impl ReadinessState {
    pub fn from_slots(person_filled: bool, garment_filled: bool) -> Self {
        match (person_filled, garment_filled) {
            (false, false) => ReadinessState::MissingBoth,
            (true, false) => ReadinessState::MissingGarmentPhoto,
            (false, true) => ReadinessState::MissingPersonPhoto,
            (true, true) => ReadinessState::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, ReadinessState::Ready)
    }

    pub fn message(self) -> &'static str {
        match self {
            ReadinessState::MissingPersonPhoto => {
                "Missing person photo: please upload a photo of the person."
            }
            ReadinessState::MissingGarmentPhoto => {
                "Missing garment photo: please upload a photo of the garment."
            }
            ReadinessState::MissingBoth => {
                "Missing photos: please upload both a person photo and a garment photo."
            }
            ReadinessState::Ready => "Ready to start the virtual try-on.",
        }
    }
}

impl fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadinessState::MissingPersonPhoto => "MISSING_PERSON_PHOTO",
            ReadinessState::MissingGarmentPhoto => "MISSING_GARMENT_PHOTO",
            ReadinessState::MissingBoth => "MISSING_BOTH",
            ReadinessState::Ready => "READY",
        };
        f.write_str(name)
    }
}

/// Immutable snapshot of a complete try-on request.
///
/// Only [`build_request`](crate::core::composer::TryOnRequestComposer::build_request)
/// constructs one, so both handles are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnRequest {
    person_photo: PhotoHandle,
    garment_photo: PhotoHandle,
    settings: ExperimentSettings,
}

impl TryOnRequest {
    pub(crate) fn new(
        person_photo: PhotoHandle,
        garment_photo: PhotoHandle,
        settings: ExperimentSettings,
    ) -> Self {
        Self {
            person_photo,
            garment_photo,
            settings,
        }
    }

    pub fn person_photo(&self) -> &PhotoHandle {
        &self.person_photo
    }

    pub fn garment_photo(&self) -> &PhotoHandle {
        &self.garment_photo
    }

    pub fn settings(&self) -> ExperimentSettings {
        self.settings
    }
}

/// What the submission backend hands back once it accepted a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub request: TryOnRequest,
    pub accepted_at: DateTime<Utc>,
    pub message: String,
}
