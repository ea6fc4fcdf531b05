pub mod composer;
pub mod photo_slot;
pub mod shared;

pub use crate::domain::model::{ExperimentSettings, PhotoHandle, ReadinessState, TryOnRequest};
pub use crate::domain::ports::{SettingsProvider, SubmissionPort};
pub use crate::utils::error::{ComposerError, Result};
