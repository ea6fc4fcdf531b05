pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::logging_submitter::LoggingSubmitter;
pub use app::picker::{apply_pick, PickOutcome, PickResult, PickedAsset, PickerPolicy};
pub use app::submission::SubmissionService;
pub use config::toml_config::TomlConfig;
pub use core::{composer::TryOnRequestComposer, photo_slot::PhotoSlot, shared::SharedComposer};
pub use domain::model::{
    AspectRatio, ExperimentSettings, PhotoHandle, PhotoRole, ReadinessState, SubmissionReceipt,
    TryOnRequest,
};
pub use utils::error::{ComposerError, Result, TryOnError};
