use crate::app::picker::PickerPolicy;
use crate::config::AppPreferences;
use crate::domain::model::{ExperimentSettings, SubmissionReceipt, TryOnRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backend that runs the actual garment transfer.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    async fn submit(&self, request: TryOnRequest) -> Result<SubmissionReceipt>;
}

pub trait SettingsProvider: Send + Sync {
    fn experiment_defaults(&self) -> ExperimentSettings;
    fn picker_policy(&self) -> PickerPolicy;
    fn preferences(&self) -> AppPreferences;
}
