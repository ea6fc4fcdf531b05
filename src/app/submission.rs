use crate::core::composer::TryOnRequestComposer;
use crate::domain::model::SubmissionReceipt;
use crate::domain::ports::SubmissionPort;
use crate::utils::error::{Result, TryOnError};

/// Validates the composer and hands the snapshot to the backend.
pub struct SubmissionService<S: SubmissionPort> {
    port: S,
}

impl<S: SubmissionPort> SubmissionService<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    /// Builds a fresh request on every call. A `NotReady` verdict is returned
    /// as-is and the backend is not contacted.
    pub async fn submit(&self, composer: &TryOnRequestComposer) -> Result<SubmissionReceipt> {
        let request = composer.build_request().map_err(|e| {
            tracing::info!(readiness = %e.readiness(), "submission blocked: {}", e);
            TryOnError::from(e)
        })?;

        tracing::info!(
            person = %request.person_photo(),
            garment = %request.garment_photo(),
            aspect_ratio = %request.settings().aspect_ratio,
            pose_protection = request.settings().pose_protection,
            "submitting try-on request"
        );

        let receipt = self.port.submit(request).await?;
        tracing::info!(accepted_at = %receipt.accepted_at, "try-on request accepted");
        Ok(receipt)
    }
}
