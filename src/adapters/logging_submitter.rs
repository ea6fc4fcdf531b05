use crate::domain::model::{SubmissionReceipt, TryOnRequest};
use crate::domain::ports::SubmissionPort;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;

pub const ACCEPTED_MESSAGE: &str = "Virtual try-on started: running the AI garment try-on...";

/// Accepts every request and logs it. Stands in until an inference backend exists.
#[derive(Debug, Clone, Default)]
pub struct LoggingSubmitter;

impl LoggingSubmitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionPort for LoggingSubmitter {
    async fn submit(&self, request: TryOnRequest) -> Result<SubmissionReceipt> {
        let payload = serde_json::to_string(&request)?;
        tracing::info!(payload = %payload, "try-on request received");

        Ok(SubmissionReceipt {
            request,
            accepted_at: Utc::now(),
            message: ACCEPTED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::TryOnRequestComposer;
    use crate::domain::model::PhotoHandle;

    #[test]
    fn test_accepts_request() {
        let mut composer = TryOnRequestComposer::new();
        composer.set_person_photo(PhotoHandle::new("p1").unwrap());
        composer.set_garment_photo(PhotoHandle::new("g1").unwrap());
        let request = composer.build_request().unwrap();

        let receipt =
            tokio_test::block_on(LoggingSubmitter::new().submit(request.clone())).unwrap();
        assert_eq!(receipt.request, request);
        assert_eq!(receipt.message, ACCEPTED_MESSAGE);
    }
}
