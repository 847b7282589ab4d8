use crate::error::EnvelopeError;

/// Which encoding attempt failed while writing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    /// The caller's envelope.
    Primary,
    /// The generic internal error envelope.
    Fallback,
}

/// Sink for encoding failures the responder recovers from.
#[cfg_attr(feature = "test-support", mockall::automock)]
pub trait FailureLog: Send + Sync {
    fn record(&self, stage: WriteStage, error: &EnvelopeError);
}

/// Reports failures through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureLog;

impl FailureLog for TracingFailureLog {
    fn record(&self, stage: WriteStage, error: &EnvelopeError) {
        match stage {
            WriteStage::Primary => {
                tracing::error!(?stage, error = %error, "Failed to encode response");
            }
            WriteStage::Fallback => {
                tracing::error!(?stage, error = %error, "Failed to encode fallback response");
            }
        }
    }
}
