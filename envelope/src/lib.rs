//! Uniform JSON response envelope for HTTP request handlers.
//!
//! Every body written through [`Responder`] has the shape
//! `{"message", "code", "data", "timestamp"}` and is always valid JSON, even
//! when the payload itself cannot be serialized.

pub mod code;
pub mod config;
pub mod context;
pub mod encoder;
pub mod error;
pub mod failure_log;
pub mod responder;
pub mod response;

pub use code::Code;
pub use config::ResponderConfig;
pub use context::{HttpResponseContext, ResponseContext};
pub use encoder::{Encoder, JsonEncoder};
pub use error::EnvelopeError;
pub use failure_log::{FailureLog, TracingFailureLog, WriteStage};
pub use responder::Responder;
pub use response::{ApiResponse, ErrorDetail};
