use std::error::Error;

use axum::http::StatusCode;
use serde::Serialize;

use crate::{
    code::Code,
    config::ResponderConfig,
    context::{HttpResponseContext, ResponseContext},
    encoder::{Encoder, JsonEncoder},
    failure_log::{FailureLog, TracingFailureLog, WriteStage},
    response::{
        ApiResponse, CONTENT_TYPE_JSON, ErrorDetail, INTERNAL_ERROR_MESSAGE,
        literal_internal_error, now_millis,
    },
};

const CONTENT_TYPE: &str = "Content-Type";

/// Formats handler outcomes into the standard envelope.
///
/// Holds no per-request state, so one instance can be shared by every
/// in-flight request. Writing never fails from the caller's point of view:
/// when the envelope cannot be encoded, a generic internal error envelope is
/// written instead, and if even that fails a literal JSON body is emitted.
#[derive(Debug, Clone)]
pub struct Responder<E = JsonEncoder, L = TracingFailureLog> {
    debug: bool,
    encoder: E,
    log: L,
}

impl Responder {
    /// Creates a responder; `debug = true` exposes error text in bodies.
    pub fn new(debug: bool) -> Self {
        Self::with_parts(debug, JsonEncoder, TracingFailureLog)
    }

    pub fn from_config(config: &ResponderConfig) -> Self {
        Self::new(config.debug)
    }
}

impl<E: Encoder, L: FailureLog> Responder<E, L> {
    pub fn with_parts(debug: bool, encoder: E, log: L) -> Self {
        Self {
            debug,
            encoder,
            log,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Writes a success envelope carrying `data` with the given status.
    pub fn success<C, T>(
        &self,
        ctx: &mut C,
        status: StatusCode,
        code: Code,
        message: impl Into<String>,
        data: T,
    ) where
        C: ResponseContext + ?Sized,
        T: Serialize,
    {
        let payload = ApiResponse::new(code, message, Some(data));
        self.write(ctx, status, &payload);
    }

    /// Writes an error envelope.
    ///
    /// `status`, `code` and an empty `message` fall back to 500,
    /// `INTERNAL_ERROR` and `"internal server error"` independently. The text
    /// of `err` is only placed in `data` when the responder is in debug mode.
    pub fn error<C>(
        &self,
        ctx: &mut C,
        status: Option<StatusCode>,
        code: Option<Code>,
        message: impl Into<String>,
        err: Option<&dyn Error>,
    ) where
        C: ResponseContext + ?Sized,
    {
        let data = err.filter(|_| self.debug).map(|err| ErrorDetail {
            error: err.to_string(),
        });

        let status = status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = code.unwrap_or(Code::InternalError);
        let mut message = message.into();
        if message.is_empty() {
            message = INTERNAL_ERROR_MESSAGE.to_owned();
        }

        let payload = ApiResponse::new(code, message, data);
        self.write(ctx, status, &payload);
    }

    /// [`Responder::success`] into a fresh context, ready to return from an
    /// axum handler.
    pub fn success_response<T: Serialize>(
        &self,
        status: StatusCode,
        code: Code,
        message: impl Into<String>,
        data: T,
    ) -> HttpResponseContext {
        let mut ctx = HttpResponseContext::new();
        self.success(&mut ctx, status, code, message, data);
        ctx
    }

    /// [`Responder::error`] into a fresh context, ready to return from an
    /// axum handler.
    pub fn error_response(
        &self,
        status: Option<StatusCode>,
        code: Option<Code>,
        message: impl Into<String>,
        err: Option<&dyn Error>,
    ) -> HttpResponseContext {
        let mut ctx = HttpResponseContext::new();
        self.error(&mut ctx, status, code, message, err);
        ctx
    }

    fn write<C, T>(&self, ctx: &mut C, status: StatusCode, payload: &ApiResponse<T>)
    where
        C: ResponseContext + ?Sized,
        T: Serialize,
    {
        let (status, body) = match self.encoder.encode(payload) {
            Ok(body) => (status, body),
            Err(e) => {
                self.log.record(WriteStage::Primary, &e);

                // The requested status can no longer be honoured.
                match self.encoder.encode(&ApiResponse::<()>::internal_error()) {
                    Ok(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
                    Err(e) => {
                        self.log.record(WriteStage::Fallback, &e);
                        ctx.set_header(CONTENT_TYPE, CONTENT_TYPE_JSON);
                        ctx.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                        ctx.set_body_string(literal_internal_error(now_millis()));
                        return;
                    }
                }
            }
        };

        ctx.set_header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        ctx.set_status(status);
        ctx.set_body(body);
    }
}
