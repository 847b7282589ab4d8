use axum::{
    body::Bytes,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Request-scoped output sink the responder writes into.
///
/// The responder only ever writes; it never reads back from the context.
#[cfg_attr(feature = "test-support", mockall::automock)]
pub trait ResponseContext {
    /// Sets a header, replacing any previous value under the same name.
    fn set_header(&mut self, name: &str, value: &str);
    fn set_status(&mut self, status: StatusCode);
    fn set_body(&mut self, body: Vec<u8>);
    fn set_body_string(&mut self, body: String);
}

/// [`ResponseContext`] backed by axum's HTTP types.
#[derive(Debug, Clone)]
pub struct HttpResponseContext {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Default for HttpResponseContext {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }
}

impl HttpResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl ResponseContext for HttpResponseContext {
    fn set_header(&mut self, name: &str, value: &str) {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(header = name, "Ignoring invalid header name: {e}");
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => tracing::warn!(header = %name, "Ignoring invalid header value: {e}"),
        }
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_body(&mut self, body: Vec<u8>) {
        self.body = Bytes::from(body);
    }

    fn set_body_string(&mut self, body: String) {
        self.body = Bytes::from(body);
    }
}

impl IntoResponse for HttpResponseContext {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn starts_empty_with_ok_status() {
        let ctx = HttpResponseContext::new();
        assert_eq!(ctx.status(), StatusCode::OK);
        assert!(ctx.headers().is_empty());
        assert!(ctx.body().is_empty());
    }

    #[test]
    fn set_header_replaces_previous_value() {
        let mut ctx = HttpResponseContext::new();
        ctx.set_header("Content-Type", "text/plain");
        ctx.set_header("content-type", "application/json");

        assert_eq!(ctx.headers().get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(ctx.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn invalid_header_is_ignored() {
        let mut ctx = HttpResponseContext::new();
        ctx.set_header("bad header", "x");
        ctx.set_header("x-ok", "line\nbreak");

        assert!(ctx.headers().is_empty());
    }

    #[test]
    fn body_setters_overwrite() {
        let mut ctx = HttpResponseContext::new();
        ctx.set_body(b"first".to_vec());
        ctx.set_body_string("second".to_owned());

        assert_eq!(ctx.body().as_ref(), b"second");
    }

    #[test]
    fn converts_into_axum_response() {
        let mut ctx = HttpResponseContext::new();
        ctx.set_status(StatusCode::CREATED);
        ctx.set_header("content-type", "application/json");
        ctx.set_body_string("{}".to_owned());

        let res = ctx.into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    }
}
