use super::request::{parse_request, ParsedRequest};
use super::response::write_handler_response;
use crate::dispatcher::{DispatchError, Dispatcher, HandlerResponse};
use crate::ids::{RequestId, REQUEST_ID_HEADER};
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::{info, info_span};

/// `HttpService` wiring the wire protocol to the dispatcher.
///
/// Cloned once per connection by `may_minihttp`; clones share the dispatcher
/// and therefore the store.
#[derive(Clone)]
pub struct AppService {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Everything short of writing to the wire.
    pub fn respond(&self, req: &ParsedRequest) -> HandlerResponse {
        let request_id = RequestId::from_header_or_new(req.header(REQUEST_ID_HEADER));
        let span = info_span!(
            "request",
            method = %req.method,
            path = %req.path,
            request_id = %request_id
        );
        let _guard = span.enter();

        if req.method == "GET" && req.path == "/health" {
            return health_endpoint();
        }

        let method = match Method::from_bytes(req.method.as_bytes()) {
            Ok(m) => m,
            Err(_) => {
                let err = DispatchError::UnsupportedMethod(req.method.clone());
                info!(status = err.status(), error = %err, "request rejected");
                return HandlerResponse::from(&err);
            }
        };

        match self.dispatcher.dispatch(&method, &req.path, &req.body) {
            Some(response) => response,
            None => {
                info!(status = 404, "no such resource");
                HandlerResponse::text(404, "not found")
            }
        }
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint() -> HandlerResponse {
    HandlerResponse {
        status: 200,
        content_type: crate::dispatcher::CONTENT_TYPE_JSON,
        body: br#"{"status":"ok"}"#.to_vec(),
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(req);
        let response = self.respond(&parsed);
        write_handler_response(res, response);
        Ok(())
    }
}
