// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{ALLOW, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use log::debug;
use random_mcp_core::{EntropySource, ToolServer};
use std::convert::Infallible;
use std::sync::Arc;

const MCP_PATH: &str = "/mcp";

/// Streamable-HTTP binding for the MCP dispatch service.
///
/// The server is stateless: every message arrives as a `POST /mcp` and
/// is answered in the same exchange. There is no session id and no
/// server-push stream, so `GET` (and everything else) on the endpoint is
/// rejected outright.
pub async fn serve_request<E: EntropySource>(
    server: Arc<ToolServer<E>>,
    request: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if request.uri().path() != MCP_PATH {
        return Ok(plain_response(StatusCode::NOT_FOUND, "not found"));
    }
    if request.method() != Method::POST {
        let response = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(ALLOW, "POST")
            .body(Full::new(Bytes::from_static(b"method not allowed")))
            .expect("response parts are valid");
        return Ok(response);
    }

    let body = match request.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            debug!("failed to read request body: {}", err);
            return Ok(plain_response(StatusCode::BAD_REQUEST, "unreadable body"));
        }
    };

    match server.handle_raw(&body) {
        Some(reply) => {
            let response = Response::builder()
                .status(StatusCode::OK)
                .header(CONTENT_TYPE, "application/json")
                .body(Full::new(Bytes::from(reply)))
                .expect("response parts are valid");
            Ok(response)
        }
        // Notifications are acknowledged without a body.
        None => {
            let response = Response::builder()
                .status(StatusCode::ACCEPTED)
                .body(Full::new(Bytes::new()))
                .expect("response parts are valid");
            Ok(response)
        }
    }
}

fn plain_response(status: StatusCode, message: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from_static(message.as_bytes())))
        .expect("response parts are valid")
}
