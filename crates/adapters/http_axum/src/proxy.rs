//! `/api/*` forwarding to the school backend.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body forwarded upstream.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Connection-scoped headers (RFC 9110 §7.6.1) that never cross a proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy of `headers` without hop-by-hop headers, `Host` and `Content-Length`.
///
/// The client sets `Host` and the length again for the new connection.
#[must_use]
pub fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| {
            !is_hop_by_hop(name) && *name != header::HOST && *name != header::CONTENT_LENGTH
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward the request to the backend and relay its response verbatim.
///
/// Method, path, query, body and end-to-end headers are kept. Upstream error
/// statuses are relayed as-is; only an unreachable backend becomes a `502`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be read or the backend cannot
/// be reached.
pub async fn forward(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let target = state.target(&parts.uri);
    let body = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(ProxyError::Body)?;

    tracing::debug!(method = %parts.method, %target, "forwarding request");

    let upstream = state
        .client()
        .request(parts.method, &target)
        .headers(end_to_end(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|source| ProxyError::Upstream {
            target: target.clone(),
            source,
        })?;

    let status = upstream.status();
    let headers = end_to_end(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|source| ProxyError::Upstream { target, source })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn should_flag_hop_by_hop_headers() {
        assert!(is_hop_by_hop(&header::CONNECTION));
        assert!(is_hop_by_hop(&header::TRANSFER_ENCODING));
        assert!(is_hop_by_hop(&HeaderName::from_static("keep-alive")));
        assert!(!is_hop_by_hop(&header::AUTHORIZATION));
        assert!(!is_hop_by_hop(&header::CONTENT_TYPE));
    }

    #[test]
    fn should_keep_only_end_to_end_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::UPGRADE, HeaderValue::from_static("websocket"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));

        let kept = end_to_end(&headers);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[header::CONTENT_TYPE], "application/json");
        assert_eq!(kept[header::COOKIE], "session=abc");
    }

    #[test]
    fn should_keep_repeated_header_values() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

        let kept = end_to_end(&headers);

        let values: Vec<_> = kept.get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(values, ["a=1", "b=2"]);
    }
}
