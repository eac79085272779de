//! Path adaptation for serverless hosts that prefix every route.
//!
//! When the process sits behind a router that prepends a fixed segment
//! (`/api/summarize` instead of `/summarize`), one leading occurrence of
//! that segment is stripped before dispatch so the route table stays
//! prefix-free. Method, query string and body pass through untouched.

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::middleware::Next;
use axum::response::Response;

/// Fixed segment the hosting layer prepends to every route.
pub const ROUTE_PREFIX: &str = "/api";

/// Strip exactly one leading `prefix` from `path`.
///
/// The prefix only counts when it ends at a segment boundary: `/api/x`
/// becomes `/x`, while `/api` and `/apifoo` are left alone. Returns `None`
/// when the path needs no rewriting.
#[must_use]
pub fn strip_prefix_once(path: &str, prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}

/// Middleware applying [`strip_prefix_once`] with [`ROUTE_PREFIX`].
///
/// Must be layered around the router (not on it) so the rewritten path is
/// what routing sees.
pub async fn rewrite_request_path(mut req: Request, next: Next) -> Response {
    if let Some(stripped) = strip_prefix_once(req.uri().path(), ROUTE_PREFIX) {
        let path_and_query = match req.uri().query() {
            Some(query) => format!("{stripped}?{query}"),
            None => stripped,
        };

        let mut parts = req.uri().clone().into_parts();
        if let Ok(pq) = path_and_query.parse::<PathAndQuery>() {
            parts.path_and_query = Some(pq);
            if let Ok(uri) = Uri::from_parts(parts) {
                *req.uri_mut() = uri;
            }
        }
    }

    next.run(req).await
}
