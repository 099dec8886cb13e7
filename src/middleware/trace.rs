//! Per-request tracing span with method, path, status, and latency.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `fut` inside an `http_request` span and logs its outcome.
pub async fn trace<F>(method: http::Method, path: String, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("http_request", %method, %path);
    async move {
        let start = Instant::now();
        let res = fut.await;
        info!(
            status = res.status_code(),
            latency_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "request completed",
        );
        res
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[tokio::test]
    async fn passes_the_response_through() {
        let res = trace(http::Method::GET, "/x".to_owned(), async {
            Response::status(Status::NotFound)
        })
        .await;
        assert_eq!(res.status_code(), 404);
    }
}
