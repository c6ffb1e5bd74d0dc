// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::time::Duration;

use headers::{ContentLength, HeaderMapExt as _, UserAgent};
use tokio::time::Instant;
use tracing::Instrument;

static USER_AGENT: &str = concat!("iomete-sdk/", env!("CARGO_PKG_VERSION"));

/// Create a new [`reqwest::Client`] with sane parameters
///
/// A rustls crypto provider must be installed before calling this.
///
/// # Panics
///
/// Panics if the client fails to build, which should never happen
#[must_use]
pub fn client() -> reqwest::Client {
    use rustls_platform_verifier::ConfigVerifierExt;

    // The explicit typing here is because `use_preconfigured_tls` accepts
    // `Any`, but wants a `ClientConfig` under the hood. This helps us detect
    // breaking changes in the rustls-platform-verifier API.
    let tls_config: rustls::ClientConfig =
        rustls::ClientConfig::with_platform_verifier().expect("failed to create TLS config");

    reqwest::Client::builder()
        .use_preconfigured_tls(tls_config)
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(30))
        .build()
        .expect("failed to create HTTP client")
}

async fn send_traced(
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, reqwest::Error> {
    let start = Instant::now();
    let (client, request) = request.build_split();
    let request = request?;

    let headers = request.headers();
    let server_address = request.url().host_str().map(ToOwned::to_owned);
    let server_port = request.url().port_or_known_default();
    let user_agent = headers
        .typed_get::<UserAgent>()
        .map(tracing::field::display);
    let content_length = headers.typed_get().map(|ContentLength(len)| len);
    let method = request.method().to_string();

    let span = tracing::info_span!(
        "http.client.request",
        "otel.kind" = "client",
        "otel.status_code" = tracing::field::Empty,
        "http.request.method" = method,
        "url.full" = %request.url(),
        "http.response.status_code" = tracing::field::Empty,
        "server.address" = server_address,
        "server.port" = server_port,
        "http.request.body.size" = content_length,
        "http.response.body.size" = tracing::field::Empty,
        "user_agent.original" = user_agent,
        "rust.error" = tracing::field::Empty,
    );

    async move {
        let span = tracing::Span::current();
        let result = client.execute(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                span.record("otel.status_code", "OK");
                span.record("http.response.status_code", response.status().as_u16());

                if let Some(ContentLength(content_length)) = response.headers().typed_get() {
                    span.record("http.response.body.size", content_length);
                }

                tracing::debug!(?duration, status = %response.status(), "Request done");
            }
            Err(err) => {
                span.record("otel.status_code", "ERROR");
                span.record("rust.error", err as &dyn std::error::Error);

                tracing::debug!(?duration, "Request failed without a response");
            }
        }

        result
    }
    .instrument(span)
    .await
}

/// An extension trait implemented for [`reqwest::RequestBuilder`] to send a
/// request within a tracing span.
pub trait RequestBuilderExt {
    /// Send the request within a tracing span.
    fn send_traced(self) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn send_traced(self) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
        send_traced(self)
    }
}
