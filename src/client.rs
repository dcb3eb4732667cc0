use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SdError};
use crate::images::decode_image_payloads;
use crate::types::*;

/// Endpoint used when none is configured: the WebUI's default local port.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7860";

const API_PREFIX: &str = "/sdapi/v1";

fn normalize(endpoint: String) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_ENDPOINT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Async client for a Stable Diffusion WebUI server's `sdapi/v1` REST API.
///
/// One method per endpoint; every call is a single stateless request/response
/// exchange with no retries. The client holds only immutable configuration
/// and a reusable `reqwest` transport, so a single instance is safe to share
/// across tasks.
///
/// # Example
/// ```no_run
/// use sdwebui_rs::{SdClient, Txt2ImgOptions};
///
/// # async fn example() -> sdwebui_rs::Result<()> {
/// let client = SdClient::new("http://127.0.0.1:7860");
/// let res = client
///     .txt2img(&Txt2ImgOptions {
///         prompt: Some("a sunset over mountains".into()),
///         steps: Some(25),
///         ..Default::default()
///     })
///     .await?;
/// println!("got {} image(s)", res.decoded_images.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SdClient {
    http: Client,
    endpoint: String,
    auth: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl Default for SdClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SdClient {
    /// Create a new client pointing at the given WebUI endpoint. An empty
    /// endpoint falls back to [`DEFAULT_ENDPOINT`].
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: normalize(endpoint.into()),
            auth: None,
            timeout: None,
        }
    }

    /// Use a custom `reqwest::Client` (for connection pooling, timeouts, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Attach HTTP basic auth to every request. Ignored unless both the
    /// username and password are non-empty.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let (username, password) = (username.into(), password.into());
        if !username.is_empty() && !password.is_empty() {
            self.auth = Some((username, password));
        }
        self
    }

    /// Set a per-request timeout. Calls past the deadline abort with a
    /// network error. Alternatively wrap calls in `tokio::time::timeout` or
    /// drop the future to cancel.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Shared request pipeline: encode, dispatch, drain, status-check, decode.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = match body {
            Some(b) => Some(serde_json::to_vec(b).map_err(SdError::Encode)?),
            None => None,
        };

        let raw_url = format!("{}{}{}", self.endpoint, API_PREFIX, path);
        let url = reqwest::Url::parse(&raw_url)
            .map_err(|e| SdError::InvalidUrl(format!("{raw_url}: {e}")))?;
        tracing::debug!(%method, %url, "dispatching sdapi request");

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some((username, password)) = &self.auth {
            req = req.basic_auth(username, Some(password));
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        if let Some(payload) = payload {
            req = req.body(payload);
        }

        let resp = req.send().await.map_err(|e| SdError::Network {
            context: format!(
                "cannot reach the WebUI at {} \u{2014} is the server running?",
                self.endpoint
            ),
            source: e,
        })?;

        let status = resp.status();
        // Drain the body before the status check so error diagnostics carry
        // it and the connection is always released.
        let data = resp.bytes().await.map_err(SdError::Read)?;

        if status != StatusCode::OK {
            return Err(SdError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&data).into_owned(),
            });
        }

        serde_json::from_slice(&data).map_err(SdError::Decode)
    }

    // ── Generation ──────────────────────────────────────────────────

    /// Generate images from a text prompt via `POST /txt2img`.
    ///
    /// The returned base64 payloads are additionally decoded into
    /// `decoded_images`/`raw_images`; payloads that fail to decode are
    /// dropped from those lists rather than failing the call.
    pub async fn txt2img(&self, opt: &Txt2ImgOptions) -> Result<Txt2ImgResponse> {
        let mut res: Txt2ImgResponse =
            self.request(Method::POST, "/txt2img", &[], Some(opt)).await?;
        let decoded = decode_image_payloads(&res.images);
        res.decoded_images = decoded.images;
        res.raw_images = decoded.raw;
        Ok(res)
    }

    /// Transform source images via `POST /img2img`. Same best-effort image
    /// enrichment as [`txt2img`](Self::txt2img).
    pub async fn img2img(&self, opt: &Img2ImgOptions) -> Result<Img2ImgResponse> {
        let mut res: Img2ImgResponse =
            self.request(Method::POST, "/img2img", &[], Some(opt)).await?;
        let decoded = decode_image_payloads(&res.images);
        res.decoded_images = decoded.images;
        res.raw_images = decoded.raw;
        Ok(res)
    }

    /// Upscale or face-restore a single image via `POST /extra-single-image`.
    pub async fn extra_single_image(
        &self,
        opt: &ExtraSingleImageOptions,
    ) -> Result<ExtraSingleImageResponse> {
        let mut res: ExtraSingleImageResponse = self
            .request(Method::POST, "/extra-single-image", &[], Some(opt))
            .await?;
        let decoded = decode_image_payloads(std::slice::from_ref(&res.image));
        res.raw_image = decoded.raw.into_iter().next();
        res.decoded_image = decoded.images.into_iter().next();
        Ok(res)
    }

    // ── Monitoring ──────────────────────────────────────────────────

    /// Poll the current generation state via `GET /progress`. Set
    /// `skip_current_image` to omit the in-flight preview image.
    pub async fn progress(&self, skip_current_image: bool) -> Result<ProgressResponse> {
        self.request::<(), _>(
            Method::GET,
            "/progress",
            &[("skip_current_image", skip_current_image.to_string())],
            None,
        )
        .await
    }

    /// Fetch RAM and accelerator memory statistics via `GET /memory`.
    pub async fn memory(&self) -> Result<MemoryStats> {
        self.request::<(), _>(Method::GET, "/memory", &[], None).await
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Fetch the global server options via `GET /options`.
    pub async fn options(&self) -> Result<WebUiOptions> {
        self.request::<(), _>(Method::GET, "/options", &[], None).await
    }

    /// Replace global server options via `POST /options`. Only fields set to
    /// `Some` are sent; the server keeps the rest unchanged.
    pub async fn set_options(&self, opts: &WebUiOptions) -> Result<()> {
        // The server answers with a bare `null` on success.
        let _: Value = self.request(Method::POST, "/options", &[], Some(opts)).await?;
        Ok(())
    }

    // ── Model discovery ─────────────────────────────────────────────

    /// List available checkpoints via `GET /sd-models`.
    pub async fn sd_models(&self) -> Result<Vec<SdModel>> {
        self.request::<(), _>(Method::GET, "/sd-models", &[], None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(normalize("http://localhost:7860/".into()), "http://localhost:7860");
        assert_eq!(normalize("http://localhost:7860".into()), "http://localhost:7860");
        assert_eq!(normalize("http://host:7860///".into()), "http://host:7860");
    }

    #[test]
    fn test_empty_endpoint_falls_back_to_default() {
        assert_eq!(normalize("".into()), DEFAULT_ENDPOINT);
        assert_eq!(normalize("   ".into()), DEFAULT_ENDPOINT);
        assert_eq!(SdClient::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_builder() {
        let client = SdClient::new("http://127.0.0.1:7860/")
            .with_timeout(Duration::from_secs(30));
        assert_eq!(client.endpoint(), "http://127.0.0.1:7860");
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_basic_auth_requires_both_parts() {
        let client = SdClient::new(DEFAULT_ENDPOINT).with_basic_auth("user", "");
        assert!(client.auth.is_none());

        let client = SdClient::new(DEFAULT_ENDPOINT).with_basic_auth("", "pass");
        assert!(client.auth.is_none());

        let client = SdClient::new(DEFAULT_ENDPOINT).with_basic_auth("user", "pass");
        assert_eq!(client.auth, Some(("user".into(), "pass".into())));
    }
}
