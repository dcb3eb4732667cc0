//! End-to-end tests against a minimal in-process HTTP fixture server.

use std::time::Duration;

use sdwebui_rs::{
    image_to_base64, ExtraSingleImageOptions, SdClient, SdError, Txt2ImgOptions,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// Serve exactly one HTTP exchange: read the full request, reply with the
/// given status line and JSON body, then close. Resolves to the raw request
/// text for assertions.
async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut tmp = [0u8; 4096];
        loop {
            let n = sock.read(&mut tmp).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&tmp[..n]);
            if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                if buf.len() - (pos + 4) >= content_length(&head) {
                    break;
                }
            }
        }
        let request = String::from_utf8_lossy(&buf).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        sock.write_all(response.as_bytes()).await.unwrap();
        sock.shutdown().await.unwrap();
        request
    });

    (format!("http://{}", addr), handle)
}

fn fixture_png_base64(width: u32, height: u32) -> String {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba([200, 100, 50, 255]),
    ));
    image_to_base64(&img)
}

#[tokio::test]
async fn test_txt2img_decodes_images_and_info() {
    let b64 = fixture_png_base64(8, 6);
    let (endpoint, server) = serve_once(
        "200 OK",
        format!(r#"{{"images":["{}"],"info":"x"}}"#, b64),
    )
    .await;

    let client = SdClient::new(endpoint);
    let res = client
        .txt2img(&Txt2ImgOptions {
            prompt: Some("a cat".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(res.info, "x");
    assert_eq!(res.images.len(), 1);
    assert_eq!(res.decoded_images.len(), 1);
    assert_eq!(res.decoded_images[0].width(), 8);
    assert_eq!(res.decoded_images[0].height(), 6);
    assert_eq!(res.raw_images.len(), 1);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /sdapi/v1/txt2img"));
    assert!(request.contains(r#""prompt":"a cat""#));
    // Unset optional fields stay off the wire.
    assert!(!request.contains("cfg_scale"));
}

#[tokio::test]
async fn test_extra_single_image_decodes_result() {
    let b64 = fixture_png_base64(16, 16);
    let (endpoint, server) = serve_once(
        "200 OK",
        format!(r#"{{"html_info":"<p>done</p>","image":"{}"}}"#, b64),
    )
    .await;

    let client = SdClient::new(endpoint);
    let res = client
        .extra_single_image(&ExtraSingleImageOptions {
            upscaling_resize: Some(2.0),
            upscaler_1: Some(sdwebui_rs::types::UPSCALER_LANCZOS.into()),
            image: Some(b64.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(res.html_info, "<p>done</p>");
    assert_eq!(res.decoded_image.as_ref().unwrap().width(), 16);
    assert!(res.raw_image.is_some());

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /sdapi/v1/extra-single-image"));
    assert!(request.contains(r#""upscaler_1":"Lanczos""#));
}

#[tokio::test]
async fn test_progress_query_flag() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"progress":0.5,"eta_relative":2.0,"state":{"job":"txt2img","sampling_step":5,"sampling_steps":10},"current_image":null,"textinfo":null}"#.to_string(),
    )
    .await;

    let client = SdClient::new(endpoint);
    let res = client.progress(true).await.unwrap();

    assert_eq!(res.progress, 0.5);
    assert_eq!(res.state.sampling_step, 5);
    assert!(res.current_image.is_none());

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /sdapi/v1/progress?skip_current_image=true"));
}

#[tokio::test]
async fn test_sd_models_list() {
    let (endpoint, _server) = serve_once(
        "200 OK",
        r#"[{"title":"a [123]","model_name":"a","hash":"123","sha256":null,"filename":"/m/a.safetensors","config":null}]"#.to_string(),
    )
    .await;

    let client = SdClient::new(endpoint);
    let models = client.sd_models().await.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model_name, "a");
    assert!(models[0].sha256.is_none());
}

#[tokio::test]
async fn test_http_500_surfaces_status_and_body() {
    let (endpoint, _server) =
        serve_once("500 Internal Server Error", "boom".to_string()).await;

    let client = SdClient::new(endpoint);
    let err = client.memory().await.unwrap_err();

    match &err {
        SdError::Http { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("500"));
    assert!(msg.contains("boom"));
}

#[tokio::test]
async fn test_malformed_json_yields_decode_error() {
    let (endpoint, _server) = serve_once("200 OK", "this is not json".to_string()).await;

    let client = SdClient::new(endpoint);
    let err = client.memory().await.unwrap_err();
    assert!(matches!(err, SdError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_basic_auth_header_attached() {
    let (endpoint, server) = serve_once("200 OK", "{}".to_string()).await;

    let client = SdClient::new(endpoint).with_basic_auth("user", "pass");
    client.memory().await.unwrap();

    let request = server.await.unwrap().to_ascii_lowercase();
    // base64("user:pass")
    assert!(request.contains("authorization: basic dxnlcjpwyxnz"));
}

#[tokio::test]
async fn test_no_auth_header_without_credentials() {
    let (endpoint, server) = serve_once("200 OK", "{}".to_string()).await;

    let client = SdClient::new(endpoint).with_basic_auth("user", "");
    client.memory().await.unwrap();

    let request = server.await.unwrap().to_ascii_lowercase();
    assert!(!request.contains("authorization"));
}

#[tokio::test]
async fn test_stalled_server_times_out_promptly() {
    // Accept the connection and read the request, but never respond.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        loop {
            if sock.read(&mut buf).await.unwrap_or(0) == 0 {
                break;
            }
        }
    });

    let client = SdClient::new(format!("http://{}", addr))
        .with_timeout(Duration::from_millis(100));

    let call = tokio::time::timeout(Duration::from_secs(5), client.memory()).await;
    let result = call.expect("call should abort well before the outer deadline");
    assert!(result.is_err());

    server.abort();
}

#[tokio::test]
async fn test_set_options_posts_sparse_body() {
    let (endpoint, server) = serve_once("200 OK", "null".to_string()).await;

    let client = SdClient::new(endpoint);
    let opts = sdwebui_rs::WebUiOptions {
        sd_model_checkpoint: Some("dreamshaper_8".into()),
        ..Default::default()
    };
    client.set_options(&opts).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /sdapi/v1/options"));
    assert!(request.contains(r#"{"sd_model_checkpoint":"dreamshaper_8"}"#));
}
