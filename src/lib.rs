//! # sdwebui-rs
//!
//! Async Rust client for the
//! [Stable Diffusion WebUI](https://github.com/AUTOMATIC1111/stable-diffusion-webui)
//! `sdapi/v1` REST API.
//!
//! Provides a typed client for text-to-image and image-to-image generation,
//! single-image upscaling, progress polling, server options, model listing,
//! and memory statistics, plus base64/PNG helpers for embedding source and
//! mask images in requests. Base64 image payloads in responses are decoded
//! into [`image::DynamicImage`] values automatically, best-effort.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sdwebui_rs::{SdClient, Txt2ImgOptions};
//!
//! # async fn example() -> sdwebui_rs::Result<()> {
//! let client = SdClient::new("http://127.0.0.1:7860");
//!
//! let res = client
//!     .txt2img(&Txt2ImgOptions {
//!         prompt: Some("a sunset over mountains".into()),
//!         negative_prompt: Some("lowres, blurry".into()),
//!         steps: Some(25),
//!         cfg_scale: Some(7.5),
//!         width: Some(512),
//!         height: Some(768),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for (i, png) in res.raw_images.iter().enumerate() {
//!     std::fs::write(format!("out_{i}.png"), png).unwrap();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Monitoring a long-running generation from another task:
//!
//! ```no_run
//! # async fn example() -> sdwebui_rs::Result<()> {
//! # let client = sdwebui_rs::SdClient::default();
//! let progress = client.progress(true).await?;
//! println!(
//!     "{:.0}% (step {}/{})",
//!     progress.progress * 100.0,
//!     progress.state.sampling_step,
//!     progress.state.sampling_steps,
//! );
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod images;
pub mod types;

pub use client::{SdClient, DEFAULT_ENDPOINT};
pub use error::{Result, SdError};
pub use images::{
    decode_image_payloads, image_to_base64, image_to_data_url, png_bytes_to_data_url,
    DecodedImages,
};
pub use types::{
    CudaStats, ExtraSingleImageOptions, ExtraSingleImageResponse, Img2ImgOptions,
    Img2ImgResponse, JobState, MemoryCounter, MemoryEvents, MemoryStats, ProgressResponse,
    RamStats, SdModel, Txt2ImgOptions, Txt2ImgResponse, WebUiOptions,
};
