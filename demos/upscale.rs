//! Upscale a local image 2x with the extras endpoint.
//!
//! Requires a running Stable Diffusion WebUI instance at
//! http://127.0.0.1:7860 started with the `--api` flag.
//!
//! ```sh
//! cargo run --example upscale -- input.png
//! ```

use sdwebui_rs::types::UPSCALER_SWINIR_4X;
use sdwebui_rs::{image_to_base64, ExtraSingleImageOptions, SdClient};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.png".to_string());
    let source = image::open(&path)?;
    println!("Loaded {} ({}x{})", path, source.width(), source.height());

    let client = SdClient::new("http://127.0.0.1:7860");

    let res = client
        .extra_single_image(&ExtraSingleImageOptions {
            upscaling_resize: Some(2.0),
            upscaler_1: Some(UPSCALER_SWINIR_4X.into()),
            image: Some(image_to_base64(&source)),
            ..Default::default()
        })
        .await?;

    match (&res.decoded_image, &res.raw_image) {
        (Some(img), Some(png)) => {
            std::fs::write("upscaled.png", png)?;
            println!("Saved upscaled.png ({}x{})", img.width(), img.height());
        }
        _ => eprintln!("Server response carried no decodable image"),
    }

    Ok(())
}
