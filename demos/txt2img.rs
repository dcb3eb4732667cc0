//! Generate a single image from a text prompt and poll progress.
//!
//! Requires a running Stable Diffusion WebUI instance at
//! http://127.0.0.1:7860 started with the `--api` flag.
//!
//! ```sh
//! cargo run --example txt2img
//! ```

use sdwebui_rs::{SdClient, Txt2ImgOptions};
use std::time::Duration;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = SdClient::new("http://127.0.0.1:7860");

    // List available checkpoints
    let models = client.sd_models().await?;
    if models.is_empty() {
        eprintln!("No checkpoints found — install a model first");
        return Ok(());
    }
    println!("Server has {} checkpoint(s), using: {}", models.len(), models[0].title);

    // Poll progress from a side task while the generation runs
    let monitor = {
        let client = client.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(2)).await;
                if let Ok(p) = client.progress(true).await {
                    println!(
                        "{:.0}% (step {}/{})",
                        p.progress * 100.0,
                        p.state.sampling_step,
                        p.state.sampling_steps,
                    );
                }
            }
        })
    };

    let res = client
        .txt2img(&Txt2ImgOptions {
            prompt: Some("a beautiful sunset over mountains".into()),
            negative_prompt: Some("lowres, blurry, bad anatomy".into()),
            steps: Some(25),
            cfg_scale: Some(7.5),
            width: Some(512),
            height: Some(768),
            ..Default::default()
        })
        .await?;
    monitor.abort();

    println!("Generated {} image(s)", res.decoded_images.len());
    for (i, png) in res.raw_images.iter().enumerate() {
        let path = format!("txt2img_{i}.png");
        std::fs::write(&path, png)?;
        println!("Saved: {}", path);
    }

    Ok(())
}
