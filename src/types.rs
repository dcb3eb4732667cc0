use image::DynamicImage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known upscaler names accepted by `/extra-single-image` and the
/// hires-fix fields. The server may expose more depending on installed models.
pub const UPSCALER_NONE: &str = "none";
pub const UPSCALER_LANCZOS: &str = "Lanczos";
pub const UPSCALER_NEAREST: &str = "Nearest";
pub const UPSCALER_LDSR: &str = "LDSR";
pub const UPSCALER_BSRGAN: &str = "BSRGAN";
pub const UPSCALER_ESRGAN_4X: &str = "ESRGAN_4x";
pub const UPSCALER_R_ESRGAN_GENERAL_4X_V3: &str = "R-ESRGAN General 4xV3";
pub const UPSCALER_SCUNET_GAN: &str = "ScuNET GAN";
pub const UPSCALER_SCUNET_PSNR: &str = "ScuNET PSNR";
pub const UPSCALER_SWINIR_4X: &str = "SwinIR 4x";

/// Request options for `POST /txt2img`.
///
/// Every field is optional; fields left at `None` are omitted from the JSON
/// body so the server applies its own defaults. `Default` therefore
/// serializes to `{}`.
///
/// # Example
/// ```
/// use sdwebui_rs::Txt2ImgOptions;
///
/// let opt = Txt2ImgOptions {
///     prompt: Some("a sunset over mountains".into()),
///     steps: Some(25),
///     cfg_scale: Some(7.5),
///     ..Default::default()
/// };
/// let body = serde_json::to_string(&opt).unwrap();
/// assert!(body.contains("\"steps\":25"));
/// assert!(!body.contains("seed"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Txt2ImgOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Use -1 for a server-chosen random seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_w: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_name: Option<String>,
    /// Legacy alias for `sampler_name` still honored by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_iter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_faces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<bool>,
    // Hires-fix controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denoising_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstphase_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstphase_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_upscaler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_second_pass_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_resize_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_resize_y: Option<u32>,
    // Sampler noise tuning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_churn: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmax: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_noise: Option<f32>,
    /// Per-request overrides of global server options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings: Option<Box<WebUiOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings_restore_afterwards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_args: Option<Vec<Value>>,
}

/// Request options for `POST /img2img`. Same omit-when-`None` contract as
/// [`Txt2ImgOptions`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Img2ImgOptions {
    /// Source images as base64 PNG strings; see
    /// [`image_to_data_url`](crate::images::image_to_data_url).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_images: Option<Vec<String>>,
    /// 0 = just resize, 1 = crop and resize, 2 = resize and fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denoising_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_cfg_scale: Option<f32>,
    /// Inpainting mask as a base64 PNG string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_blur: Option<u32>,
    /// 0 = fill, 1 = original, 2 = latent noise, 3 = latent nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_fill: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpaint_full_res: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpaint_full_res_padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_mask_invert: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_noise_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed_strength: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_w: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_iter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_faces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_churn: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmax: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_noise: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings: Option<Box<WebUiOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings_restore_afterwards: Option<bool>,
    /// Echo the init images back in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_init_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_args: Option<Vec<Value>>,
}

/// Request options for `POST /extra-single-image` (upscaling and face
/// restoration of one image).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraSingleImageOptions {
    /// 0 to upscale by `upscaling_resize`, 1 to upscale up to
    /// `upscaling_resize_w` x `upscaling_resize_h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<u32>,
    /// Should the backend return the generated image?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extras_results: Option<bool>,
    /// Visibility of GFPGAN face restoration, 0 to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_visibility: Option<f32>,
    /// Visibility of CodeFormer face restoration, 0 to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_visibility: Option<f32>,
    /// Weight of CodeFormer, 0 to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_weight: Option<f32>,
    /// Upscale factor, only used when `resize_mode` is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize: Option<f32>,
    /// Target width, only used when `resize_mode` is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_w: Option<u32>,
    /// Target height, only used when `resize_mode` is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_h: Option<u32>,
    /// Crop the image to fit the chosen size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_crop: Option<bool>,
    /// Primary upscaler name; see the `UPSCALER_*` constants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_1: Option<String>,
    /// Secondary upscaler name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_2: Option<String>,
    /// Visibility of the secondary upscaler, 0 to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_upscaler_2_visibility: Option<f32>,
    /// Run the upscaler before restoring faces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale_first: Option<bool>,
    /// Image to work on, as a base64 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response from `POST /txt2img`.
///
/// `decoded_images` and `raw_images` are never sent by the server; the client
/// fills them from `images` after JSON decoding, skipping entries that fail
/// to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Txt2ImgResponse {
    /// Base64-encoded PNG payloads as returned by the server.
    pub images: Vec<String>,
    pub parameters: Option<Txt2ImgOptions>,
    pub info: String,

    #[serde(skip)]
    pub decoded_images: Vec<DynamicImage>,
    #[serde(skip)]
    pub raw_images: Vec<Vec<u8>>,
}

/// Response from `POST /img2img`. Same shape and enrichment as
/// [`Txt2ImgResponse`]; the server reports the effective parameters in
/// txt2img form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Img2ImgResponse {
    pub images: Vec<String>,
    pub parameters: Option<Txt2ImgOptions>,
    pub info: String,

    #[serde(skip)]
    pub decoded_images: Vec<DynamicImage>,
    #[serde(skip)]
    pub raw_images: Vec<Vec<u8>>,
}

/// Response from `POST /extra-single-image`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraSingleImageResponse {
    pub html_info: String,
    /// Base64-encoded PNG payload.
    pub image: String,

    #[serde(skip)]
    pub decoded_image: Option<DynamicImage>,
    #[serde(skip)]
    pub raw_image: Option<Vec<u8>>,
}

/// Response from `GET /progress`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressResponse {
    /// Completion fraction, 0 to 1.
    pub progress: f32,
    pub eta_relative: f32,
    pub state: JobState,
    /// Base64 preview of the in-flight image; `None` when
    /// `skip_current_image` was set or nothing is running.
    pub current_image: Option<String>,
    #[serde(rename = "textinfo")]
    pub text_info: Option<String>,
}

/// Server-side job state reported by `GET /progress`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobState {
    pub skipped: bool,
    pub interrupted: bool,
    pub job: String,
    pub job_count: i32,
    pub job_timestamp: String,
    pub job_no: i32,
    pub sampling_step: u32,
    pub sampling_steps: u32,
}

/// One checkpoint descriptor from `GET /sd-models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SdModel {
    pub title: String,
    pub model_name: String,
    pub hash: Option<String>,
    pub sha256: Option<String>,
    pub filename: String,
    /// Opaque model config blob; shape varies per checkpoint.
    pub config: Option<Value>,
}

/// Response from `GET /memory`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStats {
    pub ram: RamStats,
    pub cuda: CudaStats,
}

/// Byte counters for a memory pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RamStats {
    pub free: u64,
    pub used: u64,
    pub total: u64,
}

/// Accelerator memory usage as reported by the torch allocator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CudaStats {
    pub system: RamStats,
    pub active: MemoryCounter,
    pub allocated: MemoryCounter,
    pub reserved: MemoryCounter,
    pub inactive: MemoryCounter,
    pub events: MemoryEvents,
}

/// Current/peak byte counter pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryCounter {
    pub current: u64,
    pub peak: u64,
}

/// Allocator event counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryEvents {
    pub retries: u64,
    pub peak: u64,
}

/// Global server options: the full tunables bag served by `GET /options` and
/// accepted by `POST /options`, also usable as `override_settings` in
/// generation requests. The client treats it as pass-through and performs no
/// field-level validation. Fields left at `None` are omitted on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebUiOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_model_checkpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoint_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoint_cache: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_checkpoint_cache: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_as_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_hypernetwork: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_lora: Option<String>,

    // Sample and grid saving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_filename_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_add_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_extended_filename: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_only_if_multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_prevent_empty_spots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_rows: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pnginfo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_txt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_face_restoration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_highres_fix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_color_correction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpeg_quality: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_for_4chan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_downscale_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_side_length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_original_name_batch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_upscaler_name_as_suffix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_selected_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_add_watermark: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_temp_dir_at_start: Option<bool>,

    // Output directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_txt2img_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_img2img_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_extras_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_txt2img_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_img2img_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_save: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_to_dirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_save_to_dirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_save_to_dirs_for_ui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories_filename_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories_max_prompt_words: Option<f32>,

    // Upscaling.
    #[serde(rename = "ESRGAN_tile", skip_serializing_if = "Option::is_none")]
    pub esrgan_tile: Option<f32>,
    #[serde(rename = "ESRGAN_tile_overlap", skip_serializing_if = "Option::is_none")]
    pub esrgan_tile_overlap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realesrgan_enabled_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_for_img2img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldsr_steps: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldsr_cached: Option<bool>,
    #[serde(rename = "SWIN_tile", skip_serializing_if = "Option::is_none")]
    pub swin_tile: Option<f32>,
    #[serde(rename = "SWIN_tile_overlap", skip_serializing_if = "Option::is_none")]
    pub swin_tile_overlap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_max_images_in_cache: Option<f32>,

    // Face restoration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_restoration_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_former_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_restoration_unload: Option<bool>,

    // System.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memmon_poll_rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_log_stdout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_tqdm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_hypernet_extra: Option<bool>,

    // Training.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unload_models_when_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_optimizer_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_training_settings_to_txt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_filename_word_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_filename_join_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image_repeats_per_epoch: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_write_csv_every: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_xattention_optimizations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_enable_tensorboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_tensorboard_save_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_tensorboard_flush_every: Option<f32>,

    // Stable Diffusion pipeline behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_mask_weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_noise_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_color_correction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_fix_steps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_quantization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_emphasis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_batch_seeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comma_padding_backtrack: Option<f32>,
    #[serde(rename = "CLIP_stop_at_last_layers", skip_serializing_if = "Option::is_none")]
    pub clip_stop_at_last_layers: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcast_attn: Option<bool>,

    // Compatibility switches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_emphasis_implementation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_karras_scheduler_sigmas: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_dpmpp_sde_batch_determinism: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_hires_fix_width_height: Option<bool>,

    // Interrogation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_keep_models_in_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_return_ranks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_num_beams: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_min_length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_max_length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_dict_limit: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_skip_categories: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_deepbooru_score_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_sort_alpha: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_use_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_escape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_filter_tags: Option<String>,

    // Extra networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_default_view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_default_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_apply_to_outputs: Option<bool>,

    // UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_show_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_hash_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_name_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_weights_auto_swap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_seed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox_initially_zoomed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_in_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samplers_in_dropdown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_and_batch_together: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_precision_attention: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_precision_extra: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicksettings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_reorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_extra_networks_tab_reorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<String>,

    // Live previews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progressbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_previews_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_every_n_steps: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_refresh_period: Option<f32>,

    // Sampler parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_samplers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_ddim: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_ancestral: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddim_discretize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_churn: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_noise: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_noise_seed_delta: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_discard_next_to_last_sigma: Option<bool>,

    // Postprocessing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_enable_in_main_ui: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_operation_order: Option<Vec<Value>>,

    // Extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_extensions: Option<Vec<Value>>,
}
