// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::client::{DetectionClient, DetectionService};
use crate::config::ClientConfig;
use crate::controller::{ImagePanel, UploadController};
use crate::render::{AnnotationRenderer, LabelFonts};

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Certificate image to analyze
    pub image: PathBuf,

    /// Where to write the annotated PNG (defaults to <image>_annotated.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// TTF/OTF font for overlay labels (defaults to the bundled DejaVu Sans)
    #[arg(long, env = "YELLOWCERT_FONT_PATH")]
    pub font: Option<PathBuf>,

    /// Print detections as JSON instead of a list
    #[arg(long)]
    pub json: bool,

    /// Base URL of the detection service
    #[arg(long, env = "YELLOWCERT_API_URL")]
    pub api_url: Option<String>,
}

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the detection service
    #[arg(long, env = "YELLOWCERT_API_URL")]
    pub api_url: Option<String>,
}

/// Environment configuration with command-line overrides applied
fn resolve_config(api_url: Option<String>, font: Option<PathBuf>) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }
    if let Some(font) = font {
        config.font_path = Some(font);
    }
    config
}

fn build_renderer(config: &ClientConfig) -> Result<AnnotationRenderer> {
    match &config.font_path {
        Some(path) => {
            let fonts = LabelFonts::from_file(path)?;
            info!("Label font loaded from {}", path.display());
            Ok(AnnotationRenderer::with_fonts(fonts))
        }
        None => {
            debug!("Using bundled DejaVu Sans for labels");
            Ok(AnnotationRenderer::new())
        }
    }
}

/// Annotated output next to the input: `cert.jpg` -> `cert_annotated.png`
pub fn default_output_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "certificate".to_string());
    image.with_file_name(format!("{}_annotated.png", stem))
}

/// Analyze one certificate image
pub async fn detect(args: DetectArgs) -> Result<()> {
    let config = resolve_config(args.api_url, args.font);
    let renderer = build_renderer(&config)?;
    let client = DetectionClient::new(&config)?;
    let controller = UploadController::with_renderer(client, renderer);

    controller.select_path(&args.image).await?;
    println!("🔬 Analyzing {} ...", args.image.display());
    controller.analyze().await?;

    let view = controller.view().await;
    if args.json {
        let detections = controller.detections().await;
        println!("{}", serde_json::to_string_pretty(&detections)?);
    } else {
        println!("\n🩺 Medical Elements Detected ({})", view.items.len());
        for item in &view.items {
            println!("  [{}] {:<12} {:>4}", item.color, item.class, item.percent_label);
        }
    }

    match view.panel {
        ImagePanel::Annotated(image) => {
            let output = args
                .output
                .unwrap_or_else(|| default_output_path(&args.image));
            image
                .save(&output)
                .with_context(|| format!("Unable to write annotated image to {}", output.display()))?;
            println!("\n✅ Annotated image written to {}", output.display());
        }
        ImagePanel::Preview(_) => {
            println!("\nNo certificate elements detected; nothing to annotate");
        }
        ImagePanel::Placeholder => {
            return Err(anyhow!("No image selected"));
        }
    }

    Ok(())
}

/// Probe the detection service
pub async fn health(args: HealthArgs) -> Result<()> {
    let config = resolve_config(args.api_url, None);
    let client = DetectionClient::new(&config)?;

    let status = client
        .health()
        .await
        .map_err(|e| anyhow!(e.user_message()))?;

    println!("✅ Detection service reachable at {}", client.endpoint());
    if let Some(message) = &status.message {
        println!("  Message:      {}", message);
    }
    if let Some(state) = &status.status {
        println!("  Status:       {}", state);
    }
    if let Some(version) = &status.version {
        println!("  Version:      {}", version);
    }
    if let Some(loaded) = status.model_loaded {
        println!("  Model loaded: {}", loaded);
    }
    Ok(())
}
