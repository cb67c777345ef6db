//! Creative image loading and sample-image discovery.

use std::path::{Path, PathBuf};

use anyhow::Context;
use brandfit_llm::ImageInput;

const SAMPLE_NAMES: [&str; 2] = ["sample_creative.png", "sample_creative.PNG"];

/// MIME type from the file extension, defaulting to a generic binary
/// type for anything unrecognized.
pub(crate) fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub(crate) fn load_image(path: &Path) -> anyhow::Result<ImageInput> {
    let bytes = std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
    Ok(ImageInput {
        bytes,
        mime: mime_for_path(path).to_string(),
    })
}

/// The bundled sample is always PNG regardless of its extension casing.
pub(crate) fn load_sample(path: &Path) -> anyhow::Result<ImageInput> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading sample image {}", path.display()))?;
    Ok(ImageInput {
        bytes,
        mime: "image/png".to_string(),
    })
}

/// Look for the sample image next to the working directory, then under
/// `./assets`. First hit wins.
pub(crate) fn find_sample_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut candidates = Vec::new();
    for name in SAMPLE_NAMES {
        candidates.push(cwd.join(name));
    }
    for name in SAMPLE_NAMES {
        candidates.push(cwd.join("assets").join(name));
    }
    candidates.into_iter().find(|p| p.is_file())
}
