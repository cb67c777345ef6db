mod images;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use brandfit_audit::{run_audit, AuditError, AuditRequest};
use brandfit_core::load_config;
use brandfit_evidence::EvidenceClient;
use brandfit_llm::GeminiClient;

#[derive(Debug, Parser)]
#[command(name = "brandfit")]
#[command(about = "Audit marketing creative against a brand's identity")]
struct Cli {
    /// Brand name to research
    #[arg(long)]
    brand: String,

    /// Comma-separated reference URLs (up to 3)
    #[arg(long, default_value = "")]
    urls: String,

    /// Creative copy text (caption, hashtags, ...)
    #[arg(long, default_value = "")]
    copy: String,

    /// Read the creative copy from a file instead
    #[arg(long, conflicts_with = "copy")]
    copy_file: Option<PathBuf>,

    /// Creative image file; repeat for up to 3, order is kept
    #[arg(long = "image")]
    images: Vec<PathBuf>,

    /// Include the bundled sample image, counted before uploads
    #[arg(long)]
    include_sample: bool,

    /// Where to write the result JSON
    #[arg(long, default_value = "brand_fit_result.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config()?;

    let copy_text = match &cli.copy_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading copy file {}", path.display()))?,
        None => cli.copy.clone(),
    };

    let mut creative_images = Vec::new();
    if cli.include_sample {
        let path = images::find_sample_file()
            .context("sample image not found (looked for sample_creative.png in . and ./assets)")?;
        creative_images.push(images::load_sample(&path)?);
    }
    for path in &cli.images {
        creative_images.push(images::load_image(path)?);
    }

    let urls: Vec<String> = cli
        .urls
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    let evidence = EvidenceClient::new(config.fetch_timeout_secs, config.max_body_chars)?;
    let llm = GeminiClient::new(&config.api_key, &config.model)?;

    let request = AuditRequest {
        brand: cli.brand,
        urls,
        copy_text,
        images: creative_images,
    };

    match run_audit(&evidence, &llm, config.dedupe, request).await {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("warning: {warning}");
            }
            render::print_summary(&outcome.result);
            let json = serde_json::to_vec_pretty(&outcome.result)?;
            std::fs::write(&cli.output, json)
                .with_context(|| format!("writing {}", cli.output.display()))?;
            println!("\nresult written to {}", cli.output.display());
            Ok(())
        }
        Err(AuditError::UnparseableResponse { stage, raw }) => {
            eprintln!("{stage} failed: model response was not recoverable as JSON.");
            eprintln!("--- raw response ---");
            eprintln!("{raw}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
