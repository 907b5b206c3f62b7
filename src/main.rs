use clap::Parser;
use pdfkit::{DocumentError, DocumentSpec, WriterConfig, render_document};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a JSON document description to PDF.
#[derive(Parser, Debug)]
#[command(name = "pdfkit", version, about)]
struct Cli {
    /// JSON document with a `blocks` array
    input: PathBuf,

    /// Output file. Defaults to the input path with a `.pdf` extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Writer configuration overriding the one embedded in the document
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), DocumentError> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Loading document from {}", cli.input.display());
    let spec = DocumentSpec::from_file(&cli.input)?;
    let config = cli.config.as_deref().map(WriterConfig::from_file).transpose()?;

    let base_dir = cli.input.parent().unwrap_or(Path::new("."));
    let bytes = render_document(&spec, config.as_ref(), base_dir)?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("pdf"));
    fs::write(&output, &bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
