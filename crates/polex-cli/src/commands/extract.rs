//! Extract command - run the pipeline over one email/document pair.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use polex_core::Pipeline;

use super::output::{format_result, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Email body text file
    #[arg(required = true)]
    email: PathBuf,

    /// Attached document text file
    #[arg(required = true)]
    document: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Exit with an error when a required field is missing
    #[arg(long)]
    strict: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::config::load(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    let email_text = read_input(&args.email)?;
    let doc_text = read_input(&args.document)?;

    info!(
        "Extracting from {} and {}",
        args.email.display(),
        args.document.display()
    );

    let result = pipeline.run(&email_text, &doc_text);
    let output = format_result(&result, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    let missing = result.missing_required();
    if args.strict && !missing.is_empty() {
        anyhow::bail!("Missing required fields: {}", missing.join(", "));
    }

    Ok(())
}

/// Read an input text file, failing with a readable message when it is absent.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}
