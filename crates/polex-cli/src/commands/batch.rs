//! Batch processing command for many email/document pairs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use polex_core::{Pipeline, PipelineResult};

use super::extract::read_input;
use super::output::{format_result, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching email body files
    #[arg(required = true)]
    input: String,

    /// Suffix identifying email body files
    #[arg(long, default_value = ".email.txt")]
    email_suffix: String,

    /// Suffix of the matching document file next to each email file
    #[arg(long, default_value = ".doc.txt")]
    doc_suffix: String,

    /// Output directory (default: one JSON document per line on stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each pair
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// One email/document pair found on disk.
struct InputPair {
    stem: String,
    email: PathBuf,
    document: PathBuf,
}

/// Result of processing a single pair.
struct PairResult {
    stem: String,
    result: Option<PipelineResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::config::load(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    let pairs: Vec<InputPair> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter_map(|p| pair_for(&p, &args.email_suffix, &args.doc_suffix))
        .collect();

    if pairs.is_empty() {
        anyhow::bail!("No matching email files found for pattern: {}", args.input);
    }

    eprintln!("{} Found {} pairs to process", style("ℹ").blue(), pairs.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let pair_start = Instant::now();
        let outcome = process_pair(&pair, &pipeline, &args);
        let processing_time_ms = pair_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => results.push(PairResult {
                stem: pair.stem,
                result: Some(result),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                error!("Failed to process {}: {}", pair.email.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e);
                }
                results.push(PairResult {
                    stem: pair.stem,
                    result: None,
                    error: Some(e.to_string()),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let summary_path = summary_dir.join("summary.csv");
        write_summary(&results, &pipeline, &summary_path)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let incomplete = results
        .iter()
        .filter_map(|r| r.result.as_ref())
        .filter(|r| !r.missing_required().is_empty())
        .count();

    eprintln!(
        "{} Processed {} pairs ({} failed, {} missing required fields) in {:.1}s",
        style("✓").green(),
        results.len(),
        failed,
        incomplete,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Match an email file to its document by swapping the suffix.
fn pair_for(email: &Path, email_suffix: &str, doc_suffix: &str) -> Option<InputPair> {
    let file_name = email.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(email_suffix)?;
    if stem.is_empty() {
        return None;
    }

    Some(InputPair {
        stem: stem.to_string(),
        email: email.to_path_buf(),
        document: email.with_file_name(format!("{}{}", stem, doc_suffix)),
    })
}

fn process_pair(
    pair: &InputPair,
    pipeline: &Pipeline,
    args: &BatchArgs,
) -> anyhow::Result<PipelineResult> {
    let email_text = read_input(&pair.email)?;

    // An email without an attachment still gets extracted.
    let doc_text = if pair.document.exists() {
        read_input(&pair.document)?
    } else {
        warn!("No document for {}, using email only", pair.email.display());
        String::new()
    };

    let result = pipeline.run(&email_text, &doc_text);

    match &args.output_dir {
        Some(output_dir) => {
            let output = format_result(&result, args.format, true)?;
            let path = output_dir.join(format!("{}.{}", pair.stem, args.format.extension()));
            fs::write(&path, output)?;
            debug!("Wrote {}", path.display());
        }
        None => println!("{}", format_result(&result, args.format, false)?),
    }

    Ok(result)
}

fn write_summary(results: &[PairResult], pipeline: &Pipeline, path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let field_names: Vec<&str> = pipeline.registry().iter().map(|s| s.name()).collect();

    let mut header = vec!["pair", "status", "run_id"];
    header.extend(field_names.iter().copied());
    header.extend(["missing_required", "error", "processing_time_ms"]);
    wtr.write_record(&header)?;

    for r in results {
        let mut record: Vec<String> = vec![r.stem.clone()];

        match &r.result {
            Some(result) => {
                let missing = result.missing_required();
                let status = if missing.is_empty() { "ok" } else { "incomplete" };
                record.push(status.to_string());
                record.push(result.metadata.run_id.clone());
                for name in &field_names {
                    record.push(
                        result
                            .field(name)
                            .and_then(|f| f.value.as_ref())
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    );
                }
                record.push(missing.join(";"));
                record.push(String::new());
            }
            None => {
                record.push("error".to_string());
                record.push(String::new());
                record.extend(field_names.iter().map(|_| String::new()));
                record.push(String::new());
                record.push(r.error.clone().unwrap_or_default());
            }
        }

        record.push(r.processing_time_ms.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
