//! cutplan - CLI tool to compute cutting plans for fixed-length stock material.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cutplan_core::config::{DEFAULT_CUT_PRICE, DEFAULT_KERF_WIDTH, DEFAULT_UNIT_PRICE};
use cutplan_core::{
    compute_cut_plan, decode_share_params, encode_share_params, generate_report,
    parse_part_lengths, parse_part_lengths_from_file, validate, RawCutRequest,
};

/// Compute an economical cutting plan for fixed-length stock material.
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Part lengths in mm, comma separated (e.g. "600,400,300")
    parts: Vec<String>,

    /// Stock length in mm
    #[arg(short = 'l', long)]
    stock_length: Option<f64>,

    /// Price per stock unit consumed
    #[arg(short = 'u', long, default_value_t = DEFAULT_UNIT_PRICE)]
    unit_price: f64,

    /// Price per saw cut performed
    #[arg(short = 'c', long, default_value_t = DEFAULT_CUT_PRICE)]
    cut_price: f64,

    /// Kerf width in mm (material lost per cut)
    #[arg(short = 'k', long, default_value_t = DEFAULT_KERF_WIDTH)]
    kerf: f64,

    /// Read the part list from a file (same comma/newline format)
    #[arg(long)]
    parts_file: Option<PathBuf>,

    /// Take all inputs from a share-parameter string
    /// (e.g. "ml=1000&up=100&cp=10&bw=5&p=600,400")
    #[arg(short, long)]
    query: Option<String>,

    /// Also print the share-parameter string for the computed plan
    #[arg(long)]
    share: bool,

    /// Output the plan as JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Validate only, don't compute a plan
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Assemble the raw request from the command line.
fn build_raw_request(args: &Args) -> Result<RawCutRequest> {
    if let Some(query) = &args.query {
        return decode_share_params(query).context("Failed to decode share parameters");
    }

    let part_lengths = match &args.parts_file {
        Some(path) => parse_part_lengths_from_file(path)
            .with_context(|| format!("Failed to read part list from {}", path.display()))?,
        None => parse_part_lengths(&args.parts.join(",")).context("Failed to parse part list")?,
    };

    // A missing stock length stays NaN so validation reports it by name.
    Ok(RawCutRequest::new(
        args.stock_length.unwrap_or(f64::NAN),
        args.unit_price,
        args.cut_price,
        args.kerf,
        part_lengths,
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let raw = build_raw_request(&args)?;

    let request = match validate(&raw) {
        Ok(request) => request,
        Err(messages) => {
            for message in &messages {
                error!("{}", message);
            }
            anyhow::bail!("Validation failed");
        }
    };

    info!(
        "Planning {} part(s) on {} mm stock",
        request.part_count(),
        request.stock_length
    );

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let plan = compute_cut_plan(request).context("Failed to compute cutting plan")?;

    // Debug output
    if args.json {
        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", generate_report(&plan));

    if args.share {
        println!();
        println!("Share parameters: {}", encode_share_params(&plan.request));
    }

    Ok(())
}
