use anyhow::{bail, Context};
use clap::Parser;
use minbucket::{BalanceRequest, BalancerBuilder, Document, FromDocument, LengthMetric};
use std::path::PathBuf;

/// Distribute a list of labels evenly across a fixed number of buckets
#[derive(Parser)]
#[command(name = "minbucket", version)]
struct Cli {
    /// JSON request file: {"labels": [...], "columns": N, "metric": "chars"}
    input: PathBuf,

    /// Override the bucket count from the request
    #[arg(long)]
    columns: Option<usize>,

    /// Emit the buckets as JSON instead of the text layout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Step 1: Decode the request
    if !cli.json {
        println!("Step 1: Decoding request from {}...", cli.input.display());
    }
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let doc = Document::parse(&raw)?;
    let request = BalanceRequest::from_document(&doc);

    let Some(metric) = LengthMetric::from_name(&request.metric) else {
        bail!("Unknown length metric: {:?} (expected \"chars\" or \"bytes\")", request.metric);
    };

    let bucket_count = cli.columns.unwrap_or(request.columns as usize);
    if !cli.json {
        println!(
            "✓ Decoded {} labels, {} buckets, {:?} metric\n",
            request.labels.len(),
            bucket_count,
            metric
        );
    }

    // Step 2: Balance
    if !cli.json {
        println!("Step 2: Balancing...");
    }
    let balancer = BalancerBuilder::new()
        .bucket_count(bucket_count)
        .metric(metric)
        .build();
    let buckets = balancer.balance(request.labels);
    if !cli.json {
        println!("✓ Balancing complete\n");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    for (i, bucket) in buckets.iter().enumerate() {
        println!("Bucket {} ({} total):", i, bucket.total_len);
        for item in &bucket.items {
            println!("  {}", item);
        }
    }

    let max = buckets.iter().map(|b| b.total_len).max().unwrap_or(0);
    let min = buckets.iter().map(|b| b.total_len).min().unwrap_or(0);
    println!("\nSpread: max {} / min {} (diff {})", max, min, max - min);

    Ok(())
}
