mod cli;
mod error;
mod services;
mod types;

use anyhow::Context;
use clap::Parser;
use cli::{CleanArgs, Cli, Commands, ConvertArgs, InspectArgs};
use error::Result;
use services::{IndexTransformer, OutputCleaner};
use tracing::{error, info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Convert(args) => handle_convert_command(args).await,
        Commands::Inspect(args) => handle_inspect_command(args).await,
        Commands::Clean(args) => handle_clean_command(args).await,
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_convert_command(args: &ConvertArgs) -> Result<()> {
    info!(
        "Converting index {} into {}",
        args.input_file.display(),
        args.output_dir.display()
    );

    // Clear markdown files left over from a previous run
    let removed = OutputCleaner::remove_markdown_files(&args.output_dir)?;
    if !removed.is_empty() {
        info!(
            "Removed {} stale markdown files from {}",
            removed.len(),
            args.output_dir.display()
        );
    }

    let transformer = IndexTransformer::new();
    let report = transformer
        .transform_index(&args.input_file, &args.output_dir)
        .await?;

    info!(
        "Wrote {} with {} chapters:",
        report.index_file.display(),
        report.chapter_files.len()
    );
    for chapter_file in &report.chapter_files {
        info!("  - {}", chapter_file.display());
    }
    if !report.attachment_files.is_empty() {
        info!("Copied {} attachments", report.attachment_files.len());
    }

    if let Some(json_path) = &args.json_output {
        let json_content = serde_json::to_string_pretty(&report)
            .context("Failed to serialize conversion report")?;

        tokio::fs::write(json_path, json_content)
            .await
            .context("Failed to write JSON report file")?;

        info!("Conversion report written to: {}", json_path.display());
    }

    info!("Conversion completed successfully!");
    Ok(())
}

async fn handle_inspect_command(args: &InspectArgs) -> Result<()> {
    info!("Inspecting index: {}", args.input_file.display());

    let transformer = IndexTransformer::new();
    let summary = transformer.summarize_index(&args.input_file).await?;

    println!("\n=== Index '{}' ===", summary.source);
    if let Some(title) = &summary.title {
        println!("Title: {}", title);
    }
    println!("Total lines: {}", summary.total_lines);
    println!("Chapters: {}", summary.chapters.len());

    if args.detailed {
        println!("\nChapter Details:");
        for (idx, chapter) in summary.chapters.iter().enumerate() {
            println!(
                "  {}. {} [{}]({}) -> {}",
                idx + 1,
                chapter.name,
                chapter.link_text,
                chapter.link_target,
                chapter.target_filename
            );
        }
    }

    if let Some(json_path) = &args.json_output {
        let json_content = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize index summary")?;

        tokio::fs::write(json_path, json_content)
            .await
            .context("Failed to write JSON summary file")?;

        info!("Index summary written to: {}", json_path.display());
    }

    Ok(())
}

async fn handle_clean_command(args: &CleanArgs) -> Result<()> {
    info!("Cleaning output directory: {}", args.output_dir.display());

    let removed = OutputCleaner::remove_markdown_files(&args.output_dir)?;

    println!("\n=== Cleanup Summary ===");
    println!("Removed {} markdown files", removed.len());
    for path in &removed {
        println!("  - {}", path.display());
    }

    Ok(())
}
