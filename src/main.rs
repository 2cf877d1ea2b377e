//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::Report;
use chatlens::format::write_report;
use chatlens::parser::ExportFormat;
use chatlens::session::AnalysisSession;
use chatlens::snapshot::FileSnapshotStore;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the verbosity flags.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let store = FileSnapshotStore::new(&args.snapshot_dir);
    let mut session = AnalysisSession::with_config(store, args.analyzer_config());

    // Resolve the report format up front so a bad extension fails before parsing
    let report_format = args.report_format().transpose()?;

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match &args.input {
        Some(input) => {
            let format: ExportFormat = args.format.into();
            println!("📖 Format:  {}", args.format);
            println!("📂 Input:   {}", input.display());
            println!();
            println!("⏳ Parsing {}...", format);

            let parse_start = Instant::now();
            let count = session.ingest_file(input, format)?;
            println!(
                "   Found {} messages ({:.2}s)",
                count,
                parse_start.elapsed().as_secs_f64()
            );
        }
        None => {
            println!("💾 Snapshot: {}", args.snapshot_dir.display());
            println!();
            if !session.restore()? {
                return Err(ChatlensError::invalid_input(
                    "No input file given and no saved transcript to re-analyze",
                    None,
                ));
            }
            println!("♻️  Restored {} messages", session.messages().len());
        }
    }

    let report = match session.analyze() {
        Ok(report) => report,
        Err(ChatlensError::EmptyResult) => {
            println!();
            println!("⚠️  No messages recognized. Check that --format matches the export.");
            return Err(ChatlensError::EmptyResult);
        }
        Err(e) => return Err(e),
    };

    print_report(&report);

    if let (Some(output), Some(format)) = (&args.output, report_format) {
        println!();
        println!("💾 Writing {}...", format);
        write_report(&report, output, format)?;
        println!("✅ Report saved to {}", output.display());
    }

    println!();
    println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_report(report: &Report) {
    let summary = &report.summary;

    println!();
    println!("📊 Summary:");
    println!("   Messages:       {}", summary.total_messages);
    println!("   Most active:    {}", summary.most_active_user);
    println!("   Most positive:  {}", summary.most_positive_user);
    println!("   Period:         {}", summary.period);

    println!();
    println!("👥 Users:");
    for row in &report.users {
        println!(
            "   {:<20} {:>6} msgs  {:>4} firsts  sentiment {:>5.2}",
            row.sender, row.messages, row.first_messages, row.avg_sentiment
        );
    }

    if let Some(peak) = report.active_hours.iter().rev().max_by_key(|b| b.count) {
        println!();
        println!("🕐 Busiest hour:  {} ({} messages)", peak.label, peak.count);
    }

    println!();
    println!("🏆 Awards:");
    for award in &report.awards {
        println!("   {} {:<16} {}", award.kind.icon(), award.title, award.recipient);
    }

    println!();
    if report.top_words.is_empty() {
        println!("🔤 Not enough data for top words");
    } else {
        println!("🔤 Top words:");
        for (rank, word) in report.top_words.iter().enumerate() {
            println!("   {:>2}. {:<20} {}", rank + 1, word.word, word.count);
        }
    }
}
