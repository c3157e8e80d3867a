/*!
 * Command-line interface for Code2Summarize
 */

use std::fs;
use std::io;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use code2summarize::clipboard;
use code2summarize::config::{Args, Config};
use code2summarize::error::Result;
use code2summarize::report::{Reporter, ScanReport};
use code2summarize::summarizer::{summary_output_path, Summarizer};
use code2summarize::utils::count_files;

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(
            shell,
            &mut Args::command(),
            "code2summarize",
            &mut io::stdout(),
        );
        return Ok(());
    }

    let config = Config::from_args(args)?;
    config.validate()?;

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Summarizing");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // The pre-count is best-effort; the run itself recomputes nothing
    // from it.
    let skip = fs::canonicalize(&config.target_dir)
        .ok()
        .and_then(|root| summary_output_path(&root).ok());
    match count_files(&config.target_dir, &config.filter, skip.as_deref()) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} files to process", count));
            progress.set_length(count);
        }
        Err(e) => log::warn!("failed to count files: {e}"),
    }

    let summarizer = Summarizer::new(config.clone(), progress.clone());

    let start_time = Instant::now();
    let summary = summarizer.run()?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();
    log::info!("wrote {}", summary.output_file.display());

    if config.clip {
        match fs::read_to_string(&summary.output_file) {
            Ok(document) => {
                if let Err(e) = clipboard::copy_to_clipboard(&document) {
                    log::warn!("failed to copy output to clipboard: {e}");
                }
            }
            Err(e) => log::warn!("failed to re-read output for clipboard: {e}"),
        }
    }

    let output_size = fs::metadata(&summary.output_file)
        .map(|m| m.len())
        .unwrap_or(0);
    let statistics = summary.statistics;
    let report = ScanReport {
        output_file: summary.output_file.display().to_string(),
        duration,
        files_processed: statistics.files_processed,
        total_lines: statistics.total_lines,
        total_chars: statistics.total_chars,
        output_size,
        file_details: statistics.file_details,
    };

    let reporter = Reporter::new(config.report);
    reporter.print_report(&report);

    Ok(())
}
