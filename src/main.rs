/*!
 * Command-line interface for FileMerge
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;

use filemerge::config::{Args, Config};
use filemerge::merge::Merger;
use filemerge::report::{MergeReport, Reporter};

fn main() -> ExitCode {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> filemerge::Result<()> {
    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        eprintln!("Warning: Failed to set thread pool size: {}", e);
    }

    // Create progress bar with advanced Unicode styling
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("🧩 Merging");
    progress.set_message(format!(
        "📂 Collecting files under {}",
        config.working_dir.display()
    ));

    let merger = Merger::new(config.clone(), Arc::new(progress.clone()))?;

    // Time collection, rendering and writing together
    let start_time = Instant::now();
    merger.run()?;
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare the merge report
    let stats = merger.get_statistics();
    let merge_report = MergeReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        files_merged: stats.files_merged,
        binary_files: stats.binary_files,
        read_errors: stats.read_errors,
        skipped_includes: stats.skipped_includes,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(config.report_format);
    reporter.print_report(&merge_report);

    Ok(())
}
