use crate::constants::SourceFormat;
use crate::error::{Result, TranscodeError};
use crate::report::{Reporter, RunTotals};
use crate::transcode::{transcode, ImageTask, TranscodeOptions};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;
use walkdir::WalkDir;

/// True when the filename carries one of the recognized input extensions.
/// Only the extension is consulted; the file contents are the transcoder's
/// problem.
pub fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
        .is_some()
}

/// Collects the eligible files sitting directly inside `input`. Files in
/// subdirectories are not considered, and the returned order carries no
/// guarantee.
pub fn collect_eligible_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() && is_eligible(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Runs the whole batch: enumerate eligible files, recompress each on a
/// fixed-size worker pool, and stream every result to the reporter in
/// completion order. A single file's failure never aborts the rest; only a
/// setup failure (the output directory cannot be created) is fatal.
pub fn batch_transcode(
    input: &Path,
    output: &Path,
    options: &TranscodeOptions,
    threads: Option<usize>,
) -> Result<RunTotals> {
    fs::create_dir_all(output).map_err(|e| TranscodeError::Setup {
        path: output.to_path_buf(),
        source: e,
    })?;

    let start_time = Instant::now();

    let files = collect_eligible_files(input)?;
    let total_files = files.len();

    if total_files == 0 {
        println!("⚠️  No image files found in {:?}", input);
        return Ok(RunTotals::default());
    }

    println!("🚀 Starting batch compression...");
    println!("📁 Input: {:?}", input);
    println!("📁 Output: {:?}", output);
    println!("📊 Found {} image files to process", total_files);

    let worker_count = threads
        .unwrap_or_else(num_cpus::get)
        .clamp(1, total_files);
    println!("⚙️  Using {} parallel workers", worker_count);

    let pool = ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .build()
        .expect("Failed to build Rayon thread pool");

    let progress = ProgressBar::new(total_files as u64);
    progress.set_style(ProgressStyle::default_bar());

    // One sender clone per task; each worker sends exactly one result, so
    // the drain below sees as many results as there were submissions and
    // the channel closes once the last worker is done.
    let (tx, rx) = mpsc::channel();
    for path in files {
        let task = ImageTask::new(path, output.to_path_buf(), options.quality);
        let tx = tx.clone();
        pool.spawn(move || {
            let _ = tx.send(transcode(&task));
        });
    }
    drop(tx);

    // Results arrive in completion order, not submission order. Ingestion
    // happens only on this thread, which keeps RunTotals single-writer.
    let mut reporter = Reporter::new();
    for result in rx {
        reporter.on_result(&result);
        progress.inc(1);
    }
    progress.finish_with_message("✅ Batch compression complete");

    reporter.print_summary();
    println!("  ⏱️  Total time: {:.2?}", start_time.elapsed());

    Ok(reporter.into_totals())
}
