use crate::transcode::TranscodeResult;
use crate::utils::{format_size, savings_percent};

/// Aggregate outcome of one batch run. Owned by the [`Reporter`] and only
/// ever mutated from the thread draining the results channel, so no
/// synchronization is needed on top of that discipline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub total_original_bytes: u64,
    pub total_compressed_bytes: u64,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunTotals {
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn savings_percent(&self) -> f64 {
        savings_percent(self.total_original_bytes, self.total_compressed_bytes)
    }
}

/// Consumes task results as they complete, prints the per-file outcome and
/// keeps the running totals. Failed files are counted but contribute
/// nothing to the byte totals, so the summary is never distorted by them.
#[derive(Debug, Default)]
pub struct Reporter {
    totals: RunTotals,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_result(&mut self, result: &TranscodeResult) {
        match result {
            TranscodeResult::Done {
                filename,
                original_bytes,
                compressed_bytes,
            } => {
                println!(
                    "{}: original size: {}, compressed size: {}",
                    filename,
                    format_size(*original_bytes),
                    format_size(*compressed_bytes)
                );
                self.totals.total_original_bytes += original_bytes;
                self.totals.total_compressed_bytes += compressed_bytes;
                self.totals.succeeded += 1;
            }
            TranscodeResult::Failed { filename, error } => {
                eprintln!("{}: failed ({})", filename, error);
                self.totals.failed += 1;
            }
        }
    }

    pub fn totals(&self) -> RunTotals {
        self.totals
    }

    pub fn into_totals(self) -> RunTotals {
        self.totals
    }

    pub fn summary(&self) -> String {
        format!(
            "\n📊 Batch Summary:\n  \
             📦 Total original size: {}\n  \
             📉 Total compressed size: {}\n  \
             🎯 Overall savings: {:.1}%\n  \
             ✅ Succeeded: {}\n  \
             ❌ Failed: {}",
            format_size(self.totals.total_original_bytes),
            format_size(self.totals.total_compressed_bytes),
            self.totals.savings_percent(),
            self.totals.succeeded,
            self.totals.failed
        )
    }

    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranscodeError;

    fn done(filename: &str, original: u64, compressed: u64) -> TranscodeResult {
        TranscodeResult::Done {
            filename: filename.to_string(),
            original_bytes: original,
            compressed_bytes: compressed,
        }
    }

    fn failed(filename: &str) -> TranscodeResult {
        TranscodeResult::Failed {
            filename: filename.to_string(),
            error: TranscodeError::Read(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )),
        }
    }

    #[test]
    fn test_accumulates_successes() {
        let mut reporter = Reporter::new();
        reporter.on_result(&done("a.jpg", 1000, 400));
        reporter.on_result(&done("b.png", 2000, 600));

        let totals = reporter.totals();
        assert_eq!(totals.total_original_bytes, 3000);
        assert_eq!(totals.total_compressed_bytes, 1000);
        assert_eq!(totals.succeeded, 2);
        assert_eq!(totals.failed, 0);
        assert_eq!(totals.processed(), 2);
    }

    #[test]
    fn test_failures_do_not_touch_byte_totals() {
        let mut reporter = Reporter::new();
        reporter.on_result(&done("a.jpg", 1000, 400));
        reporter.on_result(&failed("b.jpg"));

        let totals = reporter.totals();
        assert_eq!(totals.total_original_bytes, 1000);
        assert_eq!(totals.total_compressed_bytes, 400);
        assert_eq!(totals.succeeded, 1);
        assert_eq!(totals.failed, 1);
        assert_eq!(totals.processed(), 2);
    }

    #[test]
    fn test_empty_run_totals() {
        let reporter = Reporter::new();
        assert_eq!(reporter.totals(), RunTotals::default());
        assert_eq!(reporter.totals().savings_percent(), 0.0);
    }

    #[test]
    fn test_summary_renders_formatted_sizes_and_counts() {
        let mut reporter = Reporter::new();
        reporter.on_result(&done("a.jpg", 2048, 1024));
        reporter.on_result(&failed("b.jpg"));

        let summary = reporter.summary();
        assert!(summary.contains("Total original size: 2.00 KB"));
        assert!(summary.contains("Total compressed size: 1.00 KB"));
        assert!(summary.contains("Succeeded: 1"));
        assert!(summary.contains("Failed: 1"));
        assert!(summary.contains("50.0%"));
    }
}
