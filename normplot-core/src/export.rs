use crate::report::ReportSummary;
use normplot_common::{NormplotError, Result};
use std::io::Write;

// --- headless summary output ---

pub fn print_summary(summary: &ReportSummary) {
    let stdout = std::io::stdout();
    // a closed stdout pipe is not worth failing the run for
    let _ = write_summary(&mut stdout.lock(), summary);
}

pub fn write_summary(out: &mut impl Write, summary: &ReportSummary) -> std::io::Result<()> {
    writeln!(out, "{:<16} {}", "Report:", summary.path.display())?;
    writeln!(out, "{:<16} {}", "Values:", summary.sample_size)?;
    writeln!(out, "{:<16} {}", "Bins:", summary.bins)?;
    writeln!(out, "{:<16} {:.4}", "Mean:", summary.mean)?;
    writeln!(out, "{:<16} {:.4}", "Std dev:", summary.std_dev)?;
    writeln!(out, "{:<16} {} bytes", "Size:", summary.bytes)?;
    Ok(())
}

// --- machine-readable summary for build pipelines ---

pub fn summary_json(summary: &ReportSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| NormplotError::Other(e.to_string()))
}
